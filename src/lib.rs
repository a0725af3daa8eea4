//! CV evaluator library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod storage;
pub mod validation;

pub use config::Config;
pub use error::{CvEvaluatorError, Result};
