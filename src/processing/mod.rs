//! Text analysis, field extraction and scoring

pub mod analyzer;
pub mod contact;
pub mod experience;
pub mod linguistics;
pub mod patterns;
pub mod scorer;
pub mod sections;
pub mod skills;
pub mod text_processor;

pub use analyzer::Evaluator;
pub use patterns::PatternRegistry;
