//! Input processing module
//! Handles file detection and text extraction from PDF and DOCX documents

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
