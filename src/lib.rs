//! Art Vision
//!
//! 美術作品カタログの閲覧と、作品投稿のAI解析シミュレーション

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod source;
pub mod submission;
