//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Duplicate artwork id: {0}")]
    DuplicateArtwork(u32),

    #[error("Duplicate analysis for artwork {0}")]
    DuplicateAnalysis(u32),

    #[error("Analysis refers to unknown artwork {0}")]
    OrphanAnalysis(u32),

    #[error("Score out of range for artwork {artwork_id}: {field} = {value}")]
    ScoreOutOfRange {
        artwork_id: u32,
        field: &'static str,
        value: f64,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
