use thiserror::Error;

/// 投稿フォームの入力エラー（解析開始前に検出）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("必須項目が未入力です: {0}")]
    MissingField(&'static str),

    #[error("メールアドレスの形式が不正です: {0}")]
    InvalidEmail(String),

    #[error("作品の画像を選択してください")]
    MissingImage,

    #[error("画像形式に対応していません: {0}")]
    UnsupportedImage(String),
}

#[derive(Error, Debug)]
pub enum ArtVisionError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] art_vision_common::Error),

    #[error("入力エラー: {0}")]
    Validation(#[from] ValidationError),

    #[error("解析処理中です。完了するまで再投稿できません")]
    SubmissionInFlight,

    #[error("作品の処理中にエラーが発生しました。もう一度お試しください ({0})")]
    Processing(String),

    #[error("作品が見つかりません: ID {0}")]
    ArtworkNotFound(u32),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ArtVisionError>;
