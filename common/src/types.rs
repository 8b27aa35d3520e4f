//! カタログと解析結果の型定義
//!
//! CLIと各フロントエンドで共有される型:
//! - Artwork: 収蔵作品（起動時に一度だけ読み込み、以後不変）
//! - Analysis: 作品ごとの事前計算済みAI解析（artworkIdで参照）
//! - SubmissionForm: 投稿フォームの入力
//! - SyntheticReport: 投稿に対して生成される表示専用レポート

use serde::{Deserialize, Serialize};

/// 保存状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConservationStatus {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
    #[serde(rename = "Precário")]
    Poor,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 4] = [
        ConservationStatus::Excellent,
        ConservationStatus::Good,
        ConservationStatus::Fair,
        ConservationStatus::Poor,
    ];

    /// データ上のラベル
    pub fn label(&self) -> &'static str {
        match self {
            ConservationStatus::Excellent => "Excelente",
            ConservationStatus::Good => "Bom",
            ConservationStatus::Fair => "Regular",
            ConservationStatus::Poor => "Precário",
        }
    }
}

impl std::fmt::Display for ConservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 収蔵作品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub period: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub conservation: ConservationStatus,
    #[serde(default)]
    pub techniques: Vec<String>,
}

/// ラベル + 信頼度（0-100）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedLabel {
    pub detected: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticityReport {
    pub score: f64,
    pub probability: f64,
    #[serde(default)]
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConservationReport {
    pub status: String,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub estimated: f64,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// 作品ごとの事前計算済みAI解析
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub artwork_id: u32,
    pub confidence: f64,
    pub style: DetectedLabel,
    pub period: DetectedLabel,
    pub authenticity: AuthenticityReport,
    #[serde(default)]
    pub techniques: Vec<String>,
    #[serde(default)]
    pub color_palette: Vec<String>,
    pub composition: f64,
    pub conservation: ConservationReport,
    #[serde(rename = "value")]
    pub valuation: Valuation,
    /// 処理時間（秒）
    pub processing_time: f64,
    #[serde(default)]
    pub observations: String,
}

impl Analysis {
    /// [0,100]に収まるべきフィールド一覧
    pub fn bounded_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("confidence", self.confidence),
            ("style.confidence", self.style.confidence),
            ("period.confidence", self.period.confidence),
            ("authenticity.score", self.authenticity.score),
            ("authenticity.probability", self.authenticity.probability),
            ("composition", self.composition),
        ]
    }
}

/// 添付画像
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    pub file_name: String,
    pub path: String,
}

/// 投稿フォーム
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionForm {
    pub title: String,
    pub artist_name: String,
    pub description: String,
    pub submitted_by: String,
    pub submitted_email: String,
    pub image: Option<ImageAttachment>,
}

impl SubmissionForm {
    /// 投稿完了後にフォームを初期状態へ戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 投稿に対する合成レポート（表示専用、カタログには反映しない）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticReport {
    pub confidence: f64,
    pub style: String,
    pub period: String,
    pub techniques: Vec<String>,
    pub authenticity: f64,
    pub color_palette: Vec<String>,
    pub observations: String,
}
