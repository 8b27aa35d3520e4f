//! 作品フィルタ
//!
//! 検索語 + 3つのファセット（時代・作家・技法）の合成述語。
//! 入力順を保ったまま該当作品を返す純粋関数で、隠れた状態は持たない。

use crate::types::Artwork;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// ファセット選択UIの「すべて」を表す値
pub const ALL_SENTINEL: &str = "all";

/// ファセット種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Period,
    Artist,
    Technique,
}

/// 検索語 + ファセット選択
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtworkFilter {
    pub query: String,
    pub period: Option<String>,
    pub artist: Option<String>,
    pub technique: Option<String>,
}

impl ArtworkFilter {
    /// 検索語のみのフィルタ
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// ファセットを設定（空文字または "all" で解除）
    pub fn set_facet(&mut self, facet: Facet, value: &str) {
        let value = if value.is_empty() || value == ALL_SENTINEL {
            None
        } else {
            Some(value.to_string())
        };

        match facet {
            Facet::Period => self.period = value,
            Facet::Artist => self.artist = value,
            Facet::Technique => self.technique = value,
        }
    }

    /// 全ファセットを解除（検索語は残す）
    pub fn clear_facets(&mut self) {
        self.period = None;
        self.artist = None;
        self.technique = None;
    }

    /// 有効なファセット数
    pub fn active_facet_count(&self) -> usize {
        [&self.period, &self.artist, &self.technique]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    /// 作品が条件をすべて満たすか
    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.matches_query(artwork)
            && self.period.as_deref().map_or(true, |p| artwork.period == p)
            && self.artist.as_deref().map_or(true, |a| artwork.artist == a)
            && self
                .technique
                .as_deref()
                .map_or(true, |t| artwork.techniques.iter().any(|x| x == t))
    }

    fn matches_query(&self, artwork: &Artwork) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let q = self.query.to_lowercase();
        artwork.title.to_lowercase().contains(&q)
            || artwork.artist.to_lowercase().contains(&q)
            || artwork.period.to_lowercase().contains(&q)
    }
}

/// 条件に合う作品を元の順序のまま返す
pub fn filter_artworks<'a>(artworks: &'a [Artwork], filter: &ArtworkFilter) -> Vec<&'a Artwork> {
    artworks.iter().filter(|a| filter.matches(a)).collect()
}

/// ファセットの選択肢（重複除去・ソート済み）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub periods: Vec<String>,
    pub artists: Vec<String>,
    pub techniques: Vec<String>,
}

impl FacetOptions {
    pub fn from_artworks(artworks: &[Artwork]) -> Self {
        let periods: BTreeSet<&str> = artworks.iter().map(|a| a.period.as_str()).collect();
        let artists: BTreeSet<&str> = artworks.iter().map(|a| a.artist.as_str()).collect();
        let techniques: BTreeSet<&str> = artworks
            .iter()
            .flat_map(|a| a.techniques.iter().map(String::as_str))
            .collect();

        Self {
            periods: periods.into_iter().map(String::from).collect(),
            artists: artists.into_iter().map(String::from).collect(),
            techniques: techniques.into_iter().map(String::from).collect(),
        }
    }
}

/// ギャラリーの並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// 制作年の新しい順
    Recent,
    Name,
    Artist,
    Period,
    /// 評価額の高い順
    Value,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(SortKey::Recent),
            "name" | "title" => Ok(SortKey::Name),
            "artist" => Ok(SortKey::Artist),
            "period" => Ok(SortKey::Period),
            "value" => Ok(SortKey::Value),
            _ => Err(format!(
                "Unknown sort key: {}. Use recent, name, artist, period, or value",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Recent => write!(f, "recent"),
            SortKey::Name => write!(f, "name"),
            SortKey::Artist => write!(f, "artist"),
            SortKey::Period => write!(f, "period"),
            SortKey::Value => write!(f, "value"),
        }
    }
}

/// 安定ソート（同値は元の順序を維持）
pub fn sort_artworks(artworks: &mut [&Artwork], key: SortKey) {
    match key {
        SortKey::Recent => artworks.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Name => artworks.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Artist => artworks.sort_by(|a, b| a.artist.cmp(&b.artist)),
        SortKey::Period => artworks.sort_by(|a, b| a.period.cmp(&b.period)),
        SortKey::Value => artworks.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
}
