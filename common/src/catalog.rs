//! 作品カタログ
//!
//! 作品リストと解析リストを保持し、artworkIdによる解析の参照を提供する。
//! 構築時に一意性・参照整合性・スコア範囲を検証するため、参照結果は常に高々1件。

use crate::error::{Error, Result};
use crate::filter::{filter_artworks, sort_artworks, ArtworkFilter, SortKey};
use crate::types::{Analysis, Artwork};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artworks: Vec<Artwork>,
    analyses: Vec<Analysis>,
    analysis_index: HashMap<u32, usize>,
}

impl Catalog {
    /// カタログを構築（整合性チェック付き）
    pub fn new(artworks: Vec<Artwork>, analyses: Vec<Analysis>) -> Result<Self> {
        let mut ids = HashSet::new();
        for artwork in &artworks {
            if !ids.insert(artwork.id) {
                return Err(Error::DuplicateArtwork(artwork.id));
            }
        }

        let mut analysis_index = HashMap::new();
        for (idx, analysis) in analyses.iter().enumerate() {
            if !ids.contains(&analysis.artwork_id) {
                return Err(Error::OrphanAnalysis(analysis.artwork_id));
            }
            if analysis_index.insert(analysis.artwork_id, idx).is_some() {
                return Err(Error::DuplicateAnalysis(analysis.artwork_id));
            }
            for (field, value) in analysis.bounded_fields() {
                if !(0.0..=100.0).contains(&value) {
                    return Err(Error::ScoreOutOfRange {
                        artwork_id: analysis.artwork_id,
                        field,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            artworks,
            analyses,
            analysis_index,
        })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn analyses(&self) -> &[Analysis] {
        &self.analyses
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn artwork(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// 作品IDに対応する解析（未解析ならNone）
    pub fn analysis_for(&self, artwork_id: u32) -> Option<&Analysis> {
        self.analysis_index
            .get(&artwork_id)
            .map(|&idx| &self.analyses[idx])
    }

    /// フィルタ適用
    pub fn filtered(&self, filter: &ArtworkFilter) -> Vec<&Artwork> {
        filter_artworks(&self.artworks, filter)
    }

    /// フィルタ適用 + 並べ替え（Noneならカタログ順）
    pub fn view(&self, filter: &ArtworkFilter, sort: Option<SortKey>) -> Vec<&Artwork> {
        let mut view = self.filtered(filter);
        if let Some(key) = sort {
            sort_artworks(&mut view, key);
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthenticityReport, ConservationStatus};

    fn artwork(id: u32) -> Artwork {
        Artwork {
            id,
            title: format!("Obra {}", id),
            artist: "Artista".to_string(),
            year: 1900,
            period: "Modernism".to_string(),
            dimensions: String::new(),
            location: String::new(),
            value: 0.0,
            description: String::new(),
            image: String::new(),
            conservation: ConservationStatus::Excellent,
            techniques: Vec::new(),
        }
    }

    fn analysis(artwork_id: u32) -> Analysis {
        Analysis {
            artwork_id,
            confidence: 90.0,
            authenticity: AuthenticityReport {
                score: 95.0,
                probability: 93.5,
                indicators: Vec::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_analysis_lookup_found_and_absent() {
        let catalog = Catalog::new(vec![artwork(1), artwork(2)], vec![analysis(2)]).unwrap();

        assert!(catalog.analysis_for(1).is_none());
        assert_eq!(catalog.analysis_for(2).map(|a| a.artwork_id), Some(2));
        assert!(catalog.analysis_for(99).is_none());
    }

    #[test]
    fn test_duplicate_artwork_rejected() {
        let result = Catalog::new(vec![artwork(1), artwork(1)], vec![]);
        assert!(matches!(result, Err(Error::DuplicateArtwork(1))));
    }

    #[test]
    fn test_duplicate_analysis_rejected() {
        let result = Catalog::new(vec![artwork(1)], vec![analysis(1), analysis(1)]);
        assert!(matches!(result, Err(Error::DuplicateAnalysis(1))));
    }

    #[test]
    fn test_orphan_analysis_rejected() {
        let result = Catalog::new(vec![artwork(1)], vec![analysis(5)]);
        assert!(matches!(result, Err(Error::OrphanAnalysis(5))));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let mut bad = analysis(1);
        bad.authenticity.probability = 100.5;
        let result = Catalog::new(vec![artwork(1)], vec![bad]);
        match result {
            Err(Error::ScoreOutOfRange { artwork_id, field, .. }) => {
                assert_eq!(artwork_id, 1);
                assert_eq!(field, "authenticity.probability");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_boundary_scores_accepted() {
        let mut edge = analysis(1);
        edge.composition = 0.0;
        edge.confidence = 100.0;
        assert!(Catalog::new(vec![artwork(1)], vec![edge]).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new(), Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.filtered(&ArtworkFilter::default()).is_empty());
        assert!(catalog.artwork(1).is_none());
    }
}
