//! コレクション統計

use crate::catalog::Catalog;
use crate::types::ConservationStatus;
use serde::Serialize;
use std::collections::BTreeMap;

/// 区分ごとの件数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub label: String,
    pub count: usize,
    /// 全作品に対する割合（%）
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInsights {
    pub total_artworks: usize,
    pub total_value: f64,
    pub analyses: usize,
    /// 解析済み作品の真正性スコア平均（解析なしならNone）
    pub average_authenticity: Option<f64>,
    pub periods: Vec<Distribution>,
    pub conservation: Vec<Distribution>,
}

impl CollectionInsights {
    pub fn compute(catalog: &Catalog) -> Self {
        let artworks = catalog.artworks();
        let total = artworks.len();
        let percentage = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        let mut period_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for artwork in artworks {
            *period_counts.entry(artwork.period.as_str()).or_default() += 1;
        }
        let periods = period_counts
            .into_iter()
            .map(|(label, count)| Distribution {
                label: label.to_string(),
                count,
                percentage: percentage(count),
            })
            .collect();

        let conservation = ConservationStatus::ALL
            .iter()
            .map(|status| {
                let count = artworks.iter().filter(|a| a.conservation == *status).count();
                Distribution {
                    label: status.label().to_string(),
                    count,
                    percentage: percentage(count),
                }
            })
            .collect();

        let analyses = catalog.analyses();
        let average_authenticity = if analyses.is_empty() {
            None
        } else {
            let sum: f64 = analyses.iter().map(|a| a.authenticity.score).sum();
            Some(sum / analyses.len() as f64)
        };

        Self {
            total_artworks: total,
            total_value: artworks.iter().map(|a| a.value).sum(),
            analyses: analyses.len(),
            average_authenticity,
            periods,
            conservation,
        }
    }
}
