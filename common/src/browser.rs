//! ブラウズ状態
//!
//! 検索語・ファセット・選択中の作品を1か所に持つ状態コンテナ。
//! 上位のコントローラが所有し、各ビューには参照で渡す。

use crate::catalog::Catalog;
use crate::filter::{ArtworkFilter, Facet, SortKey};
use crate::types::{Analysis, Artwork};

#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    pub filter: ArtworkFilter,
    /// Noneならカタログ順
    pub sort: Option<SortKey>,
    selected: Option<u32>,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_facet(&mut self, facet: Facet, value: &str) {
        self.filter.set_facet(facet, value);
    }

    pub fn clear_facets(&mut self) {
        self.filter.clear_facets();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    pub fn select(&mut self, artwork_id: u32) {
        self.selected = Some(artwork_id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    /// 現在の条件で表示される作品
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Artwork> {
        catalog.view(&self.filter, self.sort)
    }

    pub fn selected_artwork<'a>(&self, catalog: &'a Catalog) -> Option<&'a Artwork> {
        self.selected.and_then(|id| catalog.artwork(id))
    }

    /// 選択中の作品の解析（未選択・未解析ならNone）
    pub fn selected_analysis<'a>(&self, catalog: &'a Catalog) -> Option<&'a Analysis> {
        self.selected.and_then(|id| catalog.analysis_for(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Analysis, ConservationStatus};

    fn catalog() -> Catalog {
        let artworks = (1..=3)
            .map(|id| Artwork {
                id,
                title: format!("Obra {}", id),
                artist: if id == 2 { "Monet" } else { "Vermeer" }.to_string(),
                year: 1800 + id as i32,
                period: "Baroque".to_string(),
                dimensions: String::new(),
                location: String::new(),
                value: 0.0,
                description: String::new(),
                image: String::new(),
                conservation: ConservationStatus::Good,
                techniques: Vec::new(),
            })
            .collect();
        let analyses = vec![Analysis {
            artwork_id: 3,
            ..Default::default()
        }];
        Catalog::new(artworks, analyses).unwrap()
    }

    #[test]
    fn test_no_selection_has_no_analysis() {
        let catalog = catalog();
        let state = BrowserState::new();
        assert!(state.selected_artwork(&catalog).is_none());
        assert!(state.selected_analysis(&catalog).is_none());
    }

    #[test]
    fn test_selection_lookup() {
        let catalog = catalog();
        let mut state = BrowserState::new();

        state.select(1);
        assert_eq!(state.selected_artwork(&catalog).map(|a| a.id), Some(1));
        assert!(state.selected_analysis(&catalog).is_none());

        state.select(3);
        assert_eq!(state.selected_analysis(&catalog).map(|a| a.artwork_id), Some(3));

        state.clear_selection();
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_visible_recomputed_on_change() {
        let catalog = catalog();
        let mut state = BrowserState::new();
        state.set_sort(Some(SortKey::Name));
        assert_eq!(state.visible(&catalog).len(), 3);

        state.set_facet(Facet::Artist, "Vermeer");
        let ids: Vec<u32> = state.visible(&catalog).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.set_query("obra 3");
        assert_eq!(state.visible(&catalog).len(), 1);

        state.clear_facets();
        state.set_query("");
        assert_eq!(state.visible(&catalog).len(), 3);
    }
}
