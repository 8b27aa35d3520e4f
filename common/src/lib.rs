//! Art Vision Common Library
//!
//! CLIと各フロントエンドで共有される型とカタログロジック

pub mod types;
pub mod error;
pub mod filter;
pub mod catalog;
pub mod classifier;
pub mod report;
pub mod grading;
pub mod insights;
pub mod browser;

pub use types::{
    Analysis, Artwork, ConservationStatus, ImageAttachment, SubmissionForm, SyntheticReport,
};
pub use error::{Error, Result};
pub use filter::{filter_artworks, sort_artworks, ArtworkFilter, Facet, FacetOptions, SortKey};
pub use catalog::Catalog;
pub use classifier::{classify, match_rule, Classification, FixedJitter, Jitter, RandJitter, StyleRule};
pub use report::assemble;
pub use grading::{format_value, AuthenticityStatus, ConfidenceBand};
pub use insights::CollectionInsights;
pub use browser::BrowserState;
