//! Core data structures for API requests and responses.

mod collage;
mod document;
mod harvest;
mod item;

pub use collage::{CollageOptions, CollageReport};
pub use document::{DocumentSummary, ResultGroup, ResultPage, SearchResults};
pub use harvest::{DownloadFailure, DownloadReport, Harvest, HarvestOptions};
pub use item::ItemDetail;
