//! # DDB Client
//!
//! A client library for the REST API of the Deutsche Digitale Bibliothek
//! (DDB), the German national aggregator for digitised cultural heritage.
//!
//! The entry point is [`DdbClient`]. It translates search URLs copied from
//! the DDB web portal into authenticated API queries, pages through result
//! sets in 100-row batches, resolves item detail records (AIPs) and can
//! persist their source XML or full JSON to disk. Smaller helpers resolve an
//! object to its parent dataset, count the items of a data provider and
//! assemble result thumbnails into an animated collage.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`client`]: the [`DdbClient`] handle, auth token and endpoint set
//! - [`portal`]: portal search URL to API URL translation
//! - [`harvest`]: count probe and paginated harvesting with optional downloads
//! - [`items`]: item detail lookup, dataset resolution and provider counts
//! - [`collage`]: thumbnail collage assembly
//! - [`models`]: request options and typed API responses
//! - [`utils`]: HTTP client wrapper
//!
//! ## Example
//!
//! ```rust,no_run
//! use ddb_client::DdbClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DdbClient::new("my-api-key")?;
//! let api_url = client.portal_to_api(
//!     "https://www.deutsche-digitale-bibliothek.de/searchresults?query=nachlass",
//! )?;
//! println!("{} hits", client.total_results(&api_url).await?);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collage;
pub mod error;
pub mod harvest;
pub mod items;
pub mod models;
pub mod portal;
pub mod utils;

// Re-export commonly used types
pub use client::{DdbClient, Endpoints};
pub use error::DdbError;
pub use models::{DocumentSummary, Harvest, HarvestOptions, ItemDetail};
pub use portal::ApiUrl;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
