pub mod client;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod price;
pub mod store;
pub mod types;

pub use client::FeedClient;
pub use controller::{
    ControllerState, ScrapeConfig, ScrapeController, ScrapeReport, ScrapeRunState, StopReason,
};
pub use error::ScraperError;
pub use fetch::{PageFetcher, PageOutcome};
pub use normalize::{normalize_variant, NormalizeOutcome};
pub use store::VariantStore;
pub use types::{ProductsPage, RawPrice, RawProduct, RawTags, RawVariant};
