pub mod engine;
pub mod extractor;
pub mod fetcher;
pub mod filter;
pub mod markup;
pub mod orderer;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{EntryFragment, KeywordSet, ListingPage, OpportunityRecord};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline};
pub use crate::utils::error::Result;
