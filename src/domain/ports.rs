use crate::config::profile::MarkupProfile;
use crate::domain::model::{EntryFragment, KeywordSet, ListingPage, OpportunityRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<ListingPage>;
}

pub trait ConfigProvider: Send + Sync {
    fn url(&self) -> &str;
    fn base_url(&self) -> String;
    fn title_filters(&self) -> &KeywordSet;
    fn content_filters(&self) -> &KeywordSet;
    fn profile(&self) -> &MarkupProfile;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<EntryFragment>>;
    async fn transform(&self, fragments: Vec<EntryFragment>) -> Result<Vec<OpportunityRecord>>;
    async fn order(&self, records: Vec<OpportunityRecord>) -> Result<Vec<OpportunityRecord>>;
}
