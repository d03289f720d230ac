use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Raw markup of a listing page together with the URL it came from.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub url: String,
    pub markup: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Open,
    Closed,
}

/// Serialized markup of one listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFragment {
    pub html: String,
    pub status: EntryStatus,
}

impl EntryFragment {
    pub fn open(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            status: EntryStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == EntryStatus::Open
    }
}

/// Filtering vocabulary. An empty set disables the filter it is given to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Lower-cased copy, used by the case-insensitive content filter.
    pub fn to_lowercase(&self) -> Vec<String> {
        self.0.iter().map(|k| k.to_lowercase()).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub title: String,
    pub body: String,
    pub link: String,
    #[serde(rename = "end-date")]
    pub end_date: String,
    pub city: String,
    pub institute: String,
}
