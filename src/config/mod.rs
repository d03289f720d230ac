#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;
pub mod settings;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::KeywordSet;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use profile::MarkupProfile;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const DEFAULT_URL: &str = "https://fapesp.br/oportunidades/mais-recentes/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 8;
pub const MAX_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

/// One search: where to look and how to narrow the results.
///
/// Keys follow the settings file written by [`settings::SettingsStore`], so
/// `title-contents` and `body-contents` are the two keyword sets. The
/// snake-case names are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub url: String,

    #[serde(rename = "title-contents", alias = "title_filters")]
    pub title_filters: KeywordSet,

    #[serde(rename = "body-contents", alias = "content_filters")]
    pub content_filters: KeywordSet,

    #[serde(rename = "base-url", default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(rename = "timeout-seconds", default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,

    #[serde(rename = "user-agent", default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "is_default_profile")]
    pub profile: MarkupProfile,
}

fn is_default_profile(profile: &MarkupProfile) -> bool {
    *profile == MarkupProfile::default()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            title_filters: ["Bolsa de PD", "Bolsas de PD"].into_iter().collect(),
            content_filters: [
                "neurais",
                "visão",
                "computação",
                "elétrica",
                "neural",
                "sinais",
                "machine learning",
            ]
            .into_iter()
            .collect(),
            base_url: None,
            timeout_seconds: None,
            user_agent: None,
            profile: MarkupProfile::default(),
        }
    }
}

impl SearchConfig {
    /// A config for `url` with both filters disabled.
    pub fn unfiltered(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title_filters: KeywordSet::new(),
            content_filters: KeywordSet::new(),
            ..Default::default()
        }
    }

    /// Prefix for site-relative links: the explicit `base-url`, or else the
    /// origin of `url`.
    pub fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            return base.trim_end_matches('/').to_string();
        }
        match Url::parse(&self.url) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(_) => String::new(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("url", &self.url)?;

        if let Some(base) = &self.base_url {
            validation::validate_url("base-url", base)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout-seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if let Some(agent) = &self.user_agent {
            validation::validate_non_empty_string("user-agent", agent)?;
        }

        self.profile.validate()
    }
}

impl ConfigProvider for SearchConfig {
    fn url(&self) -> &str {
        &self.url
    }

    fn base_url(&self) -> String {
        self.resolved_base_url()
    }

    fn title_filters(&self) -> &KeywordSet {
        &self.title_filters
    }

    fn content_filters(&self) -> &KeywordSet {
        &self.content_filters
    }

    fn profile(&self) -> &MarkupProfile {
        &self.profile
    }
}
