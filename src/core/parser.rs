//! Turns one entry fragment into an [`OpportunityRecord`].
//!
//! The listing markup carries no contract, so every field is its own rule
//! returning `Option<String>`; a rule that finds nothing leaves its field
//! empty and never affects the others.

use crate::config::profile::MarkupProfile;
use crate::core::markup::{first_text, fragment_text, normalized_text, Selectors};
use crate::domain::model::{EntryFragment, OpportunityRecord};
use crate::utils::error::{OpportunityError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Node};

#[derive(Debug, Clone)]
pub struct FieldParser {
    selectors: Selectors,
    deadline: Regex,
    city_labels: Vec<String>,
    institute_labels: Vec<String>,
}

impl FieldParser {
    pub fn new(profile: &MarkupProfile) -> Result<Self> {
        Ok(Self {
            selectors: Selectors::compile(profile)?,
            deadline: deadline_pattern(&profile.deadline_labels)?,
            city_labels: profile.city_labels.clone(),
            institute_labels: profile.institute_labels.clone(),
        })
    }

    pub fn parse(&self, fragment: &EntryFragment, base_url: &str) -> OpportunityRecord {
        let html = Html::parse_fragment(&fragment.html);

        OpportunityRecord {
            title: first_text(&html, &self.selectors.title).unwrap_or_default(),
            body: first_text(&html, &self.selectors.summary).unwrap_or_default(),
            link: self.link(&html, base_url).unwrap_or_default(),
            end_date: self.end_date(&html).unwrap_or_default(),
            city: self.labeled_value(&html, &self.city_labels).unwrap_or_default(),
            institute: self
                .labeled_value(&html, &self.institute_labels)
                .unwrap_or_default(),
        }
    }

    pub fn parse_all(&self, fragments: &[EntryFragment], base_url: &str) -> Vec<OpportunityRecord> {
        fragments
            .iter()
            .map(|fragment| self.parse(fragment, base_url))
            .collect()
    }

    fn link(&self, html: &Html, base_url: &str) -> Option<String> {
        let href = html.select(&self.selectors.link).next()?.value().attr("href")?;
        Some(resolve_link(href.trim(), base_url))
    }

    fn end_date(&self, html: &Html) -> Option<String> {
        let text = fragment_text(html);
        self.deadline
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Text right after the first label element mentioning one of `labels`,
    /// e.g. `<strong>Cidade:</strong> São Paulo`.
    fn labeled_value(&self, html: &Html, labels: &[String]) -> Option<String> {
        let marker = html.select(&self.selectors.label).find(|element| {
            let text: String = element.text().collect();
            labels.iter().any(|label| text.contains(label.as_str()))
        })?;

        let sibling = marker.next_sibling()?;
        match sibling.value() {
            Node::Text(text) => Some(text.trim().to_string()),
            Node::Element(_) => ElementRef::wrap(sibling).map(normalized_text),
            _ => None,
        }
    }
}

fn deadline_pattern(labels: &[String]) -> Result<Regex> {
    let alternatives = labels
        .iter()
        .map(|label| regex::escape(label.trim()))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?:{})\s*(\d{{2}}/\d{{2}}/\d{{4}})", alternatives)).map_err(|e| {
        OpportunityError::ConfigError {
            message: format!("Invalid deadline labels: {}", e),
        }
    })
}

/// Site-relative hrefs get `base_url` in front; anything else is kept as is.
pub fn resolve_link(href: &str, base_url: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
