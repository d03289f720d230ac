use crate::config::profile::MarkupProfile;
use crate::utils::error::{OpportunityError, Result};
use scraper::{ElementRef, Html, Selector};

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| OpportunityError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// CSS selectors of a [`MarkupProfile`], compiled once per pipeline.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub list: Selector,
    pub title: Selector,
    pub summary: Selector,
    pub link: Selector,
    pub label: Selector,
}

impl Selectors {
    pub fn compile(profile: &MarkupProfile) -> Result<Self> {
        Ok(Self {
            list: parse_selector(&profile.list_selector)?,
            title: parse_selector(&profile.title_selector)?,
            summary: parse_selector(&profile.summary_selector)?,
            link: parse_selector(&profile.link_selector)?,
            label: parse_selector(&profile.label_selector)?,
        })
    }
}

/// All text under `element` concatenated, then whitespace runs collapsed to
/// one space. Inline markup inside a word (`neur<em>ais</em>`) stays joined.
pub fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visible text of a whole fragment.
pub fn fragment_text(fragment: &Html) -> String {
    normalized_text(fragment.root_element())
}

/// Normalized text of the first element matching `selector`.
pub fn first_text(fragment: &Html, selector: &Selector) -> Option<String> {
    fragment.select(selector).next().map(normalized_text)
}
