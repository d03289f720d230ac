use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_SELECTOR: &str = "ul.list";
pub const DEFAULT_ENTRY_TAG: &str = "li";
pub const DEFAULT_ENTRY_CLASS: &str = "box_col";
pub const DEFAULT_OPEN_CLASS: &str = "aberta";
pub const DEFAULT_TITLE_SELECTOR: &str = "strong.title";
pub const DEFAULT_SUMMARY_SELECTOR: &str = "span.text-resumo";
pub const DEFAULT_LINK_SELECTOR: &str = "a.link_col";
pub const DEFAULT_LABEL_SELECTOR: &str = "strong";

pub const DEADLINE_LABELS: &[&str] = &["Inscrições até:", "Applications until:"];
pub const CITY_LABELS: &[&str] = &["Cidade:", "City:"];
pub const INSTITUTE_LABELS: &[&str] = &["Instituição:", "Institution:"];

/// Where things live in the listing markup and which labels announce the
/// deadline, city and institution. The defaults describe the FAPESP
/// opportunities page; a different site or locale only needs a different
/// profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkupProfile {
    pub list_selector: String,
    pub entry_tag: String,
    pub entry_class: String,
    pub open_class: String,
    pub title_selector: String,
    pub summary_selector: String,
    pub link_selector: String,
    pub label_selector: String,
    pub deadline_labels: Vec<String>,
    pub city_labels: Vec<String>,
    pub institute_labels: Vec<String>,
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

impl Default for MarkupProfile {
    fn default() -> Self {
        Self {
            list_selector: DEFAULT_LIST_SELECTOR.to_string(),
            entry_tag: DEFAULT_ENTRY_TAG.to_string(),
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            open_class: DEFAULT_OPEN_CLASS.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            summary_selector: DEFAULT_SUMMARY_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            label_selector: DEFAULT_LABEL_SELECTOR.to_string(),
            deadline_labels: owned(DEADLINE_LABELS),
            city_labels: owned(CITY_LABELS),
            institute_labels: owned(INSTITUTE_LABELS),
        }
    }
}

impl Validate for MarkupProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("profile.list-selector", &self.list_selector)?;
        validate_non_empty_string("profile.entry-tag", &self.entry_tag)?;
        validate_non_empty_string("profile.entry-class", &self.entry_class)?;
        validate_non_empty_string("profile.open-class", &self.open_class)?;
        validate_non_empty_string("profile.title-selector", &self.title_selector)?;
        validate_non_empty_string("profile.summary-selector", &self.summary_selector)?;
        validate_non_empty_string("profile.link-selector", &self.link_selector)?;
        validate_non_empty_string("profile.label-selector", &self.label_selector)?;
        validate_non_empty_list("profile.deadline-labels", &self.deadline_labels)?;
        validate_non_empty_list("profile.city-labels", &self.city_labels)?;
        validate_non_empty_list("profile.institute-labels", &self.institute_labels)?;
        Ok(())
    }
}
