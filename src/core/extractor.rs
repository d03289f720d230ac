use crate::config::profile::MarkupProfile;
use crate::core::markup::Selectors;
use crate::domain::model::{EntryFragment, EntryStatus};
use scraper::{ElementRef, Html};

/// Every entry of the listing container, open or closed.
///
/// Children of the container that are not entries (wrong tag, or missing the
/// entry class) are skipped. A page without the container yields nothing.
pub fn extract_entries(
    markup: &str,
    profile: &MarkupProfile,
    selectors: &Selectors,
) -> Vec<EntryFragment> {
    let document = Html::parse_document(markup);

    let Some(list) = document.select(&selectors.list).next() else {
        tracing::warn!(
            "No '{}' container found on the listing page",
            profile.list_selector
        );
        return Vec::new();
    };

    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name().eq_ignore_ascii_case(&profile.entry_tag))
        .filter_map(|element| {
            classify(element, profile).map(|status| EntryFragment {
                html: element.html(),
                status,
            })
        })
        .collect()
}

pub fn extract_open_entries(
    markup: &str,
    profile: &MarkupProfile,
    selectors: &Selectors,
) -> Vec<EntryFragment> {
    let entries = extract_entries(markup, profile, selectors);
    let total = entries.len();

    let open: Vec<EntryFragment> = entries.into_iter().filter(EntryFragment::is_open).collect();
    tracing::debug!("{} of {} entries are open", open.len(), total);
    open
}

fn classify(element: ElementRef<'_>, profile: &MarkupProfile) -> Option<EntryStatus> {
    let has_class = |name: &str| element.value().classes().any(|class| class == name);

    if !has_class(&profile.entry_class) {
        return None;
    }
    if has_class(&profile.open_class) {
        Some(EntryStatus::Open)
    } else {
        Some(EntryStatus::Closed)
    }
}
