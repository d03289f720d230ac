use crate::core::markup::fragment_text;
use crate::domain::model::{EntryFragment, KeywordSet};
use scraper::{Html, Selector};

/// Keep fragments whose title contains any keyword, case-sensitive.
///
/// Fragments without a title element cannot match and are dropped. An empty
/// keyword set returns the input unchanged.
pub fn filter_by_title(
    fragments: Vec<EntryFragment>,
    keywords: &KeywordSet,
    title_selector: &Selector,
) -> Vec<EntryFragment> {
    if keywords.is_empty() {
        return fragments;
    }

    fragments
        .into_iter()
        .filter(|fragment| {
            let html = Html::parse_fragment(&fragment.html);
            html.select(title_selector)
                .next()
                .map(|title| {
                    let text: String = title.text().collect();
                    keywords.iter().any(|keyword| text.contains(keyword))
                })
                .unwrap_or(false)
        })
        .collect()
}

/// Keep fragments whose visible text contains any keyword, ignoring case.
pub fn filter_by_content(fragments: Vec<EntryFragment>, keywords: &KeywordSet) -> Vec<EntryFragment> {
    if keywords.is_empty() {
        return fragments;
    }

    let search_words = keywords.to_lowercase();
    fragments
        .into_iter()
        .filter(|fragment| {
            let text = fragment_text(&Html::parse_fragment(&fragment.html)).to_lowercase();
            search_words.iter().any(|word| text.contains(word.as_str()))
        })
        .collect()
}
