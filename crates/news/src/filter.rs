use agora_core::NewsItem;
use chrono::NaiveDate;

/// Keep items whose headline mentions at least one keyword (case-insensitive)
///
/// An empty keyword list keeps everything.
pub fn filter_by_keywords(items: Vec<NewsItem>, keywords: &[String]) -> Vec<NewsItem> {
    if keywords.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_any(keywords))
        .collect()
}

/// Keep items dated within `[start, end]`, both ends inclusive
pub fn filter_by_date_range(items: &[NewsItem], start: NaiveDate, end: NaiveDate) -> Vec<NewsItem> {
    items
        .iter()
        .filter(|item| {
            let date = item.timestamp.date_naive();
            date >= start && date <= end
        })
        .cloned()
        .collect()
}
