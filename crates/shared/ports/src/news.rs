use agora_core::NewsItem;

/// Port for a best-effort news source
///
/// Implementations must never fail past this boundary: any transport or
/// parsing failure is reported as an empty list.
pub trait NewsFeed: Send {
    /// Fetch the latest items, keeping only headlines that mention at least
    /// one keyword (case-insensitive). An empty slice means no filtering.
    fn fetch_latest(&mut self, keywords: &[String]) -> Vec<NewsItem>;
}
