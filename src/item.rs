use super::*;

/// A story as returned to callers, independent of the upstream API it came
/// from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Item {
  pub author: String,
  pub comments: u64,
  /// Seconds since the Unix epoch.
  pub created_at: i64,
  pub id: String,
  pub score: u64,
  pub title: String,
  pub url: Option<String>,
}

impl Item {
  #[must_use]
  pub fn discussion_url(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }

  #[must_use]
  pub fn link(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| self.discussion_url())
  }

  /// Whether the item was created at or after `cutoff` and has at least
  /// `min_score` points.
  #[must_use]
  pub fn qualifies(&self, cutoff: i64, min_score: u64) -> bool {
    self.created_at >= cutoff && self.score >= min_score
  }
}
