use super::*;

/// A record from the Firebase `item/{id}.json` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Story {
  pub(crate) by: Option<String>,
  pub(crate) dead: Option<bool>,
  pub(crate) deleted: Option<bool>,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: u64,
  pub(crate) score: Option<u64>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl Story {
  /// Converts a record into an [`Item`], or `None` when it is deleted, dead,
  /// or missing a title or creation time.
  pub(crate) fn into_item(self) -> Option<Item> {
    if self.deleted.unwrap_or(false) || self.dead.unwrap_or(false) {
      return None;
    }

    Some(Item {
      author: self.by.unwrap_or_else(|| "unknown".to_string()),
      comments: self.descendants.unwrap_or_default(),
      created_at: self.time?,
      id: self.id.to_string(),
      score: self.score.unwrap_or_default(),
      title: self.title?,
      url: self.url.filter(|url| !url.is_empty()),
    })
  }
}
