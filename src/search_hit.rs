use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
  pub(crate) author: Option<String>,
  pub(crate) created_at_i: i64,
  pub(crate) num_comments: Option<u64>,
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  pub(crate) points: Option<u64>,
  pub(crate) title: Option<String>,
  pub(crate) url: Option<String>,
}

impl SearchHit {
  pub(crate) fn into_item(self) -> Item {
    Item {
      author: self.author.unwrap_or_else(|| "unknown".to_string()),
      comments: self.num_comments.unwrap_or_default(),
      created_at: self.created_at_i,
      id: self.object_id,
      score: self.points.unwrap_or_default(),
      title: self.title.unwrap_or_else(|| "Untitled".to_string()),
      url: self.url.filter(|url| !url.is_empty()),
    }
  }
}
