use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
  pub(crate) hits: Vec<SearchHit>,
}
