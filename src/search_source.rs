use super::*;

/// Candidates from the Algolia search API, filtered server side by creation
/// time and points.
///
/// Hits come back in relevance order, which is not score order, so callers
/// should ask for more candidates than they intend to show.
#[derive(Clone)]
pub struct SearchSource {
  base_url: String,
  client: Client,
}

impl SearchSource {
  pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";

  pub const MAX_HITS_PER_PAGE: usize = 1000;

  #[must_use]
  pub fn new(client: Client, base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      client,
    }
  }

  /// `numericFilters` value for an inclusive cutoff and score floor. Both
  /// fields are integers, so `>= n` is sent as `> n - 1`.
  fn numeric_filters(cutoff: i64, min_score: u64) -> String {
    let mut filters = format!("created_at_i>{}", cutoff.saturating_sub(1));

    if let Some(floor) = min_score.checked_sub(1) {
      filters.push_str(&format!(",points>{floor}"));
    }

    filters
  }
}

#[async_trait]
impl CandidateSource for SearchSource {
  async fn fetch_candidates(
    &self,
    cutoff: i64,
    min_score: u64,
    max_count: usize,
  ) -> Result<Vec<Item>> {
    let hits_per_page = max_count.clamp(1, Self::MAX_HITS_PER_PAGE);

    let numeric_filters = Self::numeric_filters(cutoff, min_score);

    debug!(%numeric_filters, hits_per_page, "querying story search");

    let response = self
      .client
      .get_json::<SearchResponse>(
        &format!("{}/search", self.base_url),
        &[
          ("tags", "story".to_string()),
          ("numericFilters", numeric_filters),
          ("hitsPerPage", hits_per_page.to_string()),
        ],
      )
      .await?;

    Ok(
      response
        .hits
        .into_iter()
        .map(SearchHit::into_item)
        .filter(|item| item.qualifies(cutoff, min_score))
        .collect(),
    )
  }
}
