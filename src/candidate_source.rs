use super::*;

/// An upstream query that can produce items newer than a cutoff.
#[async_trait]
pub trait CandidateSource: Send + Sync {
  /// Fetches items created at or after `cutoff` with at least `min_score`
  /// points. `max_count` is the number of candidates the caller would like
  /// to rank; sources may return fewer, or more when they cannot bound the
  /// result up front.
  ///
  /// # Errors
  ///
  /// Returns [`Error::UpstreamUnavailable`] when the upstream API cannot be
  /// reached or answers with a failure. No partial results are returned.
  async fn fetch_candidates(
    &self,
    cutoff: i64,
    min_score: u64,
    max_count: usize,
  ) -> Result<Vec<Item>>;
}

#[async_trait]
impl<S: CandidateSource + ?Sized> CandidateSource for Box<S> {
  async fn fetch_candidates(
    &self,
    cutoff: i64,
    min_score: u64,
    max_count: usize,
  ) -> Result<Vec<Item>> {
    (**self).fetch_candidates(cutoff, min_score, max_count).await
  }
}
