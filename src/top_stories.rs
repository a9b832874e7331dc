use super::*;

pub const DEFAULT_LIMIT: usize = 10;

/// The highest scoring stories created within a recent time window.
pub struct TopStories<S> {
  min_score: u64,
  over_fetch_factor: usize,
  source: S,
}

impl<S: CandidateSource> TopStories<S> {
  #[must_use]
  pub fn new(source: S, min_score: u64, over_fetch_factor: usize) -> Self {
    Self {
      min_score,
      over_fetch_factor: over_fetch_factor.max(1),
      source,
    }
  }

  fn now() -> i64 {
    SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .map_or(0, |elapsed| {
        i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
      })
  }

  /// Up to `limit` stories created within `range` of now, highest score
  /// first.
  ///
  /// # Errors
  ///
  /// Propagates the source's error unchanged; there is no partial result.
  pub async fn top_items(
    &self,
    range: TimeRange,
    limit: usize,
  ) -> Result<Vec<Item>> {
    self.top_items_at(range, limit, Self::now()).await
  }

  /// Same as [`TopStories::top_items`] with an explicit current time, in
  /// seconds since the Unix epoch.
  ///
  /// # Errors
  ///
  /// Propagates the source's error unchanged.
  pub async fn top_items_at(
    &self,
    range: TimeRange,
    limit: usize,
    now: i64,
  ) -> Result<Vec<Item>> {
    let duration = i64::try_from(range.duration_secs()).unwrap_or(i64::MAX);

    let cutoff = now.saturating_sub(duration);

    let max_count = limit.saturating_mul(self.over_fetch_factor);

    debug!(%range, now, cutoff, limit, max_count, "resolved time window");

    let mut candidates = self
      .source
      .fetch_candidates(cutoff, self.min_score, max_count)
      .await?;

    candidates.retain(|item| item.qualifies(cutoff, self.min_score));

    let items = select(candidates, limit);

    for (rank, item) in items.iter().take(3).enumerate() {
      debug!(
        rank = rank + 1,
        id = %item.id,
        score = item.score,
        title = %item.title,
        "top item"
      );
    }

    Ok(items)
  }
}
