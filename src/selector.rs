use super::*;

/// Ranks `candidates` by score, highest first, and keeps the first `limit`.
///
/// The sort is stable, so items with equal scores stay in the order they
/// were retrieved.
#[must_use]
pub fn select(mut candidates: Vec<Item>, limit: usize) -> Vec<Item> {
  candidates.sort_by(|a, b| b.score.cmp(&a.score));
  candidates.truncate(limit);
  candidates
}
