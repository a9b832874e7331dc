use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Strategy {
  /// Fetch the front page ids and every item individually
  FanOut,
  /// Query the search index with server side filters
  #[default]
  Search,
}

#[derive(Debug, Parser)]
#[command(
  about = "Show the highest scoring Hacker News stories from a recent time window",
  version
)]
pub(crate) struct Arguments {
  /// Print the stories as JSON
  #[arg(long)]
  pub(crate) json: bool,
  /// Maximum number of stories to show
  #[arg(long, short, default_value_t = DEFAULT_LIMIT)]
  pub(crate) limit: usize,
  /// Minimum score a story needs, overrides HN_TOP_MIN_SCORE
  #[arg(long)]
  pub(crate) min_score: Option<u64>,
  /// How far back to look: 1h, 24h, 7d or 30d
  #[arg(long, short, default_value = "24h")]
  pub(crate) range: TimeRange,
  /// Where candidate stories come from
  #[arg(long, value_enum, default_value_t)]
  pub(crate) strategy: Strategy,
  /// Log requests and ranking decisions to stderr
  #[arg(long, short)]
  pub(crate) verbose: bool,
}
