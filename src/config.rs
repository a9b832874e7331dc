use super::*;

/// Tunables for the upstream sources and the ranking query.
///
/// Every field can be overridden from an `HN_TOP_*` environment variable,
/// see [`Config::from_env`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  pub concurrency: usize,
  pub item_api_url: String,
  pub min_score: u64,
  pub over_fetch_factor: usize,
  pub search_api_url: String,
  pub story_window: usize,
  pub timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      concurrency: FanOutSource::DEFAULT_CONCURRENCY,
      item_api_url: FanOutSource::DEFAULT_BASE_URL.to_string(),
      min_score: 1,
      over_fetch_factor: 10,
      search_api_url: SearchSource::DEFAULT_BASE_URL.to_string(),
      story_window: FanOutSource::DEFAULT_STORY_WINDOW,
      timeout: Duration::from_secs(10),
    }
  }
}

impl Config {
  const CONCURRENCY: &str = "HN_TOP_CONCURRENCY";
  const ITEM_API_URL: &str = "HN_TOP_ITEM_API_URL";
  const MIN_SCORE: &str = "HN_TOP_MIN_SCORE";
  const OVER_FETCH: &str = "HN_TOP_OVER_FETCH";
  const SEARCH_API_URL: &str = "HN_TOP_SEARCH_API_URL";
  const STORY_WINDOW: &str = "HN_TOP_STORY_WINDOW";
  const TIMEOUT_SECS: &str = "HN_TOP_TIMEOUT_SECS";

  /// Reads overrides from the process environment.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidConfig`] when a numeric variable does not parse.
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds a config from defaults plus whatever `lookup` returns for each
  /// variable name. Empty values are treated as unset.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidConfig`] when a numeric variable does not parse.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let lookup = |key: &str| {
      lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let defaults = Self::default();

    Ok(Self {
      concurrency: Self::parse(&lookup, Self::CONCURRENCY)?
        .unwrap_or(defaults.concurrency),
      item_api_url: lookup(Self::ITEM_API_URL).unwrap_or(defaults.item_api_url),
      min_score: Self::parse(&lookup, Self::MIN_SCORE)?
        .unwrap_or(defaults.min_score),
      over_fetch_factor: Self::parse(&lookup, Self::OVER_FETCH)?
        .unwrap_or(defaults.over_fetch_factor),
      search_api_url: lookup(Self::SEARCH_API_URL)
        .unwrap_or(defaults.search_api_url),
      story_window: Self::parse(&lookup, Self::STORY_WINDOW)?
        .unwrap_or(defaults.story_window),
      timeout: Self::parse(&lookup, Self::TIMEOUT_SECS)?
        .map_or(defaults.timeout, Duration::from_secs),
    })
  }

  fn parse<T: FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &'static str,
  ) -> Result<Option<T>> {
    lookup(key)
      .map(|value| {
        value
          .parse::<T>()
          .map_err(|_| Error::InvalidConfig { key, value })
      })
      .transpose()
  }
}
