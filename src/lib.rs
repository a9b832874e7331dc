//! Time-windowed top stories from Hacker News.
//!
//! [`TopStories`] resolves a [`TimeRange`] into a cutoff timestamp, asks a
//! [`CandidateSource`] for recent items and ranks what comes back by score.

use {
  async_trait::async_trait,
  futures::stream::{self, StreamExt},
  search_hit::SearchHit,
  search_response::SearchResponse,
  serde::{Deserialize, Serialize, de::DeserializeOwned},
  std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    time::{Duration, SystemTime, UNIX_EPOCH},
  },
  story::Story,
  tracing::{debug, warn},
};

pub use {
  candidate_source::CandidateSource,
  client::Client,
  config::Config,
  error::Error,
  fan_out_source::FanOutSource,
  item::Item,
  search_source::SearchSource,
  selector::select,
  time_range::{TimeRange, resolve},
  top_stories::{DEFAULT_LIMIT, TopStories},
};

mod candidate_source;
mod client;
mod config;
mod error;
mod fan_out_source;
mod item;
mod search_hit;
mod search_response;
mod search_source;
mod selector;
mod story;
mod time_range;
mod top_stories;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
