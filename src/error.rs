#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to build HTTP client")]
  ClientBuild(#[source] reqwest::Error),
  #[error("invalid value `{value}` for {key}")]
  InvalidConfig { key: &'static str, value: String },
  #[error("invalid time range `{label}`, expected one of 1h, 24h, 7d, 30d")]
  InvalidRange { label: String },
  #[error("upstream unavailable: {message}")]
  UpstreamUnavailable {
    message: String,
    status: Option<u16>,
  },
}

impl Error {
  pub(crate) fn upstream(message: impl Into<String>) -> Self {
    Self::UpstreamUnavailable {
      message: message.into(),
      status: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn upstream_error_carries_message() {
    let error = Error::UpstreamUnavailable {
      message: "GET https://example.com returned 503".into(),
      status: Some(503),
    };

    assert_eq!(
      error.to_string(),
      "upstream unavailable: GET https://example.com returned 503"
    );
  }

  #[test]
  fn invalid_range_lists_accepted_labels() {
    let error = Error::InvalidRange {
      label: "2w".into(),
    };

    assert_eq!(
      error.to_string(),
      "invalid time range `2w`, expected one of 1h, 24h, 7d, 30d"
    );
  }
}
