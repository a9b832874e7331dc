use super::*;

/// Shared HTTP client for the upstream APIs.
///
/// Every failure, whether a transport error, a non-success status or a body
/// that does not decode, surfaces as [`Error::UpstreamUnavailable`].
#[derive(Clone)]
pub struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) async fn get_json<T: DeserializeOwned>(
    &self,
    url: &str,
    query: &[(&str, String)],
  ) -> Result<T> {
    debug!(url, ?query, "sending request");

    let response = self
      .client
      .get(url)
      .query(query)
      .send()
      .await
      .map_err(|error| Error::upstream(format!("GET {url} failed: {error}")))?;

    let status = response.status();

    if !status.is_success() {
      return Err(Error::UpstreamUnavailable {
        message: format!("GET {url} returned {status}"),
        status: Some(status.as_u16()),
      });
    }

    response
      .json::<T>()
      .await
      .map_err(|error| Error::UpstreamUnavailable {
        message: format!("GET {url} returned an unreadable body: {error}"),
        status: Some(status.as_u16()),
      })
  }

  /// Builds a client whose requests give up after `timeout`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ClientBuild`] if the TLS backend cannot be initialized.
  pub fn new(timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .user_agent(Self::USER_AGENT)
      .build()
      .map_err(Error::ClientBuild)?;

    Ok(Self { client })
  }
}
