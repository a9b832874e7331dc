use super::*;

/// Candidates from the Firebase API: the current top story ids, each
/// fetched individually.
///
/// The id list is ordered by front-page rank, not score, so the whole
/// window is always fetched and `max_count` is ignored.
#[derive(Clone)]
pub struct FanOutSource {
  base_url: String,
  client: Client,
  concurrency: usize,
  story_window: usize,
}

impl FanOutSource {
  pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  pub const DEFAULT_CONCURRENCY: usize = 16;

  pub const DEFAULT_STORY_WINDOW: usize = 500;

  async fn fetch_item(&self, id: u64) -> Option<Item> {
    let url = format!("{}/item/{id}.json", self.base_url);

    match self.client.get_json::<Option<Story>>(&url, &[]).await {
      Ok(story) => story.and_then(Story::into_item),
      Err(error) => {
        debug!(id, %error, "skipping item");
        None
      }
    }
  }

  #[must_use]
  pub fn new(
    client: Client,
    base_url: impl Into<String>,
    story_window: usize,
    concurrency: usize,
  ) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      client,
      concurrency: concurrency.max(1),
      story_window,
    }
  }
}

#[async_trait]
impl CandidateSource for FanOutSource {
  async fn fetch_candidates(
    &self,
    cutoff: i64,
    min_score: u64,
    max_count: usize,
  ) -> Result<Vec<Item>> {
    let ids = self
      .client
      .get_json::<Vec<u64>>(&format!("{}/topstories.json", self.base_url), &[])
      .await?;

    let ids = ids.into_iter().take(self.story_window).collect::<Vec<_>>();

    let requested = ids.len();

    debug!(
      cutoff,
      min_score,
      max_count,
      requested,
      concurrency = self.concurrency,
      "fetching top story items"
    );

    let fetched = stream::iter(ids.into_iter().map(|id| self.fetch_item(id)))
      .buffered(self.concurrency)
      .collect::<Vec<_>>()
      .await;

    let items = fetched
      .into_iter()
      .flatten()
      .filter(|item| item.qualifies(cutoff, min_score))
      .collect::<Vec<_>>();

    debug!(requested, kept = items.len(), "filtered top story items");

    Ok(items)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    serde_json::json,
    wiremock::{
      Mock, MockServer, ResponseTemplate,
      matchers::{method, path},
    },
  };

  async fn mount_item(server: &MockServer, id: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
      .and(path(format!("/item/{id}.json")))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .mount(server)
      .await;
  }

  async fn mount_top_stories(server: &MockServer, ids: &[u64]) {
    Mock::given(method("GET"))
      .and(path("/topstories.json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(ids))
      .mount(server)
      .await;
  }

  fn source(server: &MockServer, story_window: usize) -> FanOutSource {
    FanOutSource::new(Client::default(), server.uri(), story_window, 4)
  }

  fn story(id: u64, score: u64, time: i64) -> serde_json::Value {
    json!({
      "by": "author",
      "descendants": 3,
      "id": id,
      "score": score,
      "time": time,
      "title": format!("Story {id}"),
      "type": "story",
      "url": format!("https://example.com/{id}"),
    })
  }

  #[tokio::test]
  async fn fetch_candidates_filters_by_cutoff_and_score() {
    let server = MockServer::start().await;

    mount_top_stories(&server, &[1, 2, 3, 4]).await;
    mount_item(&server, 1, story(1, 50, 1_000)).await;
    mount_item(&server, 2, story(2, 50, 999)).await;
    mount_item(&server, 3, story(3, 0, 2_000)).await;
    mount_item(&server, 4, story(4, 7, 5_000)).await;

    let items = source(&server, 500)
      .fetch_candidates(1_000, 1, 10)
      .await
      .unwrap();

    let ids = items.iter().map(|item| item.id.as_str()).collect::<Vec<_>>();

    assert_eq!(ids, ["1", "4"]);
  }

  #[tokio::test]
  async fn fetch_candidates_drops_unavailable_items() {
    let server = MockServer::start().await;

    mount_top_stories(&server, &[1, 2, 3, 4, 5]).await;
    mount_item(&server, 1, story(1, 10, 100)).await;
    mount_item(&server, 2, serde_json::Value::Null).await;
    mount_item(&server, 3, json!({"id": 3, "deleted": true})).await;
    mount_item(&server, 4, json!({"unexpected": "shape"})).await;

    Mock::given(method("GET"))
      .and(path("/item/5.json"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;

    let items = source(&server, 500)
      .fetch_candidates(0, 1, 10)
      .await
      .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "1");
  }

  #[tokio::test]
  async fn fetch_candidates_only_scans_the_story_window() {
    let server = MockServer::start().await;

    mount_top_stories(&server, &[1, 2, 3]).await;
    mount_item(&server, 1, story(1, 10, 100)).await;
    mount_item(&server, 2, story(2, 20, 100)).await;

    Mock::given(method("GET"))
      .and(path("/item/3.json"))
      .respond_with(ResponseTemplate::new(200).set_body_json(story(3, 30, 100)))
      .expect(0)
      .mount(&server)
      .await;

    let items = source(&server, 2)
      .fetch_candidates(0, 1, 10)
      .await
      .unwrap();

    assert_eq!(items.len(), 2);
  }

  #[tokio::test]
  async fn fetch_candidates_fails_when_id_list_is_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/topstories.json"))
      .respond_with(ResponseTemplate::new(502))
      .mount(&server)
      .await;

    let error = source(&server, 500)
      .fetch_candidates(0, 1, 10)
      .await
      .unwrap_err();

    assert!(matches!(
      error,
      Error::UpstreamUnavailable {
        status: Some(502),
        ..
      }
    ));
  }
}
