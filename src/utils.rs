use super::*;

pub(crate) fn domain(url: &str) -> Option<String> {
  let url = Url::parse(url).ok()?;

  let host = url.host_str()?;

  Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

pub(crate) fn format_age(seconds: i64) -> String {
  let seconds = seconds.max(0);

  match seconds {
    0..60 => "just now".to_string(),
    60..3_600 => format!("{}m ago", seconds / 60),
    3_600..86_400 => format!("{}h ago", seconds / 3_600),
    _ => format!("{}d ago", seconds / 86_400),
  }
}

pub(crate) fn format_comments(count: u64) -> String {
  match count {
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(score: u64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn format_points_handles_singular_and_plural() {
    assert_eq!(format_points(1), "1 point");
    assert_eq!(format_points(2), "2 points");
    assert_eq!(format_points(0), "0 points");
  }

  #[test]
  fn format_comments_handles_singular_and_plural() {
    assert_eq!(format_comments(1), "1 comment");
    assert_eq!(format_comments(0), "0 comments");
  }

  #[test]
  fn format_age_picks_largest_unit() {
    assert_eq!(format_age(-5), "just now");
    assert_eq!(format_age(59), "just now");
    assert_eq!(format_age(60), "1m ago");
    assert_eq!(format_age(3_599), "59m ago");
    assert_eq!(format_age(7_200), "2h ago");
    assert_eq!(format_age(86_400 * 3 + 10), "3d ago");
  }

  #[test]
  fn domain_strips_www_prefix() {
    assert_eq!(
      domain("https://www.example.com/a/b?c=d"),
      Some("example.com".to_string())
    );

    assert_eq!(
      domain("http://blog.rust-lang.org/"),
      Some("blog.rust-lang.org".to_string())
    );

    assert_eq!(domain("not a url"), None);
  }
}
