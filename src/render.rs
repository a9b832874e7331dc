use super::*;

const TITLE_WIDTH: usize = 80;

/// Plain text listing, one numbered story per pair of lines.
pub(crate) fn render(items: &[Item], range: TimeRange, now: i64) -> String {
  if items.is_empty() {
    return format!("No stories in the last {range}.\n");
  }

  let width = items.len().to_string().len();

  let mut output = String::new();

  for (index, item) in items.iter().enumerate() {
    let title = truncate(&item.title, TITLE_WIDTH);

    let heading = match item.url.as_deref().and_then(domain) {
      Some(domain) => format!("{title} ({domain})"),
      None => title,
    };

    output.push_str(&format!("{:>width$}. {heading}\n", index + 1));

    output.push_str(&format!(
      "{:width$}  {} by {} • {} • {}\n",
      "",
      format_points(item.score),
      item.author,
      format_comments(item.comments),
      format_age(now - item.created_at),
    ));
  }

  output
}
