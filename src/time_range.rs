use super::*;

/// How far back a query reaches.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeRange {
  #[default]
  Day,
  Hour,
  Month,
  Week,
}

impl TimeRange {
  #[must_use]
  pub fn all() -> &'static [TimeRange] {
    &[Self::Hour, Self::Day, Self::Week, Self::Month]
  }

  #[must_use]
  pub fn duration_secs(self) -> u64 {
    match self {
      Self::Hour => 3_600,
      Self::Day => 86_400,
      Self::Week => 604_800,
      Self::Month => 2_592_000,
    }
  }

  /// Lenient parse for request handlers: a missing or unknown label falls
  /// back to the default `24h` window.
  #[must_use]
  pub fn from_query(label: Option<&str>) -> Self {
    let Some(label) = label.filter(|label| !label.is_empty()) else {
      return Self::default();
    };

    label.parse().unwrap_or_else(|error| {
      warn!(%error, "falling back to default time range");
      Self::default()
    })
  }

  #[must_use]
  pub fn label(self) -> &'static str {
    match self {
      Self::Hour => "1h",
      Self::Day => "24h",
      Self::Week => "7d",
      Self::Month => "30d",
    }
  }
}

impl Display for TimeRange {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for TimeRange {
  type Err = Error;

  fn from_str(label: &str) -> Result<Self> {
    Self::all()
      .iter()
      .copied()
      .find(|range| range.label() == label)
      .ok_or_else(|| Error::InvalidRange {
        label: label.to_string(),
      })
  }
}

/// Window length in seconds for a symbolic range label.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] for anything other than `1h`, `24h`, `7d`
/// or `30d`.
pub fn resolve(label: &str) -> Result<u64> {
  Ok(label.parse::<TimeRange>()?.duration_secs())
}
