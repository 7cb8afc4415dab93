//! Display helpers shared by every view: compact counts, relative times, and
//! avatar initials. Currency lives on [`Money`](crate::Money)'s `Display`.

use chrono::{DateTime, Utc};

/// Compact count: `2847` → `2.8K`, `1200000` → `1.2M`, `950` → `950`.
///
/// The single decimal is rounded half-up on the exact ratio.
pub fn format_number(n: u64) -> String {
  const SCALES: [(u64, &str); 2] = [(1_000_000, "M"), (1_000, "K")];

  for (divisor, suffix) in SCALES {
    if n >= divisor {
      let tenths = (u128::from(n) * 10 + u128::from(divisor / 2)) / u128::from(divisor);
      return format!("{}.{}{suffix}", tenths / 10, tenths % 10);
    }
  }
  n.to_string()
}

/// Human phrasing of `date` as seen at `now`.
///
/// - Less than a day old (or in the future): a distance phrase such as
///   `5 minutes ago`, `about 3 hours ago`, `in 2 days`.
/// - Less than a week old: the weekday, e.g. `Friday`.
/// - Older: `Jan 15, 2024`.
pub fn format_relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let age = now.signed_duration_since(date);

  if age.num_hours() < 24 {
    let seconds = age.num_seconds();
    let phrase = distance_phrase(seconds.unsigned_abs());
    if seconds >= 0 {
      format!("{phrase} ago")
    } else {
      format!("in {phrase}")
    }
  } else if age.num_hours() < 24 * 7 {
    date.format("%A").to_string()
  } else {
    date.format("%b %-d, %Y").to_string()
  }
}

fn distance_phrase(seconds: u64) -> String {
  let minutes = (seconds + 30) / 60;
  match minutes {
    0 => "less than a minute".to_owned(),
    1 => "1 minute".to_owned(),
    2..45 => format!("{minutes} minutes"),
    45..90 => "about 1 hour".to_owned(),
    90..1440 => format!("about {} hours", (minutes + 30) / 60),
    1440..2520 => "1 day".to_owned(),
    2520..43_200 => format!("{} days", (minutes + 720) / 1440),
    _ => month_phrase((minutes + 21_600) / 43_200),
  }
}

/// Thirty days and up, counted in 30-day months.
fn month_phrase(months: u64) -> String {
  let plural = |n: u64, unit: &str| {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
  };
  match months {
    0..2 => "about 1 month".to_owned(),
    2..12 => plural(months, "month"),
    _ => {
      let (years, rest) = (months / 12, months % 12);
      match rest {
        0..3 => format!("about {}", plural(years, "year")),
        3..9 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
      }
    }
  }
}

/// Avatar fallback letters, e.g. `("Luna", "Echo")` → `LE`.
pub fn initials(first: &str, last: &str) -> String {
  [first, last]
    .iter()
    .filter_map(|part| part.chars().next())
    .flat_map(char::to_uppercase)
    .collect()
}
