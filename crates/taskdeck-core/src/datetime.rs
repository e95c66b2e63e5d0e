use chrono::{
  DateTime,
  NaiveDate,
  NaiveDateTime,
  NaiveTime,
  SecondsFormat,
  Utc
};

const DATE_FIELD_FORMAT: &str =
  "%Y-%m-%d";
const TIME_FIELD_FORMAT: &str = "%H:%M";
const DISPLAY_FORMAT: &str =
  "%b %-d %Y, %-I:%M %p";

pub fn parse_due(
  raw: &str
) -> Option<DateTime<Utc>> {
  if let Ok(dt) =
    DateTime::parse_from_rfc3339(raw)
  {
    return Some(
      dt.with_timezone(&Utc)
    );
  }

  // Offset-less payloads are taken as UTC.
  NaiveDateTime::parse_from_str(
    raw,
    "%Y-%m-%dT%H:%M:%S%.f"
  )
  .ok()
  .map(|naive| naive.and_utc())
}

#[must_use]
pub fn format_due_wire(
  due: DateTime<Utc>
) -> String {
  due.to_rfc3339_opts(
    SecondsFormat::Millis,
    true
  )
}

#[must_use]
pub fn split_due(
  due: DateTime<Utc>
) -> (String, String) {
  (
    due
      .format(DATE_FIELD_FORMAT)
      .to_string(),
    due
      .format(TIME_FIELD_FORMAT)
      .to_string()
  )
}

pub fn join_due(
  date_field: &str,
  time_field: &str
) -> Option<DateTime<Utc>> {
  let date = NaiveDate::parse_from_str(
    date_field.trim(),
    DATE_FIELD_FORMAT
  )
  .ok()?;
  let time = NaiveTime::parse_from_str(
    time_field.trim(),
    TIME_FIELD_FORMAT
  )
  .ok()?;

  Some(date.and_time(time).and_utc())
}

#[must_use]
pub fn format_due_display(
  due: DateTime<Utc>
) -> String {
  due
    .format(DISPLAY_FORMAT)
    .to_string()
}

pub mod due_date_serde {
  use chrono::{
    DateTime,
    Utc
  };
  use serde::{
    Deserialize,
    Deserializer,
    Serializer,
    de::Error
  };

  pub fn serialize<S>(
    due: &DateTime<Utc>,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(
      &super::format_due_wire(*due)
    )
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<DateTime<Utc>, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      String::deserialize(deserializer)?;
    super::parse_due(&raw).ok_or_else(
      || {
        D::Error::custom(format!(
          "invalid due date: {raw}"
        ))
      }
    )
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Timelike,
    Utc
  };

  use super::{
    format_due_display,
    format_due_wire,
    join_due,
    parse_due,
    split_due
  };

  #[test]
  fn wire_format_is_millisecond_zulu()
  {
    let due = Utc
      .with_ymd_and_hms(
        2024, 1, 1, 10, 0, 0
      )
      .single()
      .expect("valid due");
    assert_eq!(
      format_due_wire(due),
      "2024-01-01T10:00:00.000Z"
    );
  }

  #[test]
  fn parses_offset_and_naive_payloads()
  {
    let zulu = parse_due(
      "2024-01-01T10:00:00.000Z"
    )
    .expect("zulu payload");
    let naive = parse_due(
      "2024-01-01T10:00:00"
    )
    .expect("naive payload");
    assert_eq!(zulu, naive);
    assert_eq!(zulu.hour(), 10);

    assert!(
      parse_due("next tuesday")
        .is_none()
    );
  }

  #[test]
  fn split_then_join_is_identity_on_minutes(
  ) {
    let due = Utc
      .with_ymd_and_hms(
        2026, 8, 6, 23, 45, 0
      )
      .single()
      .expect("valid due");

    let (date, time) = split_due(due);
    assert_eq!(date, "2026-08-06");
    assert_eq!(time, "23:45");

    let joined =
      join_due(&date, &time)
        .expect("rejoined due");
    assert_eq!(joined, due);
  }

  #[test]
  fn join_rejects_malformed_fields() {
    assert!(
      join_due("2026-13-01", "10:00")
        .is_none()
    );
    assert!(
      join_due("2026-01-01", "25:00")
        .is_none()
    );
    assert!(
      join_due("", "").is_none()
    );
  }

  #[test]
  fn display_format_reads_like_a_card()
  {
    let due = Utc
      .with_ymd_and_hms(
        2024, 1, 1, 22, 5, 0
      )
      .single()
      .expect("valid due");
    assert_eq!(
      format_due_display(due),
      "Jan 1 2024, 10:05 PM"
    );
  }
}
