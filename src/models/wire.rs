//! Serde adapters for the wire formats: `YYYY-MM-DD` dates and
//! `HH:MM:SS` times.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

pub(crate) const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

pub(crate) const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Render a date the way the slot endpoint expects it in query strings.
pub(crate) fn encode_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.format(DATE_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod hms_time {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Time;

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &Time, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = time.format(TIME_FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Time, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Time::parse(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, time};

    #[test]
    fn encode_date_is_iso() {
        assert_eq!(super::encode_date(date!(2026 - 08 - 07)), "2026-08-07");
    }

    #[test]
    fn time_round_trips_through_hms() {
        let formatted = time!(10:00).format(super::TIME_FORMAT).unwrap();
        assert_eq!(formatted, "10:00:00");
    }
}
