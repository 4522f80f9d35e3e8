use serde::{Deserialize, Serialize};
use time::Time;
use tracing::warn;

use crate::i18n::SupportedLanguage;
use crate::models::wire;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ScheduleDay {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleDay::Monday => "monday",
            ScheduleDay::Tuesday => "tuesday",
            ScheduleDay::Wednesday => "wednesday",
            ScheduleDay::Thursday => "thursday",
            ScheduleDay::Friday => "friday",
            ScheduleDay::Saturday => "saturday",
            ScheduleDay::Sunday => "sunday",
        }
    }

    /// Display name of the day in the given language.
    pub fn localized_name(&self, language: SupportedLanguage) -> &'static str {
        match language {
            SupportedLanguage::English => match self {
                ScheduleDay::Monday => "Monday",
                ScheduleDay::Tuesday => "Tuesday",
                ScheduleDay::Wednesday => "Wednesday",
                ScheduleDay::Thursday => "Thursday",
                ScheduleDay::Friday => "Friday",
                ScheduleDay::Saturday => "Saturday",
                ScheduleDay::Sunday => "Sunday",
            },
            SupportedLanguage::Marathi => match self {
                ScheduleDay::Monday => "सोमवार",
                ScheduleDay::Tuesday => "मंगळवार",
                ScheduleDay::Wednesday => "बुधवार",
                ScheduleDay::Thursday => "गुरुवार",
                ScheduleDay::Friday => "शुक्रवार",
                ScheduleDay::Saturday => "शनिवार",
                ScheduleDay::Sunday => "रविवार",
            },
            SupportedLanguage::Hindi => match self {
                ScheduleDay::Monday => "सोमवार",
                ScheduleDay::Tuesday => "मंगलवार",
                ScheduleDay::Wednesday => "बुधवार",
                ScheduleDay::Thursday => "गुरुवार",
                ScheduleDay::Friday => "शुक्रवार",
                ScheduleDay::Saturday => "शनिवार",
                ScheduleDay::Sunday => "रविवार",
            },
        }
    }
}

/// One recurring availability window for a service. Configured by an
/// administrator; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default)]
    pub id: i64,
    pub day_of_week: ScheduleDay,
    #[serde(with = "wire::hms_time")]
    pub start_time: Time,
    #[serde(with = "wire::hms_time")]
    pub end_time: Time,
    pub is_active: bool,
}

impl ScheduleEntry {
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn overlaps(&self, other: &ScheduleEntry) -> bool {
        self.day_of_week == other.day_of_week
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    /// "HH:MM - HH:MM" label for schedule grids.
    pub fn display_range(&self) -> String {
        format!(
            "{:02}:{:02} - {:02}:{:02}",
            self.start_time.hour(),
            self.start_time.minute(),
            self.end_time.hour(),
            self.end_time.minute()
        )
    }
}

/// Overlapping or inverted windows double-count in slot computation.
/// They are administrator data errors, so log rather than fail.
pub fn log_schedule_warnings(service_id: i64, entries: &[ScheduleEntry]) {
    for entry in entries {
        if !entry.is_well_formed() {
            warn!(
                service_id,
                schedule_id = entry.id,
                day = entry.day_of_week.code(),
                "Schedule window does not start before it ends"
            );
        }
    }

    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            if a.overlaps(b) {
                warn!(
                    service_id,
                    first = a.id,
                    second = b.id,
                    day = a.day_of_week.code(),
                    "Overlapping schedule windows on the same day"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn entry(day: ScheduleDay, start: Time, end: Time) -> ScheduleEntry {
        ScheduleEntry {
            id: 0,
            day_of_week: day,
            start_time: start,
            end_time: end,
            is_active: true,
        }
    }

    #[test]
    fn windows_on_different_days_never_overlap() {
        let a = entry(ScheduleDay::Monday, time!(09:00), time!(12:00));
        let b = entry(ScheduleDay::Tuesday, time!(09:00), time!(12:00));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn same_day_windows_overlap_when_ranges_intersect() {
        let a = entry(ScheduleDay::Monday, time!(09:00), time!(12:00));
        let b = entry(ScheduleDay::Monday, time!(11:00), time!(14:00));
        let c = entry(ScheduleDay::Monday, time!(12:00), time!(14:00));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn display_range_drops_seconds() {
        let a = entry(ScheduleDay::Friday, time!(09:30:00), time!(17:00:00));
        assert_eq!(a.display_range(), "09:30 - 17:00");
    }

    #[test]
    fn day_names_localize() {
        assert_eq!(
            ScheduleDay::Tuesday.localized_name(SupportedLanguage::Marathi),
            "मंगळवार"
        );
        assert_eq!(
            ScheduleDay::Tuesday.localized_name(SupportedLanguage::Hindi),
            "मंगलवार"
        );
    }
}
