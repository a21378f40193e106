use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Half-open UTC interval `[start, end)` covering whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Builds the range from the first instant of `first_day` up to, but excluding, the first
    /// instant of the day after `last_day`.
    ///
    /// Callers ensure `last_day >= first_day`.
    pub fn from_dates(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        let start = first_day.and_time(chrono::NaiveTime::MIN).and_utc();
        let end = (last_day + Duration::days(1))
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();

        Self { start, end }
    }
}
