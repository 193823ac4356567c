use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A single day on the calendar, remembering which day counted as "today"
/// when it was built so every derived date can answer `is_today` too.
///
/// Arithmetic saturates at the ends of chrono's representable range instead
/// of failing; validated calendars never get near either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    date:  NaiveDate,
    today: NaiveDate,
}

impl CalendarDate {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        Self { date, today }
    }

    pub fn date(&self)    -> NaiveDate { self.date }
    pub fn year(&self)    -> i32       { self.date.year() }
    pub fn month(&self)   -> u32       { self.date.month() }
    pub fn day(&self)     -> u32       { self.date.day() }
    pub fn weekday(&self) -> Weekday   { self.date.weekday() }
    pub fn is_today(&self) -> bool     { self.date == self.today }

    /// Position of this day inside a week that begins on `week_start` (0..=6).
    pub fn days_from_week_start(&self, week_start: Weekday) -> u32 {
        (self.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
    }

    pub fn start_of_week(&self, week_start: Weekday) -> Self {
        self.sub_days(u64::from(self.days_from_week_start(week_start)))
    }

    pub fn end_of_week(&self, week_start: Weekday) -> Self {
        self.add_days(u64::from(6 - self.days_from_week_start(week_start)))
    }

    pub fn add_days(&self, n: u64) -> Self {
        self.with_date(self.date.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX))
    }

    pub fn sub_days(&self, n: u64) -> Self {
        self.with_date(self.date.checked_sub_days(Days::new(n)).unwrap_or(NaiveDate::MIN))
    }

    /// Same day next month, clamped to the month's last day (Jan 31 -> Feb 28/29).
    pub fn add_month(&self) -> Self {
        self.with_date(self.date.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX))
    }

    pub fn sub_month(&self) -> Self {
        self.with_date(self.date.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN))
    }

    fn with_date(&self, date: NaiveDate) -> Self {
        Self { date, today: self.today }
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CalendarDate", 4)?;
        s.serialize_field("date", &self.date)?;
        s.serialize_field("day", &self.day())?;
        s.serialize_field("weekday", &self.weekday())?;
        s.serialize_field("is_today", &self.is_today())?;
        s.end()
    }
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
