pub mod date;
pub mod events;
pub mod validate;

use chrono::{Months, NaiveDate};
use serde::Serialize;
use serde_json::Value;

pub use date::CalendarDate;
pub use events::{EventEntry, EventMap};

use crate::error::{CalendarError, Result};

/// One generated month: its days in order plus the caller's events.
///
/// Only [`generate`] and friends build one, so `days` always covers the
/// whole month and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar<E> {
    year:   i32,
    month:  u32,
    days:   Vec<CalendarDate>,
    events: EventMap<E>,
}

impl<E> Calendar<E> {
    pub fn year(&self)  -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }
    pub fn days(&self)  -> &[CalendarDate] { &self.days }
    pub fn events(&self) -> &EventMap<E> { &self.events }

    pub fn first_day(&self) -> &CalendarDate { &self.days[0] }
    pub fn last_day(&self)  -> &CalendarDate { &self.days[self.days.len() - 1] }

    pub fn events_on(&self, day: u32) -> &[E] {
        self.events.events_on(day)
    }
}

/// Builds the calendar for `year`/`month`, marking today from the local clock.
pub fn generate<E>(year: i32, month: u32, events: EventMap<E>) -> Result<Calendar<E>> {
    generate_on(year, month, events, date::local_today())
}

/// Same as [`generate`] with an explicit "today".
pub fn generate_on<E>(
    year: i32,
    month: u32,
    events: EventMap<E>,
    today: NaiveDate,
) -> Result<Calendar<E>> {
    validate::validate(year, month)?;
    build(year, month, events, today)
}

/// Entry point for loosely typed input such as query parameters or a
/// parsed JSON document. Missing events mean an empty map.
pub fn generate_from_value(
    year: Option<&Value>,
    month: Option<&Value>,
    events: Option<&Value>,
) -> Result<Calendar<Value>> {
    generate_from_value_on(year, month, events, date::local_today())
}

pub fn generate_from_value_on(
    year: Option<&Value>,
    month: Option<&Value>,
    events: Option<&Value>,
    today: NaiveDate,
) -> Result<Calendar<Value>> {
    let year   = validate::parse_year(year)?;
    let month  = validate::parse_month(month)?;
    let events = validate::parse_events(events)?;
    build(year, month, events, today)
}

fn build<E>(year: i32, month: u32, events: EventMap<E>, today: NaiveDate) -> Result<Calendar<E>> {
    let days = month_days_on(year, month, today);
    if days.is_empty() {
        return Err(CalendarError::InvalidMonth(month.to_string()));
    }
    tracing::debug!(year, month, days = days.len(), event_days = events.len(), "calendar generated");
    Ok(Calendar { year, month, days, events })
}

/// Every day of the month in order, marking today from the local clock.
pub fn month_days(year: i32, month: u32) -> Vec<CalendarDate> {
    month_days_on(year, month, date::local_today())
}

/// Walks forward from the 1st while still before the 1st of the next month.
/// Empty when `year`/`month` is not a real month.
pub fn month_days_on(year: i32, month: u32, today: NaiveDate) -> Vec<CalendarDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else { return Vec::new() };
    let Some(next)  = first.checked_add_months(Months::new(1)) else { return Vec::new() };

    first
        .iter_days()
        .take_while(|d| *d < next)
        .map(|d| CalendarDate::new(d, today))
        .collect()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else { return 0 };
    first
        .checked_add_months(Months::new(1))
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(0)
}
