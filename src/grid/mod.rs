//! Turns a generated [`Calendar`] into what a month-view template needs:
//! week rows of day cells and a header block.

pub mod body;
pub mod header;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use std::fmt::Write;

pub use body::{build_body, days_after_last, days_before_first, Cell, DayCell, GridBody, GridRow, WEEK_LEN};
pub use header::{build_header, HeaderBlock, HeaderCell, MonthLink, WeekdayLabel};

use crate::calendar::{Calendar, CalendarDate};
use crate::error::{CalendarError, Result};

/// strftime patterns for the month label and the weekday labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelFormat {
    month:   String,
    weekday: String,
}

impl LabelFormat {
    pub const DEFAULT_MONTH:   &'static str = "%B %Y";
    pub const DEFAULT_WEEKDAY: &'static str = "%a";

    /// Fails when either pattern cannot format a plain date (bad specifiers,
    /// or time-of-day fields such as `%H`).
    pub fn new(month: impl Into<String>, weekday: impl Into<String>) -> Result<Self> {
        let (month, weekday) = (month.into(), weekday.into());
        check_pattern(&month)?;
        check_pattern(&weekday)?;
        Ok(Self { month, weekday })
    }

    pub fn month_label(&self, day: &CalendarDate) -> String {
        day.date().format(&self.month).to_string()
    }

    pub fn weekday_label(&self, day: &CalendarDate) -> String {
        day.date().format(&self.weekday).to_string()
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            month:   Self::DEFAULT_MONTH.to_owned(),
            weekday: Self::DEFAULT_WEEKDAY.to_owned(),
        }
    }
}

fn check_pattern(pattern: &str) -> Result<()> {
    let mut out = String::new();
    write!(out, "{}", NaiveDate::default().format(pattern))
        .map_err(|_| CalendarError::InvalidLabelFormat(pattern.to_owned()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub week_start: Weekday,
    pub labels:     LabelFormat,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { week_start: Weekday::Mon, labels: LabelFormat::default() }
    }
}

/// Everything a renderer needs for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView<'a, E> {
    pub header: HeaderBlock,
    pub body:   GridBody<'a, E>,
}

pub fn month_view<'a, E>(calendar: &'a Calendar<E>, options: &GridOptions) -> MonthView<'a, E> {
    let header = build_header(calendar.first_day(), options);
    let body   = build_body(calendar.days(), calendar.events(), options.week_start);
    tracing::debug!(
        year = calendar.year(),
        month = calendar.month(),
        rows = body.rows().len(),
        "month view built"
    );
    MonthView { header, body }
}

impl<E> Calendar<E> {
    pub fn month_view(&self, options: &GridOptions) -> MonthView<'_, E> {
        month_view(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{generate_on, EventMap};

    #[test]
    fn rejects_bad_patterns() {
        assert!(LabelFormat::new("%B %Y", "%a").is_ok());
        assert_eq!(
            LabelFormat::new("%Q", "%a"),
            Err(CalendarError::InvalidLabelFormat("%Q".into()))
        );
        assert!(matches!(LabelFormat::new("%B", "%H:%M"), Err(CalendarError::InvalidLabelFormat(_))));
    }

    #[test]
    fn view_combines_header_and_body() {
        let today  = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let events: EventMap<&str> = [(29, "leap")].into_iter().collect();
        let cal    = generate_on(2024, 2, events, today).unwrap();
        let view   = cal.month_view(&GridOptions::default());

        assert_eq!(view.header.month_label, "February 2024");
        assert_eq!(view.body.rows().len(), 5);
        assert_eq!(view.body.cells().filter(|c| !c.is_filler()).count(), 29);
        let leap = view.body.cells().find(|c| c.day().map(|d| d.day()) == Some(29)).unwrap();
        assert_eq!(leap.events(), &["leap"]);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["header"].is_array());
        assert_eq!(json["body"].as_array().unwrap().len(), 5);
    }
}
