use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use super::GridOptions;
use crate::calendar::CalendarDate;

/// Navigation target for another month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthLink {
    pub year:  i32,
    pub month: u32,
}

impl MonthLink {
    pub fn of(date: &CalendarDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Query string a renderer can use as the link target.
    pub fn href(&self) -> String {
        format!("?year={}&month={}", self.year, self.month)
    }
}

impl fmt::Display for MonthLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

impl Serialize for MonthLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("MonthLink", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("href", &self.href())?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WeekdayLabel {
    pub day:   CalendarDate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBlock {
    pub first_day:   CalendarDate,
    pub month_label: String,
    pub prev:        MonthLink,
    pub next:        MonthLink,
    pub weekdays:    [WeekdayLabel; 7],
}

/// The header as a renderer walks it: navigation row, then weekday row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderCell<'a> {
    PrevLink(MonthLink),
    MonthLabel { label: &'a str, day: CalendarDate },
    NextLink(MonthLink),
    WeekdayLabel(&'a WeekdayLabel),
}

impl HeaderBlock {
    pub fn navigation(&self) -> [HeaderCell<'_>; 3] {
        [
            HeaderCell::PrevLink(self.prev),
            HeaderCell::MonthLabel { label: &self.month_label, day: self.first_day },
            HeaderCell::NextLink(self.next),
        ]
    }

    pub fn weekday_row(&self) -> Vec<HeaderCell<'_>> {
        self.weekdays.iter().map(HeaderCell::WeekdayLabel).collect()
    }

    pub fn rows(&self) -> (Vec<HeaderCell<'_>>, Vec<HeaderCell<'_>>) {
        (self.navigation().into(), self.weekday_row())
    }
}

impl Serialize for HeaderBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (navigation, weekdays) = self.rows();
        [navigation, weekdays].serialize(serializer)
    }
}

/// Header for the month that `first` opens: links one month either side,
/// the month label and a week of weekday labels from `first`'s week start.
pub fn build_header(first: &CalendarDate, options: &GridOptions) -> HeaderBlock {
    let week_start = first.start_of_week(options.week_start);
    let weekdays = std::array::from_fn(|offset| {
        let day = week_start.add_days(offset as u64);
        WeekdayLabel { label: options.labels.weekday_label(&day), day }
    });

    HeaderBlock {
        first_day:   *first,
        month_label: options.labels.month_label(first),
        prev:        MonthLink::of(&first.sub_month()),
        next:        MonthLink::of(&first.add_month()),
        weekdays,
    }
}
