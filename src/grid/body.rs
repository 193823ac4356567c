use chrono::Weekday;
use serde::Serialize;
use std::iter;

use crate::calendar::{CalendarDate, EventMap};

pub const WEEK_LEN: usize = 7;

/// A real day on the grid together with the events filed under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell<'a, E> {
    pub day:    CalendarDate,
    pub events: &'a [E],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell<'a, E> {
    /// Padding before the 1st or after the last day. Carries nothing.
    Filler,
    Normal(DayCell<'a, E>),
    Today(DayCell<'a, E>),
}

impl<'a, E> Cell<'a, E> {
    pub fn is_filler(&self) -> bool { matches!(self, Cell::Filler) }

    pub fn day_cell(&self) -> Option<&DayCell<'a, E>> {
        match self {
            Cell::Filler => None,
            Cell::Normal(c) | Cell::Today(c) => Some(c),
        }
    }

    pub fn day(&self) -> Option<&CalendarDate> {
        self.day_cell().map(|c| &c.day)
    }

    pub fn events(&self) -> &'a [E] {
        match self {
            Cell::Filler => &[],
            Cell::Normal(c) | Cell::Today(c) => c.events,
        }
    }
}

/// One week of the grid. Always holds exactly [`WEEK_LEN`] cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GridRow<'a, E> {
    cells: Vec<Cell<'a, E>>,
}

impl<'a, E> GridRow<'a, E> {
    pub fn cells(&self) -> &[Cell<'a, E>] { &self.cells }

    /// Cell at a 1-based column, as the renderer numbers them.
    pub fn column(&self, column: usize) -> Option<&Cell<'a, E>> {
        column.checked_sub(1).and_then(|idx| self.cells.get(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GridBody<'a, E> {
    rows: Vec<GridRow<'a, E>>,
}

impl<'a, E> GridBody<'a, E> {
    pub fn rows(&self) -> &[GridRow<'a, E>] { &self.rows }

    pub fn cells(&self) -> impl Iterator<Item = &Cell<'a, E>> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

/// Days between the start of `first`'s week and `first` itself.
pub fn days_before_first(first: &CalendarDate, week_start: Weekday) -> usize {
    (first.date() - first.start_of_week(week_start).date()).num_days() as usize
}

/// Days between `last` and the end of its week.
pub fn days_after_last(last: &CalendarDate, week_start: Weekday) -> usize {
    (last.end_of_week(week_start).date() - last.date()).num_days() as usize
}

/// Lays the month out as week rows: leading filler, one cell per day, then
/// trailing filler that closes the last week.
pub fn build_body<'a, E>(
    days: &[CalendarDate],
    events: &'a EventMap<E>,
    week_start: Weekday,
) -> GridBody<'a, E> {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return GridBody { rows: Vec::new() };
    };
    let before = days_before_first(first, week_start);
    let after  = days_after_last(last, week_start);

    let cells = iter::repeat_with(|| Cell::Filler).take(before)
        .chain(days.iter().map(|day| day_cell(day, events)))
        .chain(iter::repeat_with(|| Cell::Filler).take(after));

    let rows = cells.fold(Vec::<GridRow<'a, E>>::new(), |mut rows, cell| {
        if rows.last().map_or(true, |row| row.cells.len() == WEEK_LEN) {
            rows.push(GridRow { cells: Vec::with_capacity(WEEK_LEN) });
        }
        if let Some(row) = rows.last_mut() {
            row.cells.push(cell);
        }
        rows
    });
    debug_assert!(rows.iter().all(|row| row.cells.len() == WEEK_LEN));

    GridBody { rows }
}

fn day_cell<'a, E>(day: &CalendarDate, events: &'a EventMap<E>) -> Cell<'a, E> {
    let cell = DayCell { day: *day, events: events.events_on(day.day()) };
    if day.is_today() { Cell::Today(cell) } else { Cell::Normal(cell) }
}
