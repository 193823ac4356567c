//! Month-view calendar grids.
//!
//! [`generate`] checks the input and collects the days of a month;
//! [`month_view`] lays them out as 7-wide week rows with filler cells from
//! the neighbouring months, plus a header with navigation links and weekday
//! labels. Rendering is left to whoever consumes the [`MonthView`].
//!
//! ```
//! use monthgrid::{generate, EventMap, GridOptions};
//!
//! let events: EventMap<&str> = [(14, "Valentine's Day")].into_iter().collect();
//! let calendar = generate(2024, 2, events).unwrap();
//! let view = calendar.month_view(&GridOptions::default());
//!
//! assert_eq!(view.body.rows().len(), 5);
//! assert_eq!(view.header.prev.href(), "?year=2024&month=1");
//! ```

pub mod calendar;
pub mod error;
pub mod grid;

pub use calendar::{
    days_in_month, generate, generate_from_value, generate_on, month_days, Calendar, CalendarDate,
    EventEntry, EventMap,
};
pub use error::{CalendarError, Result};
pub use grid::{month_view, Cell, GridBody, GridOptions, GridRow, HeaderBlock, LabelFormat, MonthLink, MonthView};
