//! Input checks that run before any date arithmetic.
//!
//! Typed callers only need [`validate`]; the `parse_*` functions accept
//! loosely typed values (query parameters, JSON, TOML) and apply the same
//! rules: numbers may arrive as numeric strings, events must be a mapping.

use serde_json::Value;

use super::events::{EventEntry, EventMap};
use crate::error::{CalendarError, Result};

/// Last year a calendar can be generated for.
pub const MAX_YEAR: i32 = 9999;

pub fn validate(year: i32, month: u32) -> Result<()> {
    validate_year(year)?;
    validate_month(month)
}

pub fn validate_year(year: i32) -> Result<()> {
    if year <= 0 || year > MAX_YEAR {
        return Err(CalendarError::InvalidYear(year.to_string()));
    }
    Ok(())
}

pub fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month.to_string()));
    }
    Ok(())
}

pub fn parse_year(value: Option<&Value>) -> Result<i32> {
    let year = value
        .and_then(whole_number)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| CalendarError::InvalidYear(describe(value)))?;
    validate_year(year).map_err(|_| CalendarError::InvalidYear(describe(value)))?;
    Ok(year)
}

pub fn parse_month(value: Option<&Value>) -> Result<u32> {
    let month = value
        .and_then(whole_number)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| CalendarError::InvalidMonth(describe(value)))?;
    validate_month(month).map_err(|_| CalendarError::InvalidMonth(describe(value)))?;
    Ok(month)
}

/// Accepts an object keyed by day number or an array (positions are the
/// keys). Object keys that are not a day number are kept out of the map.
/// Absent events mean no events. A day holding an array is a list of
/// events; anything else is a single event.
pub fn parse_events(value: Option<&Value>) -> Result<EventMap<Value>> {
    let mut map = EventMap::new();
    match value {
        None => {}
        Some(Value::Object(entries)) => {
            for (key, events) in entries {
                // Keys that are not a day number can never be looked up.
                if let Ok(day) = key.trim().parse::<u32>() {
                    map.set(day, entry(events));
                }
            }
        }
        Some(Value::Array(list)) => {
            for (idx, events) in list.iter().enumerate() {
                if let Ok(day) = u32::try_from(idx) {
                    map.set(day, entry(events));
                }
            }
        }
        Some(other) => {
            return Err(CalendarError::InvalidEvents(format!(
                "expected a mapping of day of month to event(s), got {}",
                kind(other)
            )));
        }
    }
    Ok(map)
}

fn entry(events: &Value) -> EventEntry<Value> {
    match events {
        Value::Array(list) => EventEntry::Many(list.clone()),
        single             => EventEntry::One(single.clone()),
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None                    => String::new(),
        Some(Value::String(s))  => s.clone(),
        Some(other)             => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}
