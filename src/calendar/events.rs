use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What callers store against a day: a lone payload or a list of them.
/// Both read back as a slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventEntry<E> {
    Many(Vec<E>),
    One(E),
}

impl<E> EventEntry<E> {
    pub fn as_slice(&self) -> &[E] {
        match self {
            EventEntry::Many(events) => events,
            EventEntry::One(event)   => std::slice::from_ref(event),
        }
    }
}

/// Event payloads keyed by day of month. The payload type is opaque here.
///
/// Keys are not checked against the month they end up on: a key past the
/// month's last day is kept but never looked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventMap<E> {
    entries: BTreeMap<u32, EventEntry<E>>,
}

impl<E> Default for EventMap<E> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<E> EventMap<E> {
    pub fn new() -> Self { Self::default() }

    /// Replaces whatever was stored for `day`.
    pub fn set(&mut self, day: u32, entry: EventEntry<E>) {
        self.entries.insert(day, entry);
    }

    /// Adds one more event to `day`, promoting a lone payload to a list.
    pub fn push(&mut self, day: u32, event: E) {
        let entry = match self.entries.remove(&day) {
            None                            => EventEntry::One(event),
            Some(EventEntry::One(first))    => EventEntry::Many(vec![first, event]),
            Some(EventEntry::Many(mut list)) => { list.push(event); EventEntry::Many(list) }
        };
        self.entries.insert(day, entry);
    }

    /// Events for `day`, always as a list; empty when nothing is stored.
    pub fn events_on(&self, day: u32) -> &[E] {
        self.entries.get(&day).map(EventEntry::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }
}

impl<E> FromIterator<(u32, E)> for EventMap<E> {
    fn from_iter<I: IntoIterator<Item = (u32, E)>>(iter: I) -> Self {
        let mut map = EventMap::new();
        for (day, event) in iter {
            map.push(day, event);
        }
        map
    }
}

impl<E> From<BTreeMap<u32, EventEntry<E>>> for EventMap<E> {
    fn from(entries: BTreeMap<u32, EventEntry<E>>) -> Self {
        Self { entries }
    }
}
