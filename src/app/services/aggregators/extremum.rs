//! Extremes with the date they were first reached
//!
//! Only a strictly better value replaces the current extreme, so on ties the
//! first record in iteration order wins.

use crate::app::models::DatedValue;
use chrono::NaiveDate;

/// Largest value seen and the date it was first seen on
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaxWithDate {
    best: Option<DatedValue>,
}

/// Smallest value seen and the date it was first seen on
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MinWithDate {
    best: Option<DatedValue>,
}

impl MaxWithDate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a value; returns whether it became the new maximum
    pub fn update(&mut self, value: f64, date: NaiveDate) -> bool {
        replace_if(&mut self.best, value, date, |candidate, current| {
            candidate > current
        })
    }

    /// Offer an optional value; absent values are skipped
    pub fn update_optional(&mut self, value: Option<f64>, date: NaiveDate) -> bool {
        value.is_some_and(|value| self.update(value, date))
    }

    pub fn result(&self) -> Option<DatedValue> {
        self.best
    }
}

impl MinWithDate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a value; returns whether it became the new minimum
    pub fn update(&mut self, value: f64, date: NaiveDate) -> bool {
        replace_if(&mut self.best, value, date, |candidate, current| {
            candidate < current
        })
    }

    /// Offer an optional value; absent values are skipped
    pub fn update_optional(&mut self, value: Option<f64>, date: NaiveDate) -> bool {
        value.is_some_and(|value| self.update(value, date))
    }

    pub fn result(&self) -> Option<DatedValue> {
        self.best
    }
}

/// `None` plays the role of the infinite seed: any first value wins
fn replace_if(
    best: &mut Option<DatedValue>,
    value: f64,
    date: NaiveDate,
    improves: impl Fn(f64, f64) -> bool,
) -> bool {
    let replace = match best {
        None => true,
        Some(current) => improves(value, current.value),
    };
    if replace {
        *best = Some(DatedValue { value, date });
    }
    replace
}
