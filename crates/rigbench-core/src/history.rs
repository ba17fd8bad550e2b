//! Retailer price history
//!
//! One observation per calendar day, newest first. Recording again on the
//! same day amends that day's entry; days without observations are simply
//! absent.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A price observed on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: u64,
}

/// Price observations of one retailer link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistory {
    entries: Vec<PricePoint>,
}

impl PriceHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from stored points, restoring newest-first order and the
    /// one-entry-per-day invariant (the first point seen for a day wins)
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by(|a, b| b.date.cmp(&a.date));
        points.dedup_by_key(|p| p.date);
        Self { entries: points }
    }

    /// Record a price for `today`.
    ///
    /// Overwrites the newest entry if it is from the same day, otherwise
    /// prepends a new one.
    pub fn record(&mut self, price: u64, today: NaiveDate) {
        match self.entries.first_mut() {
            Some(latest) if latest.date == today => latest.price = price,
            _ => self.entries.insert(0, PricePoint { date: today, price }),
        }
    }

    /// Record a price for the current local calendar day
    pub fn record_today(&mut self, price: u64) {
        self.record(price, Local::now().date_naive());
    }

    /// Newest observation
    pub fn latest(&self) -> Option<&PricePoint> {
        self.entries.first()
    }

    /// Cheapest observation (most recent one on ties)
    pub fn lowest(&self) -> Option<&PricePoint> {
        self.entries.iter().min_by_key(|p| p.price)
    }

    /// Observation of a given day
    pub fn on(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.entries.iter().find(|p| p.date == date)
    }

    /// All observations, newest first
    pub fn entries(&self) -> &[PricePoint] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
