//! # Date Provider
//!
//! Expiry is judged against "today". Rather than reading the wall clock inside the rules,
//! the date comes from a [`Clock`] injected into the actors' context, so tests can pin it.

use chrono::{Local, NaiveDate};
use std::fmt::Debug;
use std::sync::Arc;

/// Source of the current calendar date.
pub trait Clock: Send + Sync + Debug {
    fn today(&self) -> NaiveDate;
}

/// Shared handle passed to actors.
pub type SharedClock = Arc<dyn Clock>;

/// The local calendar date of the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(SystemClock)
    }
}

impl FixedClock {
    pub fn shared(date: NaiveDate) -> SharedClock {
        Arc::new(FixedClock(date))
    }
}
