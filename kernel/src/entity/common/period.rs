use serde::{Deserialize, Serialize};
use time::Date;

use crate::availability::dates_overlap;

/// Closed day interval. Endpoints given in reverse are swapped.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RentalPeriod {
    from: Date,
    to: Date,
}

impl RentalPeriod {
    pub fn new(from: Date, to: Date) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    pub fn from(&self) -> Date {
        self.from
    }

    pub fn to(&self) -> Date {
        self.to
    }

    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        dates_overlap(self.from, self.to, other.from, other.to)
    }
}

/// Requested dates as they arrive from a date picker. Either end may still be
/// unset while the renter is choosing.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CandidateInterval {
    from: Option<Date>,
    to: Option<Date>,
}

impl CandidateInterval {
    pub fn new(from: Option<Date>, to: Option<Date>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Option<RentalPeriod> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(RentalPeriod::new(from, to)),
            _ => None,
        }
    }
}

impl From<RentalPeriod> for CandidateInterval {
    fn from(period: RentalPeriod) -> Self {
        Self::new(Some(period.from), Some(period.to))
    }
}
