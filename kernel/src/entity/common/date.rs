use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

use crate::availability::parse_calendar_date;

/// Date text exactly as the store serialises it.
///
/// The booking form writes `DD.MM.YYYY` while the admin panel and older
/// records use `YYYY-MM-DD`, so the raw value is kept and parsed on demand.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
#[serde(transparent)]
pub struct DateText(String);

impl DateText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn calendar_date(&self) -> Option<Date> {
        parse_calendar_date(&self.0)
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<Date> for DateText {
    fn from(date: Date) -> Self {
        // `Date` Display is always `YYYY-MM-DD`
        Self(date.to_string())
    }
}
