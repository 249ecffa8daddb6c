mod date;
mod reservation;
mod vehicle;

pub(crate) use self::date::*;
pub use self::{reservation::*, vehicle::*};
