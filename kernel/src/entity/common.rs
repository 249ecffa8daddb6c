mod date;
mod period;

pub use self::{date::*, period::*};
