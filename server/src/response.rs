mod reservation;
mod vehicle;

pub use self::{reservation::*, vehicle::*};
