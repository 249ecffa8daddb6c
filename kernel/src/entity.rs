mod common;
mod reservation;
mod vehicle;

pub use self::{common::*, reservation::*, vehicle::*};
