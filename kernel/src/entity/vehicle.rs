mod id;
mod name;
mod status;

pub use self::{id::*, name::*, status::*};
use crate::entity::common::DateText;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Vehicle {
    id: VehicleId,
    name: VehicleName,
    status: VehicleStatus,
    block_from_date: Option<DateText>,
    block_to_date: Option<DateText>,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        name: VehicleName,
        status: VehicleStatus,
        block_from_date: Option<DateText>,
        block_to_date: Option<DateText>,
    ) -> Self {
        Self {
            id,
            name,
            status,
            block_from_date,
            block_to_date,
        }
    }
}
