mod customer;
mod id;
mod status;

pub use self::{customer::*, id::*, status::*};
use crate::entity::common::DateText;
use crate::entity::VehicleId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Reservation {
    id: ReservationId,
    vehicle_id: VehicleId,
    status: ReservationStatus,
    rent_from: Option<DateText>,
    rent_to: Option<DateText>,
    customer: CustomerName,
    phone: CustomerPhone,
}

impl Reservation {
    pub fn new(
        id: ReservationId,
        vehicle_id: VehicleId,
        status: ReservationStatus,
        rent_from: Option<DateText>,
        rent_to: Option<DateText>,
        customer: CustomerName,
        phone: CustomerPhone,
    ) -> Self {
        Self {
            id,
            vehicle_id,
            status,
            rent_from,
            rent_to,
            customer,
            phone,
        }
    }
}
