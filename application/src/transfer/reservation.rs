use kernel::prelude::entity::{DestructReservation, Reservation, ReservationStatus};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub status: ReservationStatus,
    pub rent_from: Option<String>,
    pub rent_to: Option<String>,
    pub customer: String,
    pub phone: String,
}

impl From<Reservation> for ReservationDto {
    fn from(value: Reservation) -> Self {
        let DestructReservation {
            id,
            vehicle_id,
            status,
            rent_from,
            rent_to,
            customer,
            phone,
        } = value.into_destruct();
        Self {
            id: id.into(),
            vehicle_id: vehicle_id.into(),
            status,
            rent_from: rent_from.map(String::from),
            rent_to: rent_to.map(String::from),
            customer: customer.into(),
            phone: phone.into(),
        }
    }
}

pub struct GetVehicleReservationsDto {
    pub vehicle_id: Uuid,
}

pub struct CreateReservationDto {
    pub vehicle_id: Uuid,
    pub rent_from: String,
    pub rent_to: String,
    pub customer: String,
    pub phone: String,
}

pub struct UpdateReservationStatusDto {
    pub id: Uuid,
    pub status: ReservationStatus,
}
