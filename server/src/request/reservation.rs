use crate::controller::Intake;
use application::transfer::{CreateReservationDto, UpdateReservationStatusDto};
use kernel::prelude::entity::ReservationStatus;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(alias = "vehicleId")]
    vehicle_id: Uuid,
    #[serde(alias = "rentFrom", alias = "startDate")]
    rent_from: String,
    #[serde(alias = "rentTo", alias = "endDate")]
    rent_to: String,
    customer: String,
    phone: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationStatusRequest {
    status: ReservationStatus,
}

pub struct ReservationTransformer;

impl Intake<CreateReservationRequest> for ReservationTransformer {
    type To = CreateReservationDto;
    fn emit(&self, input: CreateReservationRequest) -> Self::To {
        CreateReservationDto {
            vehicle_id: input.vehicle_id,
            rent_from: input.rent_from,
            rent_to: input.rent_to,
            customer: input.customer,
            phone: input.phone,
        }
    }
}

impl Intake<(Uuid, UpdateReservationStatusRequest)> for ReservationTransformer {
    type To = UpdateReservationStatusDto;
    fn emit(&self, input: (Uuid, UpdateReservationStatusRequest)) -> Self::To {
        let (id, input) = input;
        UpdateReservationStatusDto {
            id,
            status: input.status,
        }
    }
}
