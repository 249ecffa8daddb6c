use crate::controller::Intake;
use application::transfer::{
    BlockVehicleDto, CheckAvailabilityDto, CreateVehicleDto, GetAvailableVehicleDto,
    GetVehicleReservationsDto,
};
use kernel::prelude::entity::VehicleStatus;
use serde::Deserialize;
use uuid::Uuid;

/// `from`/`to` query parameters. Either may be absent, in which case the
/// window is unbounded and only the vehicle status is checked.
#[derive(Debug, Default, Deserialize)]
pub struct AvailabilityQuery {
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    name: String,
    status: Option<VehicleStatus>,
}

#[derive(Debug, Deserialize)]
pub struct BlockVehicleRequest {
    #[serde(alias = "blockFromDate")]
    from: Option<String>,
    #[serde(alias = "blockToDate")]
    to: Option<String>,
}

#[derive(Debug)]
pub struct GetVehicleReservationsRequest {
    id: Uuid,
}

impl GetVehicleReservationsRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct VehicleTransformer;

impl Intake<AvailabilityQuery> for VehicleTransformer {
    type To = GetAvailableVehicleDto;
    fn emit(&self, input: AvailabilityQuery) -> Self::To {
        GetAvailableVehicleDto {
            from: input.from,
            to: input.to,
        }
    }
}

impl Intake<(Uuid, AvailabilityQuery)> for VehicleTransformer {
    type To = CheckAvailabilityDto;
    fn emit(&self, input: (Uuid, AvailabilityQuery)) -> Self::To {
        let (vehicle_id, input) = input;
        CheckAvailabilityDto {
            vehicle_id,
            from: input.from,
            to: input.to,
        }
    }
}

impl Intake<CreateVehicleRequest> for VehicleTransformer {
    type To = CreateVehicleDto;
    fn emit(&self, input: CreateVehicleRequest) -> Self::To {
        CreateVehicleDto {
            name: input.name,
            status: input.status.unwrap_or(VehicleStatus::Available),
        }
    }
}

impl Intake<(Uuid, BlockVehicleRequest)> for VehicleTransformer {
    type To = BlockVehicleDto;
    fn emit(&self, input: (Uuid, BlockVehicleRequest)) -> Self::To {
        let (id, input) = input;
        BlockVehicleDto {
            id,
            from: input.from,
            to: input.to,
        }
    }
}

impl Intake<GetVehicleReservationsRequest> for VehicleTransformer {
    type To = GetVehicleReservationsDto;
    fn emit(&self, input: GetVehicleReservationsRequest) -> Self::To {
        GetVehicleReservationsDto {
            vehicle_id: input.id,
        }
    }
}
