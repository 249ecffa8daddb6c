use kernel::prelude::entity::{DestructVehicle, Vehicle, VehicleStatus};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDto {
    pub id: Uuid,
    pub name: String,
    pub status: VehicleStatus,
    pub block_from_date: Option<String>,
    pub block_to_date: Option<String>,
}

impl From<Vehicle> for VehicleDto {
    fn from(value: Vehicle) -> Self {
        let DestructVehicle {
            id,
            name,
            status,
            block_from_date,
            block_to_date,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            status,
            block_from_date: block_from_date.map(String::from),
            block_to_date: block_to_date.map(String::from),
        }
    }
}

pub struct GetAvailableVehicleDto {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub struct CheckAvailabilityDto {
    pub vehicle_id: Uuid,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub struct CreateVehicleDto {
    pub name: String,
    pub status: VehicleStatus,
}

pub struct BlockVehicleDto {
    pub id: Uuid,
    pub from: Option<String>,
    pub to: Option<String>,
}
