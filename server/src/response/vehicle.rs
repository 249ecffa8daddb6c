use crate::controller::Exhaust;
use application::transfer::VehicleDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::VehicleStatus;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreatedVehicleResponse {
    id: Uuid,
}

impl IntoResponse for CreatedVehicleResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    id: Uuid,
    name: String,
    status: VehicleStatus,
    block_from_date: Option<String>,
    block_to_date: Option<String>,
}

impl From<VehicleDto> for VehicleResponse {
    fn from(value: VehicleDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: value.status,
            block_from_date: value.block_from_date,
            block_to_date: value.block_to_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    available: bool,
}

impl IntoResponse for AvailabilityResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct VehiclePresenter;

impl Exhaust<()> for VehiclePresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<Uuid> for VehiclePresenter {
    type To = CreatedVehicleResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedVehicleResponse { id: input }
    }
}

impl Exhaust<bool> for VehiclePresenter {
    type To = AvailabilityResponse;
    fn emit(&self, input: bool) -> Self::To {
        AvailabilityResponse { available: input }
    }
}

impl Exhaust<Vec<VehicleDto>> for VehiclePresenter {
    type To = axum::Json<Vec<VehicleResponse>>;
    fn emit(&self, input: Vec<VehicleDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(VehicleResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
