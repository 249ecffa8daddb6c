use crate::controller::Exhaust;
use application::transfer::ReservationDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::ReservationStatus;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CreatedReservationResponse {
    id: Uuid,
}

impl IntoResponse for CreatedReservationResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    id: Uuid,
    vehicle_id: Uuid,
    status: ReservationStatus,
    rent_from: Option<String>,
    rent_to: Option<String>,
    customer: String,
    phone: String,
}

impl From<ReservationDto> for ReservationResponse {
    fn from(value: ReservationDto) -> Self {
        Self {
            id: value.id,
            vehicle_id: value.vehicle_id,
            status: value.status,
            rent_from: value.rent_from,
            rent_to: value.rent_to,
            customer: value.customer,
            phone: value.phone,
        }
    }
}

pub struct ReservationPresenter;

impl Exhaust<()> for ReservationPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

impl Exhaust<Uuid> for ReservationPresenter {
    type To = CreatedReservationResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedReservationResponse { id: input }
    }
}

impl Exhaust<Vec<ReservationDto>> for ReservationPresenter {
    type To = axum::Json<Vec<ReservationResponse>>;
    fn emit(&self, input: Vec<ReservationDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(ReservationResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}
