use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    AvailabilityQuery, BlockVehicleRequest, CreateVehicleRequest, GetVehicleReservationsRequest,
    VehicleTransformer,
};
use crate::response::{ReservationPresenter, VehiclePresenter};
use application::service::{
    BlockVehicleService, CheckVehicleAvailabilityService, CreateVehicleService,
    GetAvailableVehicleService, GetReservationService,
};
use axum::extract::{Path, Query, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use uuid::Uuid;

pub trait VehicleRouter {
    fn route_vehicle(self) -> Self;
}

impl VehicleRouter for Router<AppModule> {
    fn route_vehicle(self) -> Self {
        self.route(
            "/vehicles",
            get(
                |State(module): State<AppModule>, Query(req): Query<AvailabilityQuery>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            module.pgpool().get_available_vehicles(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateVehicleRequest>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/vehicles/:id/availability",
            get(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Query(req): Query<AvailabilityQuery>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake((id, req))
                        .handle(|dto| async move {
                            module.pgpool().check_vehicle_availability(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/vehicles/:id/block",
            patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<BlockVehicleRequest>| async move {
                    Controller::new(VehicleTransformer, VehiclePresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.pgpool().block_vehicle(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/vehicles/:id/reservations",
            get(
                |State(module): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(VehicleTransformer, ReservationPresenter)
                        .intake(GetVehicleReservationsRequest::new(id))
                        .handle(|dto| async move {
                            module.pgpool().get_reservations_of_vehicle(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
