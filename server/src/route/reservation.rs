use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateReservationRequest, ReservationTransformer, UpdateReservationStatusRequest,
};
use crate::response::ReservationPresenter;
use application::service::{
    CreateReservationService, GetReservationService, UpdateReservationStatusService,
};
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use uuid::Uuid;

pub trait ReservationRouter {
    fn route_reservation(self) -> Self;
}

impl ReservationRouter for Router<AppModule> {
    fn route_reservation(self) -> Self {
        self.route(
            "/reservations",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), ReservationPresenter)
                    .bypass(|| async move { module.pgpool().get_reservations().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateReservationRequest>| async move {
                    Controller::new(ReservationTransformer, ReservationPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.pgpool().create_reservation(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/reservations/:id",
            patch(
                |State(module): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<UpdateReservationStatusRequest>| async move {
                    Controller::new(ReservationTransformer, ReservationPresenter)
                        .intake((id, req))
                        .handle(|dto| async move {
                            module.pgpool().update_reservation_status(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
