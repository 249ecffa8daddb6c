use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::ReservationQuery;
use kernel::interface::update::ReservationModifier;
use kernel::prelude::entity::{
    CustomerName, CustomerPhone, DateText, Reservation, ReservationId, ReservationStatus,
    VehicleId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresReservationRepository;

#[async_trait::async_trait]
impl ReservationQuery for PostgresReservationRepository {
    type Transaction = PostgresTransaction;

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        PgReservationInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        PgReservationInternal::find_by_id(con, id).await
    }

    async fn find_by_vehicle_id(
        &self,
        con: &mut PostgresTransaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        PgReservationInternal::find_by_vehicle_id(con, vehicle_id).await
    }
}

#[async_trait::async_trait]
impl ReservationModifier for PostgresReservationRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError> {
        PgReservationInternal::create(con, reservation).await
    }

    async fn update_status(
        &self,
        con: &mut PostgresTransaction,
        id: &ReservationId,
        status: &ReservationStatus,
    ) -> error_stack::Result<(), KernelError> {
        PgReservationInternal::update_status(con, id, status).await
    }
}

#[derive(sqlx::FromRow)]
struct ReservationRow {
    id: Uuid,
    vehicle_id: Uuid,
    status: String,
    rent_from: Option<String>,
    rent_to: Option<String>,
    customer: String,
    phone: String,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation::new(
            ReservationId::new(row.id),
            VehicleId::new(row.vehicle_id),
            ReservationStatus::from_raw(&row.status),
            row.rent_from.map(DateText::new),
            row.rent_to.map(DateText::new),
            CustomerName::new(row.customer),
            CustomerPhone::new(row.phone),
        )
    }
}

pub(in crate::database) struct PgReservationInternal;

impl PgReservationInternal {
    async fn find_all(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, status, rent_from, rent_to, customer, phone
            FROM reservations
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, status, rent_from, rent_to, customer, phone
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Reservation::from))
    }

    async fn find_by_vehicle_id(
        con: &mut PgConnection,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            // language=postgresql
            r#"
            SELECT id, vehicle_id, status, rent_from, rent_to, customer, phone
            FROM reservations
            WHERE vehicle_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(vehicle_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO reservations (id, vehicle_id, status, rent_from, rent_to, customer, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(reservation.id().as_ref())
        .bind(reservation.vehicle_id().as_ref())
        .bind(reservation.status().as_str())
        .bind(reservation.rent_from().clone().map(String::from))
        .bind(reservation.rent_to().clone().map(String::from))
        .bind(reservation.customer().as_ref())
        .bind(reservation.phone().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &ReservationId,
        status: &ReservationStatus,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE reservations
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(status.as_str())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
