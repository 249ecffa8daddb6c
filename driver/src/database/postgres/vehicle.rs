use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::VehicleQuery;
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{DateText, Vehicle, VehicleId, VehicleName, VehicleStatus};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresVehicleRepository;

#[async_trait::async_trait]
impl VehicleQuery for PostgresVehicleRepository {
    type Transaction = PostgresTransaction;

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        PgVehicleInternal::find_all(con).await
    }

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        PgVehicleInternal::find_by_id(con, id, false).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresTransaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        PgVehicleInternal::find_by_id(con, id, true).await
    }
}

#[async_trait::async_trait]
impl VehicleModifier for PostgresVehicleRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::create(con, vehicle).await
    }

    async fn update_block(
        &self,
        con: &mut PostgresTransaction,
        id: &VehicleId,
        block_from_date: Option<&DateText>,
        block_to_date: Option<&DateText>,
    ) -> error_stack::Result<(), KernelError> {
        PgVehicleInternal::update_block(con, id, block_from_date, block_to_date).await
    }
}

#[derive(sqlx::FromRow)]
struct VehicleRow {
    id: Uuid,
    name: String,
    status: Option<String>,
    block_from_date: Option<String>,
    block_to_date: Option<String>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle::new(
            VehicleId::new(row.id),
            VehicleName::new(row.name),
            VehicleStatus::from_raw(row.status.as_deref()),
            row.block_from_date.map(DateText::new),
            row.block_to_date.map(DateText::new),
        )
    }
}

pub(in crate::database) struct PgVehicleInternal;

impl PgVehicleInternal {
    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            // language=postgresql
            r#"
            SELECT id, name, status, block_from_date, block_to_date
            FROM vehicles
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn find_by_id(
        con: &mut PgConnection,
        id: &VehicleId,
        lock: bool,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let query = if lock {
            // language=postgresql
            r#"
            SELECT id, name, status, block_from_date, block_to_date
            FROM vehicles
            WHERE id = $1
            FOR UPDATE
            "#
        } else {
            // language=postgresql
            r#"
            SELECT id, name, status, block_from_date, block_to_date
            FROM vehicles
            WHERE id = $1
            "#
        };
        let row = sqlx::query_as::<_, VehicleRow>(query)
            .bind(id.as_ref())
            .fetch_optional(con)
            .await
            .convert_error()?;
        Ok(row.map(Vehicle::from))
    }

    async fn create(
        con: &mut PgConnection,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO vehicles (id, name, status, block_from_date, block_to_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(vehicle.id().as_ref())
        .bind(vehicle.name().as_ref())
        .bind(vehicle.status().as_str())
        .bind(vehicle.block_from_date().clone().map(String::from))
        .bind(vehicle.block_to_date().clone().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_block(
        con: &mut PgConnection,
        id: &VehicleId,
        block_from_date: Option<&DateText>,
        block_to_date: Option<&DateText>,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            UPDATE vehicles
            SET block_from_date = $2, block_to_date = $3
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(block_from_date.cloned().map(String::from))
        .bind(block_to_date.cloned().map(String::from))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
