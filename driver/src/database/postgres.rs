use std::ops::{Deref, DerefMut};

use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnReservationQuery, DependOnVehicleQuery};
use kernel::interface::update::{DependOnReservationModifier, DependOnVehicleModifier};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{reservation::*, vehicle::*};

mod reservation;
mod vehicle;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).convert_error()?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::info!("connected to postgres");
        Ok(Self { pool })
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

impl DependOnVehicleQuery for PostgresDatabase {
    type VehicleQuery = PostgresVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &PostgresVehicleRepository
    }
}

impl DependOnVehicleModifier for PostgresDatabase {
    type VehicleModifier = PostgresVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &PostgresVehicleRepository
    }
}

impl DependOnReservationQuery for PostgresDatabase {
    type ReservationQuery = PostgresReservationRepository;
    fn reservation_query(&self) -> &Self::ReservationQuery {
        &PostgresReservationRepository
    }
}

impl DependOnReservationModifier for PostgresDatabase {
    type ReservationModifier = PostgresReservationRepository;
    fn reservation_modifier(&self) -> &Self::ReservationModifier {
        &PostgresReservationRepository
    }
}
