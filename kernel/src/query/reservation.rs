use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Reservation, ReservationId, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError>;
    async fn find_by_vehicle_id(
        &self,
        con: &mut Self::Transaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError>;
}

pub trait DependOnReservationQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReservationQuery: ReservationQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn reservation_query(&self) -> &Self::ReservationQuery;
}
