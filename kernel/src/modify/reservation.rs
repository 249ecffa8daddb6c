use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Reservation, ReservationId, ReservationStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ReservationModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError>;
    async fn update_status(
        &self,
        con: &mut Self::Transaction,
        id: &ReservationId,
        status: &ReservationStatus,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnReservationModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ReservationModifier: ReservationModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn reservation_modifier(&self) -> &Self::ReservationModifier;
}
