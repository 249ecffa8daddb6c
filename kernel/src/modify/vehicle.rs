use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{DateText, Vehicle, VehicleId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait VehicleModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError>;
    async fn update_block(
        &self,
        con: &mut Self::Transaction,
        id: &VehicleId,
        block_from_date: Option<&DateText>,
        block_to_date: Option<&DateText>,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVehicleModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type VehicleModifier: VehicleModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier;
}
