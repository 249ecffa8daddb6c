use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnReservationQuery, DependOnVehicleQuery, ReservationQuery, VehicleQuery,
};
use kernel::interface::update::{DependOnVehicleModifier, VehicleModifier};
use kernel::prelude::availability::filter_available_vehicles;
use kernel::prelude::entity::{DateText, RentalPeriod, Vehicle, VehicleId, VehicleName};
use kernel::KernelError;

use crate::transfer::{
    parse_candidate, BlockVehicleDto, CheckAvailabilityDto, CreateVehicleDto,
    GetAvailableVehicleDto, VehicleDto,
};

#[async_trait::async_trait]
pub trait GetAvailableVehicleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnReservationQuery
{
    async fn get_available_vehicles(
        &self,
        dto: GetAvailableVehicleDto,
    ) -> error_stack::Result<Vec<VehicleDto>, KernelError> {
        let candidate = parse_candidate(dto.from.as_deref(), dto.to.as_deref())?;
        let mut connection = self.database_connection().transact().await?;

        let vehicles = self.vehicle_query().find_all(&mut connection).await?;
        let reservations = self.reservation_query().find_all(&mut connection).await?;
        connection.commit().await?;

        Ok(filter_available_vehicles(vehicles, &candidate, &reservations)
            .into_iter()
            .map(VehicleDto::from)
            .collect())
    }
}

impl<T> GetAvailableVehicleService for T where
    T: DependOnDatabaseConnection + DependOnVehicleQuery + DependOnReservationQuery
{
}

#[async_trait::async_trait]
pub trait CheckVehicleAvailabilityService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnReservationQuery
{
    async fn check_vehicle_availability(
        &self,
        dto: CheckAvailabilityDto,
    ) -> error_stack::Result<bool, KernelError> {
        let candidate = parse_candidate(dto.from.as_deref(), dto.to.as_deref())?;
        let mut connection = self.database_connection().transact().await?;

        let id = VehicleId::new(dto.vehicle_id);
        let Some(vehicle) = self.vehicle_query().find_by_id(&mut connection, &id).await? else {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("vehicle {} does not exist", dto.vehicle_id)));
        };
        let reservations = self
            .reservation_query()
            .find_by_vehicle_id(&mut connection, &id)
            .await?;
        connection.commit().await?;

        Ok(!filter_available_vehicles(vec![vehicle], &candidate, &reservations).is_empty())
    }
}

impl<T> CheckVehicleAvailabilityService for T where
    T: DependOnDatabaseConnection + DependOnVehicleQuery + DependOnReservationQuery
{
}

#[async_trait::async_trait]
pub trait CreateVehicleService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnVehicleModifier
{
    async fn create_vehicle(&self, dto: CreateVehicleDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let uuid = Uuid::new_v4();
        let vehicle = Vehicle::new(
            VehicleId::new(uuid),
            VehicleName::new(dto.name),
            dto.status,
            None,
            None,
        );
        self.vehicle_modifier()
            .create(&mut connection, &vehicle)
            .await?;
        connection.commit().await?;

        Ok(uuid)
    }
}

impl<T> CreateVehicleService for T where T: DependOnDatabaseConnection + DependOnVehicleModifier {}

/// Sets or clears the administrator block interval. Both ends or neither.
#[async_trait::async_trait]
pub trait BlockVehicleService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnVehicleModifier
{
    async fn block_vehicle(&self, dto: BlockVehicleDto) -> error_stack::Result<(), KernelError> {
        let candidate = parse_candidate(dto.from.as_deref(), dto.to.as_deref())?;
        let block = match (candidate.period(), dto.from.as_deref(), dto.to.as_deref()) {
            (Some(period), _, _) => Some(period),
            (None, from, to) if is_blank(from) && is_blank(to) => None,
            _ => {
                return Err(Report::new(KernelError::Invalid)
                    .attach_printable("a block interval needs both dates"))
            }
        };

        let mut connection = self.database_connection().transact().await?;
        let id = VehicleId::new(dto.id);
        if self
            .vehicle_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .is_none()
        {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("vehicle {} does not exist", dto.id)));
        }

        let (from, to) = block
            .map(|period: RentalPeriod| {
                (
                    Some(DateText::from(period.from())),
                    Some(DateText::from(period.to())),
                )
            })
            .unwrap_or((None, None));
        self.vehicle_modifier()
            .update_block(&mut connection, &id, from.as_ref(), to.as_ref())
            .await?;
        connection.commit().await?;

        tracing::info!(vehicle = %dto.id, ?from, ?to, "updated vehicle block interval");
        Ok(())
    }
}

impl<T> BlockVehicleService for T where
    T: DependOnDatabaseConnection + DependOnVehicleQuery + DependOnVehicleModifier
{
}

fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |raw| raw.trim().is_empty())
}
