use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnReservationQuery, DependOnVehicleQuery, ReservationQuery, VehicleQuery,
};
use kernel::interface::update::{DependOnReservationModifier, ReservationModifier};
use kernel::prelude::availability::{is_vehicle_available, reservation_period};
use kernel::prelude::entity::{
    CustomerName, CustomerPhone, DateText, Reservation, ReservationId, ReservationStatus,
    VehicleId,
};
use kernel::KernelError;

use crate::transfer::{
    parse_required_period, CreateReservationDto, GetVehicleReservationsDto, ReservationDto,
    UpdateReservationStatusDto,
};

#[async_trait::async_trait]
pub trait GetReservationService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnReservationQuery
{
    async fn get_reservations(&self) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let reservations = self.reservation_query().find_all(&mut connection).await?;
        connection.commit().await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }

    async fn get_reservations_of_vehicle(
        &self,
        dto: GetVehicleReservationsDto,
    ) -> error_stack::Result<Vec<ReservationDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let vehicle_id = VehicleId::new(dto.vehicle_id);
        let reservations = self
            .reservation_query()
            .find_by_vehicle_id(&mut connection, &vehicle_id)
            .await?;
        connection.commit().await?;
        Ok(reservations.into_iter().map(ReservationDto::from).collect())
    }
}

impl<T> GetReservationService for T where T: DependOnDatabaseConnection + DependOnReservationQuery {}

/// Books a vehicle after checking availability again inside the write
/// transaction, with the vehicle row locked. A client-side check alone cannot
/// stop two renters from taking the same days.
#[async_trait::async_trait]
pub trait CreateReservationService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnReservationQuery
    + DependOnReservationModifier
{
    async fn create_reservation(
        &self,
        dto: CreateReservationDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let period = parse_required_period(&dto.rent_from, &dto.rent_to)?;
        let mut connection = self.database_connection().transact().await?;

        let vehicle_id = VehicleId::new(dto.vehicle_id);
        let Some(vehicle) = self
            .vehicle_query()
            .find_by_id_for_update(&mut connection, &vehicle_id)
            .await?
        else {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("vehicle {} does not exist", dto.vehicle_id)));
        };
        let reservations = self
            .reservation_query()
            .find_by_vehicle_id(&mut connection, &vehicle_id)
            .await?;
        if !is_vehicle_available(&vehicle, &period, &reservations) {
            connection.roll_back().await?;
            tracing::info!(vehicle = %dto.vehicle_id, ?period, "rejected overlapping reservation");
            return Err(Report::new(KernelError::Unavailable).attach_printable(format!(
                "vehicle {} is taken between {} and {}",
                dto.vehicle_id,
                period.from(),
                period.to()
            )));
        }

        let uuid = Uuid::new_v4();
        let reservation = Reservation::new(
            ReservationId::new(uuid),
            vehicle_id,
            ReservationStatus::Pending,
            Some(DateText::from(period.from())),
            Some(DateText::from(period.to())),
            CustomerName::new(dto.customer),
            CustomerPhone::new(dto.phone),
        );
        self.reservation_modifier()
            .create(&mut connection, &reservation)
            .await?;
        connection.commit().await?;

        Ok(uuid)
    }
}

impl<T> CreateReservationService for T where
    T: DependOnDatabaseConnection
        + DependOnVehicleQuery
        + DependOnReservationQuery
        + DependOnReservationModifier
{
}

/// Confirming re-runs the availability check against every other confirmed
/// reservation of the vehicle. Other transitions are stored as given.
#[async_trait::async_trait]
pub trait UpdateReservationStatusService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnVehicleQuery
    + DependOnReservationQuery
    + DependOnReservationModifier
{
    async fn update_reservation_status(
        &self,
        dto: UpdateReservationStatusDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = ReservationId::new(dto.id);
        let Some(reservation) = self.reservation_query().find_by_id(&mut connection, &id).await?
        else {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("reservation {} does not exist", dto.id)));
        };

        if dto.status.is_blocking() && !reservation.status().is_blocking() {
            let Some(period) = reservation_period(&reservation) else {
                connection.roll_back().await?;
                return Err(Report::new(KernelError::Invalid)
                    .attach_printable("cannot confirm a reservation without valid dates"));
            };
            let Some(vehicle) = self
                .vehicle_query()
                .find_by_id_for_update(&mut connection, reservation.vehicle_id())
                .await?
            else {
                connection.roll_back().await?;
                return Err(Report::new(KernelError::NotFound).attach_printable(format!(
                    "vehicle {} does not exist",
                    Uuid::from(*reservation.vehicle_id())
                )));
            };
            let others = self
                .reservation_query()
                .find_by_vehicle_id(&mut connection, reservation.vehicle_id())
                .await?
                .into_iter()
                .filter(|other| other.id() != reservation.id())
                .collect::<Vec<_>>();
            if !is_vehicle_available(&vehicle, &period, &others) {
                connection.roll_back().await?;
                tracing::info!(
                    reservation = %dto.id,
                    ?period,
                    "refused to confirm overlapping reservation"
                );
                return Err(Report::new(KernelError::Unavailable)
                    .attach_printable("vehicle is already committed for these dates"));
            }
        }

        self.reservation_modifier()
            .update_status(&mut connection, &id, &dto.status)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> UpdateReservationStatusService for T where
    T: DependOnDatabaseConnection
        + DependOnVehicleQuery
        + DependOnReservationQuery
        + DependOnReservationModifier
{
}
