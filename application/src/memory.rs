use std::sync::Mutex;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnReservationQuery, DependOnVehicleQuery, ReservationQuery, VehicleQuery,
};
use kernel::interface::update::{
    DependOnReservationModifier, DependOnVehicleModifier, ReservationModifier, VehicleModifier,
};
use kernel::prelude::entity::{
    CustomerName, CustomerPhone, DateText, Reservation, ReservationId, ReservationStatus,
    Vehicle, VehicleId, VehicleName, VehicleStatus,
};
use kernel::KernelError;
use uuid::Uuid;

pub fn reservation(vehicle: Uuid, status: ReservationStatus, from: &str, to: &str) -> Reservation {
    Reservation::new(
        ReservationId::new(Uuid::new_v4()),
        VehicleId::new(vehicle),
        status,
        Some(DateText::new(from)),
        Some(DateText::new(to)),
        CustomerName::new("Ivan"),
        CustomerPhone::new("+7 900 000 00 00"),
    )
}

pub fn confirmed(vehicle: Uuid, from: &str, to: &str) -> Reservation {
    reservation(vehicle, ReservationStatus::Confirmed, from, to)
}

/// Store shared by the repositories below. Writes apply immediately; the
/// services under test only write once every check has passed.
#[derive(Default)]
pub struct InMemoryDatabase {
    vehicles: InMemoryVehicleRepository,
    reservations: InMemoryReservationRepository,
}

impl InMemoryDatabase {
    pub fn insert_vehicle(&self, name: &str, status: VehicleStatus) -> Uuid {
        let uuid = Uuid::new_v4();
        self.vehicles.0.lock().unwrap().push(Vehicle::new(
            VehicleId::new(uuid),
            VehicleName::new(name),
            status,
            None,
            None,
        ));
        uuid
    }

    pub fn insert_reservation(&self, reservation: Reservation) -> Uuid {
        let uuid = Uuid::from(*reservation.id());
        self.reservations.0.lock().unwrap().push(reservation);
        uuid
    }

    pub fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.0.lock().unwrap().clone()
    }
}

pub struct InMemoryTransaction;

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(InMemoryTransaction)
    }
}

#[derive(Default)]
pub struct InMemoryVehicleRepository(Mutex<Vec<Vehicle>>);

#[async_trait::async_trait]
impl VehicleQuery for InMemoryVehicleRepository {
    type Transaction = InMemoryTransaction;

    async fn find_all(
        &self,
        _con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Vehicle>, KernelError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn find_by_id(
        &self,
        _con: &mut Self::Transaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|vehicle| vehicle.id() == id)
            .cloned())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut Self::Transaction,
        id: &VehicleId,
    ) -> error_stack::Result<Option<Vehicle>, KernelError> {
        self.find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl VehicleModifier for InMemoryVehicleRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        _con: &mut Self::Transaction,
        vehicle: &Vehicle,
    ) -> error_stack::Result<(), KernelError> {
        self.0.lock().unwrap().push(vehicle.clone());
        Ok(())
    }

    async fn update_block(
        &self,
        _con: &mut Self::Transaction,
        id: &VehicleId,
        block_from_date: Option<&DateText>,
        block_to_date: Option<&DateText>,
    ) -> error_stack::Result<(), KernelError> {
        let mut vehicles = self.0.lock().unwrap();
        if let Some(vehicle) = vehicles.iter_mut().find(|vehicle| vehicle.id() == id) {
            let from = block_from_date.cloned();
            let to = block_to_date.cloned();
            *vehicle = vehicle.clone().reconstruct(|v| {
                v.block_from_date = from;
                v.block_to_date = to;
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryReservationRepository(Mutex<Vec<Reservation>>);

#[async_trait::async_trait]
impl ReservationQuery for InMemoryReservationRepository {
    type Transaction = InMemoryTransaction;

    async fn find_all(
        &self,
        _con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn find_by_id(
        &self,
        _con: &mut Self::Transaction,
        id: &ReservationId,
    ) -> error_stack::Result<Option<Reservation>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|reservation| reservation.id() == id)
            .cloned())
    }

    async fn find_by_vehicle_id(
        &self,
        _con: &mut Self::Transaction,
        vehicle_id: &VehicleId,
    ) -> error_stack::Result<Vec<Reservation>, KernelError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|reservation| reservation.vehicle_id() == vehicle_id)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl ReservationModifier for InMemoryReservationRepository {
    type Transaction = InMemoryTransaction;

    async fn create(
        &self,
        _con: &mut Self::Transaction,
        reservation: &Reservation,
    ) -> error_stack::Result<(), KernelError> {
        self.0.lock().unwrap().push(reservation.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        _con: &mut Self::Transaction,
        id: &ReservationId,
        status: &ReservationStatus,
    ) -> error_stack::Result<(), KernelError> {
        let mut reservations = self.0.lock().unwrap();
        if let Some(reservation) = reservations.iter_mut().find(|r| r.id() == id) {
            let status = *status;
            *reservation = reservation.clone().reconstruct(|r| r.status = status);
        }
        Ok(())
    }
}

impl DependOnVehicleQuery for InMemoryDatabase {
    type VehicleQuery = InMemoryVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &self.vehicles
    }
}

impl DependOnVehicleModifier for InMemoryDatabase {
    type VehicleModifier = InMemoryVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &self.vehicles
    }
}

impl DependOnReservationQuery for InMemoryDatabase {
    type ReservationQuery = InMemoryReservationRepository;
    fn reservation_query(&self) -> &Self::ReservationQuery {
        &self.reservations
    }
}

impl DependOnReservationModifier for InMemoryDatabase {
    type ReservationModifier = InMemoryReservationRepository;
    fn reservation_modifier(&self) -> &Self::ReservationModifier {
        &self.reservations
    }
}
