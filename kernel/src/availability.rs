//! Day-granular availability of vehicles for a requested rental period.
//!
//! Everything here is a pure function over already-loaded entities. Nothing is
//! cached between calls because other clients may add reservations at any time.

use time::macros::format_description;
use time::Date;

use crate::entity::{CandidateInterval, RentalPeriod, Reservation, Vehicle, VehicleStatus};

/// `true` when the closed intervals `[a_start, a_end]` and `[b_start, b_end]`
/// share at least one day. Both intervals must already be ordered.
pub fn dates_overlap(a_start: Date, a_end: Date, b_start: Date, b_end: Date) -> bool {
    a_start <= b_end && a_end >= b_start
}

/// Parses `YYYY-MM-DD` or `DD.MM.YYYY` (leading zeros optional in the
/// latter). A time of day after `T` or a space is discarded. Blank or
/// unparseable input yields `None`.
pub fn parse_calendar_date(input: &str) -> Option<Date> {
    let input = input.trim();
    let day = input
        .split_once(['T', ' '])
        .map_or(input, |(day, _)| day);
    if day.is_empty() {
        return None;
    }
    if day.contains('.') {
        Date::parse(
            day,
            format_description!("[day padding:none].[month padding:none].[year]"),
        )
        .ok()
    } else {
        Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
    }
}

pub fn is_vehicle_available(
    vehicle: &Vehicle,
    candidate: &RentalPeriod,
    reservations: &[Reservation],
) -> bool {
    if *vehicle.status() != VehicleStatus::Available {
        return false;
    }

    if let Some(block) = block_period(vehicle) {
        if block.overlaps(candidate) {
            return false;
        }
    }

    !reservations
        .iter()
        .filter(|reservation| reservation.vehicle_id() == vehicle.id())
        .filter(|reservation| reservation.status().is_blocking())
        .filter_map(reservation_period)
        .any(|reserved| reserved.overlaps(candidate))
}

/// Keeps the vehicles bookable for `candidate`, in their original order.
/// Without both candidate dates only the status is considered.
pub fn filter_available_vehicles(
    vehicles: Vec<Vehicle>,
    candidate: &CandidateInterval,
    reservations: &[Reservation],
) -> Vec<Vehicle> {
    match candidate.period() {
        None => vehicles
            .into_iter()
            .filter(|vehicle| *vehicle.status() == VehicleStatus::Available)
            .collect(),
        Some(period) => vehicles
            .into_iter()
            .filter(|vehicle| is_vehicle_available(vehicle, &period, reservations))
            .collect(),
    }
}

fn block_period(vehicle: &Vehicle) -> Option<RentalPeriod> {
    let from = vehicle.block_from_date().as_ref()?;
    let to = vehicle.block_to_date().as_ref()?;
    if from.is_blank() || to.is_blank() {
        return None;
    }
    match (from.calendar_date(), to.calendar_date()) {
        (Some(from), Some(to)) => Some(RentalPeriod::new(from, to)),
        _ => {
            tracing::warn!(
                vehicle = ?vehicle.id(),
                from = ?from,
                to = ?to,
                "ignoring unparseable block interval"
            );
            None
        }
    }
}

/// The reserved days, or `None` while either date is missing or unreadable.
/// Such reservations are not constraining yet.
pub fn reservation_period(reservation: &Reservation) -> Option<RentalPeriod> {
    let from = reservation.rent_from().as_ref()?;
    let to = reservation.rent_to().as_ref()?;
    if from.is_blank() || to.is_blank() {
        return None;
    }
    match (from.calendar_date(), to.calendar_date()) {
        (Some(from), Some(to)) => Some(RentalPeriod::new(from, to)),
        _ => {
            tracing::warn!(
                reservation = ?reservation.id(),
                from = ?from,
                to = ?to,
                "skipping reservation with malformed dates"
            );
            None
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use super::*;
    use crate::entity::{
        CustomerName, CustomerPhone, DateText, ReservationId, ReservationStatus, VehicleId,
        VehicleName,
    };

    fn vehicle(status: VehicleStatus) -> Vehicle {
        Vehicle::new(
            VehicleId::new(Uuid::new_v4()),
            VehicleName::new("Kia Rio"),
            status,
            None,
            None,
        )
    }

    fn reservation(
        vehicle: &Vehicle,
        status: ReservationStatus,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Reservation {
        Reservation::new(
            ReservationId::new(Uuid::new_v4()),
            *vehicle.id(),
            status,
            from.map(DateText::new),
            to.map(DateText::new),
            CustomerName::new("Ivan"),
            CustomerPhone::new("+7 900 000 00 00"),
        )
    }

    fn period(from: Date, to: Date) -> RentalPeriod {
        RentalPeriod::new(from, to)
    }

    #[test]
    fn overlap_is_commutative() {
        let a = (date!(2024 - 01 - 01), date!(2024 - 01 - 05));
        let cases = [
            (date!(2024 - 01 - 03), date!(2024 - 01 - 08)),
            (date!(2024 - 01 - 06), date!(2024 - 01 - 08)),
            (date!(2023 - 12 - 20), date!(2024 - 01 - 01)),
            (date!(2024 - 01 - 02), date!(2024 - 01 - 02)),
        ];
        for b in cases {
            assert_eq!(
                dates_overlap(a.0, a.1, b.0, b.1),
                dates_overlap(b.0, b.1, a.0, a.1)
            );
        }
    }

    #[test]
    fn single_day_overlaps_itself() {
        let day = date!(2024 - 02 - 29);
        assert!(dates_overlap(day, day, day, day));
    }

    #[test]
    fn nested_interval_overlaps() {
        assert!(dates_overlap(
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 10),
            date!(2024 - 01 - 03),
            date!(2024 - 01 - 05)
        ));
    }

    #[test]
    fn adjacent_intervals_do_not_overlap() {
        assert!(!dates_overlap(
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 05),
            date!(2024 - 01 - 06),
            date!(2024 - 01 - 10)
        ));
    }

    #[test]
    fn shared_endpoint_overlaps() {
        assert!(dates_overlap(
            date!(2024 - 01 - 01),
            date!(2024 - 01 - 05),
            date!(2024 - 01 - 05),
            date!(2024 - 01 - 10)
        ));
    }

    #[test]
    fn both_date_formats_parse_to_same_day() {
        let iso = parse_calendar_date("2024-03-05");
        assert_eq!(iso, Some(date!(2024 - 03 - 05)));
        assert_eq!(parse_calendar_date("05.03.2024"), iso);
        assert_eq!(parse_calendar_date("5.3.2024"), iso);
        assert_eq!(parse_calendar_date("2024-03-05T18:30:00.000Z"), iso);
        assert_eq!(parse_calendar_date(" 2024-03-05 09:00 "), iso);
    }

    #[test]
    fn blank_or_garbage_date_is_none() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("tomorrow"), None);
        assert_eq!(parse_calendar_date("31.02.2024"), None);
    }

    #[test]
    fn status_veto() {
        let car = vehicle(VehicleStatus::Unavailable);
        let candidate = period(date!(2024 - 06 - 01), date!(2024 - 06 - 02));
        assert!(!is_vehicle_available(&car, &candidate, &[]));
    }

    #[test]
    fn confirmed_reservation_blocks_overlapping_period() {
        let car = vehicle(VehicleStatus::Available);
        let booked = reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        );
        let reservations = [booked];
        assert!(!is_vehicle_available(
            &car,
            &period(date!(2024 - 06 - 05), date!(2024 - 06 - 07)),
            &reservations
        ));
        assert!(is_vehicle_available(
            &car,
            &period(date!(2024 - 06 - 11), date!(2024 - 06 - 15)),
            &reservations
        ));
    }

    #[test]
    fn non_confirmed_reservations_do_not_block() {
        let car = vehicle(VehicleStatus::Available);
        let candidate = period(date!(2024 - 06 - 05), date!(2024 - 06 - 07));
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
        ] {
            let reservations = [reservation(
                &car,
                status,
                Some("01.06.2024"),
                Some("10.06.2024"),
            )];
            assert!(is_vehicle_available(&car, &candidate, &reservations));
        }
    }

    #[test]
    fn reservation_of_another_vehicle_is_ignored() {
        let car = vehicle(VehicleStatus::Available);
        let other = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &other,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        )];
        let candidate = period(date!(2024 - 06 - 01), date!(2024 - 06 - 10));
        assert!(is_vehicle_available(&car, &candidate, &reservations));
    }

    #[test]
    fn reservation_missing_end_date_does_not_block() {
        let car = vehicle(VehicleStatus::Available);
        let reservations = [
            reservation(&car, ReservationStatus::Confirmed, Some("2024-06-01"), None),
            reservation(&car, ReservationStatus::Confirmed, Some("2024-06-01"), Some("")),
        ];
        let candidate = period(date!(2024 - 06 - 01), date!(2024 - 06 - 30));
        assert!(is_vehicle_available(&car, &candidate, &reservations));
    }

    #[test]
    fn malformed_reservation_is_skipped_but_others_still_block() {
        let car = vehicle(VehicleStatus::Available);
        let candidate = period(date!(2024 - 06 - 05), date!(2024 - 06 - 06));
        let malformed = reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("junk"),
            Some("2024-06-10"),
        );
        assert!(is_vehicle_available(
            &car,
            &candidate,
            &[malformed.clone()]
        ));

        let valid = reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("04.06.2024"),
            Some("05.06.2024"),
        );
        assert!(!is_vehicle_available(&car, &candidate, &[malformed, valid]));
    }

    #[test]
    fn reversed_reservation_dates_still_block() {
        let car = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("2024-06-10"),
            Some("2024-06-01"),
        )];
        let candidate = period(date!(2024 - 06 - 05), date!(2024 - 06 - 05));
        assert!(!is_vehicle_available(&car, &candidate, &reservations));
    }

    #[test]
    fn admin_block_vetoes_overlapping_period() {
        let car = vehicle(VehicleStatus::Available).reconstruct(|v| {
            v.block_from_date = Some(DateText::new("2024-07-01"));
            v.block_to_date = Some(DateText::new("2024-07-14"));
        });
        assert!(!is_vehicle_available(
            &car,
            &period(date!(2024 - 06 - 28), date!(2024 - 07 - 01)),
            &[]
        ));
        assert!(is_vehicle_available(
            &car,
            &period(date!(2024 - 07 - 15), date!(2024 - 07 - 20)),
            &[]
        ));
    }

    #[test]
    fn half_open_admin_block_is_ignored() {
        let car = vehicle(VehicleStatus::Available).reconstruct(|v| {
            v.block_from_date = Some(DateText::new("2024-07-01"));
        });
        assert!(is_vehicle_available(
            &car,
            &period(date!(2024 - 07 - 01), date!(2024 - 07 - 02)),
            &[]
        ));
    }

    #[test]
    fn malformed_admin_block_is_ignored() {
        let car = vehicle(VehicleStatus::Available).reconstruct(|v| {
            v.block_from_date = Some(DateText::new("2024-07-01"));
            v.block_to_date = Some(DateText::new("junk"));
        });
        let candidate = period(date!(2024 - 07 - 03), date!(2024 - 07 - 04));
        assert!(is_vehicle_available(&car, &candidate, &[]));

        let valid = reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("2024-07-02"),
            Some("2024-07-03"),
        );
        assert!(!is_vehicle_available(&car, &candidate, &[valid]));
    }

    #[test]
    fn blank_admin_block_is_ignored() {
        let car = vehicle(VehicleStatus::Available).reconstruct(|v| {
            v.block_from_date = Some(DateText::new(""));
            v.block_to_date = Some(DateText::new("  "));
        });
        assert!(is_vehicle_available(
            &car,
            &period(date!(2024 - 07 - 01), date!(2024 - 07 - 02)),
            &[]
        ));
    }

    #[test]
    fn reversed_candidate_matches_ordered_candidate() {
        let car = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        )];
        let ordered = CandidateInterval::new(Some(date!(2024 - 06 - 08)), Some(date!(2024 - 06 - 12)));
        let reversed =
            CandidateInterval::new(Some(date!(2024 - 06 - 12)), Some(date!(2024 - 06 - 08)));
        assert_eq!(
            filter_available_vehicles(vec![car.clone()], &ordered, &reservations),
            filter_available_vehicles(vec![car], &reversed, &reservations)
        );
    }

    #[test]
    fn no_candidate_dates_filters_by_status_only() {
        let first = vehicle(VehicleStatus::Available);
        let hidden = vehicle(VehicleStatus::Unavailable);
        let last = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &first,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        )];
        let candidate = CandidateInterval::new(None, Some(date!(2024 - 06 - 05)));
        let found = filter_available_vehicles(
            vec![first.clone(), hidden, last.clone()],
            &candidate,
            &reservations,
        );
        assert_eq!(found, vec![first, last]);
    }

    #[test]
    fn filter_keeps_original_order() {
        let a = vehicle(VehicleStatus::Available);
        let b = vehicle(VehicleStatus::Available);
        let c = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &b,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        )];
        let candidate: CandidateInterval =
            period(date!(2024 - 06 - 09), date!(2024 - 06 - 12)).into();
        let found =
            filter_available_vehicles(vec![c.clone(), b, a.clone()], &candidate, &reservations);
        assert_eq!(found, vec![c, a]);
    }

    #[test]
    fn availability_check_is_repeatable() {
        let car = vehicle(VehicleStatus::Available);
        let reservations = [reservation(
            &car,
            ReservationStatus::Confirmed,
            Some("2024-06-01"),
            Some("2024-06-10"),
        )];
        let candidate = period(date!(2024 - 06 - 10), date!(2024 - 06 - 11));
        let first = is_vehicle_available(&car, &candidate, &reservations);
        let second = is_vehicle_available(&car, &candidate, &reservations);
        assert_eq!(first, second);
        assert!(!first);
    }
}
