use chrono::NaiveDate;
use rail_booking::BookingError;
use rail_core::{Gender, JourneyKey, JourneyRequest, Passenger, SeatPreference, StationId, TicketStatus, TrainNumber};
use rail_engine::{bootstrap, Config, Engine};
use rail_shared::TicketEventKind;
use std::collections::HashSet;
use std::sync::Arc;

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn passenger(user: &str) -> Passenger {
    Passenger::new(user, "Karthik", 41, Gender::Male)
}

async fn default_engine() -> Engine {
    let config = Config::from_toml(DEFAULT_CONFIG).unwrap();
    bootstrap(&config).await.unwrap()
}

/// Station ids for a train's route, in travel order
fn stations(engine: &Engine, train: u32) -> Vec<StationId> {
    let train = engine.catalog.get_train(TrainNumber(train)).unwrap();
    engine
        .catalog
        .get_route(train.route_id)
        .unwrap()
        .stations
        .iter()
        .map(|s| s.id)
        .collect()
}

#[tokio::test]
async fn test_default_config_seeds_catalog_and_inventory() {
    let engine = default_engine().await;

    let trains: Vec<u32> = engine.catalog.all_trains().iter().map(|t| t.number.0).collect();
    assert_eq!(trains, vec![101, 102]);

    let found = engine.catalog.search_trains("chennai", "HOSUR");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Shatabdi Express");
    assert!(engine.catalog.search_trains("Bangalore", "Chennai").is_empty());

    let ledger = engine.orchestrator.ledger();
    assert!(ledger.contains(&JourneyKey::new(TrainNumber(101), date())));
    assert_eq!(ledger.keys().len(), 4);

    let s = stations(&engine, 101);
    let summary = engine
        .orchestrator
        .get_availability(TrainNumber(101), date(), s[0], s[3])
        .await
        .unwrap()
        .unwrap();
    assert_eq!((summary.confirmed, summary.rac, summary.waiting), (3, 3, 3));
}

#[tokio::test]
async fn test_single_segment_cascade_scenario() {
    let config = Config::from_toml(
        r#"
        [catalog]
        dates = ["2026-01-15"]

        [[catalog.routes]]
        name = "shuttle"
        stops = [
            { name = "Alpha", departure = "06:00:00" },
            { name = "Beta", arrival = "07:00:00" },
        ]

        [[catalog.trains]]
        number = 501
        name = "Shuttle"
        route = "shuttle"
        confirmed = 2
        rac = 2
        waiting = 2
        "#,
    )
    .unwrap();
    let engine = bootstrap(&config).await.unwrap();
    let s = stations(&engine, 501);
    let train = TrainNumber(501);

    let mut tickets = Vec::new();
    for i in 0..5 {
        let request = JourneyRequest::new(s[0], s[1], date());
        let ticket = engine
            .orchestrator
            .book_ticket(train, passenger(&format!("user-{}", i)), request)
            .await
            .unwrap();
        tickets.push(ticket);
    }

    let labels: Vec<String> = tickets.iter().map(|t| t.seat.label()).collect();
    assert_eq!(labels, vec!["C1-W1", "C1-M2", "RAC1", "RAC2", "WL1"]);

    let outcome = engine.orchestrator.cancel_ticket(tickets[0].id).unwrap();
    assert_eq!(outcome.previous_status, TicketStatus::Confirmed);
    assert!(outcome.stalled.is_none());

    let promoted = engine.orchestrator.ticket(tickets[2].id).unwrap();
    assert_eq!(promoted.status, TicketStatus::Confirmed);
    assert_eq!(promoted.seat.label(), "C1-W1");
    assert_eq!(engine.orchestrator.ticket(tickets[3].id).unwrap().seat.label(), "RAC1");
    let joined = engine.orchestrator.ticket(tickets[4].id).unwrap();
    assert_eq!(joined.status, TicketStatus::Rac);
    assert_eq!(joined.seat.label(), "RAC2");

    assert_eq!(engine.orchestrator.tier_counts(train, date()), (2, 2, 0));
    let summary = engine
        .orchestrator
        .get_availability(train, date(), s[0], s[1])
        .await
        .unwrap()
        .unwrap();
    assert_eq!((summary.confirmed, summary.rac, summary.waiting), (0, 0, 2));
}

#[tokio::test]
async fn test_overlapping_segments_share_capacity() {
    let engine = default_engine().await;
    let s = stations(&engine, 102);
    let train = TrainNumber(102);
    let orchestrator = &engine.orchestrator;

    // Delhi -> Ujjain twice fills both seats on the first two hops
    for _ in 0..2 {
        let ticket = orchestrator
            .book_ticket(train, passenger("u1"), JourneyRequest::new(s[0], s[2], date()))
            .await
            .unwrap();
        assert_eq!(ticket.status, TicketStatus::Confirmed);
    }

    // Later hops are untouched
    let tail = orchestrator
        .book_ticket(train, passenger("u2"), JourneyRequest::new(s[2], s[4], date()))
        .await
        .unwrap();
    assert_eq!(tail.status, TicketStatus::Confirmed);
    assert_eq!(tail.seat.label(), "C1-W1");

    // Agra -> Vadodara crosses the full Agra-Ujjain hop
    let crossing = orchestrator
        .book_ticket(train, passenger("u3"), JourneyRequest::new(s[1], s[3], date()))
        .await
        .unwrap();
    assert_eq!(crossing.status, TicketStatus::Rac);

    let segments = orchestrator.get_segments_between(train, s[1], s[3]).await.unwrap();
    assert_eq!(segments, crossing.segments);
    assert_eq!(segments.len(), 2);

    // A different date has its own inventory
    let other_day = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
    let fresh = orchestrator
        .book_ticket(train, passenger("u3"), JourneyRequest::new(s[1], s[3], other_day))
        .await
        .unwrap();
    assert_eq!(fresh.status, TicketStatus::Confirmed);
}

#[tokio::test]
async fn test_reinitializing_keeps_bookings() {
    let engine = default_engine().await;
    let s = stations(&engine, 101);
    let train = engine.catalog.get_train(TrainNumber(101)).unwrap();

    let ticket = engine
        .orchestrator
        .book_ticket(train.number, passenger("u1"), JourneyRequest::new(s[0], s[3], date()))
        .await
        .unwrap();

    engine
        .orchestrator
        .initialize_inventory(train.number, date(), train.route_id, train.capacity)
        .await
        .unwrap();

    let summary = engine
        .orchestrator
        .get_availability(train.number, date(), s[0], s[3])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.confirmed, 2);
    assert_eq!(engine.orchestrator.ticket(ticket.id).unwrap().status, TicketStatus::Confirmed);
}

#[tokio::test]
async fn test_boundary_names_and_preferences() {
    let engine = default_engine().await;

    let (source, destination) = engine
        .catalog
        .resolve_stations(TrainNumber(101), "vellore", "Bangalore")
        .unwrap();
    let preference: SeatPreference = "a".parse().unwrap();
    assert!("sleeper".parse::<SeatPreference>().is_err());

    let mut events = engine.orchestrator.subscribe();
    let request = JourneyRequest::new(source.id, destination.id, date()).with_preference(preference);
    let ticket = engine
        .orchestrator
        .book_ticket(TrainNumber(101), passenger("u9"), request)
        .await
        .unwrap();
    assert_eq!(ticket.seat.label(), "C1-A3");
    assert_eq!(ticket.source.name, "Vellore");

    let event = events.recv().await.unwrap();
    assert_eq!(event.kind, TicketEventKind::Booked);
    assert_eq!(event.partition_key(), "101_2026-01-15");
    assert_eq!(event.pnr, ticket.pnr);

    assert_eq!(engine.orchestrator.ticket_by_pnr(&ticket.pnr).unwrap().id, ticket.id);
    assert!(engine.catalog.resolve_stations(TrainNumber(101), "Bangalore", "Vellore").is_none());
}

#[tokio::test]
async fn test_concurrent_bookings_never_double_sell() {
    let engine = Arc::new(default_engine().await);
    let s = stations(&engine, 101);

    let mut handles = Vec::new();
    for i in 0..20 {
        let engine = engine.clone();
        let (from, to) = (s[0], s[3]);
        handles.push(tokio::spawn(async move {
            let request = JourneyRequest::new(from, to, date());
            engine
                .orchestrator
                .book_ticket(TrainNumber(101), passenger(&format!("user-{}", i)), request)
                .await
        }));
    }

    let mut accepted = Vec::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(ticket) => accepted.push(ticket),
            Err(BookingError::CapacityExhausted { .. }) => rejected += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(accepted.len(), 9);
    assert_eq!(rejected, 11);

    let labels: HashSet<String> = accepted.iter().map(|t| t.seat.label()).collect();
    assert_eq!(labels.len(), 9);
    for expected in ["C1-W1", "C1-M2", "C1-A3", "RAC1", "RAC2", "RAC3", "WL1", "WL2", "WL3"] {
        assert!(labels.contains(expected), "missing {}", expected);
    }
}
