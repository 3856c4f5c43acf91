//! Criterion benchmarks for the hot paths: the conflict scan and free-slot
//! derivation over a fully booked day.

use agenda_engine::catalog::SlotCatalog;
use agenda_engine::conflict::has_conflict;
use agenda_engine::freebusy::free_slots;
use agenda_engine::reservation::Reservation;
use agenda_engine::time::{label_from_minutes, Interval};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A day packed with back-to-back one-hour bookings from 08:00 to 23:00.
fn packed_day() -> Vec<Reservation> {
    (8..23)
        .map(|hour| Reservation {
            id: format!("r{}", hour),
            client_name: format!("client-{}", hour),
            date: day(),
            start_time: label_from_minutes(hour * 60),
            end_time: label_from_minutes((hour + 1) * 60),
        })
        .collect()
}

fn bench_conflict_scan(c: &mut Criterion) {
    let snapshot = packed_day();
    let candidate = Interval::from_labels("22:30", "23:30").unwrap();

    c.bench_function("has_conflict/packed_day", |b| {
        b.iter(|| has_conflict(day(), black_box(candidate), black_box(&snapshot)).unwrap())
    });
}

fn bench_free_slots(c: &mut Criterion) {
    let snapshot = packed_day();
    let catalog = SlotCatalog::booking();

    c.bench_function("free_slots/packed_day", |b| {
        b.iter(|| {
            free_slots(&catalog, day(), black_box(&snapshot))
                .unwrap()
                .count()
        })
    });
}

criterion_group!(benches, bench_conflict_scan, bench_free_slots);
criterion_main!(benches);
