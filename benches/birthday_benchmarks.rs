//! Performance benchmarks for the address book queries.
//!
//! These benchmarks measure:
//! - The upcoming-birthdays scan over books of different sizes
//! - Name lookup at the end of a large book

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book with `size` contacts, birthdays spread over the year.
fn build_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let mut record = Record::new(&format!("Contact{}", i)).unwrap();
        record.add_phone(&format!("{:010}", i)).unwrap();
        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .set_birthday(&format!("{:02}.{:02}.{}", day, month, 1960 + (i % 50)))
            .unwrap();
        book.add(record);
    }
    book
}

fn bench_upcoming_birthdays(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [100, 1_000, 10_000] {
        let book = build_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays(black_box(reference)).len());
        });
    }

    group.finish();
}

fn bench_find_last(c: &mut Criterion) {
    let book = build_book(10_000);
    c.bench_function("find_last_of_10000", |b| {
        b.iter(|| book.find(black_box("Contact9999")).is_some());
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_find_last);
criterion_main!(benches);
