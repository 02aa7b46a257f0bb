use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use letterbook::prelude::{
    ContactDraft, ContactManager, ContactStorage, MemStorage, storage::DEFAULT_STORAGE_KEY,
};

const NAMES: [&str; 6] = ["Иван", "Мария", "Борис", "Alice", "Zed", "Ёлкин"];
const VACANCIES: [&str; 3] = ["Инженер", "Designer", "Бухгалтер"];

// Manager prepopulated with `n` contacts backed by in-memory storage, so the
// measured work is the views and the serialization, not disk I/O.
fn make_manager_with_n(n: usize) -> ContactManager {
    let storage = ContactStorage::new(Box::new(MemStorage::new()), DEFAULT_STORAGE_KEY);
    let mut manager = ContactManager::new(storage).expect("manager not created");

    for i in 0..n {
        let draft = ContactDraft::new(
            NAMES[i % NAMES.len()],
            VACANCIES[i % VACANCIES.len()],
            &format!("+7 916 {:03} {:02} {:02}", i % 1000, i % 100, (i / 100) % 100),
        );
        manager.add_contact(draft).expect("contact not added");
    }
    manager
}

fn bench_group_counts(c: &mut Criterion) {
    let manager = make_manager_with_n(500);

    c.bench_function("group counts over 500 contacts", |b| {
        b.iter(|| black_box(manager.group_counts()));
    });
}

fn bench_by_letter(c: &mut Criterion) {
    let manager = make_manager_with_n(500);

    c.bench_function("contacts for one letter over 500 contacts", |b| {
        b.iter(|| {
            let selection = manager.contacts_by_letter(black_box('и'));
            black_box(selection);
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let manager = make_manager_with_n(500);

    c.bench_function("substring search over 500 contacts", |b| {
        b.iter(|| {
            let outcome = manager.search(black_box("инж"));
            black_box(outcome);
        });
    });
}

// Add includes the full-collection write through to storage.
fn bench_add(c: &mut Criterion) {
    c.bench_function("adding to 500 contacts (write-through)", |b| {
        b.iter_batched(
            || make_manager_with_n(500),
            |mut manager| {
                let contact = manager
                    .add_contact(ContactDraft::new("Пётр", "Директор", "+7 000 000 00 00"))
                    .expect("contact not added");
                black_box(contact);
            },
            BatchSize::SmallInput,
        );
    });
}

fn configure() -> Criterion {
    Criterion::default()
    // .sample_size(10)
}

criterion_group! {
    name = benches;
    config = configure();
    targets = bench_group_counts, bench_by_letter, bench_search, bench_add
}
criterion_main!(benches);
