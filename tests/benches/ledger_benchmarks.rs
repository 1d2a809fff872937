//! # Metro Recharge Ledger Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Ticket signature (HMAC-SHA256) | < 5µs |
//! | Balance lookup, 10k tickets | < 1µs |
//! | Recharge credit | < 1µs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mr_01_ledger::{BalanceApi, BalanceService, InMemoryLedger, SignaturePolicy};
use shared_types::{TicketId, TicketSigner};
use std::sync::Arc;

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("mr-01-signature");
    let signer = TicketSigner::default();
    let ticket = TicketId::from("METRO-ABC-789");
    let sig = signer.sign(&ticket);

    group.bench_function("sign", |b| b.iter(|| black_box(signer.sign(&ticket))));
    group.bench_function("verify", |b| {
        b.iter(|| black_box(signer.matches(&ticket, &sig)))
    });
    group.finish();
}

fn bench_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("mr-01-ledger");

    for size in [100usize, 10_000] {
        let ledger = InMemoryLedger::with_balances(
            (0..size).map(|i| (TicketId::new(format!("T-{}", i)), 10.0)),
        );
        let service = BalanceService::new(Arc::new(ledger), SignaturePolicy::default());
        let ticket = TicketId::new(format!("T-{}", size / 2));

        group.bench_with_input(BenchmarkId::new("get_balance", size), &size, |b, _| {
            b.iter(|| black_box(service.get_balance(&ticket, None).is_ok()))
        });
        group.bench_with_input(BenchmarkId::new("recharge", size), &size, |b, _| {
            b.iter(|| black_box(service.recharge(&ticket, 1.0, None).is_ok()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_signature, bench_ledger);
criterion_main!(benches);
