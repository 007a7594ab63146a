// Run with:  cargo bench --bench fill

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use ht16k33_matrix::{Ht16k33, DEFAULT_ADDRESS};
use std::hint::black_box;

const WIDTH: usize = 16;
const HEIGHT: usize = 8;

// Auto-write stays off so only the buffer path is measured.
fn init_transactions() -> Vec<Transaction> {
    vec![
        Transaction::write(DEFAULT_ADDRESS, vec![0x21]),
        Transaction::write(DEFAULT_ADDRESS, vec![0x81]),
        Transaction::write(DEFAULT_ADDRESS, vec![0xEF]),
    ]
}

fn fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    group.throughput(Throughput::Elements((WIDTH * HEIGHT) as u64));

    group.bench_function("ht16k33_matrix", |b| {
        let i2c = Mock::new(&init_transactions());
        let mut display = Ht16k33::with_auto_write(i2c, DEFAULT_ADDRESS, false).unwrap();

        b.iter(|| {
            black_box(&mut display).fill(black_box(true)).unwrap();
            black_box(&mut display).fill(black_box(false)).unwrap();
        });

        display.release().done();
    });

    group.finish();
}

criterion_group!(benches, fill);
criterion_main!(benches);
