// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_breakpoint_monitor::{BreakpointMap, BreakpointMonitor, Input, MonitorConfig};
use understory_breakpoints::{BreakpointKey, BreakpointTable, Handler};

fn table_with(n: u32, step: u32) -> BreakpointTable<u32> {
    let mut t = BreakpointTable::new();
    for i in 0..n {
        let _ = t.insert(BreakpointKey::from(i * step), i);
    }
    t
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 32) as u32
    }
}

fn widths(count: usize, max: u32) -> Vec<u32> {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    (0..count).map(|_| rng.next_u32() % max).collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let ws = widths(1024, 4096);
    group.throughput(Throughput::Elements(ws.len() as u64));
    for n in [4_u32, 16, 256] {
        let table = table_with(n, 4096 / n);
        group.bench_function(format!("thresholds_{n}"), |b| {
            b.iter(|| {
                let mut acc = 0_u64;
                for &w in &ws {
                    acc += u64::from(table.resolve(black_box(w)).unwrap_or(0));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_register(c: &mut Criterion) {
    let keys: Vec<String> = (0..64).map(|i| (i * 32).to_string()).collect();
    c.bench_function("register_64_textual", |b| {
        b.iter(|| {
            let mut t = BreakpointTable::new();
            let report = t.register(keys.iter().map(|k| (k.as_str(), Handler::callable(0_u8))));
            black_box(report.accepted.len())
        });
    });
}

// A resize storm: mostly same-breakpoint checks with occasional transitions.
fn bench_check_width(c: &mut Criterion) {
    let map = BreakpointMap::new()
        .on("default", |_| {})
        .on("640", |_| {})
        .on("1024", |_| {})
        .on("1440", |_| {});
    let mut monitor: BreakpointMonitor<u32> = BreakpointMonitor::new(
        Some(Input::from(map)),
        MonitorConfig::default(),
        Input::from(vec![0]),
        |_| Vec::new(),
    )
    .expect("non-empty targets");
    let ws = widths(1024, 2048);
    c.bench_function("check_width_1024", |b| {
        b.iter(|| {
            let mut transitions = 0_u32;
            for &w in &ws {
                if monitor.check_width(black_box(w)).is_some() {
                    transitions += 1;
                }
            }
            black_box(transitions)
        });
    });
}

criterion_group!(benches, bench_resolve, bench_register, bench_check_width);
criterion_main!(benches);
