// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint table basics.
//!
//! Registers textual entries (including two invalid ones), prints the
//! registration report, then resolves a range of widths.
//!
//! Run:
//! - `cargo run -p understory_breakpoint_demos --example breakpoint_table`

use understory_breakpoints::{BreakpointTable, Handler};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut table = BreakpointTable::new();
    let report = table.register([
        ("default", Handler::callable("phone")),
        ("600", Handler::callable("tablet")),
        ("1024", Handler::callable("desktop")),
        ("huge", Handler::callable("never")),
        ("1440", Handler::not_callable("true")),
    ]);

    println!("== Registration ==");
    println!("  accepted: {:?}", report.accepted);
    for err in &report.rejected {
        println!("  rejected: {err}");
    }

    println!("== Resolution ==");
    for width in [0, 320, 599, 600, 1023, 1024, 2560] {
        let resolved = table.resolve(width);
        let name = resolved
            .and_then(|t| table.lookup(t))
            .copied()
            .unwrap_or("-");
        println!("  width={width:>5}  breakpoint={resolved:?}  name={name}");
    }

    // "default" and "0" are the same entry; the later registration wins.
    let _ = table.register([("0", Handler::callable("watch"))]);
    assert_eq!(table.lookup(0), Some(&"watch"));
    assert_eq!(table.len(), 3);
}
