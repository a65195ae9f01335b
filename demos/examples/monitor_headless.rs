// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint monitor on a headless host.
//!
//! Installs a monitor, replays a sequence of resizes, and shows that each
//! callback runs once per breakpoint transition rather than once per resize.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_breakpoint_demos --example monitor_headless`

use std::cell::RefCell;
use std::rc::Rc;

use understory_breakpoint_monitor::adapters::headless::{ElementId, HeadlessHost};
use understory_breakpoint_monitor::{BreakpointMap, Input, Invocation, MonitorConfig, install};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let host = Rc::new(HeadlessHost::new());
    let _ = host.add_element("#layout");

    let calls: Rc<RefCell<Vec<String>>> = Rc::default();
    let record = |label: &'static str| {
        let calls = calls.clone();
        move |inv: &Invocation<'_, ElementId, &'static str>| {
            let (threshold, name) = (inv.threshold, &inv.event.name);
            println!("  {label} at {threshold}px via {name} ({:?})", inv.args);
            calls.borrow_mut().push(String::from(label));
        }
    };

    let monitor = install(
        &host,
        Some(Input::from(
            BreakpointMap::new()
                .on("default", record("single column"))
                .on("640", record("two columns"))
                .on("1200", record("three columns")),
        )),
        MonitorConfig::default()
            .with_namespace("layout")
            .with_args(["grid"]),
        Input::selector("#layout"),
    )
    .expect("#layout exists");

    println!("== Resizes ==");
    for width in [360, 400, 700, 720, 1300, 1250, 500] {
        println!("resize -> {width}");
        host.resize(width);
    }

    println!("== Registered ==");
    for threshold in monitor.list_breakpoints().keys() {
        println!("  {threshold}");
    }

    assert_eq!(
        *calls.borrow(),
        [
            "single column",
            "two columns",
            "three columns",
            "single column",
        ]
    );
    monitor.uninstall(&*host);
    assert_eq!(host.listener_count(), 0);
}
