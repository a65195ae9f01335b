// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two monitors on the same element.
//!
//! Each monitor scopes its notifications with its own namespace, so a
//! `breakChanged` from one never reaches the other's callbacks.
//!
//! Run:
//! - `cargo run -p understory_breakpoint_demos --example monitor_namespaces`

use std::rc::Rc;

use understory_breakpoint_monitor::adapters::headless::HeadlessHost;
use understory_breakpoint_monitor::{BreakpointMap, Input, MonitorConfig, install};

fn main() {
    tracing_subscriber::fmt().init();

    let host = Rc::new(HeadlessHost::new());
    let page = host.add_element("body");

    let nav = install(
        &host,
        Some(Input::from(
            BreakpointMap::new()
                .on("default", |_| println!("  nav: hamburger"))
                .on("768", |_| println!("  nav: full menu")),
        )),
        MonitorConfig::<()>::default().with_namespace("nav"),
        Input::Elements(vec![page]),
    )
    .expect("body exists");

    let images = install(
        &host,
        Some(Input::from(
            BreakpointMap::new()
                .on("default", |_| println!("  images: 1x"))
                .on("1440", |_| println!("  images: 2x")),
        )),
        MonitorConfig::<()>::default().with_namespace("images"),
        Input::Elements(vec![page]),
    )
    .expect("body exists");

    for width in [320, 800, 1600, 1000] {
        println!("resize -> {width}");
        host.resize(width);
    }

    println!("== Triggered ==");
    for name in host.triggered() {
        println!("  {name}");
    }

    assert_eq!(nav.current(), Some(768));
    assert_eq!(images.current(), Some(0));

    // A selector where the breakpoints belong is rejected and binds nothing.
    let before = host.listener_count();
    let rejected = install::<_, ()>(
        &host,
        Some(Input::selector("body")),
        MonitorConfig::default(),
        Input::selector("body"),
    );
    assert!(rejected.is_err());
    assert_eq!(host.listener_count(), before);
}
