// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring a [`BreakpointMonitor`] into a [`Host`].
//!
//! [`install`] constructs the monitor and binds three listeners:
//!
//! - `breakChanged.<namespace>` on the target elements, which dispatches the
//!   current breakpoint's callback;
//! - `resize.<namespace>` and `load.<namespace>` on the window, which check the
//!   viewport width and trigger `breakChanged.<namespace>` on the elements when
//!   the active breakpoint changes.
//!
//! Listeners hold the monitor strongly and the host weakly, so a host that
//! drops its listeners frees the monitor and the host itself is never kept
//! alive by its own listeners.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use tracing::{debug, info};
use understory_breakpoints::Threshold;

use crate::callback::BoundCallback;
use crate::error::MonitorError;
use crate::host::{Host, Listener};
use crate::input::{Input, MonitorConfig};
use crate::monitor::{BreakpointMonitor, MonitorState};
use crate::types::{Event, EventKind, EventName, Namespace, Target};

/// A monitor bound to a host.
pub struct Installed<E, A = ()> {
    monitor: Rc<RefCell<BreakpointMonitor<E, A>>>,
    check: Listener<E>,
    bindings: Vec<(Target<E>, EventName)>,
}

impl<E: core::fmt::Debug, A> core::fmt::Debug for Installed<E, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Installed")
            .field("monitor", &self.monitor)
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

/// Construct a monitor and bind it to `host`.
///
/// See [`BreakpointMonitor::new`] for how `breakpoints` and `targets` are validated.
/// On failure nothing is bound.
///
/// ```
/// use std::rc::Rc;
/// use understory_breakpoint_monitor::adapters::headless::HeadlessHost;
/// use understory_breakpoint_monitor::{BreakpointMap, Input, MonitorConfig, install};
///
/// let host = Rc::new(HeadlessHost::new());
/// host.add_element("#page");
/// let monitor = install(
///     &host,
///     Some(Input::from(BreakpointMap::new()
///         .on("default", |_| println!("small"))
///         .on("960", |_| println!("large")))),
///     MonitorConfig::<()>::default(),
///     Input::selector("#page"),
/// )
/// .unwrap();
///
/// host.resize(1280);
/// assert_eq!(monitor.current(), Some(960));
/// ```
pub fn install<H, A>(
    host: &Rc<H>,
    breakpoints: Option<Input<H::Element, A>>,
    config: MonitorConfig<A>,
    targets: Input<H::Element, A>,
) -> Result<Installed<H::Element, A>, MonitorError>
where
    H: Host + 'static,
    A: 'static,
{
    let select = |selector: &str| host.select(selector);
    let monitor = BreakpointMonitor::new(breakpoints, config, targets, select)?;
    let namespace = monitor.namespace().clone();
    let elements = monitor.elements().to_vec();
    info!(
        namespace = %namespace,
        elements = elements.len(),
        breakpoints = monitor.table().len(),
        "installing breakpoint monitor"
    );
    let monitor = Rc::new(RefCell::new(monitor));

    let changed = EventName::namespaced(EventKind::BreakChanged, namespace.clone());
    let on_changed: Listener<H::Element> = {
        let monitor = monitor.clone();
        Rc::new(move |event: &Event<H::Element>| {
            let claimed = monitor.borrow_mut().claim_dispatch();
            if let Ok((threshold, callback)) = claimed {
                callback.invoke(threshold, event);
            }
        })
    };

    let check: Listener<H::Element> = {
        let monitor = monitor.clone();
        let host = Rc::downgrade(host);
        let elements = elements.clone();
        let changed = changed.clone();
        Rc::new(move |_event: &Event<H::Element>| {
            let Some(host) = host.upgrade() else {
                return;
            };
            let transition = monitor.borrow_mut().check_viewport(host.viewport());
            if let Some(transition) = transition {
                debug!(name = %changed, to = ?transition.to, "triggering");
                host.trigger(
                    &Target::Elements(elements.clone()),
                    &Event::new(changed.clone(), elements.clone()),
                );
            }
        })
    };

    let targets = Target::Elements(elements);
    let bindings = vec![
        (targets.clone(), changed),
        (
            Target::Window,
            EventName::namespaced(EventKind::Resize, namespace.clone()),
        ),
        (
            Target::Window,
            EventName::namespaced(EventKind::Load, namespace),
        ),
    ];
    host.bind(&bindings[0].0, bindings[0].1.clone(), on_changed);
    for (target, name) in &bindings[1..] {
        host.bind(target, name.clone(), check.clone());
    }

    Ok(Installed {
        monitor,
        check,
        bindings,
    })
}

impl<E: Clone, A> Installed<E, A> {
    /// Check the viewport now, as if the window had been resized.
    pub fn check(&self) {
        (self.check)(&Event::window(EventKind::Resize));
    }

    /// Unbind every listener bound by [`install`].
    pub fn uninstall<H: Host<Element = E>>(self, host: &H) {
        for (target, name) in &self.bindings {
            host.unbind(target, name);
        }
        debug!(
            bindings = self.bindings.len(),
            "uninstalled breakpoint monitor"
        );
    }

    /// Snapshot of the registered breakpoints and their bound callbacks.
    pub fn list_breakpoints(&self) -> BTreeMap<Threshold, BoundCallback<E, A>> {
        self.monitor.borrow().list_breakpoints().clone()
    }

    /// The monitor's current namespace.
    pub fn namespace(&self) -> Namespace {
        self.monitor.borrow().namespace().clone()
    }

    /// Change the monitor's namespace.
    ///
    /// Bound listeners keep their names until the monitor is reinstalled.
    pub fn set_namespace(&self, namespace: impl Into<Namespace>) {
        self.monitor.borrow_mut().set_namespace(namespace);
    }

    /// The breakpoint recorded by the last check.
    pub fn current(&self) -> Option<Threshold> {
        self.monitor.borrow().current()
    }

    /// Current change-detection state.
    pub fn state(&self) -> MonitorState {
        self.monitor.borrow().state()
    }

    /// The names this monitor is bound under.
    pub fn bindings(&self) -> &[(Target<E>, EventName)] {
        &self.bindings
    }

    /// Run `f` with mutable access to the monitor.
    ///
    /// `f` must not trigger notifications on the host.
    pub fn with_monitor<R>(&self, f: impl FnOnce(&mut BreakpointMonitor<E, A>) -> R) -> R {
        f(&mut self.monitor.borrow_mut())
    }
}

#[cfg(all(test, feature = "headless"))]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    use crate::adapters::headless::{ElementId, HeadlessHost};
    use crate::callback::Invocation;
    use crate::input::BreakpointMap;
    use crate::types::ViewportMetrics;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn rec(log: &Log, name: &'static str) -> impl Fn(&Invocation<'_, ElementId>) + 'static {
        let log = log.clone();
        move |_| log.borrow_mut().push(name)
    }

    fn default_only(log: &Log, name: &'static str) -> Option<Input<ElementId>> {
        let map = BreakpointMap::new().on("default", rec(log, name));
        Some(Input::from(map))
    }

    fn split_at_100(log: &Log, a: &'static str, b: &'static str) -> Option<Input<ElementId>> {
        let map = BreakpointMap::new()
            .on("0", rec(log, a))
            .on("100", rec(log, b));
        Some(Input::from(map))
    }

    fn setup() -> (Rc<HeadlessHost>, Log) {
        let host = Rc::new(HeadlessHost::new());
        let _ = host.add_element("#page");
        (host, Log::default())
    }

    fn changed(ns: &str) -> EventName {
        EventName::namespaced(EventKind::BreakChanged, Namespace::from(ns))
    }

    #[test]
    fn resize_sequence_dispatches_per_transition() {
        let (host, log) = setup();
        let _m = install(
            &host,
            split_at_100(&log, "A", "B"),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        for w in [50, 50, 150, 150, 50] {
            host.resize(w);
        }
        assert_eq!(*log.borrow(), vec!["A", "B", "A"]);
        let fired = host
            .triggered()
            .into_iter()
            .filter(|n| n.kind == EventKind::BreakChanged)
            .count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn default_namespace_is_the_plugin_name() {
        let (host, log) = setup();
        let _m = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        host.clear_triggered();
        host.resize(10);
        let names: Vec<String> = host.triggered().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["resize", "breakChanged.breakUp"]);
        assert_eq!(*log.borrow(), vec!["A"]);
    }

    #[test]
    fn load_checks_the_viewport() {
        let (host, log) = setup();
        let m = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        host.set_viewport(ViewportMetrics {
            inner_width: None,
            offset_width: None,
            client_width: Some(500),
        });
        host.load();
        assert_eq!(*log.borrow(), vec!["A"]);
        assert_eq!(m.current(), Some(0));
    }

    #[test]
    fn empty_selector_binds_nothing() {
        let (host, log) = setup();
        let r = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default(),
            Input::selector(".nothing"),
        );
        assert!(matches!(r, Err(MonitorError::EmptyTargetSet { .. })));
        assert_eq!(host.listener_count(), 0);
        host.resize(10);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn selector_in_breakpoint_slot_binds_nothing() {
        let (host, _) = setup();
        let r = install::<_, ()>(
            &host,
            Some(Input::selector("#page")),
            MonitorConfig::default(),
            Input::selector("#page"),
        );
        assert!(matches!(r, Err(MonitorError::MissingBreakpointSpec { .. })));
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn namespaces_isolate_monitors() {
        let (host, log) = setup();
        let one = install(
            &host,
            split_at_100(&log, "A1", "B1"),
            MonitorConfig::default().with_namespace("one"),
            Input::selector("#page"),
        )
        .unwrap();
        let two = install(
            &host,
            split_at_100(&log, "A2", "B2"),
            MonitorConfig::default().with_namespace("two"),
            Input::selector("#page"),
        )
        .unwrap();
        host.resize(50);
        assert_eq!(*log.borrow(), vec!["A1", "A2"]);

        // Arm the second monitor without notifying it.
        let _ = two.with_monitor(|m| m.check_width(150));
        let page = Target::Elements(host.select("#page"));
        host.trigger(&page, &Event::new(changed("one"), Vec::new()));
        assert_eq!(*log.borrow(), vec!["A1", "A2"]);

        host.trigger(&page, &Event::new(changed("two"), Vec::new()));
        assert_eq!(*log.borrow(), vec!["A1", "A2", "B2"]);
        assert_eq!(one.current(), Some(0));
    }

    #[test]
    fn duplicate_notifications_dispatch_once() {
        let (host, log) = setup();
        let m = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        host.set_viewport(ViewportMetrics::from_inner_width(320));
        m.check();
        let page = Target::Elements(host.select("#page"));
        host.trigger(&page, &Event::new(changed("breakUp"), Vec::new()));
        host.trigger(&page, &Event::new(changed("breakUp"), Vec::new()));
        assert_eq!(*log.borrow(), vec!["A"]);
        assert!(m.state().dirty);
    }

    #[test]
    fn reentrant_notification_is_suppressed() {
        let (host, log) = setup();
        let weak = Rc::downgrade(&host);
        let sink = log.clone();
        let on_default = move |inv: &Invocation<'_, ElementId>| {
            sink.borrow_mut().push("A");
            if let Some(h) = weak.upgrade() {
                let target = Target::Elements(inv.context.to_vec());
                let plain = Event::new(EventName::plain(EventKind::BreakChanged), Vec::new());
                h.trigger(&target, &plain);
            }
        };
        let _m = install(
            &host,
            Some(Input::from(BreakpointMap::new().on("default", on_default))),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        host.resize(10);
        assert_eq!(*log.borrow(), vec!["A"]);
    }

    #[test]
    fn callbacks_see_event_and_context() {
        let (host, _) = setup();
        let page = host.select("#page");
        let seen: Rc<RefCell<Vec<(String, Vec<ElementId>)>>> = Rc::default();
        let sink = seen.clone();
        let record = move |inv: &Invocation<'_, ElementId>| {
            let name = inv.event.name.to_string();
            sink.borrow_mut().push((name, inv.context.to_vec()));
        };
        let _m = install(
            &host,
            Some(Input::from(BreakpointMap::new().on("default", record))),
            MonitorConfig::default().with_namespace("nav"),
            Input::Elements(page.clone()),
        )
        .unwrap();
        host.resize(1);
        assert_eq!(
            *seen.borrow(),
            vec![(String::from("breakChanged.nav"), page)]
        );
    }

    #[test]
    fn set_namespace_keeps_existing_bindings() {
        let (host, log) = setup();
        let m = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default(),
            Input::selector("#page"),
        )
        .unwrap();
        m.set_namespace("renamed");
        assert_eq!(m.namespace().as_str(), "renamed");
        assert_eq!(m.bindings()[0].1, changed("breakUp"));
        host.resize(5);
        assert_eq!(*log.borrow(), vec!["A"]);
    }

    #[test]
    fn uninstall_unbinds_only_own_listeners() {
        let (host, log) = setup();
        let a = install(
            &host,
            default_only(&log, "A"),
            MonitorConfig::default().with_namespace("a"),
            Input::selector("#page"),
        )
        .unwrap();
        let _b = install(
            &host,
            default_only(&log, "B"),
            MonitorConfig::default().with_namespace("b"),
            Input::selector("#page"),
        )
        .unwrap();
        assert_eq!(host.listener_count(), 6);
        assert_eq!(a.list_breakpoints().len(), 1);
        a.uninstall(&*host);
        assert_eq!(host.listener_count(), 3);
        host.resize(100);
        assert_eq!(*log.borrow(), vec!["B"]);
    }
}
