// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host.
//!
//! ## Feature
//!
//! Enable with `headless` (on by default).
//!
//! ## Notes
//!
//! [`HeadlessHost`] keeps a flat registry of elements keyed by a selector string,
//! a settable viewport, and a list of listener bindings. Notifications are
//! delivered synchronously in binding order. It is meant for tests, demos, and
//! embedders without a DOM, such as terminal UIs that report a column count as
//! the viewport width.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use understory_breakpoints::Threshold;

use crate::host::{Host, Listener};
use crate::types::{Event, EventKind, EventName, Target, ViewportMetrics};

/// Handle of an element registered with a [`HeadlessHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

struct Binding {
    target: Target<ElementId>,
    name: EventName,
    listener: Listener<ElementId>,
}

/// In-memory window and element registry.
#[derive(Default)]
pub struct HeadlessHost {
    elements: RefCell<Vec<(String, ElementId)>>,
    viewport: Cell<ViewportMetrics>,
    bindings: RefCell<Vec<Binding>>,
    triggered: RefCell<Vec<EventName>>,
}

impl core::fmt::Debug for HeadlessHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeadlessHost")
            .field("elements", &self.elements.borrow().len())
            .field("viewport", &self.viewport.get())
            .field("listeners", &self.bindings.borrow().len())
            .finish_non_exhaustive()
    }
}

impl HeadlessHost {
    /// Create an empty host with an unmeasured viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element matched by `selector`.
    ///
    /// Several elements may share a selector.
    pub fn add_element(&self, selector: &str) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        let id = ElementId(u32::try_from(elements.len()).unwrap_or(u32::MAX));
        elements.push((String::from(selector), id));
        id
    }

    /// Replace the viewport measurements without notifying anyone.
    pub fn set_viewport(&self, metrics: ViewportMetrics) {
        self.viewport.set(metrics);
    }

    /// Set the inner width and fire `resize` on the window.
    pub fn resize(&self, width: Threshold) {
        let mut metrics = self.viewport.get();
        metrics.inner_width = Some(width);
        self.viewport.set(metrics);
        self.trigger(&Target::Window, &Event::window(EventKind::Resize));
    }

    /// Fire `load` on the window.
    pub fn load(&self) {
        self.trigger(&Target::Window, &Event::window(EventKind::Load));
    }

    /// Number of bound listeners.
    pub fn listener_count(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// Number of listeners bound under a name matched by `name`.
    pub fn listener_count_for(&self, name: &EventName) -> usize {
        self.bindings
            .borrow()
            .iter()
            .filter(|b| name.matches(&b.name))
            .count()
    }

    /// Names of every notification triggered so far, in order.
    pub fn triggered(&self) -> Vec<EventName> {
        self.triggered.borrow().clone()
    }

    /// Forget the trigger log.
    pub fn clear_triggered(&self) {
        self.triggered.borrow_mut().clear();
    }
}

impl Host for HeadlessHost {
    type Element = ElementId;

    fn select(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .borrow()
            .iter()
            .filter(|(s, _)| selector == "*" || s == selector)
            .map(|&(_, id)| id)
            .collect()
    }

    fn viewport(&self) -> ViewportMetrics {
        self.viewport.get()
    }

    fn bind(&self, target: &Target<ElementId>, name: EventName, listener: Listener<ElementId>) {
        self.bindings.borrow_mut().push(Binding {
            target: target.clone(),
            name,
            listener,
        });
    }

    fn unbind(&self, target: &Target<ElementId>, name: &EventName) {
        self.bindings
            .borrow_mut()
            .retain(|b| !(b.target.overlaps(target) && name.matches(&b.name)));
    }

    fn trigger(&self, target: &Target<ElementId>, event: &Event<ElementId>) {
        self.triggered.borrow_mut().push(event.name.clone());
        let listeners: Vec<Listener<ElementId>> = self
            .bindings
            .borrow()
            .iter()
            .filter(|b| b.target.overlaps(target) && event.name.matches(&b.name))
            .map(|b| b.listener.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;

    use crate::types::Namespace;

    #[test]
    fn select_by_selector() {
        let host = HeadlessHost::new();
        let a = host.add_element(".item");
        let b = host.add_element(".item");
        let c = host.add_element("#nav");
        assert_eq!(host.select(".item"), vec![a, b]);
        assert_eq!(host.select("#nav"), vec![c]);
        assert_eq!(host.select("*"), vec![a, b, c]);
        assert!(host.select(".missing").is_empty());
    }

    #[test]
    fn trigger_respects_target_and_namespace() {
        let host = HeadlessHost::new();
        let el = host.add_element("#a");
        let other = host.add_element("#b");
        let hits: Rc<Cell<u32>> = Rc::default();
        let name = EventName::namespaced(EventKind::BreakChanged, Namespace::from("x"));
        let counter = hits.clone();
        host.bind(
            &Target::Elements(vec![el]),
            name.clone(),
            Rc::new(move |_: &Event<ElementId>| counter.set(counter.get() + 1)),
        );

        let on_el = Target::Elements(vec![el]);
        host.trigger(&on_el, &Event::new(name.clone(), vec![el]));
        assert_eq!(hits.get(), 1);

        let on_other = Target::Elements(vec![other]);
        host.trigger(&on_other, &Event::new(name.clone(), vec![other]));
        assert_eq!(hits.get(), 1);

        let y = EventName::namespaced(EventKind::BreakChanged, Namespace::from("y"));
        host.trigger(&on_el, &Event::new(y, vec![el]));
        assert_eq!(hits.get(), 1);

        let plain = EventName::plain(EventKind::BreakChanged);
        let on_both = Target::Elements(vec![el, other]);
        host.trigger(&on_both, &Event::new(plain, vec![el]));
        assert_eq!(hits.get(), 2);
        assert_eq!(host.triggered().len(), 4);
    }

    #[test]
    fn unbind_by_namespace() {
        let host = HeadlessHost::new();
        let noop: Listener<ElementId> = Rc::new(|_: &Event<ElementId>| {});
        let a = EventName::namespaced(EventKind::Resize, Namespace::from("a"));
        let b = EventName::namespaced(EventKind::Resize, Namespace::from("b"));
        host.bind(&Target::Window, a.clone(), noop.clone());
        host.bind(&Target::Window, b.clone(), noop);
        assert_eq!(host.listener_count(), 2);
        host.unbind(&Target::Window, &a);
        let any_resize = EventName::plain(EventKind::Resize);
        assert_eq!(host.listener_count_for(&any_resize), 1);
        assert_eq!(host.listener_count_for(&b), 1);
    }

    #[test]
    fn listeners_may_rebind_while_triggering() {
        let host = Rc::new(HeadlessHost::new());
        let weak = Rc::downgrade(&host);
        host.bind(
            &Target::Window,
            EventName::plain(EventKind::Load),
            Rc::new(move |_: &Event<ElementId>| {
                if let Some(h) = weak.upgrade() {
                    h.unbind(&Target::Window, &EventName::plain(EventKind::Load));
                }
            }),
        );
        host.load();
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn resize_updates_inner_width_only() {
        let host = HeadlessHost::new();
        host.set_viewport(ViewportMetrics {
            inner_width: None,
            offset_width: Some(300),
            client_width: Some(290),
        });
        assert_eq!(host.viewport().width(), 300);
        host.resize(640);
        assert_eq!(host.viewport().width(), 640);
        assert_eq!(host.viewport().offset_width, Some(300));
    }
}
