// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The environment a monitor is installed into.
//!
//! A [`Host`] owns element lookup, viewport measurement, and notification
//! plumbing. Browsers, terminal UIs, and test harnesses each provide their own.
//! See [`adapters`](crate::adapters) for the bundled headless host.

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::types::{Event, EventName, Target, ViewportMetrics};

/// A notification listener.
pub type Listener<E> = Rc<dyn Fn(&Event<E>)>;

/// Environment primitives consumed by [`install`](crate::install::install).
///
/// Methods take `&self`: listeners run synchronously inside [`Host::trigger`]
/// and may call back into the host, so implementations use interior
/// mutability and must not hold borrows while a listener runs.
pub trait Host {
    /// Element handle type.
    type Element: Clone + PartialEq + core::fmt::Debug + 'static;

    /// Resolve a selector to elements. An unknown selector yields an empty collection.
    fn select(&self, selector: &str) -> Vec<Self::Element>;

    /// Current viewport measurements.
    fn viewport(&self) -> ViewportMetrics;

    /// Bind `listener` to notifications named `name` on `target`.
    fn bind(
        &self,
        target: &Target<Self::Element>,
        name: EventName,
        listener: Listener<Self::Element>,
    );

    /// Remove listeners on `target` whose bound name is matched by `name`
    /// (see [`EventName::matches`]).
    fn unbind(&self, target: &Target<Self::Element>, name: &EventName);

    /// Deliver `event` synchronously to every listener on `target` whose bound
    /// name it matches, each listener at most once.
    fn trigger(&self, target: &Target<Self::Element>, event: &Event<Self::Element>);
}
