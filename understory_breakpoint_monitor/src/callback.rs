// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint callbacks and the context they are invoked with.

use alloc::rc::Rc;

use understory_breakpoints::Threshold;

use crate::types::Event;

/// What a breakpoint callback receives.
#[derive(Debug)]
pub struct Invocation<'a, E, A = ()> {
    /// The threshold that became active.
    pub threshold: Threshold,
    /// The `breakChanged` notification being handled.
    pub event: &'a Event<E>,
    /// The elements the monitor is bound to.
    pub context: &'a [E],
    /// Extra arguments from [`MonitorConfig::args`](crate::input::MonitorConfig::args).
    pub args: &'a [A],
}

/// A breakpoint callback.
pub type Callback<E, A = ()> = Rc<dyn Fn(&Invocation<'_, E, A>)>;

/// Box a closure as a [`Callback`].
pub fn callback<E, A>(f: impl Fn(&Invocation<'_, E, A>) + 'static) -> Callback<E, A> {
    Rc::new(f)
}

/// A callback together with the context and extra arguments it is invoked with.
pub struct BoundCallback<E, A = ()> {
    callback: Callback<E, A>,
    context: Rc<[E]>,
    args: Rc<[A]>,
}

impl<E, A> BoundCallback<E, A> {
    /// Bind `callback` to `context` and `args`.
    pub fn new(callback: Callback<E, A>, context: Rc<[E]>, args: Rc<[A]>) -> Self {
        Self {
            callback,
            context,
            args,
        }
    }

    /// Invoke the callback for `threshold` with the triggering `event`.
    pub fn invoke(&self, threshold: Threshold, event: &Event<E>) {
        (self.callback)(&Invocation {
            threshold,
            event,
            context: &self.context,
            args: &self.args,
        });
    }

    /// The bound element context.
    pub fn context(&self) -> &[E] {
        &self.context
    }

    /// The bound extra arguments.
    pub fn args(&self) -> &[A] {
        &self.args
    }
}

impl<E, A> Clone for BoundCallback<E, A> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            context: self.context.clone(),
            args: self.args.clone(),
        }
    }
}

impl<E: core::fmt::Debug, A: core::fmt::Debug> core::fmt::Debug for BoundCallback<E, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BoundCallback")
            .field("context", &self.context)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}
