//! Channel management
//!
//! A `Channel` holds the ordered list of callbacks listening on one name:
//! an event name, or the namespace name for a namespace's own listeners.
//! Callbacks keep insertion order and duplicate adds are a no-op.
//!
//! Firing works on a `Snapshot` taken before the first callback runs, so
//! callbacks that add or remove listeners while the channel fires only
//! affect later triggers.

use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};

use tracing::{trace, warn};

use crate::bus::callback::Callback;
use crate::bus::message::Message;
use crate::config::FailurePolicy;
use crate::utils::error::HandlerFailure;

#[derive(Debug, Default)]
pub struct Channel {
    pub name: String,
    pub(crate) observers: Vec<Callback>,
}

impl Channel {
    /// Create a new, empty channel with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            observers: Vec::new(),
        }
    }

    /// Append a callback. Ignored if it is already registered.
    pub fn add(&mut self, callback: Callback) {
        if self.has(&callback) {
            trace!(channel = %self.name, callback = %callback.id(), "Callback already registered");
            return;
        }
        self.observers.push(callback);
    }

    /// Remove a callback. Ignored if it is not registered.
    pub fn remove(&mut self, callback: &Callback) {
        match self.observers.iter().position(|c| c == callback) {
            Some(idx) => {
                self.observers.remove(idx);
            }
            None => {
                trace!(channel = %self.name, callback = %callback.id(), "Callback not registered");
            }
        }
    }

    pub fn has(&self, callback: &Callback) -> bool {
        self.observers.contains(callback)
    }

    /// Registered callbacks in registration order.
    pub fn observers(&self) -> &[Callback] {
        &self.observers
    }

    /// Copy of the current observers, to be fired outside any lock.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name.clone(),
            observers: self.observers.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// The observers of a channel at the moment a firing pass began.
#[derive(Debug)]
pub struct Snapshot {
    pub name: String,
    pub observers: Vec<Callback>,
}

impl Snapshot {
    /// Invoke every captured callback in registration order.
    ///
    /// `msg.channel` is set to this channel's name before the first call.
    /// Failures are appended to `failures`. Under `FailurePolicy::FailFast`
    /// the pass stops at the first failure and returns `ControlFlow::Break`
    /// so the caller skips the remaining channels.
    pub fn fire(
        &self,
        msg: &mut Message,
        policy: FailurePolicy,
        catch_panics: bool,
        failures: &mut Vec<HandlerFailure>,
    ) -> ControlFlow<()> {
        msg.channel.clone_from(&self.name);

        for callback in &self.observers {
            let outcome = if catch_panics {
                panic::catch_unwind(AssertUnwindSafe(|| callback.call(msg)))
                    .unwrap_or_else(|payload| Err(panic_reason(payload.as_ref()).into()))
            } else {
                callback.call(msg)
            };

            if let Err(e) = outcome {
                warn!(
                    channel = %self.name,
                    callback = %callback.id(),
                    error = %e,
                    "Callback failed"
                );
                failures.push(HandlerFailure {
                    channel: self.name.clone(),
                    callback: callback.id(),
                    reason: e.to_string(),
                });
                if policy == FailurePolicy::FailFast {
                    return ControlFlow::Break(());
                }
            }
        }

        ControlFlow::Continue(())
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("callback panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("callback panicked: {s}")
    } else {
        "callback panicked".to_string()
    }
}
