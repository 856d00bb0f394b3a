//! The `error` module defines the error types returned by `popbus`.
//!
//! Only two conditions are errors: triggering a namespace-only topic, and
//! callbacks failing while a trigger fires. Removing an unknown callback,
//! adding a duplicate or triggering an event nobody listens to are no-ops.

use std::fmt;

use thiserror::Error;

use crate::bus::callback::CallbackId;

/// One callback that failed while a channel fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    /// Name of the channel that was firing.
    pub channel: String,
    pub callback: CallbackId,
    pub reason: String,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "callback {} on channel '{}': {}",
            self.callback, self.channel, self.reason
        )
    }
}

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// A namespace can only fire as a side effect of one of its events.
    #[error("triggering topic '{topic}' is a namespace and should be an event")]
    InvalidTrigger { topic: String },

    /// At least one callback failed while `topic` was dispatched.
    #[error("{} callback(s) failed while triggering '{topic}'", failures.len())]
    Dispatch {
        topic: String,
        failures: Vec<HandlerFailure>,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::InvalidTrigger { .. } => "invalid_trigger",
            BusError::Dispatch { .. } => "dispatch_failed",
        }
    }

    /// Callback failures carried by a `Dispatch` error; empty otherwise.
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            BusError::Dispatch { failures, .. } => failures,
            _ => &[],
        }
    }
}
