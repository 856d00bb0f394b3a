//! Callback handles
//!
//! A `Callback` wraps a caller-supplied handler together with a unique id.
//! Cloning a `Callback` yields the same subscription identity, so the clone
//! can later be passed to `off` to remove the original registration. Two
//! callbacks built from the same closure are distinct subscribers.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::bus::message::Message;

/// Error type a handler may return to report that it failed.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<(), HandlerError>;

type Handler = dyn Fn(&Message) -> HandlerResult + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(Uuid);

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone)]
pub struct Callback {
    id: CallbackId,
    handler: Arc<Handler>,
}

impl Callback {
    /// Create a callback from a handler that can fail.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> HandlerResult + Send + Sync + 'static,
    {
        Self {
            id: CallbackId(Uuid::new_v4()),
            handler: Arc::new(handler),
        }
    }

    /// Create a callback from a handler that never fails.
    pub fn from_fn<F>(handler: F) -> Self
    where
        F: Fn(&Message) + Send + Sync + 'static,
    {
        Self::new(move |msg| {
            handler(msg);
            Ok(())
        })
    }

    pub fn id(&self) -> CallbackId {
        self.id
    }

    pub(crate) fn call(&self, msg: &Message) -> HandlerResult {
        (self.handler)(msg)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("id", &self.id)
            .field("handler", &"Fn(&Message)")
            .finish()
    }
}
