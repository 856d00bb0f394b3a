//! # PopBus
//!
//! `popbus` is a minimalist, in-process publish/subscribe event bus.
//! Callbacks subscribe to string topics made of an optional event name and
//! an optional namespace (`event`, `.namespace`, `event.namespace`), and a
//! trigger synchronously invokes every matching callback on the caller's
//! thread.
//!
//! ```rust
//! use popbus::{Callback, EventBus};
//!
//! let bus = EventBus::new();
//! let log = Callback::from_fn(|msg| println!("{} fired", msg.channel));
//!
//! bus.on("saved.editor", &log).on(".editor", &log);
//! bus.trigger("saved.editor").unwrap();
//! ```
//!
//! ## Core Modules
//!
//! - `bus`: topic parsing, channels, namespace registries and the `EventBus`.
//! - `config`: loading bus and logging settings.
//! - `utils`: shared error types and logging setup.

pub mod bus;
pub mod config;
pub mod utils;

pub use bus::{Callback, CallbackId, EventBus, HandlerError, HandlerResult, Message};
pub use utils::error::{BusError, HandlerFailure};
