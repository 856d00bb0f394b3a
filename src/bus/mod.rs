pub mod callback;
pub mod channel;
pub mod engine;
pub mod message;
pub mod namespace;
pub mod topic;

pub use callback::{Callback, CallbackId, HandlerError, HandlerResult};
pub use engine::EventBus;
pub use message::Message;
