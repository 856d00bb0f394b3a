//! Message definitions for the bus
//!
//! `Message` is what every callback receives when a channel fires.
//!
//! Notes on fields:
//! - `channel`: name of the channel that is firing. A callback attached to
//!   several channels can tell them apart with it, whatever topic was
//!   triggered. For a namespace's own listeners this is the namespace name.
//! - `topic`: the topic string that was passed to `trigger`
//! - `args`: extra arguments supplied by the caller, in order

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub channel: String,
    pub topic: String,
    pub args: Vec<Value>,
}

impl Message {
    pub(crate) fn new(topic: &str, args: Vec<Value>) -> Self {
        Self {
            channel: topic.to_string(),
            topic: topic.to_string(),
            args,
        }
    }

    /// Positional view of the message: the channel name first, then the
    /// extra arguments.
    pub fn argv(&self) -> Vec<Value> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(Value::String(self.channel.clone()));
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Returns the extra argument at `index`, if any.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }
}
