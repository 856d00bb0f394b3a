//! Namespace registry
//!
//! A `Namespace` owns a root channel, holding the listeners on the namespace
//! itself, plus one channel per event name. Event channels are created the
//! first time an `add` or `remove` names them and are kept afterwards, even
//! when they become empty.

use std::collections::HashMap;

use crate::bus::callback::Callback;
use crate::bus::channel::{Channel, Snapshot};

/// Which of a namespace's channels a firing step refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Event,
    Root,
}

#[derive(Debug, Default)]
pub struct Namespace {
    pub name: String,
    pub root: Channel,
    pub channels: HashMap<String, Channel>,
}

impl Namespace {
    /// Order in which a trigger fires a namespace: the specific event
    /// channel first, then the namespace's own listeners.
    pub const TRIGGER_ORDER: [Slot; 2] = [Slot::Event, Slot::Root];

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            root: Channel::new(name),
            channels: HashMap::new(),
        }
    }

    /// Add to the named event channel, or to the root channel when no
    /// event is given.
    pub fn add(&mut self, callback: Callback, event: Option<&str>) {
        self.channel_mut(event).add(callback);
    }

    /// Remove from the named event channel, or from the root channel when
    /// no event is given. The event channel is created if missing.
    pub fn remove(&mut self, callback: &Callback, event: Option<&str>) {
        self.channel_mut(event).remove(callback);
    }

    pub fn has(&self, callback: &Callback, event: Option<&str>) -> bool {
        match event {
            Some(name) => self.channels.get(name).is_some_and(|c| c.has(callback)),
            None => self.root.has(callback),
        }
    }

    /// Snapshot of the channel a trigger of `event` fires at `slot`.
    ///
    /// Returns `None` when the event has no channel yet. The root channel
    /// always exists.
    pub fn snapshot(&self, slot: Slot, event: &str) -> Option<Snapshot> {
        match slot {
            Slot::Event => self.channels.get(event).map(Channel::snapshot),
            Slot::Root => Some(self.root.snapshot()),
        }
    }

    fn channel_mut(&mut self, event: Option<&str>) -> &mut Channel {
        match event {
            Some(name) => self
                .channels
                .entry(name.to_string())
                .or_insert_with(|| Channel::new(name)),
            None => &mut self.root,
        }
    }
}
