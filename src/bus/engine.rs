//! Bus engine
//!
//! `EventBus` is the public entry point. It owns the registry for topics
//! without a namespace plus one registry per namespace name, parses each
//! topic and routes `on`/`off`/`trigger` to the right channels.
//!
//! Routing of a trigger for `event.ns`, in firing order:
//! 1. the `event` channel of namespace `ns` (if the namespace exists)
//! 2. the listeners on namespace `ns` itself
//! 3. the un-namespaced `event` channel
//!
//! Concurrency and usage notes:
//! - All methods take `&self`; the registries sit behind a mutex, so the
//!   bus can be shared (for example as `Arc<EventBus>`) and callbacks may
//!   subscribe or unsubscribe on the bus that is currently firing them.
//! - The lock is only held while reading or mutating the registries, never
//!   while callbacks run. Each channel is snapshotted right before it fires.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::debug;

use crate::bus::callback::Callback;
use crate::bus::message::Message;
use crate::bus::namespace::{Namespace, Slot};
use crate::bus::topic::{DEFAULT_SEPARATOR, Topic};
use crate::config::{BusSettings, FailurePolicy};
use crate::utils::error::BusError;

#[derive(Debug, Default)]
struct Registry {
    /// Listeners on topics that carry no namespace.
    root: Namespace,
    namespaces: HashMap<String, Namespace>,
}

impl Registry {
    /// Get the registry for `namespace`, creating it on first reference.
    fn resolve_mut(&mut self, namespace: Option<&str>) -> &mut Namespace {
        match namespace {
            Some(name) => self
                .namespaces
                .entry(name.to_string())
                .or_insert_with(|| Namespace::new(name)),
            None => &mut self.root,
        }
    }

    fn lookup(&self, namespace: Option<&str>) -> Option<&Namespace> {
        match namespace {
            Some(name) => self.namespaces.get(name),
            None => Some(&self.root),
        }
    }
}

#[derive(Debug)]
pub struct EventBus {
    registry: Mutex<Registry>,
    separator: char,
    failure_policy: FailurePolicy,
    catch_panics: bool,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry::default()),
            separator: DEFAULT_SEPARATOR,
            failure_policy: FailurePolicy::default(),
            catch_panics: true,
        }
    }

    pub fn with_settings(settings: &BusSettings) -> Self {
        Self {
            registry: Mutex::new(Registry::default()),
            separator: settings.separator,
            failure_policy: settings.failure_policy,
            catch_panics: settings.catch_panics,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Subscribe `callback` to `topic`. Subscribing twice is a no-op.
    ///
    /// `topic` may be an event (`test`), a namespace (`.ns`) or an event
    /// inside a namespace (`test.ns`).
    pub fn on(&self, topic: &str, callback: &Callback) -> &Self {
        let parsed = Topic::parse(topic, self.separator);
        debug!(
            topic,
            event = ?parsed.event,
            namespace = ?parsed.namespace,
            callback = %callback.id(),
            "Subscribing"
        );

        self.registry()
            .resolve_mut(parsed.namespace)
            .add(callback.clone(), parsed.event);
        self
    }

    /// Unsubscribe `callback` from `topic`. Unknown callbacks are ignored.
    pub fn off(&self, topic: &str, callback: &Callback) -> &Self {
        let parsed = Topic::parse(topic, self.separator);
        debug!(
            topic,
            event = ?parsed.event,
            namespace = ?parsed.namespace,
            callback = %callback.id(),
            "Unsubscribing"
        );

        self.registry()
            .resolve_mut(parsed.namespace)
            .remove(callback, parsed.event);
        self
    }

    /// Trigger `topic` without extra arguments.
    pub fn trigger(&self, topic: &str) -> Result<&Self, BusError> {
        self.trigger_with(topic, Vec::new())
    }

    /// Trigger `topic`, handing `args` to every callback that fires.
    ///
    /// Fails with `BusError::InvalidTrigger` for a namespace-only topic,
    /// before any callback runs. Callback failures are reported as
    /// `BusError::Dispatch` according to the configured `FailurePolicy`.
    /// A trigger never creates a namespace.
    pub fn trigger_with<I>(&self, topic: &str, args: I) -> Result<&Self, BusError>
    where
        I: IntoIterator<Item = Value>,
    {
        let parsed = Topic::parse(topic, self.separator);
        let Some(event) = parsed.event else {
            return Err(BusError::InvalidTrigger {
                topic: topic.to_string(),
            });
        };

        let mut steps: Vec<(Option<&str>, Slot)> = Vec::with_capacity(4);
        if let Some(ns) = parsed.namespace {
            steps.extend(Namespace::TRIGGER_ORDER.map(|slot| (Some(ns), slot)));
        }
        steps.extend(Namespace::TRIGGER_ORDER.map(|slot| (None, slot)));

        let mut msg = Message::new(topic, args.into_iter().collect());
        let mut failures = Vec::new();
        let mut fired = 0usize;

        for (scope, slot) in steps {
            let snapshot = {
                let registry = self.registry();
                registry
                    .lookup(scope)
                    .and_then(|ns| ns.snapshot(slot, event))
            };
            let Some(snapshot) = snapshot else {
                continue;
            };

            fired += snapshot.observers.len();
            let flow = snapshot.fire(
                &mut msg,
                self.failure_policy,
                self.catch_panics,
                &mut failures,
            );
            if flow.is_break() {
                break;
            }
        }

        debug!(
            topic,
            event,
            namespace = ?parsed.namespace,
            callbacks = fired,
            failed = failures.len(),
            "Triggered"
        );

        if failures.is_empty() {
            Ok(self)
        } else {
            Err(BusError::Dispatch {
                topic: topic.to_string(),
                failures,
            })
        }
    }

    /// Whether `callback` is registered on exactly `topic`.
    pub fn is_subscribed(&self, topic: &str, callback: &Callback) -> bool {
        let parsed = Topic::parse(topic, self.separator);
        self.registry()
            .lookup(parsed.namespace)
            .is_some_and(|ns| ns.has(callback, parsed.event))
    }

    /// Whether a registry exists for the namespace `name`.
    pub fn has_namespace(&self, name: &str) -> bool {
        self.registry().namespaces.contains_key(name)
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
impl EventBus {
    pub(crate) fn with_registry<R>(
        &self,
        f: impl FnOnce(&Namespace, &HashMap<String, Namespace>) -> R,
    ) -> R {
        let registry = self.registry();
        f(&registry.root, &registry.namespaces)
    }
}
