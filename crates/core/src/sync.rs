//! Change propagation between the HSB and RGB representations.
//!
//! The [`SyncHub`] is the only writer of a model's [`ColorValue`]. A mutation
//! enters through [`SyncHub::propagate`], which recomputes the other
//! representation and the hex string, then delivers a single batched
//! [`ColorChange`] to every subscriber.
//!
//! The hub is a two-state machine (`Idle`, `Propagating`). A mutation that
//! arrives while a batch is being delivered (typically a bidirectionally
//! bound widget echoing the value it was just handed) is dropped. The guard
//! relies on all events being serialized on one thread; it is not a lock.

use std::cell::{Cell, RefCell};

use crate::channel::{Channel, Source};
use crate::color::ColorValue;

/// Handle returned by every subscribe call, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Propagation state of a [`SyncHub`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubState {
    Idle,
    Propagating,
}

/// One propagation batch, delivered once to every subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorChange {
    /// The fully consistent value after the mutation.
    pub value: ColorValue,
    /// The representation the mutation originated in.
    pub source: Source,
    /// Channels whose value differs from before the mutation.
    pub changed: Vec<Channel>,
}

impl ColorChange {
    /// Returns true if `channel` changed in this batch.
    pub fn touches(&self, channel: Channel) -> bool {
        self.changed.contains(&channel)
    }
}

pub(crate) enum Listener {
    Channel(Channel, Box<dyn FnMut(f64)>),
    Change(Box<dyn FnMut(&ColorChange)>),
    Hex(Box<dyn FnMut(&str)>),
}

struct Entry {
    id: SubscriptionId,
    listener: Listener,
}

/// Resets the hub to `Idle` when a propagation ends, including by panic.
struct PropagationGuard<'a> {
    state: &'a Cell<HubState>,
}

impl Drop for PropagationGuard<'_> {
    fn drop(&mut self) {
        self.state.set(HubState::Idle);
    }
}

/// Re-entrancy-guarded publish/subscribe hub for one color value.
pub struct SyncHub {
    state: Cell<HubState>,
    batches: Cell<u64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Entry>>,
    // ids of the listeners taken out for the batch in flight
    dispatching: RefCell<Vec<SubscriptionId>>,
    removed: RefCell<Vec<SubscriptionId>>,
}

impl Default for SyncHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SyncHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncHub")
            .field("state", &self.state.get())
            .field("batches", &self.batches.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SyncHub {
    pub fn new() -> Self {
        Self {
            state: Cell::new(HubState::Idle),
            batches: Cell::new(0),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            dispatching: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> HubState {
        self.state.get()
    }

    /// Number of completed propagation batches.
    pub fn batches(&self) -> u64 {
        self.batches.get()
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        let in_flight = self.dispatching.borrow().len() - self.removed.borrow().len();
        self.listeners.borrow().len() + in_flight
    }

    pub(crate) fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(Entry { id, listener });
        id
    }

    /// Removes a subscription. Returns false if the id is unknown.
    ///
    /// A listener removed while a batch is in flight is not called for the
    /// rest of that batch.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        {
            let mut listeners = self.listeners.borrow_mut();
            if let Some(pos) = listeners.iter().position(|e| e.id == id) {
                listeners.remove(pos);
                return true;
            }
        }
        let in_flight = self.dispatching.borrow().contains(&id);
        let mut removed = self.removed.borrow_mut();
        if in_flight && !removed.contains(&id) {
            removed.push(id);
            return true;
        }
        false
    }

    /// Applies `write` to the value, brings the other representation and the
    /// hex string in line, and notifies every subscriber once.
    ///
    /// Returns false without touching the value if a batch is already in
    /// flight.
    pub(crate) fn propagate(
        &self,
        value: &RefCell<ColorValue>,
        source: Source,
        write: impl FnOnce(&mut ColorValue),
    ) -> bool {
        if self.state.get() == HubState::Propagating {
            log::trace!("dropping re-entrant {source:?} mutation");
            return false;
        }
        self.state.set(HubState::Propagating);
        let _guard = PropagationGuard { state: &self.state };

        let change = {
            let mut current = value.borrow_mut();
            let before = current.clone();
            write(&mut current);
            match source {
                Source::Hsb => current.derive_rgb(),
                Source::Rgb => current.derive_hsb(),
            }
            current.refresh_hex();
            ColorChange {
                changed: changed_channels(&before, &current),
                value: current.clone(),
                source,
            }
        };

        self.batches.set(self.batches.get() + 1);
        log::debug!(
            "batch {} from {:?}: {:?} -> {}",
            self.batches.get(),
            change.source,
            change.changed,
            change.value.hex()
        );
        self.notify(&change);
        true
    }

    fn notify(&self, change: &ColorChange) {
        let mut batch = Dispatch {
            hub: self,
            entries: std::mem::take(&mut *self.listeners.borrow_mut()),
        };
        *self.dispatching.borrow_mut() = batch.entries.iter().map(|e| e.id).collect();

        for entry in batch.entries.iter_mut() {
            if self.removed.borrow().contains(&entry.id) {
                continue;
            }
            match &mut entry.listener {
                Listener::Channel(channel, f) => {
                    if change.touches(*channel) {
                        f(change.value.get(*channel));
                    }
                }
                Listener::Change(f) => f(change),
                Listener::Hex(f) => f(change.value.hex()),
            }
        }
    }
}

/// Listeners taken out of the hub for one batch. Dropping it puts them back,
/// including on unwind from a panicking listener.
struct Dispatch<'a> {
    hub: &'a SyncHub,
    entries: Vec<Entry>,
}

impl Drop for Dispatch<'_> {
    fn drop(&mut self) {
        let removed = std::mem::take(&mut *self.hub.removed.borrow_mut());
        self.hub.dispatching.borrow_mut().clear();
        let mut entries = std::mem::take(&mut self.entries);
        entries.retain(|e| !removed.contains(&e.id));
        let mut listeners = self.hub.listeners.borrow_mut();
        // subscriptions made during the batch go after the existing ones
        entries.append(&mut listeners);
        *listeners = entries;
    }
}

fn changed_channels(before: &ColorValue, after: &ColorValue) -> Vec<Channel> {
    Channel::ALL
        .into_iter()
        .filter(|&c| before.get(c) != after.get(c))
        .collect()
}
