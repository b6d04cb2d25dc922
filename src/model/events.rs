//! Change notifications
//!
//! Listeners are boxed closures keyed by a [`ListenerId`]. The owner of an
//! [`EventEmitter`] publishes by taking the emitter out of itself, emitting
//! against `&self`, and putting it back, so listeners can inspect the owner
//! while they run.

use std::fmt;

use super::content::Appearance;
use crate::base::Name;

/// What happened to a module content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModelEvent {
    /// A `set_content` finished, successfully or not
    ContentSet,
    /// A successful parse or rename changed the module name
    NameChanged { old: Name, new: Name },
    /// The appearance attribute changed value
    AppearanceChanged { old: Appearance, new: Appearance },
    /// The owning design is about to be written out
    AboutToSave,
}

/// Something that can publish events of type `E`
pub trait EventBus<E> {
    fn publish(&mut self, event: &E);
}

/// Identifies one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<E, T> = Box<dyn FnMut(&E, &T) + Send>;

pub struct EventEmitter<E, T> {
    listeners: Vec<(ListenerId, Listener<E, T>)>,
    next_id: u64,
}

impl<E, T> Default for EventEmitter<E, T> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E, T> fmt::Debug for EventEmitter<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E, T> EventEmitter<E, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E, &T) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener in subscription order and hand the emitter back
    pub fn emit(mut self, event: E, target: &T) -> Self {
        for (_, listener) in &mut self.listeners {
            listener(&event, target);
        }
        self
    }
}
