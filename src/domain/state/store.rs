use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::logging::LogComponent;
use crate::{log_trace, log_warn};

/// Pure update function for one key. Must hand back a value equal to its
/// input when the action does not apply.
pub type Reducer<A, V> = Box<dyn Fn(&A, &V) -> V>;

/// Subscriber callback, called with `(current, previous)`
pub type Listener<V> = Box<dyn FnMut(&V, Option<&V>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription<V> {
    id: SubscriptionId,
    callback: Listener<V>,
    once: bool,
}

/// Keyed current/previous state pairs with reducer chains and subscribers.
///
/// Owned by the application root and passed explicitly; there is no ambient
/// registry. Dispatch is synchronous: reducers are folded, and when the result
/// differs from the stored value every subscriber of the key runs, in
/// registration order, before `dispatch` returns.
pub struct StateStore<K, A, V> {
    current: HashMap<K, V>,
    previous: HashMap<K, V>,
    listeners: HashMap<K, Vec<Subscription<V>>>,
    reducers: HashMap<K, Vec<Reducer<A, V>>>,
    next_id: u64,
}

impl<K, A, V> Default for StateStore<K, A, V>
where
    K: Eq + Hash + Clone + Debug,
    A: Debug,
    V: Clone + PartialEq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, A, V> StateStore<K, A, V>
where
    K: Eq + Hash + Clone + Debug,
    A: Debug,
    V: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self {
            current: HashMap::new(),
            previous: HashMap::new(),
            listeners: HashMap::new(),
            reducers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `callback` for `key`. With `once` it is dropped after its
    /// first invocation.
    pub fn subscribe<F>(&mut self, key: K, callback: F, once: bool) -> SubscriptionId
    where
        F: FnMut(&V, Option<&V>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(key).or_default().push(Subscription {
            id,
            callback: Box::new(callback),
            once,
        });
        id
    }

    pub fn unsubscribe(&mut self, key: &K, id: SubscriptionId) -> bool {
        let Some(list) = self.listeners.get_mut(key) else {
            return false;
        };
        let before = list.len();
        list.retain(|sub| sub.id != id);
        before != list.len()
    }

    pub fn subscriber_count(&self, key: &K) -> usize {
        self.listeners.get(key).map_or(0, Vec::len)
    }

    /// Appends `reducer` to the chain folded for `key`
    pub fn register_reducer<F>(&mut self, key: K, reducer: F)
    where
        F: Fn(&A, &V) -> V + 'static,
    {
        self.reducers.entry(key).or_default().push(Box::new(reducer));
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.current.get(key)
    }

    pub fn previous(&self, key: &K) -> Option<&V> {
        self.previous.get(key)
    }

    /// Folds the reducer chain of `key` over its current value and publishes
    /// the result if it changed. Returns whether subscribers were notified.
    ///
    /// A key without reducers is a silent no-op.
    pub fn dispatch(&mut self, key: &K, action: A) -> bool {
        let Some(reducers) = self.reducers.get(key) else {
            log_trace!(LogComponent::Store, "no reducer for {:?}, {:?} ignored", key, action);
            return false;
        };
        let Some(current) = self.current.get(key) else {
            log_warn!(LogComponent::Store, "{:?} has reducers but no state, {:?} ignored", key, action);
            return false;
        };

        let next = reducers
            .iter()
            .fold(current.clone(), |state, reduce| reduce(&action, &state));
        if next == *current {
            log_trace!(LogComponent::Store, "{:?} unchanged by {:?}", key, action);
            return false;
        }

        log_trace!(LogComponent::Store, "{:?} updated by {:?}", key, action);
        self.publish(key.clone(), next);
        true
    }

    /// Stores `value` as the current value of `key`, shifting the old one to
    /// previous, and notifies every subscriber of `key`.
    pub fn publish(&mut self, key: K, value: V) {
        let prev = self.current.insert(key.clone(), value.clone());
        match &prev {
            Some(p) => {
                self.previous.insert(key.clone(), p.clone());
            }
            None => {
                self.previous.remove(&key);
            }
        }

        if let Some(list) = self.listeners.get_mut(&key) {
            for sub in list.iter_mut() {
                (sub.callback)(&value, prev.as_ref());
            }
            list.retain(|sub| !sub.once);
        }
    }
}

impl<K: Debug, A, V> Debug for StateStore<K, A, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("keys", &self.current.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .field("reducers", &self.reducers.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
