use std::collections::HashMap;
use uuid::Uuid;
use vivarium_data::Creature;

/// Receives the creature collection after every tick. It must not keep the
/// slice; clone what it needs.
///
/// Subscribers run while the ticker lock is held. Calling back into the
/// owning `SimulationHandle` (or `Ticker::lock`) from a subscriber deadlocks.
pub type Subscriber = Box<dyn FnMut(&[Creature]) + Send>;

#[derive(Default)]
pub struct SubscriptionHub {
    subscribers: HashMap<Uuid, Subscriber>,
}

impl SubscriptionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Subscriber) -> Uuid {
        let token = Uuid::new_v4();
        self.subscribers.insert(token, subscriber);
        tracing::debug!(%token, "Subscriber added");
        token
    }

    /// Returns false for unknown tokens.
    pub fn unsubscribe(&mut self, token: Uuid) -> bool {
        self.subscribers.remove(&token).is_some()
    }

    pub fn publish(&mut self, creatures: &[Creature]) {
        for subscriber in self.subscribers.values_mut() {
            subscriber(creatures);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
