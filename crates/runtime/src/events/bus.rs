//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{AbilityEvent, GrowthEvent, HarvestEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Harvest resolutions
    Harvest,
    /// Treasure drops, conversions and player messages
    Ability,
    /// Staged and applied replants
    Growth,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Harvest(HarvestEvent),
    Ability(AbilityEvent),
    Growth(GrowthEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Harvest(_) => Topic::Harvest,
            Event::Ability(_) => Topic::Ability,
            Event::Growth(_) => Topic::Growth,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events without
/// subscribers are discarded.
#[derive(Clone)]
pub struct EventBus {
    harvest: broadcast::Sender<Event>,
    ability: broadcast::Sender<Event>,
    growth: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            harvest: broadcast::channel(capacity).0,
            ability: broadcast::channel(capacity).0,
            growth: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Harvest => &self.harvest,
            Topic::Ability => &self.ability,
            Topic::Growth => &self.growth,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use herbalism_core::{ActorId, Message};

    use super::*;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut ability = bus.subscribe(Topic::Ability);
        let mut harvest = bus.subscribe(Topic::Harvest);

        let event = Event::Ability(AbilityEvent::Notified {
            actor: ActorId(1),
            message: Message::HylianLuck,
        });
        bus.publish(event.clone());

        assert_eq!(ability.recv().await.unwrap(), event);
        assert!(harvest.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(Event::Harvest(HarvestEvent::Ignored {
            actor: ActorId(1),
            block: herbalism_core::BlockState::new(
                herbalism_core::Location::ORIGIN,
                herbalism_core::BlockKind::Poppy,
            ),
        }));
    }
}
