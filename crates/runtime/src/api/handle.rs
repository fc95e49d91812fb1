//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! harvesting, using abilities, advancing the clock or streaming events from
//! specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use herbalism_core::{ActorFlags, ActorId, BlockState, Location};

use super::errors::{Result, RuntimeError};
use super::reports::{ConversionReport, HarvestReport, TreasureReport};
use crate::events::{Event, EventBus, Topic};
use crate::players::PlayerProfile;
use crate::scheduler::ReplantResult;
use crate::workers::Command;
use crate::world::WorldStore;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Break the plant at `location` as `actor`.
    ///
    /// Hylian Luck is attempted first; when it drops a treasure the harvest is
    /// cancelled and the report carries only the treasure outcome.
    pub async fn harvest(&self, actor: ActorId, location: Location) -> Result<HarvestReport> {
        self.request(|reply| Command::Harvest {
            actor,
            location,
            reply,
        })
        .await?
    }

    /// Right-click the block at `location`: Green Thumb when holding seeds,
    /// Shroom Thumb otherwise.
    pub async fn interact(&self, actor: ActorId, location: Location) -> Result<ConversionReport> {
        self.request(|reply| Command::Interact {
            actor,
            location,
            reply,
        })
        .await?
    }

    /// Hit the block at `location` with Green Terra active.
    pub async fn strike(&self, actor: ActorId, location: Location) -> Result<ConversionReport> {
        self.request(|reply| Command::Strike {
            actor,
            location,
            reply,
        })
        .await?
    }

    pub async fn hylian_luck(&self, actor: ActorId, location: Location) -> Result<TreasureReport> {
        self.request(|reply| Command::HylianLuck {
            actor,
            location,
            reply,
        })
        .await?
    }

    /// Returns whether Green Terra was activated.
    pub async fn activate_green_terra(&self, actor: ActorId) -> Result<bool> {
        self.request(|reply| Command::ActivateGreenTerra { actor, reply })
            .await?
    }

    /// Food level after Farmer's Diet adjusts a consumption event.
    pub async fn farmers_diet(
        &self,
        actor: ActorId,
        rank_change: u32,
        event_food_level: i32,
        current_food_level: i32,
    ) -> Result<i32> {
        self.request(|reply| Command::FarmersDiet {
            actor,
            rank_change,
            event_food_level,
            current_food_level,
            reply,
        })
        .await?
    }

    /// Advance the world clock, applying due replants.
    pub async fn tick(&self, ticks: u64) -> Result<Vec<ReplantResult>> {
        self.request(|reply| Command::Tick { ticks, reply }).await
    }

    pub async fn add_player(&self, profile: PlayerProfile) -> Result<()> {
        self.request(|reply| Command::AddPlayer { profile, reply })
            .await
    }

    pub async fn set_flags(&self, actor: ActorId, flags: ActorFlags) -> Result<()> {
        self.request(|reply| Command::SetFlags {
            actor,
            flags,
            reply,
        })
        .await?
    }

    /// Write a naturally generated block.
    pub async fn set_block(&self, block: BlockState) -> Result<()> {
        self.request(|reply| Command::SetBlock {
            block,
            placed: false,
            reply,
        })
        .await
    }

    /// Write a block and mark it as player-placed.
    pub async fn place_block(&self, block: BlockState) -> Result<()> {
        self.request(|reply| Command::SetBlock {
            block,
            placed: true,
            reply,
        })
        .await
    }

    /// Protect a cell so breaks there are vetoed.
    pub async fn protect(&self, location: Location) -> Result<()> {
        self.request(|reply| Command::Protect { location, reply })
            .await
    }

    pub async fn query_block(&self, location: Location) -> Result<BlockState> {
        self.request(|reply| Command::QueryBlock { location, reply })
            .await
    }

    pub async fn query_player(&self, actor: ActorId) -> Result<Option<PlayerProfile>> {
        self.request(|reply| Command::QueryPlayer { actor, reply })
            .await
    }

    /// Query the current world (read-only snapshot)
    pub async fn query_world(&self) -> Result<WorldStore> {
        self.request(|reply| Command::QueryWorld { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Harvest` - Resolved and ignored harvests
    /// - `Topic::Ability` - Treasure drops, block conversions and messages
    /// - `Topic::Growth` - Green Thumb replants
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut harvest_rx = handle.subscribe(Topic::Harvest);
    /// while let Ok(event) = harvest_rx.recv().await {
    ///     // Handle harvest events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
