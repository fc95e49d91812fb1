//! Scripted harvest session replayed against a fresh runtime.
use anyhow::Result;
use herbalism_core::{ActorFlags, ActorId, BlockKind, BlockState, ItemKind, Location};
use runtime::{HarvestSummary, PlayerProfile, RuntimeHandle};
use tracing::info;

pub const FARMER: ActorId = ActorId(1);
pub const FORAGER: ActorId = ActorId(2);

/// Starting profile for the scripted player.
pub fn farmer(level: u32) -> PlayerProfile {
    PlayerProfile::new(FARMER, level)
        .with_flags(ActorFlags::HOE_PREPARED)
        .with_item(ItemKind::WheatSeeds, 16)
        .with_item(ItemKind::RedMushroom, 2)
        .holding(ItemKind::BrownMushroom, 2)
}

/// Second player who picks flowers with a sword, so Hylian Luck can fire.
pub fn forager(level: u32) -> PlayerProfile {
    PlayerProfile::new(FORAGER, level).holding(ItemKind::IronSword, 1)
}

/// Lays out a small farm: a wheat row, cane and kelp columns, flowers,
/// a dirt patch and some cobblestone.
pub async fn seed_world(handle: &RuntimeHandle) -> Result<()> {
    for x in 0..4 {
        let wheat = BlockState::new(Location::new(x, 64, 0), BlockKind::Wheat).with_age(7);
        handle.set_block(wheat).await?;
    }
    for offset in 0..3 {
        handle
            .set_block(BlockState::new(Location::new(0, 64, 4).up(offset), BlockKind::SugarCane))
            .await?;
    }
    let kelp_base = Location::new(6, 40, 6);
    for offset in 0..4 {
        handle
            .set_block(BlockState::new(kelp_base.up(offset), BlockKind::KelpPlant))
            .await?;
    }
    handle
        .set_block(BlockState::new(kelp_base.up(4), BlockKind::Kelp))
        .await?;
    handle
        .set_block(BlockState::new(Location::new(3, 64, 3), BlockKind::Poppy))
        .await?;
    handle
        .place_block(BlockState::new(Location::new(4, 64, 3), BlockKind::Dandelion))
        .await?;
    handle
        .set_block(BlockState::new(Location::new(8, 63, 8), BlockKind::Dirt))
        .await?;
    handle
        .set_block(BlockState::new(Location::new(9, 63, 8), BlockKind::Cobblestone))
        .await?;
    Ok(())
}

pub async fn run(handle: &RuntimeHandle, level: u32) -> Result<()> {
    handle.add_player(forager(level)).await?;

    let shroom = handle.interact(FARMER, Location::new(8, 63, 8)).await?;
    info!(result = ?shroom.outcome.result, "shroom thumb");

    let activated = handle.activate_green_terra(FARMER).await?;
    info!(activated, "green terra");

    let strike = handle.strike(FARMER, Location::new(9, 63, 8)).await?;
    info!(result = ?strike.outcome.result, "green terra strike");

    for x in 0..4 {
        harvest(handle, FARMER, Location::new(x, 64, 0)).await?;
    }
    harvest(handle, FARMER, Location::new(0, 64, 4)).await?;
    harvest(handle, FARMER, Location::new(6, 44, 6)).await?;
    harvest(handle, FARMER, Location::new(6, 42, 6)).await?;
    harvest(handle, FORAGER, Location::new(3, 64, 3)).await?;
    harvest(handle, FORAGER, Location::new(4, 64, 3)).await?;

    let replants = handle.tick(1).await?;
    info!(replants = replants.len(), "tick");

    let food = handle.farmers_diet(FARMER, 200, 14, 10).await?;
    info!(food, "farmer's diet");

    if let Some(player) = handle.query_player(FARMER).await? {
        info!(
            experience = player.experience,
            seeds = player.count(ItemKind::WheatSeeds),
            messages = player.messages.len(),
            "session finished"
        );
    }
    Ok(())
}

async fn harvest(handle: &RuntimeHandle, actor: ActorId, location: Location) -> Result<()> {
    let report = handle.harvest(actor, location).await?;
    let summary = HarvestSummary::from(&report);
    info!(
        %actor,
        block = %summary.block,
        reward = summary.reward,
        bonus = summary.bonus_units,
        cells = summary.cells,
        treasure = summary.treasure,
        replant = summary.replant_staged,
        "harvest"
    );
    Ok(())
}
