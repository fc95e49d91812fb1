use herbalism_content::ContentBundle;
use herbalism_core::{
    ActorFlags, ActorId, BlockKind, BlockState, Capability, ConversionResult, GreenThumbOutcome,
    ItemKind, ItemStack, Location, Message, SkillChance, TreasureResult,
};
use runtime::{
    AbilityEvent, Event, GrowthEvent, HarvestEvent, PermissionOracleImpl, PlayerProfile,
    ReplantResult, Runtime, RuntimeError, Topic,
};

const ALWAYS: SkillChance = SkillChance::new(100.0, 100.0, 1000);
const NEVER: SkillChance = SkillChance::new(0.0, 0.0, 1000);

const FARMER: ActorId = ActorId(1);

/// Classic content with every roll pinned, so outcomes do not depend on seeds.
fn pinned_content(double_drops: bool, hylian_luck: bool, abilities: bool) -> ContentBundle {
    let mut content = ContentBundle::classic();
    let pick = |on: bool| if on { ALWAYS } else { NEVER };
    content.config.double_drops = pick(double_drops);
    content.config.hylian_luck = pick(hylian_luck);
    content.config.green_thumb = pick(abilities);
    content.config.shroom_thumb = pick(abilities);
    content
}

async fn start(content: &ContentBundle, farmer: PlayerProfile) -> Runtime {
    Runtime::builder()
        .content(content)
        .seed(42)
        .player(farmer)
        .build()
        .await
        .expect("runtime should start")
}

#[tokio::test]
async fn sugar_cane_column_rewards_every_cell() {
    let runtime = start(
        &pinned_content(true, false, false),
        PlayerProfile::new(FARMER, 100),
    )
    .await;
    let handle = runtime.handle();
    let mut harvests = handle.subscribe(Topic::Harvest);

    let base = Location::new(0, 64, 0);
    for offset in 0..3 {
        handle
            .set_block(BlockState::new(base.up(offset), BlockKind::SugarCane))
            .await
            .unwrap();
    }

    let report = handle.harvest(FARMER, base).await.unwrap();
    assert!(report.outcome.processed);
    assert_eq!(report.outcome.cells, 3);
    assert_eq!(report.reward(), 90);
    assert_eq!(report.outcome.bonus_units, 3);
    assert_eq!(report.broken.len(), 3);
    assert_eq!(report.broken.bonus_drops, 3);

    let world = handle.query_world().await.unwrap();
    assert_eq!(world.bonus_drops(base), 0);
    for offset in 0..3 {
        assert!(world.is_empty(base.up(offset)));
    }

    let player = handle.query_player(FARMER).await.unwrap().unwrap();
    assert_eq!(player.experience, 90);

    match harvests.recv().await.unwrap() {
        Event::Harvest(HarvestEvent::Harvested { reward, cells, .. }) => {
            assert_eq!(reward, 90);
            assert_eq!(cells, 3);
        }
        other => panic!("unexpected event {other:?}"),
    }

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn placed_wheat_breaks_without_reward() {
    let runtime = start(
        &pinned_content(true, false, true),
        PlayerProfile::new(FARMER, 1000),
    )
    .await;
    let handle = runtime.handle();
    let mut harvests = handle.subscribe(Topic::Harvest);

    let location = Location::new(5, 64, 5);
    handle
        .place_block(BlockState::new(location, BlockKind::Wheat).with_age(7))
        .await
        .unwrap();

    let report = handle.harvest(FARMER, location).await.unwrap();
    assert!(!report.outcome.processed);
    assert_eq!(report.reward(), 0);
    assert!(report.applied.staged.is_empty());
    assert!(handle.query_world().await.unwrap().is_empty(location));

    assert!(matches!(
        harvests.recv().await.unwrap(),
        Event::Harvest(HarvestEvent::Ignored { .. })
    ));
}

#[tokio::test]
async fn hylian_luck_cancels_the_harvest() {
    let runtime = start(
        &pinned_content(true, true, false),
        PlayerProfile::new(FARMER, 1000).holding(ItemKind::IronSword, 1),
    )
    .await;
    let handle = runtime.handle();
    let mut abilities = handle.subscribe(Topic::Ability);

    let location = Location::new(2, 70, -4);
    handle
        .set_block(BlockState::new(location, BlockKind::Poppy))
        .await
        .unwrap();

    let report = handle.harvest(FARMER, location).await.unwrap();
    let treasure = report.treasure.expect("hylian luck attempted");
    assert!(treasure.succeeded());
    assert!(!report.outcome.processed);
    assert_eq!(report.applied.experience, 0);
    assert_eq!(report.applied.dropped, vec![ItemStack::single(ItemKind::Carrot)]);

    let world = handle.query_world().await.unwrap();
    assert!(world.is_empty(location));
    assert_eq!(world.dropped_items().len(), 1);
    assert_eq!(world.dropped_items()[0].at, location.center());

    match abilities.recv().await.unwrap() {
        Event::Ability(AbilityEvent::TreasureDropped { location: at, item, .. }) => {
            assert_eq!(at, location);
            assert_eq!(item.item, ItemKind::Carrot);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(matches!(
        abilities.recv().await.unwrap(),
        Event::Ability(AbilityEvent::Notified {
            message: Message::HylianLuck,
            ..
        })
    ));
}

#[tokio::test]
async fn hylian_luck_needs_a_sword_in_hand() {
    let farmer = PlayerProfile::new(FARMER, 1000).holding(ItemKind::IronHoe, 1);
    let runtime = start(&pinned_content(false, true, false), farmer).await;
    let handle = runtime.handle();

    let location = Location::new(2, 70, 4);
    handle
        .set_block(BlockState::new(location, BlockKind::Poppy))
        .await
        .unwrap();

    let report = handle.harvest(FARMER, location).await.unwrap();
    assert!(report.treasure.is_none());
    assert!(report.outcome.processed);
    assert_eq!(report.reward(), 100);

    let world = handle.query_world().await.unwrap();
    assert!(world.dropped_items().is_empty());
    assert!(world.is_empty(location));
}

#[tokio::test]
async fn protected_cell_vetoes_treasure_and_harvest_goes_on() {
    let runtime = start(
        &pinned_content(false, true, false),
        PlayerProfile::new(FARMER, 1000).holding(ItemKind::IronSword, 1),
    )
    .await;
    let handle = runtime.handle();

    let location = Location::new(0, 70, 0);
    handle
        .set_block(BlockState::new(location, BlockKind::Dandelion))
        .await
        .unwrap();
    handle.protect(location).await.unwrap();

    let report = handle.harvest(FARMER, location).await.unwrap();
    assert_eq!(
        report.treasure.as_ref().map(|treasure| treasure.result),
        Some(TreasureResult::Vetoed)
    );
    assert!(report.outcome.processed);
    assert_eq!(report.reward(), 100);
    assert!(handle.query_world().await.unwrap().dropped_items().is_empty());
}

#[tokio::test]
async fn tall_kelp_credits_only_what_breaks() {
    let runtime = start(
        &pinned_content(false, false, false),
        PlayerProfile::new(FARMER, 1000),
    )
    .await;
    let handle = runtime.handle();

    let base = Location::new(6, 40, 6);
    for offset in 0..3 {
        handle
            .set_block(BlockState::new(base.up(offset), BlockKind::KelpPlant))
            .await
            .unwrap();
    }
    handle
        .set_block(BlockState::new(base.up(3), BlockKind::Kelp))
        .await
        .unwrap();

    let mut credited = 0;
    let mut broken = 0;
    for offset in [3, 1, 0] {
        let report = handle.harvest(FARMER, base.up(offset)).await.unwrap();
        assert!(report.outcome.processed);
        assert_eq!(report.outcome.cells as usize, report.broken.len());
        credited += report.outcome.cells;
        broken += report.broken.len();
    }
    assert_eq!(credited, 4);
    assert_eq!(broken, 4);

    let player = handle.query_player(FARMER).await.unwrap().unwrap();
    assert_eq!(player.experience, 12);
    let world = handle.query_world().await.unwrap();
    for offset in 0..4 {
        assert!(world.is_empty(base.up(offset)));
    }
}

#[tokio::test]
async fn replanted_cell_releases_bonus_drops_per_harvest() {
    let runtime = start(
        &pinned_content(true, false, false),
        PlayerProfile::new(FARMER, 1000),
    )
    .await;
    let handle = runtime.handle();
    let location = Location::new(7, 64, 7);

    for _ in 0..2 {
        handle
            .set_block(BlockState::new(location, BlockKind::Wheat).with_age(7))
            .await
            .unwrap();
        let report = handle.harvest(FARMER, location).await.unwrap();
        assert!(report.outcome.bonus_units > 0);
        assert_eq!(report.broken.bonus_drops, report.outcome.bonus_units);
        assert_eq!(handle.query_world().await.unwrap().bonus_drops(location), 0);
    }
}

#[tokio::test]
async fn green_terra_replants_wheat_after_a_tick() {
    let farmer = PlayerProfile::new(FARMER, 0)
        .with_flags(ActorFlags::HOE_PREPARED)
        .with_item(ItemKind::WheatSeeds, 4);
    let runtime = start(&pinned_content(true, false, false), farmer).await;
    let handle = runtime.handle();
    let mut growth = handle.subscribe(Topic::Growth);

    assert!(handle.activate_green_terra(FARMER).await.unwrap());
    let player = handle.query_player(FARMER).await.unwrap().unwrap();
    assert!(player.flags.contains(ActorFlags::GREEN_TERRA_ACTIVE));
    assert!(!player.flags.contains(ActorFlags::HOE_PREPARED));

    let location = Location::new(8, 64, 8);
    handle
        .set_block(BlockState::new(location, BlockKind::Wheat).with_age(7))
        .await
        .unwrap();

    let report = handle.harvest(FARMER, location).await.unwrap();
    assert_eq!(report.reward(), 50);
    assert_eq!(report.outcome.bonus_units, 2);
    let staged = match report.outcome.green_thumb {
        Some(GreenThumbOutcome::Staged(replant)) => replant,
        other => panic!("expected a staged replant, got {other:?}"),
    };
    assert_eq!(staged.age, 3);
    assert_eq!(report.applied.removed, vec![(ItemKind::WheatSeeds, 1)]);
    assert!(handle.query_world().await.unwrap().is_empty(location));

    let results = handle.tick(1).await.unwrap();
    assert_eq!(results, vec![ReplantResult::Applied(staged)]);
    assert_eq!(
        handle.query_block(location).await.unwrap(),
        BlockState::new(location, BlockKind::Wheat).with_age(3)
    );

    assert!(matches!(
        growth.recv().await.unwrap(),
        Event::Growth(GrowthEvent::ReplantStaged { .. })
    ));
    assert!(matches!(
        growth.recv().await.unwrap(),
        Event::Growth(GrowthEvent::Replanted { .. })
    ));

    let player = handle.query_player(FARMER).await.unwrap().unwrap();
    assert_eq!(player.count(ItemKind::WheatSeeds), 3);
}

#[tokio::test]
async fn interact_prefers_green_thumb_then_shroom_thumb() {
    let farmer = PlayerProfile::new(FARMER, 1000)
        .with_item(ItemKind::BrownMushroom, 1)
        .holding(ItemKind::WheatSeeds, 2);
    let runtime = start(&pinned_content(false, false, true), farmer).await;
    let handle = runtime.handle();

    let cobble = Location::new(1, 63, 1);
    handle
        .set_block(BlockState::new(cobble, BlockKind::Cobblestone))
        .await
        .unwrap();
    let report = handle.interact(FARMER, cobble).await.unwrap();
    assert_eq!(
        report.outcome.result,
        ConversionResult::Converted {
            from: BlockKind::Cobblestone,
            to: BlockKind::MossyCobblestone,
        }
    );
    assert_eq!(
        handle.query_block(cobble).await.unwrap().kind,
        BlockKind::MossyCobblestone
    );

    // Holding a mushroom without a red one in the inventory: nothing applies.
    let holder = PlayerProfile::new(ActorId(2), 1000).holding(ItemKind::BrownMushroom, 1);
    handle.add_player(holder).await.unwrap();
    let dirt = Location::new(3, 63, 3);
    handle
        .set_block(BlockState::new(dirt, BlockKind::Dirt))
        .await
        .unwrap();
    let report = handle.interact(ActorId(2), dirt).await.unwrap();
    assert_eq!(report.outcome.result, ConversionResult::NotApplicable);

    let grower = PlayerProfile::new(ActorId(3), 1000)
        .with_item(ItemKind::RedMushroom, 1)
        .holding(ItemKind::BrownMushroom, 1);
    handle.add_player(grower).await.unwrap();
    let report = handle.interact(ActorId(3), dirt).await.unwrap();
    assert!(report.outcome.converted());
    assert_eq!(handle.query_block(dirt).await.unwrap().kind, BlockKind::Mycelium);
    let grower = handle.query_player(ActorId(3)).await.unwrap().unwrap();
    assert_eq!(grower.count(ItemKind::RedMushroom), 0);
    assert_eq!(grower.count(ItemKind::BrownMushroom), 0);
}

#[tokio::test]
async fn green_terra_strike_needs_seeds() {
    let farmer = PlayerProfile::new(FARMER, 0).with_flags(ActorFlags::GREEN_TERRA_ACTIVE);
    let runtime = start(&pinned_content(false, false, false), farmer).await;
    let handle = runtime.handle();

    let bricks = Location::new(0, 60, 0);
    handle
        .set_block(BlockState::new(bricks, BlockKind::StoneBricks))
        .await
        .unwrap();

    let report = handle.strike(FARMER, bricks).await.unwrap();
    assert_eq!(
        report.outcome.result,
        ConversionResult::MissingReagent(ItemKind::WheatSeeds)
    );
    assert_eq!(report.applied.messages, vec![Message::GreenTerraNeedMore]);
    assert_eq!(
        handle.query_block(bricks).await.unwrap().kind,
        BlockKind::StoneBricks
    );
}

#[tokio::test]
async fn revoked_farmers_diet_passes_event_food_through() {
    let mut permissions = PermissionOracleImpl::new();
    permissions.revoke(ActorId(2), Capability::FarmersDiet);
    let runtime = Runtime::builder()
        .content(&ContentBundle::classic())
        .permissions(permissions)
        .player(PlayerProfile::new(FARMER, 1000))
        .player(PlayerProfile::new(ActorId(2), 1000))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    assert_eq!(handle.farmers_diet(FARMER, 200, 14, 10).await.unwrap(), 19);
    assert_eq!(handle.farmers_diet(ActorId(2), 200, 14, 10).await.unwrap(), 14);
}

#[tokio::test]
async fn unknown_actor_and_empty_cell_are_errors() {
    let runtime = start(&ContentBundle::classic(), PlayerProfile::new(FARMER, 0)).await;
    let handle = runtime.handle();
    let location = Location::new(9, 9, 9);

    let err = handle.harvest(ActorId(99), location).await.unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownActor(ActorId(99))));
    assert_eq!(err.error_code(), "RUNTIME_UNKNOWN_ACTOR");

    let err = handle.harvest(FARMER, location).await.unwrap_err();
    assert!(matches!(err, RuntimeError::EmptyCell(at) if at == location));
}

#[tokio::test]
async fn invalid_config_is_rejected_at_build() {
    let mut content = ContentBundle::classic();
    content.config.activation_chance = 0;

    let result = Runtime::builder().content(&content).build().await;
    assert!(matches!(result, Err(RuntimeError::Config(_))));
}
