//! Integration test: Seed definitions -> Apply effects -> Equip -> Advance time
//!
//! Drives the game-master service end to end against the in-memory store.

use campaign_core::prelude::*;
use std::sync::Arc;
use std::thread;

type Game = GameMaster<MemoryStore, Outbox>;

fn game() -> Game {
    GameMaster::new(MemoryStore::new(), Outbox::new())
}

fn player_with(gm: &Game, name: &str, attributes: Attributes) -> Player {
    gm.create_player(NewPlayer::named(name).with_attributes(attributes))
        .unwrap()
}

#[test]
fn test_scenario_a_active_plus_equipped_passive() {
    let gm = game();
    let player = player_with(&gm, "Aldric", Attributes::default());

    let fury = gm
        .create_effect(EffectDefinition::timed("Fury", Some(Attribute::Strength), 3, Some(3), None))
        .unwrap();
    let edge = gm
        .create_effect(EffectDefinition::permanent("Keen Edge", Some(Attribute::Strength), 2))
        .unwrap();
    let axe = gm
        .create_item(Item::new("Axe", Rarity::Rare).with_passive_effect(edge.id))
        .unwrap();

    gm.apply_effect(player.id, fury.id, EffectSource::Admin).unwrap();
    gm.grant_item(player.id, axe.id, 1).unwrap();
    assert_eq!(gm.final_stats(player.id).unwrap().strength, 3);

    gm.set_equipped(player.id, axe.id, true).unwrap();
    assert_eq!(gm.final_stats(player.id).unwrap().strength, 5);

    // Equipping created no instance
    assert_eq!(gm.store().active_effects_for(player.id).unwrap().len(), 1);
}

#[test]
fn test_scenario_b_no_clamping() {
    let gm = game();
    let player = player_with(
        &gm,
        "Bea",
        Attributes {
            health: 60,
            max_health: 60,
            ..Attributes::default()
        },
    );
    let wound = gm
        .create_effect(EffectDefinition::timed("Grievous Wound", Some(Attribute::Health), -70, None, Some(1)))
        .unwrap();

    gm.apply_effect(player.id, wound.id, EffectSource::Admin).unwrap();
    let stats = gm.final_stats(player.id).unwrap();
    assert_eq!(stats.health, -10);
    assert_eq!(stats.max_health, 60);
}

#[test]
fn test_scenario_c_unequipped_passive_ignored() {
    let gm = game();
    let player = player_with(&gm, "Cato", Attributes::default());
    let ward = gm
        .create_effect(EffectDefinition::permanent("Ward", Some(Attribute::Armor), 4))
        .unwrap();
    let shield = gm
        .create_item(Item::new("Shield", Rarity::Uncommon).with_passive_effect(ward.id))
        .unwrap();
    gm.grant_item(player.id, shield.id, 1).unwrap();

    assert_eq!(gm.final_stats(player.id).unwrap().armor, 10);

    gm.set_equipped(player.id, shield.id, true).unwrap();
    assert_eq!(gm.final_stats(player.id).unwrap().armor, 14);

    gm.set_equipped(player.id, shield.id, false).unwrap();
    assert_eq!(gm.final_stats(player.id).unwrap().armor, 10);
}

#[test]
fn test_scenario_d_narrative_effect() {
    let gm = game();
    let player = player_with(&gm, "Dara", Attributes::default());
    let omen = gm
        .create_effect(EffectDefinition::permanent("Ill Omen", None, 0))
        .unwrap();

    gm.apply_effect(player.id, omen.id, EffectSource::Admin).unwrap();
    assert_eq!(gm.final_stats(player.id).unwrap(), Attributes::default());
    assert_eq!(gm.snapshot(player.id).unwrap().summary().active_effects_count, 1);
}

#[test]
fn test_tick_monotonicity() {
    let gm = game();
    let player = player_with(&gm, "Edda", Attributes::default());
    let haste = gm
        .create_effect(EffectDefinition::timed("Haste", Some(Attribute::Agility), 2, Some(3), None))
        .unwrap();
    gm.apply_effect(player.id, haste.id, EffectSource::Admin).unwrap();

    assert!(gm.advance(TickKind::Turn).unwrap().expired.is_empty());
    assert!(gm.advance(TickKind::Turn).unwrap().expired.is_empty());
    assert_eq!(gm.final_stats(player.id).unwrap().agility, 2);

    let third = gm.advance(TickKind::Turn).unwrap();
    assert_eq!(third.expired.len(), 1);
    assert_eq!(gm.final_stats(player.id).unwrap().agility, 0);

    // Nothing left to expire
    let fourth = gm.advance(TickKind::Turn).unwrap();
    assert_eq!(fourth.retained, 0);
    assert!(fourth.expired.is_empty());
}

#[test]
fn test_dual_counter_early_expiry() {
    let gm = game();
    let player = player_with(&gm, "Fenn", Attributes::default());
    let venom = gm
        .create_effect(EffectDefinition::timed("Venom", Some(Attribute::Physique), -2, Some(5), Some(1)))
        .unwrap();
    gm.apply_effect(player.id, venom.id, EffectSource::Admin).unwrap();

    gm.advance(TickKind::Turn).unwrap();
    let left = gm.store().active_effects_for(player.id).unwrap();
    assert_eq!(left[0].remaining_turns, Some(4));

    let report = gm.advance(TickKind::Day).unwrap();
    assert_eq!(report.expired.len(), 1);
    assert_eq!(report.expired[0].remaining_turns, Some(4));
    assert!(gm.store().active_effects_for(player.id).unwrap().is_empty());
}

#[test]
fn test_source_removal_cascades() {
    let gm = game();
    let a = player_with(&gm, "Gwen", Attributes::default());
    let b = player_with(&gm, "Hale", Attributes::default());

    let focus = gm
        .create_effect(EffectDefinition::timed("Focus", Some(Attribute::Intelligence), 2, Some(4), None))
        .unwrap();
    let ability = gm
        .create_ability(
            Ability::new("Meditate", campaign_core::AbilityType::Active)
                .with_cooldown(2, 0)
                .with_effect(focus.id),
        )
        .unwrap();
    for player in [&a, &b] {
        gm.grant_ability(player.id, ability.id).unwrap();
        gm.trigger_ability(player.id, ability.id).unwrap();
    }
    gm.apply_effect(a.id, focus.id, EffectSource::Admin).unwrap();
    gm.notifier().drain();

    gm.delete_ability(ability.id).unwrap();

    assert_eq!(gm.store().active_effects_for(a.id).unwrap().len(), 1);
    assert!(gm.store().active_effects_for(b.id).unwrap().is_empty());

    let removed: Vec<_> = gm
        .notifier()
        .drain()
        .into_iter()
        .filter(|e| matches!(e, DomainEvent::EffectRemoved { .. }))
        .collect();
    assert_eq!(removed.len(), 2);
}

#[test]
fn test_events_drained_in_order() {
    let gm = game();
    let player = player_with(&gm, "Ivo", Attributes::default());
    let spark = gm
        .create_effect(EffectDefinition::timed("Spark", Some(Attribute::Charisma), 1, Some(1), None))
        .unwrap();
    let lantern = gm.create_item(Item::new("Lantern", Rarity::Common)).unwrap();
    gm.grant_item(player.id, lantern.id, 1).unwrap();

    gm.apply_effect(player.id, spark.id, EffectSource::Admin).unwrap();
    gm.set_equipped(player.id, lantern.id, true).unwrap();
    gm.advance(TickKind::Turn).unwrap();

    let channels: Vec<_> = gm.notifier().drain().iter().map(|e| e.channel()).collect();
    assert_eq!(
        channels,
        vec![
            "player:created",
            "effectCreated",
            "itemCreated",
            "effect:applied",
            "item:equipped",
            "effect:expired",
        ]
    );
}

#[test]
fn test_concurrent_applications_are_not_lost() {
    let gm = Arc::new(game());
    let player = player_with(&gm, "Jory", Attributes::default());
    let bless = gm
        .create_effect(EffectDefinition::permanent("Blessing", Some(Attribute::Wisdom), 1))
        .unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let gm = Arc::clone(&gm);
            thread::spawn(move || {
                for _ in 0..10 {
                    gm.apply_effect(player.id, bless.id, EffectSource::Admin).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(gm.store().active_effects_for(player.id).unwrap().len(), 80);
    assert_eq!(gm.final_stats(player.id).unwrap().wisdom, 80);
}

#[test]
fn test_bundled_campaign_resolves() {
    let gm = game();
    default_campaign().seed(gm.store()).unwrap();

    let players = gm.store().players().unwrap();
    let brannoc = players.iter().find(|p| p.name == "Brannoc").unwrap();
    // Base 4 plus the equipped longsword
    assert_eq!(gm.final_stats(brannoc.id).unwrap().strength, 7);

    let ysolde = players.iter().find(|p| p.name == "Ysolde").unwrap();
    let stats = gm.final_stats(ysolde.id).unwrap();
    assert_eq!(stats.armor, 15);
    assert_eq!(stats.physique, -3);
}
