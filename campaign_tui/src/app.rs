//! Application state

use campaign_core::{
    config::CampaignConfig, ActiveEffect, CampaignStore, EffectDefinition, EffectSource, GameMaster, MemoryStore,
    Outbox, Player, PlayerSnapshot, StoreError, TickKind,
};
use std::collections::VecDeque;

/// Event log entries kept for the Events tab
const EVENT_LOG_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Players,
    Stats,
    Effects,
    Inventory,
    Events,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Players, Tab::Stats, Tab::Effects, Tab::Inventory, Tab::Events, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Players => "Players",
            Tab::Stats => "Stats",
            Tab::Effects => "Effects",
            Tab::Inventory => "Gear",
            Tab::Events => "Events",
            Tab::Help => "Help",
        }
    }
}

/// Gear panel focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearFocus {
    Items,
    Abilities,
}

pub struct App {
    pub current_tab: Tab,
    pub game: GameMaster<MemoryStore, Outbox>,
    /// Without the master secret nothing can be changed
    pub read_only: bool,
    pub players: Vec<Player>,
    pub effects: Vec<EffectDefinition>,
    pub selected_player: usize,
    pub selected_effect: usize,
    pub selected_instance: usize,
    pub selected_item: usize,
    pub selected_ability: usize,
    pub gear_focus: GearFocus,
    pub event_log: VecDeque<String>,
    pub events_scroll: usize,
    pub status: String,
    pub time: (u32, u32),
}

impl App {
    /// Seed a fresh in-memory campaign and unlock it if `secret` matches
    pub fn new(config: &CampaignConfig, secret: Option<&str>) -> Result<Self, campaign_core::ConfigError> {
        let game = GameMaster::new(MemoryStore::new(), Outbox::new());
        config.seed(game.store())?;

        let read_only = !secret.is_some_and(|s| config.settings.verify_master_secret(s));
        let status = if read_only {
            "Read-only: set CAMPAIGN_MASTER_SECRET to make changes".to_string()
        } else {
            "Game master mode".to_string()
        };

        let mut app = App {
            current_tab: Tab::Players,
            game,
            read_only,
            players: Vec::new(),
            effects: Vec::new(),
            selected_player: 0,
            selected_effect: 0,
            selected_instance: 0,
            selected_item: 0,
            selected_ability: 0,
            gear_focus: GearFocus::Items,
            event_log: VecDeque::new(),
            events_scroll: 0,
            status,
            time: (0, 0),
        };
        app.refresh();
        Ok(app)
    }

    /// Reload lists from the store and move pending events into the log
    pub fn refresh(&mut self) {
        match self.game.store().players() {
            Ok(players) => self.players = players,
            Err(e) => self.fail(e),
        }
        match self.game.store().effects() {
            Ok(effects) => self.effects = effects,
            Err(e) => self.fail(e),
        }
        self.selected_player = clamp_index(self.selected_player, self.players.len());
        self.selected_effect = clamp_index(self.selected_effect, self.effects.len());

        if let Some(snapshot) = self.snapshot() {
            self.selected_instance = clamp_index(self.selected_instance, snapshot.active_effects.len());
            self.selected_item = clamp_index(self.selected_item, snapshot.inventory.len());
            self.selected_ability = clamp_index(self.selected_ability, snapshot.abilities.len());
        }

        for event in self.game.notifier().drain() {
            let line = match event.to_json() {
                Ok(json) => format!("[{}] {}", event.channel(), json),
                Err(_) => format!("[{}]", event.channel()),
            };
            self.event_log.push_front(line);
        }
        self.event_log.truncate(EVENT_LOG_LIMIT);
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.selected_player)
    }

    /// Snapshot of the selected player
    pub fn snapshot(&self) -> Option<PlayerSnapshot> {
        let player = self.current_player()?;
        match self.game.snapshot(player.id) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(player_id = %player.id, error = %e, "snapshot failed");
                None
            }
        }
    }

    pub fn current_effect(&self) -> Option<&EffectDefinition> {
        self.effects.get(self.selected_effect)
    }

    fn allowed(&mut self) -> bool {
        if self.read_only {
            self.status = "Read-only: set CAMPAIGN_MASTER_SECRET to make changes".to_string();
        }
        !self.read_only
    }

    fn fail(&mut self, e: StoreError) {
        tracing::warn!(error = %e, "action failed");
        self.status = format!("Error: {}", e);
    }

    fn finish<T>(&mut self, result: Result<T, StoreError>, done: impl FnOnce(T) -> String) {
        match result {
            Ok(value) => self.status = done(value),
            Err(e) => self.fail(e),
        }
        self.refresh();
    }

    // Navigation

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Players
        } else {
            Tab::Help
        };
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Players => {
                self.selected_player = self.selected_player.saturating_sub(1);
                self.refresh();
            }
            Tab::Stats => self.selected_instance = self.selected_instance.saturating_sub(1),
            Tab::Effects => self.selected_effect = self.selected_effect.saturating_sub(1),
            Tab::Inventory => match self.gear_focus {
                GearFocus::Items => self.selected_item = self.selected_item.saturating_sub(1),
                GearFocus::Abilities => self.selected_ability = self.selected_ability.saturating_sub(1),
            },
            Tab::Events => self.events_scroll = self.events_scroll.saturating_sub(1),
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Players => {
                self.selected_player = clamp_index(self.selected_player + 1, self.players.len());
                self.refresh();
            }
            Tab::Stats => {
                let len = self.snapshot().map_or(0, |s| s.active_effects.len());
                self.selected_instance = clamp_index(self.selected_instance + 1, len);
            }
            Tab::Effects => {
                self.selected_effect = clamp_index(self.selected_effect + 1, self.effects.len());
            }
            Tab::Inventory => {
                let snapshot = self.snapshot();
                match self.gear_focus {
                    GearFocus::Items => {
                        let len = snapshot.map_or(0, |s| s.inventory.len());
                        self.selected_item = clamp_index(self.selected_item + 1, len);
                    }
                    GearFocus::Abilities => {
                        let len = snapshot.map_or(0, |s| s.abilities.len());
                        self.selected_ability = clamp_index(self.selected_ability + 1, len);
                    }
                }
            }
            Tab::Events => {
                self.events_scroll = clamp_index(self.events_scroll + 1, self.event_log.len());
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Inventory {
            self.gear_focus = GearFocus::Items;
        } else {
            self.selected_player = self.selected_player.saturating_sub(1);
            self.refresh();
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Inventory {
            self.gear_focus = GearFocus::Abilities;
        } else {
            self.selected_player = clamp_index(self.selected_player + 1, self.players.len());
            self.refresh();
        }
    }

    // Game-master actions

    /// Advance every active effect by one turn or day
    pub fn advance(&mut self, kind: TickKind) {
        if !self.allowed() {
            return;
        }
        let result = self.game.advance(kind);
        if result.is_ok() {
            match kind {
                TickKind::Turn => self.time.0 += 1,
                TickKind::Day => self.time.1 += 1,
            }
        }
        self.finish(result, |report| {
            format!(
                "Advanced one {}: {} running, {} expired",
                report.kind,
                report.retained,
                report.expired.len()
            )
        });
    }

    /// Apply the selected effect definition to the selected player
    pub fn apply_selected_effect(&mut self) {
        if !self.allowed() {
            return;
        }
        let (Some(player), Some(effect)) = (self.current_player(), self.current_effect()) else {
            self.status = "Select a player and an effect first".to_string();
            return;
        };
        let (player_id, effect_id, name) = (player.id, effect.id, effect.name.clone());
        let result = self.game.apply_effect(player_id, effect_id, EffectSource::Admin);
        self.finish(result, |instance: ActiveEffect| {
            format!("Applied {} ({})", name, instance.remaining_label())
        });
    }

    /// Remove the selected active effect of the selected player
    pub fn remove_selected_effect(&mut self) {
        if !self.allowed() {
            return;
        }
        let Some(instance) = self
            .snapshot()
            .and_then(|s| s.active_effects.get(self.selected_instance).cloned())
        else {
            self.status = "No active effect selected".to_string();
            return;
        };
        let name = instance.name();
        let result = self.game.remove_effect(instance.instance.id);
        self.finish(result, |_| format!("Removed {}", name));
    }

    /// Toggle the equipped flag of the selected inventory item
    pub fn toggle_equip(&mut self) {
        if !self.allowed() {
            return;
        }
        let Some(entry) = self.snapshot().and_then(|s| s.inventory.get(self.selected_item).cloned()) else {
            self.status = "No item selected".to_string();
            return;
        };
        let equip = !entry.link.is_equipped;
        let result = self.game.set_equipped(entry.link.player_id, entry.item.id, equip);
        self.finish(result, |link| {
            let verb = if link.is_equipped { "Equipped" } else { "Unequipped" };
            format!("{} {}", verb, entry.item.name)
        });
    }

    /// Use one unit of the selected inventory item
    pub fn use_selected_item(&mut self) {
        if !self.allowed() {
            return;
        }
        let Some(entry) = self.snapshot().and_then(|s| s.inventory.get(self.selected_item).cloned()) else {
            self.status = "No item selected".to_string();
            return;
        };
        let result = self.game.use_item(entry.link.player_id, entry.item.id);
        self.finish(result, |applied| match applied {
            Some(instance) => format!("Used {} ({})", entry.item.name, instance.remaining_label()),
            None => format!("Used {}", entry.item.name),
        });
    }

    /// Trigger the selected ability of the selected player
    pub fn trigger_selected_ability(&mut self) {
        if !self.allowed() {
            return;
        }
        let Some(entry) = self
            .snapshot()
            .and_then(|s| s.abilities.get(self.selected_ability).cloned())
        else {
            self.status = "No ability selected".to_string();
            return;
        };
        let result = self.game.trigger_ability(entry.link.player_id, entry.ability.id);
        self.finish(result, |applied| match applied {
            Some(_) => format!("{} triggered", entry.ability.name),
            None => format!("{} has no effect", entry.ability.name),
        });
    }

    /// Enable or disable the selected ability link
    pub fn toggle_ability_link(&mut self) {
        if !self.allowed() {
            return;
        }
        let Some(entry) = self
            .snapshot()
            .and_then(|s| s.abilities.get(self.selected_ability).cloned())
        else {
            self.status = "No ability selected".to_string();
            return;
        };
        let result = self
            .game
            .set_ability_active(entry.link.player_id, entry.ability.id, !entry.link.is_active);
        self.finish(result, |link| {
            let state = if link.is_active { "enabled" } else { "disabled" };
            format!("{} {}", entry.ability.name, state)
        });
    }
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::default_campaign;

    fn master() -> App {
        App::new(&default_campaign(), Some("dm123")).unwrap()
    }

    fn select_player(app: &mut App, name: &str) {
        app.selected_player = app.players.iter().position(|p| p.name == name).unwrap();
        app.refresh();
    }

    #[test]
    fn test_secret_unlocks() {
        assert!(!master().read_only);
        assert!(App::new(&default_campaign(), None).unwrap().read_only);
        assert!(App::new(&default_campaign(), Some("wrong")).unwrap().read_only);
    }

    #[test]
    fn test_player_list_navigation_clamps_selections() {
        let mut app = master();
        select_player(&mut app, "Ysolde");
        app.selected_item = 2;

        app.current_tab = Tab::Players;
        app.on_up();
        assert_eq!(app.current_player().unwrap().name, "Brannoc");
        assert_eq!(app.selected_item, 1);

        app.on_down();
        assert_eq!(app.current_player().unwrap().name, "Ysolde");
    }

    #[test]
    fn test_read_only_blocks_actions() {
        let mut app = App::new(&default_campaign(), None).unwrap();
        app.apply_selected_effect();
        app.advance(TickKind::Turn);

        let player = app.current_player().unwrap().id;
        assert!(app.game.store().active_effects_for(player).unwrap().is_empty());
        assert_eq!(app.time, (0, 0));
        assert!(app.status.starts_with("Read-only"));
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = master();
        assert_eq!(app.current_tab, Tab::Players);
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Stats);
        app.set_tab(4);
        assert_eq!(app.current_tab, Tab::Events);
    }

    #[test]
    fn test_apply_and_remove_effect() {
        let mut app = master();
        select_player(&mut app, "Brannoc");
        app.selected_effect = app.effects.iter().position(|e| e.name == "Battle Fury").unwrap();

        app.apply_selected_effect();
        let snapshot = app.snapshot().unwrap();
        assert_eq!(snapshot.active_effects.len(), 1);
        assert_eq!(snapshot.final_stats().strength, 11);
        assert!(app.event_log[0].starts_with("[effect:applied]"));

        app.remove_selected_effect();
        assert!(app.snapshot().unwrap().active_effects.is_empty());
        assert!(app.event_log[0].starts_with("[effect:removed]"));
    }

    #[test]
    fn test_toggle_equip_changes_stats() {
        let mut app = master();
        select_player(&mut app, "Brannoc");
        app.selected_item = 0;
        assert_eq!(app.snapshot().unwrap().final_stats().strength, 7);

        app.toggle_equip();
        assert_eq!(app.snapshot().unwrap().final_stats().strength, 4);
        assert!(app.status.starts_with("Unequipped"));
    }

    #[test]
    fn test_turn_tick_expires_poison_after_five() {
        let mut app = master();
        select_player(&mut app, "Ysolde");
        for _ in 0..4 {
            app.advance(TickKind::Turn);
        }
        assert_eq!(app.snapshot().unwrap().active_effects.len(), 1);

        app.advance(TickKind::Turn);
        assert!(app.snapshot().unwrap().active_effects.is_empty());
        assert_eq!(app.time, (5, 0));
        assert!(app.event_log[0].starts_with("[effect:expired]"));
    }

    #[test]
    fn test_use_item_applies_active_effect() {
        let mut app = master();
        select_player(&mut app, "Brannoc");
        let snapshot = app.snapshot().unwrap();
        app.selected_item = snapshot
            .inventory
            .iter()
            .position(|e| e.item.name == "Healing Draught")
            .unwrap();

        app.use_selected_item();
        let snapshot = app.snapshot().unwrap();
        assert_eq!(snapshot.final_stats().health, 70);
        assert_eq!(snapshot.summary().total_items, 2);
    }

    #[test]
    fn test_trigger_disabled_ability_reports_error() {
        let mut app = master();
        select_player(&mut app, "Brannoc");
        app.gear_focus = GearFocus::Abilities;

        app.toggle_ability_link();
        app.trigger_selected_ability();
        assert!(app.status.starts_with("Error"));

        app.toggle_ability_link();
        app.trigger_selected_ability();
        assert_eq!(app.status, "Berserk triggered");
    }
}
