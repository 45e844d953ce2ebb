//! What the front-end knows about the game
//!
//! The view is rebuilt from engine events only; it never reads the game
//! state directly.

use std::collections::VecDeque;

use dc_core::{Category, EnemyKind, Event, GameOverCause, ItemKind, PLAYER_MAX_HP, RoomId};

/// A line in the message log. `category` is `None` for echoed player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub category: Option<Category>,
    pub text: String,
}

/// Health of the enemy the player is fighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyGauge {
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
}

impl EnemyGauge {
    pub fn ratio(&self) -> f64 {
        ratio(self.hp, self.max_hp)
    }
}

/// Clamp `hp / max` into a gauge ratio
pub fn ratio(hp: i32, max: i32) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (f64::from(hp) / f64::from(max)).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct ViewState {
    log: VecDeque<LogLine>,
    history: usize,
    pub player_hp: i32,
    /// Active enemies in spawn order; combat is with the first
    enemies: Vec<EnemyGauge>,
    pub inventory: Vec<ItemKind>,
    pub room: Option<RoomId>,
    pub game_over: Option<GameOverCause>,
}

impl ViewState {
    /// Empty view keeping at most `history` log lines
    pub fn new(history: usize) -> Self {
        Self {
            log: VecDeque::new(),
            history: history.max(1),
            player_hp: PLAYER_MAX_HP,
            enemies: Vec::new(),
            inventory: Vec::new(),
            room: None,
            game_over: None,
        }
    }

    pub fn log(&self) -> impl DoubleEndedIterator<Item = &LogLine> + ExactSizeIterator {
        self.log.iter()
    }

    /// Record a command the player typed
    pub fn echo(&mut self, input: &str) {
        self.push(None, format!("> {input}"));
    }

    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Narration { category, text } => self.push(Some(*category), text.clone()),
            Event::RoomEntered { room } => self.room = Some(room.clone()),
            Event::EnemySpawned { enemy, max_hp } => {
                self.enemies.push(EnemyGauge {
                    kind: *enemy,
                    hp: *max_hp,
                    max_hp: *max_hp,
                });
            }
            Event::EnemyRemoved { enemy } => {
                if let Some(index) = self.enemies.iter().position(|g| g.kind == *enemy) {
                    self.enemies.remove(index);
                }
            }
            Event::EnemyDamaged { enemy, hp } => {
                if let Some(gauge) = self.enemies.iter_mut().find(|g| g.kind == *enemy) {
                    gauge.hp = *hp;
                }
            }
            Event::PlayerDamaged { hp } | Event::PlayerHealed { hp } => self.player_hp = *hp,
            Event::ItemTaken { item } => self.inventory.push(*item),
            Event::ItemUsed { item } => {
                if let Some(index) = self.inventory.iter().position(|i| i == item) {
                    self.inventory.remove(index);
                }
            }
            Event::ChestOpened { .. } => {}
            Event::GameOver { cause } => self.game_over = Some(*cause),
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) {
        for event in events {
            self.apply(event);
        }
    }

    /// The enemy being fought, if any
    pub fn enemy(&self) -> Option<EnemyGauge> {
        self.enemies.first().copied()
    }

    pub fn player_ratio(&self) -> f64 {
        ratio(self.player_hp, PLAYER_MAX_HP)
    }

    fn push(&mut self, category: Option<Category>, text: String) {
        if self.log.len() == self.history {
            self.log.pop_front();
        }
        self.log.push_back(LogLine { category, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narration(text: &str) -> Event {
        Event::Narration {
            category: Category::Info,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_history_is_bounded() {
        let mut view = ViewState::new(3);
        for n in 0..5 {
            view.apply(&narration(&n.to_string()));
        }
        let texts: Vec<_> = view.log().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_enemy_gauge_follows_events() {
        let mut view = ViewState::new(10);
        view.apply(&Event::EnemySpawned {
            enemy: EnemyKind::Goblin,
            max_hp: 40,
        });
        view.apply(&Event::EnemyDamaged {
            enemy: EnemyKind::Goblin,
            hp: 10,
        });
        assert_eq!(view.enemy().map(|g| g.hp), Some(10));
        assert!((view.enemy().unwrap().ratio() - 0.25).abs() < f64::EPSILON);

        // Damage to some other kind is not ours to show
        view.apply(&Event::EnemyDamaged {
            enemy: EnemyKind::Skeleton,
            hp: 1,
        });
        assert_eq!(view.enemy().map(|g| g.hp), Some(10));

        view.apply(&Event::EnemyRemoved {
            enemy: EnemyKind::Goblin,
        });
        assert!(view.enemy().is_none());
    }

    #[test]
    fn test_gauge_shows_first_of_several_enemies() {
        let mut view = ViewState::new(10);
        for (enemy, max_hp) in [(EnemyKind::Goblin, 40), (EnemyKind::Skeleton, 50)] {
            view.apply(&Event::EnemySpawned { enemy, max_hp });
        }
        assert_eq!(view.enemy().map(|g| g.kind), Some(EnemyKind::Goblin));

        view.apply(&Event::EnemyDamaged {
            enemy: EnemyKind::Goblin,
            hp: 15,
        });
        assert_eq!(view.enemy().map(|g| (g.kind, g.hp)), Some((EnemyKind::Goblin, 15)));

        view.apply(&Event::EnemyRemoved {
            enemy: EnemyKind::Goblin,
        });
        let next = view.enemy().unwrap();
        assert_eq!((next.kind, next.hp, next.max_hp), (EnemyKind::Skeleton, 50, 50));
    }

    #[test]
    fn test_inventory_from_take_and_use() {
        let mut view = ViewState::new(10);
        view.apply(&Event::ItemTaken {
            item: ItemKind::HealthPotion,
        });
        view.apply(&Event::ItemTaken { item: ItemKind::Key });
        view.apply(&Event::ItemUsed {
            item: ItemKind::HealthPotion,
        });
        view.apply(&Event::PlayerHealed { hp: 80 });
        assert_eq!(view.inventory, vec![ItemKind::Key]);
        assert_eq!(view.player_hp, 80);
    }

    #[test]
    fn test_ratio_clamps() {
        assert_eq!(ratio(-12, 100), 0.0);
        assert_eq!(ratio(150, 100), 1.0);
        assert_eq!(ratio(5, 0), 0.0);
    }
}
