//! Static catalogs for enemies and items
//!
//! Both catalogs are closed enums: a name that does not parse into one of
//! them is a data error, reported when a world is built or loaded.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Enemy stat catalog
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnemyKind {
    Skeleton,
    Goblin,
    Bandit,
    Guardian,
    Spider,
}

impl EnemyKind {
    /// Name used in narration and commands
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Maximum (and starting) health
    pub const fn max_hp(self) -> i32 {
        match self {
            EnemyKind::Skeleton => 50,
            EnemyKind::Goblin => 40,
            EnemyKind::Bandit => 70,
            EnemyKind::Guardian => 100,
            EnemyKind::Spider => 30,
        }
    }

    /// Sprite the presentation layer draws for this enemy
    pub const fn sprite(self) -> &'static str {
        match self {
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::Goblin => "goblin",
            EnemyKind::Bandit => "bandit",
            EnemyKind::Guardian => "blob",
            EnemyKind::Spider => "spider",
        }
    }
}

/// Item catalog
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ItemKind {
    #[serde(rename = "torch")]
    #[strum(serialize = "torch")]
    Torch,
    #[serde(rename = "health potion")]
    #[strum(serialize = "health potion")]
    HealthPotion,
    #[serde(rename = "key")]
    #[strum(serialize = "key")]
    Key,
    #[serde(rename = "gold coins")]
    #[strum(serialize = "gold coins")]
    GoldCoins,
    #[serde(rename = "diamond")]
    #[strum(serialize = "diamond")]
    Diamond,
}

impl ItemKind {
    /// Name used in narration and commands
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Semantic type, used by presentation to find the matching sprite
    pub const fn sprite(self) -> &'static str {
        match self {
            ItemKind::Torch => "torch",
            ItemKind::HealthPotion => "potion",
            ItemKind::Key => "key",
            ItemKind::GoldCoins => "coins",
            ItemKind::Diamond => "diamond",
        }
    }
}

/// Join names with ", " for narration.
pub(crate) fn join_names<T: Copy + Into<&'static str>>(items: &[T]) -> String {
    items
        .iter()
        .map(|&item| item.into())
        .collect::<Vec<&str>>()
        .join(", ")
}
