//! Game constants

/// Player health at game start, and the ceiling for healing.
pub const PLAYER_MAX_HP: i32 = 100;

/// Damage dealt by a trapped room on entry.
pub const TRAP_DAMAGE: i32 = 20;

/// Health restored by a health potion.
pub const POTION_HEAL: i32 = 30;

/// Player attack: `PLAYER_DAMAGE_BASE + rn2(PLAYER_DAMAGE_SPREAD)`, i.e. 10..=29.
pub const PLAYER_DAMAGE_BASE: i32 = 10;
pub const PLAYER_DAMAGE_SPREAD: u32 = 20;

/// Enemy counterattack: `ENEMY_DAMAGE_BASE + rn2(ENEMY_DAMAGE_SPREAD)`, i.e. 5..=19.
pub const ENEMY_DAMAGE_BASE: i32 = 5;
pub const ENEMY_DAMAGE_SPREAD: u32 = 15;

/// A flee attempt succeeds when the draw is strictly above this value (70%).
pub const FLEE_FAIL_THRESHOLD: f64 = 0.3;

/// Room the player starts in unless the options say otherwise.
pub const START_ROOM: &str = "entrance";
