//! Turn-based combat
//!
//! One `attack` is one exchange: the player strikes first, and only an
//! enemy that survives the blow strikes back.

use crate::action::movement::{do_move, replace_enemies};
use crate::action::{ActionResult, player_dies};
use crate::catalog::EnemyKind;
use crate::error::EngineError;
use crate::event::{Category, Event};
use crate::gameloop::GameState;
use crate::rng::RandomSource;
use crate::world::Direction;
use crate::{
    ENEMY_DAMAGE_BASE, ENEMY_DAMAGE_SPREAD, FLEE_FAIL_THRESHOLD, PLAYER_DAMAGE_BASE,
    PLAYER_DAMAGE_SPREAD,
};

/// Player damage, 10..=29
pub fn roll_player_damage<R: RandomSource>(rng: &mut R) -> i32 {
    PLAYER_DAMAGE_BASE + rng.rn2(PLAYER_DAMAGE_SPREAD) as i32
}

/// Enemy damage, 5..=19
pub fn roll_enemy_damage<R: RandomSource>(rng: &mut R) -> i32 {
    ENEMY_DAMAGE_BASE + rng.rn2(ENEMY_DAMAGE_SPREAD) as i32
}

/// `attack <enemy>`
pub fn do_attack<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    target: &str,
) -> Result<ActionResult, EngineError> {
    let Some(kind) = state
        .current_room()?
        .enemies()
        .iter()
        .copied()
        .find(|e| e.name() == target)
    else {
        state.narrate(Category::Info, "That enemy isn't here!");
        return Ok(ActionResult::NoTime);
    };

    state.narrate(Category::CombatAction, format!("You attack the {kind}!"));

    // Both rolls happen up front, whatever the outcome.
    let player_damage = roll_player_damage(rng);
    let enemy_damage = roll_enemy_damage(rng);
    tracing::debug!(enemy = %kind, player_damage, enemy_damage, "combat rolls");

    let index = engage(state, kind);
    let enemy = &mut state.enemies[index];
    enemy.hp -= player_damage;
    let hp = enemy.hp;

    state.narrate(
        Category::CombatResult,
        format!("You hit the {kind} for {player_damage} damage!"),
    );
    state.emit(Event::EnemyDamaged { enemy: kind, hp });

    if hp <= 0 {
        state.enemies.remove(index);
        state.current_room_mut()?.remove_enemy(kind);
        state.emit(Event::EnemyRemoved { enemy: kind });
        state.narrate(Category::EnemyDefeat, format!("You defeat the {kind}!"));
        return Ok(ActionResult::Success);
    }

    Ok(counterattack(state, kind, enemy_damage))
}

/// `run`: 70% to escape through a random exit, otherwise the first enemy
/// in the room gets a free hit.
pub fn attempt_run<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<ActionResult, EngineError> {
    let room = state.current_room()?;
    let Some(&enemy) = room.enemies().first() else {
        state.narrate(Category::Info, "There's nothing to run from.");
        return Ok(ActionResult::NoTime);
    };
    let exits: Vec<Direction> = room.exits().iter().map(|e| e.direction).collect();

    if rng.chance_above(FLEE_FAIL_THRESHOLD) {
        let Some(&direction) = rng.choose(&exits) else {
            state.narrate(Category::Info, "There's nowhere to run!");
            return Ok(ActionResult::NoTime);
        };
        tracing::debug!(%direction, "player flees");
        state.narrate(Category::Info, "You successfully flee!");
        return do_move(state, direction);
    }

    state.narrate(Category::Info, "Couldn't escape!");
    let damage = roll_enemy_damage(rng);
    Ok(counterattack(state, enemy, damage))
}

fn counterattack(state: &mut GameState, enemy: EnemyKind, damage: i32) -> ActionResult {
    state.player.health -= damage;
    state.narrate(
        Category::CombatResult,
        format!("The {enemy} hits you for {damage} damage!"),
    );
    state.emit(Event::PlayerDamaged {
        hp: state.player.health,
    });
    if state.player.is_dead() {
        return player_dies(state, Category::EnemyDefeat);
    }
    ActionResult::Success
}

/// Index of the active instance of `kind`, spawning one if the active set
/// does not hold it (after `go back` the set still belongs to the room the
/// player left).
fn engage(state: &mut GameState, kind: EnemyKind) -> usize {
    if let Some(index) = state.enemies.iter().position(|e| e.kind == kind) {
        return index;
    }
    replace_enemies(state, &[kind]);
    0
}
