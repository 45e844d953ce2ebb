//! The shipped dungeon
//!
//! ```text
//!               corridor2 ── exit
//!                   │
//!   treasure2 ──── hall ──── trap (one way back)
//!                   │
//!               corridor1 ── treasure1
//!                   │
//!               entrance
//! ```

use dc_core::world::Room;
use dc_core::{Direction, EnemyKind, ItemKind, START_ROOM, WorldMap};

/// Identifiers of every shipped room
pub fn room_ids() -> &'static [&'static str] {
    &[
        "entrance",
        "corridor1",
        "hall",
        "corridor2",
        "treasure1",
        "treasure2",
        "trap",
        "exit",
    ]
}

fn rooms() -> Vec<Room> {
    use Direction::*;

    vec![
        Room::builder(
            "entrance",
            "You stand at the entrance of a dark dungeon. The air is damp and cold. A flickering torch barely illuminates the stone walls. To the north, a narrow passage leads deeper into the dungeon.",
        )
        .exit(North, "corridor1")
        .item(ItemKind::Torch)
        .build(),
        Room::builder(
            "corridor1",
            "A long, narrow corridor stretches before you. The walls are covered in strange carvings. You hear distant dripping water. There's a door to the east and the corridor continues north.",
        )
        .exit(North, "hall")
        .exit(East, "treasure1")
        .exit(South, "entrance")
        .enemy(EnemyKind::Skeleton)
        .build(),
        Room::builder(
            "hall",
            "You enter a large hall with high ceilings. Broken pillars lie scattered across the floor. A large chandelier hangs precariously from the ceiling. Exits lead in all directions.",
        )
        .exit(North, "corridor2")
        .exit(East, "trap")
        .exit(South, "corridor1")
        .exit(West, "treasure2")
        .item(ItemKind::HealthPotion)
        .enemy(EnemyKind::Goblin)
        .build(),
        Room::builder(
            "corridor2",
            "A winding corridor with several alcoves. The air is thick with dust. You see scratch marks on the walls.",
        )
        .exit(South, "hall")
        .exit(East, "exit")
        .item(ItemKind::Key)
        .enemy(EnemyKind::Spider)
        .build(),
        Room::builder(
            "treasure1",
            "A small room with a wooden chest in the center. The walls are lined with empty weapon racks.",
        )
        .exit(West, "corridor1")
        .chest([ItemKind::GoldCoins])
        .build(),
        Room::builder(
            "treasure2",
            "A hidden alcove containing a golden chest. The walls shimmer with embedded gems.",
        )
        .exit(East, "hall")
        .chest([ItemKind::Diamond])
        .enemy(EnemyKind::Guardian)
        .build(),
        Room::builder(
            "trap",
            "A seemingly empty room. The floor tiles look suspiciously clean.",
        )
        .exit(West, "hall")
        .trap()
        .build(),
        Room::builder(
            "exit",
            "A heavy iron door stands before you, locked with a large padlock. This must be the way out!",
        )
        .exit(West, "corridor2")
        .exit_room()
        .build(),
    ]
}

/// Build the shipped dungeon.
///
/// The layout is static, so a failure here is a bug in this file.
pub fn dungeon() -> WorldMap {
    match WorldMap::from_rooms(START_ROOM, rooms()) {
        Ok(world) => world,
        Err(err) => panic!("shipped dungeon is inconsistent: {err}"),
    }
}
