//! Command interpreter
//!
//! Turns a raw input line into an [`Action`]. Parsing is pure: it never
//! looks at the world or the player.

use std::str::FromStr;

use crate::action::Action;
use crate::world::Direction;

/// Parse a line of player input.
///
/// The line is trimmed and lower-cased; the first word is the verb and the
/// remaining words, re-joined with single spaces, are the target.
pub fn parse(raw: &str) -> Action {
    let command = raw.trim().to_lowercase();
    let mut words = command.split_whitespace();
    let verb = words.next().unwrap_or_default();
    let target = words.collect::<Vec<_>>().join(" ");

    match verb {
        "look" => Action::Look,
        "go" if target == "back" => Action::Back,
        "go" => match Direction::from_str(&target) {
            Ok(direction) => Action::Move(direction),
            Err(_) => Action::BadDirection(target),
        },
        "back" => Action::Back,
        "take" => Action::Take(target),
        "use" => Action::Use(target),
        "open" => Action::Open(target),
        "inventory" => Action::Inventory,
        "attack" => Action::Attack(target),
        "run" | "flee" => Action::Flee,
        "help" => Action::Help,
        _ => Action::Unrecognized(raw.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse("look"), Action::Look);
        assert_eq!(parse("inventory"), Action::Inventory);
        assert_eq!(parse("help"), Action::Help);
        assert_eq!(parse("run"), Action::Flee);
        assert_eq!(parse("flee"), Action::Flee);
    }

    #[test]
    fn test_go_directions() {
        assert_eq!(parse("go north"), Action::Move(Direction::North));
        assert_eq!(parse("  GO   East "), Action::Move(Direction::East));
        assert_eq!(parse("go up"), Action::Move(Direction::Up));
        assert_eq!(parse("go nowhere"), Action::BadDirection("nowhere".to_string()));
        assert_eq!(parse("go"), Action::BadDirection(String::new()));
    }

    #[test]
    fn test_back_forms() {
        assert_eq!(parse("go back"), Action::Back);
        assert_eq!(parse("back"), Action::Back);
        assert_eq!(parse("BACK"), Action::Back);
    }

    #[test]
    fn test_multi_word_targets() {
        assert_eq!(parse("take health   potion"), Action::Take("health potion".to_string()));
        assert_eq!(parse("use Health Potion"), Action::Use("health potion".to_string()));
        assert_eq!(parse("take gold coins"), Action::Take("gold coins".to_string()));
        assert_eq!(parse("attack skeleton"), Action::Attack("skeleton".to_string()));
        assert_eq!(parse("open chest"), Action::Open("chest".to_string()));
    }

    #[test]
    fn test_unknown_verb_keeps_raw_text() {
        assert_eq!(parse("  Dance wildly "), Action::Unrecognized("Dance wildly".to_string()));
        assert_eq!(parse(""), Action::Unrecognized(String::new()));
    }

    #[test]
    fn test_extra_words_after_look_ignored() {
        assert_eq!(parse("look around"), Action::Look);
    }

    proptest! {
        #[test]
        fn prop_parse_never_panics(input in ".{0,64}") {
            let _ = parse(&input);
        }

        #[test]
        fn prop_case_and_padding_insensitive(
            verb in prop::sample::select(vec!["take", "use", "attack", "open"]),
            target in "[a-z]{1,8}( [a-z]{1,8}){0,2}",
            pad in " {0,3}",
        ) {
            let plain = parse(&format!("{verb} {target}"));
            let noisy = parse(&format!("{pad}{}  {}{pad}", verb.to_uppercase(), target.to_uppercase()));
            prop_assert_eq!(plain, noisy);
        }
    }
}
