//! Property-based tests for hb-core.
use hb_core::sheet::parse_sheet;
use hb_core::{
    CharacterClass, CreatorConfig, UnknownClassPolicy, calculate_stats, create_character,
    load_character, save_character,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn class_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("warrior"),
        Just("Mage"),
        Just("ROGUE"),
        Just("cleric"),
    ]
    .prop_map(str::to_string)
}

/// Any name the factory accepts: no control characters, no surrounding
/// whitespace, anything else (colons, inner spaces, non-ASCII) allowed.
fn hero_name() -> impl Strategy<Value = String> {
    "[^\\s\\p{Cc}]([^\\p{Cc}]{0,20}[^\\s\\p{Cc}])?"
}

proptest! {
    #[test]
    fn stats_are_deterministic(class in class_name(), level in 1u32..10_000) {
        let class = CharacterClass::parse(&class);
        let a = calculate_stats(&class, level, UnknownClassPolicy::Reject).unwrap();
        let b = calculate_stats(&class, level, UnknownClassPolicy::Reject).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stats_grow_with_level(class in class_name(), level in 1u32..10_000) {
        let class = CharacterClass::parse(&class);
        let now = calculate_stats(&class, level, UnknownClassPolicy::Reject).unwrap();
        let next = calculate_stats(&class, level + 1, UnknownClassPolicy::Reject).unwrap();
        prop_assert!(next.strength > now.strength);
        prop_assert!(next.magic > now.magic);
        prop_assert!(next.health > now.health);
    }

    #[test]
    fn level_up_matches_formula(
        name in hero_name(),
        class in class_name(),
        levels in 0usize..20,
    ) {
        let mut hero = create_character(&name, &class).unwrap();
        for _ in 0..levels {
            hero.level_up(UnknownClassPolicy::Reject).unwrap();
        }
        let n = hero.level;
        let gold = hero.gold;

        hero.level_up(UnknownClassPolicy::Reject).unwrap();

        prop_assert_eq!(hero.level, n + 1);
        prop_assert_eq!(
            hero.stats(),
            calculate_stats(&hero.class, n + 1, UnknownClassPolicy::Reject).unwrap()
        );
        prop_assert_eq!(&hero.name, &name);
        prop_assert_eq!(hero.gold, gold);
    }

    #[test]
    fn accepted_names_round_trip(name in any::<String>(), class in class_name()) {
        match create_character(&name, &class) {
            Ok(hero) => prop_assert_eq!(parse_sheet(&hero.to_sheet_text()).unwrap(), hero),
            Err(e) => prop_assert!(e.is_validation()),
        }
    }

    #[test]
    fn padded_or_multiline_names_are_rejected(
        name in hero_name(),
        pad in prop_oneof![Just(" "), Just("\t"), Just("\n"), Just("\r\n")],
    ) {
        let trailing = format!("{name}{pad}");
        let leading = format!("{pad}{name}");
        let injected = format!("{name}\nGold: 999");
        prop_assert!(create_character(&trailing, "mage").is_err());
        prop_assert!(create_character(&leading, "mage").is_err());
        prop_assert!(create_character(&injected, "mage").is_err());
    }

    #[test]
    fn text_round_trip(
        name in hero_name(),
        class in class_name(),
        levels in 0usize..50,
        gold in any::<i64>(),
    ) {
        let mut hero = create_character(&name, &class).unwrap();
        for _ in 0..levels {
            hero.level_up(UnknownClassPolicy::Reject).unwrap();
        }
        hero.gold = gold;

        prop_assert_eq!(parse_sheet(&hero.to_sheet_text()).unwrap(), hero);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn file_round_trip(name in hero_name(), class in class_name(), levels in 0usize..10) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hero.txt");

        let mut hero = create_character(&name, &class).unwrap();
        for _ in 0..levels {
            hero.level_up(UnknownClassPolicy::Reject).unwrap();
        }

        save_character(&hero, &path, &CreatorConfig::default()).unwrap();
        let loaded = load_character(&path).unwrap();
        prop_assert_eq!(loaded.class.to_string(), hero.class.to_string());
        prop_assert_eq!(loaded, hero);
    }
}
