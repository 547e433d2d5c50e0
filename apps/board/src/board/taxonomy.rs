//! The closed vocabulary the board speaks: classes and their specs,
//! raid days, attunements, factions and roles.

use serde::Serialize;

/// Every class with its three specs. Order is display order; the first spec is
/// the default pick for that class.
pub const CLASSES: &[(&str, [&str; 3])] = &[
    ("Warrior", ["Arms", "Fury", "Protection"]),
    ("Paladin", ["Holy", "Protection", "Retribution"]),
    ("Hunter", ["Beast Mastery", "Marksmanship", "Survival"]),
    ("Rogue", ["Assassination", "Combat", "Subtlety"]),
    ("Priest", ["Discipline", "Holy", "Shadow"]),
    ("Shaman", ["Elemental", "Enhancement", "Restoration"]),
    ("Mage", ["Arcane", "Fire", "Frost"]),
    ("Warlock", ["Affliction", "Demonology", "Destruction"]),
    ("Druid", ["Balance", "Feral", "Restoration"]),
];

pub const DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Raid-tier instances a player can be attuned to.
pub const ATTUNEMENTS: &[&str] = &["Karazhan", "SSC", "TK", "Hyjal", "BT"];

pub const FACTIONS: &[&str] = &["Alliance", "Horde"];

pub const ROLES: &[&str] = &["DPS", "Tank", "Heal"];

/// Class names in taxonomy order.
pub fn class_names() -> impl Iterator<Item = &'static str> {
    CLASSES.iter().map(|(class, _)| *class)
}

/// The class used as basis whenever no class has been chosen yet.
pub fn default_class() -> &'static str {
    CLASSES[0].0
}

/// Specs for a class, in order. Unknown classes yield an empty slice, which
/// callers read as "no constraint".
pub fn specs_for(class: &str) -> &'static [&'static str] {
    CLASSES
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, specs)| specs.as_slice())
        .unwrap_or(&[])
}

pub fn is_class(class: &str) -> bool {
    class_names().any(|c| c == class)
}

pub fn offers_spec(class: &str, spec: &str) -> bool {
    specs_for(class).contains(&spec)
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    pub name: &'static str,
    pub specs: &'static [&'static str],
}

/// Everything a form needs to draw its selectors and chip rows.
#[derive(Debug, Clone, Serialize)]
pub struct Vocabulary {
    pub classes: Vec<ClassEntry>,
    pub days: &'static [&'static str],
    pub attunements: &'static [&'static str],
    pub factions: &'static [&'static str],
    pub roles: &'static [&'static str],
}

pub fn vocabulary() -> Vocabulary {
    Vocabulary {
        classes: CLASSES
            .iter()
            .map(|(name, specs)| ClassEntry {
                name: *name,
                specs: specs.as_slice(),
            })
            .collect(),
        days: DAYS,
        attunements: ATTUNEMENTS,
        factions: FACTIONS,
        roles: ROLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_class_has_three_unique_specs() {
        for class in class_names() {
            let specs = specs_for(class);
            assert_eq!(specs.len(), 3, "{class} should have 3 specs");
            let unique: HashSet<_> = specs.iter().collect();
            assert_eq!(unique.len(), 3, "{class} has duplicate specs");
        }
    }

    #[test]
    fn test_nine_classes() {
        assert_eq!(class_names().count(), 9);
    }

    #[test]
    fn test_unknown_class_yields_empty() {
        assert!(specs_for("Death Knight").is_empty());
        assert!(specs_for("").is_empty());
    }

    #[test]
    fn test_spec_order_is_preserved() {
        assert_eq!(specs_for("Mage"), &["Arcane", "Fire", "Frost"]);
    }

    #[test]
    fn test_default_class_is_first() {
        assert_eq!(default_class(), "Warrior");
    }

    #[test]
    fn test_offers_spec_is_class_scoped() {
        assert!(offers_spec("Paladin", "Protection"));
        assert!(!offers_spec("Mage", "Fury"));
    }

    #[test]
    fn test_vocabulary_sizes() {
        let vocab = vocabulary();
        assert_eq!(vocab.classes.len(), 9);
        assert_eq!(vocab.days.len(), 7);
        assert_eq!(vocab.attunements.len(), 5);
    }
}
