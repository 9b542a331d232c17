//! Identifier parts for library lookup keys
//!
//! Library ids are built from the ids of the gender, part and color a
//! library applies to. Any domain type can take part by implementing
//! [`IdPart`]; the catalog enums below cover the common cases.

use serde::{Deserialize, Serialize};

/// A value that contributes one segment of a library id.
pub trait IdPart {
    /// Id segment, lower-case with underscores.
    fn id_part(&self) -> String;

    /// Whether this is the unset ("none") value.
    fn is_none(&self) -> bool;
}

/// A value that can select which requested values it applies to.
pub trait Selector: IdPart + PartialEq {
    /// Whether a definition declared with `self` applies to `requested`.
    ///
    /// The unset value never matches anything.
    fn accepts(&self, requested: &Self) -> bool {
        !requested.is_none() && self == requested
    }
}

/// Lower-case a display name and replace spaces with underscores.
pub fn normalize_id_part(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

macro_rules! id_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            #[default]
            None,
            $($variant),+
        }

        impl IdPart for $name {
            fn id_part(&self) -> String {
                match self {
                    $name::None => "none".to_string(),
                    $($name::$variant => normalize_id_part($id)),+
                }
            }

            fn is_none(&self) -> bool {
                matches!(self, $name::None)
            }
        }
    };
}

id_enum! {
    /// Character gender. `Both` definitions apply to male and female characters.
    Gender {
        Male => "male",
        Female => "female",
        Both => "both",
    }
}

impl Selector for Gender {
    fn accepts(&self, requested: &Self) -> bool {
        match (self, requested) {
            (_, Gender::None) | (Gender::None, _) => false,
            (Gender::Both, _) => true,
            _ => self == requested,
        }
    }
}

id_enum! {
    /// Character race. `All` definitions apply to every race.
    Race {
        All => "all",
        Human => "human",
        Barbarian => "barbarian",
        HalfElf => "half elf",
        HalfWolf => "half wolf",
        HalfCat => "half cat",
        Elf => "elf",
        Orc => "orc",
        Goblin => "goblin",
        Troll => "troll",
        Lizard => "lizard",
        Angel => "angel",
        Spirit => "spirit",
        Fairy => "fairy",
        Demon => "demon",
        Vampire => "vampire",
        Werewolf => "werewolf",
        Undead => "undead",
    }
}

impl Selector for Race {
    fn accepts(&self, requested: &Self) -> bool {
        match (self, requested) {
            (_, Race::None) | (Race::None, _) => false,
            (Race::All, _) => true,
            _ => self == requested,
        }
    }
}

id_enum! {
    /// Color variant of an item or body region.
    ColorPermutation {
        Black => "black",
        White => "white",
        Lime => "lime",
        Yellow => "yellow",
        Blue => "blue",
        Red => "red",
        Orange => "orange",
        Brown => "brown",
        BlueGrey => "blue grey",
        Ceramic => "ceramic",
        Gold => "gold",
        Silver => "silver",
        Bronze => "bronze",
        Steel => "steel",
        Iron => "iron",
        Wood => "wood",
        Copper => "copper",
        Leather => "leather",
        Sandy => "sandy",
        Ginger => "ginger",
    }
}

impl Selector for ColorPermutation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id_part() {
        assert_eq!(normalize_id_part("Half Elf"), "half_elf");
        assert_eq!(normalize_id_part("steel"), "steel");
        assert_eq!(normalize_id_part("Blue Grey Trim"), "blue_grey_trim");
    }

    #[test]
    fn test_enum_id_parts() {
        assert_eq!(Gender::Female.id_part(), "female");
        assert_eq!(Race::HalfElf.id_part(), "half_elf");
        assert_eq!(ColorPermutation::BlueGrey.id_part(), "blue_grey");
        assert_eq!(Gender::None.id_part(), "none");
        assert!(Race::default().is_none());
        assert!(!Race::Orc.is_none());
    }

    #[test]
    fn test_gender_selector() {
        assert!(Gender::Both.accepts(&Gender::Male));
        assert!(Gender::Both.accepts(&Gender::Female));
        assert!(Gender::Male.accepts(&Gender::Male));
        assert!(!Gender::Male.accepts(&Gender::Female));
        assert!(!Gender::Both.accepts(&Gender::None));
        assert!(!Gender::None.accepts(&Gender::Male));
    }

    #[test]
    fn test_race_selector() {
        assert!(Race::All.accepts(&Race::Goblin));
        assert!(Race::Elf.accepts(&Race::Elf));
        assert!(!Race::Elf.accepts(&Race::HalfElf));
        assert!(!Race::All.accepts(&Race::None));
    }

    #[test]
    fn test_default_selector_is_equality() {
        assert!(ColorPermutation::Gold.accepts(&ColorPermutation::Gold));
        assert!(!ColorPermutation::Gold.accepts(&ColorPermutation::Silver));
        assert!(!ColorPermutation::None.accepts(&ColorPermutation::None));
    }

    #[test]
    fn test_serde_names() {
        let race: Race = serde_json::from_str("\"half_elf\"").unwrap();
        assert_eq!(race, Race::HalfElf);
        assert_eq!(serde_json::to_string(&ColorPermutation::BlueGrey).unwrap(), "\"blue_grey\"");
    }
}
