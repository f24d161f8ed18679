//! Built-in catalogue of practice endgames.
//!
//! Every entry is a position where White, to move, can force mate. Entries
//! are grouped by the ability level they are aimed at and can be looked
//! up by id or name, listed per level, or picked at random.
//!
//! # Example
//! ```
//! use chess_rules::endgames::{self, Ability};
//!
//! let beginner = endgames::by_ability(&[Ability::Beginner]);
//! assert!(!beginner.is_empty());
//!
//! let queen = endgames::find("queen mate").unwrap();
//! assert_eq!(queen.ability, Ability::Beginner);
//! assert!(queen.state().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{decode, FenError, GameState};

/// Who an endgame is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Ability {
    Beginner,
    Intermediate,
    Advanced,
}

impl Ability {
    pub const ALL: [Ability; 3] = [Ability::Beginner, Ability::Intermediate, Ability::Advanced];
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ability::Beginner => write!(f, "Beginner"),
            Ability::Intermediate => write!(f, "Intermediate"),
            Ability::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Error for an unrecognised ability name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAbility {
    pub found: String,
}

impl fmt::Display for UnknownAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown ability '{}', expected beginner, intermediate or advanced",
            self.found
        )
    }
}

impl std::error::Error for UnknownAbility {}

impl FromStr for Ability {
    type Err = UnknownAbility;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ability::ALL
            .into_iter()
            .find(|ability| ability.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAbility {
                found: s.to_string(),
            })
    }
}

/// One catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Endgame {
    pub id: u32,
    pub name: &'static str,
    pub ability: Ability,
    pub fen: &'static str,
}

impl Endgame {
    /// Decode the starting position.
    pub fn state(&self) -> Result<GameState, FenError> {
        decode(self.fen)
    }
}

impl fmt::Display for Endgame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} {} ({})", self.id, self.name, self.ability)
    }
}

const fn entry(id: u32, name: &'static str, ability: Ability, fen: &'static str) -> Endgame {
    Endgame {
        id,
        name,
        ability,
        fen,
    }
}

static CATALOGUE: [Endgame; 12] = [
    entry(1, "Queen mate", Ability::Beginner, "8/8/8/4k3/8/8/8/3QK3_w_-_-_0_1"),
    entry(2, "Two rooks", Ability::Beginner, "8/8/8/4k3/8/8/8/R3K2R_w_-_-_0_1"),
    entry(3, "Rook mate", Ability::Beginner, "8/8/8/4k3/8/8/8/4K2R_w_-_-_0_1"),
    entry(4, "Back rank", Ability::Beginner, "6k1/5ppp/8/8/8/8/5PPP/3R2K1_w_-_-_0_1"),
    entry(5, "Two bishops", Ability::Intermediate, "8/8/8/4k3/8/8/8/2B1KB2_w_-_-_0_1"),
    entry(6, "King and pawn", Ability::Intermediate, "4k3/8/4K3/4P3/8/8/8/8_w_-_-_0_1"),
    entry(7, "Queen versus pawn", Ability::Intermediate, "8/8/8/8/8/2k5/1p6/3K3Q_w_-_-_0_1"),
    entry(8, "Rook and bishop", Ability::Intermediate, "8/8/8/4k3/8/8/8/2B1K2R_w_-_-_0_1"),
    entry(9, "Bishop and knight", Ability::Advanced, "8/8/8/4k3/8/8/8/2B1K1N1_w_-_-_0_1"),
    entry(10, "Queen versus rook", Ability::Advanced, "8/8/4k3/8/8/2r5/8/3QK3_w_-_-_0_1"),
    entry(11, "Three knights", Ability::Advanced, "8/8/8/4k3/8/8/8/1N2K1NN_w_-_-_0_1"),
    entry(
        12,
        "Rook and bishop versus rook",
        Ability::Advanced,
        "8/8/8/4k3/3r4/8/8/2B1K2R_w_-_-_0_1",
    ),
];

/// Every endgame, in id order.
#[must_use]
pub fn catalogue() -> &'static [Endgame] {
    &CATALOGUE
}

/// Endgames for the given levels, grouped in the order the levels are
/// listed. A level listed twice is only returned once.
#[must_use]
pub fn by_ability(abilities: &[Ability]) -> Vec<&'static Endgame> {
    let mut seen = Vec::with_capacity(abilities.len());
    let mut found = Vec::new();
    for &ability in abilities {
        if seen.contains(&ability) {
            continue;
        }
        seen.push(ability);
        found.extend(CATALOGUE.iter().filter(|e| e.ability == ability));
    }
    found
}

#[must_use]
pub fn by_id(id: u32) -> Option<&'static Endgame> {
    CATALOGUE.iter().find(|e| e.id == id)
}

/// Look an endgame up by name, ignoring ASCII case.
#[must_use]
pub fn find(name: &str) -> Option<&'static Endgame> {
    let name = name.trim();
    CATALOGUE.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Pick an endgame uniformly among the given levels, or among all of
/// them when `abilities` is empty.
pub fn random<R: Rng + ?Sized>(rng: &mut R, abilities: &[Ability]) -> Option<&'static Endgame> {
    if abilities.is_empty() {
        return CATALOGUE.choose(rng);
    }
    by_ability(abilities).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_entry_decodes_and_is_playable() {
        for endgame in catalogue() {
            let state = endgame
                .state()
                .unwrap_or_else(|e| panic!("{}: {e}", endgame.name));
            assert_eq!(state.side_to_move(), Color::White, "{}", endgame.name);
            assert!(!state.is_game_over(), "{}", endgame.name);
            assert!(!state.legal_moves().is_empty(), "{}", endgame.name);
            for color in Color::BOTH {
                assert!(
                    state.board().king_square(color).is_some(),
                    "{} lacks a {color} king",
                    endgame.name
                );
            }
            assert_eq!(state.to_fen(), endgame.fen);
        }
    }

    #[test]
    fn test_ids_and_names_unique() {
        for (idx, endgame) in catalogue().iter().enumerate() {
            assert_eq!(endgame.id as usize, idx + 1);
            assert_eq!(find(endgame.name), Some(endgame));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(by_id(3).map(|e| e.name), Some("Rook mate"));
        assert_eq!(by_id(0), None);
        assert_eq!(by_id(13), None);
        assert_eq!(find("  TWO BISHOPS ").map(|e| e.id), Some(5));
        assert_eq!(find("four knights"), None);
    }

    #[test]
    fn test_by_ability_groups_in_requested_order() {
        let found = by_ability(&[Ability::Advanced, Ability::Beginner, Ability::Advanced]);
        assert_eq!(found.len(), 8);
        assert!(found[..4].iter().all(|e| e.ability == Ability::Advanced));
        assert!(found[4..].iter().all(|e| e.ability == Ability::Beginner));
        assert!(by_ability(&[]).is_empty());
        let total: usize = Ability::ALL.iter().map(|&a| by_ability(&[a]).len()).sum();
        assert_eq!(total, catalogue().len());
    }

    #[test]
    fn test_random_respects_abilities() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let pick = random(&mut rng, &[Ability::Intermediate]).unwrap();
            assert_eq!(pick.ability, Ability::Intermediate);
            assert!(random(&mut rng, &[]).is_some());
        }
    }

    #[test]
    fn test_ability_parse() {
        assert_eq!("beginner".parse::<Ability>(), Ok(Ability::Beginner));
        assert_eq!("ADVANCED".parse::<Ability>(), Ok(Ability::Advanced));
        let err = "expert".parse::<Ability>().unwrap_err();
        assert!(err.to_string().contains("'expert'"));
    }
}
