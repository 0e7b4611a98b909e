//! Weapon, verdict and instruction definitions

use serde::{Deserialize, Serialize};

/// A weapon choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weapon {
    Scissors,
    Paper,
    Stone,
}

impl Weapon {
    /// The three weapons in presentation order (the order the buttons appear)
    pub const ALL: [Weapon; 3] = [Weapon::Scissors, Weapon::Paper, Weapon::Stone];

    /// Cyclic dominance: scissors beat paper, paper beats stone, stone beats scissors
    pub fn beats(self, other: Weapon) -> bool {
        matches!(
            (self, other),
            (Weapon::Scissors, Weapon::Paper)
                | (Weapon::Paper, Weapon::Stone)
                | (Weapon::Stone, Weapon::Scissors)
        )
    }

    /// Lowercase name, stable across the wasm boundary
    pub fn name(self) -> &'static str {
        match self {
            Weapon::Scissors => "scissors",
            Weapon::Paper => "paper",
            Weapon::Stone => "stone",
        }
    }
}

/// Natural result of a weapon pair, before the round instruction is applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Player,
    Computer,
    Draw,
}

/// Per-round directive shown to the player before they choose
///
/// Re-rolled at every round start, never mid-round. Following it is how the
/// player scores; a natural win against a MustLose instruction scores for
/// the computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    MustWin,
    MustLose,
}

impl Instruction {
    /// Human-readable intent line shown while the player is choosing
    pub fn describe(self) -> &'static str {
        match self {
            Instruction::MustWin => {
                "You have to WIN this round. Choose your weapon accordingly."
            }
            Instruction::MustLose => {
                "You have to LOSE this round. Choose your weapon accordingly."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_is_antisymmetric() {
        for a in Weapon::ALL {
            for b in Weapon::ALL {
                if a.beats(b) {
                    assert!(!b.beats(a), "{:?} and {:?} beat each other", a, b);
                }
            }
        }
    }

    #[test]
    fn test_unequal_pairs_have_a_winner() {
        for a in Weapon::ALL {
            for b in Weapon::ALL {
                if a != b {
                    assert!(a.beats(b) || b.beats(a), "{:?} vs {:?} undecided", a, b);
                }
            }
        }
    }

    #[test]
    fn test_nothing_beats_itself() {
        for w in Weapon::ALL {
            assert!(!w.beats(w));
        }
    }

    #[test]
    fn test_dominance_cycle() {
        assert!(Weapon::Scissors.beats(Weapon::Paper));
        assert!(Weapon::Paper.beats(Weapon::Stone));
        assert!(Weapon::Stone.beats(Weapon::Scissors));
    }

    #[test]
    fn test_names_are_distinct() {
        assert_eq!(Weapon::Scissors.name(), "scissors");
        assert_eq!(Weapon::Paper.name(), "paper");
        assert_eq!(Weapon::Stone.name(), "stone");
    }

    #[test]
    fn test_describe_states_the_goal() {
        assert!(Instruction::MustWin.describe().contains("WIN"));
        assert!(Instruction::MustLose.describe().contains("LOSE"));
    }
}
