//! Game logic for inverted Scissors Paper Stone
//!
//! A ten-round match against a random computer opponent in which every round
//! opens with an instruction: win it, or lose it. Following the instruction
//! scores for the player; defying it scores for the computer, even on a
//! natural win. Draws score for nobody.
//!
//! This crate is compiled to:
//! - Native (for embedding and for the test suite)
//! - WASM (for the browser frontend)

mod game;
mod random;
mod weapon;

#[cfg(feature = "wasm")]
mod wasm;

pub use game::{
    adjust, Match, MatchSnapshot, MatchStatus, MatchSummary, MatchVerdict, RevealedRound,
    RoundOutcome, StateError, ROUNDS_PER_MATCH,
};
pub use random::SeededRng;
pub use weapon::{Instruction, Verdict, Weapon};

/// Natural verdict for a weapon pair, ignoring the round instruction
///
/// Pure and total over all nine pairs: equal weapons draw, unequal weapons
/// fall to the cyclic dominance rule.
pub fn resolve(player: Weapon, computer: Weapon) -> Verdict {
    if player == computer {
        Verdict::Draw
    } else if player.beats(computer) {
        Verdict::Player
    } else {
        Verdict::Computer
    }
}
