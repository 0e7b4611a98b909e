//! Match controller: the round state machine, scoring and the inversion rule

use serde::{Deserialize, Serialize};

use crate::random::SeededRng;
use crate::resolve;
use crate::weapon::{Instruction, Verdict, Weapon};

/// A match is always exactly ten rounds
pub const ROUNDS_PER_MATCH: u8 = 10;

/// Scored result of a round, after the instruction is applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Player,
    Computer,
    Draw,
}

/// Apply the round instruction to a natural verdict
///
/// Draws pass through untouched. Otherwise the player scores exactly when
/// the verdict matches what the instruction asked for: winning when told to
/// win, or losing when told to lose. Defying the instruction scores for the
/// computer even when the player naturally won.
pub fn adjust(verdict: Verdict, instruction: Instruction) -> RoundOutcome {
    match (verdict, instruction) {
        (Verdict::Draw, _) => RoundOutcome::Draw,
        (Verdict::Player, Instruction::MustWin) => RoundOutcome::Player,
        (Verdict::Computer, Instruction::MustLose) => RoundOutcome::Player,
        _ => RoundOutcome::Computer,
    }
}

/// Choices and outcome of a resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedRound {
    pub player_weapon: Weapon,
    pub computer_weapon: Weapon,
    pub outcome: RoundOutcome,
}

/// Usage-ordering errors
///
/// A well-behaved frontend never triggers these: they mean the caller broke
/// the play/advance alternation of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// `play_round` was called while this round's outcome is already revealed.
    AlreadyRevealed,
    /// `advance_round` was called before this round was played.
    NotRevealed,
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateError::AlreadyRevealed => write!(f, "round outcome is already revealed"),
            StateError::NotRevealed => write!(f, "round has not been played yet"),
        }
    }
}

/// Final comparison of a completed match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    PlayerWins { margin: u8 },
    ComputerWins { margin: u8 },
    Tied,
}

/// End-of-match summary, computed once when the last round is left
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub player_score: u8,
    pub computer_score: u8,
    pub verdict: MatchVerdict,
}

impl MatchSummary {
    fn new(player_score: u8, computer_score: u8) -> Self {
        let verdict = if player_score > computer_score {
            MatchVerdict::PlayerWins { margin: player_score - computer_score }
        } else if computer_score > player_score {
            MatchVerdict::ComputerWins { margin: computer_score - player_score }
        } else {
            MatchVerdict::Tied
        };

        Self { player_score, computer_score, verdict }
    }

    /// Title line for the game-over dialog
    pub fn headline(&self) -> &'static str {
        match self.verdict {
            MatchVerdict::PlayerWins { .. } => "You won!!!",
            MatchVerdict::ComputerWins { .. } => "You lost! :(",
            MatchVerdict::Tied => "You drew with the computer!",
        }
    }

    /// Body line for the game-over dialog
    pub fn detail(&self) -> String {
        match self.verdict {
            MatchVerdict::PlayerWins { margin } => {
                format!("You beat the computer by {} point(s)!", margin)
            }
            MatchVerdict::ComputerWins { margin } => {
                format!("You lost to the computer by {} point(s)!", margin)
            }
            MatchVerdict::Tied => {
                "Looks like you are just as smart as your phone, \
                 not that I was doubting you of course!"
                    .to_string()
            }
        }
    }
}

/// Whether the match continues after `advance_round`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Complete(MatchSummary),
}

/// Read-only view of the match for rendering one frame
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub round: u8,
    pub player_score: u8,
    pub computer_score: u8,
    pub instruction: Instruction,
    /// Human-readable line for the current instruction
    pub intent: String,
    /// `None` until this round's weapons are revealed
    pub revealed: Option<RevealedRound>,
}

/// A ten-round match against a uniformly random computer opponent
///
/// State machine: AwaitingChoice --play_round--> Revealed --advance_round-->
/// AwaitingChoice for the next round, or Complete when leaving round ten.
/// Only these operations mutate the match; presentation layers read
/// [`Match::snapshot`].
#[derive(Clone, Debug)]
pub struct Match {
    round: u8,
    player_score: u8,
    computer_score: u8,
    instruction: Instruction,
    revealed: Option<RevealedRound>,
    rng: SeededRng,
}

impl Match {
    /// Start a fresh match: round one, zeroed scores, a new random instruction
    pub fn new(mut rng: SeededRng) -> Self {
        let instruction = roll_instruction(&mut rng);
        Self {
            round: 1,
            player_score: 0,
            computer_score: 0,
            instruction,
            revealed: None,
            rng,
        }
    }

    /// Reset to round one with zeroed scores, continuing the same RNG stream
    pub fn restart(&mut self) {
        self.round = 1;
        self.player_score = 0;
        self.computer_score = 0;
        self.revealed = None;
        self.instruction = roll_instruction(&mut self.rng);
    }

    /// Play the current round with the given weapon
    ///
    /// The computer's weapon is drawn uniformly at random, independent of
    /// the player's choice and of the instruction. Errors if this round has
    /// already been resolved.
    pub fn play_round(&mut self, weapon: Weapon) -> Result<RoundOutcome, StateError> {
        if self.revealed.is_some() {
            return Err(StateError::AlreadyRevealed);
        }

        let index = self.rng.next_range(Weapon::ALL.len() as u32) as usize;
        let computer = Weapon::ALL[index];
        Ok(self.reveal(weapon, computer))
    }

    // Resolve a round once both weapons are fixed. Split out so tests can
    // pin the computer's weapon.
    fn reveal(&mut self, player: Weapon, computer: Weapon) -> RoundOutcome {
        let outcome = adjust(resolve(player, computer), self.instruction);

        match outcome {
            RoundOutcome::Player => self.player_score += 1,
            RoundOutcome::Computer => self.computer_score += 1,
            RoundOutcome::Draw => {}
        }

        self.revealed = Some(RevealedRound {
            player_weapon: player,
            computer_weapon: computer,
            outcome,
        });
        outcome
    }

    /// Leave the current round
    ///
    /// Errors if the round has not been played yet. Leaving round ten
    /// completes the match without further mutation, so repeated calls at
    /// the end return the same summary. Otherwise the round counter bumps,
    /// the reveal clears and a fresh instruction is rolled.
    pub fn advance_round(&mut self) -> Result<MatchStatus, StateError> {
        if self.revealed.is_none() {
            return Err(StateError::NotRevealed);
        }

        if self.round == ROUNDS_PER_MATCH {
            let summary = MatchSummary::new(self.player_score, self.computer_score);
            return Ok(MatchStatus::Complete(summary));
        }

        self.round += 1;
        self.revealed = None;
        self.instruction = roll_instruction(&mut self.rng);
        Ok(MatchStatus::InProgress)
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            round: self.round,
            player_score: self.player_score,
            computer_score: self.computer_score,
            instruction: self.instruction,
            intent: self.instruction.describe().to_string(),
            revealed: self.revealed,
        }
    }
}

fn roll_instruction(rng: &mut SeededRng) -> Instruction {
    if rng.next_bool() {
        Instruction::MustWin
    } else {
        Instruction::MustLose
    }
}
