//! Game phases and settings

use serde::{Deserialize, Serialize};

use crate::payout::PayoutRules;

/// Room-level settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub max_players: u32,
    pub total_rounds: u32,
}

impl GameSettings {
    /// Defaults for a new room.
    pub const fn standard() -> Self {
        Self { max_players: 10, total_rounds: 7 }
    }

    pub fn can_join(&self, player_count: u32) -> bool {
        player_count < self.max_players
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Stage of a round, in play order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Lobby,
    Question,
    Answering,
    Arrange,
    Betting,
    Reveal,
    Payout,
    Ended,
}

impl Phase {
    pub fn accepts_answers(self) -> bool {
        self == Phase::Answering
    }

    pub fn accepts_bets(self) -> bool {
        self == Phase::Betting
    }

    /// Whether the betting mat is on the table.
    pub fn shows_mat(self) -> bool {
        matches!(
            self,
            Phase::Arrange | Phase::Betting | Phase::Reveal | Phase::Payout | Phase::Ended
        )
    }
}

/// Where a game currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub phase: Phase,
    /// 0-based.
    pub round_index: u32,
}

impl GameProgress {
    pub fn new() -> Self {
        Self { phase: Phase::Lobby, round_index: 0 }
    }

    /// Next step of the game. After the payout of the last round the game
    /// ends; `Ended` never advances.
    pub fn advance(self, settings: &GameSettings) -> GameProgress {
        let phase = match self.phase {
            Phase::Lobby => Phase::Question,
            Phase::Question => Phase::Answering,
            Phase::Answering => Phase::Arrange,
            Phase::Arrange => Phase::Betting,
            Phase::Betting => Phase::Reveal,
            Phase::Reveal => Phase::Payout,
            Phase::Payout => {
                let next_round = self.round_index + 1;
                if next_round >= settings.total_rounds {
                    return GameProgress { phase: Phase::Ended, ..self };
                }
                return GameProgress { phase: Phase::Lobby, round_index: next_round };
            }
            Phase::Ended => Phase::Ended,
        };
        GameProgress { phase, ..self }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Whether chips may be staked this round under the standard rules.
    pub fn chips_allowed(&self) -> bool {
        PayoutRules::standard().chips_allowed(self.round_index)
    }
}

impl Default for GameProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cycle() {
        let settings = GameSettings::standard();
        let mut progress = GameProgress::new();
        let expected = [
            Phase::Question,
            Phase::Answering,
            Phase::Arrange,
            Phase::Betting,
            Phase::Reveal,
            Phase::Payout,
            Phase::Lobby,
        ];
        for phase in expected {
            progress = progress.advance(&settings);
            assert_eq!(progress.phase, phase);
        }
        assert_eq!(progress.round_index, 1);
        assert!(progress.chips_allowed());
    }

    #[test]
    fn test_game_ends_after_last_round() {
        let settings = GameSettings { max_players: 4, total_rounds: 2 };
        let mut progress = GameProgress::new();
        let mut steps = 0;
        while !progress.is_over() {
            progress = progress.advance(&settings);
            steps += 1;
        }
        // Two rounds of 7 transitions each
        assert_eq!(steps, 14);
        assert_eq!(progress.round_index, 1);
        assert_eq!(progress.advance(&settings), progress);
    }

    #[test]
    fn test_phase_flags() {
        assert!(Phase::Answering.accepts_answers());
        assert!(!Phase::Betting.accepts_answers());
        assert!(Phase::Betting.accepts_bets());
        assert!(Phase::Ended.shows_mat());
        assert!(!Phase::Question.shows_mat());
        assert!(!GameProgress::new().chips_allowed());
    }

    #[test]
    fn test_can_join() {
        let settings = GameSettings::standard();
        assert!(settings.can_join(9));
        assert!(!settings.can_join(10));
    }

    #[test]
    fn test_phase_serde() {
        assert_eq!(serde_json::to_string(&Phase::Answering).unwrap(), "\"ANSWERING\"");
        let phase: Phase = serde_json::from_str("\"PAYOUT\"").unwrap();
        assert_eq!(phase, Phase::Payout);
    }
}
