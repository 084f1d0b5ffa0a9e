//! Guess-the-destination game.
//!
//! The guest sees progressively stronger clues and types where they think
//! the trip goes. A guess is accepted as soon as it contains the answer
//! (case-sensitive substring match); the game then ends for good.
//!
//! ```text
//! AwaitingInput(1) --hint--> AwaitingInput(2) --hint--> AwaitingInput(3)
//!        |                          |                          |
//!        +------- correct guess ----+------- correct guess ----+--> Accepted
//! ```

use crate::assets::AssetId;
use crate::error::{TripError, TripResult};

/// Highest hint level that can be revealed.
pub const MAX_HINT_LEVEL: u8 = 3;

/// Default destination the guest has to guess.
pub const DEFAULT_ANSWER: &str = "高雄";

/// Number of clues revealed so far, always within `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintLevel(u8);

impl HintLevel {
    pub const FIRST: HintLevel = HintLevel(1);

    pub fn get(self) -> u8 {
        self.0
    }

    /// The following level, or `None` once every clue is out.
    pub fn next(self) -> Option<HintLevel> {
        (self.0 < MAX_HINT_LEVEL).then(|| HintLevel(self.0 + 1))
    }

    pub fn is_max(self) -> bool {
        self.0 == MAX_HINT_LEVEL
    }
}

impl Default for HintLevel {
    fn default() -> Self {
        HintLevel::FIRST
    }
}

/// A single progressive clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub level: u8,
    pub text: &'static str,
    pub image: Option<AssetId>,
}

/// Clues in reveal order.
pub const HINTS: [Hint; MAX_HINT_LEVEL as usize] = [
    Hint {
        level: 1,
        text: "一座南部的港口城市，太陽非常熱情。",
        image: None,
    },
    Hint {
        level: 2,
        text: "在台灣的西南邊，有一條愛河穿過市區。",
        image: Some(AssetId::HintMap),
    },
    Hint {
        level: 3,
        text: "這裡有巨蛋，還有台鋼天鷹的主場！",
        image: Some(AssetId::HintDome),
    },
];

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingInput(HintLevel),
    /// Terminal; reached on the first correct guess
    Accepted,
}

/// Input events delivered by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TextChanged(String),
    RequestHint,
    SubmitGuess(String),
}

/// What an event did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    TextUpdated,
    HintRevealed(HintLevel),
    /// Hint requested while already at the last clue
    HintsExhausted,
    WrongGuess,
    Accepted,
    /// Event arrived after the game had ended
    Ignored,
}

/// Guess-game state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessGame {
    answer: String,
    hint_level: HintLevel,
    current_guess: String,
    last_error: Option<String>,
    accepted: bool,
}

impl GuessGame {
    /// Start a game at hint level 1. The answer must not be blank.
    pub fn new(answer: impl Into<String>) -> TripResult<Self> {
        let answer = answer.into();
        if answer.trim().is_empty() {
            return Err(TripError::InvalidArgument("guess answer must not be empty".into()));
        }
        Ok(Self {
            answer,
            hint_level: HintLevel::FIRST,
            current_guess: String::new(),
            last_error: None,
            accepted: false,
        })
    }

    pub fn phase(&self) -> GamePhase {
        if self.accepted {
            GamePhase::Accepted
        } else {
            GamePhase::AwaitingInput(self.hint_level)
        }
    }

    pub fn hint_level(&self) -> HintLevel {
        self.hint_level
    }

    pub fn is_active(&self) -> bool {
        !self.accepted
    }

    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clues revealed so far, oldest first.
    pub fn revealed_hints(&self) -> &'static [Hint] {
        &HINTS[..self.hint_level.get() as usize]
    }

    /// Feedback shown after a wrong guess. Same text at every hint level.
    pub fn retry_message(&self) -> String {
        format!(
            "不對喔，再試一次！提示：答案是 {} 個字",
            self.answer.chars().count()
        )
    }

    /// Apply an input event.
    pub fn handle(&mut self, event: GameEvent) -> GameOutcome {
        if self.accepted {
            tracing::debug!(?event, "Game already accepted, ignoring event");
            return GameOutcome::Ignored;
        }

        match event {
            GameEvent::TextChanged(text) => {
                self.current_guess = text;
                self.last_error = None;
                GameOutcome::TextUpdated
            }
            GameEvent::RequestHint => match self.hint_level.next() {
                Some(level) => {
                    self.hint_level = level;
                    tracing::info!(level = level.get(), "Hint revealed");
                    GameOutcome::HintRevealed(level)
                }
                None => GameOutcome::HintsExhausted,
            },
            GameEvent::SubmitGuess(text) => {
                if text.contains(self.answer.as_str()) {
                    self.accepted = true;
                    self.last_error = None;
                    tracing::info!(hint_level = self.hint_level.get(), "Guess accepted");
                    GameOutcome::Accepted
                } else {
                    self.current_guess.clear();
                    self.last_error = Some(self.retry_message());
                    tracing::debug!("Wrong guess");
                    GameOutcome::WrongGuess
                }
            }
        }
    }

    /// Submit whatever is currently typed.
    pub fn submit(&mut self) -> GameOutcome {
        let text = self.current_guess.clone();
        self.handle(GameEvent::SubmitGuess(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GuessGame {
        GuessGame::new(DEFAULT_ANSWER).unwrap()
    }

    #[test]
    fn test_starts_at_first_hint() {
        let g = game();
        assert_eq!(g.phase(), GamePhase::AwaitingInput(HintLevel::FIRST));
        assert_eq!(g.hint_level().get(), 1);
        assert!(g.is_active());
        assert_eq!(g.current_guess(), "");
        assert_eq!(g.last_error(), None);
    }

    #[test]
    fn test_blank_answer_rejected() {
        assert!(matches!(GuessGame::new("  "), Err(TripError::InvalidArgument(_))));
    }

    #[test]
    fn test_hints_cap_at_three() {
        let mut g = game();
        assert_eq!(g.handle(GameEvent::RequestHint), GameOutcome::HintRevealed(HintLevel(2)));
        assert_eq!(g.handle(GameEvent::RequestHint), GameOutcome::HintRevealed(HintLevel(3)));
        assert_eq!(g.handle(GameEvent::RequestHint), GameOutcome::HintsExhausted);
        assert_eq!(g.hint_level().get(), 3);
        assert!(g.hint_level().is_max());
    }

    #[test]
    fn test_revealed_hints_follow_level() {
        let mut g = game();
        assert_eq!(g.revealed_hints().len(), 1);
        g.handle(GameEvent::RequestHint);
        let hints = g.revealed_hints();
        assert_eq!(hints.len(), 2);
        assert_eq!(hints[1].image, Some(AssetId::HintMap));
    }

    #[test]
    fn test_correct_guess_accepts() {
        let mut g = game();
        assert_eq!(g.handle(GameEvent::SubmitGuess("高雄".into())), GameOutcome::Accepted);
        assert_eq!(g.phase(), GamePhase::Accepted);
        assert!(!g.is_active());
    }

    #[test]
    fn test_substring_match_accepts() {
        let mut g = game();
        g.handle(GameEvent::RequestHint);
        assert_eq!(g.handle(GameEvent::SubmitGuess("應該是高雄吧".into())), GameOutcome::Accepted);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let mut g = GuessGame::new("Kaohsiung").unwrap();
        assert_eq!(g.handle(GameEvent::SubmitGuess("kaohsiung".into())), GameOutcome::WrongGuess);
    }

    #[test]
    fn test_wrong_guess_clears_text_and_sets_error() {
        let mut g = game();
        g.handle(GameEvent::TextChanged("台北".into()));
        assert_eq!(g.submit(), GameOutcome::WrongGuess);
        assert_eq!(g.current_guess(), "");
        assert_eq!(g.last_error(), Some("不對喔，再試一次！提示：答案是 2 個字"));
        assert_eq!(g.phase(), GamePhase::AwaitingInput(HintLevel::FIRST));
    }

    #[test]
    fn test_retry_message_ignores_hint_level() {
        let mut g = game();
        g.handle(GameEvent::SubmitGuess("台北".into()));
        let first = g.last_error().map(str::to_owned);
        g.handle(GameEvent::RequestHint);
        g.handle(GameEvent::RequestHint);
        g.handle(GameEvent::SubmitGuess("台中".into()));
        assert_eq!(g.last_error().map(str::to_owned), first);
    }

    #[test]
    fn test_empty_guess_never_advances() {
        let mut g = game();
        assert_eq!(g.submit(), GameOutcome::WrongGuess);
        assert_eq!(g.hint_level(), HintLevel::FIRST);
    }

    #[test]
    fn test_text_change_clears_error() {
        let mut g = game();
        g.handle(GameEvent::SubmitGuess("台北".into()));
        assert!(g.last_error().is_some());
        g.handle(GameEvent::TextChanged("x".into()));
        assert_eq!(g.last_error(), None);
        assert_eq!(g.current_guess(), "x");
    }

    #[test]
    fn test_accepted_is_terminal() {
        let mut g = game();
        g.handle(GameEvent::SubmitGuess("高雄".into()));
        assert_eq!(g.handle(GameEvent::RequestHint), GameOutcome::Ignored);
        assert_eq!(g.handle(GameEvent::TextChanged("y".into())), GameOutcome::Ignored);
        assert_eq!(g.handle(GameEvent::SubmitGuess("台北".into())), GameOutcome::Ignored);
        assert_eq!(g.phase(), GamePhase::Accepted);
        assert_eq!(g.last_error(), None);
    }
}
