//! Per-page-load session state.
//!
//! [`TripSession`] owns everything the view mutates: the current screen, the
//! guess game and the background layout. The view holds one in a signal and
//! forwards user input to it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::assets::AssetLoader;
use crate::config::SiteConfig;
use crate::error::TripResult;
use crate::game::{GameEvent, GameOutcome, GuessGame};
use crate::markers::{self, DecorativeMarker};
use crate::navigation::{Panel, Screen};

#[derive(Debug, Clone, PartialEq)]
pub struct TripSession {
    screen: Screen,
    game: GuessGame,
    markers: Vec<DecorativeMarker>,
    assets: AssetLoader,
}

impl TripSession {
    /// Build a session from config. Uses the configured seed for the
    /// background layout when present.
    pub fn new(config: &SiteConfig) -> TripResult<Self> {
        match config.seed {
            Some(seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config, &mut rand::rng()),
        }
    }

    /// Build a session drawing the layout from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: &SiteConfig, rng: &mut R) -> TripResult<Self> {
        config.validate()?;
        let markers = markers::generate_signed(
            config.marker_count,
            config.marker_min_size,
            config.marker_max_size,
            rng,
        )?;
        let game = GuessGame::new(config.answer.clone())?;

        Ok(Self {
            screen: Screen::Intro,
            game,
            markers,
            assets: AssetLoader::new(config.asset_dir.clone()),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn markers(&self) -> &[DecorativeMarker] {
        &self.markers
    }

    pub fn assets(&self) -> &AssetLoader {
        &self.assets
    }

    /// The game, once the intro has been dismissed.
    pub fn game(&self) -> Option<&GuessGame> {
        match self.screen {
            Screen::Intro => None,
            _ => Some(&self.game),
        }
    }

    /// Whether the guess overlay is accepting input.
    pub fn game_active(&self) -> bool {
        self.screen == Screen::Game && self.game.is_active()
    }

    /// Panel shown while browsing.
    pub fn panel(&self) -> Option<Panel> {
        self.screen.panel()
    }

    pub fn dismiss_intro(&mut self) {
        let next = self.screen.dismiss_intro();
        if next != self.screen {
            tracing::info!("Intro dismissed, starting guess game");
        }
        self.screen = next;
    }

    /// Forward a game event. Ends the game and opens the itinerary when the
    /// guess is accepted.
    pub fn game_event(&mut self, event: GameEvent) -> GameOutcome {
        if self.screen != Screen::Game {
            tracing::debug!(screen = ?self.screen, "Game event outside the game screen");
            return GameOutcome::Ignored;
        }
        let outcome = self.game.handle(event);
        if outcome == GameOutcome::Accepted {
            self.screen = self.screen.game_accepted();
            tracing::info!(panel = %Panel::default(), "Guess accepted, browsing");
        }
        outcome
    }

    /// Submit the currently typed guess.
    pub fn submit_guess(&mut self) -> GameOutcome {
        let text = self.game.current_guess().to_string();
        self.game_event(GameEvent::SubmitGuess(text))
    }

    pub fn select_panel(&mut self, id: &str) {
        self.screen = self.screen.select_panel(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GamePhase;

    fn session() -> TripSession {
        let config = SiteConfig {
            seed: Some(1),
            ..SiteConfig::default()
        };
        TripSession::new(&config).unwrap()
    }

    #[test]
    fn test_starts_on_intro_without_game() {
        let s = session();
        assert_eq!(s.screen(), Screen::Intro);
        assert!(s.game().is_none());
        assert!(!s.game_active());
        assert_eq!(s.markers().len(), 18);
    }

    #[test]
    fn test_game_events_ignored_before_intro_dismissed() {
        let mut s = session();
        assert_eq!(s.game_event(GameEvent::SubmitGuess("高雄".into())), GameOutcome::Ignored);
        assert_eq!(s.screen(), Screen::Intro);
    }

    #[test]
    fn test_full_flow() {
        let mut s = session();
        s.dismiss_intro();
        assert_eq!(s.screen(), Screen::Game);
        assert!(s.game_active());

        s.game_event(GameEvent::TextChanged("台北".into()));
        assert_eq!(s.submit_guess(), GameOutcome::WrongGuess);
        assert_eq!(s.screen(), Screen::Game);

        s.game_event(GameEvent::TextChanged("高雄".into()));
        assert_eq!(s.submit_guess(), GameOutcome::Accepted);
        assert_eq!(s.screen(), Screen::Browsing(Panel::Itinerary));
        assert!(!s.game_active());
        assert_eq!(s.game().map(|g| g.phase()), Some(GamePhase::Accepted));

        s.select_panel("hotel");
        assert_eq!(s.panel(), Some(Panel::Hotel));
    }

    #[test]
    fn test_game_does_not_restart() {
        let mut s = session();
        s.dismiss_intro();
        s.game_event(GameEvent::SubmitGuess("高雄".into()));
        s.dismiss_intro();
        assert_eq!(s.screen(), Screen::Browsing(Panel::Itinerary));
        assert_eq!(s.game_event(GameEvent::RequestHint), GameOutcome::Ignored);
    }

    #[test]
    fn test_seeded_layout_is_stable() {
        assert_eq!(session().markers(), session().markers());
    }

    #[test]
    fn test_negative_marker_count_rejected() {
        let config = SiteConfig {
            marker_count: -3,
            ..SiteConfig::default()
        };
        let err = TripSession::with_rng(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, crate::TripError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SiteConfig {
            answer: String::new(),
            ..SiteConfig::default()
        };
        assert!(TripSession::new(&config).is_err());
    }
}
