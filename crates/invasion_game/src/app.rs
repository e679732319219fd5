use anyhow::Result;
use invasion_common::app::App;
use invasion_common::key::Key;
use invasion_common::{Color, Frame};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::SpriteSheet;
use crate::background::Background;
use crate::config::GameConfig;
use crate::screen::{Screen, Transition};
use crate::session::PlaySession;
use crate::{game_over, render, start_screen, SCREEN_SCALE};

/// Frontend-facing driver: owns the active screen and the starfield behind it.
pub struct InvasionApp {
    should_exit: bool,
    config: GameConfig,
    sprites: SpriteSheet,
    background: Background,
    screen: Screen,
    rng: StdRng,
}

impl InvasionApp {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let sprites = SpriteSheet::load()?;
        let background = Background::new(
            config.field_width,
            config.field_height,
            config.star_count,
            &mut rng,
        );
        Ok(Self {
            should_exit: false,
            config,
            sprites,
            background,
            screen: Screen::Start,
            rng,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    fn apply(&mut self, transition: Transition) {
        let from = self.screen.kind();
        let next = match (&self.screen, transition) {
            (_, Transition::Quit) => {
                log::info!("Quit requested from {:?}", from);
                self.should_exit = true;
                return;
            }
            (Screen::Start, Transition::Begin) => {
                Screen::Playing(PlaySession::new(&self.config, &mut self.rng))
            }
            (Screen::Playing(_), Transition::Finished(summary)) => Screen::GameOver(summary),
            (Screen::GameOver(_), Transition::Restart) => Screen::Start,
            (_, transition) => {
                log::warn!("Ignoring {:?} on the {:?} screen", transition, from);
                return;
            }
        };
        log::info!("Screen {:?} -> {:?}", from, next.kind());
        self.screen = next;
    }

    fn render(&self, frame: &mut Frame) {
        frame.clear(Color::BLACK);
        self.background.draw(frame);
        match &self.screen {
            Screen::Start => start_screen::draw(frame, &self.sprites),
            Screen::Playing(session) => render::draw_session(frame, session, &self.sprites),
            Screen::GameOver(summary) => game_over::draw(frame, summary),
        }
    }
}

impl App for InvasionApp {
    fn init(&mut self) {
        log::info!("Space Invasion init");
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        self.background.advance(&mut self.rng);

        if let Screen::Playing(session) = &mut self.screen {
            session.tick(&mut self.rng);
            if let Some(summary) = session.summary() {
                self.apply(Transition::Finished(summary));
            }
        }

        let (width, height) = (self.width() as usize, self.height() as usize);
        let mut frame = Frame::new(screen_state, width, height);
        self.render(&mut frame);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        let transition = match &mut self.screen {
            Screen::Start => start_screen::handle_key(key, is_down),
            Screen::Playing(session) => {
                session.handle_key(key, is_down);
                None
            }
            Screen::GameOver(_) => game_over::handle_key(key, is_down),
        };
        if let Some(transition) = transition {
            self.apply(transition);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Space Invasion exit");
    }

    fn width(&self) -> u32 {
        self.config.field_width as u32
    }

    fn height(&self) -> u32 {
        self.config.field_height as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        "Space Invasion".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenKind;
    use crate::session::{Outcome, SessionSummary};

    fn app_with(config: GameConfig) -> InvasionApp {
        InvasionApp::with_rng(config, StdRng::seed_from_u64(7)).unwrap()
    }

    fn buffer(app: &InvasionApp) -> Vec<u8> {
        vec![0u8; (app.width() * app.height() * 3) as usize]
    }

    fn press(app: &mut InvasionApp, key: Key) {
        app.handle_key_event(key, true);
        app.handle_key_event(key, false);
    }

    /// A single invader parked on the ground: the first tick ends in defeat.
    fn doomed_config() -> GameConfig {
        GameConfig::builder()
            .invader_rows(1)
            .invader_columns(1)
            .invader_origin((20.0, 540.0))
            .invader_fire_rate(0.0)
            .build()
    }

    fn play_to_game_over(app: &mut InvasionApp) {
        let mut screen = buffer(app);
        press(app, Key::Space);
        assert_eq!(app.screen().kind(), ScreenKind::Playing);
        app.update(&mut screen);
        assert_eq!(app.screen().kind(), ScreenKind::GameOver);
    }

    #[test]
    fn starts_on_the_start_screen() {
        let app = app_with(GameConfig::default());
        assert_eq!(app.screen().kind(), ScreenKind::Start);
        assert!(!app.should_exit());
        assert_eq!((app.width(), app.height()), (800, 600));
        assert_eq!(app.title(), "Space Invasion");
    }

    #[test]
    fn start_screen_ignores_everything_but_space() {
        let mut app = app_with(GameConfig::default());
        for key in [Key::Left, Key::Right, Key::Return, Key::Escape, Key::A] {
            press(&mut app, key);
        }
        assert_eq!(app.screen().kind(), ScreenKind::Start);
        assert!(!app.should_exit());

        press(&mut app, Key::Space);
        assert_eq!(app.screen().kind(), ScreenKind::Playing);
    }

    #[test]
    fn start_never_jumps_to_game_over() {
        let mut app = app_with(GameConfig::default());
        app.apply(Transition::Finished(SessionSummary {
            score: 999,
            outcome: Outcome::Victory,
        }));
        assert_eq!(app.screen().kind(), ScreenKind::Start);

        app.apply(Transition::Restart);
        assert_eq!(app.screen().kind(), ScreenKind::Start);
    }

    fn is_legal(from: ScreenKind, to: ScreenKind) -> bool {
        matches!(
            (from, to),
            (ScreenKind::Start, ScreenKind::Start | ScreenKind::Playing)
                | (ScreenKind::Playing, ScreenKind::Playing | ScreenKind::GameOver)
                | (ScreenKind::GameOver, ScreenKind::GameOver | ScreenKind::Start)
        )
    }

    #[test]
    fn key_sequences_only_take_legal_steps() {
        let keys = [Key::Space, Key::Left, Key::Escape, Key::Right, Key::Return];
        let mut app = app_with(doomed_config());
        let mut screen = buffer(&app);
        let mut previous = app.screen().kind();

        for step in 0..200usize {
            if app.should_exit() {
                break;
            }
            press(&mut app, keys[(step * 7 + step / 3) % keys.len()]);
            let current = app.screen().kind();
            assert!(is_legal(previous, current), "{previous:?} -> {current:?} on input {step}");
            previous = current;

            app.update(&mut screen);
            let current = app.screen().kind();
            assert!(is_legal(previous, current), "{previous:?} -> {current:?} on tick {step}");
            previous = current;
        }
    }

    #[test]
    fn finished_session_shows_its_summary() {
        let mut app = app_with(doomed_config());
        play_to_game_over(&mut app);
        match app.screen() {
            Screen::GameOver(summary) => {
                assert_eq!(summary.outcome, Outcome::Defeat);
                assert_eq!(summary.score, 0);
            }
            other => panic!("expected game over, got {:?}", other.kind()),
        }
    }

    #[test]
    fn restart_discards_the_old_session() {
        let mut app = app_with(doomed_config());
        play_to_game_over(&mut app);

        press(&mut app, Key::Space);
        assert_eq!(app.screen().kind(), ScreenKind::Start);

        press(&mut app, Key::Space);
        match app.screen() {
            Screen::Playing(session) => {
                assert_eq!(session.score(), 0);
                assert_eq!(session.lives(), 3);
                assert_eq!(session.formation().len(), 1);
                assert!(session.lasers().is_empty());
                assert_eq!(session.summary(), None);
            }
            other => panic!("expected a new session, got {:?}", other.kind()),
        }
    }

    #[test]
    fn escape_on_game_over_quits() {
        let mut app = app_with(doomed_config());
        play_to_game_over(&mut app);
        press(&mut app, Key::Escape);
        assert!(app.should_exit());
        assert_eq!(app.screen().kind(), ScreenKind::GameOver);
    }

    #[test]
    fn background_scrolls_on_every_screen() {
        let mut app = app_with(GameConfig::default());
        let mut screen = buffer(&app);

        let before = app.background().offset();
        app.update(&mut screen);
        assert!(app.background().offset() > before);

        press(&mut app, Key::Space);
        let before = app.background().offset();
        app.update(&mut screen);
        assert!(app.background().offset() > before);
    }

    #[test]
    fn update_paints_the_framebuffer() {
        let mut app = app_with(GameConfig::default());
        let mut screen = buffer(&app);
        app.update(&mut screen);
        assert!(screen.iter().any(|&byte| byte != 0));
    }
}
