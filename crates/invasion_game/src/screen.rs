use crate::session::{PlaySession, SessionSummary};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Start,
    Playing,
    GameOver,
}

/// The screen currently owning input and rendering.
///
/// `GameOver` carries only the summary of a finished session, so there is no
/// way to reach it without passing through `Playing` first.
#[derive(Clone, Debug)]
pub enum Screen {
    Start,
    Playing(PlaySession),
    GameOver(SessionSummary),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Start => ScreenKind::Start,
            Screen::Playing(_) => ScreenKind::Playing,
            Screen::GameOver(_) => ScreenKind::GameOver,
        }
    }
}

/// A request from the active screen to the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Leave the start screen and deal a new session.
    Begin,
    Finished(SessionSummary),
    /// Leave the game-over screen for the start screen.
    Restart,
    Quit,
}
