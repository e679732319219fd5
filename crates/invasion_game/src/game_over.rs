use invasion_common::key::Key;
use invasion_common::{Color, Frame};

use crate::screen::Transition;
use crate::session::{Outcome, SessionSummary};

pub fn handle_key(key: Key, is_down: bool) -> Option<Transition> {
    if !is_down {
        return None;
    }
    match key {
        Key::Space => Some(Transition::Restart),
        Key::Escape => Some(Transition::Quit),
        _ => None,
    }
}

fn headline(outcome: Outcome) -> (&'static str, &'static str, Color) {
    match outcome {
        Outcome::Victory => ("VICTORY!", "ALL INVADERS DESTROYED!", Color::GOLD),
        Outcome::Defeat => ("GAME OVER", "THE INVADERS WON", Color::CRIMSON),
    }
}

pub fn draw(frame: &mut Frame, summary: &SessionSummary) {
    let cx = frame.width() as i32 / 2;
    let (title, subtitle, color) = headline(summary.outcome);

    frame.draw_text_centered(title, cx, 170, 8, color);
    frame.draw_text_centered(subtitle, cx, 250, 3, Color::WHITE);
    frame.draw_text_centered(
        &format!("FINAL SCORE: {}", summary.score),
        cx,
        310,
        4,
        Color::WHITE,
    );
    frame.draw_text_centered("PRESS SPACE TO PLAY AGAIN", cx, 400, 3, Color::grey(200));
    frame.draw_text_centered("PRESS ESC TO QUIT", cx, 440, 3, Color::grey(200));
}
