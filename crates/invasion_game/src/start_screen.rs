use invasion_common::key::Key;
use invasion_common::{Color, Frame};

use crate::assets::SpriteSheet;
use crate::entity::InvaderKind;
use crate::screen::Transition;

const TITLE_COLOR: Color = Color::new_rgb(120, 255, 120);
const LEGEND_ICON: i32 = 40;
const LEGEND_TOP: i32 = 330;
const LEGEND_ROW: i32 = 55;

pub fn handle_key(key: Key, is_down: bool) -> Option<Transition> {
    (is_down && key == Key::Space).then_some(Transition::Begin)
}

/// Title, a legend of invader kinds with their point values, and the prompt.
pub fn draw(frame: &mut Frame, sprites: &SpriteSheet) {
    let cx = frame.width() as i32 / 2;
    frame.draw_text_centered("SPACE INVASION", cx, 140, 8, TITLE_COLOR);
    frame.draw_text_centered("INVADERS:", cx, 290, 3, Color::WHITE);

    let x = cx - 100;
    let mut y = LEGEND_TOP;
    for (i, kind) in InvaderKind::ALL.into_iter().enumerate() {
        y = LEGEND_TOP + i as i32 * LEGEND_ROW;
        frame.blit_scaled(sprites.invader(kind), x, y, LEGEND_ICON, LEGEND_ICON, kind.color());
        frame.draw_text(kind.name(), x + 60, y, 2, Color::WHITE);
        frame.draw_text(
            &format!("{} POINTS", kind.score()),
            x + 60,
            y + 20,
            2,
            Color::grey(180),
        );
    }

    frame.draw_text_centered("PRESS SPACE TO START", cx, y + 50, 3, Color::WHITE);
}
