use invasion_common::font;
use invasion_common::{Color, Frame};

use crate::assets::SpriteSheet;
use crate::entity::{Barrier, Rect};
use crate::session::PlaySession;

const DEFENDER_COLOR: Color = Color::new_rgb(200, 200, 215);
const BARRIER_COLOR: Color = Color::new_rgb(90, 200, 120);
const HUD_SCALE: i32 = 3;
const HUD_MARGIN: i32 = 10;

/// Draw the playfield and HUD for a running session.
pub fn draw_session(frame: &mut Frame, session: &PlaySession, sprites: &SpriteSheet) {
    let defender = session.defender();
    if defender.alive {
        blit(frame, &sprites.defender, defender.rect(), DEFENDER_COLOR);
    }

    for invader in &session.formation().invaders {
        blit(frame, sprites.invader(invader.kind), invader.rect(), invader.kind.color());
    }

    for laser in session.lasers() {
        frame.fill_rect(
            laser.x as i32,
            laser.y as i32,
            laser.w as i32,
            laser.h as i32,
            laser.color,
        );
    }

    for barrier in session.barriers() {
        draw_barrier(frame, barrier, sprites);
    }

    draw_hud(frame, session.score(), session.lives());
}

fn blit(frame: &mut Frame, bitmap: &invasion_common::Bitmap, rect: Rect, color: Color) {
    frame.blit_scaled(
        bitmap,
        rect.x as i32,
        rect.y as i32,
        rect.w as i32,
        rect.h as i32,
        color,
    );
}

/// Barrier artwork with its scorch marks punched out. Marks never spill past
/// the barrier's own rectangle.
fn draw_barrier(frame: &mut Frame, barrier: &Barrier, sprites: &SpriteSheet) {
    let rect = barrier.rect();
    blit(frame, &sprites.barrier, rect, BARRIER_COLOR);

    let (x0, y0) = (rect.x as i32, rect.y as i32);
    let (x1, y1) = (x0 + rect.w as i32, y0 + rect.h as i32);
    for mark in &barrier.marks {
        let (cx, cy, r) = (x0 + mark.dx, y0 + mark.dy, mark.radius);
        for py in (cy - r).max(y0)..=(cy + r).min(y1 - 1) {
            for px in (cx - r).max(x0)..=(cx + r).min(x1 - 1) {
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy <= r * r {
                    frame.put_pixel(px, py, Color::BLACK);
                }
            }
        }
    }
}

fn draw_hud(frame: &mut Frame, score: u32, lives: u32) {
    frame.draw_text(
        &format!("SCORE: {score}"),
        HUD_MARGIN,
        HUD_MARGIN,
        HUD_SCALE,
        Color::WHITE,
    );

    let lives = format!("LIVES: {lives}");
    let x = frame.width() as i32 - HUD_MARGIN - font::text_width(&lives, HUD_SCALE);
    frame.draw_text(&lives, x, HUD_MARGIN, HUD_SCALE, Color::WHITE);
}
