use invasion_common::{Color, Frame};
use rand::Rng;

/// Scroll distance per tick for a size-1 star.
pub const SCROLL_STEP: f32 = 0.2;
/// Chance per tick that a star picks a new brightness.
const TWINKLE_CHANCE: f64 = 0.05;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Radius in pixels, also the star's parallax factor.
    pub size: u8,
    pub brightness: u8,
}

/// Starfield drifting down behind every screen.
///
/// Stars keep fixed positions inside one field-sized tile; a single scroll
/// offset slides the tile and wraps at the field height. Each star is drawn at
/// `offset * size` below its home, so big stars drift faster.
#[derive(Clone, Debug)]
pub struct Background {
    stars: Vec<Star>,
    offset: f32,
    height: f32,
}

impl Background {
    pub fn new(width: f32, height: f32, count: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..width),
                y: rng.gen_range(0.0..height),
                size: rng.gen_range(1..=3),
                brightness: rng.gen_range(100..=255),
            })
            .collect();
        Self {
            stars,
            offset: 0.0,
            height,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn advance(&mut self, rng: &mut impl Rng) {
        for star in &mut self.stars {
            if rng.gen_bool(TWINKLE_CHANCE) {
                star.brightness = rng.gen_range(100..=255);
            }
        }
        self.offset = (self.offset + SCROLL_STEP) % self.height;
    }

    /// On-screen position of `star` at the current offset.
    pub fn position(&self, star: &Star) -> (f32, f32) {
        let y = (star.y + self.offset * star.size as f32) % self.height;
        (star.x, y)
    }

    pub fn draw(&self, frame: &mut Frame) {
        for star in &self.stars {
            let (x, y) = self.position(star);
            frame.fill_circle(
                x as i32,
                y as i32,
                star.size as i32,
                Color::grey(star.brightness),
            );
        }
    }
}
