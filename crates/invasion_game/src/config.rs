use typed_builder::TypedBuilder;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Tunables for a play session.
///
/// Every field has a default matching the classic layout: a 3x6 formation
/// marching over four barriers, three lives, and a rare per-invader fire roll
/// that grows as the formation thins out.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = SCREEN_WIDTH as f32)]
    pub field_width: f32,
    #[builder(default = SCREEN_HEIGHT as f32)]
    pub field_height: f32,

    #[builder(default = 3)]
    pub lives: u32,

    #[builder(default = 3)]
    pub invader_rows: usize,
    #[builder(default = 6)]
    pub invader_columns: usize,
    /// Top-left corner of the formation's first invader.
    #[builder(default = (100.0, 50.0))]
    pub invader_origin: (f32, f32),
    #[builder(default = 65.0)]
    pub invader_spacing_x: f32,
    #[builder(default = 80.0)]
    pub invader_spacing_y: f32,
    /// Horizontal pixels per tick with the formation at full strength.
    #[builder(default = 1.0)]
    pub invader_speed: f32,
    /// Pixels the formation drops each time it touches a wall.
    #[builder(default = 10.0)]
    pub invader_descent: f32,
    /// Chance per tick that a single invader fires, at full strength.
    #[builder(default = 0.001)]
    pub invader_fire_rate: f64,
    #[builder(default = 0.3)]
    pub invader_max_fire_rate: f64,

    #[builder(default = 4)]
    pub barrier_count: usize,
    #[builder(default = (100.0, 400.0))]
    pub barrier_origin: (f32, f32),
    #[builder(default = 180.0)]
    pub barrier_spacing: f32,
    #[builder(default = 3)]
    pub barrier_health: u32,

    #[builder(default = 100)]
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::GameConfig;

    #[test]
    fn defaults_fill_the_window() {
        let config = GameConfig::default();
        assert_eq!(config.field_width, 800.0);
        assert_eq!(config.field_height, 600.0);
        assert_eq!(config.lives, 3);
        assert_eq!(config.invader_rows * config.invader_columns, 18);
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = GameConfig::builder().lives(1).invader_fire_rate(0.0).build();
        assert_eq!(config.lives, 1);
        assert_eq!(config.invader_fire_rate, 0.0);
        assert_eq!(config.barrier_count, 4);
    }
}
