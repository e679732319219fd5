use rand::Rng;

use crate::config::GameConfig;
use crate::entity::{Invader, InvaderKind, INVADER_WIDTH};

/// The formation never moves faster than this multiple of its base speed.
const MAX_SPEEDUP: f32 = 3.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The invading block. Invaders march sideways as one unit, drop a step and
/// turn around whenever any of them touches a wall, and speed up as their
/// numbers fall.
#[derive(Clone, Debug)]
pub struct Formation {
    pub invaders: Vec<Invader>,
    pub direction: Direction,
    base_speed: f32,
    descent: f32,
    initial: usize,
}

impl Formation {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (origin_x, origin_y) = config.invader_origin;
        let mut invaders = Vec::with_capacity(config.invader_rows * config.invader_columns);
        for row in 0..config.invader_rows {
            for column in 0..config.invader_columns {
                invaders.push(Invader {
                    x: origin_x + column as f32 * config.invader_spacing_x,
                    y: origin_y + row as f32 * config.invader_spacing_y,
                    kind: InvaderKind::random(rng),
                });
            }
        }
        Self::from_invaders(invaders, config)
    }

    /// Build a formation around an explicit set of invaders, counting them as
    /// its full strength.
    pub fn from_invaders(invaders: Vec<Invader>, config: &GameConfig) -> Self {
        Self {
            initial: invaders.len(),
            invaders,
            direction: Direction::Right,
            base_speed: config.invader_speed,
            descent: config.invader_descent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.invaders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invaders.len()
    }

    /// Full-strength size, used to scale speed and fire rate.
    pub fn initial(&self) -> usize {
        self.initial
    }

    pub fn speed(&self) -> f32 {
        if self.invaders.is_empty() {
            return self.base_speed;
        }
        let multiplier = self.initial as f32 / self.invaders.len() as f32;
        (self.base_speed * multiplier).min(self.base_speed * MAX_SPEEDUP)
    }

    /// Leftmost and rightmost x covered by live invaders.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        let mut invaders = self.invaders.iter();
        let first = invaders.next()?;
        let init = (first.x, first.x + INVADER_WIDTH);
        Some(invaders.fold(init, |(left, right), invader| {
            (left.min(invader.x), right.max(invader.x + INVADER_WIDTH))
        }))
    }

    /// March one tick. On wall contact the block is pushed back inside
    /// `[0, field_width]`, descends and reverses.
    pub fn advance(&mut self, field_width: f32) {
        let step = self.speed() * self.direction.sign();
        for invader in &mut self.invaders {
            invader.x += step;
        }

        let Some((left, right)) = self.bounds() else {
            return;
        };
        let correction = if left <= 0.0 {
            -left
        } else if right >= field_width {
            field_width - right
        } else {
            return;
        };

        // Clamp as well so float drift in the shift cannot leave an edge a
        // hair outside the field.
        let max_x = field_width - INVADER_WIDTH;
        for invader in &mut self.invaders {
            invader.x = (invader.x + correction).clamp(0.0, max_x);
            invader.y += self.descent;
        }
        self.direction = self.direction.reversed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn invader(x: f32, y: f32) -> Invader {
        Invader {
            x,
            y,
            kind: InvaderKind::Trooper,
        }
    }

    #[test]
    fn new_lays_out_a_grid() {
        let config = GameConfig::default();
        let formation = Formation::new(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(formation.len(), 18);
        assert_eq!(formation.initial(), 18);
        assert_eq!((formation.invaders[0].x, formation.invaders[0].y), (100.0, 50.0));
        assert_eq!((formation.invaders[7].x, formation.invaders[7].y), (165.0, 130.0));
        assert_eq!(formation.bounds(), Some((100.0, 100.0 + 5.0 * 65.0 + INVADER_WIDTH)));
    }

    #[test]
    fn speed_grows_as_invaders_fall_and_caps() {
        let config = GameConfig::default();
        let mut formation = Formation::new(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(formation.speed(), 1.0);

        formation.invaders.truncate(9);
        assert_eq!(formation.speed(), 2.0);

        formation.invaders.truncate(2);
        assert_eq!(formation.speed(), 3.0);
    }

    #[test]
    fn wall_contact_descends_and_reverses() {
        let config = GameConfig::default();
        let mut formation =
            Formation::from_invaders(vec![invader(800.0 - INVADER_WIDTH - 0.5, 100.0)], &config);

        formation.advance(800.0);
        assert_eq!(formation.direction, Direction::Left);
        assert_eq!(formation.invaders[0].y, 110.0);
        assert_eq!(formation.bounds().map(|(_, right)| right), Some(800.0));

        formation.advance(800.0);
        assert_eq!(formation.direction, Direction::Left);
        assert_eq!(formation.invaders[0].y, 110.0);
    }

    #[test]
    fn bounds_stay_inside_the_field() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut formation = Formation::new(&config, &mut rng);

        for tick in 0..20_000 {
            // Thin the block out over time so the speed-up is exercised too.
            if tick % 1_500 == 0 && formation.len() > 1 {
                let idx = rng.gen_range(0..formation.len());
                formation.invaders.remove(idx);
            }
            formation.advance(config.field_width);
            let (left, right) = formation.bounds().unwrap();
            assert!(left >= 0.0, "left edge {left} at tick {tick}");
            assert!(right <= config.field_width, "right edge {right} at tick {tick}");
        }
    }

    #[test]
    fn empty_formation_is_inert() {
        let config = GameConfig::default();
        let mut formation = Formation::from_invaders(Vec::new(), &config);
        formation.advance(800.0);
        assert!(formation.is_empty());
        assert_eq!(formation.bounds(), None);
        assert_eq!(formation.speed(), 1.0);
    }
}
