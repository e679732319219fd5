use invasion_common::key::Key;
use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entity::{Barrier, Defender, Laser, LaserOwner, Movement};
use crate::formation::Formation;


#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every invader was destroyed.
    Victory,
    /// The defender ran out of lives or the invaders landed.
    Defeat,
}

/// What survives a finished session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub outcome: Outcome,
}

/// One play-through. Owns every entity on the field; all of it is dropped
/// with the session.
#[derive(Clone, Debug)]
pub struct PlaySession {
    defender: Defender,
    formation: Formation,
    lasers: Vec<Laser>,
    barriers: Vec<Barrier>,
    score: u32,
    lives: u32,
    outcome: Option<Outcome>,
    field_width: f32,
    field_height: f32,
    fire_rate: f64,
    max_fire_rate: f64,
}

impl PlaySession {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (barrier_x, barrier_y) = config.barrier_origin;
        let barriers = (0..config.barrier_count)
            .map(|i| {
                Barrier::new(
                    barrier_x + i as f32 * config.barrier_spacing,
                    barrier_y,
                    config.barrier_health,
                )
            })
            .collect();

        Self {
            defender: Defender::spawn(config.field_width, config.field_height),
            formation: Formation::new(config, rng),
            lasers: Vec::new(),
            barriers,
            score: 0,
            lives: config.lives,
            outcome: None,
            field_width: config.field_width,
            field_height: config.field_height,
            fire_rate: config.invader_fire_rate,
            max_fire_rate: config.invader_max_fire_rate,
        }
    }

    pub fn defender(&self) -> &Defender {
        &self.defender
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn lasers(&self) -> &[Laser] {
        &self.lasers
    }

    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// `Some` once the session has ended.
    pub fn summary(&self) -> Option<SessionSummary> {
        self.outcome.map(|outcome| SessionSummary {
            score: self.score,
            outcome,
        })
    }

    /// Movement keys are tracked while held; Space fires once per press.
    pub fn handle_key(&mut self, key: Key, is_down: bool) {
        let flag = match key {
            Key::Left | Key::A => Movement::LEFT,
            Key::Right | Key::D => Movement::RIGHT,
            Key::Space => {
                if is_down {
                    self.fire();
                }
                return;
            }
            _ => return,
        };
        self.defender.movement.set(flag, is_down);
    }

    pub fn fire(&mut self) {
        if self.outcome.is_none() {
            self.lasers.push(self.defender.fire());
        }
    }

    /// Advance the field by one frame.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.outcome.is_some() {
            return;
        }

        self.defender.step(self.field_width);
        self.formation.advance(self.field_width);
        self.advance_lasers(LaserOwner::Defender);
        self.invaders_fire(rng);
        self.advance_lasers(LaserOwner::Invader);

        self.resolve_invader_kills();
        self.resolve_barrier_hits(LaserOwner::Defender, rng);
        self.resolve_barrier_hits(LaserOwner::Invader, rng);
        if self.defender_shot() {
            self.defender_hit();
            return;
        }

        self.resolve_barrier_rams(rng);
        if self.defender_rammed() {
            self.defender_hit();
            return;
        }

        if self.invaders_landed() {
            debug!("Invaders reached the ground");
            self.finish(Outcome::Defeat);
        } else if self.formation.is_empty() {
            self.finish(Outcome::Victory);
        }
    }

    fn advance_lasers(&mut self, owner: LaserOwner) {
        let field_height = self.field_height;
        self.lasers.retain_mut(|laser| {
            if laser.owner != owner {
                return true;
            }
            laser.advance();
            !laser.is_off_screen(field_height)
        });
    }

    /// Every invader rolls independently. The odds scale with losses so the
    /// volume of fire stays roughly constant as the formation thins out.
    fn invaders_fire(&mut self, rng: &mut impl Rng) {
        let remaining = self.formation.len();
        if remaining == 0 {
            return;
        }
        let rate = (self.fire_rate * self.formation.initial() as f64 / remaining as f64)
            .min(self.max_fire_rate);
        for invader in &self.formation.invaders {
            if rng.gen::<f64>() < rate {
                self.lasers.push(invader.fire());
            }
        }
    }

    /// Defender lasers against invaders. Each laser takes out at most the
    /// first invader it overlaps.
    fn resolve_invader_kills(&mut self) {
        let invaders = &mut self.formation.invaders;
        let mut gained = 0;
        self.lasers.retain(|laser| {
            if laser.owner != LaserOwner::Defender {
                return true;
            }
            let rect = laser.rect();
            match invaders.iter().position(|invader| invader.rect().intersects(&rect)) {
                Some(idx) => {
                    gained += invaders.remove(idx).kind.score();
                    false
                }
                None => true,
            }
        });
        self.score = self.score.saturating_add(gained);
    }

    fn resolve_barrier_hits(&mut self, owner: LaserOwner, rng: &mut impl Rng) {
        let barriers = &mut self.barriers;
        self.lasers.retain(|laser| {
            if laser.owner != owner {
                return true;
            }
            let rect = laser.rect();
            match barriers.iter().position(|barrier| barrier.rect().intersects(&rect)) {
                Some(idx) => {
                    damage_barrier(barriers, idx, rng);
                    false
                }
                None => true,
            }
        });
    }

    /// Invaders flying into a barrier are destroyed and damage it. No points.
    fn resolve_barrier_rams(&mut self, rng: &mut impl Rng) {
        let barriers = &mut self.barriers;
        self.formation.invaders.retain(|invader| {
            let rect = invader.rect();
            match barriers.iter().position(|barrier| barrier.rect().intersects(&rect)) {
                Some(idx) => {
                    damage_barrier(barriers, idx, rng);
                    false
                }
                None => true,
            }
        });
    }

    fn defender_shot(&self) -> bool {
        let defender = self.defender.rect();
        self.lasers
            .iter()
            .any(|laser| laser.owner == LaserOwner::Invader && laser.rect().intersects(&defender))
    }

    fn defender_rammed(&self) -> bool {
        let defender = self.defender.rect();
        self.formation
            .invaders
            .iter()
            .any(|invader| invader.rect().intersects(&defender))
    }

    fn invaders_landed(&self) -> bool {
        self.formation
            .invaders
            .iter()
            .any(|invader| invader.rect().bottom() >= self.field_height)
    }

    fn defender_hit(&mut self) {
        debug_assert!(self.lives > 0, "defender hit with no lives left");
        self.lives = self.lives.saturating_sub(1);
        info!("Defender hit, lives remaining: {}", self.lives);

        if self.lives > 0 {
            self.defender.respawn(self.field_width, self.field_height);
            self.lasers.clear();
        } else {
            self.defender.alive = false;
            self.finish(Outcome::Defeat);
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        info!("Session over ({:?}), final score: {}", outcome, self.score);
        self.outcome = Some(outcome);
    }
}

fn damage_barrier(barriers: &mut Vec<Barrier>, idx: usize, rng: &mut impl Rng) {
    barriers[idx].take_damage(rng);
    if barriers[idx].is_destroyed() {
        debug!("Barrier destroyed at x={}", barriers[idx].x);
        barriers.remove(idx);
    }
}
