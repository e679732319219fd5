use bitflags::bitflags;
use invasion_common::Color;
use rand::Rng;

/// Axis-aligned rectangle in playfield pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test. Rectangles that only share an edge do not collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

bitflags! {
    /// Movement keys currently held down.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Movement: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LaserOwner {
    Defender,
    Invader,
}

#[derive(Copy, Clone, Debug)]
struct LaserStyle {
    w: f32,
    h: f32,
    /// Vertical pixels per tick, negative is upward.
    dy: f32,
    color: Color,
}

const DEFENDER_LASER: LaserStyle = LaserStyle {
    w: 5.0,
    h: 10.0,
    dy: -7.0,
    color: Color::WHITE,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    pub dy: f32,
    pub w: f32,
    pub h: f32,
    pub color: Color,
    pub owner: LaserOwner,
}

impl Laser {
    fn new(x: f32, y: f32, style: LaserStyle, owner: LaserOwner) -> Self {
        Self {
            x,
            y,
            dy: style.dy,
            w: style.w,
            h: style.h,
            color: style.color,
            owner,
        }
    }

    pub fn advance(&mut self) {
        self.y += self.dy;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn is_off_screen(&self, field_height: f32) -> bool {
        self.y < 0.0 || self.y > field_height
    }
}

pub const DEFENDER_WIDTH: f32 = 60.0;
pub const DEFENDER_HEIGHT: f32 = 50.0;
pub const DEFENDER_SPEED: f32 = 5.0;
/// Distance from the bottom of the field to the defender's top edge.
const DEFENDER_ELEVATION: f32 = 80.0;

#[derive(Clone, Debug)]
pub struct Defender {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
    pub movement: Movement,
}

impl Defender {
    pub fn spawn(field_width: f32, field_height: f32) -> Self {
        let mut defender = Self {
            x: 0.0,
            y: 0.0,
            alive: true,
            movement: Movement::empty(),
        };
        defender.respawn(field_width, field_height);
        defender
    }

    /// Return to the bottom centre of the field. Held keys stay held.
    pub fn respawn(&mut self, field_width: f32, field_height: f32) {
        self.x = (field_width / 2.0 - DEFENDER_WIDTH / 2.0).floor();
        self.y = field_height - DEFENDER_ELEVATION;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, DEFENDER_WIDTH, DEFENDER_HEIGHT)
    }

    pub fn step(&mut self, field_width: f32) {
        if self.movement.contains(Movement::LEFT) {
            self.x = (self.x - DEFENDER_SPEED).max(0.0);
        }
        if self.movement.contains(Movement::RIGHT) {
            self.x = (self.x + DEFENDER_SPEED).min(field_width - DEFENDER_WIDTH);
        }
    }

    /// A laser leaving the defender's top centre.
    pub fn fire(&self) -> Laser {
        let x = (self.x + DEFENDER_WIDTH / 2.0).floor();
        Laser::new(x, self.y, DEFENDER_LASER, LaserOwner::Defender)
    }
}

pub const INVADER_WIDTH: f32 = 35.0;
pub const INVADER_HEIGHT: f32 = 67.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvaderKind {
    Trooper,
    Gunner,
    Wraith,
}

impl InvaderKind {
    pub const ALL: [InvaderKind; 3] = [InvaderKind::Trooper, InvaderKind::Gunner, InvaderKind::Wraith];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Points awarded for destroying one invader of this kind.
    pub fn score(self) -> u32 {
        match self {
            InvaderKind::Trooper => 5,
            InvaderKind::Gunner => 15,
            InvaderKind::Wraith => 25,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            InvaderKind::Trooper => "Trooper",
            InvaderKind::Gunner => "Gunner",
            InvaderKind::Wraith => "Wraith",
        }
    }

    /// Sprite tint.
    pub fn color(self) -> Color {
        match self {
            InvaderKind::Trooper => Color::new_rgb(190, 190, 200),
            InvaderKind::Gunner => Color::new_rgb(205, 160, 60),
            InvaderKind::Wraith => Color::new_rgb(160, 175, 160),
        }
    }

    fn laser(self) -> LaserStyle {
        let color = match self {
            InvaderKind::Trooper => Color::BLUE,
            InvaderKind::Gunner => Color::RED,
            InvaderKind::Wraith => Color::PURPLE,
        };
        LaserStyle {
            w: 4.0,
            h: 8.0,
            dy: 3.0,
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub kind: InvaderKind,
}

impl Invader {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, INVADER_WIDTH, INVADER_HEIGHT)
    }

    /// A laser leaving the invader's bottom centre.
    pub fn fire(&self) -> Laser {
        let x = (self.x + INVADER_WIDTH / 2.0).floor();
        Laser::new(x, self.y + INVADER_HEIGHT, self.kind.laser(), LaserOwner::Invader)
    }
}

pub const BARRIER_WIDTH: f32 = 100.0;
pub const BARRIER_HEIGHT: f32 = 24.0;

/// A scorch painted over a barrier, relative to its top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DamageMark {
    pub dx: i32,
    pub dy: i32,
    pub radius: i32,
}

#[derive(Clone, Debug)]
pub struct Barrier {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub marks: Vec<DamageMark>,
}

impl Barrier {
    pub fn new(x: f32, y: f32, health: u32) -> Self {
        Self {
            x,
            y,
            health,
            marks: Vec::new(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BARRIER_WIDTH, BARRIER_HEIGHT)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Lose one point of health. A surviving barrier gains a few more scorch
    /// marks so wear stays visible.
    pub fn take_damage(&mut self, rng: &mut impl Rng) {
        debug_assert!(self.health > 0, "destroyed barrier took damage");
        self.health = self.health.saturating_sub(1);
        if self.is_destroyed() {
            return;
        }

        let (w, h) = (BARRIER_WIDTH as i32, BARRIER_HEIGHT as i32);
        for _ in 0..rng.gen_range(3..=6) {
            self.marks.push(DamageMark {
                dx: rng.gen_range(5..=w - 5),
                dy: rng.gen_range(2..=h - 2),
                radius: rng.gen_range(4..=10),
            });
        }
    }
}
