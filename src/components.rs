use glam::Vec2;

use crate::constants::*;

/// Axis-aligned hitbox in pixel space; `x, y` is the top-left corner.
/// Every entity owns exactly one - position is never stored separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Tile row of the hitbox bottom edge (the row the entity stands in)
    pub fn floor_row(&self) -> i32 {
        ((self.bottom() - 1.0) / TILE_SIZE) as i32
    }

    /// Tile column of the hitbox center
    pub fn tile_col(&self) -> i32 {
        (self.center_x() / TILE_SIZE) as i32
    }
}

/// Health component
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// Vertical motion state shared by the player and enemies
#[derive(Debug, Clone, Copy)]
pub struct Kinematics {
    pub in_air: bool,
    /// Signed vertical velocity accumulator (positive = falling)
    pub air_speed: f32,
    /// Floor probe pending for the first update after spawn
    pub first_update: bool,
}

impl Kinematics {
    pub fn new() -> Self {
        Self {
            in_air: false,
            air_speed: 0.0,
            first_update: true,
        }
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-entity frame clock: advances a sprite index at a fixed tick rate
/// and reports cycle completion to the owning state machine.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    pub tick: u32,
    pub index: u32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self { tick: 0, index: 0 }
    }

    /// Advance by one tick; returns true exactly when the cycle wraps back
    /// to frame 0. `frame_count` must be at least 1.
    pub fn advance(&mut self, frame_count: u32) -> bool {
        self.tick += 1;
        if self.tick < ANI_SPEED {
            return false;
        }
        self.tick = 0;
        self.index += 1;
        if self.index >= frame_count {
            self.index = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.tick = 0;
        self.index = 0;
    }

    /// Restart the cycle on a given frame (DRAW skips its wind-up frame)
    pub fn reset_to(&mut self, frame: u32) {
        self.tick = 0;
        self.index = frame;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Player animation/behavior states, in render-sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Running,
    JumpStart,
    Fall,
    Draw,
    Dash,
    Damage,
    Die,
}

/// Enemy animation/behavior states, in render-sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Idle,
    Running,
    Attack,
    Hit,
    Dead,
}

/// The closed set of enemy variants; per-kind behavior is data in
/// `constants::enemies`, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Skeleton,
    SkeletonKing,
}

/// Player-only control state
#[derive(Debug)]
pub struct PlayerPawn {
    pub state: PlayerState,
    /// Facing sign: 1 = right, -1 = left
    pub flip_w: f32,
    pub attacking: bool,
    /// Arrow already spawned during the current DRAW cycle
    pub attack_checked: bool,
    /// Committed attack target point, consumed on the spawn frame
    pub aim: Option<Vec2>,
    pub jumps_used: u32,
    pub dashing: bool,
    pub hurting: bool,
    pub killed: bool,
    /// Death animation finished and game-over has been signalled
    pub death_done: bool,
    /// Previous tick's jump intent, for press-edge detection
    pub jump_was_down: bool,
}

impl PlayerPawn {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
            flip_w: 1.0,
            attacking: false,
            attack_checked: false,
            aim: None,
            jumps_used: 0,
            dashing: false,
            hurting: false,
            killed: false,
            death_done: false,
            jump_was_down: false,
        }
    }
}

impl Default for PlayerPawn {
    fn default() -> Self {
        Self::new()
    }
}

/// Enemy control state shared by both kinds
#[derive(Debug)]
pub struct EnemyPawn {
    pub kind: EnemyKind,
    pub state: EnemyState,
    /// Walk direction sign: 1 = right, -1 = left
    pub walk_dir: f32,
    /// Tile row recorded when the enemy last landed; perception is
    /// restricted to this row
    pub grounded_row: i32,
    /// Hit check already ran during the current ATTACK cycle
    pub attack_checked: bool,
    pub hurting: bool,
    /// Health reached zero (flips immediately; `active` flips later)
    pub killed: bool,
    /// False once the death animation has finished; the manager then
    /// removes the entity from the simulation
    pub active: bool,
}

impl EnemyPawn {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            state: EnemyState::Idle,
            walk_dir: -1.0,
            grounded_row: 0,
            attack_checked: false,
            hurting: false,
            killed: false,
            active: true,
        }
    }
}

/// Damage contact rectangle, repositioned every tick relative to the
/// owning enemy's hitbox - never moved independently.
#[derive(Debug, Clone, Copy)]
pub struct AttackBox(pub Hitbox);

/// Arrow motion parameters, immutable after spawn
#[derive(Debug, Clone, Copy)]
pub struct Arrow {
    /// Rise/fall ratio of the flight line
    pub slope: f32,
    /// Signed horizontal speed, solved so diagonal speed is constant
    pub x_speed: f32,
}
