//! All game entity types — plain data, no orchestration logic.

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Every drawable kind in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Robot,
    Coin,
    Monster,
}

/// Fixed width/height of a sprite, in simulation pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: i32,
    pub height: i32,
}

/// Per-kind sprite dimensions, fixed at startup and queried by both the
/// simulation (collision rects, spawn ranges) and the renderer (scaling).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteTable {
    pub robot: SpriteSize,
    pub coin: SpriteSize,
    pub monster: SpriteSize,
}

impl SpriteTable {
    pub fn size(&self, kind: SpriteKind) -> SpriteSize {
        match kind {
            SpriteKind::Robot => self.robot,
            SpriteKind::Coin => self.coin,
            SpriteKind::Monster => self.monster,
        }
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        SpriteTable {
            robot: SpriteSize { width: 40, height: 60 },
            coin: SpriteSize { width: 20, height: 20 },
            monster: SpriteSize { width: 32, height: 40 },
        }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, top-left anchored, in simulation pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

// ── Falling objects ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Coin,
    Monster,
}

/// One falling sprite. Value-like: no identity beyond position + kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallingObject {
    pub x: i32,
    pub y: i32,
}

/// Ordered collection of falling objects of a single kind.
/// Insertion order is preserved across advances.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FallingObjectSet {
    pub kind: ObjectKind,
    pub objects: Vec<FallingObject>,
}

impl FallingObjectSet {
    pub fn empty(kind: ObjectKind) -> Self {
        FallingObjectSet {
            kind,
            objects: Vec::new(),
        }
    }
}

/// What one advance pass produced, folded into score/lives by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub score_delta: u32,
    pub missed_delta: u32,
    pub player_hit: bool,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    /// Fixed, bottom-aligned: `screen_height − robot.height`.
    pub y: i32,
    pub moving_left: bool,
    pub moving_right: bool,
    pub lives: u32,
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Restart,
    Quit,
}

/// Discrete input event delivered by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(GameKey),
    KeyUp(GameKey),
    WindowClose,
}

/// Signal propagated back to the outer loop instead of exiting in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Terminate,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a
/// new copy without mutating the original; each clone is an atomic snapshot
/// for the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub player: Player,
    pub coins: FallingObjectSet,
    pub monsters: FallingObjectSet,
    pub score: u32,
    /// Coins that reached the bottom uncollected; drives monster speed.
    pub missed_coins: u32,
    /// Monotonic timestamp of the last spawn window, in ms.
    pub last_spawn_ms: u64,
    pub width: i32,
    pub height: i32,
    pub sprites: SpriteTable,
}
