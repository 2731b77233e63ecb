//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! value.  Side effects are limited to the injected RNG, so a seeded
//! `StdRng` makes every run reproducible in tests.

use rand::Rng;

use crate::config::Config;
use crate::entities::{
    AdvanceOutcome, FallingObject, FallingObjectSet, GameKey, GameState, InputEvent, LoopSignal,
    ObjectKind, Player, Rect, SpriteSize, SpriteTable,
};

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Horizontal pixels the robot moves per frame while a direction key is held.
pub const PLAYER_STEP: i32 = 2;

/// Vertical pixels a coin falls per frame; also the base of the monster
/// speed formula.
pub const BASE_SPEED: i32 = 1;

/// Length of the spawn window: both spawn draws happen once per window.
pub const SPAWN_INTERVAL_MS: u64 = 1000;

pub const COIN_SPAWN_PROB: f64 = 0.25;
pub const MONSTER_SPAWN_PROB: f64 = 0.5;

pub const STARTING_LIVES: u32 = 3;

/// Monster fall speed, scaled by the number of coins the player has let
/// through: `BASE_SPEED * 2 + missed_coins / 2` (integer division).
pub fn monster_speed(missed_coins: u32) -> i32 {
    BASE_SPEED * 2 + (missed_coins / 2) as i32
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle overlap; touching edges do not count.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for validated display bounds.
pub fn new_game(config: &Config) -> GameState {
    fresh_state(config.display_width, config.display_height, config.sprites)
}

fn fresh_state(width: i32, height: i32, sprites: SpriteTable) -> GameState {
    GameState {
        player: Player {
            x: 0,
            y: height - sprites.robot.height,
            moving_left: false,
            moving_right: false,
            lives: STARTING_LIVES,
        },
        coins: FallingObjectSet::empty(ObjectKind::Coin),
        monsters: FallingObjectSet::empty(ObjectKind::Monster),
        score: 0,
        missed_coins: 0,
        last_spawn_ms: 0,
        width,
        height,
        sprites,
    }
}

/// Game is over when the player has no lives left.  Pure predicate; the
/// simulation freezes while this holds but rendering continues.
pub fn game_over(state: &GameState) -> bool {
    state.player.lives == 0
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// React to one input event.  Movement keys toggle the player's flags,
/// restart rebuilds a fresh game unconditionally (even mid game-over), and
/// quit/window-close request termination — the outer loop observes the
/// signal and exits; nothing here tears the process down.
pub fn handle_event(state: &GameState, event: &InputEvent) -> (GameState, LoopSignal) {
    match event {
        InputEvent::KeyDown(GameKey::Left) => (
            with_player(state, Player { moving_left: true, ..state.player }),
            LoopSignal::Continue,
        ),
        InputEvent::KeyDown(GameKey::Right) => (
            with_player(state, Player { moving_right: true, ..state.player }),
            LoopSignal::Continue,
        ),
        InputEvent::KeyUp(GameKey::Left) => (
            with_player(state, Player { moving_left: false, ..state.player }),
            LoopSignal::Continue,
        ),
        InputEvent::KeyUp(GameKey::Right) => (
            with_player(state, Player { moving_right: false, ..state.player }),
            LoopSignal::Continue,
        ),
        InputEvent::KeyDown(GameKey::Restart) => {
            // The spawn timer survives a restart so the cadence is unbroken.
            let fresh = fresh_state(state.width, state.height, state.sprites);
            (
                GameState {
                    last_spawn_ms: state.last_spawn_ms,
                    ..fresh
                },
                LoopSignal::Continue,
            )
        }
        InputEvent::KeyDown(GameKey::Quit) | InputEvent::WindowClose => {
            (state.clone(), LoopSignal::Terminate)
        }
        InputEvent::KeyUp(_) => (state.clone(), LoopSignal::Continue),
    }
}

fn with_player(state: &GameState, player: Player) -> GameState {
    GameState {
        player,
        ..state.clone()
    }
}

// ── Player movement ──────────────────────────────────────────────────────────

/// Apply the movement flags for one frame.  The bound is checked against the
/// *current* position before stepping (`x + width < screen_width` for right,
/// `x > 0` for left), so out-of-bound steps are simply not applied.
pub fn update_player(player: &Player, robot: SpriteSize, screen_width: i32) -> Player {
    let mut x = player.x;
    if player.moving_right && x + robot.width < screen_width {
        x += PLAYER_STEP;
    }
    if player.moving_left && x > 0 {
        x -= PLAYER_STEP;
    }
    Player { x, ..*player }
}

/// Send the robot back to the bottom-left corner with both movement flags
/// cleared.  Used on new game and whenever a monster catches the player.
pub fn reset_player(player: &Player, screen_height: i32, robot: SpriteSize) -> Player {
    Player {
        x: 0,
        y: screen_height - robot.height,
        moving_left: false,
        moving_right: false,
        lives: player.lives,
    }
}

// ── Falling objects ──────────────────────────────────────────────────────────

/// With probability `probability`, append a new object at a uniform-random
/// x in `[0, screen_width − size.width]`, fully above the visible area.
pub fn spawn_object(
    set: &FallingObjectSet,
    probability: f64,
    screen_width: i32,
    size: SpriteSize,
    rng: &mut impl Rng,
) -> FallingObjectSet {
    if rng.gen::<f64>() <= probability {
        let x = rng.gen_range(0..=screen_width - size.width);
        let mut objects = set.objects.clone();
        objects.push(FallingObject {
            x,
            y: -size.height,
        });
        FallingObjectSet {
            kind: set.kind,
            objects,
        }
    } else {
        set.clone()
    }
}

/// Advance every member one frame, in insertion order: prune objects whose
/// top edge has crossed the bottom of the screen (coins count as missed —
/// pruning takes priority over collision), collect/strike on intersection
/// with the player, and move everything else down by `speed`.
///
/// Survivors are appended to a fresh vector rather than removed in place,
/// so a removal never skips the following member and relative order is
/// preserved.
pub fn advance_objects(
    set: &FallingObjectSet,
    size: SpriteSize,
    player_rect: &Rect,
    speed: i32,
    screen_height: i32,
) -> (FallingObjectSet, AdvanceOutcome) {
    let mut retained = Vec::with_capacity(set.objects.len());
    let mut outcome = AdvanceOutcome::default();

    for object in &set.objects {
        if object.y >= screen_height {
            if set.kind == ObjectKind::Coin {
                outcome.missed_delta += 1;
            }
            continue;
        }

        let object_rect = Rect {
            x: object.x,
            y: object.y,
            width: size.width,
            height: size.height,
        };
        if intersects(&object_rect, player_rect) {
            match set.kind {
                ObjectKind::Coin => outcome.score_delta += 1,
                ObjectKind::Monster => outcome.player_hit = true,
            }
            continue;
        }

        retained.push(FallingObject {
            x: object.x,
            y: object.y + speed,
        });
    }

    (
        FallingObjectSet {
            kind: set.kind,
            objects: retained,
        },
        outcome,
    )
}

// ── Per-frame step (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.  `now_ms` is the front end's
/// monotonic clock; spawn draws happen once per elapsed 1000 ms window.
/// A finished game freezes: the state is returned unchanged.
pub fn step(state: &GameState, now_ms: u64, rng: &mut impl Rng) -> GameState {
    if game_over(state) {
        return state.clone();
    }

    let robot = state.sprites.robot;

    // ── 1. Spawn window ──────────────────────────────────────────────────────
    let (coins, monsters, last_spawn_ms) =
        if now_ms.saturating_sub(state.last_spawn_ms) >= SPAWN_INTERVAL_MS {
            (
                spawn_object(&state.coins, COIN_SPAWN_PROB, state.width, state.sprites.coin, rng),
                spawn_object(
                    &state.monsters,
                    MONSTER_SPAWN_PROB,
                    state.width,
                    state.sprites.monster,
                    rng,
                ),
                now_ms,
            )
        } else {
            (state.coins.clone(), state.monsters.clone(), state.last_spawn_ms)
        };

    // ── 2. Player movement ───────────────────────────────────────────────────
    let mut player = update_player(&state.player, robot, state.width);
    let player_rect = Rect {
        x: player.x,
        y: player.y,
        width: robot.width,
        height: robot.height,
    };

    // ── 3. + 4. Advance both sets ────────────────────────────────────────────
    // Monster speed uses the missed count as of the start of the frame.
    let speed = monster_speed(state.missed_coins);
    let (coins, coin_outcome) =
        advance_objects(&coins, state.sprites.coin, &player_rect, BASE_SPEED, state.height);
    let (monsters, monster_outcome) =
        advance_objects(&monsters, state.sprites.monster, &player_rect, speed, state.height);

    // ── 5. Fold the deltas ───────────────────────────────────────────────────
    let score = state.score + coin_outcome.score_delta;
    let missed_coins = state.missed_coins + coin_outcome.missed_delta;

    // ── 6. Monster strike: back to the corner, one life down ─────────────────
    if monster_outcome.player_hit {
        player = reset_player(&player, state.height, robot);
        player.lives = player.lives.saturating_sub(1);
    }

    GameState {
        player,
        coins,
        monsters,
        score,
        missed_coins,
        last_spawn_ms,
        ..state.clone()
    }
}
