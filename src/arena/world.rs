//! World state and the spawner.
//!
//! `World` is the single context object threaded through the update,
//! collision and render passes. It owns every entity, the session RNG and
//! the terminal flag; nothing gameplay-related lives in globals. No platform
//! types appear here, so the whole module runs under native `cargo test`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::{ENEMY_SIZE, MAX_HEALTH, PLAYER_SIZE, SWORD_HEIGHT, SWORD_WIDTH, TILE_SIZE, WAVE_BASE};

/// Axis-aligned bounding box used for all collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    /// Strict-inequality overlap: boxes that only share an edge do not hit.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// The player avatar. Never removed; a lost session ends with the terminal
/// flag set, not with the player being destroyed.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub health: i32,
    pub score: u32,
    pub level: u32,
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// One wave member. Chases the player; removed individually on defeat.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// Decorative background cell. No identity beyond its position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub x: f64,
    pub y: f64,
}

/// The melee weapon. Snaps to the player's center on attack; the swing ends
/// when the frame clock passes `expires_at_ms`, checked synchronously inside
/// the update step (no detached timer exists).
#[derive(Debug, Clone)]
pub struct Sword {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub active: bool,
    pub expires_at_ms: f64,
}

impl Sword {
    pub fn bounds(&self) -> Aabb {
        Aabb { x: self.x, y: self.y, width: self.width, height: self.height }
    }
}

/// One game session: viewport, entities, session RNG, terminal flag.
pub struct World {
    pub width: f64,
    pub height: f64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub tiles: Vec<Tile>,
    pub sword: Sword,
    pub game_over: bool,
    rng: Pcg32,
}

impl World {
    /// Fresh session: player centered, first wave spawned, tiles laid.
    ///
    /// The seed comes from the caller; the shell passes the wall clock, so
    /// spawn positions stay non-reproducible across sessions, while tests
    /// can pass any constant.
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut world = World {
            width,
            height,
            player: Player {
                x: width / 2.0 - PLAYER_SIZE / 2.0,
                y: height / 2.0 - PLAYER_SIZE / 2.0,
                width: PLAYER_SIZE,
                height: PLAYER_SIZE,
                health: MAX_HEALTH,
                score: 0,
                level: 1,
            },
            enemies: Vec::new(),
            tiles: Vec::new(),
            // Parked off-canvas until the first swing.
            sword: Sword {
                x: -50.0,
                y: -50.0,
                width: SWORD_WIDTH,
                height: SWORD_HEIGHT,
                active: false,
                expires_at_ms: 0.0,
            },
            game_over: false,
            rng: Pcg32::seed_from_u64(seed),
        };
        world.spawn_wave();
        world.rebuild_tiles();
        world
    }

    /// Replace the enemy list with a full wave of `WAVE_BASE + level`
    /// enemies, each at a uniformly random position inside the viewport.
    /// A collapsed axis places enemies at 0 rather than panicking the RNG.
    pub fn spawn_wave(&mut self) {
        let count = WAVE_BASE + self.player.level as usize;
        let span_x = (self.width - ENEMY_SIZE).max(0.0);
        let span_y = (self.height - ENEMY_SIZE).max(0.0);
        self.enemies.clear();
        for _ in 0..count {
            let x = if span_x > 0.0 { self.rng.random_range(0.0..span_x) } else { 0.0 };
            let y = if span_y > 0.0 { self.rng.random_range(0.0..span_y) } else { 0.0 };
            self.enemies.push(Enemy { x, y, width: ENEMY_SIZE, height: ENEMY_SIZE });
        }
    }

    /// Replace the tile grid with one tile per `TILE_SIZE`-aligned cell
    /// covering `[0, width) x [0, height)`, outer loop over x.
    pub fn rebuild_tiles(&mut self) {
        self.tiles.clear();
        let mut x = 0.0;
        while x < self.width {
            let mut y = 0.0;
            while y < self.height {
                self.tiles.push(Tile { x, y });
                y += TILE_SIZE;
            }
            x += TILE_SIZE;
        }
    }

    /// Viewport change: tiles regrid; player and enemies keep their
    /// positions even if the new bounds no longer contain them.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.rebuild_tiles();
    }
}
