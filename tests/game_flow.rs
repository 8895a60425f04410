// Integration tests (native) for the `waveslash` crate.
// These tests avoid wasm-specific functionality and exercise the pure game
// core (world, spawner, per-frame step) so they run under `cargo test` on
// the host. Spawn positions are random by design: tests assert counts and
// bounds, never exact coordinates.

use waveslash::arena::input::InputSnapshot;
use waveslash::arena::step::advance;
use waveslash::arena::world::{Enemy, World};
use waveslash::{ENEMY_SIZE, TILE_SIZE, WAVE_BASE};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn attack() -> InputSnapshot {
    InputSnapshot { attack: true, ..Default::default() }
}

fn enemy_at(x: f64, y: f64) -> Enemy {
    Enemy { x, y, width: ENEMY_SIZE, height: ENEMY_SIZE }
}

#[test]
fn every_spawn_event_produces_a_full_in_bounds_wave() {
    let mut world = World::new(1024.0, 768.0, 99);
    for level in 1..=8u32 {
        world.player.level = level;
        world.spawn_wave();
        assert_eq!(world.enemies.len(), WAVE_BASE + level as usize);
        for enemy in &world.enemies {
            assert!(
                enemy.x >= 0.0 && enemy.x <= 1024.0 - ENEMY_SIZE,
                "level {} enemy x {} out of bounds",
                level,
                enemy.x
            );
            assert!(
                enemy.y >= 0.0 && enemy.y <= 768.0 - ENEMY_SIZE,
                "level {} enemy y {} out of bounds",
                level,
                enemy.y
            );
        }
    }
}

#[test]
fn tile_grid_covers_the_viewport_without_gaps_or_overlaps() {
    // Both an exact multiple and a ragged viewport.
    for (w, h) in [(W, H), (810.0, 601.0)] {
        let world = World::new(w, h, 3);
        let cols = (w / TILE_SIZE).ceil() as usize;
        let rows = (h / TILE_SIZE).ceil() as usize;
        assert_eq!(world.tiles.len(), cols * rows, "viewport {w}x{h}");
        let mut seen = std::collections::HashSet::new();
        for tile in &world.tiles {
            assert_eq!(tile.x % TILE_SIZE, 0.0);
            assert_eq!(tile.y % TILE_SIZE, 0.0);
            assert!(tile.x < w && tile.y < h);
            assert!(
                seen.insert((tile.x as i64, tile.y as i64)),
                "duplicate tile at ({}, {})",
                tile.x,
                tile.y
            );
        }
    }
}

// The spec's first end-to-end scenario: one kill scores 10 and leaves the
// wave short by one; clearing the wave levels up and respawns the same
// frame.
#[test]
fn kills_score_and_clearing_the_wave_levels_up_same_frame() {
    let mut world = World::new(W, H, 11);
    assert_eq!(world.player.level, 1);
    assert_eq!(world.player.health, 100);
    assert_eq!(world.player.score, 0);
    assert_eq!(world.enemies.len(), 6);

    let (px, py) = (world.player.x, world.player.y);
    // One enemy on the player, five parked far away.
    world.enemies = vec![
        enemy_at(px, py),
        enemy_at(700.0, 500.0),
        enemy_at(100.0, 500.0),
        enemy_at(700.0, 100.0),
        enemy_at(100.0, 100.0),
        enemy_at(600.0, 300.0),
    ];

    let mut now = 0.0;
    advance(&mut world, &attack(), now);
    assert_eq!(world.player.score, 10);
    assert_eq!(world.enemies.len(), 5);
    assert_eq!(world.player.level, 1);

    // Walk the remaining five onto the sword one frame at a time.
    for kill in 1..=5 {
        now += 16.0;
        world.enemies[0].x = world.player.x;
        world.enemies[0].y = world.player.y;
        advance(&mut world, &attack(), now);
        if kill < 5 {
            assert_eq!(world.enemies.len(), 5 - kill);
            assert_eq!(world.player.level, 1);
        }
    }

    // The last kill emptied the wave: level up and a full respawn, same tick.
    assert_eq!(world.player.level, 2);
    assert_eq!(world.player.score, 60);
    assert_eq!(world.enemies.len(), WAVE_BASE + 2);
    // Each kill frame also cost contact damage (the sword sits inside the
    // player box, so a struck enemy always grazes the player that frame).
    assert_eq!(world.player.health, 40);
    assert!(!world.game_over);
}

// The spec's second end-to-end scenario: simultaneous overlaps multiply
// damage in one tick, health clamps at zero and the terminal flag sticks.
#[test]
fn triple_overlap_clamps_health_to_zero_and_terminates() {
    let mut world = World::new(W, H, 5);
    world.player.health = 25;
    let (px, py) = (world.player.x, world.player.y);
    world.enemies = vec![enemy_at(px, py), enemy_at(px + 8.0, py), enemy_at(px, py + 8.0)];

    advance(&mut world, &InputSnapshot::default(), 0.0);
    assert_eq!(world.player.health, 0, "health must clamp, not go to -5");
    assert!(world.game_over);

    // Terminal is monotonic: further ticks mutate nothing.
    let score = world.player.score;
    let level = world.player.level;
    let count = world.enemies.len();
    for frame in 1..=3 {
        advance(&mut world, &attack(), frame as f64 * 16.0);
        assert!(world.game_over);
        assert_eq!(world.player.health, 0);
        assert_eq!(world.player.score, score);
        assert_eq!(world.player.level, level);
        assert_eq!(world.enemies.len(), count);
    }
}

#[test]
fn resize_regrids_tiles_but_leaves_entities_alone() {
    let mut world = World::new(W, H, 21);
    let player_pos = (world.player.x, world.player.y);
    let enemy_pos: Vec<(f64, f64)> = world.enemies.iter().map(|e| (e.x, e.y)).collect();

    world.resize(416.0, 320.0);
    assert_eq!(world.tiles.len(), 13 * 10);
    assert_eq!((world.player.x, world.player.y), player_pos);
    let after: Vec<(f64, f64)> = world.enemies.iter().map(|e| (e.x, e.y)).collect();
    assert_eq!(enemy_pos, after, "enemies are not repositioned on resize");
}

// Pins the open product question: player movement is not clamped to the
// viewport.
#[test]
fn player_may_walk_off_canvas() {
    let mut world = World::new(W, H, 2);
    // Park the wave so nothing catches the player mid-walk.
    for enemy in &mut world.enemies {
        enemy.x = 790.0;
        enemy.y = 590.0;
    }
    let left = InputSnapshot { left: true, ..Default::default() };
    for frame in 0..100 {
        advance(&mut world, &left, frame as f64 * 16.0);
    }
    assert!(world.player.x < 0.0, "x={} should be off-canvas", world.player.x);
    assert_eq!(world.player.health, 100);
    assert!(!world.game_over);
}
