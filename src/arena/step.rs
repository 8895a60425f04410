//! The per-frame update and collision passes.
//!
//! Pure: no platform types, no clock beyond the timestamp the loop driver
//! hands in. One call to [`advance`] is one whole frame of game logic;
//! rendering happens afterwards in the shell.

use super::input::InputSnapshot;
use super::world::{Enemy, Player, Sword, World};
use crate::{CONTACT_DAMAGE, ENEMY_SPEED, KILL_SCORE, MOVE_SPEED, SWORD_SWING_MS};

/// Advance the world by one frame: player movement, sword window, enemy
/// chase, then the collision pass. `now_ms` is the frame timestamp from the
/// scheduler. A no-op once the terminal flag is set: late input or a stale
/// snapshot after game-over is tolerated, never an error.
pub fn advance(world: &mut World, input: &InputSnapshot, now_ms: f64) {
    if world.game_over {
        return;
    }
    update_player(&mut world.player, input);
    update_sword(&mut world.sword, &world.player, input, now_ms);
    update_enemies(&mut world.enemies, &world.player);
    check_collisions(world);
}

fn update_player(player: &mut Player, input: &InputSnapshot) {
    // No clamping to the viewport; the player may walk off-canvas.
    // Open product question, preserved as observed.
    if input.left {
        player.x -= MOVE_SPEED;
    }
    if input.right {
        player.x += MOVE_SPEED;
    }
    if input.up {
        player.y -= MOVE_SPEED;
    }
    if input.down {
        player.y += MOVE_SPEED;
    }
}

fn update_sword(sword: &mut Sword, player: &Player, input: &InputSnapshot, now_ms: f64) {
    if sword.active && now_ms >= sword.expires_at_ms {
        sword.active = false;
    }
    if input.attack {
        sword.x = player.x + player.width / 2.0 - sword.width / 2.0;
        sword.y = player.y + player.height / 2.0 - sword.height / 2.0;
        sword.active = true;
        // Holding attack refreshes the window every frame, so the swing
        // lasts until SWORD_SWING_MS after the last frame that saw input.
        sword.expires_at_ms = now_ms + SWORD_SWING_MS;
    }
}

fn update_enemies(enemies: &mut [Enemy], player: &Player) {
    // Greedy per-axis chase, never normalized: a diagonal approach runs at
    // ENEMY_SPEED * sqrt(2). Enemies ignore each other and may overlap.
    for enemy in enemies {
        if player.x < enemy.x {
            enemy.x -= ENEMY_SPEED;
        }
        if player.x > enemy.x {
            enemy.x += ENEMY_SPEED;
        }
        if player.y < enemy.y {
            enemy.y -= ENEMY_SPEED;
        }
        if player.y > enemy.y {
            enemy.y += ENEMY_SPEED;
        }
    }
}

/// One deterministic scan over the enemy list in order, then compaction.
///
/// Both tests run against the pre-compaction list, so a sword-killed enemy
/// still deals its contact damage on its final frame. The freshly spawned
/// wave after a clear is not scanned again until the next frame.
fn check_collisions(world: &mut World) {
    let sword_box = world.sword.bounds();
    let player_box = world.player.bounds();
    let mut defeated = vec![false; world.enemies.len()];

    for (i, enemy) in world.enemies.iter().enumerate() {
        let enemy_box = enemy.bounds();
        if world.sword.active && sword_box.overlaps(&enemy_box) {
            defeated[i] = true;
            world.player.score += KILL_SCORE;
        }
        if player_box.overlaps(&enemy_box) {
            world.player.health -= CONTACT_DAMAGE;
        }
    }

    world.enemies = world
        .enemies
        .iter()
        .zip(&defeated)
        .filter(|&(_, &dead)| !dead)
        .map(|(enemy, _)| enemy.clone())
        .collect();

    if world.player.health <= 0 {
        world.player.health = 0;
        world.game_over = true;
    }

    if world.enemies.is_empty() {
        world.player.level += 1;
        world.spawn_wave();
    }
}
