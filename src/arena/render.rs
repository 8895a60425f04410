//! Canvas rendering.
//!
//! Immediate-mode drawing over `CanvasRenderingContext2d` in a fixed order.
//! Every fallible draw call ends in `.ok()`: a draw that fails (typically an
//! image still loading) degrades to missing pixels, never a crash.

use web_sys::CanvasRenderingContext2d;

use super::assets::Assets;
use super::world::World;
use crate::TILE_SIZE;

const HUD_COLOR: &str = "#ffffff";
const HUD_FONT: &str = "18px Arial";
const GAME_OVER_FONT: &str = "48px Arial";
const HEALTH_ICON_SIZE: f64 = 18.0;

/// One running-state frame: clear, tiles, player, enemies, sword (only
/// while active), then the HUD overlay.
pub fn draw_frame(ctx: &CanvasRenderingContext2d, world: &World, assets: &Assets) {
    ctx.clear_rect(0.0, 0.0, world.width, world.height);

    for tile in &world.tiles {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.tile,
            tile.x,
            tile.y,
            TILE_SIZE,
            TILE_SIZE,
        )
        .ok();
    }

    let player = &world.player;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &assets.player,
        player.x,
        player.y,
        player.width,
        player.height,
    )
    .ok();

    for enemy in &world.enemies {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.enemy,
            enemy.x,
            enemy.y,
            enemy.width,
            enemy.height,
        )
        .ok();
    }

    if world.sword.active {
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &assets.sword,
            world.sword.x,
            world.sword.y,
            world.sword.width,
            world.sword.height,
        )
        .ok();
    }

    draw_hud(ctx, world, assets);
}

/// Three left-aligned text lines; the health icon sits beside its line.
fn draw_hud(ctx: &CanvasRenderingContext2d, world: &World, assets: &Assets) {
    ctx.set_fill_style_str(HUD_COLOR);
    ctx.set_font(HUD_FONT);
    ctx.set_text_align("left");
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        &assets.health,
        10.0,
        30.0 - HEALTH_ICON_SIZE + 2.0,
        HEALTH_ICON_SIZE,
        HEALTH_ICON_SIZE,
    )
    .ok();
    ctx.fill_text(&format!("Health: {}", world.player.health), 34.0, 30.0).ok();
    ctx.fill_text(&format!("Score: {}", world.player.score), 10.0, 50.0).ok();
    ctx.fill_text(&format!("Level: {}", world.player.level), 10.0, 70.0).ok();
}

/// Terminal frame: a clear plus the centered caption. Drawn once; the loop
/// driver does not re-arm afterwards.
pub fn draw_game_over(ctx: &CanvasRenderingContext2d, world: &World) {
    ctx.clear_rect(0.0, 0.0, world.width, world.height);
    ctx.set_fill_style_str(HUD_COLOR);
    ctx.set_font(GAME_OVER_FONT);
    ctx.set_text_align("center");
    ctx.fill_text("Game Over", world.width / 2.0, world.height / 2.0).ok();
}
