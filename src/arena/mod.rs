//! Browser shell: canvas, listeners, asset table and the frame loop.
//!
//! Everything stateful lives in one thread-local slot, borrowed mutably only
//! from event closures and the frame callback. The browser delivers both on
//! a single thread, so the borrows can never interleave.
//!
//! The loop driver has two states: Running, in which each tick samples
//! input, advances the world, renders and re-arms the next frame; and
//! GameOver, in which the tick draws the end screen once and does not
//! re-arm. The frame timestamp handed in by `requestAnimationFrame` is the
//! clock used for sword expiry, so no timer exists outside the frame
//! cadence.

pub mod assets;
pub mod input;
pub mod render;
pub mod step;
pub mod world;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window, window};

use assets::Assets;
use input::{InputState, TouchControl};
use world::World;

const CANVAS_ID: &str = "gameCanvas";

struct Game {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    assets: Assets,
    input: InputState,
    world: World,
}

thread_local! {
    static GAME: RefCell<Option<Game>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Build one game session inside the current page and start the frame loop.
pub fn start() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Reuse the page's canvas if it has one, otherwise create it.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id(CANVAS_ID);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let (width, height) = viewport(&win);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let assets = Assets::load(&doc)?;
    let seed = js_sys::Date::now() as u64;
    let world = World::new(width, height, seed);
    log::info!(
        "session start: seed {seed}, viewport {width}x{height}, wave of {}",
        world.enemies.len()
    );

    GAME.with(|slot| {
        slot.replace(Some(Game {
            canvas,
            ctx,
            assets,
            input: InputState::default(),
            world,
        }))
    });

    attach_keyboard(&doc)?;
    attach_touch_controls(&doc)?;
    attach_resize(&win)?;
    start_loop();
    Ok(())
}

fn viewport(win: &Window) -> (f64, f64) {
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(640.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(480.0);
    (width, height)
}

/// Raw keydown/keyup on the document; the key string goes straight into the
/// input map.
fn attach_keyboard(doc: &Document) -> Result<(), JsValue> {
    let down = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.input.set_key(&evt.key(), true);
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())?;
    down.forget();

    let up = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.input.set_key(&evt.key(), false);
            }
        });
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())?;
    up.forget();
    Ok(())
}

/// touchstart/touchend on the five on-screen buttons. A page without the
/// touch pad simply has no touch input.
fn attach_touch_controls(doc: &Document) -> Result<(), JsValue> {
    for control in TouchControl::ALL {
        let Some(el) = doc.get_element_by_id(control.element_id()) else {
            continue;
        };
        let pressed = Closure::wrap(Box::new(move |_evt: web_sys::TouchEvent| {
            GAME.with(|slot| {
                if let Some(game) = slot.borrow_mut().as_mut() {
                    game.input.set_touch(control, true);
                }
            });
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("touchstart", pressed.as_ref().unchecked_ref())?;
        pressed.forget();

        let released = Closure::wrap(Box::new(move |_evt: web_sys::TouchEvent| {
            GAME.with(|slot| {
                if let Some(game) = slot.borrow_mut().as_mut() {
                    game.input.set_touch(control, false);
                }
            });
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("touchend", released.as_ref().unchecked_ref())?;
        released.forget();
    }
    Ok(())
}

/// Window resize: the canvas tracks the new viewport and the tile grid is
/// rebuilt. Player and enemies keep their positions.
fn attach_resize(win: &Window) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let Some(win) = window() else { return };
        let (width, height) = viewport(&win);
        GAME.with(|slot| {
            if let Some(game) = slot.borrow_mut().as_mut() {
                game.canvas.set_width(width as u32);
                game.canvas.set_height(height as u32);
                game.world.resize(width, height);
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let rearm = GAME.with(|slot| {
            match slot.borrow_mut().as_mut() {
                Some(game) => tick(game, ts),
                None => false,
            }
        });
        if rearm {
            if let Some(w) = window() {
                let _ =
                    w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// One frame. Returns whether the loop should re-arm: the tick that finds
/// the terminal flag already set draws the end screen and stops.
fn tick(game: &mut Game, now_ms: f64) -> bool {
    if game.world.game_over {
        render::draw_game_over(&game.ctx, &game.world);
        log::info!(
            "game over: score {}, level {}",
            game.world.player.score,
            game.world.player.level
        );
        return false;
    }

    let snapshot = game.input.sample();
    let level_before = game.world.player.level;
    step::advance(&mut game.world, &snapshot, now_ms);
    if game.world.player.level > level_before {
        log::info!(
            "wave cleared: level {}, next wave of {}",
            game.world.player.level,
            game.world.enemies.len()
        );
    }

    render::draw_frame(&game.ctx, &game.world, &game.assets);
    true
}
