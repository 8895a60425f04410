//! Image assets.
//!
//! Five bitmaps referenced by path and loaded fire-and-forget: drawing an
//! image that has not finished loading silently paints nothing, so the
//! first frames may be blank. No completion gating, no error handling
//! beyond element creation itself.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement};

pub struct Assets {
    pub player: HtmlImageElement,
    pub enemy: HtmlImageElement,
    pub tile: HtmlImageElement,
    pub sword: HtmlImageElement,
    pub health: HtmlImageElement,
}

impl Assets {
    pub fn load(doc: &Document) -> Result<Assets, JsValue> {
        Ok(Assets {
            player: load_image(doc, "assets/player.png")?,
            enemy: load_image(doc, "assets/enemy.png")?,
            tile: load_image(doc, "assets/tile.png")?,
            sword: load_image(doc, "assets/sword.png")?,
            health: load_image(doc, "assets/health.png")?,
        })
    }
}

fn load_image(doc: &Document, src: &str) -> Result<HtmlImageElement, JsValue> {
    let img: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
    img.set_src(src);
    Ok(img)
}
