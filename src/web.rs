// src/web.rs
//! Browser entry point for the WASM build.

use crate::app::CardsApp;
use crate::config::Config;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const CANVAS_ID: &str = "quote_cards_canvas";

fn find_canvas() -> Option<web_sys::HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CANVAS_ID)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
}

#[wasm_bindgen(start)]
pub fn start() {
    // Fails only if a logger is already installed
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = find_canvas() else {
            log::error!("no <canvas id=\"{CANVAS_ID}\"> in the page");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(CardsApp::load(&Config::from_env())))),
            )
            .await;

        if let Err(e) = result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
