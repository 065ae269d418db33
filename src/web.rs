//! Browser bindings
//!
//! The page owns the canvas, the DOM and `requestAnimationFrame`; it forwards
//! frame deltas and input here and reads back a JSON snapshot plus vertices.

use wasm_bindgen::prelude::*;

use crate::driver::FrameDriver;
use crate::engine::Engine;
use crate::platform::input::{Command, SwipeTracker, map_key};
use crate::renderer::{build_scene, tessellate, vertex};
use crate::tuning::{TimingMode, Tuning};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Lane Merge (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    engine: Engine,
    driver: FrameDriver,
    swipe: SwipeTracker,
}

#[wasm_bindgen]
impl WebGame {
    /// New game with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebGame {
        let engine = Engine::with_seed(seed as u64);
        let driver = FrameDriver::new(engine.tuning().timing);
        WebGame {
            engine,
            driver,
            swipe: SwipeTracker::new(),
        }
    }

    /// New game from a tuning JSON document
    #[wasm_bindgen(js_name = withTuning)]
    pub fn with_tuning(seed: f64, tuning_json: &str) -> Result<WebGame, JsError> {
        let tuning = Tuning::from_json(tuning_json)?;
        let driver = FrameDriver::new(tuning.timing);
        let engine = Engine::new(tuning, seed as u64)?;
        Ok(WebGame {
            engine,
            driver,
            swipe: SwipeTracker::new(),
        })
    }

    /// Advance for one animation frame; returns the number of ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        let ticks = self.driver.ticks_for_frame(dt);
        for _ in 0..ticks {
            self.engine.tick();
        }
        ticks
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) {
        if let Some(command) = map_key(key) {
            self.engine.apply(command);
        }
    }

    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self, x: f32) {
        self.swipe.touch_start(x);
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&mut self, x: f32) {
        if let Some(command) = self.swipe.touch_end(x) {
            self.engine.apply(command);
        }
    }

    pub fn restart(&mut self) {
        self.engine.apply(Command::Restart);
        self.driver.reset();
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    /// World snapshot as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.engine.snapshot())?)
    }

    /// Full draw list (including text) as JSON
    #[wasm_bindgen(js_name = sceneJson)]
    pub fn scene_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&build_scene(&self.engine.snapshot()))?)
    }

    /// Triangles for the geometric part of the frame, `[x, y, r, g, b, a]` each
    pub fn vertices(&self) -> Vec<f32> {
        let scene = build_scene(&self.engine.snapshot());
        vertex::as_floats(&tessellate(&scene)).to_vec()
    }

    /// Same triangles as raw bytes, ready for a vertex buffer upload
    #[wasm_bindgen(js_name = vertexBytes)]
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let scene = build_scene(&self.engine.snapshot());
        vertex::as_bytes(&tessellate(&scene)).to_vec()
    }

    /// Byte stride of one vertex in `vertexBytes`
    #[wasm_bindgen(js_name = vertexStride)]
    pub fn vertex_stride() -> usize {
        vertex::Vertex::STRIDE
    }

    /// Whether the driver runs a fixed-rate accumulator rather than one tick per frame
    #[wasm_bindgen(js_name = isFixedStep)]
    pub fn is_fixed_step(&self) -> bool {
        matches!(self.driver.mode(), TimingMode::FixedStep { .. })
    }
}
