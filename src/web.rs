//! Browser host: a `wasm-bindgen` wrapper over [`Experience`].
//!
//! JavaScript drives the frame loop from `requestAnimationFrame`, forwards
//! pointer and orientation events, and reads back flat `Float32Array`
//! buffers for its own WebGL or WebGPU draw calls.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;
use web_sys::{DeviceOrientationEvent, MouseEvent};

use crate::camera::pointer_ndc;
use crate::mode::{InsightState, Mode, PromptStep};
use crate::options::Options;
use crate::renderer::{FrameRecorder, InstancePool, InstanceTransform};
use crate::scene::{Experience, ExperienceCommand, InputEvent};
use crate::tunnel::WallSide;
use crate::util::frame_timing::FrameTick;

/// Install the panic hook and console logger once per page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger already installed");
    }
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Experience plus the in-memory frame it last produced.
#[wasm_bindgen]
pub struct WebExperience {
    experience: Experience,
    frame: FrameRecorder,
    width: f32,
    height: f32,
}

#[wasm_bindgen]
impl WebExperience {
    /// Build from JSON options (`null` for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<WebExperience, JsValue> {
        let options = match options_json {
            Some(json) => serde_json::from_str::<Options>(&json).map_err(to_js)?,
            None => Options::default(),
        };
        let experience = Experience::new(options).map_err(to_js)?;
        Ok(Self {
            experience,
            frame: FrameRecorder::new(),
            width: 0.0,
            height: 0.0,
        })
    }

    /// Advance one frame. Times are milliseconds, as delivered by
    /// `requestAnimationFrame`. Returns false when the frame was skipped.
    pub fn frame(&mut self, elapsed_ms: f64, delta_ms: f64) -> bool {
        let tick =
            FrameTick::new((elapsed_ms / 1000.0) as f32, (delta_ms / 1000.0) as f32);
        self.experience.frame(tick, &mut self.frame)
    }

    /// Tell the experience whether the host's GPU resources are ready.
    pub fn set_ready(&mut self, ready: bool) {
        self.frame.ready = ready;
    }

    /// Track a canvas resize, in CSS pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
        self.experience
            .handle_input(InputEvent::Resized { width, height });
    }

    /// `mousemove` handler.
    pub fn on_mouse_move(&mut self, event: &MouseEvent) {
        let p = pointer_ndc(
            event.client_x() as f32,
            event.client_y() as f32,
            self.width,
            self.height,
        );
        self.experience
            .handle_input(InputEvent::PointerMoved { x: p.x, y: p.y });
    }

    /// `deviceorientation` handler.
    pub fn on_device_orientation(&mut self, event: &DeviceOrientationEvent) {
        self.experience.handle_input(InputEvent::DeviceOrientation {
            gamma: event.gamma().map(|g| g as f32),
            beta: event.beta().map(|b| b as f32),
        });
    }

    /// Call when orientation permission is denied or unsupported.
    pub fn orientation_unavailable(&mut self) {
        self.experience
            .handle_input(InputEvent::OrientationUnavailable);
    }

    /// Prompt button.
    pub fn advance_prompt(&mut self) -> bool {
        self.experience
            .execute(ExperienceCommand::AdvancePrompt)
            .is_some()
    }

    /// Reset button in the terminal view.
    pub fn reset(&mut self) -> bool {
        self.experience
            .execute(ExperienceCommand::ResetToNoise)
            .is_some()
    }

    /// Current mode: `"NOISE"`, `"SHATTER"` or `"SILENCE"`.
    pub fn mode(&self) -> String {
        self.experience.mode().label().to_owned()
    }

    /// Whether the prompt shows its question.
    pub fn prompt_is_question(&self) -> bool {
        self.experience.prompt_step() == PromptStep::Question
    }

    /// Column-major view-projection matrix, 16 floats.
    pub fn view_proj(&self) -> Float32Array {
        let m = self.experience.camera().uniform.view_proj;
        Float32Array::from(bytemuck::cast_slice::<[f32; 4], f32>(&m[..]))
    }

    /// Column-major 4x4 pose of one wall (0 floor, 1 right, 2 ceiling,
    /// 3 left).
    pub fn wall_pose(&self, index: usize) -> Float32Array {
        let pose = self
            .experience
            .tunnel()
            .wall_pose(WallSide::from_index(index));
        Float32Array::from(&glam::Mat4::from(pose).to_cols_array()[..])
    }

    /// Wall-local model matrices of one wall's tiles, 16 floats each.
    /// Compose with [`wall_pose`](Self::wall_pose) to place them.
    pub fn wall_tiles(&self, index: usize) -> Float32Array {
        let layout = self.experience.tunnel().layout(WallSide::from_index(index));
        let flat: Vec<f32> = layout
            .tiles()
            .flat_map(|t| glam::Mat4::from(t.local_transform()).to_cols_array())
            .collect();
        Float32Array::from(&flat[..])
    }

    /// Phrase block shown by each tile of [`wall_tiles`](Self::wall_tiles),
    /// in the same order.
    pub fn wall_tile_blocks(&self, index: usize) -> Vec<u32> {
        self.experience
            .tunnel()
            .layout(WallSide::from_index(index))
            .tiles()
            .map(|t| t.block as u32)
            .collect()
    }

    /// Phrase shown by block `block` of one wall.
    pub fn wall_phrase(&self, index: usize, block: usize) -> Option<String> {
        self.experience
            .tunnel()
            .layout(WallSide::from_index(index))
            .blocks()
            .get(block)
            .map(|b| b.phrase.clone())
    }

    /// Debris model matrices, 16 floats each.
    pub fn debris_instances(&self) -> Float32Array {
        self.instances(InstancePool::Debris)
    }

    /// Fragment model matrices, 16 floats each.
    pub fn fragment_instances(&self) -> Float32Array {
        self.instances(InstancePool::Fragments)
    }

    /// `[flash, canvas, silence]` opacities.
    pub fn overlay_opacities(&self) -> Float32Array {
        let o = self.experience.overlay();
        Float32Array::from(
            &[o.flash_opacity, o.canvas_opacity, o.silence_opacity][..],
        )
    }

    /// Terminal headline, or `undefined` while loading or outside SILENCE.
    pub fn insight(&self) -> Option<String> {
        if self.experience.mode() != Mode::Silence {
            return None;
        }
        match &self.experience.overlay().insight {
            Some(InsightState::Ready(text)) => Some(text.clone()),
            _ => None,
        }
    }

    /// Stop all timers; the instance becomes inert.
    pub fn teardown(&mut self) {
        self.experience.teardown();
    }
}

impl WebExperience {
    fn instances(&self, pool: InstancePool) -> Float32Array {
        Float32Array::from(InstanceTransform::as_floats(self.frame.instances(pool)))
    }
}
