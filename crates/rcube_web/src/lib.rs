//! Browser bindings for the cube scene.
//!
//! The page owns the canvas, the WebGL context, and the event listeners. It
//! forwards input to a [`CubeScene`], reports shader setup results, and on
//! every animation frame calls [`CubeScene::frame()`] and draws the returned
//! buffer with the sticker mesh from [`CubeScene::mesh_positions()`] and
//! friends.
//!
//! # Frame layout
//!
//! The buffer returned by [`CubeScene::frame()`] is empty if the renderer is
//! not ready. Otherwise it starts with [`UNIFORM_FLOATS`] values:
//!
//! - projection, model-view, camera rotation, and face rotation matrices
//!   (16 floats each, column-major)
//! - light position (3) and power (1)
//! - body color (4)
//!
//! followed by [`FACET_FLOATS`] values per sticker mesh:
//!
//! - object matrix (16)
//! - face color (4)
//! - moving flag (1), which is `1.0` if the face rotation applies

use rcube_core::Face;
use rcube_core::mesh;
use rcube_prefs::Preferences;
use rcube_view::{
    CanvasRect, CommandSender, Duration, Frame, RendererResources, SceneCommand, SceneController,
    SceneRenderer, ShaderStage,
};
use wasm_bindgen::prelude::*;

/// Number of floats at the start of each frame buffer.
pub const UNIFORM_FLOATS: usize = 16 * 4 + 3 + 1 + 4;
/// Number of floats per sticker mesh in each frame buffer.
pub const FACET_FLOATS: usize = 16 + 4 + 1;

/// Installs logging and the panic hook.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    console_error_panic_hook::set_once();
}

/// Converts a DOM timestamp in milliseconds to an offset from the page
/// origin.
fn timestamp(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or_default()
}

/// Writes frames into a flat buffer.
struct BufferRenderer<'a> {
    resources: &'a RendererResources,
    out: &'a mut Vec<f32>,
}
impl SceneRenderer for BufferRenderer<'_> {
    fn is_ready(&self) -> bool {
        self.resources.is_ready()
    }
    fn draw(&mut self, frame: &Frame) {
        let u = &frame.uniforms;
        let out = &mut *self.out;
        out.clear();
        out.reserve(UNIFORM_FLOATS + FACET_FLOATS * frame.facets.len());
        for m in [&u.projection, &u.model_view, &u.rotation, &u.face_rotation] {
            out.extend(rcube_math::to_column_major(m));
        }
        out.extend(u.light_position);
        out.push(u.light_power);
        out.extend(frame.body_color.to_array());
        for draw in &frame.facets {
            out.extend(rcube_math::to_column_major(&draw.object_matrix));
            out.extend(draw.face_color(frame.body_color).to_array());
            out.push(if draw.moving { 1.0 } else { 0.0 });
        }
    }
}

/// Cube scene driven from JavaScript.
#[wasm_bindgen]
pub struct CubeScene {
    scene: SceneController,
    sender: CommandSender,
    resources: RendererResources,
    buffer: Vec<f32>,
    animating: bool,
}

#[wasm_bindgen]
impl CubeScene {
    /// Constructs a scene with a solved cube. `prefs_yaml` overrides the
    /// built-in preferences; `seed` picks the direction of random moves.
    #[wasm_bindgen(constructor)]
    pub fn new(prefs_yaml: Option<String>, seed: u32) -> Result<CubeScene, JsError> {
        let prefs = match prefs_yaml {
            Some(s) => Preferences::from_yaml(&s)?,
            None => Preferences::default(),
        };
        Ok(Self::with_prefs(&prefs, seed))
    }

    /// Records whether the page obtained a WebGL context.
    pub fn context_created(&mut self, ok: bool) -> Result<(), JsError> {
        Ok(self.resources.context_created(ok)?)
    }
    /// Records the result of compiling a shader. `stage` is `"vertex"` or
    /// `"fragment"`.
    pub fn shader_compiled(&mut self, stage: &str, ok: bool, log: &str) -> Result<(), JsError> {
        let stage: ShaderStage = stage.parse()?;
        Ok(self.resources.shader_compiled(stage, ok, log)?)
    }
    /// Records the result of linking the shader program.
    pub fn program_linked(&mut self, ok: bool, log: &str) -> Result<(), JsError> {
        Ok(self.resources.program_linked(ok, log)?)
    }

    /// Pointer pressed.
    pub fn begin_drag(&self, x: f32, y: f32) {
        self.sender.send(SceneCommand::BeginDrag { x, y });
    }
    /// Pointer moved while captured.
    pub fn update_drag(&self, x: f32, y: f32) {
        self.sender.send(SceneCommand::UpdateDrag { x, y });
    }
    /// Pointer released.
    pub fn end_drag(&self) {
        self.sender.send(SceneCommand::EndDrag);
    }
    /// Wheel event.
    pub fn zoom(&self, delta_y: f32) {
        self.sender.send(SceneCommand::Zoom { delta: delta_y });
    }
    /// Pointer moved over the canvas, whose bounding rectangle is given.
    pub fn move_light(&self, x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) {
        let canvas = CanvasRect {
            x: left,
            y: top,
            width,
            height,
        };
        self.sender.send(SceneCommand::MoveLight { x, y, canvas });
    }
    /// Canvas resized.
    pub fn resize(&self, width: f32, height: f32) {
        self.sender.send(SceneCommand::Resize { width, height });
    }
    /// Move button pressed. `direction` is `1`, `-1`, or `0` for random;
    /// `amount` is the number of quarter turns.
    pub fn start_move(
        &self,
        timestamp_ms: f64,
        face: &str,
        direction: i32,
        amount: u8,
    ) -> Result<(), JsError> {
        let face: Face = face.parse()?;
        self.sender
            .start_move(timestamp(timestamp_ms), face, direction, amount);
        Ok(())
    }

    /// Advances to `timestamp_ms` and returns the frame to draw, or an empty
    /// buffer if the renderer is not ready.
    pub fn frame(&mut self, timestamp_ms: f64) -> Vec<f32> {
        self.buffer.clear();
        let mut renderer = BufferRenderer {
            resources: &self.resources,
            out: &mut self.buffer,
        };
        self.animating = self.scene.frame(timestamp(timestamp_ms), &mut renderer);
        self.buffer.clone()
    }
    /// Returns whether a move was animating after the last frame.
    pub fn is_animating(&self) -> bool {
        self.animating
    }
    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.scene.cube().is_solved()
    }

    /// Sticker mesh vertex positions, three floats per vertex.
    pub fn mesh_positions() -> Vec<f32> {
        mesh::POSITIONS.concat()
    }
    /// Sticker mesh vertex normals, three floats per vertex.
    pub fn mesh_normals() -> Vec<f32> {
        mesh::NORMALS.concat()
    }
    /// Sticker mesh element indices, drawn as triangle fans: four fans of
    /// six in the body color, then one fan of four in the face color.
    pub fn mesh_elements() -> Vec<u8> {
        mesh::ELEMENTS.to_vec()
    }
}

impl CubeScene {
    fn with_prefs(prefs: &Preferences, seed: u32) -> Self {
        let scene = SceneController::with_seed(prefs, seed as u64);
        let sender = scene.sender();
        Self {
            scene,
            sender,
            resources: RendererResources::default(),
            buffer: vec![],
            animating: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rcube_core::Color;

    use super::*;

    fn ready_scene() -> CubeScene {
        let mut scene = CubeScene::with_prefs(&Preferences::default(), 1);
        scene.resources.context_created(true).unwrap();
        for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
            scene.resources.shader_compiled(stage, true, "").unwrap();
        }
        scene.resources.program_linked(true, "").unwrap();
        scene
    }

    #[test]
    fn test_empty_frame_until_ready() {
        let mut scene = CubeScene::with_prefs(&Preferences::default(), 1);
        assert!(scene.frame(0.0).is_empty());
    }

    #[test]
    fn test_frame_layout() {
        let mut scene = ready_scene();
        let buf = scene.frame(16.0);
        assert_eq!(buf.len(), UNIFORM_FLOATS + 156 * FACET_FLOATS);
        // Model-view translation.
        assert_eq!(buf[16 + 14], -10.0);
        // Light.
        assert_eq!(&buf[64..68], &[1.0, 1.0, -3.0, 20.0]);
        // Body color.
        assert_eq!(&buf[68..72], &Color::BODY.to_array());
        // No sticker is moving.
        assert!(buf[UNIFORM_FLOATS..].chunks(FACET_FLOATS).all(|c| c[20] == 0.0));
    }

    #[test]
    fn test_move_through_bindings() {
        let mut scene = ready_scene();
        scene.begin_drag(0.0, 0.0);
        scene.update_drag(10.0, 0.0);
        scene.end_drag();
        scene.start_move(1000.0, "R", -1, 1).unwrap();
        let buf = scene.frame(1100.0);
        assert!(scene.is_animating());
        let moving = buf[UNIFORM_FLOATS..]
            .chunks(FACET_FLOATS)
            .filter(|c| c[20] == 1.0)
            .count();
        assert_eq!(moving, 9 * 6);

        scene.frame(1600.0);
        assert!(!scene.is_animating());
        assert!(!scene.is_solved());
    }

    #[test]
    fn test_mesh_buffers() {
        assert_eq!(CubeScene::mesh_positions().len(), 48);
        assert_eq!(CubeScene::mesh_normals().len(), 48);
        assert_eq!(CubeScene::mesh_elements().len(), 28);
    }

    #[test]
    fn test_timestamp_clamps() {
        assert_eq!(timestamp(-5.0), Duration::ZERO);
        assert_eq!(timestamp(f64::NAN), Duration::ZERO);
        assert_eq!(timestamp(1500.0), Duration::from_millis(1500));
    }
}
