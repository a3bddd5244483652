//! What the renderer receives each frame.

use rcube_core::{Color, CubeState, Cubie, Face};
use rcube_math::{Float, Mat4};
use strum::VariantArray;
use thiserror::Error;

use crate::{LightState, ViewState};

/// Error initializing renderer resources. These are fatal to the renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    /// No drawing context is available
    #[error("unable to initialize drawing context")]
    MissingContext,
    /// Shader failed to compile
    #[error("an error occurred compiling the {stage} shader: {log}")]
    ShaderCompile {
        /// Which shader failed.
        stage: ShaderStage,
        /// Compiler output.
        log: String,
    },
    /// Shader program failed to link
    #[error("unable to initialize the shader program: {0}")]
    ProgramLink(String),
}

/// Shader stage.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString, VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum ShaderStage {
    /// Vertex shader.
    Vertex,
    /// Fragment shader.
    Fragment,
}

/// Tracks renderer resources that load asynchronously.
///
/// Drawing must be a no-op until a context exists, both shader stages have
/// compiled, and the shader program has linked.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RendererResources {
    has_context: bool,
    compiled: Vec<ShaderStage>,
    linked: bool,
}
impl RendererResources {
    /// Records whether a drawing context was obtained.
    pub fn context_created(&mut self, ok: bool) -> Result<(), RendererError> {
        self.has_context = ok;
        ok.then_some(()).ok_or(RendererError::MissingContext)
    }
    /// Records the result of compiling a shader.
    pub fn shader_compiled(
        &mut self,
        stage: ShaderStage,
        ok: bool,
        log: &str,
    ) -> Result<(), RendererError> {
        if !self.has_context {
            return Err(RendererError::MissingContext);
        }
        if !ok {
            return Err(RendererError::ShaderCompile {
                stage,
                log: log.to_owned(),
            });
        }
        if !self.compiled.contains(&stage) {
            self.compiled.push(stage);
        }
        Ok(())
    }
    /// Records the result of linking the shader program.
    pub fn program_linked(&mut self, ok: bool, log: &str) -> Result<(), RendererError> {
        if !self.has_context {
            return Err(RendererError::MissingContext);
        }
        if !ok {
            return Err(RendererError::ProgramLink(log.to_owned()));
        }
        if let Some(stage) = self.missing_stage() {
            return Err(RendererError::ProgramLink(format!("{stage} shader was not compiled")));
        }
        self.linked = true;
        log::info!("renderer ready");
        Ok(())
    }
    /// Returns whether everything needed for drawing has loaded.
    pub fn is_ready(&self) -> bool {
        self.has_context && self.missing_stage().is_none() && self.linked
    }

    fn missing_stage(&self) -> Option<ShaderStage> {
        ShaderStage::VARIANTS
            .iter()
            .copied()
            .find(|stage| !self.compiled.contains(stage))
    }
}

/// Consumer of frames.
pub trait SceneRenderer {
    /// Returns whether the renderer can draw. Frames are not built while this
    /// is `false`.
    fn is_ready(&self) -> bool;
    /// Draws one frame.
    fn draw(&mut self, frame: &Frame);
}

/// Values that are the same for every draw call in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUniforms {
    /// Perspective projection.
    pub projection: Mat4,
    /// Translation that places the cube in front of the camera.
    pub model_view: Mat4,
    /// Camera rotation, including any drag in progress.
    pub rotation: Mat4,
    /// Rotation of the turning layer, or identity if no move is animating.
    pub face_rotation: Mat4,
    /// Light position in world space.
    pub light_position: [Float; 3],
    /// Light power.
    pub light_power: Float,
}

/// One sticker mesh drawn on one cubie.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetDraw {
    /// Cubie the mesh is drawn on.
    pub cubie: Cubie,
    /// Facet the mesh belongs to.
    pub face: Face,
    /// Transform from mesh space to cube space.
    pub object_matrix: Mat4,
    /// Sticker color, or `None` if the cubie does not touch this facet, in
    /// which case the face is drawn in the body color.
    pub color: Option<Color>,
    /// Whether [`FrameUniforms::face_rotation`] applies.
    pub moving: bool,
}
impl FacetDraw {
    /// Returns the color to draw the face fan in.
    pub fn face_color(&self, body: Color) -> Color {
        self.color.unwrap_or(body)
    }
}

/// Everything needed to draw the scene once.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Shared values.
    pub uniforms: FrameUniforms,
    /// Color of the cubie bodies and sticker bevels.
    pub body_color: Color,
    /// Sticker meshes, for every facet of every boundary cubie.
    pub facets: Vec<FacetDraw>,
}
impl Frame {
    /// Builds a frame. `turning` is the rotation of the turning layer and a
    /// predicate selecting the cubies in it, if a move is animating.
    pub fn build(
        cube: &CubeState,
        view: &ViewState,
        light: &LightState,
        body_color: Color,
        turning: Option<(Mat4, &dyn Fn(Cubie) -> bool)>,
    ) -> Self {
        let uniforms = FrameUniforms {
            projection: view.projection(),
            model_view: view.model_view(),
            rotation: view.camera_rotation(),
            face_rotation: turning.map_or_else(rcube_math::ident, |(m, _)| m),
            light_position: light.position(),
            light_power: light.power(),
        };

        let mut facets = Vec::with_capacity(26 * 6);
        for cubie in Cubie::boundary() {
            let moving = turning.is_some_and(|(_, contains)| contains(cubie));
            for &face in Face::VARIANTS {
                let facet = cube.facet(face);
                facets.push(FacetDraw {
                    cubie,
                    face,
                    object_matrix: facet.object_matrix(cubie),
                    color: facet.get_color(cubie),
                    moving,
                });
            }
        }

        Self {
            uniforms,
            body_color,
            facets,
        }
    }

    /// Returns the draws that show a sticker color.
    pub fn stickers(&self) -> impl Iterator<Item = &FacetDraw> {
        self.facets.iter().filter(|f| f.color.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_ready_after_link() {
        let mut res = RendererResources::default();
        assert!(!res.is_ready());
        assert_eq!(
            res.shader_compiled(ShaderStage::Vertex, true, ""),
            Err(RendererError::MissingContext),
        );
        res.context_created(true).unwrap();
        res.shader_compiled(ShaderStage::Vertex, true, "").unwrap();
        res.shader_compiled(ShaderStage::Fragment, true, "").unwrap();
        assert!(!res.is_ready());
        res.program_linked(true, "").unwrap();
        assert!(res.is_ready());
    }

    #[test]
    fn test_resource_errors() {
        let mut res = RendererResources::default();
        assert_eq!(res.context_created(false), Err(RendererError::MissingContext));
        res.context_created(true).unwrap();
        let e = res
            .shader_compiled(ShaderStage::Fragment, false, "syntax error")
            .unwrap_err();
        assert_eq!(
            e.to_string(),
            "an error occurred compiling the fragment shader: syntax error",
        );
        let e = res.program_linked(false, "bad varying").unwrap_err();
        assert_eq!(e, RendererError::ProgramLink("bad varying".to_owned()));
        assert!(!res.is_ready());
    }

    #[test]
    fn test_link_requires_both_stages() {
        let mut res = RendererResources::default();
        res.context_created(true).unwrap();
        res.shader_compiled(ShaderStage::Vertex, true, "").unwrap();
        assert_eq!(
            res.program_linked(true, ""),
            Err(RendererError::ProgramLink(
                "fragment shader was not compiled".to_owned()
            )),
        );
        assert!(!res.is_ready());

        res.shader_compiled(ShaderStage::Fragment, true, "").unwrap();
        res.program_linked(true, "").unwrap();
        assert!(res.is_ready());
    }

    #[test]
    fn test_frame_without_move() {
        let frame = Frame::build(
            &CubeState::default(),
            &ViewState::default(),
            &LightState::default(),
            Color::BODY,
            None,
        );
        assert_eq!(frame.facets.len(), 156);
        assert_eq!(frame.stickers().count(), 54);
        assert!(frame.facets.iter().all(|f| !f.moving));
        assert_eq!(frame.uniforms.face_rotation, rcube_math::ident());
        assert_eq!(frame.facets[0].cubie, Cubie::new(0, 0, 0).unwrap());
        assert_eq!(frame.facets[6].cubie, Cubie::new(0, 0, 1).unwrap());
        assert_eq!(frame.facets[0].face_color(Color::BODY), Color::BODY);
    }
}
