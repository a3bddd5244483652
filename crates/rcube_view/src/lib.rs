//! Interactive scene for a 3x3x3 cube: camera, light, move animation, and the
//! per-frame contract with a renderer.
//!
//! A [`SceneController`] owns everything mutable. Input handlers either call
//! [`SceneController::apply()`] directly or queue [`SceneCommand`]s through a
//! [`CommandSender`]; once per display refresh the host calls
//! [`SceneController::frame()`], which hands a [`Frame`] to a
//! [`SceneRenderer`].

mod animation;
mod frame;
mod light;
mod scene;
mod view_state;

pub use animation::MoveAnimation;
pub use frame::{
    FacetDraw, Frame, FrameUniforms, RendererError, RendererResources, SceneRenderer, ShaderStage,
};
pub use light::{CanvasRect, LightState};
pub use scene::{CommandSender, SceneCommand, SceneController};
pub use view_state::ViewState;
pub use web_time::Duration;
