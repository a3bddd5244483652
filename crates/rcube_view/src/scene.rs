//! Scene controller: the single owner of all mutable view and cube state.

use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rcube_core::{Color, CubeState, Cubie, Face, MoveCommand, TurnDirection};
use rcube_math::Float;
use rcube_prefs::{AnimationPreferences, MoveOverlapPolicy, Preferences};
use web_time::Duration;

use crate::{CanvasRect, Frame, LightState, MoveAnimation, SceneRenderer, ViewState};

/// Input delivered to the scene by a collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Pointer pressed.
    BeginDrag {
        /// Pointer X.
        x: Float,
        /// Pointer Y.
        y: Float,
    },
    /// Pointer moved while pressed.
    UpdateDrag {
        /// Pointer X.
        x: Float,
        /// Pointer Y.
        y: Float,
    },
    /// Pointer released.
    EndDrag,
    /// Wheel event. Only the sign matters.
    Zoom {
        /// Wheel delta.
        delta: Float,
    },
    /// Pointer moved anywhere over the canvas.
    MoveLight {
        /// Pointer X.
        x: Float,
        /// Pointer Y.
        y: Float,
        /// Canvas bounds, in the same coordinates as the pointer.
        canvas: CanvasRect,
    },
    /// Canvas size changed.
    Resize {
        /// Width in pixels.
        width: Float,
        /// Height in pixels.
        height: Float,
    },
    /// Move button pressed.
    StartMove {
        /// Time of the event.
        time: Duration,
        /// Move to make.
        command: MoveCommand,
    },
}

/// Handle for sending commands to a [`SceneController`] from input handlers.
///
/// Commands are applied in order at the start of the next frame.
#[derive(Debug, Clone)]
pub struct CommandSender(mpsc::Sender<SceneCommand>);
impl CommandSender {
    /// Queues a command. Returns `false` if the scene no longer exists.
    pub fn send(&self, command: SceneCommand) -> bool {
        self.0.send(command).is_ok()
    }
    /// Queues a move trigger. `direction` is `1`, `-1`, or `0` for random.
    pub fn start_move(&self, time: Duration, face: Face, direction: i32, amount: u8) -> bool {
        let command = MoveCommand {
            face,
            direction: TurnDirection::from_signum(direction),
            amount,
        };
        self.send(SceneCommand::StartMove { time, command })
    }
}

/// Owns the cube, the view, and the current move animation, and turns them
/// into frames.
///
/// All mutation happens either through [`SceneController::apply()`] or through
/// commands queued on a [`CommandSender`] and drained by
/// [`SceneController::frame()`], so there is only ever one writer.
#[derive(Debug)]
pub struct SceneController {
    cube: CubeState,
    view: ViewState,
    light: LightState,
    current: Option<MoveAnimation>,

    animation_prefs: AnimationPreferences,
    body_color: Color,
    rng: StdRng,

    tx: mpsc::Sender<SceneCommand>,
    rx: mpsc::Receiver<SceneCommand>,
}
impl SceneController {
    /// Constructs a scene with a solved cube. `rng` picks the direction of
    /// moves that do not specify one.
    pub fn new(prefs: &Preferences, rng: StdRng) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            cube: CubeState::solved(&prefs.colors.scheme()),
            view: ViewState::new(&prefs.view),
            light: LightState::new(&prefs.lighting),
            current: None,

            animation_prefs: prefs.animation.clone(),
            body_color: prefs.colors.body,
            rng,

            tx,
            rx,
        }
    }
    /// Constructs a scene with a deterministic random direction source.
    pub fn with_seed(prefs: &Preferences, seed: u64) -> Self {
        Self::new(prefs, StdRng::seed_from_u64(seed))
    }

    /// Returns a handle for queuing commands.
    pub fn sender(&self) -> CommandSender {
        CommandSender(self.tx.clone())
    }

    /// Returns the cube state.
    pub fn cube(&self) -> &CubeState {
        &self.cube
    }
    /// Returns the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }
    /// Returns the light.
    pub fn light(&self) -> &LightState {
        &self.light
    }
    /// Returns the move currently animating, if any.
    pub fn current_move(&self) -> Option<&MoveAnimation> {
        self.current.as_ref()
    }

    /// Applies a command immediately.
    pub fn apply(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::BeginDrag { x, y } => self.view.begin_drag(x, y),
            SceneCommand::UpdateDrag { x, y } => self.view.update_drag(x, y),
            SceneCommand::EndDrag => self.view.end_drag(),
            SceneCommand::Zoom { delta } => self.view.zoom(delta),
            SceneCommand::MoveLight { x, y, canvas } => self.light.move_to(x, y, canvas),
            SceneCommand::Resize { width, height } => self.view.resize(width, height),
            SceneCommand::StartMove { time, command } => self.start_move(time, command),
        }
    }

    fn drain_inbox(&mut self) {
        while let Ok(command) = self.rx.try_recv() {
            self.apply(command);
        }
    }

    fn start_move(&mut self, time: Duration, command: MoveCommand) {
        if let Some(current) = self.current.take() {
            if current.is_finished(time) {
                current.complete(&mut self.cube);
            } else {
                match self.animation_prefs.overlap_policy {
                    MoveOverlapPolicy::Replace => {
                        log::warn!(
                            "discarding uncommitted move {} ({} quarter turns) for {command}",
                            current.face(),
                            current.signed_amount(),
                        );
                    }
                    MoveOverlapPolicy::CommitPending => current.complete(&mut self.cube),
                    MoveOverlapPolicy::Reject => {
                        let face = current.face();
                        log::warn!("ignoring {command} because {face} is still turning");
                        self.current = Some(current);
                        return;
                    }
                }
            }
        }

        let direction = command.direction.unwrap_or_else(|| {
            match self.rng.random_bool(0.5) {
                true => TurnDirection::Clockwise,
                false => TurnDirection::CounterClockwise,
            }
        });
        log::debug!("starting {command} ({direction}) at {time:?}");
        self.current = Some(MoveAnimation::new(
            time,
            command,
            direction,
            &self.animation_prefs,
        ));
    }

    /// Advances the scene to time `now` and draws it.
    ///
    /// Queued commands are applied first. If the renderer is not ready,
    /// nothing else happens. Otherwise, a move that has finished animating is
    /// committed to the cube, and the frame is built and drawn.
    ///
    /// Returns whether a move is still animating.
    pub fn frame(&mut self, now: Duration, renderer: &mut impl SceneRenderer) -> bool {
        self.drain_inbox();
        if !renderer.is_ready() {
            return self.current.is_some();
        }

        let face_rotation = self.current.as_ref().map(|anim| anim.sample_rotation(now));
        let turning = match face_rotation {
            Some(Some(m)) => Some(m),
            Some(None) => {
                if let Some(anim) = self.current.take() {
                    anim.complete(&mut self.cube);
                }
                None
            }
            None => None,
        };

        let frame = match (turning, &self.current) {
            (Some(m), Some(anim)) => {
                let contains = |cubie: Cubie| anim.is_moving(cubie);
                let turning: (_, &dyn Fn(Cubie) -> bool) = (m, &contains);
                Frame::build(&self.cube, &self.view, &self.light, self.body_color, Some(turning))
            }
            _ => Frame::build(&self.cube, &self.view, &self.light, self.body_color, None),
        };
        log::trace!("drawing frame at {now:?}");
        renderer.draw(&frame);

        self.current.is_some()
    }
}
