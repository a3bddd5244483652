use std::path::PathBuf;

use eyre::{Result, WrapErr};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rcube_core::{CubeState, MoveCommand, TurnDirection};
use rcube_prefs::Preferences;
use rcube_view::{Duration, Frame, SceneCommand, SceneController, SceneRenderer};

/// Rubik's cube simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the one in the user config
    /// directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the move commands that can be triggered.
    Moves,
    /// Apply moves to a solved cube instantly and print the result.
    Apply {
        /// Moves to apply, such as `F U' R''`.
        #[arg(required = true)]
        moves: Vec<String>,
        /// Seed for moves with a random direction.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Animate moves with the scene controller on a simulated clock and print
    /// the result.
    Play {
        /// Moves to play, such as `F U' R''`.
        #[arg(required = true)]
        moves: Vec<String>,
        /// Simulated frames per second.
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(1..=1000),
        )]
        fps: u32,
        /// Seed for moves with a random direction.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the effective preferences as YAML.
    Prefs,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = match &args.prefs {
        Some(path) => Preferences::load(Some(path)),
        None => Preferences::load_user(),
    };

    match args.subcommand {
        Subcommand::Moves => {
            for command in MoveCommand::ALL {
                let description = match command.direction {
                    Some(TurnDirection::Clockwise) => "clockwise",
                    Some(TurnDirection::CounterClockwise) => "counterclockwise",
                    None => "random direction",
                };
                let turns = match command.amount {
                    1 => "quarter turn",
                    _ => "half turn",
                };
                println!("{:<4}{turns}, {description}", command.to_string());
            }
            Ok(())
        }

        Subcommand::Apply { moves, seed } => {
            let commands = parse_moves(&moves)?;
            let mut rng = seeded_rng(seed);
            let mut cube = CubeState::solved(&prefs.colors.scheme());
            for command in commands {
                let amount = command.signed_amount(random_direction(&mut rng));
                log::debug!("{command} turns {} by {amount}", command.face);
                cube.turn(command.face, amount);
            }
            print_cube(&cube, &prefs);
            Ok(())
        }

        Subcommand::Play { moves, fps, seed } => {
            let commands = parse_moves(&moves)?;
            let mut scene = SceneController::new(&prefs, seeded_rng(seed));
            let stats = play(&mut scene, &commands, fps);
            println!(
                "{} moves in {} frames ({:.3}s simulated)",
                commands.len(),
                stats.frames,
                stats.elapsed.as_secs_f64(),
            );
            print_cube(scene.cube(), &prefs);
            Ok(())
        }

        Subcommand::Prefs => {
            print!("{}", prefs.to_yaml().wrap_err("error serializing preferences")?);
            Ok(())
        }
    }
}

fn parse_moves(args: &[String]) -> Result<Vec<MoveCommand>> {
    let text = args.iter().join(" ");
    rcube_core::parse_sequence(&text).wrap_err_with(|| format!("error parsing moves {text:?}"))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");
    StdRng::seed_from_u64(seed)
}

fn random_direction(rng: &mut StdRng) -> TurnDirection {
    match rng.random_bool(0.5) {
        true => TurnDirection::Clockwise,
        false => TurnDirection::CounterClockwise,
    }
}

fn print_cube(cube: &CubeState, prefs: &Preferences) {
    println!("{}", crate::net::render(cube, &prefs.colors.scheme()));
    println!("solved: {}", cube.is_solved());
}

/// Renderer that keeps statistics instead of drawing.
#[derive(Debug, Default)]
struct HeadlessRenderer {
    frames: usize,
    moving_frames: usize,
}
impl SceneRenderer for HeadlessRenderer {
    fn is_ready(&self) -> bool {
        true
    }
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        if frame.facets.iter().any(|f| f.moving) {
            self.moving_frames += 1;
        }
    }
}

#[derive(Debug)]
struct PlayStats {
    frames: usize,
    elapsed: Duration,
}

/// Runs the frame loop, starting each move on the frame after the previous
/// one commits.
fn play(scene: &mut SceneController, commands: &[MoveCommand], fps: u32) -> PlayStats {
    let frame_time = Duration::from_secs(1) / fps;
    let sender = scene.sender();
    let mut renderer = HeadlessRenderer::default();
    let mut now = Duration::ZERO;
    let mut pending = commands.iter();
    let mut animating = false;

    loop {
        if !animating {
            match pending.next() {
                Some(&command) => {
                    sender.send(SceneCommand::StartMove { time: now, command });
                }
                None => break,
            }
        }
        animating = scene.frame(now, &mut renderer);
        now += frame_time;
    }

    log::info!(
        "drew {} frames, {} with a turning layer",
        renderer.frames,
        renderer.moving_frames,
    );
    PlayStats {
        frames: renderer.frames,
        elapsed: now,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rcube_core::Face;

    use super::*;

    #[test]
    fn test_play_matches_apply() {
        let prefs = Preferences::default();
        let commands = parse_moves(&["R U".to_owned(), "R' U'".to_owned()]).unwrap();
        let mut scene = SceneController::with_seed(&prefs, 0);
        let stats = play(&mut scene, &commands, 50);

        let mut expected = CubeState::default();
        let turns = [(Face::Right, 1), (Face::Up, 1), (Face::Right, -1), (Face::Up, -1)];
        for (face, amount) in turns {
            expected.turn(face, amount);
        }
        assert_eq!(scene.cube(), &expected);
        // Each quarter turn animates for 30 frames and commits on the next.
        assert_eq!(stats.frames, 4 * 31);
        assert_eq!(stats.elapsed, Duration::from_millis(4 * 31 * 20));
    }

    #[test]
    fn test_fps_range() {
        use clap::Parser;

        for fps in ["0", "1001", "2000000000"] {
            let result = Args::try_parse_from(["rcube", "play", "F", "--fps", fps]);
            assert!(result.is_err(), "--fps {fps} was accepted");
        }
        let args = Args::try_parse_from(["rcube", "play", "F", "--fps", "1000"]).unwrap();
        let Subcommand::Play { fps, .. } = args.subcommand else {
            panic!("expected play subcommand");
        };
        assert_eq!(fps, 1000);
    }

    #[test]
    fn test_parse_moves_error() {
        let err = parse_moves(&["F".to_owned(), "Q".to_owned()]).unwrap_err();
        assert!(format!("{err:#}").contains("unknown face"));
    }
}
