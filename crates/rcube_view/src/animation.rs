use std::f32::consts::PI;

use rcube_core::{CubeState, Cubie, Face, Move, MoveCommand, TurnDirection};
use rcube_math::{Float, Mat4};
use rcube_prefs::AnimationPreferences;
use web_time::Duration;

/// Face turn that is currently animating.
///
/// While the animation runs, the turning layer spins at a constant rate
/// regardless of how far the move actually turns. The stickers are only
/// permuted once, by [`MoveAnimation::complete()`], after the animation ends.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAnimation {
    turn: &'static Move,
    start: Duration,
    end: Duration,
    spin_period: Duration,
    direction: TurnDirection,
    signed_amount: i32,
}
impl MoveAnimation {
    /// Starts animating `command` at time `start`. `direction` is used only
    /// if the command does not specify one.
    pub fn new(
        start: Duration,
        command: MoveCommand,
        direction: TurnDirection,
        prefs: &AnimationPreferences,
    ) -> Self {
        let direction = command.direction.unwrap_or(direction);
        Self {
            turn: Move::get(command.face),
            start,
            end: start + prefs.move_duration(command.amount),
            spin_period: prefs.spin_period(),
            direction,
            signed_amount: command.amount as i32 * direction.sign(),
        }
    }

    /// Returns the face being turned.
    pub fn face(&self) -> Face {
        self.turn.face()
    }
    /// Returns the number of quarter turns that will be committed, clockwise
    /// when positive.
    pub fn signed_amount(&self) -> i32 {
        self.signed_amount
    }
    /// Returns the direction the layer spins.
    pub fn direction(&self) -> TurnDirection {
        self.direction
    }
    /// Returns the time at which the animation ends.
    pub fn end(&self) -> Duration {
        self.end
    }

    /// Returns whether the animation has ended at time `now`.
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end
    }
    /// Returns whether `cubie` is in the turning layer.
    pub fn is_moving(&self, cubie: Cubie) -> bool {
        self.turn.contains(cubie)
    }

    /// Returns the angle of the turning layer at time `now`, in radians.
    pub fn angle(&self, now: Duration) -> Float {
        let period = self.spin_period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        let phase = elapsed.rem_euclid(period) / (period / 2.0);
        phase as Float * PI * self.direction.sign() as Float
    }

    /// Returns the rotation of the turning layer at time `now`, or `None` if
    /// the animation has ended and should be committed.
    pub fn sample_rotation(&self, now: Duration) -> Option<Mat4> {
        (!self.is_finished(now)).then(|| self.turn.rotation(self.angle(now)))
    }

    /// Applies the move to `cube`. This consumes the animation so that each
    /// move is committed at most once.
    pub fn complete(self, cube: &mut CubeState) {
        log::debug!(
            "committing {}{} ({} quarter turns)",
            self.face(),
            match self.direction {
                TurnDirection::Clockwise => "",
                TurnDirection::CounterClockwise => "'",
            },
            self.signed_amount,
        );
        self.turn.complete(cube, self.signed_amount);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use rcube_math::assert_mat_approx_eq;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn anim(start: u64, command: &str, fallback: TurnDirection) -> MoveAnimation {
        let prefs = AnimationPreferences::default();
        MoveAnimation::new(ms(start), command.parse().unwrap(), fallback, &prefs)
    }

    #[test]
    fn test_end_time() {
        let quarter = anim(1000, "U", TurnDirection::Clockwise);
        assert_eq!(quarter.end(), ms(1600));
        let half = anim(1000, "U''", TurnDirection::CounterClockwise);
        assert_eq!(half.end(), ms(2200));
        assert_eq!(half.signed_amount(), -2);
        assert_eq!(half.direction(), TurnDirection::CounterClockwise);
    }

    #[test]
    fn test_explicit_direction_wins() {
        let anim = anim(0, "L'", TurnDirection::Clockwise);
        assert_eq!(anim.signed_amount(), -1);
        assert_eq!(anim.face(), Face::Left);
    }

    #[test]
    fn test_constant_spin_rate() {
        let anim = anim(500, "F", TurnDirection::Clockwise);
        assert_eq!(anim.angle(ms(500)), 0.0);
        assert!((anim.angle(ms(800)) - FRAC_PI_4).abs() < 1e-5);
        assert!((anim.angle(ms(1100)) - FRAC_PI_2).abs() < 1e-5);
        assert_mat_approx_eq!(
            anim.sample_rotation(ms(800)).unwrap(),
            Move::get(Face::Front).rotation(FRAC_PI_4),
        );
        assert!(anim.sample_rotation(ms(1099)).is_some());
        assert_eq!(anim.sample_rotation(ms(1100)), None);
        assert!(anim.is_finished(ms(5000)));
    }

    #[test]
    fn test_spin_wraps_around() {
        let prefs = AnimationPreferences {
            quarter_turn_ms: 3000,
            ..Default::default()
        };
        let command = MoveCommand::ccw(Face::Down);
        let anim = MoveAnimation::new(ms(0), command, TurnDirection::Clockwise, &prefs);
        let a = anim.angle(ms(300));
        let b = anim.angle(ms(2700));
        assert!((a - b).abs() < 1e-5);
        assert!(a < 0.0);
        assert!(anim.sample_rotation(ms(2700)).is_some());
    }

    #[test]
    fn test_complete_applies_signed_amount() {
        let mut cube = CubeState::default();
        anim(0, "R''", TurnDirection::CounterClockwise).complete(&mut cube);
        let mut expected = CubeState::default();
        expected.turn(Face::Right, 2);
        assert_eq!(cube, expected);
    }
}
