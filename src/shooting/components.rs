//! Ball flight state machine.

use bevy::prelude::*;

/// Marker component for the ball entity.
#[derive(Component)]
pub struct Ball;

/// What the flight machine reports for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightStep {
    /// No flight active; the ball sits at its rest pose.
    Resting,
    /// Flight in progress; place the ball here at this uniform scale.
    InFlight { position: Vec3, scale: f32 },
    /// The flight just finished at `target`. The ball resets to rest.
    Arrived { target: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FlightPhase {
    Idle,
    Animating {
        start: Vec3,
        target: Vec3,
        progress: f32,
    },
}

/// Per-frame trajectory animator for the ball.
///
/// Two states: Idle and Animating. Only one flight can be active at a time;
/// a pending target that equals the most recently consumed one (by value)
/// is silently dropped, so persisted or repeated identical shots never
/// restart an in-flight animation.
#[derive(Resource, Debug)]
pub struct BallFlight {
    phase: FlightPhase,
    /// Last target a flight was started for, compared by value for dedup.
    last_consumed: Option<Vec3>,
}

impl Default for BallFlight {
    fn default() -> Self {
        Self {
            phase: FlightPhase::Idle,
            last_consumed: None,
        }
    }
}

impl BallFlight {
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, FlightPhase::Animating { .. })
    }

    /// Try to start a flight from `current` toward `target`.
    ///
    /// Returns false while a flight is active or when `target` matches the
    /// last consumed target. On success the target counts as consumed.
    pub fn try_begin(&mut self, target: Vec3, current: Vec3) -> bool {
        if self.is_animating() {
            return false;
        }
        if self.last_consumed == Some(target) {
            return false;
        }
        self.last_consumed = Some(target);
        self.phase = FlightPhase::Animating {
            start: current,
            target,
            progress: 0.0,
        };
        true
    }

    /// Advance the flight by `dt` seconds.
    ///
    /// While in flight the position is a per-axis lerp from start to target
    /// with a sine arc added to y, and the ball shrinks from 1.0 to 0.5.
    pub fn advance(&mut self, dt: f32, flight_rate: f32, arc_height: f32) -> FlightStep {
        let FlightPhase::Animating {
            start,
            target,
            progress,
        } = self.phase
        else {
            return FlightStep::Resting;
        };

        let progress = progress + dt * flight_rate;
        if progress >= 1.0 {
            self.phase = FlightPhase::Idle;
            return FlightStep::Arrived { target };
        }

        self.phase = FlightPhase::Animating {
            start,
            target,
            progress,
        };
        let mut position = start.lerp(target, progress);
        position.y += (progress * std::f32::consts::PI).sin() * arc_height;
        FlightStep::InFlight {
            position,
            scale: 1.0 - progress * 0.5,
        }
    }

    /// Forget the flight and the dedup memory (game reset).
    pub fn reset(&mut self) {
        self.phase = FlightPhase::Idle;
        self.last_consumed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f32 = 1.5;
    const ARC: f32 = 2.0;

    fn rest() -> Vec3 {
        Vec3::new(0.0, -1.0, 5.0)
    }

    fn run_to_completion(flight: &mut BallFlight) -> Option<Vec3> {
        for _ in 0..200 {
            if let FlightStep::Arrived { target } = flight.advance(1.0 / 60.0, RATE, ARC) {
                return Some(target);
            }
        }
        None
    }

    #[test]
    fn flight_completes_in_about_two_thirds_of_a_second() {
        let mut flight = BallFlight::default();
        assert!(flight.try_begin(Vec3::new(0.0, 1.5, -5.0), rest()));

        let mut frames = 0;
        while !matches!(
            flight.advance(1.0 / 60.0, RATE, ARC),
            FlightStep::Arrived { .. }
        ) {
            frames += 1;
            assert!(frames < 200, "flight never arrived");
        }
        let elapsed = frames as f32 / 60.0;
        assert!((0.6..0.75).contains(&elapsed), "elapsed {elapsed}");
        assert!(!flight.is_animating());
    }

    #[test]
    fn midpoint_has_sine_arc_and_shrunk_ball() {
        let mut flight = BallFlight::default();
        let target = Vec3::new(0.0, 1.5, -5.0);
        assert!(flight.try_begin(target, rest()));

        // Step progress to exactly 0.5 (dt * 1.5 = 0.5)
        let step = flight.advance(1.0 / 3.0, RATE, ARC);
        let FlightStep::InFlight { position, scale } = step else {
            panic!("expected in-flight step, got {step:?}");
        };
        // lerp(-1, 1.5, 0.5) + sin(pi/2) * 2
        assert!((position.y - 2.25).abs() < 1e-4);
        assert!((position.z - 0.0).abs() < 1e-4);
        assert!((scale - 0.75).abs() < 1e-4);
    }

    #[test]
    fn identical_target_issued_twice_animates_once() {
        let mut flight = BallFlight::default();
        let target = Vec3::new(1.0, 2.0, -5.0);

        assert!(flight.try_begin(target, rest()));
        // Second identical shot while the first is in flight
        assert!(!flight.try_begin(target, rest()));
        assert_eq!(run_to_completion(&mut flight), Some(target));
        // ...and after it lands, the repeat is still dropped
        assert!(!flight.try_begin(target, rest()));

        // A different target starts a new flight
        assert!(flight.try_begin(Vec3::new(-1.0, 1.0, -5.0), rest()));
    }

    #[test]
    fn shots_during_flight_coalesce_to_the_newest() {
        let mut flight = BallFlight::default();
        let first = Vec3::new(0.0, 1.0, -5.0);
        let second = Vec3::new(2.0, 2.0, -5.0);

        assert!(flight.try_begin(first, rest()));
        assert!(!flight.try_begin(second, rest()));
        run_to_completion(&mut flight);
        assert!(flight.try_begin(second, rest()));
    }

    #[test]
    fn reset_forgets_dedup_memory() {
        let mut flight = BallFlight::default();
        let target = Vec3::new(0.0, 1.0, -5.0);
        assert!(flight.try_begin(target, rest()));
        run_to_completion(&mut flight);

        flight.reset();
        assert!(flight.try_begin(target, rest()));
    }

    #[test]
    fn idle_flight_reports_resting() {
        let mut flight = BallFlight::default();
        assert_eq!(flight.advance(0.1, RATE, ARC), FlightStep::Resting);
    }
}
