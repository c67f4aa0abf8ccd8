use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::{
    components::{
        aircraft::{
            stall::{self, RotationDeltas, StallContext},
            AircraftState, ControlInput, FlightConfig, FlightPhase, PhaseTransition,
            TransitionCause,
        },
        collision::{CollisionResolver, Obstacle},
        instruments::InstrumentReadout,
        tasks::{evaluate_touchdown, TouchdownVerdict},
        terrain::TerrainSampler,
    },
    utils::{bank_angle, forward, level_attitude, pitch_angle, radial_distance, rotate_body},
};

/// Final approach pose used by the practice landing scenario.
const PRACTICE_POSITION: [f64; 3] = [0.0, 150.0, -1000.0];
const PRACTICE_GLIDESLOPE_DEG: f64 = -5.0;
const PRACTICE_SPEED: f64 = 60.0;

/// Turn rate below which no coordinated turn is applied (rad/s).
const MIN_TURN_RATE: f64 = 0.001;
/// Bank tolerated before auto-level engages (rad).
const AUTO_LEVEL_DEADBAND: f64 = 0.01;

/// Snapshot returned after every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    pub speed: f64,
    pub phase: FlightPhase,
    /// Phase changes raised during the step, in the order they happened
    pub transitions: Vec<PhaseTransition>,
}

/// Arcade flight model for a single aircraft.
///
/// Owns the aircraft state exclusively; everything else (terrain, obstacles, pilot
/// input) is handed in per call. Once the aircraft has landed or crashed the state is
/// frozen until [`FlightModel::reset`] or [`FlightModel::setup_practice_landing`].
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightModel {
    config: FlightConfig,
    state: AircraftState,
}

impl FlightModel {
    /// A parked aircraft at the runway centre.
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            state: AircraftState::default(),
        }
    }

    /// Starts from an arbitrary state.
    ///
    /// Speed is clamped into range, the attitude renormalized and any non-terminal phase
    /// recomputed from the airborne latch and speed.
    pub fn with_state(config: FlightConfig, mut state: AircraftState) -> Self {
        state.orientation.renormalize();
        state.speed = config.clamp_speed(state.speed);
        if !state.phase.is_terminal() {
            state.phase = if !state.was_airborne {
                FlightPhase::Grounded
            } else if state.speed < config.stall.stall_speed {
                FlightPhase::Stalled
            } else {
                FlightPhase::Airborne
            };
        }
        Self { config, state }
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn phase(&self) -> FlightPhase {
        self.state.phase
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.state.position
    }

    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.state.orientation
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn is_stalled(&self) -> bool {
        self.state.phase == FlightPhase::Stalled
    }

    /// Bank angle from the right wing, valid at any pitch.
    pub fn current_roll(&self) -> f64 {
        bank_angle(&self.state.orientation)
    }

    pub fn current_pitch(&self) -> f64 {
        pitch_angle(&self.state.orientation)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// A landed or crashed aircraft is left untouched. Non-finite or negative `dt` is
    /// ignored.
    pub fn step<T>(&mut self, dt: f64, input: &ControlInput, terrain: &T) -> StepOutcome
    where
        T: TerrainSampler + ?Sized,
    {
        if self.state.phase.is_terminal() {
            return self.outcome(Vec::new());
        }
        if !dt.is_finite() || dt < 0.0 {
            warn!("Ignoring flight step with invalid dt {}", dt);
            return self.outcome(Vec::new());
        }

        let input = input.clamped();
        let mut transitions = Vec::new();

        self.integrate_speed(&input, dt);
        transitions.extend(self.update_stall());

        let mut deltas = RotationDeltas::from_input(&input, &self.config, dt);
        if self.state.phase == FlightPhase::Stalled {
            let position = self.state.position;
            let ctx = StallContext {
                speed: self.state.speed,
                agl: self.state.agl(terrain.ground_height(position.x, position.z)),
                pitch: pitch_angle(&self.state.orientation),
                bank: bank_angle(&self.state.orientation),
                roll_input: input.roll,
                roll_rate: self.config.roll_rate,
                dt,
            };
            deltas = stall::recover(deltas, &ctx, &self.config.stall);
        }

        let (heading_vector, current_roll) = self.rotate(deltas, input.roll, dt);
        self.integrate_position(&heading_vector, current_roll, dt);
        transitions.extend(self.resolve_ground(terrain, dt));

        self.outcome(transitions)
    }

    /// Crashes into the first obstacle containing the aircraft.
    ///
    /// Returns the transition when a new crash was registered. A landed or crashed
    /// aircraft never collides.
    pub fn resolve_collisions(&mut self, obstacles: &[Obstacle]) -> Option<PhaseTransition> {
        if self.state.phase.is_terminal() {
            return None;
        }
        let index = CollisionResolver::check(&self.state.position, obstacles)?;
        debug!("Obstacle {} hit at {:?}", index, self.state.position);
        Some(self.crash(TransitionCause::ObstacleImpact))
    }

    /// True if this call registered a new crash.
    pub fn check_collisions(&mut self, obstacles: &[Obstacle]) -> bool {
        self.resolve_collisions(obstacles).is_some()
    }

    /// Parks the aircraft back at the runway centre.
    pub fn reset(&mut self) -> Option<PhaseTransition> {
        self.replace_state(AircraftState::default(), TransitionCause::Reset)
    }

    /// Places the aircraft on final approach facing the runway.
    pub fn setup_practice_landing(&mut self) -> Option<PhaseTransition> {
        let [x, y, z] = PRACTICE_POSITION;
        let orientation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), PI)
            * UnitQuaternion::from_axis_angle(
                &Vector3::x_axis(),
                PRACTICE_GLIDESLOPE_DEG.to_radians(),
            );
        let state = AircraftState::airborne(Vector3::new(x, y, z), orientation, PRACTICE_SPEED);
        self.replace_state(state, TransitionCause::PracticeLanding)
    }

    pub fn instruments<T>(&self, terrain: &T) -> InstrumentReadout
    where
        T: TerrainSampler + ?Sized,
    {
        InstrumentReadout::capture(self, terrain)
    }

    fn replace_state(
        &mut self,
        state: AircraftState,
        cause: TransitionCause,
    ) -> Option<PhaseTransition> {
        let from = self.state.phase;
        self.state = state;
        let to = self.state.phase;
        info!("Aircraft state replaced ({:?}), phase {} -> {}", cause, from, to);
        (from != to).then_some(PhaseTransition { from, to, cause })
    }

    fn integrate_speed(&mut self, input: &ControlInput, dt: f64) {
        let config = &self.config;
        let state = &mut self.state;

        let nose = forward(&state.orientation);
        let mut speed = state.speed - nose.y * config.gravity * config.dive_gain * dt;

        if input.throttle > 0.0 {
            speed += config.acceleration * input.throttle * dt;
        } else if input.brake > 0.0 {
            speed -= config.acceleration * input.brake * dt;
        } else {
            speed -= speed * config.drag_coefficient * dt;
        }

        state.speed = config.clamp_speed(speed);
    }

    fn update_stall(&mut self) -> Option<PhaseTransition> {
        if !self.state.was_airborne {
            return None;
        }
        let below_stall = self.state.speed < self.config.stall.stall_speed;
        match (self.state.phase, below_stall) {
            (FlightPhase::Airborne, true) => {
                self.transition(FlightPhase::Stalled, TransitionCause::StallEntered)
            }
            (FlightPhase::Stalled, false) => {
                self.transition(FlightPhase::Airborne, TransitionCause::StallRecovered)
            }
            _ => None,
        }
    }

    /// Applies pilot rotations, the coordinated turn and auto-level.
    ///
    /// Returns the nose direction and bank after the pilot rotations, which drive this
    /// step's velocity.
    fn rotate(&mut self, deltas: RotationDeltas, roll_input: f64, dt: f64) -> (Vector3<f64>, f64) {
        let mut attitude = self.state.orientation;
        if deltas.pitch != 0.0 {
            attitude = rotate_body(&attitude, &Vector3::x_axis(), deltas.pitch);
        }
        if deltas.yaw != 0.0 {
            attitude = rotate_body(&attitude, &Vector3::y_axis(), deltas.yaw);
        }
        if deltas.roll != 0.0 {
            attitude = rotate_body(&attitude, &Vector3::z_axis(), deltas.roll);
        }

        let nose = forward(&attitude);
        let current_roll = bank_angle(&attitude);

        let turn_rate = current_roll * self.config.banking_turn_rate;
        if turn_rate.abs() > MIN_TURN_RATE {
            attitude = rotate_body(&attitude, &Vector3::y_axis(), turn_rate * dt);
        }

        if roll_input == 0.0 && current_roll.abs() > AUTO_LEVEL_DEADBAND {
            attitude = rotate_body(
                &attitude,
                &Vector3::z_axis(),
                -current_roll * self.config.auto_level_rate * dt,
            );
        }

        self.state.orientation = attitude;
        (nose, current_roll)
    }

    fn integrate_position(&mut self, nose: &Vector3<f64>, current_roll: f64, dt: f64) {
        let config = &self.config;
        let state = &mut self.state;

        // Banking tilts lift away from vertical
        let lift = state.speed / config.lift_reference_speed * config.gravity * current_roll.cos();
        let mut velocity = nose * state.speed;
        velocity.y -= (config.gravity - lift) * dt;

        state.velocity = velocity;
        state.position += velocity * dt;
    }

    fn resolve_ground<T>(&mut self, terrain: &T, dt: f64) -> Option<PhaseTransition>
    where
        T: TerrainSampler + ?Sized,
    {
        let ground = self.config.ground.clone();
        let position = self.state.position;

        if radial_distance(&position) > ground.runway_radius {
            let height = terrain.ground_height(position.x, position.z);
            if height > 0.0 && position.y < height + ground.terrain_margin {
                return Some(self.crash(TransitionCause::TerrainImpact));
            }
        }

        let mut transition = None;
        if !self.state.was_airborne && position.y > ground.airborne_altitude {
            self.state.was_airborne = true;
            transition = self.transition(FlightPhase::Airborne, TransitionCause::Takeoff);
        }

        if position.y < ground.contact_altitude {
            self.state.position.y = ground.contact_altitude;

            if self.state.was_airborne {
                match evaluate_touchdown(
                    &self.state.position,
                    self.state.speed,
                    &self.state.orientation,
                    &self.config.landing,
                ) {
                    TouchdownVerdict::Landed => {
                        transition = self.transition(FlightPhase::Landed, TransitionCause::Landing);
                    }
                    TouchdownVerdict::RollOut => {
                        self.state.orientation = level_attitude(&self.state.orientation);
                    }
                    TouchdownVerdict::Crash(fault) => {
                        return Some(self.crash(TransitionCause::FailedLanding(fault)));
                    }
                }
            }

            let state = &mut self.state;
            state.velocity.y = 0.0;
            state.speed = (state.speed - state.speed * ground.rolling_friction * dt).max(0.0);
            if state.speed < ground.stop_speed {
                state.speed = 0.0;
            }
        }

        transition
    }

    fn transition(&mut self, to: FlightPhase, cause: TransitionCause) -> Option<PhaseTransition> {
        let from = self.state.phase;
        if from == to {
            return None;
        }
        self.state.phase = to;
        info!("Flight phase {} -> {} ({:?})", from, to, cause);
        Some(PhaseTransition { from, to, cause })
    }

    fn crash(&mut self, cause: TransitionCause) -> PhaseTransition {
        let from = self.state.phase;
        self.state.phase = FlightPhase::Crashed;
        self.state.speed = 0.0;
        self.state.velocity = Vector3::zeros();
        info!(
            "Crashed at {:?} while {} ({:?})",
            self.state.position, from, cause
        );
        PhaseTransition {
            from,
            to: FlightPhase::Crashed,
            cause,
        }
    }

    fn outcome(&self, transitions: Vec<PhaseTransition>) -> StepOutcome {
        StepOutcome {
            position: self.state.position,
            orientation: self.state.orientation,
            velocity: self.state.velocity,
            speed: self.state.speed,
            phase: self.state.phase,
            transitions,
        }
    }
}
