use bevy::{log::LogPlugin, prelude::*};
use serde::Serialize;
use std::env;

use aerobat::{
    components::{aircraft::ControlInput, FlightModel, FlightPhase, InstrumentReadout},
    plugins::{FlightPlugin, FlightSet, ResetKind, ResetRequestEvent},
    resources::{Score, SimulationConfig, WorldGeometry},
    utils::{Result, SimError},
};

/// Simulated seconds before a run is abandoned.
const RUN_SECONDS: f64 = 90.0;
const TELEMETRY_EVERY: u64 = 30;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
enum Scenario {
    Takeoff,
    PracticeLanding,
}

impl Scenario {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "takeoff" => Ok(Scenario::Takeoff),
            "practice-landing" => Ok(Scenario::PracticeLanding),
            other => Err(SimError::InvalidConfig(format!(
                "unknown scenario '{}', expected 'takeoff' or 'practice-landing'",
                other
            ))),
        }
    }
}

#[derive(Serialize)]
struct TelemetryLine<'a> {
    frame: u64,
    time: f64,
    #[serde(flatten)]
    readout: &'a InstrumentReadout,
}

#[derive(Serialize)]
struct Summary {
    frames: u64,
    time: f64,
    phase: FlightPhase,
    score: u32,
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let scenario = Scenario::parse(args.next().as_deref().unwrap_or("takeoff"))?;
    let config = match args.next() {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(FlightPlugin::try_new(config)?)
        .insert_resource(scenario)
        .add_systems(Update, autopilot_system.before(FlightSet::Physics));
    app.update();

    if scenario == Scenario::PracticeLanding {
        app.world_mut()
            .send_event(ResetRequestEvent::all(ResetKind::PracticeLanding));
    }

    let mut frame = 0;
    let mut elapsed = 0.0;
    let mut phase = FlightPhase::Grounded;
    while elapsed < RUN_SECONDS {
        app.update();
        frame += 1;

        let (readout, current) = {
            let world = app.world_mut();
            elapsed += frame_step(world);

            let mut query = world.query::<&FlightModel>();
            let Ok(model) = query.get_single(world) else {
                return Err(SimError::InvalidConfig(
                    "expected exactly one aircraft".to_string(),
                ));
            };
            let geometry = world.resource::<WorldGeometry>();
            (model.instruments(&geometry.terrain), model.phase())
        };
        phase = current;

        if frame % TELEMETRY_EVERY == 0 || phase.is_terminal() {
            let line = TelemetryLine {
                frame,
                time: elapsed,
                readout: &readout,
            };
            println!("{}", serde_json::to_string(&line)?);
        }
        if phase.is_terminal() {
            break;
        }
    }

    let summary = Summary {
        frames: frame,
        time: elapsed,
        phase,
        score: app.world().resource::<Score>().points,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

/// Simulated seconds the flight systems advanced during the last frame.
fn frame_step(world: &World) -> f64 {
    let frame_time = world.resource::<Time>().delta_secs_f64();
    world.resource::<SimulationConfig>().step_length(frame_time)
}

/// Flies the selected scenario with simple proportional control.
fn autopilot_system(scenario: Res<Scenario>, mut query: Query<(&FlightModel, &mut ControlInput)>) {
    for (model, mut input) in query.iter_mut() {
        *input = match *scenario {
            Scenario::Takeoff => takeoff_controls(model),
            Scenario::PracticeLanding => approach_controls(model),
        };
    }
}

fn takeoff_controls(model: &FlightModel) -> ControlInput {
    let target_pitch = if model.speed() < 60.0 {
        0.0
    } else if model.position().y < 300.0 {
        12f64.to_radians()
    } else {
        0.0
    };
    hold(model, target_pitch, 90.0)
}

fn approach_controls(model: &FlightModel) -> ControlInput {
    hold(model, (-8f64).to_radians(), 65.0)
}

fn hold(model: &FlightModel, target_pitch: f64, target_speed: f64) -> ControlInput {
    let pitch = (target_pitch - model.current_pitch()) * 4.0;
    let speed_error = target_speed - model.speed();
    ControlInput::new(pitch, 0.0, 0.0)
        .with_throttle((speed_error * 0.2).max(0.0))
        .with_brake((-speed_error * 0.2).max(0.0))
        .clamped()
}
