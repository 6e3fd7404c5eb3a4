//! Controller Demo
//!
//! Headless walkthrough of the character rig: ten simulated seconds at a
//! fixed 60 Hz step over the flat-ground mover, driving a scripted input
//! sequence (walk, jump, dash, turn) and logging the resulting body and
//! camera state. No window, no renderer.
//!
//! Usage:
//!
//! ```text
//! controller-demo [tuning.json]
//! RUST_LOG=debug controller-demo    # also shows dash state transitions
//! ```

use glam::{Vec2, Vec3};

use quickstep_engine::config::ControllerConfig;
use quickstep_engine::input::InputState;
use quickstep_engine::physics::FlatGroundMover;
use quickstep_engine::rig::CharacterRig;

const DT: f32 = 1.0 / 60.0;
const SIM_SECONDS: f32 = 10.0;
const CAMERA_REST: Vec3 = Vec3::new(0.0, 1.6, 0.0);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let mut rig = match CharacterRig::new(config, CAMERA_REST) {
        Ok(rig) => rig,
        Err(err) => {
            log::error!("rejected controller config: {err}");
            std::process::exit(1);
        }
    };
    let mut mover = FlatGroundMover::new();

    let frames = (SIM_SECONDS / DT) as u32;
    for frame in 0..frames {
        let time = frame as f32 * DT;
        let input = scripted_input(frame);
        let pose = rig.update(&input, DT, &mut mover);

        // Two status lines per simulated second
        if frame % 30 == 0 {
            let position = mover.position();
            log::info!(
                "t={time:5.2}s pos=({:6.2}, {:5.2}, {:6.2}) yaw={:6.1}° pitch={:5.1}° \
                 fov={:5.1}° bob={:+.3} grounded={} dashing={}",
                position.x,
                position.y,
                position.z,
                rig.body_yaw_deg(),
                pose.pitch_deg,
                pose.fov_deg,
                (pose.local_position - CAMERA_REST).y,
                rig.motion().is_grounded(),
                rig.motion().is_dashing(),
            );
        }
    }

    log::info!(
        "walkthrough done: final position ({:.2}, {:.2}, {:.2})",
        mover.position().x,
        mover.position().y,
        mover.position().z
    );
}

/// The scripted ten seconds: walk, jump at 2 s, dash at 4 s and 6 s, a
/// turning walk from 6 s, idle for the last two seconds.
fn scripted_input(frame: u32) -> InputState {
    let time = frame as f32 * DT;

    if time < 8.0 {
        InputState {
            movement: Vec2::new(0.0, 1.0),
            look: if (6.0..8.0).contains(&time) {
                Vec2::new(1.5, 0.0)
            } else {
                Vec2::ZERO
            },
            jump_requested: frame == 120,
            dash_requested: frame == 240 || frame == 360,
            sprint: false,
        }
    } else {
        InputState::idle()
    }
}

fn load_config() -> ControllerConfig {
    match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match ControllerConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("loaded tuning from {path}");
                    config
                }
                Err(err) => {
                    log::error!("invalid tuning file {path}: {err}");
                    std::process::exit(1);
                }
            },
            Err(err) => {
                log::error!("cannot read {path}: {err}");
                std::process::exit(1);
            }
        },
        None => ControllerConfig::default(),
    }
}
