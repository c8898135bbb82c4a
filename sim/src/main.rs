//! sim: drive one character controller through a scripted timeline, headless.
//!
//! Usage:
//!   cargo run -p sim -- [config.toml]
//! Example:
//!   RUST_LOG=debug cargo run -p sim -- sim/locomotion.toml

mod script;
mod world;

use anyhow::{Context, Result};
use locomotion::{
    CharacterBodySettings, CharacterController, Environment, KinematicBody, LocomotionConfig,
    RapierCharacter, Vec3,
};
use log::{info, warn};

use script::{ScriptPlayer, default_timeline};

/// Simulation tick frequency (Hz).
const TICK_HZ: u32 = 60;

/// Max dt (seconds) handed to the controller; longer frames are clamped.
const MAX_DT_S: f32 = 0.10;

/// Seconds between status lines.
const LOG_INTERVAL_S: f32 = 1.0;

const BUNDLED_CONFIG: &str = include_str!("../locomotion.toml");

fn load_config() -> Result<LocomotionConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text =
                std::fs::read_to_string(&path).with_context(|| format!("read config '{path}'"))?;
            let config = LocomotionConfig::from_toml_str(&text)
                .with_context(|| format!("parse config '{path}'"))?;
            info!("config: {path}");
            Ok(config)
        }
        None => {
            let config =
                LocomotionConfig::from_toml_str(BUNDLED_CONFIG).context("parse bundled config")?;
            info!("config: bundled defaults");
            Ok(config)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let world = world::build_world();
    let [x, y, z] = world::SPAWN;
    let body = RapierCharacter::new(&world, CharacterBodySettings::default(), Vec3::new(x, y, z));
    let mut controller =
        CharacterController::new(config, &world, body).context("build character controller")?;

    let env = Environment::default();
    let tick_s = 1.0 / TICK_HZ as f32;
    let mut player = ScriptPlayer::new(default_timeline());
    let end_s = player.end_s();

    let mut t = 0.0f32;
    let mut next_log_s = 0.0f32;
    let mut ticks = 0u32;
    while t <= end_s || !player.is_finished() {
        let frame = player.sample(t);
        let real_dt = frame.hitch_s.unwrap_or(tick_s);
        let dt = real_dt.clamp(0.0, MAX_DT_S);
        if real_dt > MAX_DT_S {
            warn!("t={t:6.2}s frame took {real_dt:.3}s, clamped to {dt:.3}s");
        }

        controller.body_mut().set_tick_dt(dt);
        let out = controller.update(dt, &frame.input, &env);
        t += dt;
        ticks += 1;

        if t >= next_log_s {
            let pos = controller.body().position();
            info!(
                "t={t:6.2}s pos=({:7.2},{:5.2},{:7.2}) speed={:5.2} mode={:?} grounded={} stamina={:3.0}%",
                pos.x,
                pos.y,
                pos.z,
                out.velocity.xz().norm(),
                controller.state().mode(),
                out.grounded,
                out.stamina_fraction * 100.0,
            );
            next_log_s += LOG_INTERVAL_S;
        }
    }

    let pos = controller.body().position();
    info!(
        "done after {ticks} ticks: pos=({:.2},{:.2},{:.2}) on ledge={}",
        pos.x,
        pos.y,
        pos.z,
        pos.z < world::LEDGE_FACE_Z && pos.y > world::LEDGE_HEIGHT,
    );
    Ok(())
}
