//! Desktop runner for the LOAX host shim.
//!
//! Opens a window and drives an [`Activity`] from Winit. The engine on
//! the other side of the boundary only logs what it receives (run with
//! `RUST_LOG=shim=debug` to see every call), and the sensor and GPS
//! services report no hardware.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=shim=debug cargo run --bin loax-desktop -- --allow-key-repeat
//! ```

use std::thread;

use clap::Parser;
use log::{error, info};
use loax_shim::prelude::*;
use loax_shim::DesktopHost;

/// LOAX desktop host
#[derive(Parser)]
#[command(version, about = "Runs the LOAX host shim in a desktop window")]
struct Cli {
    /// Forward auto-repeated key presses to the engine.
    #[arg(long)]
    allow_key_repeat: bool,

    /// Bound the engine command queue (unbounded when omitted).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    command_capacity: Option<u32>,

    /// Post every enable command from a background thread at startup.
    #[arg(long)]
    demo_commands: bool,

    /// Window title.
    #[arg(long, default_value = "LOAX")]
    title: String,
}

/// Engine that accepts every call and does nothing with it.
struct DiscardEngine;

impl EngineBoundary for DiscardEngine {
    fn key_down(&mut self, _ascii: u8, _meta: i32) {}
    fn key_up(&mut self, _ascii: u8, _meta: i32) {}
    fn button_down(&mut self, _device_id: i32, _keycode: i32) {}
    fn button_up(&mut self, _device_id: i32, _keycode: i32) {}
    fn axis_move(&mut self, _device_id: i32, _axis: i32, _value: f32) {}
    fn touch(&mut self, _action: i32, _count: i32, _points: &[(f32, f32); 4]) {}
    fn accelerometer(&mut self, _ax: f32, _ay: f32, _az: f32, _rotation: i32) {}
    fn gyroscope(&mut self, _ax: f32, _ay: f32, _az: f32) {}
    fn magnetometer(&mut self, _mx: f32, _my: f32, _mz: f32) {}
    fn gps(&mut self, _lat: f64, _lon: f64, _acc: f32, _alt: f32, _speed: f32, _bearing: f32) {}
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut builder = ActivityBuilder::new(LoggingBoundary::new(DiscardEngine), Box::new(NullRenderSurface))
        .with_key_repeat_filter(!cli.allow_key_repeat)
        .with_sensors(Box::new(NullSensorService), Box::new(FixedRotation(Rotation::Deg0)))
        .with_location(Box::new(NullLocationService));
    if let Some(capacity) = cli.command_capacity {
        builder = builder.with_command_capacity(capacity as usize);
    }
    let activity = builder.build();

    if cli.demo_commands {
        let sender = activity.command_sender();
        thread::spawn(move || {
            for command in Command::ALL.into_iter().filter(|c| c.enables()) {
                info!(target: "shim", "Demo engine posting {:?}", command);
                sender.post(command);
            }
        });
    }

    if let Err(e) = DesktopHost::new(activity).with_title(cli.title).run() {
        error!(target: "shim", "{}", e);
        std::process::exit(1);
    }
}
