#![cfg_attr(not(feature = "console"), windows_subsystem = "windows")]

mod game;
mod gui;

use anyhow::Context;
use counter::GameOptions;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = GameOptions::from_env().context("Failed to read game options")?;
    log::info!("Starting points: {}", options.starting_points);

    gui::run(options)
}
