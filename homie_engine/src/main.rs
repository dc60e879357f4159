#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Homie **
//! A first day at Spelkollektivet

use homie_engine::data_paths::data_path;
use homie_engine::loader::help::load_help_or_default;
use homie_engine::loader::settings::load_settings;
use homie_engine::style::GameStyle;
use homie_engine::{HOMIE_VERSION, Session, View, ViewItem, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading homie_engine v{HOMIE_VERSION}");
    let settings = load_settings(&data_path("settings.toml"));
    colored::control::set_override(settings.color);

    let world = load_world().context("while loading the house")?;
    let help = load_help_or_default(&data_path("help.toml"));
    let mut session = Session::new(world).with_help(help);
    info!("world loaded successfully");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    println!("{}\n", session.world.title.title_style());
    let mut view = View::new(&settings);
    view.push(ViewItem::Reply(session.world.intro.clone()));
    view.push(ViewItem::Pause);
    view.flush();

    run_repl(&mut session, &settings)
}
