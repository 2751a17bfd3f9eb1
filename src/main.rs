//! Scrollrunner main entry point.
//!
//! A side-scrolling platformer written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system world
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window and the fixed-size render target
//! 2. Insert resources, register the state hooks and observers
//! 3. Enter the `Setup` state, which spawns the player and the first level
//! 4. Run the schedule once per frame:
//!    - Poll input, patrol enemies, spin coins, update the player and camera
//!    - Handle the confirm key on message screens, apply pending state changes
//!    - Render the canvas and scale it into the window
//! 5. Stop when the window closes, Escape is pressed or the game quits
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level 3 --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use scrollrunner::events::gamestate::GameStateChangedEvent;
use scrollrunner::game;
use scrollrunner::resources::debugmode::DebugMode;
use scrollrunner::resources::gameconfig::GameConfig;
use scrollrunner::resources::gamestate::{GameState, GameStates, NextGameState};
use scrollrunner::resources::input::InputState;
use scrollrunner::resources::level::{LevelBounds, LevelProgress};
use scrollrunner::resources::rendertarget::RenderTarget;
use scrollrunner::resources::screensize::ScreenSize;
use scrollrunner::resources::scroll::Scroll;
use scrollrunner::resources::worldtime::WorldTime;
use scrollrunner::systems::gamestate::{check_pending_state, quit_controller};
use scrollrunner::systems::input::update_input_state;
use scrollrunner::systems::render::render_system;
use scrollrunner::systems::time::update_world_time;

/// Scrollrunner, a side-scrolling platformer.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to read (and write with --write-config).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level to start on (1-based).
    #[arg(long, value_name = "N")]
    level: Option<u32>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    // Early-exit: dump the config and quit (no window needed)
    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Refuse a start level that does not exist before opening the window
    let start_level = cli.level.unwrap_or(1);
    let progress = match LevelProgress::new(config.max_levels).starting_at(start_level) {
        Ok(progress) => progress,
        Err(e) => {
            error!("Invalid --level: {}", e);
            std::process::exit(2);
        }
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Scrollrunner");
    if config.vsync {
        builder.vsync();
    }
    if config.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as a game key
    rl.set_exit_key(None);

    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(config.level_source());
    world.insert_resource(progress);
    world.insert_resource(LevelBounds::default());
    world.insert_resource(Scroll::default());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::install(&mut world);

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // Enter Setup immediately
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(quit_controller));
    game::add_simulation_systems(&mut update);
    update.add_systems(render_system.after(check_pending_state));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Bye");
}
