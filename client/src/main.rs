mod game;
mod interface;
mod settings;

use bevy::prelude::*;
use clap::Parser;

use game::GamePlugin;
use interface::InterfacePlugin;
use settings::{Args, Settings};

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let args = Args::parse();
    let settings = match Settings::try_from(args) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings::WINDOW_TITLE.to_string(),
                resolution: (settings.window_width(), settings.window_height()).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(settings)
        .add_plugins((GamePlugin, InterfacePlugin))
        .add_systems(Startup, init_camera)
        .run();
}
