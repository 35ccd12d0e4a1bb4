//! Headless scene editor host
//!
//! Drives the editor controller for a fixed number of frames against a
//! recording render backend, optionally playing the simulation and exporting
//! the resulting scene.

use clap::Parser;
use scene_engine::assets::{BuiltinAssets, ImageError};
use scene_engine::core::{Config, ConfigError, EditorConfig};
use scene_engine::editor::{Console, EditorState};
use scene_engine::export::{JobState, TargetPlatform};
use scene_engine::foundation::{logging, time::Timer};
use scene_engine::input::RawInput;
use scene_engine::render::RecordingBackend;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed step used by the headless loop
const FRAME_STEP: f32 = 1.0 / 60.0;

#[derive(Debug, Parser)]
#[command(author, version, about = "Headless scene editor and exporter")]
struct Cli {
    /// Editor configuration file (.toml or .ron)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Start in play mode
    #[arg(long)]
    play: bool,

    /// Console commands to run before the first frame
    #[arg(long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Export the scene after the last frame (desktop or android)
    #[arg(long)]
    export: Option<TargetPlatform>,

    /// Write the export without launching its build script
    #[arg(long)]
    no_build: bool,

    /// Step frames by wall-clock time instead of a fixed 1/60 s
    #[arg(long)]
    realtime: bool,

    /// Save the built-in checkerboard texture to this image file
    #[arg(long, value_name = "PATH")]
    save_checkerboard: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("asset error: {0}")]
    Asset(#[from] ImageError),

    #[error("{platform} export failed: {message}")]
    Export { platform: TargetPlatform, message: String },
}

fn load_config(cli: &Cli) -> Result<EditorConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => EditorConfig::load_from_file(path)?,
        None => EditorConfig::default(),
    };
    if cli.no_build {
        config.export.launch_build = false;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli, config: EditorConfig) -> Result<(), AppError> {
    let assets = BuiltinAssets::new();
    if let Some(path) = &cli.save_checkerboard {
        assets.save_checkerboard(path)?;
        log::info!("Checkerboard saved to {}", path.display());
    }

    let mut editor = EditorState::new(config);
    let mut console = Console::new();
    let mut backend = RecordingBackend::new();
    let mut timer = Timer::new();

    for line in &cli.commands {
        console.submit(&mut editor, line);
    }
    if cli.play && !editor.is_playing() {
        editor.toggle_play();
    }

    for _ in 0..cli.frames {
        if cli.realtime {
            timer.update();
        } else {
            timer.advance(FRAME_STEP);
        }
        editor.tick(RawInput::default(), timer.delta_time());
        backend.clear();
        editor.draw(&mut backend);
    }
    log::info!(
        "Ran {} frames ({:.2}s simulated): {}",
        timer.frame_count(),
        timer.total_time(),
        editor.status_line()
    );

    let triangles: usize = backend.meshes().map(|cmd| assets.mesh(cmd.mesh).triangle_count()).sum();
    let textured_pixels: u32 = backend
        .meshes()
        .filter_map(|cmd| cmd.texture)
        .map(|texture| {
            let (width, height) = assets.texture(texture).dimensions();
            width * height
        })
        .sum();
    log::info!(
        "Last frame: {} draw calls, {} triangles, {} texels bound, {} debug lines",
        backend.meshes().count(),
        triangles,
        textured_pixels,
        backend.line_count()
    );

    for (_, entity) in editor.scene().iter() {
        let p = entity.transform.position;
        log::info!("{}: ({:.3}, {:.3}, {:.3})", entity.name, p.x, p.y, p.z);
    }

    if let Some(platform) = cli.export {
        editor.request_export(platform);
    }
    match editor.wait_for_export() {
        JobState::Failed { platform, message } => Err(AppError::Export { platform, message }),
        JobState::Finished { output_dir, .. } => {
            println!("{}", output_dir.display());
            Ok(())
        }
        JobState::Idle | JobState::Running { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            logging::init("info");
            log::error!("{}", AppError::from(err));
            std::process::exit(2);
        }
    };
    logging::init(&config.log_level);

    if let Err(err) = run(&cli, config) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
