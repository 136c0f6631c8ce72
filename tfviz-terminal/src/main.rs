/// TFViz Terminal Viewer
///
/// Browses the built-in transformation galleries in the terminal.
/// Controls:
///   - Left/Right: Previous/next demo
///   - Tab: Switch between the 2D and 3D galleries
///   - WASD / E/R: Spin the 3D view, 0 resets
///   - Q/ESC: Quit
use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use tfviz_core::{demos, Dim};
use tfviz_terminal::TerminalApp;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Gallery {
    #[value(name = "2d")]
    Planar,
    #[value(name = "3d")]
    Spatial,
}

#[derive(Parser)]
#[command(name = "tfviz-terminal")]
#[command(about = "Interactive terminal viewer for affine transformation demos", long_about = None)]
#[command(version)]
struct Cli {
    /// Gallery to open at startup
    #[arg(long, value_enum, default_value = "2d")]
    mode: Gallery,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let planar = demos::planar_gallery()?;
    let spatial = demos::spatial_gallery()?;

    let gallery = match cli.mode {
        Gallery::Planar => Dim::Planar,
        Gallery::Spatial => Dim::Spatial,
    };

    let mut app = TerminalApp::new(planar, spatial, gallery)?;
    app.run()?;

    Ok(())
}
