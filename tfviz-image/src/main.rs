/// TFViz Image Renderer
///
/// Renders the built-in transformation galleries to PNG contact sheets and
/// prints every demo's matrix to stdout.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use tfviz_core::{demos, Scene};
use tfviz_image::contact_sheet;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Mode {
    #[value(name = "2d")]
    Planar,
    #[value(name = "3d")]
    Spatial,
    Both,
}

#[derive(Parser)]
#[command(name = "tfviz-image")]
#[command(about = "Render affine transformation demos to PNG contact sheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory the PNG files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Which galleries to render
    #[arg(long, value_enum, default_value = "both")]
    mode: Mode,

    /// Panel size in pixels
    #[arg(long, default_value_t = 360)]
    panel_width: u32,

    /// Panel size in pixels
    #[arg(long, default_value_t = 360)]
    panel_height: u32,
}

fn render_gallery(cli: &Cli, label: &str, scenes: &[Scene], file_name: &str) -> Result<()> {
    println!("{label} transformations:");
    for scene in scenes {
        println!("\n{}:\n{}", scene.title(), scene.matrix());
    }

    let sheet = contact_sheet(scenes, 3, cli.panel_width, cli.panel_height)
        .with_context(|| format!("rendering {label} gallery"))?;
    let path = cli.out_dir.join(file_name);
    sheet
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if !cli.out_dir.is_dir() {
        std::fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    }

    if cli.mode != Mode::Spatial {
        let planar = demos::planar_gallery()?;
        render_gallery(&cli, "2D", &planar, "transformations_2d.png")?;
    }
    if cli.mode != Mode::Planar {
        let spatial = demos::spatial_gallery()?;
        render_gallery(&cli, "3D", &spatial, "transformations_3d.png")?;
    }

    Ok(())
}
