//! Command-line front end: render a saved layout file to PNG.

use anyhow::{bail, Context, Result};
use boothkit_designer::{LayoutFile, RenderOptions, Renderer};
use boothkit_settings::{Config, ExportSettings};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: boothkit <layout.json> <output.png> [multiplier] [options]

Options:
  --no-background      leave the canvas transparent
  --no-sample-photos   draw camera slots as placeholders
  -V, --version        print version
  -h, --help           print this help";

#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    pub layout: PathBuf,
    pub output: PathBuf,
    pub multiplier: Option<f32>,
    pub no_background: bool,
    pub no_sample_photos: bool,
}

impl ExportArgs {
    /// Render options: configured defaults overridden by flags.
    pub fn render_options(&self, defaults: &ExportSettings) -> RenderOptions {
        let mut options = RenderOptions::from(defaults);
        if let Some(multiplier) = self.multiplier {
            options.multiplier = multiplier;
        }
        if self.no_background {
            options.include_background = false;
        }
        if self.no_sample_photos {
            options.include_sample_photos = false;
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Export(ExportArgs),
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut no_background = false;
    let mut no_sample_photos = false;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-background" => no_background = true,
            "--no-sample-photos" => no_sample_photos = true,
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let (Some(layout), Some(output)) = (positional.next(), positional.next()) else {
        bail!("expected a layout file and an output path");
    };
    let multiplier = positional
        .next()
        .map(|m| {
            let value: f32 = m
                .parse()
                .with_context(|| format!("invalid multiplier '{}'", m))?;
            if !(value > 0.0) || !value.is_finite() {
                bail!("multiplier must be positive, got {}", value);
            }
            Ok(value)
        })
        .transpose()?;
    if let Some(extra) = positional.next() {
        bail!("unexpected argument '{}'", extra);
    }

    Ok(Command::Export(ExportArgs {
        layout: PathBuf::from(layout),
        output: PathBuf::from(output),
        multiplier,
        no_background,
        no_sample_photos,
    }))
}

/// Load the layout file and export it.
pub fn run_export(args: &ExportArgs, config: &Config) -> Result<()> {
    let file = LayoutFile::load_from_file(&args.layout)?;
    let layout = file.to_layout()?;
    tracing::info!(
        "Loaded '{}' ({} elements, {}x{})",
        file.metadata.name,
        layout.len(),
        layout.width,
        layout.height
    );

    let renderer = Renderer::from_settings(&config.fonts);
    let options = args.render_options(&config.export);
    renderer
        .export_png(&layout, &args.output, &options)
        .with_context(|| format!("Failed to export {}", args.output.display()))?;
    Ok(())
}
