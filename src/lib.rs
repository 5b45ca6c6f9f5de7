//! # BoothKit
//!
//! Layout editor engine for photo-booth print templates, plus a headless
//! exporter that renders saved layouts to PNG.
//!
//! ## Architecture
//!
//! BoothKit is organized as a workspace with multiple crates:
//!
//! 1. **boothkit-core** - Error taxonomy, constants, event bus
//! 2. **boothkit-settings** - Editor, export and font configuration
//! 3. **boothkit-designer** - Document model, editing session, history,
//!    serialization and rendering
//! 4. **boothkit** - This crate: logging setup and the command-line exporter

pub mod cli;

pub use boothkit_designer as designer;
pub use boothkit_settings as settings;

pub use boothkit_core::{Error, EventBus, LayoutError, Result};
pub use boothkit_designer::{
    EditorSession, Element, ElementKind, Layout, LayoutFile, RenderOptions, Renderer,
};
pub use boothkit_settings::{Config, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so exported data on stdout stays clean.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}
