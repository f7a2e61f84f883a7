//! Trendwave preview
//!
//! Prints the dashboard's initial screen as text, using the configured
//! defaults. Run `trendwave-cli` for interactive commands.

use trendwave::logging::{init_logging, load_config};
use trendwave::shell::Shell;
use trendwave::view::TextRenderer;

fn main() -> anyhow::Result<()> {
    let config = load_config(None)?;
    init_logging(&config.logging)?;

    tracing::info!("Trendwave v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "Effective configuration");

    let shell = Shell::from_config(&config);
    tracing::info!(
        section = %shell.nav().active(),
        collapsed = shell.nav().is_collapsed(),
        "Rendering initial screen"
    );

    print!("{}", TextRenderer::default().render(&shell.render()));
    Ok(())
}
