//! Trendwave CLI
//!
//! Command-line interface for the dashboard:
//! - Render a section as text or JSON
//! - List sections
//! - Print or export the dataset
//! - Replay scripted clicks and keystrokes
//! - Write a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use trendwave::config::generate_default_config;
use trendwave::dataset::{export_slice, DatasetSlice, ExportFormat, MetricDataset};
use trendwave::logging::{init_logging, load_config};
use trendwave::navigation::Section;
use trendwave::shell::Shell;
use trendwave::view::{to_json, Action, TextRenderer, ViewNode};

#[derive(Parser)]
#[command(name = "trendwave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Music streaming analytics dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Columns used by bars and meters in text output
    #[arg(long, default_value = "30", global = true)]
    pub width: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard screen
    Render {
        /// Section id (default: from config)
        #[arg(short, long)]
        section: Option<String>,
        /// Render with the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Drop entrance animation attributes
        #[arg(long)]
        no_animations: bool,
    },

    /// List dashboard sections
    Sections,

    /// Print the built-in dataset
    Dataset {
        /// Slice (stats, growth, genres, platforms, regions, all)
        #[arg(short, long, default_value = "all")]
        slice: String,
        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Replay clicks and keys, then print the resulting screen
    Session {
        /// Labels or keys to click, in order
        #[arg(long = "click")]
        clicks: Vec<String>,
        /// Keystrokes applied after the clicks: n (next), p (previous), t (toggle sidebar)
        #[arg(long, default_value = "")]
        keys: String,
    },

    /// Write a default config file
    Config {
        /// Destination (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let renderer = TextRenderer::new(cli.width);

    match cli.command {
        Commands::Render {
            section,
            collapsed,
            format,
            no_animations,
        } => {
            let mut config = config;
            if collapsed {
                config.dashboard.sidebar_collapsed = true;
            }
            if no_animations {
                config.dashboard.animations = false;
            }

            let mut nav = config.dashboard.initial_nav();
            if let Some(id) = section {
                nav.select_id(&id)?;
            }

            let tree = Shell::from_config(&config).with_nav(nav).render();
            print_tree(&tree, &format, &renderer)?;
        }

        Commands::Sections => {
            println!("{:<14} {:<22} {}", "ID", "Label", "Icon");
            println!("{}", "-".repeat(44));
            for section in Section::all() {
                println!(
                    "{:<14} {:<22} {}",
                    section.id(),
                    section.label(),
                    section.icon().glyph()
                );
            }
        }

        Commands::Dataset { slice, format } => {
            let slice: DatasetSlice = slice.parse()?;
            let data = MetricDataset::mock();
            match format.as_str() {
                "json" => println!("{}", export_slice(&data, slice, ExportFormat::Json)?),
                "csv" => print!("{}", export_slice(&data, slice, ExportFormat::Csv)?),
                "table" => print_tables(&data, slice),
                other => anyhow::bail!("Unknown format: {} (expected table, json or csv)", other),
            }
        }

        Commands::Session { clicks, keys } => {
            let mut shell = Shell::from_config(&config);
            for label in &clicks {
                let action = shell.click(label)?;
                tracing::info!(label = %label, ?action, "Clicked");
            }
            for key in keys.chars() {
                let active = shell.nav().active();
                let action = match key {
                    'n' => Action::Select {
                        section: active.next(),
                    },
                    'p' => Action::Select {
                        section: active.prev(),
                    },
                    't' => Action::ToggleSidebar,
                    other => anyhow::bail!("Unknown key: {:?} (expected n, p or t)", other),
                };
                shell.dispatch(action);
            }
            print!("{}", renderer.render(&shell.render()));
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_tree(tree: &ViewNode, format: &str, renderer: &TextRenderer) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", to_json(tree)?),
        "text" => print!("{}", renderer.render(tree)),
        other => anyhow::bail!("Unknown format: {} (expected text or json)", other),
    }
    Ok(())
}

fn print_tables(data: &MetricDataset, slice: DatasetSlice) {
    let all = slice == DatasetSlice::All;

    if all || slice == DatasetSlice::Stats {
        println!("{:<16} {:<10} {:<8} {}", "Stat", "Value", "Trend", "Subtitle");
        println!("{}", "-".repeat(48));
        for stat in &data.stats {
            println!(
                "{:<16} {:<10} {:<8} {}",
                stat.label,
                stat.value,
                stat.trend.as_deref().unwrap_or("-"),
                stat.subtitle.as_deref().unwrap_or("")
            );
        }
        println!();
    }

    if all || slice == DatasetSlice::Growth {
        let growth = &data.streaming_growth;
        print!("{:<8}", "Period");
        for spec in &growth.series {
            print!(" {:>16}", spec.label);
        }
        println!();
        println!("{}", "-".repeat(8 + 17 * growth.series.len()));
        for point in &growth.points {
            print!("{:<8}", point.period);
            for spec in &growth.series {
                match point.get(&spec.key) {
                    Some(value) => print!(" {:>16}", value),
                    None => print!(" {:>16}", "-"),
                }
            }
            println!();
        }
        println!();
    }

    if all || slice == DatasetSlice::Genres {
        println!("{:<16} {:>10} {}", "Genre", "Streams", "Color");
        println!("{}", "-".repeat(36));
        for genre in &data.top_genres {
            println!("{:<16} {:>10} {}", genre.name, genre.value, genre.color);
        }
        println!();
    }

    if all || slice == DatasetSlice::Platforms {
        println!("{:<16} {:>8} {}", "Platform", "Share", "Color");
        println!("{}", "-".repeat(34));
        for share in &data.platform_share {
            println!("{:<16} {:>7}% {}", share.name, share.percent, share.color);
        }
        println!();
    }

    if all || slice == DatasetSlice::Regions {
        println!(
            "{:<16} {:>10} {:<10} {}",
            "Region", "Popularity", "Listeners", "Growth"
        );
        println!("{}", "-".repeat(48));
        for region in &data.regions {
            println!(
                "{:<16} {:>9}% {:<10} {}",
                region.name, region.popularity, region.listeners, region.growth
            );
        }
        println!();
    }
}
