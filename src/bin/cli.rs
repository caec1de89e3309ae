//! MyndStrong CLI
//!
//! Maintenance commands for the content tables:
//! - Print the catalog
//! - Audit every outbound link
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use myndstrong::audit::{self, AuditReport, HttpProbe};
use myndstrong::config::Config;
use myndstrong::content::Catalog;
use myndstrong::navigation::View;

#[derive(Parser)]
#[command(name = "myndstrong-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Maintenance tools for MyndStrong content")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the content catalog
    Catalog {
        /// Only this view (home, crisis, resources, community, profile)
        #[arg(short, long)]
        view: Option<View>,
    },

    /// Check every outbound link
    Audit {
        /// Probe each link over HTTP instead of only parsing it
        #[arg(long)]
        online: bool,

        /// Links probed at once (default: from config)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.format == "json";

    match cli.command {
        Commands::Catalog { view } => {
            let catalog = Catalog::get();

            match (json, view) {
                (true, Some(view)) => {
                    println!("{}", serde_json::to_string_pretty(&catalog.view(view))?);
                }
                (true, None) => {
                    println!("{}", serde_json::to_string_pretty(&catalog)?);
                }
                (false, view) => print_catalog(&catalog, view),
            }
        }

        Commands::Audit {
            online,
            concurrency,
        } => {
            let (config, origin) = Config::resolve(cli.config.as_deref())?;
            myndstrong::logging::init(&config.logging).context("failed to initialise logging")?;
            origin.log();

            let links = Catalog::get().links();
            let report = if online {
                let probe = HttpProbe::new(&config.audit).context("failed to build HTTP client")?;
                let concurrency = concurrency.unwrap_or(config.audit.concurrency);
                audit::audit_online(&links, &probe, concurrency).await
            } else {
                audit::audit_offline(&links)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = myndstrong::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog, only: Option<View>) {
    let views: Vec<View> = match only {
        Some(view) => vec![view],
        None => View::ALL.to_vec(),
    };

    for view in views {
        println!("{} ({} entries)", view.label(), catalog.entry_count(view));
        println!("{}", "-".repeat(72));

        let links: Vec<_> = catalog
            .links()
            .into_iter()
            .filter(|l| l.view == view)
            .collect();

        if links.is_empty() {
            println!("  (no outbound links)");
        }
        for link in links {
            println!("  {:<26} {:<30} {}", link.section, link.title, link.url);
        }

        let contacts = match view {
            View::Home => catalog.home.emergency,
            View::Crisis => catalog.crisis.emergency,
            _ => &[],
        };
        for contact in contacts {
            println!(
                "  {:<26} {:<30} {}",
                "Emergency",
                contact.title,
                contact.contact.display()
            );
        }
        println!();
    }
}

fn print_report(report: &AuditReport) {
    println!("{:<10} {:<30} {}", "View", "Title", "Status");
    println!("{}", "-".repeat(72));

    for finding in &report.findings {
        println!(
            "{:<10} {:<30} {}",
            finding.link.view.as_str(),
            finding.link.title,
            finding.status.label()
        );
    }

    println!();
    println!(
        "{} links, {} distinct URLs, {} ok, {} problems ({})",
        report.summary.total,
        report.summary.distinct_urls,
        report.summary.ok,
        report.summary.problems,
        if report.online { "online" } else { "offline" }
    );

    if !report.is_clean() {
        println!();
        println!("Problems:");
        for finding in report.problems() {
            println!("  {} -> {}", finding.link.url, finding.status.label());
        }
    }
}
