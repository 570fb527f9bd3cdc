use anyhow::Result;
use clap::{Parser, Subcommand};

use practice_catalog::cli::{
    handle_export_command, handle_media_command, handle_service_command, ExportCommands,
    MediaCommands, ServiceCommands,
};
use practice_catalog::config::logging::init_cli_logger;
use practice_catalog::config::{paths::CatalogPaths, settings::Settings};
use practice_catalog::storage::init::{initialize_storage, needs_initialization};
use practice_catalog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse a practice's services and publications",
    long_about = "Practice Catalog serves the service and publication catalog of a \
                  professional-services practice: category filters, related \
                  services, featured publications and document previews, from \
                  the command line or an interactive terminal UI."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Browse services
    #[command(subcommand)]
    Service(ServiceCommands),

    /// Browse publications
    #[command(subcommand, alias = "publication")]
    Media(MediaCommands),

    /// Export the catalog
    #[command(subcommand)]
    Export(ExportCommands),

    /// Write the starter catalog
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CatalogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Log lines on stderr would corrupt the TUI screen
    if !matches!(cli.command, Some(Commands::Tui)) {
        init_cli_logger(cli.verbose, &settings.log_filter);
    }

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Practice Catalog at: {}", paths.data_dir().display());
            let report = initialize_storage(&paths, &settings)?;
            settings.save(&paths)?;

            if report.services_written {
                println!("  Wrote {}", settings.services_path(&paths).display());
            }
            if report.publications_written {
                println!("  Wrote {}", settings.publications_path(&paths).display());
            }
            if !report.services_written && !report.publications_written {
                println!("  Catalog files already exist; nothing to do.");
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'catalog service list' to see all services.");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Practice Catalog Configuration");
            println!("==============================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Services file:     {}", settings.services_path(&paths).display());
            println!("Publications file: {}", settings.publications_path(&paths).display());
            println!();
            println!("Settings:");
            println!("  Featured count:  {}", settings.featured_count);
            println!("  Related count:   {}", settings.related_count);
            println!("  Date style:      {:?}", settings.date_style);
            println!("  Download notice: {}s", settings.download_ack_secs);
            println!("  Log filter:      {}", settings.log_filter);
            return Ok(());
        }
        _ => {}
    }

    let mut storage = Storage::new(&paths, &settings);
    storage.load_all()?;

    if storage.is_empty() && needs_initialization(&paths, &settings) {
        eprintln!("The catalog is empty. Run 'catalog init' to write the starter catalog.");
    }

    match cli.command {
        Some(Commands::Tui) => {
            practice_catalog::tui::run_tui(&storage, &settings)?;
        }
        Some(Commands::Service(cmd)) => {
            handle_service_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Media(cmd)) => {
            handle_media_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) | Some(Commands::Config) => {}
        None => {
            println!("Practice Catalog - services and publications");
            println!();
            println!("Run 'catalog --help' for usage information.");
            println!("Run 'catalog tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
