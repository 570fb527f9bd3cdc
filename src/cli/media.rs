//! Media CLI commands
//!
//! Browse publications: tab-filtered lists, the featured selection and
//! publication details.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::publication::{
    format_featured, format_publication_details, format_publication_list,
    format_publication_not_found, format_tabs,
};
use crate::error::CatalogResult;
use crate::format::DateStyle;
use crate::models::PublicationTab;
use crate::services::PublicationCatalog;
use crate::storage::Storage;

/// Media subcommands
#[derive(Subcommand)]
pub enum MediaCommands {
    /// List publications under a tab
    List {
        /// "all" or a publication category
        #[arg(short, long, default_value = "all")]
        tab: String,
        /// Use British day-month-year dates
        #[arg(long)]
        british: bool,
    },

    /// Show the most recent publications
    Featured {
        /// How many to show (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Use British day-month-year dates
        #[arg(long)]
        british: bool,
    },

    /// List the media tabs
    Tabs,

    /// Show publication details
    Show {
        /// Publication ID
        publication: String,
        /// Use British day-month-year dates
        #[arg(long)]
        british: bool,
    },
}

fn date_style(settings: &Settings, british: bool) -> DateStyle {
    if british {
        DateStyle::British
    } else {
        settings.date_style
    }
}

/// Handle a media command
pub fn handle_media_command(
    storage: &Storage,
    settings: &Settings,
    cmd: MediaCommands,
) -> CatalogResult<()> {
    let catalog = PublicationCatalog::new(storage);

    match cmd {
        MediaCommands::List { tab, british } => {
            let tab = PublicationTab::from_id(&tab);
            let publications = catalog.filter_by_tab(&tab);
            print!(
                "{}",
                format_publication_list(&publications, &tab, date_style(settings, british))
            );
        }

        MediaCommands::Featured { count, british } => {
            let featured = catalog.featured(count.unwrap_or(settings.featured_count));
            print!("{}", format_featured(&featured, date_style(settings, british)));
        }

        MediaCommands::Tabs => {
            print!("{}", format_tabs(&catalog.tabs()));
        }

        MediaCommands::Show {
            publication,
            british,
        } => match catalog.get_by_id(&publication) {
            Some(found) => print!(
                "{}",
                format_publication_details(found, date_style(settings, british))
            ),
            None => print!("{}", format_publication_not_found(&publication)),
        },
    }

    Ok(())
}
