//! Service CLI commands
//!
//! Browse the services catalog: list by category, show a service page with
//! its related services, and list the category tabs.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::service::{
    format_category_counts, format_related, format_service_details, format_service_list,
    format_service_not_found,
};
use crate::error::CatalogResult;
use crate::models::CategoryFilter;
use crate::services::ServiceCatalog;
use crate::storage::Storage;

/// Service subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List services, optionally for one category
    List {
        /// all, audit, business, tax or advisory
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },

    /// Show a service page
    Show {
        /// Service ID or route slug
        service: String,
    },

    /// Show services related to a service
    Related {
        /// Service ID or route slug
        service: String,
        /// Number of related services (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// List service categories with their counts
    Categories,
}

/// Handle a service command
pub fn handle_service_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ServiceCommands,
) -> CatalogResult<()> {
    let catalog = ServiceCatalog::new(storage);

    match cmd {
        ServiceCommands::List { category } => {
            let services = catalog.get_by_category(category);
            print!("{}", format_service_list(&services, category));
        }

        ServiceCommands::Show { service } => match catalog.find(&service) {
            Some(found) => {
                let related = catalog.get_related(found.id.as_str(), settings.related_count);
                print!("{}", format_service_details(found, &related));
            }
            None => {
                tracing::debug!(identifier = %service, "service lookup missed");
                print!("{}", format_service_not_found(&service));
            }
        },

        ServiceCommands::Related { service, count } => match catalog.find(&service) {
            Some(found) => {
                let count = count.unwrap_or(settings.related_count);
                let related = catalog.get_related(found.id.as_str(), count);
                print!("{}", format_related(&related));
            }
            None => print!("{}", format_service_not_found(&service)),
        },

        ServiceCommands::Categories => {
            print!("{}", format_category_counts(&catalog.category_counts()));
        }
    }

    Ok(())
}
