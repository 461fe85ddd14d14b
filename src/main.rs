#[macro_use]
extern crate rocket;

use std::error::Error;
use std::path::Path;
use std::sync::RwLock;

use rocket::data::{Limits, ToByteUnit};
use rocket::serde::json::Json;
use rocket::{Build, Rocket};

use crate::ai::AiState;
use crate::config::{VaultConfig, CONFIG_LOCATION};
use crate::model::response::BasicMessage;
use crate::repository::VaultDb;
use crate::settings::AppSettings;

mod ai;
mod backup;
mod config;
mod documents;
mod folders;
mod guard;
mod logging;
mod model;
mod previews;
mod repository;
mod settings;
#[cfg(test)]
mod test;
mod util;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = config::parse_config(CONFIG_LOCATION)?;
    logging::init_logger(&config.logging)?;
    if !Path::new(CONFIG_LOCATION).exists() {
        log::warn!("No config file found at {CONFIG_LOCATION}. Continuing startup with defaults...");
    }
    let db = VaultDb::new(&config.database.location);
    db.initialize()?;
    let settings = settings::service::load_settings(&db)?;
    let ai = AiState::from_config(&config.ai);
    let _rocket = build_rocket(&config, db, settings, ai).launch().await?;
    Ok(())
}

/// assembles the server. Everything the handlers need is passed in and put into managed state
pub fn build_rocket(
    config: &VaultConfig,
    db: VaultDb,
    settings: AppSettings,
    ai: AiState,
) -> Rocket<Build> {
    let max_file_size = config.uploads.max_file_size_mb.mebibytes();
    let limits = Limits::default()
        .limit("file", max_file_size)
        .limit("data-form", max_file_size + 1.mebibytes());
    let figment = rocket::Config::figment().merge(("limits", limits));
    rocket::custom(figment)
        .manage(db)
        .manage(RwLock::new(settings))
        .manage(ai)
        .manage(config.uploads.clone())
        .mount(
            "/api",
            routes![
                settings::handler::api_version,
                settings::handler::get_settings,
                settings::handler::set_passcode,
                settings::handler::update_theme
            ],
        )
        .mount(
            "/folders",
            routes![
                folders::handler::get_vault_view,
                folders::handler::get_folder,
                folders::handler::create_folder,
                folders::handler::update_folder,
                folders::handler::toggle_pin,
                folders::handler::delete_folder
            ],
        )
        .mount(
            "/documents",
            routes![
                documents::handler::list_documents,
                documents::handler::get_document,
                documents::handler::download_document,
                documents::handler::upload_document,
                documents::handler::update_document,
                documents::handler::delete_document,
                previews::handler::get_page_count,
                previews::handler::search_pages,
                previews::handler::get_page
            ],
        )
        .mount(
            "/vault",
            routes![backup::handler::export_vault, backup::handler::import_vault],
        )
        .mount(
            "/ai",
            routes![ai::handler::summarize_document, ai::handler::chat],
        )
        .register("/", catchers![unauthorized])
}

#[catch(401)]
fn unauthorized() -> Json<BasicMessage> {
    BasicMessage::new("This vault is locked. Send the passcode in the X-Vault-Passcode header.")
}
