use std::sync::Arc;

use tracing::info;

use campuspass::view::{LogNavigator, LogNotifier};
use campuspass::{AuthManager, Config, FileSessionStore, SeedDirectory};

fn main() {
    // Load configuration
    let config = match Config::load("campuspass.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load campuspass.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = campuspass::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        campuspass::logging::init_console_only(&config.logging.level);
    }

    info!("{} ({})", config.portal.name, config.portal.institution);

    let store = match FileSessionStore::new(&config.auth.session_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open session store: {e}");
            std::process::exit(1);
        }
    };

    let directory = SeedDirectory::campus_demo();
    info!(users = directory.len(), "Identity directory seeded");

    let manager = AuthManager::new(
        Arc::new(directory),
        Arc::new(store),
        Arc::new(LogNavigator),
        Arc::new(LogNotifier),
    );

    match manager.current_user() {
        Some(user) => info!(
            email = %user.email,
            role = %user.role(),
            "Session restored; signed in"
        ),
        None => info!("No persisted session; signed out"),
    }
}
