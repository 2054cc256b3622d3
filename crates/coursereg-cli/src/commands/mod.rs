pub mod list;
pub mod manage;
pub mod shell;
pub mod show_config;

use coursereg_store::{FlatFileService, FlatFileStores};

use crate::config::AppConfig;

/// Open the flat-file stores named by the configuration
pub fn open_service(config: &AppConfig) -> Result<FlatFileService, Box<dyn std::error::Error>> {
    Ok(FlatFileStores::open(&config.store_config())?.into_service())
}
