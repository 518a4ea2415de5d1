use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::EnvFilter;

const DATA_DIR_NAME: &str = ".artistriage";
const REGISTRY_FILE: &str = "artists.txt";
const POTENTIALS_FILE: &str = "potential_artists.txt";
const TOKEN_FILE: &str = "token.json";
const LOG_FILE: &str = "artistriage.log";

/// Where the session keeps its durable state.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub registry: PathBuf,
    pub potentials: PathBuf,
}

impl StorePaths {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            registry: data_dir.join(REGISTRY_FILE),
            potentials: data_dir.join(POTENTIALS_FILE),
        }
    }
}

pub struct ArtistriageApp {
    pub data_dir: PathBuf,
    pub store: StorePaths,
    pub token_path: PathBuf,
    pub log_path: PathBuf,
}

impl ArtistriageApp {
    pub fn new(data_path: Option<String>) -> Result<Self, Box<dyn Error>> {
        let data_dir = match data_path {
            Some(path) => PathBuf::from(path),
            None => {
                let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
                home_dir.join(DATA_DIR_NAME)
            }
        };

        fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Could not create data directory {:?}: {}", data_dir, e))?;

        Ok(Self {
            store: StorePaths::in_dir(&data_dir),
            token_path: data_dir.join(TOKEN_FILE),
            log_path: data_dir.join(LOG_FILE),
            data_dir,
        })
    }

    /// Sends `tracing` output to the log file so it never interleaves with the prompt.
    pub fn init_logging(&self) -> Result<(), Box<dyn Error>> {
        let log_file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| format!("Could not initialize logging: {}", e))?;

        Ok(())
    }
}
