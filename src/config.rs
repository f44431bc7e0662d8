use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

/// Which backend to talk to. `source` is an open string so an unknown
/// value can be reported with a proper error instead of failing the
/// whole config parse.
#[derive(Deserialize)]
pub struct Service {
    pub source: String,
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct Defaults {
    pub page_size: Option<u32>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub service: Service,
    pub defaults: Option<Defaults>,
    pub log: Option<Log>,
}

impl Config {
    pub fn page_size(&self) -> u32 {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.page_size)
            .unwrap_or(crate::paginator::DEFAULT_LIMIT)
    }
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    match toml::from_str::<Config>(cfg_content.as_str()) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}
