use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::Tab;

pub const DEFAULT_PAGE_SIZE: usize = 10;
const APP_DIR: &str = "schooldesk";

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_store_path() -> PathBuf {
    data_dir().join("store.json")
}

pub fn default_log_path() -> PathBuf {
    data_dir().join("schooldesk.log")
}

pub fn resolve_store_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(default_store_path)
}

fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("page size must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Parser)]
#[command(
    name = "schooldesk",
    version,
    about = "Terminal school-management portal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, global = true, env = "SCHOOLDESK_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "schooldesk=debug"
    #[arg(long, global = true, env = "SCHOOLDESK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Browse a school data store
    Open {
        #[arg(env = "SCHOOLDESK_DATA")]
        path: Option<PathBuf>,

        #[arg(
            short,
            long,
            env = "SCHOOLDESK_PAGE_SIZE",
            default_value_t = DEFAULT_PAGE_SIZE,
            value_parser = parse_page_size
        )]
        page_size: usize,

        /// Tab shown at startup
        #[arg(short, long, value_enum, default_value_t = Tab::Users)]
        tab: Tab,
    },

    /// Write a sample data store
    Seed {
        #[arg(env = "SCHOOLDESK_DATA")]
        path: Option<PathBuf>,

        /// Overwrite an existing store
        #[arg(long)]
        force: bool,
    },
}
