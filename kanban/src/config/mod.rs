//! Configuration system for the kanban board.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/kanban/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::{DEFAULT_MAX_TITLE_LEN, DEFAULT_PROGRESS_STEP};
use crate::board::generate::default_roster;
use crate::board::{DEFAULT_DUE_IN_DAYS, RandomRoster, SequentialIds, TaskStore};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    board: BoardFileConfig,
    ui: UiFileConfig,
}

/// `[board]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BoardFileConfig {
    seed_demo: Option<bool>,
    due_in_days: Option<u32>,
    id_prefix: Option<String>,
    assignees: Option<Vec<String>>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    max_title_len: Option<usize>,
    progress_step: Option<i64>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved board configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    // -- Board --
    /// Whether to start with the demo tasks.
    pub seed_demo: bool,
    /// Days between task creation and its default due date.
    pub due_in_days: u32,
    /// Prefix for sequential task ids.
    pub id_prefix: String,
    /// Roster new tasks are randomly assigned from.
    pub assignees: Vec<String>,

    // -- UI --
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Maximum task title length in characters.
    pub max_title_len: usize,
    /// Progress change per `+`/`-` key press.
    pub progress_step: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            seed_demo: true,
            due_in_days: DEFAULT_DUE_IN_DAYS,
            id_prefix: "task".to_string(),
            assignees: default_roster(),
            poll_timeout: Duration::from_millis(50),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}

impl BoardConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/kanban/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve from CLI args and env vars alone, as if no config file
    /// existed. Used when the file is unreadable so flags still apply.
    #[must_use]
    pub fn from_cli(cli: &CliArgs) -> Self {
        Self::resolve(cli, &ConfigFile::default())
    }

    /// Resolve a `BoardConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            seed_demo: !cli.no_seed && file.board.seed_demo.unwrap_or(defaults.seed_demo),
            due_in_days: cli
                .due_in_days
                .or(file.board.due_in_days)
                .unwrap_or(defaults.due_in_days),
            id_prefix: file
                .board
                .id_prefix
                .clone()
                .unwrap_or(defaults.id_prefix),
            assignees: file
                .board
                .assignees
                .clone()
                .filter(|roster| !roster.is_empty())
                .unwrap_or(defaults.assignees),
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
            max_title_len: file.ui.max_title_len.unwrap_or(defaults.max_title_len),
            progress_step: file.ui.progress_step.unwrap_or(defaults.progress_step),
        }
    }

    /// Build a [`TaskStore`] wired with this configuration's id prefix,
    /// roster, and due-date offset, seeded if `seed_demo` is set.
    #[must_use]
    pub fn build_store(&self) -> TaskStore {
        let store = TaskStore::new()
            .with_id_generator(SequentialIds::new(self.id_prefix.clone(), 1))
            .with_assignee_picker(RandomRoster::new(self.assignees.clone()))
            .with_due_in_days(self.due_in_days);
        if self.seed_demo {
            store.with_demo_tasks()
        } else {
            store
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal kanban task board")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/kanban/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty board instead of the demo tasks.
    #[arg(long)]
    pub no_seed: bool,

    /// Days between task creation and its default due date.
    #[arg(long, env = "KANBAN_DUE_IN_DAYS")]
    pub due_in_days: Option<u32>,

    /// Print the board as JSON and exit instead of opening the TUI.
    #[arg(long)]
    pub dump: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "KANBAN_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/kanban.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("kanban").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
