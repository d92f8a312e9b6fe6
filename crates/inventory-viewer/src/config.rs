//! Viewer configuration: command line arguments and an optional JSON file.
//!
//! Precedence is command line, then config file, then defaults. `RUST_LOG`
//! still overrides the resulting log level when the subscriber is built.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use inventory_core::Entity;
use inventory_ui::{ApplicationTab, Theme};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Command line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "inventory-viewer")]
#[command(about = "Desktop viewer for a single inventory host's detail panel")]
pub struct Args {
    /// Path to a JSON file holding the entity to display (a demo host if omitted)
    #[arg(short, long)]
    pub entity: Option<PathBuf>,

    /// Path to a JSON viewer configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wrap the header and facts in a card
    #[arg(long)]
    pub use_card: bool,

    /// Simulated store latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Make every display name save fail
    #[arg(long)]
    pub fail_edits: bool,

    /// Colour theme: light or dark
    #[arg(long)]
    pub theme: Option<String>,
}

/// An application tab as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub title: String,
}

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub use_card: bool,
    pub latency_ms: u64,
    pub log_level: String,
    pub fail_edits: bool,
    pub theme: String,
    pub window_title: String,
    pub applications: Vec<ApplicationConfig>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            use_card: false,
            latency_ms: 400,
            log_level: "info".to_string(),
            fail_edits: false,
            theme: Theme::default().css_value().to_string(),
            window_title: "Inventory - Host details".to_string(),
            applications: vec![
                ApplicationConfig {
                    name: "general".to_string(),
                    title: "General information".to_string(),
                },
                ApplicationConfig {
                    name: "advisor".to_string(),
                    title: "Advisor".to_string(),
                },
                ApplicationConfig {
                    name: "compliance".to_string(),
                    title: "Compliance".to_string(),
                },
            ],
        }
    }
}

impl ViewerConfig {
    /// Reads a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Builds the effective config from the arguments.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Overlays command line flags on top of file or default values.
    pub fn apply_args(&mut self, args: &Args) {
        if args.use_card {
            self.use_card = true;
        }
        if args.fail_edits {
            self.fail_edits = true;
        }
        if let Some(latency) = args.latency_ms {
            self.latency_ms = latency;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        if let Some(theme) = &args.theme {
            self.theme = theme.clone();
        }
    }

    /// The configured theme, falling back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::from_css_value(&self.theme).unwrap_or_default()
    }

    pub fn application_tabs(&self) -> Vec<ApplicationTab> {
        self.applications
            .iter()
            .map(|app| ApplicationTab::new(app.name.clone(), app.title.clone()))
            .collect()
    }
}

/// Reads the entity to display from a JSON file.
pub fn load_entity_file(path: &Path) -> anyhow::Result<Entity> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read entity file {}", path.display()))?;
    Entity::from_json(&raw).with_context(|| format!("invalid entity file {}", path.display()))
}

/// Host shown when no entity file is given.
pub fn demo_entity() -> Entity {
    Entity::from(
        json!({
            "id": "f59716a6-5a9f-4b4e-9a1c-3c8f0b6e2d71",
            "display_name": "rhel8-web-01",
            "fqdn": "rhel8-web-01.lab.example.com",
            "ansible_host": null,
            "account": "0000001",
            "created": "2019-01-21T14:02:11.123456+00:00",
            "updated": "2019-03-26T15:09:40.012345+00:00",
            "facts": [
                { "namespace": "satellite", "facts": { "organization_id": 1 } }
            ]
        })
        .as_object()
        .cloned()
        .unwrap_or_default(),
    )
}
