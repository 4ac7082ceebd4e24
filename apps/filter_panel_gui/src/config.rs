use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use shared::{
    domain::{ConsultationMode, FilterSelection, SortKey, Specialty},
    error::FilterParseError,
};

pub const DEFAULT_CONFIG_FILE: &str = "filter_panel.toml";

/// Command-line flags. Anything given here wins over file and environment.
#[derive(Parser, Debug, Default)]
pub struct StartupArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[arg(long)]
    pub title: Option<String>,
    /// Initial consultation mode: video or clinic.
    #[arg(long)]
    pub mode: Option<String>,
    /// Initial specialty; repeat for several.
    #[arg(long = "specialty")]
    pub specialties: Vec<String>,
    /// Initial sort key: fees or experience.
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub window_title: String,
    pub consultation_mode: Option<String>,
    pub specialties: Vec<String>,
    pub sort_by: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Doctor Directory Filters".into(),
            consultation_mode: None,
            specialties: Vec::new(),
            sort_by: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    window_title: Option<String>,
    consultation_mode: Option<String>,
    specialties: Option<Vec<String>>,
    sort_by: Option<String>,
}

pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };

    Settings::from_sources(raw.as_deref(), env)
        .with_context(|| format!("invalid settings file '{}'", path.display()))
}

impl Settings {
    /// Layers defaults, then the TOML file, then `APP__*` variables.
    pub fn from_sources(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut settings = Settings::default();

        if let Some(raw) = file {
            let file_cfg: FileSettings = toml::from_str(raw)?;
            if let Some(v) = file_cfg.window_title {
                settings.window_title = v;
            }
            if let Some(v) = file_cfg.consultation_mode {
                settings.consultation_mode = non_empty(v);
            }
            if let Some(v) = file_cfg.specialties {
                settings.specialties = v;
            }
            if let Some(v) = file_cfg.sort_by {
                settings.sort_by = non_empty(v);
            }
        }

        if let Some(v) = env("APP__WINDOW_TITLE") {
            settings.window_title = v;
        }
        if let Some(v) = env("APP__CONSULTATION_MODE") {
            settings.consultation_mode = non_empty(v);
        }
        if let Some(v) = env("APP__SPECIALTIES") {
            settings.specialties = v
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(v) = env("APP__SORT_BY") {
            settings.sort_by = non_empty(v);
        }

        Ok(settings)
    }

    pub fn with_args(mut self, args: &StartupArgs) -> Self {
        if let Some(v) = &args.title {
            self.window_title = v.clone();
        }
        if let Some(v) = &args.mode {
            self.consultation_mode = non_empty(v.clone());
        }
        if !args.specialties.is_empty() {
            self.specialties = args.specialties.clone();
        }
        if let Some(v) = &args.sort {
            self.sort_by = non_empty(v.clone());
        }
        self
    }

    pub fn initial_selection(&self) -> Result<FilterSelection, FilterParseError> {
        let consultation_mode = self
            .consultation_mode
            .as_deref()
            .map(str::parse::<ConsultationMode>)
            .transpose()?;
        let specialties = self
            .specialties
            .iter()
            .map(|name| name.parse::<Specialty>())
            .collect::<Result<Vec<_>, _>>()?;
        let sort_key = self
            .sort_by
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()?;

        Ok(FilterSelection::new(consultation_mode, specialties, sort_key))
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
