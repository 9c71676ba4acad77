//! Launch settings: defaults, then `clock_quiz.toml`, then environment, then
//! command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use clock_core::ClockTime;
use quiz_client::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;

pub const SETTINGS_FILE_NAME: &str = "clock_quiz.toml";

#[derive(Parser, Debug, Default)]
#[command(name = "clock-quiz", about = "Drag the hands and learn to tell the time")]
pub struct Args {
    /// Settings file to read instead of the default search locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Starting time as 24-hour HH:MM, or "now".
    #[arg(long)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ai_api_key: Option<String>,
    pub ai_base_url: String,
    pub ai_model: String,
    pub start_time: StartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartTime {
    Now,
    At(ClockTime),
}

impl StartTime {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().eq_ignore_ascii_case("now") {
            return Ok(Self::Now);
        }
        let time = raw
            .parse::<ClockTime>()
            .with_context(|| format!("invalid start time '{raw}'"))?;
        Ok(Self::At(time))
    }

    pub fn resolve(self) -> ClockTime {
        match self {
            Self::Now => ClockTime::now_local(),
            Self::At(time) => time,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_api_key: None,
            ai_base_url: DEFAULT_BASE_URL.into(),
            ai_model: DEFAULT_MODEL.into(),
            start_time: StartTime::At(ClockTime::default()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    ai_api_key: Option<String>,
    ai_base_url: Option<String>,
    ai_model: Option<String>,
    start_time: Option<String>,
}

impl Settings {
    fn apply_start_time(&mut self, raw: &str, source: &str) {
        match StartTime::parse(raw) {
            Ok(start) => self.start_time = start,
            Err(err) => tracing::warn!("ignoring start time from {source}: {err:#}"),
        }
    }

    fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw).context("parse settings file")?;
        if let Some(v) = non_empty(file_cfg.ai_api_key) {
            self.ai_api_key = Some(v);
        }
        if let Some(v) = non_empty(file_cfg.ai_base_url) {
            self.ai_base_url = v;
        }
        if let Some(v) = non_empty(file_cfg.ai_model) {
            self.ai_model = v;
        }
        if let Some(v) = non_empty(file_cfg.start_time) {
            self.apply_start_time(&v, "settings file");
        }
        Ok(())
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| non_empty(lookup(name));

        if let Some(v) = get("GEMINI_API_KEY") {
            self.ai_api_key = Some(v);
        }
        if let Some(v) = get("APP__AI_API_KEY") {
            self.ai_api_key = Some(v);
        }
        if let Some(v) = get("APP__AI_BASE_URL") {
            self.ai_base_url = v;
        }
        if let Some(v) = get("APP__AI_MODEL") {
            self.ai_model = v;
        }
        if let Some(v) = get("APP__START_TIME") {
            self.apply_start_time(&v, "APP__START_TIME");
        }
    }

    fn apply_args(&mut self, args: &Args) -> anyhow::Result<()> {
        if let Some(v) = args.model.clone() {
            self.ai_model = v;
        }
        if let Some(v) = args.base_url.clone() {
            self.ai_base_url = v;
        }
        if let Some(v) = &args.start_time {
            self.start_time = StartTime::parse(v)?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("clock_quiz").join(SETTINGS_FILE_NAME));
    }
    paths
}

fn read_settings_file(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Builds the effective settings for this launch.
///
/// A missing settings file is fine; an explicit `--config` that cannot be read
/// or a bad `--start-time` is an error.
pub fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            Some((path.clone(), raw))
        }
        None => default_settings_paths()
            .into_iter()
            .find_map(|path| read_settings_file(&path).map(|raw| (path, raw))),
    };
    if let Some((path, raw)) = file {
        match settings.apply_file(&raw) {
            Ok(()) => tracing::info!("loaded settings from {}", path.display()),
            Err(err) => tracing::warn!("ignoring settings file {}: {err:#}", path.display()),
        }
    }

    settings.apply_env(|name| std::env::var(name).ok());
    settings.apply_args(args)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_start_at_ten_past_ten_without_key() {
        let settings = Settings::default();
        assert_eq!(settings.ai_api_key, None);
        assert_eq!(settings.start_time, StartTime::At(ClockTime::from_hm(10, 10)));
        assert_eq!(settings.ai_model, DEFAULT_MODEL);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        settings
            .apply_file(
                r#"
                ai_api_key = "file-key"
                ai_model = "file-model"
                start_time = "07:45"
                "#,
            )
            .expect("valid toml");
        assert_eq!(settings.ai_api_key.as_deref(), Some("file-key"));
        assert_eq!(settings.ai_model, "file-model");
        assert_eq!(settings.ai_base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.start_time, StartTime::At(ClockTime::from_hm(7, 45)));
    }

    #[test]
    fn bad_file_start_time_is_ignored() {
        let mut settings = Settings::default();
        settings
            .apply_file(r#"start_time = "breakfast""#)
            .expect("valid toml");
        assert_eq!(settings.start_time, Settings::default().start_time);
    }

    #[test]
    fn env_overrides_file_and_prefers_app_prefix() {
        let mut settings = Settings::default();
        settings
            .apply_file(r#"ai_api_key = "file-key""#)
            .expect("valid toml");
        settings.apply_env(env_of(&[
            ("GEMINI_API_KEY", "gemini-key"),
            ("APP__AI_API_KEY", "app-key"),
            ("APP__AI_BASE_URL", "http://127.0.0.1:9000"),
            ("APP__START_TIME", "now"),
            ("APP__AI_MODEL", "  "),
        ]));
        assert_eq!(settings.ai_api_key.as_deref(), Some("app-key"));
        assert_eq!(settings.ai_base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.ai_model, DEFAULT_MODEL);
        assert_eq!(settings.start_time, StartTime::Now);
    }

    #[test]
    fn args_win_and_reject_bad_start_time() {
        let mut settings = Settings::default();
        let args = Args {
            model: Some("cli-model".to_string()),
            start_time: Some("23:59".to_string()),
            ..Args::default()
        };
        settings.apply_args(&args).expect("valid args");
        assert_eq!(settings.ai_model, "cli-model");
        assert_eq!(settings.start_time, StartTime::At(ClockTime::from_hm(23, 59)));

        let bad = Args {
            start_time: Some("25:00".to_string()),
            ..Args::default()
        };
        assert!(settings.apply_args(&bad).is_err());
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let temp_root = env::temp_dir().join(format!("clock_quiz_settings_test_{suffix}"));
        fs::create_dir_all(&temp_root).expect("temp root");
        let path = temp_root.join(SETTINGS_FILE_NAME);
        fs::write(&path, "start_time = \"18:30\"\n").expect("write settings");

        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        let settings = load_settings(&args).expect("load");
        if env::var("APP__START_TIME").is_err() {
            assert_eq!(settings.start_time, StartTime::At(ClockTime::from_hm(18, 30)));
        }

        fs::remove_dir_all(temp_root).expect("cleanup");
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/definitely/not/here/clock_quiz.toml")),
            ..Args::default()
        };
        assert!(load_settings(&args).is_err());
    }
}
