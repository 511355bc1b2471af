use crate::events::AppEvent;
use crate::gui::theme::ThemeColors;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgba;
use seekarc::{Dp, Settings, SweepDirection};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// An sRGBA color written as `#rrggbb` or `#rrggbbaa`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    SerializeDisplay,
    DeserializeFromStr,
    derive_more::From,
    derive_more::Into,
)]
pub struct HexColor(pub Srgba<f64>);

#[derive(Debug, Error, PartialEq)]
pub enum ParseColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit: {0}")]
    BadDigit(#[from] std::num::ParseIntError),
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseColorError::BadLength(hex.len()));
        }

        let channel = |i: usize| -> Result<f64, ParseColorError> {
            Ok(u8::from_str_radix(&hex[i..i + 2], 16)? as f64 / 255.0)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };

        Ok(Self(Srgba::new(channel(0)?, channel(2)?, channel(4)?, alpha)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f64| (c * 255.0).round() as u8;
        let (r, g, b, a) = self.0.into_components();
        if a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(r),
                byte(g),
                byte(b),
                byte(a)
            )
        }
    }
}

/// The `[arc]` config section. Widths are in dp; colors fall back to the
/// GTK theme when omitted.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArcSection {
    pub max: u32,
    pub progress: u32,
    pub start_angle: i32,
    pub sweep_angle: i32,
    pub rotation: i32,
    pub direction: SweepDirection,
    pub rollover: bool,
    pub rounded_edges: bool,
    pub touch_inside: bool,
    pub thumbnail_touch_only: bool,
    pub touch_update_on_down: bool,
    pub enabled: bool,
    pub arc_width: f64,
    pub progress_width: f64,
    pub arc_color: Option<HexColor>,
    pub progress_color: Option<HexColor>,
}

impl Default for ArcSection {
    fn default() -> Self {
        let defaults = Settings::default();
        Self {
            max: defaults.max,
            progress: defaults.progress,
            start_angle: defaults.start_angle,
            sweep_angle: defaults.sweep_angle,
            rotation: defaults.rotation,
            direction: defaults.direction,
            rollover: defaults.rollover,
            rounded_edges: defaults.rounded_edges,
            touch_inside: defaults.touch_inside,
            thumbnail_touch_only: defaults.thumbnail_touch_only,
            touch_update_on_down: defaults.touch_update_on_down,
            enabled: defaults.enabled,
            arc_width: 4.0,
            progress_width: 4.0,
            arc_color: None,
            progress_color: None,
        }
    }
}

impl ArcSection {
    /// Resolves the section into widget settings for the given theme and
    /// pixel density.
    pub fn settings(&self, theme: &ThemeColors, density: f64) -> Settings {
        Settings {
            max: self.max,
            progress: self.progress,
            start_angle: self.start_angle,
            sweep_angle: self.sweep_angle,
            rotation: self.rotation,
            direction: self.direction,
            rollover: self.rollover,
            rounded_edges: self.rounded_edges,
            touch_inside: self.touch_inside,
            thumbnail_touch_only: self.thumbnail_touch_only,
            touch_update_on_down: self.touch_update_on_down,
            enabled: self.enabled,
            arc_width: Dp(self.arc_width).to_px(density),
            progress_width: Dp(self.progress_width).to_px(density),
            arc_color: self.arc_color.map(Srgba::from).unwrap_or(theme.track),
            progress_color: self.progress_color.map(Srgba::from).unwrap_or(theme.fill),
        }
    }
}

/// The `[thumb]` config section: either an image file or a vector circle.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThumbSection {
    pub image: Option<PathBuf>,
    /// Vector thumb radius in dp, used when no image is set.
    pub radius: f64,
    pub color: Option<HexColor>,
    pub stroke_width: Option<f64>,
    pub stroke_color: Option<HexColor>,
}

impl Default for ThumbSection {
    fn default() -> Self {
        Self {
            image: None,
            radius: 12.0,
            color: None,
            stroke_width: None,
            stroke_color: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DialConfig {
    #[serde(default)]
    pub arc: ArcSection,
    #[serde(default)]
    pub thumb: ThumbSection,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcdial", "arcdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(custom: Option<&Path>) -> Result<DialConfig, ConfigError> {
    let config_path = match custom {
        Some(path) => path.to_path_buf(),
        None => get_config_path()?,
    };

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(custom.is_some()))
        .add_source(config::Environment::with_prefix("ARCDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> DialConfig {
    match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            DialConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
