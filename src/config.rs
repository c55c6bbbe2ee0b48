//! Game configuration
//!
//! Screen geometry, tick rate and per-side control flags. The three shipped
//! variants of the game are presets over the same settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::renderer::RenderOptions;
use crate::sim::{Arena, GameState};

/// Built-in preset: windowed, framebuffer or simple
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Accelerated window with score text, both sides computer-controlled
    #[default]
    Windowed,
    /// Raw framebuffer device, both sides computer-controlled, no score text
    Framebuffer,
    /// Plain window, two human players, no score text
    Simple,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Windowed => "windowed",
            Variant::Framebuffer => "framebuffer",
            Variant::Simple => "simple",
        }
    }

    /// Settings this variant ships with
    pub fn config(&self) -> Config {
        let base = Config {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            left_ai: true,
            right_ai: true,
            has_ai: true,
            show_score: true,
            show_center_line: true,
        };
        match self {
            Variant::Windowed => base,
            Variant::Framebuffer => Config {
                tick_rate_hz: FRAMEBUFFER_TICK_RATE_HZ,
                show_score: false,
                ..base
            },
            Variant::Simple => Config {
                left_ai: false,
                right_ai: false,
                has_ai: false,
                show_score: false,
                ..base
            },
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Initial control mode per side
    pub left_ai: bool,
    pub right_ai: bool,
    /// Whether computer players exist at all; `false` overrides both flags
    pub has_ai: bool,
    pub show_score: bool,
    pub show_center_line: bool,
}

impl Default for Config {
    fn default() -> Self {
        Variant::default().config()
    }
}

impl Config {
    pub fn from_variant(variant: Variant) -> Self {
        variant.config()
    }

    /// Parse and validate a JSON config. Missing fields take the defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if value == 0 || value > MAX_SCREEN_DIMENSION {
                return Err(ConfigError::invalid(format!(
                    "{name} must be between 1 and {MAX_SCREEN_DIMENSION}, got {value}"
                )));
            }
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::invalid("tick_rate_hz must be positive"));
        }
        Ok(())
    }

    /// Left side starts computer-controlled (respects `has_ai`)
    pub fn effective_left_ai(&self) -> bool {
        self.has_ai && self.left_ai
    }

    /// Right side starts computer-controlled (respects `has_ai`)
    pub fn effective_right_ai(&self) -> bool {
        self.has_ai && self.right_ai
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.screen_width as i32, self.screen_height as i32)
    }

    /// Fresh match state for this configuration
    pub fn initial_state(&self) -> GameState {
        GameState::new(
            self.arena(),
            self.effective_left_ai(),
            self.effective_right_ai(),
        )
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            center_line: self.show_center_line,
            score: self.show_score,
            ..Default::default()
        }
    }
}
