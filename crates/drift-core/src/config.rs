use crate::constants::{FIELD_EXTENT, PARTICLE_COUNT};
use crate::error::ConfigError;
use crate::field::check_params;
use std::fmt;
use std::str::FromStr;

/// How the camera moves sideways between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FollowMode {
    /// Ease toward a target derived from the latest pointer sample.
    #[default]
    Pointer,
    /// Sway on fixed sinusoids of virtual time; ignores the pointer.
    Drift,
}

impl FromStr for FollowMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pointer" | "mouse" => Ok(FollowMode::Pointer),
            "drift" | "time" => Ok(FollowMode::Drift),
            other => Err(ConfigError::UnknownFollowMode(other.to_string())),
        }
    }
}

impl fmt::Display for FollowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowMode::Pointer => f.write_str("pointer"),
            FollowMode::Drift => f.write_str("drift"),
        }
    }
}

/// Runtime scene parameters. Defaults come from `constants`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub field_extent: f32,
    pub follow: FollowMode,
    /// Fixed RNG seed for a reproducible field; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            field_extent: FIELD_EXTENT,
            follow: FollowMode::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Apply the optional `data-follow` and `data-seed` attribute values.
    /// Absent or empty attributes keep the current value.
    pub fn with_attributes(
        mut self,
        follow: Option<&str>,
        seed: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(mode) = follow.filter(|s| !s.trim().is_empty()) {
            self.follow = mode.parse()?;
        }
        if let Some(raw) = seed.map(str::trim).filter(|s| !s.is_empty()) {
            let parsed = raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.to_string()))?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_params(self.particle_count, self.field_extent)?;
        Ok(())
    }
}
