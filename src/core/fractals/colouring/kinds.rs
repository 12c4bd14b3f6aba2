use crate::core::fractals::recurrence::Recurrence;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColouringMode {
    /// Normalised continuous escape count used directly as the hue.
    Continuous,
    /// Configured hue shifted by the orbit's `exp(-|z|)` sum.
    Trajectory,
    /// Every escaped point is white.
    Flat,
}

impl ColouringMode {
    pub const ALL: &'static [Self] = &[Self::Continuous, Self::Trajectory, Self::Flat];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Continuous => "Continuous",
            Self::Trajectory => "Trajectory",
            Self::Flat => "Flat",
        }
    }

    #[must_use]
    pub const fn default_for(recurrence: Recurrence) -> Self {
        match recurrence {
            Recurrence::Mandelbrot => Self::Continuous,
            Recurrence::Julia | Recurrence::Exotic => Self::Trajectory,
        }
    }

    #[must_use]
    pub const fn tracks_trajectory(self) -> bool {
        matches!(self, Self::Trajectory)
    }
}

impl std::fmt::Display for ColouringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_per_recurrence() {
        assert_eq!(
            ColouringMode::default_for(Recurrence::Mandelbrot),
            ColouringMode::Continuous
        );
        assert_eq!(
            ColouringMode::default_for(Recurrence::Julia),
            ColouringMode::Trajectory
        );
        assert_eq!(
            ColouringMode::default_for(Recurrence::Exotic),
            ColouringMode::Trajectory
        );
    }

    #[test]
    fn only_trajectory_mode_tracks_the_orbit() {
        let tracking: Vec<_> = ColouringMode::ALL
            .iter()
            .filter(|mode| mode.tracks_trajectory())
            .collect();

        assert_eq!(tracking, vec![&ColouringMode::Trajectory]);
    }
}
