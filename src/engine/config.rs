//! Engine configuration
//!
//! Hint availability, hint banner visibility, and reveal animation timing.

use std::time::Duration;

/// Progress through the hint tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HintStage {
    #[default]
    Unused,
    /// One answer letter was typed into the attempt
    LetterRevealed,
    /// The answer's description is shown
    DescriptionRevealed,
}

impl HintStage {
    /// Numeric stage (0, 1, 2)
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Unused => 0,
            Self::LetterRevealed => 1,
            Self::DescriptionRevealed => 2,
        }
    }
}

/// Which hint tiers are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintMode {
    /// No hints at all
    Off,
    /// A single letter reveal
    Letter,
    /// Letter reveal, then the description
    #[default]
    Full,
}

impl HintMode {
    /// Create a hint mode from a name string
    ///
    /// Supported names: "off", "none", "letter", "full"
    /// Defaults to full if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "off" | "none" => Self::Off,
            "letter" => Self::Letter,
            "full" => Self::Full,
            other => {
                log::warn!("Unknown hint mode '{other}', using full");
                Self::Full
            }
        }
    }

    /// Highest stage this mode allows
    #[must_use]
    pub const fn max_stage(self) -> HintStage {
        match self {
            Self::Off => HintStage::Unused,
            Self::Letter => HintStage::LetterRevealed,
            Self::Full => HintStage::DescriptionRevealed,
        }
    }
}

/// When the description banner is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintBannerPolicy {
    /// Only after the description hint was taken
    StageOnly,
    /// After the description hint, or once the game has ended
    #[default]
    StageOrGameOver,
}

impl HintBannerPolicy {
    /// Supported names: "stage", "stage-or-end". Defaults to stage-or-end.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "stage" => Self::StageOnly,
            "stage-or-end" => Self::StageOrGameOver,
            other => {
                log::warn!("Unknown hint banner policy '{other}', using stage-or-end");
                Self::StageOrGameOver
            }
        }
    }
}

/// Reveal animation length: `base + per_cell × answer length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    pub base: Duration,
    pub per_cell: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(600),
            per_cell: Duration::from_millis(90),
        }
    }
}

impl RevealTiming {
    /// Total reveal duration for a row of `cells` positions
    #[must_use]
    pub fn duration(&self, cells: usize) -> Duration {
        self.base + self.per_cell * u32::try_from(cells).unwrap_or(u32::MAX)
    }
}

/// Settings for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub hint_mode: HintMode,
    pub banner_policy: HintBannerPolicy,
    pub reveal: RevealTiming,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_mode_from_name() {
        assert_eq!(HintMode::from_name("off"), HintMode::Off);
        assert_eq!(HintMode::from_name("none"), HintMode::Off);
        assert_eq!(HintMode::from_name("letter"), HintMode::Letter);
        assert_eq!(HintMode::from_name("full"), HintMode::Full);
        assert_eq!(HintMode::from_name("whatever"), HintMode::Full);
    }

    #[test]
    fn hint_mode_max_stage() {
        assert_eq!(HintMode::Off.max_stage(), HintStage::Unused);
        assert_eq!(HintMode::Letter.max_stage(), HintStage::LetterRevealed);
        assert_eq!(HintMode::Full.max_stage(), HintStage::DescriptionRevealed);
    }

    #[test]
    fn hint_stage_indices() {
        assert_eq!(HintStage::Unused.index(), 0);
        assert_eq!(HintStage::LetterRevealed.index(), 1);
        assert_eq!(HintStage::DescriptionRevealed.index(), 2);
    }

    #[test]
    fn banner_policy_from_name() {
        assert_eq!(HintBannerPolicy::from_name("stage"), HintBannerPolicy::StageOnly);
        assert_eq!(
            HintBannerPolicy::from_name("stage-or-end"),
            HintBannerPolicy::StageOrGameOver
        );
        assert_eq!(
            HintBannerPolicy::from_name("stage-or-ned"),
            HintBannerPolicy::StageOrGameOver
        );
    }

    #[test]
    fn reveal_duration_scales_with_length() {
        let timing = RevealTiming::default();
        assert_eq!(timing.duration(5), Duration::from_millis(1050));
        assert_eq!(timing.duration(11), Duration::from_millis(1590));
    }
}
