// Read-only view of the engine for the presentation layer.
use super::constants::{ELEVATED_RATE, MODERATE_RATE, RESTING_RATE};

/// Everything the page needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseSnapshot {
    pub permission_granted: bool,
    pub heart_rate: u32,
    pub is_shaking: bool,
    pub beat: bool,
}

/// Intensity bucket used for colouring the heart and the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Alert,
    Elevated,
    Moderate,
    Resting,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Alert => "alert",
            Tier::Elevated => "elevated",
            Tier::Moderate => "moderate",
            Tier::Resting => "resting",
        }
    }

    pub fn heart_class(&self) -> &'static str {
        match self {
            Tier::Alert => "text-red-500",
            Tier::Elevated => "text-orange-500",
            Tier::Moderate => "text-yellow-500",
            Tier::Resting => "text-pink-500",
        }
    }

    pub fn background_class(&self) -> &'static str {
        match self {
            Tier::Alert => "bg-gradient-to-br from-red-900 to-red-700",
            Tier::Elevated => "bg-gradient-to-br from-orange-900 to-orange-700",
            Tier::Moderate => "bg-gradient-to-br from-yellow-900 to-yellow-700",
            Tier::Resting => "bg-gradient-to-br from-pink-900 to-purple-900",
        }
    }
}

impl PulseSnapshot {
    pub fn color_tier(&self) -> Tier {
        if self.is_shaking {
            Tier::Alert
        } else if self.heart_rate > ELEVATED_RATE {
            Tier::Elevated
        } else if self.heart_rate > MODERATE_RATE {
            Tier::Moderate
        } else {
            Tier::Resting
        }
    }

    /// Page theme; follows the heart colour.
    #[inline]
    pub fn background_tier(&self) -> Tier {
        self.color_tier()
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_shaking {
            "Shaking Detected!"
        } else if self.heart_rate > ELEVATED_RATE {
            "Elevated Heart Rate"
        } else if self.heart_rate > RESTING_RATE {
            "Heart Rate Decreasing"
        } else {
            "Resting Heart Rate"
        }
    }
}
