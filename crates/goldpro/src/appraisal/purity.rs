use serde::{Deserialize, Serialize};

/// Touch percentage applied when a selector is absent, zero, or
/// unparseable.
pub const FALLBACK_TOUCH_PERCENT: f64 = 85.0;

/// Touch percentages offered on the form. Advisory only; any positive
/// number is accepted.
pub const TOUCH_PERCENT_OPTIONS: [f64; 7] = [75.0, 80.0, 85.0, 90.0, 91.0, 92.0, 95.0];

/// Karat grades recognized by the branch hallmark card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaratGrade {
    #[serde(rename = "22krt")]
    K22,
    #[serde(rename = "21krt")]
    K21,
    #[serde(rename = "20krt")]
    K20,
    #[serde(rename = "19krt")]
    K19,
    #[serde(rename = "18krt")]
    K18,
}

impl KaratGrade {
    pub const fn ordered() -> [Self; 5] {
        [Self::K22, Self::K21, Self::K20, Self::K19, Self::K18]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::K22 => "22krt",
            Self::K21 => "21krt",
            Self::K20 => "20krt",
            Self::K19 => "19krt",
            Self::K18 => "18krt",
        }
    }

    /// Branch hallmark card: 22krt counts as full touch and the lower
    /// grades follow the card's printed percentages, not the 24-part
    /// fraction.
    pub const fn touch_percent(self) -> f64 {
        match self {
            Self::K22 => 100.00,
            Self::K21 => 87.50,
            Self::K20 => 83.34,
            Self::K19 => 79.17,
            Self::K18 => 75.00,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|grade| grade.label() == trimmed)
    }
}

/// Discriminator for the two purity notations on the article form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurityMode {
    Touch,
    Karat,
}

/// Purity selector for one article. The two notations are mutually
/// exclusive, so invalid flag/value combinations cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purity {
    Touch(f64),
    Karat(KaratGrade),
}

impl Purity {
    /// Default selector when the form switches to touch mode.
    pub const fn default_touch() -> Self {
        Self::Touch(FALLBACK_TOUCH_PERCENT)
    }

    /// Default selector when the form switches to karat mode.
    pub const fn default_karat() -> Self {
        Self::Karat(KaratGrade::K20)
    }

    pub const fn mode(&self) -> PurityMode {
        match self {
            Self::Touch(_) => PurityMode::Touch,
            Self::Karat(_) => PurityMode::Karat,
        }
    }

    /// Resolve a loose selector string from a boundary layer. Unknown
    /// karat keys and unusable touch values fall back to the mode
    /// defaults rather than erroring.
    pub fn resolve(mode: PurityMode, raw: Option<&str>) -> Self {
        match mode {
            PurityMode::Touch => raw
                .and_then(|value| value.trim().trim_end_matches('%').trim().parse::<f64>().ok())
                .filter(|value| value.is_finite())
                .map(Self::Touch)
                .unwrap_or_else(Self::default_touch),
            PurityMode::Karat => raw
                .and_then(KaratGrade::parse)
                .map(Self::Karat)
                .unwrap_or_else(Self::default_karat),
        }
    }

    /// Fractional multiplier in the net-weight formula. A zero touch
    /// selector counts as unset and takes the 85% fallback.
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Touch(touch) if touch.is_finite() && *touch != 0.0 => touch / 100.0,
            Self::Touch(_) => FALLBACK_TOUCH_PERCENT / 100.0,
            Self::Karat(grade) => grade.touch_percent() / 100.0,
        }
    }

    /// Display form: `85%` for touch, the hallmark key for karat.
    pub fn label(&self) -> String {
        match self {
            Self::Touch(touch) if touch.fract() == 0.0 => format!("{touch:.0}%"),
            Self::Touch(touch) => format!("{touch}%"),
            Self::Karat(grade) => grade.label().to_string(),
        }
    }
}
