//! Roast tones: how hard the model is asked to go.

/// Parsed case-sensitively from the four lowercase literals; anything else
/// (including a missing value) resolves to `Standard`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoastTone {
    Gentle,
    Standard,
    Savage,
    Professional,
}

impl RoastTone {
    /// Resolves an optional request parameter to a tone.
    pub fn from_param(value: Option<&str>) -> RoastTone {
        match value {
            Some("gentle") => RoastTone::Gentle,
            Some("savage") => RoastTone::Savage,
            Some("professional") => RoastTone::Professional,
            _ => RoastTone::Standard,
        }
    }

    /// The wire name, echoed back in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoastTone::Gentle => "gentle",
            RoastTone::Standard => "standard",
            RoastTone::Savage => "savage",
            RoastTone::Professional => "professional",
        }
    }
}
