use serde::{Deserialize, Serialize};

/// How a card's value is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Negative,
    Normal,
}

impl Emphasis {
    /// Text color used for the card value.
    pub fn color(&self) -> &'static str {
        match self {
            Emphasis::Negative => "crimson",
            Emphasis::Normal => "#2c3e50",
        }
    }
}

/// A single labeled metric as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCard {
    pub label: String,
    pub text: String,
    pub emphasis: Emphasis,
}
