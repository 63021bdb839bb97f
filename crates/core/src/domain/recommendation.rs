use serde::{Deserialize, Serialize};

use crate::domain::item::ClearanceItem;

/// Selected items with display metadata. The message and discount vectors run
/// parallel to `items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub items: Vec<ClearanceItem>,
    pub discount_percentages: Vec<u32>,
    pub urgency_messages: Vec<String>,
    pub sustainability_messages: Vec<String>,
    pub timer_seconds: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionReason {
    BlockedPage,
    ProbabilityDraw,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PopupDecision {
    Suppressed { reason: SuppressionReason },
    NoCandidates,
    Shown(Recommendation),
}

impl PopupDecision {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            Self::Shown(recommendation) => Some(recommendation),
            Self::Suppressed { .. } | Self::NoCandidates => None,
        }
    }

    pub fn into_recommendation(self) -> Option<Recommendation> {
        match self {
            Self::Shown(recommendation) => Some(recommendation),
            Self::Suppressed { .. } | Self::NoCandidates => None,
        }
    }
}
