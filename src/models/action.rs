use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, VariantNames};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, AsRefStr, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SwizzleAction {
    Wrap,
    Eject,
}

impl SwizzleAction {
    pub const ALL: [SwizzleAction; 2] = [SwizzleAction::Wrap, SwizzleAction::Eject];
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    AsRefStr,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionStatus {
    Safe,
    #[default]
    Unsafe,
    Forbidden,
}

impl ActionStatus {
    /// Capitalized display label, e.g. `Safe`.
    pub fn label(self) -> &'static str {
        match self {
            ActionStatus::Safe => "Safe",
            ActionStatus::Unsafe => "Unsafe",
            ActionStatus::Forbidden => "Forbidden",
        }
    }
}
