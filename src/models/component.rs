use serde::{Deserialize, Serialize};

use super::{ActionStatus, SwizzleAction};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentActions {
    pub wrap: ActionStatus,
    pub eject: ActionStatus,
}

impl ComponentActions {
    pub fn new(wrap: ActionStatus, eject: ActionStatus) -> Self {
        Self { wrap, eject }
    }

    pub fn status(&self, action: SwizzleAction) -> ActionStatus {
        match action {
            SwizzleAction::Wrap => self.wrap,
            SwizzleAction::Eject => self.eject,
        }
    }

    pub fn set(&mut self, action: SwizzleAction, status: ActionStatus) {
        match action {
            SwizzleAction::Wrap => self.wrap = status,
            SwizzleAction::Eject => self.eject = status,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComponentConfig {
    pub actions: ComponentActions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
