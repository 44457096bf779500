use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ActionStatus, ComponentConfig, SwizzleAction};

/// Separator nesting a component under its parent, as in `Navbar/Item`.
pub const COMPONENT_SEPARATOR: char = '/';

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwizzleConfig {
    pub components: BTreeMap<String, ComponentConfig>,
}

impl SwizzleConfig {
    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.get(name)
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ComponentConfig> + 'a {
        self.components.iter().filter_map(move |(key, config)| {
            key.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(COMPONENT_SEPARATOR))
                .filter(|rest| !rest.is_empty())
                .map(|_| config)
        })
    }

    /// A safe component is partially safe when one of its children is not
    /// safe for the same action.
    pub fn is_partially_safe(&self, name: &str, action: SwizzleAction) -> bool {
        let Some(component) = self.component(name) else {
            return false;
        };

        component.actions.status(action) == ActionStatus::Safe
            && self
                .children(name)
                .any(|child| child.actions.status(action) != ActionStatus::Safe)
    }
}
