use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::Serialize;
use strum::VariantNames;

use crate::helpers::{find_closest_value, find_string_ignoring_case};
use crate::models::{ActionStatus, SwizzleAction, SwizzleConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    pub action: SwizzleAction,
    pub status: ActionStatus,
    pub partially_safe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub actions: Vec<ActionReport>,
}

fn describe(name: &str, actions: &[SwizzleAction], config: &SwizzleConfig) -> Option<ComponentDetails> {
    let component = config.component(name)?;

    Some(ComponentDetails {
        name: name.to_owned(),
        description: component.description.clone(),
        actions: actions
            .iter()
            .map(|&action| ActionReport {
                action,
                status: component.actions.status(action),
                partially_safe: config.is_partially_safe(name, action),
            })
            .collect(),
    })
}

pub fn list(config: &SwizzleConfig) -> Vec<ComponentDetails> {
    config
        .component_names()
        .into_iter()
        .filter_map(|name| describe(name, &SwizzleAction::ALL, config))
        .collect()
}

/// Resolve a user-supplied component name to the name the theme declares.
pub fn resolve_name(name: &str, config: &SwizzleConfig) -> Result<String> {
    let names = config.component_names();

    if let Some(found) = find_string_ignoring_case(name, &names) {
        tracing::debug!(requested = name, resolved = found, "Resolved component name");
        return Ok(found.to_owned());
    }

    if let Some(suggestion) = find_closest_value(name, &names) {
        return Err(anyhow!(
            "Component not found: {name}\nDid you mean: {suggestion}"
        ));
    }

    if names.is_empty() {
        Err(anyhow!(
            "Component not found: {name}\nThis theme does not declare any swizzlable components."
        ))
    } else {
        let available = textwrap::indent(&textwrap::fill(&names.join(", "), 76), "  ");
        Err(anyhow!(
            "Component not found: {name}\nAvailable components:\n{}",
            available.trim_end()
        ))
    }
}

/// Resolve a user-supplied action name, e.g. `Wrap` or `ejct`.
pub fn resolve_action(action: &str) -> Result<SwizzleAction> {
    let Some(found) = find_string_ignoring_case(action, SwizzleAction::VARIANTS) else {
        return Err(match find_closest_value(action, SwizzleAction::VARIANTS) {
            Some(suggestion) => anyhow!("Unknown action: {action}\nDid you mean: {suggestion}"),
            None => anyhow!(
                "Unknown action: {action}\nValid actions: {}",
                SwizzleAction::VARIANTS.join(", ")
            ),
        });
    };

    SwizzleAction::from_str(found).map_err(|_| anyhow!("Unknown action: {action}"))
}

pub fn show(name: &str, action: Option<&str>, config: &SwizzleConfig) -> Result<ComponentDetails> {
    let actions = match action {
        Some(action) => vec![resolve_action(action)?],
        None => SwizzleAction::ALL.to_vec(),
    };

    let resolved = resolve_name(name, config)?;
    describe(&resolved, &actions, config).ok_or_else(|| anyhow!("Component not found: {name}"))
}
