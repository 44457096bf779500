use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::commands::component::ComponentDetails;
use crate::commands::suggest::Suggestion;
use crate::config::Theme;
use crate::models::ActionStatus;

/// Style `text` with the color of `status`.
pub fn action_status_color(status: ActionStatus, text: &str) -> String {
    let styled = match status {
        ActionStatus::Safe => style(text).green(),
        ActionStatus::Unsafe => style(text).yellow(),
        ActionStatus::Forbidden => style(text).red(),
    };
    styled.to_string()
}

/// Suffix such as ` (Safe)`, with a red `*` when the status is only partially safe.
pub fn action_status_suffix(status: ActionStatus, partially_safe: bool) -> String {
    let hint = if partially_safe {
        style("*").red().to_string()
    } else {
        String::new()
    };
    format!(
        " ({}{hint})",
        action_status_color(status, status.label())
    )
}

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    pub fn suggestion(&self, suggestion: &Suggestion) -> Result<()> {
        if self.json {
            return self.print_json(suggestion);
        }

        match &suggestion.matched {
            Some(matched) if suggestion.exact => {
                self.term.write_line(&format!(
                    "{} {}",
                    style("Match:").green(),
                    style(matched).cyan().bold()
                ))?;
            }
            Some(matched) => {
                self.term.write_line(&format!(
                    "{} {}",
                    style("Did you mean:").yellow(),
                    style(matched).cyan().bold()
                ))?;
            }
            None => {
                self.term.write_line(&format!(
                    "No close match for {:?}",
                    suggestion.query
                ))?;
            }
        }
        Ok(())
    }

    pub fn config_checked(&self, theme: &Theme) -> Result<()> {
        if self.json {
            return self.print_json(&theme.config);
        }

        self.term.write_line(&format!(
            "{} {}",
            style("Swizzle config is valid:").green(),
            style(&theme.name).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Path: {}", theme.path.display()))?;
        self.term.write_line(&format!(
            "  Components: {}",
            theme.config.components.len()
        ))?;
        Ok(())
    }

    pub fn component_list(&self, theme: &Theme, components: &[ComponentDetails]) -> Result<()> {
        if self.json {
            return self.print_json(components);
        }

        self.term.write_line(&format!(
            "Components for theme: {}",
            style(&theme.name).cyan().bold()
        ))?;
        self.term.write_line("")?;

        if components.is_empty() {
            self.term.write_line("No swizzlable components found.")?;
            return Ok(());
        }

        for component in components {
            self.print_component(component)?;
        }

        if components
            .iter()
            .flat_map(|c| &c.actions)
            .any(|a| a.partially_safe)
        {
            self.term.write_line(&format!(
                "{} some nested components are not safe",
                style("*").red()
            ))?;
        }
        Ok(())
    }

    pub fn component_details(&self, details: &ComponentDetails) -> Result<()> {
        if self.json {
            return self.print_json(details);
        }

        self.print_component(details)
    }

    fn print_component(&self, component: &ComponentDetails) -> Result<()> {
        self.term
            .write_line(&style(&component.name).cyan().bold().to_string())?;
        if let Some(description) = &component.description {
            self.term
                .write_line(&format!("  Description: {description}"))?;
        }
        for report in &component.actions {
            self.term.write_line(&format!(
                "  {}{}",
                report.action.as_ref(),
                action_status_suffix(report.status, report.partially_safe)
            ))?;
        }
        self.term.write_line("")?;
        Ok(())
    }
}
