use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use strum::VariantNames;

use crate::models::{ActionStatus, ComponentActions, ComponentConfig, SwizzleAction, SwizzleConfig};

const SCHEMA_ERROR_PREFIX: &str = "Swizzle config does not match expected schema";

/// First schema violation found while normalizing a raw config.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SchemaViolation {
    NotObject(String),
    Required(String),
    NotAllowed(String),
    NotString(String),
    NotOneOf(String, &'static [&'static str]),
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotObject(path) => write!(f, "\"{path}\" must be of type object"),
            Self::Required(path) => write!(f, "\"{path}\" is required"),
            Self::NotAllowed(path) => write!(f, "\"{path}\" is not allowed"),
            Self::NotString(path) => write!(f, "\"{path}\" must be a string"),
            Self::NotOneOf(path, allowed) => {
                write!(f, "\"{path}\" must be one of [{}]", allowed.join(", "))
            }
        }
    }
}

/// Validate a raw swizzle config and fill in missing action statuses.
pub fn normalize_swizzle_config(raw: &Value) -> Result<SwizzleConfig> {
    validate_config(raw).map_err(|violation| anyhow!("{SCHEMA_ERROR_PREFIX}: {violation}"))
}

fn validate_config(raw: &Value) -> Result<SwizzleConfig, SchemaViolation> {
    let root = as_object(raw, "value")?;

    let components = root
        .get("components")
        .ok_or_else(|| SchemaViolation::Required("components".to_owned()))?;

    if let Some(unknown) = root.keys().find(|key| *key != "components") {
        return Err(SchemaViolation::NotAllowed(unknown.clone()));
    }

    let mut normalized = BTreeMap::new();
    for (name, entry) in as_object(components, "components")? {
        let component = validate_component(entry, &format!("components.{name}"))?;
        normalized.insert(name.clone(), component);
    }

    Ok(SwizzleConfig {
        components: normalized,
    })
}

fn validate_component(entry: &Value, path: &str) -> Result<ComponentConfig, SchemaViolation> {
    let mut component = ComponentConfig::default();

    for (key, value) in as_object(entry, path)? {
        let key_path = format!("{path}.{key}");
        match key.as_str() {
            "actions" => component.actions = validate_actions(value, &key_path)?,
            "description" => {
                let description = value
                    .as_str()
                    .ok_or_else(|| SchemaViolation::NotString(key_path.clone()))?;
                component.description = Some(description.to_owned());
            }
            _ => return Err(SchemaViolation::NotAllowed(key_path)),
        }
    }

    Ok(component)
}

fn validate_actions(value: &Value, path: &str) -> Result<ComponentActions, SchemaViolation> {
    let mut actions = ComponentActions::default();

    for (key, status) in as_object(value, path)? {
        let key_path = format!("{path}.{key}");
        let action = SwizzleAction::from_str(key)
            .map_err(|_| SchemaViolation::NotAllowed(key_path.clone()))?;
        let status = status
            .as_str()
            .ok_or_else(|| SchemaViolation::NotString(key_path.clone()))?;
        let status = ActionStatus::from_str(status)
            .map_err(|_| SchemaViolation::NotOneOf(key_path, ActionStatus::VARIANTS))?;
        actions.set(action, status);
    }

    Ok(actions)
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| SchemaViolation::NotObject(path.to_owned()))
}

/// Something that can describe which of its components may be swizzled.
pub trait SwizzleProvider {
    /// A full swizzle config, not yet normalized.
    fn swizzle_config(&self) -> Option<Value> {
        None
    }

    /// Legacy list of components that are safe for every action.
    fn swizzle_component_list(&self) -> Option<Vec<String>> {
        None
    }
}

/// Raw swizzle config exposed by a provider, if any.
pub fn get_module_swizzle_config<P: SwizzleProvider + ?Sized>(provider: &P) -> Option<Value> {
    if let Some(config) = provider.swizzle_config() {
        return Some(config);
    }

    let safe_components = provider.swizzle_component_list()?;
    let components: Map<String, Value> = safe_components
        .into_iter()
        .map(|name| (name, json!({ "actions": { "eject": "safe", "wrap": "safe" } })))
        .collect();

    Some(json!({ "components": components }))
}

/// Normalized swizzle config of a theme. Themes without one get an empty config.
pub fn theme_swizzle_config<P: SwizzleProvider + ?Sized>(
    theme_path: &Path,
    provider: &P,
) -> Result<SwizzleConfig> {
    let Some(raw) = get_module_swizzle_config(provider) else {
        tracing::debug!(theme = %theme_path.display(), "Theme declares no swizzle config");
        return Ok(SwizzleConfig::default());
    };

    normalize_swizzle_config(&raw).map_err(|e| {
        anyhow!(
            "Invalid Swizzle config for theme {}.\n{e}",
            theme_path.display()
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Theme manifest as written in `swizzle.toml` or `swizzle.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub swizzle: Option<Value>,
    #[serde(default)]
    pub safe_components: Option<Vec<String>>,
}

impl ThemeManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let manifest = match ManifestFormat::from_path(path) {
            ManifestFormat::Toml => toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
            ManifestFormat::Json => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
        };

        tracing::debug!(path = %path.display(), "Loaded theme manifest");
        Ok(manifest)
    }
}

impl SwizzleProvider for ThemeManifest {
    fn swizzle_config(&self) -> Option<Value> {
        self.swizzle.clone()
    }

    fn swizzle_component_list(&self) -> Option<Vec<String>> {
        self.safe_components.clone()
    }
}

/// A loaded theme with its normalized swizzle config.
#[derive(Debug, Clone)]
pub struct Theme {
    pub path: PathBuf,
    pub name: String,
    pub config: SwizzleConfig,
}

impl Theme {
    pub fn load(path: &Path) -> Result<Self> {
        let manifest = ThemeManifest::load(path)?;
        let config = theme_swizzle_config(path, &manifest)?;

        let name = manifest.name.clone().unwrap_or_else(|| {
            path.parent()
                .and_then(Path::file_name)
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
        });

        tracing::info!(
            theme = %name,
            components = config.components.len(),
            "Loaded swizzle config"
        );

        Ok(Self {
            path: path.to_path_buf(),
            name,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn schema_error(raw: Value) -> String {
        normalize_swizzle_config(&raw)
            .expect_err("config should be rejected")
            .to_string()
    }

    #[test]
    fn test_normalize_empty_components() {
        let raw = json!({ "components": {} });
        let config = normalize_swizzle_config(&raw).unwrap();
        assert!(config.components.is_empty());
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn test_normalize_complete_config_is_unchanged() {
        let raw = json!({
            "components": {
                "SomeComponent": {
                    "actions": { "wrap": "safe", "eject": "unsafe" },
                    "description": "SomeComponent description"
                },
                "Other/Component": {
                    "actions": { "wrap": "forbidden", "eject": "unsafe" },
                    "description": "Other/Component description"
                }
            }
        });
        let config = normalize_swizzle_config(&raw).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn test_normalize_partial_config_fills_unsafe() {
        let raw = json!({
            "components": {
                "SomeComponent": {
                    "actions": { "eject": "safe" },
                    "description": "SomeComponent description"
                },
                "Other/Component": {
                    "actions": { "wrap": "forbidden" }
                }
            }
        });
        let config = normalize_swizzle_config(&raw).unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({
                "components": {
                    "SomeComponent": {
                        "actions": { "wrap": "unsafe", "eject": "safe" },
                        "description": "SomeComponent description"
                    },
                    "Other/Component": {
                        "actions": { "wrap": "forbidden", "eject": "unsafe" }
                    }
                }
            })
        );
    }

    #[test]
    fn test_component_without_actions_gets_defaults() {
        let config = normalize_swizzle_config(&json!({ "components": { "MyComponent": {} } })).unwrap();
        let component = config.component("MyComponent").unwrap();
        assert_eq!(
            component.actions,
            ComponentActions::new(ActionStatus::Unsafe, ActionStatus::Unsafe)
        );
        assert_eq!(component.description, None);
    }

    #[rstest]
    #[case::missing_components(
        json!({}),
        "Swizzle config does not match expected schema: \"components\" is required"
    )]
    #[case::not_an_object(
        json!(42),
        "Swizzle config does not match expected schema: \"value\" must be of type object"
    )]
    #[case::unknown_root_key(
        json!({ "components": {}, "extra": true }),
        "Swizzle config does not match expected schema: \"extra\" is not allowed"
    )]
    #[case::invalid_action_name(
        json!({ "components": { "MyComponent": { "actions": { "wrap": "safe", "eject": "unsafe", "bad": "safe" } } } }),
        "Swizzle config does not match expected schema: \"components.MyComponent.actions.bad\" is not allowed"
    )]
    #[case::invalid_action_status(
        json!({ "components": { "MyComponent": { "actions": { "wrap": "safe", "eject": "invalid-status" } } } }),
        "Swizzle config does not match expected schema: \"components.MyComponent.actions.eject\" must be one of [safe, unsafe, forbidden]"
    )]
    #[case::non_string_status(
        json!({ "components": { "MyComponent": { "actions": { "wrap": 1 } } } }),
        "Swizzle config does not match expected schema: \"components.MyComponent.actions.wrap\" must be a string"
    )]
    #[case::non_string_description(
        json!({ "components": { "MyComponent": { "description": null } } }),
        "Swizzle config does not match expected schema: \"components.MyComponent.description\" must be a string"
    )]
    #[case::unknown_component_key(
        json!({ "components": { "MyComponent": { "label": "x" } } }),
        "Swizzle config does not match expected schema: \"components.MyComponent.label\" is not allowed"
    )]
    #[case::component_not_an_object(
        json!({ "components": { "MyComponent": "safe" } }),
        "Swizzle config does not match expected schema: \"components.MyComponent\" must be of type object"
    )]
    #[case::components_not_an_object(
        json!({ "components": ["MyComponent"] }),
        "Swizzle config does not match expected schema: \"components\" must be of type object"
    )]
    fn test_normalize_rejects(#[case] raw: Value, #[case] expected: &str) {
        assert_eq!(schema_error(raw), expected);
    }

    struct FullConfig;

    impl SwizzleProvider for FullConfig {
        fn swizzle_config(&self) -> Option<Value> {
            Some(json!({ "components": {} }))
        }

        fn swizzle_component_list(&self) -> Option<Vec<String>> {
            Some(vec!["Ignored".to_owned()])
        }
    }

    struct LegacyList;

    impl SwizzleProvider for LegacyList {
        fn swizzle_component_list(&self) -> Option<Vec<String>> {
            Some(vec!["Navbar".to_owned(), "Footer".to_owned()])
        }
    }

    struct NoConfig;

    impl SwizzleProvider for NoConfig {}

    struct BrokenConfig;

    impl SwizzleProvider for BrokenConfig {
        fn swizzle_config(&self) -> Option<Value> {
            Some(json!({}))
        }
    }

    #[test]
    fn test_module_config_prefers_full_config() {
        assert_eq!(
            get_module_swizzle_config(&FullConfig),
            Some(json!({ "components": {} }))
        );
    }

    #[test]
    fn test_module_config_from_legacy_list_is_safe() {
        let raw = get_module_swizzle_config(&LegacyList).unwrap();
        let config = normalize_swizzle_config(&raw).unwrap();
        assert_eq!(config.component_names(), vec!["Footer", "Navbar"]);
        for component in config.components.values() {
            assert_eq!(
                component.actions,
                ComponentActions::new(ActionStatus::Safe, ActionStatus::Safe)
            );
            assert_eq!(component.description, None);
        }
    }

    #[test]
    fn test_module_config_absent() {
        assert_eq!(get_module_swizzle_config(&NoConfig), None);
    }

    #[test]
    fn test_theme_config_falls_back_to_empty() {
        let config = theme_swizzle_config(Path::new("theme-classic"), &NoConfig).unwrap();
        assert_eq!(config, SwizzleConfig::default());
    }

    #[test]
    fn test_theme_config_error_names_theme() {
        let err = theme_swizzle_config(Path::new("theme-classic"), &BrokenConfig).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Swizzle config for theme theme-classic.\nSwizzle config does not match expected schema: \"components\" is required"
        );
    }

    #[test]
    fn test_load_toml_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swizzle.toml");
        fs::write(
            &path,
            r#"
name = "classic"

[swizzle.components.Navbar]
description = "The site navbar"

[swizzle.components.Navbar.actions]
wrap = "safe"
"#,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.name, "classic");
        let navbar = theme.config.component("Navbar").unwrap();
        assert_eq!(
            navbar.actions,
            ComponentActions::new(ActionStatus::Safe, ActionStatus::Unsafe)
        );
        assert_eq!(navbar.description.as_deref(), Some("The site navbar"));
    }

    #[test]
    fn test_load_json_manifest_with_legacy_list() {
        let dir = tempfile::tempdir().unwrap();
        let theme_dir = dir.path().join("my-theme");
        fs::create_dir(&theme_dir).unwrap();
        let path = theme_dir.join("swizzle.json");
        fs::write(&path, r#"{ "safe_components": ["Footer"] }"#).unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.name, "my-theme");
        assert_eq!(theme.config.component_names(), vec!["Footer"]);
    }

    #[test]
    fn test_load_reports_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swizzle.toml");
        fs::write(&path, "name = ").unwrap();

        let err = ThemeManifest::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
