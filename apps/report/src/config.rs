use std::path::PathBuf;
use std::str::FromStr;

use view_access_core::{AppError, AppResult};
use view_access_domain::ViewId;

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub views_path: PathBuf,
    pub groups_path: PathBuf,
    pub view_id: Option<ViewId>,
    pub reject_unknown_views: bool,
}

impl ReportConfig {
    /// Loads settings through a variable lookup.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let views_path = required_path(&lookup, "VIEW_ACCESS_VIEWS_PATH")?;
        let groups_path = required_path(&lookup, "VIEW_ACCESS_GROUPS_PATH")?;
        let view_id = optional_value(&lookup, "VIEW_ACCESS_VIEW_ID")
            .map(|value| ViewId::from_str(value.as_str()))
            .transpose()?;
        let reject_unknown_views = parse_bool(&lookup, "VIEW_ACCESS_REJECT_UNKNOWN_VIEWS", false)?;

        Ok(Self {
            views_path,
            groups_path,
            view_id,
            reject_unknown_views,
        })
    }
}

fn optional_value(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn required_path(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> AppResult<PathBuf> {
    optional_value(lookup, name)
        .map(PathBuf::from)
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: bool,
) -> AppResult<bool> {
    match optional_value(lookup, name) {
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(AppError::Validation(format!(
                "invalid {name} value '{value}': expected true or false"
            ))),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use view_access_core::AppError;
    use view_access_domain::ViewId;

    use super::ReportConfig;

    fn load(values: &[(&str, &str)]) -> Result<ReportConfig, AppError> {
        let values: HashMap<String, String> = values
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ReportConfig::load(|name| values.get(name).cloned())
    }

    #[test]
    fn loads_required_paths_and_defaults() {
        let config = load(&[
            ("VIEW_ACCESS_VIEWS_PATH", "exports/views.json"),
            ("VIEW_ACCESS_GROUPS_PATH", "exports/groups.json"),
        ])
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(config.views_path, PathBuf::from("exports/views.json"));
        assert_eq!(config.groups_path, PathBuf::from("exports/groups.json"));
        assert_eq!(config.view_id, None);
        assert!(!config.reject_unknown_views);
    }

    #[test]
    fn parses_selected_view_and_strict_mode() {
        let config = load(&[
            ("VIEW_ACCESS_VIEWS_PATH", "views.json"),
            ("VIEW_ACCESS_GROUPS_PATH", "groups.json"),
            ("VIEW_ACCESS_VIEW_ID", "42"),
            ("VIEW_ACCESS_REJECT_UNKNOWN_VIEWS", "TRUE"),
        ])
        .unwrap_or_else(|_| unreachable!());

        assert_eq!(config.view_id, Some(ViewId::new(42)));
        assert!(config.reject_unknown_views);
    }

    #[test]
    fn missing_groups_path_is_rejected() {
        let result = load(&[("VIEW_ACCESS_VIEWS_PATH", "views.json")]);
        assert!(
            matches!(result, Err(AppError::Validation(message)) if message.contains("VIEW_ACCESS_GROUPS_PATH"))
        );
    }

    #[test]
    fn non_numeric_view_id_is_rejected() {
        let result = load(&[
            ("VIEW_ACCESS_VIEWS_PATH", "views.json"),
            ("VIEW_ACCESS_GROUPS_PATH", "groups.json"),
            ("VIEW_ACCESS_VIEW_ID", "rack-4"),
        ]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn invalid_boolean_is_rejected() {
        let result = load(&[
            ("VIEW_ACCESS_VIEWS_PATH", "views.json"),
            ("VIEW_ACCESS_GROUPS_PATH", "groups.json"),
            ("VIEW_ACCESS_REJECT_UNKNOWN_VIEWS", "maybe"),
        ]);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
