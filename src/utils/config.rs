use serde::Deserialize;

pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DELIMITER: &str = ",";

/// Connection and output defaults loaded from a local YAML file. Every
/// field is optional; command-line flags win over the file, the file wins
/// over the built-in defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub mongo_uri: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl ReportConfig {
    pub fn from_yaml(config_string: &str) -> Result<ReportConfig, serde_yaml::Error> {
        serde_yaml::from_str(config_string)
    }

    pub fn load(path: &str) -> Result<ReportConfig, Box<dyn std::error::Error>> {
        let config_string = std::fs::read_to_string(path)?;
        let config = ReportConfig::from_yaml(&config_string)?;
        Ok(config)
    }
}

pub fn resolve(cli_value: &str, config_value: Option<&String>, default_value: &str) -> String {
    if !cli_value.is_empty() {
        return cli_value.to_string();
    }
    if let Some(value) = config_value {
        if !value.is_empty() {
            return value.to_string();
        }
    }
    default_value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_full() {
        let config =
            ReportConfig::from_yaml("mongo_uri: mongodb://db.internal:27017\ndelimiter: \"\\t\"")
                .unwrap();
        assert_eq!(
            config.mongo_uri.as_deref(),
            Some("mongodb://db.internal:27017")
        );
        assert_eq!(config.delimiter.as_deref(), Some("\t"));
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = ReportConfig::from_yaml("delimiter: \";\"").unwrap();
        assert!(config.mongo_uri.is_none());
        assert_eq!(config.delimiter.as_deref(), Some(";"));
    }

    #[test]
    fn test_from_yaml_malformed_is_error() {
        assert!(ReportConfig::from_yaml("delimiter: [unterminated").is_err());
    }

    #[test]
    fn test_resolve_precedence() {
        let from_file = Some("from-file".to_string());
        assert_eq!(resolve("from-cli", from_file.as_ref(), "default"), "from-cli");
        assert_eq!(resolve("", from_file.as_ref(), "default"), "from-file");
        assert_eq!(resolve("", None, "default"), "default");

        // An empty file value falls through to the default too
        let empty = Some(String::new());
        assert_eq!(resolve("", empty.as_ref(), "default"), "default");
    }
}
