//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STALL_CATALOG_FILE` - YAML or JSON catalog to use instead of the demo catalog
//! - `STALL_VERIFIED_THRESHOLD` - Orders needed for the verified badge (default: 500)
//! - `STALL_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: `supply_stall=info`)

use std::path::{Path, PathBuf};

use thiserror::Error;

use supply_stall_core::{Catalog, VERIFIED_ORDER_THRESHOLD};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Failed to read catalog file {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML catalog: {0}")]
    CatalogYaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON catalog: {0}")]
    CatalogJson(#[from] serde_json::Error),

    #[error("Unsupported catalog file {0} (expected .yaml, .yml or .json)")]
    UnsupportedCatalogFormat(PathBuf),
}

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Catalog file encodings, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Supply Stall CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallConfig {
    /// Catalog file replacing the built-in demo catalog
    pub catalog_file: Option<PathBuf>,
    /// Total orders needed for the verified supplier badge
    pub verified_threshold: u32,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StallConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            verified_threshold: VERIFIED_ORDER_THRESHOLD,
            log_format: LogFormat::Pretty,
        }
    }
}

impl StallConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_file = get_optional(&lookup, "STALL_CATALOG_FILE").map(PathBuf::from);

        let verified_threshold = get_or_default(
            &lookup,
            "STALL_VERIFIED_THRESHOLD",
            &VERIFIED_ORDER_THRESHOLD.to_string(),
        )
        .trim()
        .parse::<u32>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("STALL_VERIFIED_THRESHOLD".to_string(), e.to_string())
        })?;

        let log_format = get_or_default(&lookup, "STALL_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("STALL_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            catalog_file,
            verified_threshold,
            log_format,
        })
    }

    /// The configured catalog, or the demo catalog when none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_file {
            Some(path) => read_catalog(path),
            None => Ok(Catalog::demo()),
        }
    }
}

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, has an unknown
/// extension, or does not describe a valid catalog.
pub fn read_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let format = CatalogFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedCatalogFormat(path.to_path_buf()))?;
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents, format)?;
    tracing::info!(
        path = %path.display(),
        items = catalog.len(),
        businesses = catalog.businesses().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Parse catalog contents in the given format.
///
/// # Errors
///
/// Returns `ConfigError` if the contents are malformed or fail catalog
/// validation (duplicate ids, negative prices).
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog, ConfigError> {
    Ok(match format {
        CatalogFormat::Yaml => serde_yaml::from_str(contents)?,
        CatalogFormat::Json => serde_json::from_str(contents)?,
    })
}

/// Get an optional variable, treating blank values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<StallConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StallConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), StallConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("STALL_CATALOG_FILE", "catalog.yaml"),
            ("STALL_VERIFIED_THRESHOLD", "100"),
            ("STALL_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.verified_threshold, 100);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config(&[("STALL_CATALOG_FILE", " "), ("STALL_LOG_FORMAT", "")]).unwrap();
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_invalid_values() {
        let err = config(&[("STALL_VERIFIED_THRESHOLD", "lots")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(ref key, _) if key == "STALL_VERIFIED_THRESHOLD"
        ));

        let err = config(&[("STALL_LOG_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_catalog_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("stock.YML")),
            Some(CatalogFormat::Yaml)
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("stock.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(CatalogFormat::from_path(Path::new("stock.toml")), None);
        assert!(matches!(
            read_catalog(Path::new("stock.csv")),
            Err(ConfigError::UnsupportedCatalogFormat(_))
        ));
    }

    #[test]
    fn test_parse_yaml_catalog() {
        let yaml = r#"
currency: EUR
businesses:
  - id: 1
    name: Canal Greens
    owner: Sanne de Vries
    description: Leafy greens grown on the canal
items:
  - id: 10
    name: Rocket
    supplier: Sanne de Vries
    business_name: Canal Greens
    category: Vegetables
    description: Peppery rocket leaves
    price: "4.40"
    unit: kg
    in_stock: true
"#;
        let catalog = parse_catalog(yaml, CatalogFormat::Yaml).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.businesses().len(), 1);
        let rocket = catalog.items().first().unwrap();
        assert_eq!(catalog.price_of(rocket).to_string(), "€4.40");
    }

    #[test]
    fn test_parse_json_catalog_rejects_duplicates() {
        let json = r#"{
            "items": [
                {"id": 1, "name": "Salt", "supplier": "A", "business_name": "B",
                 "category": "Spices", "description": "", "price": "1.00",
                 "unit": "bag", "in_stock": true},
                {"id": 1, "name": "Pepper", "supplier": "A", "business_name": "B",
                 "category": "Spices", "description": "", "price": "2.00",
                 "unit": "bag", "in_stock": true}
            ]
        }"#;
        assert!(matches!(
            parse_catalog(json, CatalogFormat::Json),
            Err(ConfigError::CatalogJson(_))
        ));
    }
}
