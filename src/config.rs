//! Configuration resolution for ado-alert-report.
//!
//! Every parameter can come from three places, in precedence order:
//! command line > environment > optional YAML config file. Resolution runs
//! once at startup and produces an [`AppConfig`]; nothing downstream reads
//! the environment again.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::alert_reporting::domain::Scope;
use crate::cli::Args;
use crate::shared::error::ReportError;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "ado-alert-report.config.yml";
const DEFAULT_REPORT_FILENAME: &str = "advanced-security-report.csv";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub scope: Option<String>,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub repository: Option<String>,
    pub output: Option<String>,
    pub links: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReportError::ConfigError {
            path: path.to_path_buf(),
            details: format!("invalid YAML: {}", e),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Environment-sourced defaults, read once at startup.
///
/// The `ADO_*` names are this tool's own; the `SYSTEM_*` fallbacks are the
/// predefined variables an Azure Pipelines job exposes, so a pipeline step
/// needs no explicit configuration beyond mapping the access token.
#[derive(Debug, Clone, Default)]
pub struct EnvDefaults {
    pub organization_url: Option<String>,
    pub project: Option<String>,
    pub repository: Option<String>,
    pub credential: Option<String>,
    pub report_file_name: Option<String>,
}

impl EnvDefaults {
    pub fn from_process() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }

        Self {
            organization_url: var("ADO_ORGANIZATION_URL").or_else(|| var("SYSTEM_COLLECTIONURI")),
            project: var("ADO_PROJECT").or_else(|| var("SYSTEM_TEAMPROJECT")),
            repository: var("ADO_REPOSITORY"),
            credential: var("ADO_PAT").or_else(|| var("SYSTEM_ACCESSTOKEN")),
            report_file_name: var("ADO_REPORT_FILENAME"),
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scope: Scope,
    pub organization_url: String,
    pub project: Option<String>,
    pub repository: Option<String>,
    pub report_file_name: String,
    pub spreadsheet_links: bool,
    pub credential: String,
}

impl AppConfig {
    /// Resolves the runtime configuration from all three sources.
    ///
    /// # Errors
    /// A missing credential or organization URL is a fatal configuration
    /// error, reported here - before any network activity. Scope
    /// completeness (project scope without a project name, etc.) is also
    /// rejected here.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_config_from_path(Path::new(path))?,
            None => discover_config(Path::new("."))?.unwrap_or_default(),
        };
        Self::from_sources(args, &file, &EnvDefaults::from_process())
    }

    fn from_sources(args: &Args, file: &ConfigFile, env: &EnvDefaults) -> Result<Self> {
        let scope = match args.scope {
            Some(scope) => scope,
            None => match &file.scope {
                Some(raw) => raw
                    .parse::<Scope>()
                    .map_err(|e| anyhow::anyhow!(e))
                    .with_context(|| format!("Invalid scope in config file: {:?}", raw))?,
                None => Scope::Organization,
            },
        };

        let credential = args
            .pat
            .clone()
            .or_else(|| env.credential.clone())
            .ok_or(ReportError::MissingCredential)?;

        let organization_url = args
            .organization
            .clone()
            .or_else(|| env.organization_url.clone())
            .or_else(|| file.organization.clone())
            .ok_or(ReportError::MissingOrganization)?;

        let project = args
            .project
            .clone()
            .or_else(|| env.project.clone())
            .or_else(|| file.project.clone());

        let repository = args
            .repository
            .clone()
            .or_else(|| env.repository.clone())
            .or_else(|| file.repository.clone());

        let report_file_name = args
            .output
            .clone()
            .or_else(|| env.report_file_name.clone())
            .or_else(|| file.output.clone())
            .unwrap_or_else(|| DEFAULT_REPORT_FILENAME.to_string());

        let config = Self {
            scope,
            organization_url,
            project,
            repository,
            report_file_name,
            spreadsheet_links: args.links || file.links.unwrap_or(false),
            credential,
        };
        config.validate_scope()?;
        Ok(config)
    }

    fn validate_scope(&self) -> Result<()> {
        let missing = match self.scope {
            Scope::Organization => None,
            Scope::Project if self.project.is_none() => Some("project"),
            Scope::Repository if self.project.is_none() => Some("project"),
            Scope::Repository if self.repository.is_none() => Some("repository"),
            _ => None,
        };

        if let Some(missing) = missing {
            return Err(ReportError::IncompleteScope {
                scope: self.scope.to_string(),
                missing: missing.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
