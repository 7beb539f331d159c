use clap::Parser;

use crate::alert_reporting::domain::Scope;

/// Export branch-level Advanced Security alert reports for Azure DevOps
#[derive(Parser, Debug)]
#[command(name = "ado-alert-report")]
#[command(version)]
#[command(
    about = "Export branch-level Advanced Security alert counts, enablement posture and last-commit metadata to CSV",
    long_about = None
)]
pub struct Args {
    /// Scan scope: organization, project or repository
    #[arg(short, long)]
    pub scope: Option<Scope>,

    /// Organization URL, e.g. https://dev.azure.com/contoso
    #[arg(long)]
    pub organization: Option<String>,

    /// Project name (required for project and repository scope)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Repository name (required for repository scope)
    #[arg(short, long)]
    pub repository: Option<String>,

    /// Report file name (characters outside [A-Za-z0-9._-] are stripped)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Personal access token. Prefer the ADO_PAT environment variable;
    /// command lines are visible in process listings
    #[arg(long, value_name = "TOKEN")]
    pub pat: Option<String>,

    /// Render repository and branch cells as spreadsheet HYPERLINK formulas
    #[arg(long)]
    pub links: bool,

    /// Path to a YAML config file (defaults to ./ado-alert-report.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
