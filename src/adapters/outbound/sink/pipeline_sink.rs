use crate::ports::outbound::ReportSink;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// PipelineSink adapter for runs inside an Azure Pipelines job
///
/// Writes the report into the artifact staging directory and speaks the
/// pipeline's logging-command dialect on stdout: an `artifact.upload`
/// directive so the report is attached to the run, and a `task.complete`
/// directive when the scan finishes.
pub struct PipelineSink {
    staging_dir: PathBuf,
}

impl PipelineSink {
    const ARTIFACT_NAME: &'static str = "advanced-security-report";

    pub fn new(staging_dir: PathBuf) -> Self {
        Self { staging_dir }
    }

    /// Detects the pipeline environment from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::detect(
            std::env::var("TF_BUILD").ok().as_deref(),
            std::env::var("BUILD_ARTIFACTSTAGINGDIRECTORY").ok().as_deref(),
        )
    }

    /// A pipeline run is recognized by `TF_BUILD=True` plus a staging
    /// directory. Either signal missing means this is not a pipeline.
    fn detect(tf_build: Option<&str>, staging_dir: Option<&str>) -> Option<Self> {
        let is_pipeline = tf_build
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if !is_pipeline {
            return None;
        }
        staging_dir
            .filter(|dir| !dir.is_empty())
            .map(|dir| Self::new(PathBuf::from(dir)))
    }
}

impl ReportSink for PipelineSink {
    fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.staging_dir.join(file_name);

        fs::write(&path, content).map_err(|e| ReportError::ReportWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }

    fn announce(&self, path: &Path) {
        // Logging commands are parsed from stdout by the pipeline agent.
        println!(
            "##vso[artifact.upload artifactname={}]{}",
            Self::ARTIFACT_NAME,
            path.display()
        );
    }

    fn complete(&self) {
        println!("##vso[task.complete result=Succeeded;]Advanced Security scan finished");
    }
}
