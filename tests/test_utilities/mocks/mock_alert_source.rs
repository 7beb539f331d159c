use super::{branch_key, MockFailure};
use ado_alert_report::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock AlertSource with scripted alerts and enablement answers
#[derive(Default)]
pub struct MockAlertSource {
    alerts: HashMap<String, std::result::Result<Vec<String>, MockFailure>>,
    enablement: HashMap<String, std::result::Result<bool, MockFailure>>,
    pub enablement_calls: Arc<Mutex<Vec<String>>>,
}

impl MockAlertSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the alert severities returned for one branch.
    pub fn with_alerts(
        mut self,
        project: &str,
        repository: &str,
        branch: &str,
        severities: &[&str],
    ) -> Self {
        self.alerts.insert(
            branch_key(project, repository, branch),
            Ok(severities.iter().map(|s| s.to_string()).collect()),
        );
        self
    }

    pub fn with_alerts_failure(
        mut self,
        project: &str,
        repository: &str,
        branch: &str,
        failure: MockFailure,
    ) -> Self {
        self.alerts
            .insert(branch_key(project, repository, branch), Err(failure));
        self
    }

    pub fn with_enablement(mut self, project: &str, repository: &str, enabled: bool) -> Self {
        self.enablement
            .insert(format!("{}/{}", project, repository), Ok(enabled));
        self
    }

    pub fn with_enablement_failure(
        mut self,
        project: &str,
        repository: &str,
        failure: MockFailure,
    ) -> Self {
        self.enablement
            .insert(format!("{}/{}", project, repository), Err(failure));
        self
    }

}

impl AlertSource for MockAlertSource {
    fn list_alerts(&self, target: &ScanTarget, branch: &str) -> ApiResult<Vec<AlertRecord>> {
        match self
            .alerts
            .get(&branch_key(target.project(), target.repository(), branch))
        {
            Some(Ok(severities)) => Ok(severities
                .iter()
                .map(|s| AlertRecord {
                    severity: s.clone(),
                })
                .collect()),
            Some(Err(failure)) => Err(failure.to_api_error(&format!(
                "mock:///{}/alerts?branch={}",
                target.qualified_name(),
                branch
            ))),
            None => Ok(Vec::new()),
        }
    }

    fn advanced_security_enabled(&self, target: &ScanTarget) -> ApiResult<bool> {
        self.enablement_calls
            .lock()
            .unwrap()
            .push(target.qualified_name());
        match self.enablement.get(&target.qualified_name()) {
            Some(Ok(enabled)) => Ok(*enabled),
            Some(Err(failure)) => Err(failure.to_api_error(&format!(
                "mock:///{}/enablement",
                target.qualified_name()
            ))),
            None => Ok(false),
        }
    }
}
