/// Breadth of a scan: one repository, one project, or the whole organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Organization,
    Project,
    Repository,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Organization => "organization",
            Scope::Project => "project",
            Scope::Repository => "repository",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organization" | "org" => Ok(Scope::Organization),
            "project" => Ok(Scope::Project),
            "repository" | "repo" => Ok(Scope::Repository),
            _ => Err(format!(
                "Invalid scope: {}. Please specify 'organization', 'project' or 'repository'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scope_from_str_organization() {
        assert_eq!(Scope::from_str("organization").unwrap(), Scope::Organization);
        assert_eq!(Scope::from_str("org").unwrap(), Scope::Organization);
    }

    #[test]
    fn test_scope_from_str_case_insensitive() {
        assert_eq!(Scope::from_str("Organization").unwrap(), Scope::Organization);
        assert_eq!(Scope::from_str("PROJECT").unwrap(), Scope::Project);
        assert_eq!(Scope::from_str("Repo").unwrap(), Scope::Repository);
    }

    #[test]
    fn test_scope_from_str_repository() {
        assert_eq!(Scope::from_str("repository").unwrap(), Scope::Repository);
        assert_eq!(Scope::from_str("repo").unwrap(), Scope::Repository);
    }

    #[test]
    fn test_scope_from_str_invalid() {
        let result = Scope::from_str("team");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid scope"));
        assert!(error.contains("team"));
    }

    #[test]
    fn test_scope_display_round_trip() {
        for scope in [Scope::Organization, Scope::Project, Scope::Repository] {
            assert_eq!(Scope::from_str(scope.as_str()).unwrap(), scope);
        }
    }
}
