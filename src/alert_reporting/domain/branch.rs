/// A branch of a scanned repository.
///
/// Derived from a raw head ref: the display name strips the `refs/heads/`
/// prefix, and the browse URL points at the branch view of the repository
/// web UI (`?version=GB<branch>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    ref_name: String,
    short_name: String,
    browse_url: String,
}

impl BranchRef {
    const HEAD_REF_PREFIX: &'static str = "refs/heads/";

    pub fn from_ref(ref_name: &str, repository_url: &str) -> Self {
        let short_name = ref_name
            .strip_prefix(Self::HEAD_REF_PREFIX)
            .unwrap_or(ref_name)
            .to_string();
        let browse_url = format!(
            "{}?version=GB{}",
            repository_url,
            urlencoding::encode(&short_name)
        );
        Self {
            ref_name: ref_name.to_string(),
            short_name,
            browse_url,
        }
    }

    pub fn ref_name(&self) -> &str {
        &self.ref_name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn browse_url(&self) -> &str {
        &self.browse_url
    }
}
