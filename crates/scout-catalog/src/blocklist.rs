//! Organization blocklist.
//!
//! Some organizations programmatically publish large numbers of models that
//! are unlikely to be useful for task-specific finetuning. A model is blocked
//! when its identifier starts with `"{org}/"`.

/// Organization prefix filter applied during catalog load.
#[derive(Debug, Clone, Default)]
pub struct OrgBlocklist {
    prefixes: Vec<String>,
}

impl OrgBlocklist {
    pub fn new<I, S>(organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            prefixes: organizations
                .into_iter()
                .map(|org| format!("{}/", org.as_ref().trim_end_matches('/')))
                .collect(),
        }
    }

    /// Whether `identifier` falls under a blocked organization.
    pub fn is_blocked(&self, identifier: &str) -> bool {
        self.prefixes.iter().any(|p| identifier.starts_with(p.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
