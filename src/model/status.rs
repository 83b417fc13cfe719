use std::fmt;

/// Whether an authorization can currently be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// No token has been issued yet.
    Inactive,
    Expired,
    Active,
}

impl AuthorizationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AuthorizationStatus::Inactive => "Inactive",
            AuthorizationStatus::Expired => "Expired",
            AuthorizationStatus::Active => "Active",
        }
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
