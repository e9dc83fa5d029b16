/// Identity of the operator performing a mutation
///
/// Threaded explicitly through every pipeline call; there is no ambient
/// current-user state anywhere in the crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub login: String,
    pub roles: Vec<String>,
}

impl Operator {
    pub fn new(login: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            login: login.into(),
            roles,
        }
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r == name)
    }

    /// Staff members and admins may manage stoplist entries
    pub fn is_staff(&self) -> bool {
        self.has_role("staff") || self.has_role("admin")
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("admin")
    }
}
