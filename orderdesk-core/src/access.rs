/// Decides whether an actor may start the cancellation workflow.
pub trait AccessPolicy: Send + Sync {
    fn check_permission(&self, actor: &str) -> bool;
}

/// Every actor passes.
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check_permission(&self, _actor: &str) -> bool {
        true
    }
}

/// Only explicitly named actors pass.
pub struct AllowList {
    allowed: Vec<String>,
}

impl AllowList {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }
}

impl AccessPolicy for AllowList {
    fn check_permission(&self, actor: &str) -> bool {
        self.allowed.iter().any(|name| name == actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_all_passes_anyone() {
        assert!(AllowAll.check_permission("anybody"));
    }

    #[test]
    fn allow_list_passes_only_named_actors() {
        let policy = AllowList::new(vec!["operator".to_string()]);
        assert!(policy.check_permission("operator"));
        assert!(!policy.check_permission("intern"));
    }
}
