use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::Policy;

/// Policies keyed by name, in the order their names were first seen.
#[derive(Clone, Default, Debug)]
pub struct PolicyStore {
    policies: Arc<RwLock<Vec<Policy>>>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Policy> {
        self.policies.read().await.clone()
    }

    /// Inserts `policy`, or replaces the one with the same name in place.
    pub async fn upsert(&self, policy: Policy) -> Policy {
        let mut policies = self.policies.write().await;
        match policies.iter_mut().find(|p| p.name == policy.name) {
            Some(existing) => *existing = policy.clone(),
            None => policies.push(policy.clone()),
        }
        policy
    }

    pub async fn clear(&self) {
        self.policies.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.policies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.policies.read().await.is_empty()
    }
}
