//! Role to capability grant table

use std::collections::{HashMap, HashSet};

use crate::domain::{Capability, RoleId, Session};

/// Capabilities conferred by each role
#[derive(Debug, Clone, Default)]
pub struct GrantTable {
    grants: HashMap<RoleId, HashSet<Capability>>,
}

impl GrantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, role: impl Into<RoleId>, capability: Capability) -> Self {
        self.grants.entry(role.into()).or_default().insert(capability);
        self
    }

    /// Build from a `role id -> capabilities` mapping
    pub fn from_map<I, C>(grants: I) -> Self
    where
        I: IntoIterator<Item = (String, C)>,
        C: IntoIterator<Item = Capability>,
    {
        let mut table = Self::new();

        for (role, capabilities) in grants {
            table
                .grants
                .entry(RoleId::new(role))
                .or_default()
                .extend(capabilities);
        }

        table
    }

    pub fn role_has(&self, role: &RoleId, capability: Capability) -> bool {
        self.grants
            .get(role)
            .is_some_and(|capabilities| capabilities.contains(&capability))
    }

    /// Whether any role of the session confers `capability`
    pub fn allows(&self, session: &Session, capability: Capability) -> bool {
        session
            .role_ids()
            .iter()
            .any(|role| self.role_has(role, capability))
    }
}
