//! Active user role, persisted across reloads.

use std::sync::Arc;

use tracing::{debug, warn};

use krishi_core::types::{Route, UserRole};
use krishi_storage::KeyValueStore;

use crate::keys::ROLE_KEY;

/// Holds the session's [`UserRole`]. Always has a value.
pub struct RoleStore {
    role: UserRole,
    store: Arc<dyn KeyValueStore>,
}

impl RoleStore {
    /// Read the persisted role once. Absent or unrecognised values mean `Buyer`.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let role = match store.get(ROLE_KEY) {
            Ok(Some(raw)) => UserRole::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Unrecognised persisted role, defaulting to buyer");
                UserRole::default()
            }),
            Ok(None) => UserRole::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted role, defaulting to buyer");
                UserRole::default()
            }
        };
        Self { role, store }
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn set_role(&mut self, role: UserRole) {
        debug!(from = %self.role, to = %role, "Role selected");
        self.role = role;
        if let Err(e) = self.store.set(ROLE_KEY, role.as_str()) {
            warn!(error = %e, "Failed to persist role; keeping in-memory state");
        }
    }

    pub fn is_farmer(&self) -> bool {
        self.role == UserRole::Farmer
    }

    pub fn is_buyer(&self) -> bool {
        self.role == UserRole::Buyer
    }

    /// Route to open after sign-in for the current role.
    pub fn landing_route(&self) -> Route {
        self.role.landing_route()
    }
}

impl std::fmt::Debug for RoleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleStore")
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
