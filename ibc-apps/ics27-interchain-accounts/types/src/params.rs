use ibc_primitives::prelude::*;

use crate::error::InterchainAccountError;

/// Route pattern allowing every message route.
pub const ALLOW_ALL_ROUTES: &str = "*";

/// Host chain parameters of the interchain accounts application.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Whether registration and relayed transactions are accepted at all.
    pub host_enabled: bool,
    /// Message routes a relayed transaction may use; `*` allows any route.
    pub allow_routes: Vec<String>,
    /// Whether registration may claim a normal account that never signed
    /// anything (for instance one that only received funds).
    pub claim_unused_accounts: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            host_enabled: true,
            allow_routes: vec![ALLOW_ALL_ROUTES.to_string()],
            claim_unused_accounts: false,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), InterchainAccountError> {
        if let Some(pos) = self.allow_routes.iter().position(|r| r.trim().is_empty()) {
            return Err(InterchainAccountError::InvalidParams {
                description: format!("allowed route at position {pos} is empty"),
            });
        }

        Ok(())
    }

    pub fn is_route_allowed(&self, route: &str) -> bool {
        self.allow_routes
            .iter()
            .any(|allowed| allowed == ALLOW_ALL_ROUTES || allowed == route)
    }
}
