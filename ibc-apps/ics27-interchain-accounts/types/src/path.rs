//! Store paths used by the interchain accounts application. All keys live
//! under the module's own namespace.
use derive_more::Display;
use ibc_primitives::prelude::*;

use crate::{AccountAddress, MODULE_ID_STR};

pub const PERMISSIONS_PREFIX: &str = "permissions";

/// Key of the permission record binding an interchain account to the
/// channel path that owns it. The stored value is the UTF-8 rendering of the
/// [`ChannelPath`](crate::ChannelPath).
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{MODULE_ID_STR}/{PERMISSIONS_PREFIX}/{_0}")]
pub struct PermissionPath(pub AccountAddress);

impl PermissionPath {
    pub fn new(address: &AccountAddress) -> Self {
        Self(*address)
    }

    /// Returns the prefix under which all permission records are stored.
    pub fn prefix() -> String {
        format!("{MODULE_ID_STR}/{PERMISSIONS_PREFIX}")
    }
}
