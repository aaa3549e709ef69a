use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_primitives::prelude::*;

use crate::error::InterchainAccountError;

/// The `(port, channel)` pair a packet arrived through, as reported by the
/// transport layer.
///
/// Rendered as `{port_id}/{channel_id}`. Port and channel identifiers cannot
/// contain `/`, so two paths are equal exactly when their rendered strings
/// are equal.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelPath {
    port_id: PortId,
    channel_id: ChannelId,
}

impl ChannelPath {
    pub fn new(port_id: PortId, channel_id: ChannelId) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }

    pub fn port_id(&self) -> &PortId {
        &self.port_id
    }

    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }
}

impl Display for ChannelPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.port_id, self.channel_id)
    }
}

impl FromStr for ChannelPath {
    type Err = InterchainAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |description: String| InterchainAccountError::InvalidChannelPath {
            path: s.to_string(),
            description,
        };

        let (port_id, channel_id) = s
            .split_once('/')
            .ok_or_else(|| invalid("missing `/` separator".to_string()))?;

        Ok(Self {
            port_id: port_id.parse().map_err(|e| invalid(format!("{e}")))?,
            channel_id: channel_id.parse().map_err(|e| invalid(format!("{e}")))?,
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChannelPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChannelPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
