#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Version information of the running daemon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BinaryInfo {
  pub arch: String,
  pub channel: String,
  pub version: String,
  pub commit_id: String,
}
