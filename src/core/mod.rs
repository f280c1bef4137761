pub mod call;
pub mod error;
pub mod measure;
pub mod policy;
pub mod suppress;
pub mod timing;
pub mod validate;

/// The alias for serde_json::Value since every call boundary carries it
pub type CallValue = serde_json::Value;
