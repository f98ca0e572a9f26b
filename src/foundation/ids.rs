use std::fmt;

use crate::foundation::error::{Ui4Error, Ui4Result};

/// Session-unique view identifier. Renders on the wire as `id<n>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct ViewId(pub u32);

impl ViewId {
    /// Parse the wire form (`id7`).
    pub fn parse(s: &str) -> Ui4Result<Self> {
        s.strip_prefix("id")
            .and_then(|n| n.parse::<u32>().ok())
            .map(Self)
            .ok_or_else(|| Ui4Error::unknown_view(s))
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id{}", self.0)
    }
}

impl From<ViewId> for String {
    fn from(id: ViewId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ViewId {
    type Error = Ui4Error;

    fn try_from(s: String) -> Ui4Result<Self> {
        Self::parse(&s)
    }
}

/// Opaque key that scopes every per-user registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque id handed to the client while a suspendable handler is mid-flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContinuationId(pub String);

impl ContinuationId {
    pub(crate) fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContinuationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ids.rs"]
mod tests;
