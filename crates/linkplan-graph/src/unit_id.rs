//! Stable identifiers for library units.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters that separate units and edge lists in compact manifests.
const RESERVED_CHARS: [char; 3] = [',', ';', ':'];

/// Error returned when a string cannot be used as a unit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitIdError {
    #[error("unit identifier is empty")]
    Empty,

    #[error("unit identifier '{id}' contains whitespace")]
    Whitespace { id: String },

    #[error("unit identifier '{id}' contains reserved character '{ch}'")]
    ReservedCharacter { id: String, ch: char },
}

/// Identifier of a buildable native library or binary.
///
/// Backed by an `Arc<str>` so the many copies held by dependency lists,
/// visit states and cached plans share one allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UnitId(Arc<str>);

impl UnitId {
    /// Create a validated identifier.
    pub fn new(name: impl AsRef<str>) -> Result<Self, UnitIdError> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(UnitIdError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(UnitIdError::Whitespace {
                id: name.to_string(),
            });
        }
        if let Some(ch) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
            return Err(UnitIdError::ReservedCharacter {
                id: name.to_string(),
                ch,
            });
        }
        Ok(Self(Arc::from(name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for UnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UnitId {
    type Error = UnitIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for UnitId {
    type Error = UnitIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnitId> for String {
    fn from(id: UnitId) -> Self {
        id.0.to_string()
    }
}

impl std::str::FromStr for UnitId {
    type Err = UnitIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_library_names() {
        for name in ["libc++", "libbase", "bsdiff_unittest", "libfoo.vendor", "lib-x"] {
            let id = UnitId::new(name).unwrap();
            assert_eq!(id.as_str(), name);
            assert_eq!(id.to_string(), name);
        }
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(UnitId::new(""), Err(UnitIdError::Empty));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(matches!(
            UnitId::new("lib foo"),
            Err(UnitIdError::Whitespace { .. })
        ));
        assert!(matches!(
            UnitId::new("libfoo\n"),
            Err(UnitIdError::Whitespace { .. })
        ));
    }

    #[test]
    fn rejects_reserved_separators() {
        let err = UnitId::new("a,b").unwrap_err();
        assert_eq!(
            err,
            UnitIdError::ReservedCharacter {
                id: "a,b".to_string(),
                ch: ','
            }
        );
        assert!(UnitId::new("a:b").is_err());
        assert!(UnitId::new("a;b").is_err());
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let id = UnitId::new("libz").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"libz\"");

        let back: UnitId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<UnitId>("\"bad name\"").is_err());
    }

    #[test]
    fn clones_share_storage() {
        let id = UnitId::new("libshared").unwrap();
        let copy = id.clone();
        assert!(Arc::ptr_eq(&id.0, &copy.0));
    }
}
