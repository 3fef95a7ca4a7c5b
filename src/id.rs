//! Identifier module.
//!
//! Provides `SpeciesId` and `MoveId`, interned string identifiers used
//! to look up species and move metadata. Both use `Arc<str>` so cloning
//! an id while passing it through the engine is cheap.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create a new id from a string slice.
            pub fn from_str(s: &str) -> Self {
                Self(Arc::from(s))
            }

            /// Get the string representation of this id.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.as_ref().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name::from(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_str(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Arc::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

interned_id!(
    /// Identifier of a species, e.g. `"DRAGONITE"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pogo_rating::SpeciesId;
    ///
    /// let a = SpeciesId::from_str("DRAGONITE");
    /// let b: SpeciesId = "DRAGONITE".into();
    /// assert_eq!(a, b);
    /// assert_eq!(a.as_str(), "DRAGONITE");
    /// ```
    SpeciesId
);

interned_id!(
    /// Identifier of a move, e.g. `"DRAGON_BREATH_FAST"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pogo_rating::MoveId;
    ///
    /// let id: MoveId = String::from("HYPER_BEAM").into();
    /// assert_eq!(id.to_string(), "HYPER_BEAM");
    /// ```
    MoveId
);
