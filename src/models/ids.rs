//! Strongly-typed ID wrappers for presets and export jobs
//!
//! Both are UUIDs underneath. `Display` gives the short form users type on the
//! command line (`pre-1a2b3c4d`); `full()` gives the hyphenated UUID that the
//! audit log records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $short_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Hyphenated UUID
            pub fn full(&self) -> String {
                self.0.hyphenated().to_string()
            }

            /// Accepts the short display form or the full UUID
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                match Uuid::parse_str(input) {
                    Ok(uuid) => uuid == self.0,
                    Err(_) => input.eq_ignore_ascii_case(&self.to_string()),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $short_prefix, &simple[..8])
            }
        }
    };
}

define_id!(PresetId, "pre-");
define_id!(ExportId, "exp-");
