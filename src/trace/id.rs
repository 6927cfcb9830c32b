// Licensed to the Apache Software Foundation (ASF) under one or more
// contributor license agreements.  See the NOTICE file distributed with
// this work for additional information regarding copyright ownership.
// The ASF licenses this file to You under the Apache License, Version 2.0
// (the "License"); you may not use this file except in compliance with
// the License.  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Implements rendering and serde for a fixed-width id stored as raw bytes.
/// Ids always render, and serialize, as lowercase hex.
macro_rules! hex_id {
    ($name:ident, $len:expr) => {
        impl $name {
            /// All-zero id, reserved to mean "no valid id".
            pub const INVALID: $name = $name([0; $len]);

            /// Build from raw bytes.
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Raw bytes of the id.
            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }

            /// Whether the id is anything but the all-zero sentinel.
            pub fn is_valid(&self) -> bool {
                *self != Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

/// 16 byte trace id, rendered as 32 hex characters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// Parse exactly 32 hex characters (either case). The all-zero id parses
    /// fine; check [`TraceId::is_valid`] separately.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0; 16];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::TraceId {
            value: s.to_owned(),
            reason: "expected 32 hex characters",
        })?;
        Ok(Self(bytes))
    }
}

hex_id!(TraceId, 16);

/// 8 byte span id, rendered as 16 hex characters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanId([u8; 8]);

impl SpanId {
    /// Parse exactly 16 hex characters (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0; 8];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::SpanId(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

hex_id!(SpanId, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_id_renders_lowercase() {
        let id = TraceId::from_hex("5759E988BD862E3FE1BE46A994272793").unwrap();
        assert_eq!(id.to_string(), "5759e988bd862e3fe1be46a994272793");
        assert_eq!(format!("{:x}", id), "5759e988bd862e3fe1be46a994272793");
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(TraceId::from_hex("5759e988bd862e3f").is_err());
        assert!(TraceId::from_hex("5759e988bd862e3fe1be46a9942727930").is_err());
        assert!(SpanId::from_hex("53995c3f42cd8ad").is_err());
        assert!(SpanId::from_hex("").is_err());
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(SpanId::from_hex("53995c3f42cd8adg").is_err());
        assert!(SpanId::from_hex("+3995c3f42cd8ad8").is_err());
    }

    #[test]
    fn zero_id_parses_but_is_invalid() {
        let id = SpanId::from_hex("0000000000000000").unwrap();
        assert_eq!(id, SpanId::INVALID);
        assert!(!id.is_valid());
        assert!(SpanId::from_hex("53995c3f42cd8ad8").unwrap().is_valid());
    }
}
