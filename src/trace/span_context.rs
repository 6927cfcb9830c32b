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

use super::{SpanId, TraceId};
use serde::{Deserialize, Serialize};

/// Flags carried with a span context. Only the sampling bit is defined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceFlags(u8);

impl TraceFlags {
    /// No flag set.
    pub const NONE: TraceFlags = TraceFlags(0x00);

    /// The span is sampled.
    pub const SAMPLED: TraceFlags = TraceFlags(0x01);

    /// Wrap raw flag bits.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Whether the sampling bit is set.
    pub fn is_sampled(&self) -> bool {
        self.0 & Self::SAMPLED.0 == Self::SAMPLED.0
    }

    /// Copy with the sampling bit set or cleared, other bits kept.
    pub fn with_sampled(self, sampled: bool) -> Self {
        if sampled {
            Self(self.0 | Self::SAMPLED.0)
        } else {
            Self(self.0 & !Self::SAMPLED.0)
        }
    }

    /// Raw flag bits.
    pub fn to_u8(self) -> u8 {
        self.0
    }
}

/// Immutable identity of a span, as propagated across process boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanContext {
    trace_id: TraceId,
    span_id: SpanId,
    trace_flags: TraceFlags,
    is_remote: bool,
}

impl SpanContext {
    /// Create a span context.
    pub fn new(trace_id: TraceId, span_id: SpanId, trace_flags: TraceFlags, is_remote: bool) -> Self {
        Self {
            trace_id,
            span_id,
            trace_flags,
            is_remote,
        }
    }

    /// Span context with sentinel ids. Never valid.
    pub fn empty() -> Self {
        Self::new(TraceId::INVALID, SpanId::INVALID, TraceFlags::NONE, false)
    }

    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    pub fn span_id(&self) -> SpanId {
        self.span_id
    }

    pub fn trace_flags(&self) -> TraceFlags {
        self.trace_flags
    }

    /// Whether this context was received from another process.
    pub fn is_remote(&self) -> bool {
        self.is_remote
    }

    pub fn is_sampled(&self) -> bool {
        self.trace_flags.is_sampled()
    }

    /// A context is valid only when neither id is the sentinel.
    pub fn is_valid(&self) -> bool {
        self.trace_id.is_valid() && self.span_id.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_bit() {
        assert!(TraceFlags::SAMPLED.is_sampled());
        assert!(!TraceFlags::NONE.is_sampled());
        assert!(TraceFlags::new(0x03).is_sampled());
        assert_eq!(TraceFlags::new(0x03).with_sampled(false), TraceFlags::new(0x02));
        assert_eq!(TraceFlags::NONE.with_sampled(true), TraceFlags::SAMPLED);
    }

    #[test]
    fn validity_needs_both_ids() {
        let trace_id = TraceId::from_hex("5759e988bd862e3fe1be46a994272793").unwrap();
        let span_id = SpanId::from_hex("53995c3f42cd8ad8").unwrap();

        assert!(SpanContext::new(trace_id, span_id, TraceFlags::NONE, false).is_valid());
        assert!(!SpanContext::new(TraceId::INVALID, span_id, TraceFlags::SAMPLED, true).is_valid());
        assert!(!SpanContext::new(trace_id, SpanId::INVALID, TraceFlags::SAMPLED, true).is_valid());
        assert!(!SpanContext::empty().is_valid());
    }
}
