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

//! Immutable context handed through propagation.

use crate::{baggage::Baggage, trace::SpanContext};
use std::sync::Arc;

/// Carries the active span identity and baggage across a propagation
/// boundary. Every setter returns a new context; clones share the facets.
#[derive(Clone, Debug, Default)]
pub struct Context {
    span_context: Option<Arc<SpanContext>>,
    baggage: Option<Arc<Baggage>>,
}

impl Context {
    /// Context with neither span identity nor baggage.
    pub fn new() -> Self {
        Self::default()
    }

    /// The attached span identity, if any.
    pub fn span_context(&self) -> Option<&SpanContext> {
        self.span_context.as_deref()
    }

    /// Copy of this context with `span_context` as its span identity.
    #[must_use]
    pub fn with_span_context(&self, span_context: SpanContext) -> Self {
        Self {
            span_context: Some(Arc::new(span_context)),
            baggage: self.baggage.clone(),
        }
    }

    /// The attached baggage, if any.
    pub fn baggage(&self) -> Option<&Baggage> {
        self.baggage.as_deref()
    }

    /// Copy of this context with `baggage` attached.
    #[must_use]
    pub fn with_baggage(&self, baggage: Baggage) -> Self {
        Self {
            span_context: self.span_context.clone(),
            baggage: Some(Arc::new(baggage)),
        }
    }

    /// Whether both contexts hold the same span identity and baggage.
    pub fn same_as(&self, other: &Context) -> bool {
        self.span_context() == other.span_context() && self.baggage() == other.baggage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{SpanId, TraceFlags, TraceId};

    #[test]
    fn setters_do_not_touch_receiver() {
        let cx = Context::new().with_baggage(Baggage::new().with_entry("k", "v"));
        let span_context = SpanContext::new(
            TraceId::from_bytes([1; 16]),
            SpanId::from_bytes([2; 8]),
            TraceFlags::SAMPLED,
            true,
        );
        let with_span = cx.with_span_context(span_context.clone());

        assert!(cx.span_context().is_none());
        assert_eq!(with_span.span_context(), Some(&span_context));
        assert_eq!(with_span.baggage().and_then(|b| b.get("k")), Some("v"));
    }
}
