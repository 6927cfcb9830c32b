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

use crate::trace::{SpanContext, SpanId, TraceFlags, TraceId};

/// Fields decoded from an X-Ray trace header.
///
/// Ids that failed validation hold the `INVALID` sentinel. A header without
/// a usable `Sampled` field never decodes into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrayHeader {
    /// Trace id from `Root`.
    pub trace_id: TraceId,

    /// Parent span id from `Parent`.
    pub span_id: SpanId,

    /// Sampling decision from `Sampled`.
    pub trace_flags: TraceFlags,

    /// Validated, percent-decoded `Lineage` value.
    pub lineage: Option<String>,
}

impl XrayHeader {
    /// The remote span context described by the header. It may be invalid.
    pub fn span_context(&self) -> SpanContext {
        SpanContext::new(self.trace_id, self.span_id, self.trace_flags, true)
    }
}
