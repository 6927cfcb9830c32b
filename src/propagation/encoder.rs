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

//! Trace header encoder.

use super::{
    IS_SAMPLED, KV_DELIMITER, LINEAGE_KEY, NOT_SAMPLED, PARENT_ID_KEY, SAMPLED_FLAG_KEY,
    TRACE_HEADER_DELIMITER, TRACE_ID_KEY, trace_id::to_header_form,
};
use crate::{baggage::Baggage, trace::SpanContext};

/// Encode a span context, plus the lineage entry of `baggage` if any, into an
/// X-Ray trace header value.
///
/// Neither the span context nor the lineage value is validated here.
pub fn encode_header(span_context: &SpanContext, baggage: Option<&Baggage>) -> String {
    let sampled = if span_context.is_sampled() {
        IS_SAMPLED
    } else {
        NOT_SAMPLED
    };

    let mut header = format!(
        "{TRACE_ID_KEY}{KV_DELIMITER}{}{TRACE_HEADER_DELIMITER}\
         {PARENT_ID_KEY}{KV_DELIMITER}{}{TRACE_HEADER_DELIMITER}\
         {SAMPLED_FLAG_KEY}{KV_DELIMITER}{}",
        to_header_form(span_context.trace_id()),
        span_context.span_id(),
        sampled,
    );

    // TODO: confirm with the X-Ray team whether lineage should be validated
    // on the way out as it is on the way in.
    if let Some(lineage) = baggage
        .and_then(|baggage| baggage.get(LINEAGE_KEY))
        .filter(|lineage| !lineage.is_empty())
    {
        header.push(TRACE_HEADER_DELIMITER);
        header.push_str(LINEAGE_KEY);
        header.push(KV_DELIMITER);
        header.push_str(lineage);
    }

    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{SpanId, TraceFlags, TraceId};

    fn span_context(trace_flags: TraceFlags) -> SpanContext {
        SpanContext::new(
            TraceId::from_hex("5759e988bd862e3fe1be46a994272793").unwrap(),
            SpanId::from_hex("53995c3f42cd8ad8").unwrap(),
            trace_flags,
            false,
        )
    }

    #[test]
    fn basic_encode() {
        assert_eq!(
            encode_header(&span_context(TraceFlags::SAMPLED), None),
            "Root=1-5759e988-bd862e3fe1be46a994272793;Parent=53995c3f42cd8ad8;Sampled=1"
        );
        assert_eq!(
            encode_header(&span_context(TraceFlags::NONE), None),
            "Root=1-5759e988-bd862e3fe1be46a994272793;Parent=53995c3f42cd8ad8;Sampled=0"
        );
    }

    #[test]
    fn sampled_is_a_bitmask() {
        let header = encode_header(&span_context(TraceFlags::new(0xff)), None);
        assert!(header.ends_with(";Sampled=1"));
        let header = encode_header(&span_context(TraceFlags::new(0xfe)), None);
        assert!(header.ends_with(";Sampled=0"));
    }

    #[test]
    fn appends_lineage_verbatim() {
        let baggage = Baggage::new()
            .with_entry("user", "alice")
            .with_entry(LINEAGE_KEY, "not:a:valid:lineage");
        let header = encode_header(&span_context(TraceFlags::SAMPLED), Some(&baggage));
        assert!(header.ends_with(";Sampled=1;Lineage=not:a:valid:lineage"));
        assert!(!header.contains("alice"));
    }

    #[test]
    fn empty_lineage_is_omitted() {
        let baggage = Baggage::new().with_entry(LINEAGE_KEY, "");
        let header = encode_header(&span_context(TraceFlags::SAMPLED), Some(&baggage));
        assert!(header.ends_with(";Sampled=1"));
    }
}
