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

//! Trace header decoder.

use super::{
    KV_DELIMITER, LINEAGE_KEY, PARENT_ID_KEY, SAMPLED_FLAG_KEY, TRACE_HEADER_DELIMITER,
    TRACE_ID_KEY, context::XrayHeader, trace_id, validate,
};
use crate::{
    error::{Error, Result},
    trace::{SpanId, TraceFlags, TraceId},
};
use tracing::{debug, trace};

/// Iterator over the `Key=Value` segments of a trace header, left to right.
///
/// Segments are trimmed and split on their first `=`. Segments without `=`
/// are skipped.
#[derive(Debug, Clone)]
pub struct HeaderFields<'a> {
    header: &'a str,
    pos: usize,
}

/// Split `header` into its `(key, value)` segments.
pub fn header_fields(header: &str) -> HeaderFields<'_> {
    HeaderFields { header, pos: 0 }
}

impl<'a> Iterator for HeaderFields<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.header;
        while self.pos < header.len() {
            let rest = &header[self.pos..];
            let segment = match rest.find(TRACE_HEADER_DELIMITER) {
                Some(index) => {
                    self.pos += index + 1;
                    &rest[..index]
                }
                None => {
                    self.pos = header.len();
                    rest
                }
            };
            if let Some(field) = segment.trim().split_once(KV_DELIMITER) {
                return Some(field);
            }
        }
        None
    }
}

/// Fields seen so far while walking one header.
#[derive(Default)]
struct DecodedFields {
    trace_id: TraceId,
    span_id: SpanId,
    trace_flags: Option<TraceFlags>,
    lineage: Option<String>,
}

type FieldSetter = fn(&mut DecodedFields, &str);

/// Recognized keys. Anything else is ignored.
const FIELD_SETTERS: [(&str, FieldSetter); 4] = [
    (TRACE_ID_KEY, set_trace_id),
    (PARENT_ID_KEY, set_span_id),
    (SAMPLED_FLAG_KEY, set_trace_flags),
    (LINEAGE_KEY, set_lineage),
];

fn set_trace_id(fields: &mut DecodedFields, value: &str) {
    fields.trace_id = trace_id::from_header_form(value);
}

fn set_span_id(fields: &mut DecodedFields, value: &str) {
    fields.span_id = validate::parse_span_id(value).unwrap_or_else(|err| {
        debug!(%err, "reject x-ray parent id");
        SpanId::INVALID
    });
}

fn set_trace_flags(fields: &mut DecodedFields, value: &str) {
    fields.trace_flags = validate::parse_sampled(value)
        .inspect_err(|err| debug!(%err, "reject x-ray sampled flag"))
        .ok();
}

/// A rejected lineage leaves any earlier accepted one in place.
fn set_lineage(fields: &mut DecodedFields, value: &str) {
    match validate::decode_lineage(value) {
        Ok(lineage) => fields.lineage = Some(lineage),
        Err(err) => debug!(%err, "reject x-ray lineage"),
    }
}

/// Decode an X-Ray trace header value.
///
/// Invalid `Root` or `Parent` values decode to the `INVALID` sentinel and an
/// invalid `Lineage` is dropped. The only hard failure is a header whose
/// last `Sampled` field is missing or malformed.
pub fn decode_header(header_value: &str) -> Result<XrayHeader> {
    let mut fields = DecodedFields::default();

    for (key, value) in header_fields(header_value) {
        match FIELD_SETTERS.iter().find(|(name, _)| *name == key) {
            Some((_, set)) => set(&mut fields, value),
            None => trace!(key, "skip unknown x-ray header field"),
        }
    }

    let trace_flags = fields.trace_flags.ok_or(Error::MissingSampledFlag)?;

    Ok(XrayHeader {
        trace_id: fields.trace_id,
        span_id: fields.span_id,
        trace_flags,
        lineage: fields.lineage,
    })
}
