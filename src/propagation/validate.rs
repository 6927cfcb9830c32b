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

//! Per-field acceptance rules for `Parent`, `Sampled` and `Lineage`. The
//! `Root` rules live in [`trace_id`](super::trace_id).

use super::{IS_SAMPLED, NOT_SAMPLED};
use crate::{
    error::{Error, Result},
    trace::{SpanId, TraceFlags},
};
use percent_encoding::percent_decode_str;

const LINEAGE_DELIMITER: char = ':';
const LINEAGE_HASH_LENGTH: usize = 8;
const LINEAGE_MAX_REQUEST_COUNTER: u32 = 255;
const LINEAGE_MAX_LOOP_COUNTER: u32 = 32767;

/// Accept exactly 16 hex characters that are not all zero.
pub fn parse_span_id(value: &str) -> Result<SpanId> {
    let span_id = SpanId::from_hex(value)?;
    if !span_id.is_valid() {
        return Err(Error::SpanId(value.to_owned()));
    }
    Ok(span_id)
}

/// Accept only the literals `0` and `1`.
pub fn parse_sampled(value: &str) -> Result<TraceFlags> {
    match value {
        NOT_SAMPLED => Ok(TraceFlags::NONE),
        IS_SAMPLED => Ok(TraceFlags::SAMPLED),
        _ => Err(Error::SampledFlag(value.to_owned())),
    }
}

/// Check `{request counter}:{8 hex hash}:{loop counter}` with the request
/// counter in `0..=255` and the loop counter in `0..=32767`.
pub fn validate_lineage(value: &str) -> Result<()> {
    let reject = |reason| Error::Lineage {
        value: value.to_owned(),
        reason,
    };

    let parts: Vec<&str> = value.split(LINEAGE_DELIMITER).collect();
    let &[request_counter, hash, loop_counter] = parts.as_slice() else {
        return Err(reject("expected three parts"));
    };

    if hash.len() != LINEAGE_HASH_LENGTH || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(reject("hash must be 8 hex characters"));
    }
    if !counter_within(request_counter, LINEAGE_MAX_REQUEST_COUNTER) {
        return Err(reject("request counter out of range"));
    }
    if !counter_within(loop_counter, LINEAGE_MAX_LOOP_COUNTER) {
        return Err(reject("loop counter out of range"));
    }
    Ok(())
}

/// Validate a lineage value and percent-decode it for storage.
pub fn decode_lineage(value: &str) -> Result<String> {
    validate_lineage(value)?;
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Error::Lineage {
            value: value.to_owned(),
            reason: "not utf-8 after percent-decoding",
        })
}

fn counter_within(counter: &str, max: u32) -> bool {
    !counter.is_empty()
        && counter.bytes().all(|b| b.is_ascii_digit())
        && counter.parse::<u32>().is_ok_and(|n| n <= max)
}
