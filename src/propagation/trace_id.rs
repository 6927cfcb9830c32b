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

//! Conversion between the 32 hex character trace id and the X-Ray
//! `1-{epoch}-{unique}` form.

use crate::{
    error::{Error, Result},
    trace::TraceId,
};
use tracing::debug;

const TRACE_ID_LENGTH: usize = 35;
const TRACE_ID_VERSION: &str = "1";
const TRACE_ID_DELIMITER: u8 = b'-';
const TRACE_ID_DELIMITER_INDEX_1: usize = 1;
const TRACE_ID_DELIMITER_INDEX_2: usize = 10;
const TRACE_ID_FIRST_PART_LENGTH: usize = 8;

/// Render a trace id in X-Ray form. The id is not validated.
pub fn to_header_form(trace_id: TraceId) -> String {
    let hex = trace_id.to_string();
    let (epoch, unique) = hex.split_at(TRACE_ID_FIRST_PART_LENGTH);
    format!("{}-{}-{}", TRACE_ID_VERSION, epoch, unique)
}

/// Parse an X-Ray trace id, falling back to [`TraceId::INVALID`].
pub fn from_header_form(xray_trace_id: &str) -> TraceId {
    try_from_header_form(xray_trace_id).unwrap_or_else(|err| {
        debug!(%err, "reject x-ray trace id");
        TraceId::INVALID
    })
}

/// Parse an X-Ray trace id, reporting which check failed.
pub fn try_from_header_form(xray_trace_id: &str) -> Result<TraceId> {
    let reject = |reason| Error::TraceId {
        value: xray_trace_id.to_owned(),
        reason,
    };

    if xray_trace_id.len() != TRACE_ID_LENGTH {
        return Err(reject("expected 35 characters"));
    }
    if !xray_trace_id.starts_with(TRACE_ID_VERSION) {
        return Err(reject("unsupported version"));
    }

    let bytes = xray_trace_id.as_bytes();
    if bytes[TRACE_ID_DELIMITER_INDEX_1] != TRACE_ID_DELIMITER
        || bytes[TRACE_ID_DELIMITER_INDEX_2] != TRACE_ID_DELIMITER
    {
        return Err(reject("misplaced delimiter"));
    }

    // Non-ASCII input can still be 35 bytes long; `get` refuses to split a
    // code point.
    let epoch = xray_trace_id.get(TRACE_ID_DELIMITER_INDEX_1 + 1..TRACE_ID_DELIMITER_INDEX_2);
    let unique = xray_trace_id.get(TRACE_ID_DELIMITER_INDEX_2 + 1..TRACE_ID_LENGTH);
    let (Some(epoch), Some(unique)) = (epoch, unique) else {
        return Err(reject("not hex"));
    };

    let trace_id = TraceId::from_hex(&format!("{}{}", epoch, unique))
        .map_err(|_| reject("not hex"))?;
    if !trace_id.is_valid() {
        return Err(reject("all zero"));
    }
    Ok(trace_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let trace_id = TraceId::from_hex("5759e988bd862e3fe1be46a994272793").unwrap();
        let xray = to_header_form(trace_id);
        assert_eq!(xray, "1-5759e988-bd862e3fe1be46a994272793");
        assert_eq!(from_header_form(&xray), trace_id);
    }

    #[test]
    fn wrong_length() {
        assert_eq!(from_header_form(""), TraceId::INVALID);
        assert_eq!(
            from_header_form("1-5759e988-bd862e3fe1be46a99427279"),
            TraceId::INVALID
        );
        assert_eq!(
            from_header_form("1-5759e988-bd862e3fe1be46a9942727933"),
            TraceId::INVALID
        );
    }

    #[test]
    fn wrong_version() {
        assert_eq!(
            try_from_header_form("2-5759e988-bd862e3fe1be46a994272793"),
            Err(Error::TraceId {
                value: "2-5759e988-bd862e3fe1be46a994272793".to_owned(),
                reason: "unsupported version",
            })
        );
    }

    #[test]
    fn misplaced_delimiters() {
        assert_eq!(
            from_header_form("1_5759e988-bd862e3fe1be46a994272793"),
            TraceId::INVALID
        );
        assert_eq!(
            from_header_form("1-5759e988_bd862e3fe1be46a994272793"),
            TraceId::INVALID
        );
        assert_eq!(
            from_header_form("1-5759e98-8bd862e3fe1be46a994272793"),
            TraceId::INVALID
        );
    }

    #[test]
    fn bad_content() {
        assert_eq!(
            from_header_form("1-5759e988-bd862e3fe1be46a99427279z"),
            TraceId::INVALID
        );
        assert_eq!(
            from_header_form("1-00000000-000000000000000000000000"),
            TraceId::INVALID
        );
        assert_eq!(
            from_header_form("1-5759e988-bd862e3fe1be46a9942727é"),
            TraceId::INVALID
        );
    }

    #[test]
    fn uppercase_is_normalized() {
        let trace_id = from_header_form("1-5759E988-BD862E3FE1BE46A994272793");
        assert_eq!(trace_id.to_string(), "5759e988bd862e3fe1be46a994272793");
    }
}
