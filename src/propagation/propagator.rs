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

//! Propagator front-end binding the codec to carriers and contexts.

use super::{
    AWSXRAY_TRACE_ID_HEADER, LINEAGE_KEY,
    carrier::{Extractor, Injector},
    decoder::decode_header,
    encoder::encode_header,
};
use crate::{baggage::Baggage, context::Context};
use tracing::debug;

/// Moves a [`Context`] into and out of a carrier.
///
/// Neither direction fails: malformed input leaves the context as it was.
pub trait TextMapPropagator {
    /// Write the context into `injector`.
    fn inject_context(&self, cx: &Context, injector: &mut dyn Injector);

    /// Read the carrier and merge what it holds into a copy of `cx`.
    fn extract_with_context(&self, cx: &Context, extractor: &dyn Extractor) -> Context;

    /// Read the carrier into a fresh context.
    fn extract(&self, extractor: &dyn Extractor) -> Context {
        self.extract_with_context(&Context::new(), extractor)
    }

    /// Carrier keys this propagator reads and writes.
    fn fields(&self) -> &[&'static str];
}

/// Propagates span identity and lineage in the AWS X-Ray `x-amzn-trace-id`
/// header.
#[derive(Clone, Debug, Default)]
pub struct XrayPropagator {
    _private: (),
}

impl XrayPropagator {
    /// Create the propagator.
    pub fn new() -> Self {
        Self::default()
    }
}

fn header_value<'a>(extractor: &'a dyn Extractor) -> Option<&'a str> {
    let key = extractor
        .keys()
        .into_iter()
        .find(|key| key.eq_ignore_ascii_case(AWSXRAY_TRACE_ID_HEADER))?;
    extractor.get(key).filter(|value| !value.is_empty())
}

impl TextMapPropagator for XrayPropagator {
    fn inject_context(&self, cx: &Context, injector: &mut dyn Injector) {
        let Some(span_context) = cx.span_context().filter(|sc| sc.is_valid()) else {
            return;
        };
        let header = encode_header(span_context, cx.baggage());
        injector.set(AWSXRAY_TRACE_ID_HEADER, header);
    }

    fn extract_with_context(&self, cx: &Context, extractor: &dyn Extractor) -> Context {
        let Some(header_value) = header_value(extractor) else {
            return cx.clone();
        };

        let header = match decode_header(header_value) {
            Ok(header) => header,
            Err(err) => {
                debug!(%err, "discard x-ray trace header");
                return cx.clone();
            }
        };

        let mut extracted = cx.clone();

        let span_context = header.span_context();
        if span_context.is_valid() {
            extracted = extracted.with_span_context(span_context);
        }

        let baggage = match cx.baggage() {
            Some(baggage) => baggage.clone(),
            None => Baggage::new(),
        };
        let baggage = match header.lineage {
            Some(lineage) => baggage.with_entry(LINEAGE_KEY, lineage),
            None => baggage,
        };
        if !baggage.is_empty() {
            extracted = extracted.with_baggage(baggage);
        }

        extracted
    }

    fn fields(&self) -> &[&'static str] {
        &[AWSXRAY_TRACE_ID_HEADER]
    }
}
