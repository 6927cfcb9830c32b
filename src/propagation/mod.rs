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

//! AWS X-Ray trace header propagation.
//!
//! The header carries the span identity and an optional lineage entry:
//!
//! ```text
//! X-Amzn-Trace-Id: Root=1-5759e988-bd862e3fe1be46a994272793;Parent=53995c3f42cd8ad8;Sampled=1
//! ```

pub mod carrier;
pub mod context;
pub mod decoder;
pub mod encoder;
pub mod propagator;
pub mod trace_id;
pub mod validate;

pub use carrier::{Extractor, Injector};
pub use propagator::{TextMapPropagator, XrayPropagator};

/// Carrier key of the trace header. Matched case-insensitively on extract.
pub const AWSXRAY_TRACE_ID_HEADER: &str = "x-amzn-trace-id";

/// Baggage key the lineage field is stored under.
pub const LINEAGE_KEY: &str = "Lineage";

pub(crate) const TRACE_HEADER_DELIMITER: char = ';';
pub(crate) const KV_DELIMITER: char = '=';

pub(crate) const TRACE_ID_KEY: &str = "Root";
pub(crate) const PARENT_ID_KEY: &str = "Parent";
pub(crate) const SAMPLED_FLAG_KEY: &str = "Sampled";

pub(crate) const IS_SAMPLED: &str = "1";
pub(crate) const NOT_SAMPLED: &str = "0";
