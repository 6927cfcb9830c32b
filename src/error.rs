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

//! Crate errors.

/// Reasons a trace header, or one of its fields, is rejected.
///
/// These never escape [`TextMapPropagator`](crate::propagation::propagator::TextMapPropagator)
/// calls: the propagator turns them into sentinel ids or a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The `Root` value is not a well-formed X-Ray trace id.
    #[error("invalid trace id `{value}`: {reason}")]
    TraceId {
        /// Rejected input.
        value: String,
        /// What check failed.
        reason: &'static str,
    },

    /// The `Parent` value is not 16 hex characters, or is all zero.
    #[error("invalid span id `{0}`")]
    SpanId(String),

    /// The `Sampled` value is neither `0` nor `1`.
    #[error("invalid sampled flag `{0}`")]
    SampledFlag(String),

    /// The header never resolved a sampling decision.
    #[error("trace header has no valid sampled flag")]
    MissingSampledFlag,

    /// The `Lineage` value failed validation.
    #[error("invalid lineage `{value}`: {reason}")]
    Lineage {
        /// Rejected input.
        value: String,
        /// What check failed.
        reason: &'static str,
    },
}

/// Result with crate [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
