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

//! Carriers: the key/value media a trace header travels in, such as HTTP
//! headers.

use std::collections::HashMap;

/// Write side of a carrier.
pub trait Injector {
    /// Store `value` under `key`. Implementations must not panic.
    fn set(&mut self, key: &str, value: String);
}

/// Read side of a carrier.
pub trait Extractor {
    /// Value stored under exactly `key`. When several values are stored the
    /// first one is returned.
    fn get(&self, key: &str) -> Option<&str>;

    /// All keys present, in their original case.
    fn keys(&self) -> Vec<&str>;
}

impl Injector for HashMap<String, String> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_owned(), value);
    }
}

impl Extractor for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }
}

/// Multi-valued carrier, the shape of most HTTP header maps.
impl Injector for HashMap<String, Vec<String>> {
    fn set(&mut self, key: &str, value: String) {
        self.insert(key.to_owned(), vec![value]);
    }
}

impl Extractor for HashMap<String, Vec<String>> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    fn keys(&self) -> Vec<&str> {
        HashMap::keys(self).map(String::as_str).collect()
    }
}
