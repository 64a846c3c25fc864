// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeMap, HashMap};

/// Per-attribute error collection owned by the host framework.
pub trait ErrorSink {
    /// Record one error message for `attribute`.
    fn add_error(&mut self, attribute: &str, message: String);
}

impl ErrorSink for HashMap<String, Vec<String>> {
    fn add_error(&mut self, attribute: &str, message: String) {
        self.entry(attribute.to_string()).or_default().push(message);
    }
}

impl ErrorSink for BTreeMap<String, Vec<String>> {
    fn add_error(&mut self, attribute: &str, message: String) {
        self.entry(attribute.to_string()).or_default().push(message);
    }
}

/// Flat list of `(attribute, message)` pairs, in insertion order.
impl ErrorSink for Vec<(String, String)> {
    fn add_error(&mut self, attribute: &str, message: String) {
        self.push((attribute.to_string(), message));
    }
}
