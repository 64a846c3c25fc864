// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

static MSG_PREFIX: &str = "is not a valid ";
static MSG_FAM_V4: &str = "IPv4 ";
static MSG_FAM_V6: &str = "IPv6 ";
static MSG_FAM_ANY: &str = "IPv4 or IPv6 ";
static MSG_SHAPE_RANGE: &str = "address range";
static MSG_SHAPE_ADDR: &str = "address";
static MSG_SHAPE_ANY: &str = "address or address range";

/**
Options of an [IpValidator](super::IpValidator).

Every field is optional and absent by default. A flag enables its check
only when it is present *and* `true`, while the generated error message
looks at key presence alone (see [Options::error_message]).

Deserializing rejects unknown keys, so a typo in a host's option bag
is an error rather than a silently disabled check.
*/
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// require an IPv4 address or range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip4_only: Option<bool>,
    /// require an IPv6 address or range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip6_only: Option<bool>,
    /// require more than one address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges_only: Option<bool>,
    /// require exactly one address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses_only: Option<bool>,
    /// parent range the value must fit in entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within: Option<String>,
    /// replaces the generated error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// legacy key, only changes the message wording to "address range"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<bool>,
    /// legacy key, only changes the message wording to "address"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ip4_only(mut self) -> Self {
        self.ip4_only = Some(true);
        self
    }

    pub fn ip6_only(mut self) -> Self {
        self.ip6_only = Some(true);
        self
    }

    pub fn ranges_only(mut self) -> Self {
        self.ranges_only = Some(true);
        self
    }

    pub fn addresses_only(mut self) -> Self {
        self.addresses_only = Some(true);
        self
    }

    pub fn within(mut self, parent: impl Into<String>) -> Self {
        self.within = Some(parent.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /**
    Message produced when no explicit `message` is configured.

    Family wording follows which of `ip6_only`/`ip4_only` is *present*
    (`ip6_only` wins), shape wording follows the legacy `range`/`address`
    keys. `ranges_only` and `addresses_only` never change the wording.
    */
    pub fn error_message(&self) -> String {
        let fam: &str = if self.ip6_only.is_some() {
            MSG_FAM_V6
        } else if self.ip4_only.is_some() {
            MSG_FAM_V4
        } else {
            MSG_FAM_ANY
        };

        let shape: &str = if self.range.is_some() {
            MSG_SHAPE_RANGE
        } else if self.address.is_some() {
            MSG_SHAPE_ADDR
        } else {
            MSG_SHAPE_ANY
        };

        format!("{MSG_PREFIX}{fam}{shape}")
    }

    /// The configured message, or the generated one.
    pub fn failure_message(&self) -> String {
        match &self.message {
            Some(msg) => msg.clone(),
            None => self.error_message(),
        }
    }
}

/* -------------------------------------------------------------------------- */
