// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::iptools::AddressError;
use std::{error, fmt};

/// Why a value was rejected. The host only ever sees the message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// value is not an IP address nor a CIDR
    MalformedAddress,
    /// configured `within` bound is not an IP address nor a CIDR
    MalformedWithin,
    /// wrong family for `ip4_only`/`ip6_only`
    FamilyMismatch,
    /// wrong shape for `ranges_only`/`addresses_only`
    ShapeMismatch,
    /// not entirely inside the `within` bound
    OutOfRange,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &str = match self {
            FailureKind::MalformedAddress => "malformed address",
            FailureKind::MalformedWithin => "malformed 'within' range",
            FailureKind::FamilyMismatch => "address family mismatch",
            FailureKind::ShapeMismatch => "address/range shape mismatch",
            FailureKind::OutOfRange => "not within range",
        };
        f.write_str(s)
    }
}

/// A rejected value: the failure kind plus the message meant for the host.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: String,
    /// parse error behind a `Malformed*` kind
    pub source: Option<AddressError>,
}

impl ValidationFailure {
    pub(crate) fn new(kind: FailureKind, message: String) -> Self {
        Self {
            kind,
            message,
            source: None,
        }
    }

    pub(crate) fn malformed(kind: FailureKind, message: String, source: AddressError) -> Self {
        Self {
            kind,
            message,
            source: Some(source),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error::Error for ValidationFailure {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn error::Error + 'static))
    }
}
