// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static SLASH: &str = "/";
pub(crate) static BRACKET_OPEN: char = '[';
pub(crate) static BRACKET_CLOSE: char = ']';
pub(crate) static ZONE_SEP: char = '%';

// parsing.rs
pub(crate) static ERR_EMPTY: &str = "empty IP address or CIDR";
pub(crate) static ERR_INVALID_IP: &str = "invalid IP address or CIDR";
pub(crate) static ERR_CIDR_FMT: &str = "invalid CIDR format (too many slashes)";
pub(crate) static ERR_CIDR_INV_ADDR: &str = "invalid IP address in CIDR";
pub(crate) static ERR_CIDR_INV_PRE: &str = "invalid prefix in CIDR";
pub(crate) static ERR_CIDR_INV_MASK: &str = "invalid netmask in CIDR";
pub(crate) static ERR_CIDR_INV_V4: &str = "IPv4 prefix must be <= 32, got";
pub(crate) static ERR_CIDR_INV_V6: &str = "IPv6 prefix must be <= 128, got";

// structs.rs
pub(crate) static PANIC_NAUGHTY: &str = "Naughty programmer! Beginning cannot be larger than end!";
