// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address and/or CIDR parsing into inclusive address spans.

mod parsing;
mod strings;
mod structs;

use std::{error, fmt};
use strings::*;

pub use parsing::parse_ip_or_cidr;
pub use structs::{IpFam, IpSpan};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;

#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    /// empty (or absent) input
    Empty,
    /// not an IP address nor a CIDR
    Invalid(String),
    /// more than one slash
    CidrFmt(String),
    /// address part of a CIDR does not parse
    InvalidAddr(String),
    /// prefix part is neither a decimal length nor a netmask
    InvalidPrefix(String),
    /// prefix length is too long for the address family
    PrefixTooLong { fam: IpFam, prefix: u32 },
    /// netmask is non-contiguous or of the wrong family
    InvalidMask(String),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => {
                write!(f, "{ERR_EMPTY}")
            }
            AddressError::Invalid(ip) => {
                write!(f, "{ERR_INVALID_IP}: '{ip}'")
            }
            AddressError::CidrFmt(cidr) => {
                write!(f, "{ERR_CIDR_FMT}: '{cidr}'")
            }
            AddressError::InvalidAddr(addr) => {
                write!(f, "{ERR_CIDR_INV_ADDR}: '{addr}'")
            }
            AddressError::InvalidPrefix(pre) => {
                write!(f, "{ERR_CIDR_INV_PRE}: '{pre}'")
            }
            AddressError::PrefixTooLong { fam: IpFam::V4, prefix } => {
                write!(f, "{ERR_CIDR_INV_V4} {prefix}")
            }
            AddressError::PrefixTooLong { fam: IpFam::V6, prefix } => {
                write!(f, "{ERR_CIDR_INV_V6} {prefix}")
            }
            AddressError::InvalidMask(mask) => {
                write!(f, "{ERR_CIDR_INV_MASK}: '{mask}'")
            }
        }
    }
}

impl error::Error for AddressError {}
