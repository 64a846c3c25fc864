// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, structs::IpFam, AddressError, IpSpan};
use ipnet::{ipv4_mask_to_prefix, ipv6_mask_to_prefix, IpNet};
use std::net::{IpAddr, Ipv6Addr};
use tracing::trace;

static MASK_DELIMS: &[char] = &['.', ':'];

/**
Parse an IP address or CIDR from a string into the [IpSpan] it covers.

Supported formats:
- Single IP: 10.10.10.1, ::1
- Bracketed IPv6: [::1], [::1]/64
- IPv6 with zone ID: fe80::1%eth0 (the zone is dropped)
- CIDR: 10.10.10.0/28, abcd::/16
- CIDR with netmask: 10.10.10.0/255.255.255.240

Host bits below the prefix are masked off. Whitespace is not trimmed.
*/
pub fn parse_ip_or_cidr(arg: impl AsRef<str>) -> Result<IpSpan, AddressError> {
    let s: &str = arg.as_ref();
    if s.is_empty() {
        return Err(AddressError::Empty);
    }

    if !s.contains(SLASH) {
        let ip: IpAddr = parse_addr(s).ok_or_else(|| AddressError::Invalid(s.into()))?;
        let span: IpSpan = IpSpan::from(ip);
        trace!("parsed '{s}' as {span}");
        return Ok(span);
    }

    let parts: Vec<&str> = s.split(SLASH).collect();
    if parts.len() != 2 {
        return Err(AddressError::CidrFmt(s.into()));
    }

    let addr: IpAddr = parse_addr(parts[0]).ok_or_else(|| AddressError::InvalidAddr(parts[0].into()))?;
    let prefix: u8 = parse_prefix(&addr, parts[1])?;

    let net: IpNet = IpNet::new(addr, prefix).map_err(|_| AddressError::PrefixTooLong {
        fam: IpFam::from(&addr),
        prefix: prefix as u32,
    })?;

    let span: IpSpan = IpSpan::from(net);
    trace!("parsed '{s}' as {span}");
    Ok(span)
}

/// Parse a bare address, allowing IPv6 in brackets and with a zone ID.
fn parse_addr(s: &str) -> Option<IpAddr> {
    if let Some(inner) = s
        .strip_prefix(BRACKET_OPEN)
        .and_then(|rest| rest.strip_suffix(BRACKET_CLOSE))
    {
        return parse_v6(inner).map(IpAddr::V6);
    }
    if s.contains(ZONE_SEP) {
        return parse_v6(s).map(IpAddr::V6);
    }
    s.parse::<IpAddr>().ok()
}

/**
Parse an IPv6 address with an optional `%zone` suffix (f.ex. `fe80::1%eth0`).

The zone must be non-empty word characters (`[A-Za-z0-9_]`). It names an
interface, not addresses, so it is dropped from the result.
*/
fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    let addr: &str = match s.split_once(ZONE_SEP) {
        Some((addr, zone)) => {
            if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                return None;
            }
            addr
        }
        None => s,
    };
    addr.parse::<Ipv6Addr>().ok()
}

/// Parse the part after the slash: a decimal prefix length or a netmask.
fn parse_prefix(addr: &IpAddr, s: &str) -> Result<u8, AddressError> {
    let fam: IpFam = IpFam::from(addr);

    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        let prefix: u32 = s
            .parse::<u32>()
            .map_err(|_| AddressError::InvalidPrefix(s.into()))?;
        if prefix > fam.bits() as u32 {
            return Err(AddressError::PrefixTooLong { fam, prefix });
        }
        return Ok(prefix as u8);
    }

    if s.contains(MASK_DELIMS) {
        let mask: IpAddr = s
            .parse::<IpAddr>()
            .map_err(|_| AddressError::InvalidMask(s.into()))?;
        let prefix = match (addr, mask) {
            (IpAddr::V4(_), IpAddr::V4(m)) => ipv4_mask_to_prefix(m),
            (IpAddr::V6(_), IpAddr::V6(m)) => ipv6_mask_to_prefix(m),
            _ => return Err(AddressError::InvalidMask(s.into())),
        };
        return prefix.map_err(|_| AddressError::InvalidMask(s.into()));
    }

    Err(AddressError::InvalidPrefix(s.into()))
}

/* -------------------------------------------------------------------------- */
