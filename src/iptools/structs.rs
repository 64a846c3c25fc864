// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{parsing::parse_ip_or_cidr, strings::*, AddressError, IPV4_BITS, IPV6_BITS};
use ipnet::IpNet;
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IpFam {
    V4,
    V6,
}

impl IpFam {
    /// Address width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            IpFam::V4 => IPV4_BITS,
            IpFam::V6 => IPV6_BITS,
        }
    }
}

impl From<&IpAddr> for IpFam {
    fn from(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => IpFam::V4,
            IpAddr::V6(_) => IpFam::V6,
        }
    }
}

impl fmt::Display for IpFam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFam::V4 => write!(f, "IPv4"),
            IpFam::V6 => write!(f, "IPv6"),
        }
    }
}

/* -------------------------------------------------------------------------- */

/**
Inclusive span of IP addresses covered by a parsed address or CIDR.

A bare address is a host-length span (`/32` or `/128`) whose first and
last addresses are equal. A CIDR is masked down to its network, so
`1.2.3.4/16` covers `1.2.0.0` up to and including `1.2.255.255`.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IpSpan {
    fam: IpFam,
    /// **v4**: `0..=32`, **v6**: `0..=128`
    prefix: u8,
    beg: u128,
    /// inclusive
    end: u128,
}

impl IpSpan {
    pub fn fam(&self) -> IpFam {
        self.fam
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Network (lowest) address of the span.
    pub fn first(&self) -> IpAddr {
        int_to_ip(self.fam, self.beg)
    }

    /// Highest address of the span (inclusive).
    pub fn last(&self) -> IpAddr {
        int_to_ip(self.fam, self.end)
    }

    /// Number of addresses in the span. Cannot be an [usize] due to IPv6. Saturating.
    pub fn len(&self) -> u128 {
        debug_assert!(self.beg <= self.end, "{PANIC_NAUGHTY}");
        let diff: u128 = self.end.saturating_sub(self.beg);
        if diff == u128::MAX {
            return u128::MAX;
        }
        diff + 1
    }

    /// Returns true if the span covers exactly one address.
    pub fn is_host(&self) -> bool {
        self.beg == self.end
    }

    pub fn is_ipv4(&self) -> bool {
        self.fam == IpFam::V4
    }

    pub fn is_ipv6(&self) -> bool {
        self.fam == IpFam::V6
    }

    /**
    Whether `other` lies entirely within this span.

    Mere overlap is not enough, and spans of different families never
    contain each other.
    */
    pub fn contains(&self, other: &IpSpan) -> bool {
        self.fam == other.fam && other.beg >= self.beg && other.end <= self.end
    }
}

impl From<IpNet> for IpSpan {
    fn from(net: IpNet) -> Self {
        let beg: IpAddr = net.network();
        let end: IpAddr = net.broadcast();
        IpSpan {
            fam: IpFam::from(&beg),
            prefix: net.prefix_len(),
            beg: ip_to_int(beg),
            end: ip_to_int(end),
        }
    }
}

impl From<IpAddr> for IpSpan {
    fn from(ip: IpAddr) -> Self {
        IpSpan::from(IpNet::from(ip))
    }
}

impl fmt::Display for IpSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SLASH}{}", self.first(), self.prefix)
    }
}

impl FromStr for IpSpan {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ip_or_cidr(s)
    }
}

/* ---------------------------------- */

#[inline]
fn ip_to_int(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(a) => u32::from(a) as u128,
        IpAddr::V6(a) => u128::from(a),
    }
}

#[inline]
fn int_to_ip(fam: IpFam, v: u128) -> IpAddr {
    match fam {
        IpFam::V4 => IpAddr::V4(Ipv4Addr::from((v as u32).to_be_bytes())),
        IpFam::V6 => IpAddr::V6(Ipv6Addr::from(v.to_be_bytes())),
    }
}

/* -------------------------------------------------------------------------- */
