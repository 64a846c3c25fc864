// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Validation rule for fields holding an IP address or a CIDR range.

```
use ipvalidator::{IpValidator, Options};

let v = IpValidator::new(Options::new().ip4_only().within("10.0.0.0/8"));
assert!(v.is_valid(Some("10.3.4.0/24")));
assert!(!v.is_valid(Some("172.1.1.1")));
```
*/

pub mod iptools;
pub mod validator;

pub use iptools::{parse_ip_or_cidr, AddressError, IpFam, IpSpan};
pub use validator::{validate, ErrorSink, FailureKind, IpValidator, Options, ValidationFailure};
