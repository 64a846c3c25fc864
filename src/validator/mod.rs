// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field validation rule for IP addresses and CIDR ranges.

mod failure;
mod options;
mod sink;

use crate::iptools::{parse_ip_or_cidr, IpSpan};
use tracing::{debug, warn};

pub use failure::{FailureKind, ValidationFailure};
pub use options::Options;
pub use sink::ErrorSink;

/**
Validates that a field holds an IP address or CIDR range, optionally
restricted by family, by shape and by a parent range.

All enabled checks must hold. Conflicting options (f.ex. both
`ip4_only` and `ip6_only`) are not an error; they just make every
value fail.
*/
#[derive(Clone, Debug, Default)]
pub struct IpValidator {
    options: Options,
}

impl IpValidator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /**
    Check a single value. An absent value is treated like an empty one.

    ### Returns
    - the parsed [IpSpan] if every enabled check holds
    - otherwise, a [ValidationFailure] carrying the first failing
      [FailureKind] and the configured (or generated) message
    */
    pub fn check(&self, value: Option<&str>) -> Result<IpSpan, ValidationFailure> {
        validate(value, &self.options)
    }

    /// Whether `value` passes every enabled check.
    pub fn is_valid(&self, value: Option<&str>) -> bool {
        self.check(value).is_ok()
    }

    /**
    Host entry point: on failure, append exactly one message for
    `attribute` to `errors`. Valid values leave `errors` untouched.
    */
    pub fn validate_each<E>(&self, errors: &mut E, attribute: &str, value: Option<&str>)
    where
        E: ErrorSink + ?Sized,
    {
        if let Err(failure) = self.check(value) {
            match &failure.source {
                Some(source) => debug!(attribute, kind = %failure.kind, "rejected: {source}"),
                None => debug!(attribute, kind = %failure.kind, "rejected: {value:?}"),
            }
            errors.add_error(attribute, failure.message);
        }
    }
}

impl From<Options> for IpValidator {
    fn from(options: Options) -> Self {
        Self::new(options)
    }
}

/// One-shot check of `value` against `opts`. See [IpValidator::check].
pub fn validate(value: Option<&str>, opts: &Options) -> Result<IpSpan, ValidationFailure> {
    let fail = |kind: FailureKind| ValidationFailure::new(kind, opts.failure_message());

    let span: IpSpan = parse_ip_or_cidr(value.unwrap_or_default()).map_err(|e| {
        ValidationFailure::malformed(FailureKind::MalformedAddress, opts.failure_message(), e)
    })?;

    if enabled(opts.ip4_only) && !span.is_ipv4() {
        return Err(fail(FailureKind::FamilyMismatch));
    }
    if enabled(opts.ip6_only) && !span.is_ipv6() {
        return Err(fail(FailureKind::FamilyMismatch));
    }
    if enabled(opts.ranges_only) && span.is_host() {
        return Err(fail(FailureKind::ShapeMismatch));
    }
    if enabled(opts.addresses_only) && !span.is_host() {
        return Err(fail(FailureKind::ShapeMismatch));
    }

    if let Some(within) = &opts.within {
        let parent: IpSpan = parse_ip_or_cidr(within).map_err(|e| {
            warn!("invalid 'within' option: {e}");
            ValidationFailure::malformed(FailureKind::MalformedWithin, opts.failure_message(), e)
        })?;
        if !parent.contains(&span) {
            return Err(fail(FailureKind::OutOfRange));
        }
    }

    Ok(span)
}

#[inline]
fn enabled(flag: Option<bool>) -> bool {
    flag == Some(true)
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    const WITHIN_V4: &str = "10.0.0.0/8";
    const WITHIN_V6: &str = "abcd::/16";
    const FIELD: &str = "myfield";

    // v4 address, v4 range, v6 address, v6 range
    const PLAIN: [&str; 4] = ["1.2.3.4", "1.2.3.4/16", "::", "::/48"];
    // inside address, inside range, outside address, outside range
    const IN_V4: [&str; 4] = ["10.3.4.5", "10.3.4.0/24", "172.1.1.1", "172.0.0.0/8"];
    const IN_V6: [&str; 4] = ["abcd::3:4", "abcd::3:0/32", "::", "::/32"];

    fn valid(opts: &Options, value: &str) -> bool {
        IpValidator::new(opts.clone()).is_valid(Some(value))
    }

    #[rustfmt::skip]
    #[test]
    fn test_option_matrix() {
        const T: bool = true;
        const F: bool = false;
        let none = Options::new;

        // options, PLAIN, IN_V4 (within 10/8), IN_V6 (within abcd::/16)
        let tests: Vec<(Options, [bool; 4], [bool; 4], [bool; 4])> = vec![
            (none(),                            [T, T, T, T], [T, T, F, F], [T, T, F, F]),
            (none().ranges_only(),              [F, T, F, T], [F, T, F, F], [F, T, F, F]),
            (none().addresses_only(),           [T, F, T, F], [T, F, F, F], [T, F, F, F]),
            (none().ip4_only(),                 [T, T, F, F], [T, T, F, F], [F, F, F, F]),
            (none().ip4_only().ranges_only(),   [F, T, F, F], [F, T, F, F], [F, F, F, F]),
            (none().ip4_only().addresses_only(),[T, F, F, F], [T, F, F, F], [F, F, F, F]),
            (none().ip6_only(),                 [F, F, T, T], [F, F, F, F], [T, T, F, F]),
            (none().ip6_only().ranges_only(),   [F, F, F, T], [F, F, F, F], [F, T, F, F]),
            (none().ip6_only().addresses_only(),[F, F, T, F], [F, F, F, F], [T, F, F, F]),
        ];

        for (opts, plain, in_v4, in_v6) in tests {
            let opts_v4: Options = opts.clone().within(WITHIN_V4);
            let opts_v6: Options = opts.clone().within(WITHIN_V6);
            for i in 0..4 {
                assert_eq!(valid(&opts, PLAIN[i]), plain[i], "Failed: '{}' {opts:?}", PLAIN[i]);
                assert_eq!(valid(&opts_v4, IN_V4[i]), in_v4[i], "Failed: '{}' {opts_v4:?}", IN_V4[i]);
                assert_eq!(valid(&opts_v6, IN_V6[i]), in_v6[i], "Failed: '{}' {opts_v6:?}", IN_V6[i]);
            }
        }
    }

    #[test]
    fn test_false_flags_disable_checks() {
        let opts: Options = Options {
            ip4_only: Some(false),
            ip6_only: Some(false),
            ranges_only: Some(false),
            addresses_only: Some(false),
            ..Default::default()
        };
        for value in PLAIN {
            assert!(valid(&opts, value), "Failed: '{value}'");
            assert!(validate(Some(value), &opts).is_ok(), "Failed: '{value}'");
        }

        // key presence alone still drives the wording
        let err: ValidationFailure = validate(Some("garbage"), &opts).unwrap_err();
        assert_eq!(err.message, "is not a valid IPv6 address or address range");
    }

    #[test]
    fn test_check_matches_validate() {
        let opts: Options = Options::new().ip6_only().within(WITHIN_V6);
        let v: IpValidator = IpValidator::new(opts.clone());
        for value in IN_V6.iter().chain(PLAIN.iter()) {
            assert_eq!(v.check(Some(*value)), validate(Some(*value), &opts), "Failed: '{value}'");
        }
    }

    #[test]
    fn test_rejects_absent_empty_garbage() {
        let opt_sets: [Options; 3] = [Options::new(), Options::new().ip4_only(), Options::new().ip6_only()];
        for opts in opt_sets {
            let v: IpValidator = IpValidator::new(opts);
            for value in [None, Some(""), Some("asdfasdfasdf")] {
                let err: ValidationFailure = v.check(value).unwrap_err();
                assert_eq!(err.kind, FailureKind::MalformedAddress, "Failed: {value:?}");
                assert!(err.source.is_some());
            }
        }
    }

    #[test]
    fn test_both_families_fails_everything() {
        let v: IpValidator = IpValidator::new(Options::new().ip4_only().ip6_only());
        for value in PLAIN.iter().chain(IN_V4.iter()).chain(IN_V6.iter()) {
            let err: ValidationFailure = v.check(Some(*value)).unwrap_err();
            assert_eq!(err.kind, FailureKind::FamilyMismatch, "Failed: '{value}'");
        }
    }

    #[test]
    fn test_both_shapes_fails_everything() {
        let v: IpValidator = IpValidator::new(Options::new().ranges_only().addresses_only());
        for value in PLAIN {
            assert_eq!(v.check(Some(value)).unwrap_err().kind, FailureKind::ShapeMismatch);
        }
    }

    #[test]
    fn test_host_prefix_is_an_address() {
        let addresses: IpValidator = IpValidator::new(Options::new().addresses_only());
        let ranges: IpValidator = IpValidator::new(Options::new().ranges_only());
        for value in ["1.2.3.4/32", "abcd::1/128"] {
            assert!(addresses.is_valid(Some(value)), "Failed: '{value}'");
            assert!(!ranges.is_valid(Some(value)), "Failed: '{value}'");
        }
    }

    #[test]
    fn test_within_needs_full_containment() {
        let v: IpValidator = IpValidator::new(Options::new().within(WITHIN_V4));
        for value in ["172.0.0.0/8", "9.0.0.0/7", "8.0.0.0/6", "10.0.0.0/7"] {
            let err: ValidationFailure = v.check(Some(value)).unwrap_err();
            assert_eq!(err.kind, FailureKind::OutOfRange, "Failed: '{value}'");
        }
        assert!(v.is_valid(Some(WITHIN_V4)));
        assert!(v.is_valid(Some("10.255.255.255")));
    }

    #[test]
    fn test_within_other_family() {
        let v: IpValidator = IpValidator::new(Options::new().within("::/0"));
        assert_eq!(v.check(Some("1.2.3.4")).unwrap_err().kind, FailureKind::OutOfRange);
        assert!(v.is_valid(Some("::ffff:1.2.3.4")));
    }

    #[test]
    fn test_within_single_address() {
        let v: IpValidator = IpValidator::new(Options::new().within("10.1.1.1"));
        assert!(v.is_valid(Some("10.1.1.1")));
        assert!(!v.is_valid(Some("10.1.1.2")));
        assert!(!v.is_valid(Some("10.1.1.0/31")));
    }

    #[test]
    fn test_contained_range_not_an_address() {
        let opts: Options = Options::new().within(WITHIN_V6).addresses_only();
        let err: ValidationFailure = validate(Some("abcd::3:0/32"), &opts).unwrap_err();
        assert_eq!(err.kind, FailureKind::ShapeMismatch);
    }

    #[test]
    fn test_malformed_within() {
        let opts: Options = Options::new().within("10.0.0.0/33");
        let err: ValidationFailure = validate(Some("10.1.1.1"), &opts).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedWithin);
        assert_eq!(err.message, opts.error_message());
        assert!(err.source.is_some());

        // the value is parsed first
        let err: ValidationFailure = validate(Some("nope"), &opts).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedAddress);
    }

    #[test]
    fn test_returns_parsed_span() {
        let span: IpSpan = validate(Some("1.2.3.4/16"), &Options::new()).unwrap();
        assert_eq!(span.to_string(), "1.2.0.0/16");
    }

    #[test]
    fn test_same_message_for_every_kind() {
        let opts: Options = Options::new().ip4_only().addresses_only().within(WITHIN_V4);
        let expected: String = opts.error_message();
        for value in ["garbage", "::1", "10.0.0.0/16", "192.168.1.1"] {
            assert_eq!(validate(Some(value), &opts).unwrap_err().message, expected, "Failed: '{value}'");
        }
    }

    #[test]
    fn test_validate_each_hashmap() {
        let v: IpValidator = IpValidator::new(Options::new().ip6_only());
        let mut errors: HashMap<String, Vec<String>> = HashMap::new();

        v.validate_each(&mut errors, FIELD, Some("::"));
        assert!(errors.is_empty());

        v.validate_each(&mut errors, FIELD, Some("1.2.3.4"));
        assert_eq!(
            errors.get(FIELD),
            Some(&vec!["is not a valid IPv6 address or address range".to_string()])
        );

        v.validate_each(&mut errors, "other", None);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["other"].len(), 1);
    }

    #[test]
    fn test_validate_each_custom_message() {
        let v: IpValidator = IpValidator::new(Options::new().ranges_only().message("must be a subnet"));
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        v.validate_each(&mut errors, FIELD, Some("1.2.3.4"));
        v.validate_each(&mut errors, FIELD, Some("1.2.3.4/24"));
        assert_eq!(errors[FIELD], vec!["must be a subnet".to_string()]);
    }

    #[test]
    fn test_validate_each_dyn_sink() {
        let v: IpValidator = IpValidator::default();
        let mut pairs: Vec<(String, String)> = Vec::new();
        let sink: &mut dyn ErrorSink = &mut pairs;

        v.validate_each(sink, FIELD, Some(""));
        v.validate_each(sink, FIELD, Some("::1"));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, FIELD);
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IpValidator>();
    }
}
