//! Connect-argument normalization.
//!
//! Every call shape is first reduced to one [`ConnectOptions`] record, then
//! validated field by field in a fixed order: port, hints, family, local
//! address, local port. The first failure is returned. Nothing here performs
//! I/O; a validation error is always raised before any dial.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{
    is_blank, AddressFamily, ArgValue, ConnectArgs, ConnectOptions,
    NormalizedTarget, Port, ResolutionHints,
};
use std::net::IpAddr;
use tracing::{debug, trace};

const PORT_TYPES: &str = "number or string";

/// Normalize connect arguments into a validated target.
pub fn normalize(args: ConnectArgs) -> ValidationResult<NormalizedTarget> {
    let shape = args.shape();
    let result = normalize_options(&args.into_options());

    match &result {
        Ok(target) => trace!(%shape, %target, "normalized connect arguments"),
        Err(err) => debug!(%shape, code = err.code(), error = %err, "rejected connect arguments"),
    }
    result
}

/// Validate an options record.
pub fn normalize_options(options: &ConnectOptions) -> ValidationResult<NormalizedTarget> {
    let port = validate_port(&options.port, "port")?;
    let hints = validate_hints(&options.hints)?;
    let family = validate_family(&options.family)?;
    let local_address = validate_local_address(options.local_address.as_deref())?;
    let local_port = validate_local_port(&options.local_port)?;

    Ok(NormalizedTarget {
        port,
        host: options.host.clone(),
        hints,
        family,
        local_address,
        local_port,
    })
}

/// Validate a raw port value.
///
/// Numbers and strings are coerced to a number and must then be an integer
/// in 0-65535. A missing value, or a string that is empty after trimming,
/// fails with `BadPort` and no coerced value. Other types are
/// `InvalidArgType`.
pub fn validate_port(value: &ArgValue, name: &'static str) -> ValidationResult<Port> {
    let bad_port = |coerced| ValidationError::BadPort {
        name,
        received: value.clone(),
        coerced,
    };

    if value.is_undefined() || value.as_str().is_some_and(is_blank) {
        return Err(bad_port(None));
    }
    let coerced = value
        .to_number()
        .ok_or_else(|| ValidationError::InvalidArgType {
            name,
            expected: PORT_TYPES,
            received: value.clone(),
        })?;

    Port::from_number(coerced).ok_or_else(|| bad_port(Some(coerced)))
}

/// Validate the `hints` option: a number made only of recognized flags.
pub fn validate_hints(value: &ArgValue) -> ValidationResult<ResolutionHints> {
    let invalid = || ValidationError::InvalidOptionValue {
        name: "hints",
        received: value.clone(),
    };

    match value {
        _ if value.is_nullish() => Ok(ResolutionHints::NONE),
        ArgValue::Number(n) if n.fract() == 0.0 => {
            ResolutionHints::from_bits(*n as i64).ok_or_else(invalid)
        }
        ArgValue::Number(_) => Err(invalid()),
        _ => Err(ValidationError::InvalidArgType {
            name: "hints",
            expected: "number",
            received: value.clone(),
        }),
    }
}

fn validate_family(value: &ArgValue) -> ValidationResult<AddressFamily> {
    AddressFamily::from_arg(value).ok_or_else(|| ValidationError::InvalidOptionValue {
        name: "family",
        received: value.clone(),
    })
}

fn validate_local_address(address: Option<&str>) -> ValidationResult<Option<IpAddr>> {
    address
        .map(|addr| {
            addr.parse().map_err(|_| ValidationError::InvalidOptionValue {
                name: "localAddress",
                received: ArgValue::from(addr),
            })
        })
        .transpose()
}

fn validate_local_port(value: &ArgValue) -> ValidationResult<Option<Port>> {
    match value {
        _ if value.is_nullish() => Ok(None),
        ArgValue::Number(_) => validate_port(value, "localPort").map(Some),
        _ => Err(ValidationError::InvalidArgType {
            name: "localPort",
            expected: "number",
            received: value.clone(),
        }),
    }
}

impl ConnectArgs {
    /// Normalize these arguments. See [`normalize`].
    pub fn normalize(self) -> ValidationResult<NormalizedTarget> {
        normalize(self)
    }
}

impl TryFrom<ConnectArgs> for NormalizedTarget {
    type Error = ValidationError;

    fn try_from(args: ConnectArgs) -> Result<Self, Self::Error> {
        normalize(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationErrorKind;

    fn port_only(value: impl Into<ArgValue>) -> ValidationResult<NormalizedTarget> {
        normalize(ConnectArgs::Port(value.into()))
    }

    #[test]
    fn test_scenarios() {
        let target = port_only(80).unwrap();
        assert_eq!(target.port, Port::new(80));
        assert_eq!(target.host, None);

        let options = ConnectOptions::new(80).with_host("localhost");
        let target = normalize(ConnectArgs::Options(options)).unwrap();
        assert_eq!(target.port, Port::new(80));
        assert_eq!(target.host.as_deref(), Some("localhost"));

        assert_eq!(
            port_only(-1).unwrap_err(),
            ValidationError::BadPort {
                name: "port",
                received: ArgValue::from(-1),
                coerced: Some(-1.0),
            }
        );

        assert_eq!(
            port_only(ArgValue::empty_object()).unwrap_err(),
            ValidationError::InvalidArgType {
                name: "port",
                expected: PORT_TYPES,
                received: ArgValue::empty_object(),
            }
        );
    }

    #[test]
    fn test_string_ports() {
        assert_eq!(port_only("80").unwrap().port, Port::new(80));
        assert_eq!(port_only("0x50").unwrap().port, Port::new(80));
        assert_eq!(port_only(" 8080 ").unwrap().port, Port::new(8080));
        assert_eq!(port_only("0").unwrap().port, Port::new(0));
    }

    #[test]
    fn test_blank_strings_have_no_coerced_value() {
        for blank in ["", " ", "\t\n"] {
            let err = port_only(blank).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::BadPort { coerced: None, .. }
            ));
        }
    }

    #[test]
    fn test_non_integer_ports() {
        let err = port_only(80.5).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);
        let err = port_only("1e10").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);
    }

    #[test]
    fn test_omitted_port_is_distinct_from_zero() {
        let err = port_only(ArgValue::Undefined).unwrap_err();
        assert_eq!(
            err,
            ValidationError::BadPort {
                name: "port",
                received: ArgValue::Undefined,
                coerced: None,
            }
        );

        let err = normalize(ConnectArgs::Options(ConnectOptions::default())).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);

        assert_eq!(port_only(0).unwrap().port, Port::new(0));
    }

    #[test]
    fn test_hints() {
        let valid = ResolutionHints::ADDRCONFIG | ResolutionHints::V4MAPPED;
        let options = ConnectOptions::new(42).with_hints(valid.bits());
        let target = normalize(options.into()).unwrap();
        assert_eq!(target.hints, valid);

        let bad = valid.bits() + 42;
        let options = ConnectOptions::new(42).with_hints(bad);
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidOptionValue {
                name: "hints",
                received: ArgValue::from(bad),
            }
        );

        let options = ConnectOptions::new(42).with_hints(1.5);
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidOptionValue);

        let options = ConnectOptions::new(42).with_hints("8");
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidArgType);
        assert_eq!(err.name(), "hints");
    }

    #[test]
    fn test_port_is_validated_before_hints() {
        let options = ConnectOptions::new(-1).with_hints(-1);
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);
    }

    #[test]
    fn test_family() {
        let options = ConnectOptions::new(80).with_family("IPv6");
        assert_eq!(normalize(options.into()).unwrap().family, AddressFamily::V6);

        let options = ConnectOptions::new(80).with_family(5);
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidOptionValue);
        assert_eq!(err.name(), "family");
    }

    #[test]
    fn test_local_binding() {
        let options = ConnectOptions::new(80)
            .with_local_address("127.0.0.1")
            .with_local_port(40000);
        let target = normalize(options.into()).unwrap();
        assert_eq!(target.local_address, "127.0.0.1".parse().ok());
        assert_eq!(target.local_port, Some(Port::new(40000)));

        let options = ConnectOptions::new(80).with_local_address("not-an-ip");
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.name(), "localAddress");
        assert_eq!(err.kind(), ValidationErrorKind::InvalidOptionValue);

        let options = ConnectOptions::new(80).with_local_port("40000");
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.name(), "localPort");
        assert_eq!(err.kind(), ValidationErrorKind::InvalidArgType);

        let options = ConnectOptions::new(80).with_local_port(70000);
        let err = normalize(options.into()).unwrap_err();
        assert_eq!(err.name(), "localPort");
        assert_eq!(err.kind(), ValidationErrorKind::BadPort);
    }

    #[test]
    fn test_host_is_passed_through() {
        let args = ConnectArgs::PortHost(ArgValue::from(80), "not a hostname!".to_string());
        let target = args.normalize().unwrap();
        assert_eq!(target.host.as_deref(), Some("not a hostname!"));
    }

    #[test]
    fn test_idempotence() {
        let options = ConnectOptions::new("0x1bb")
            .with_host("example.com")
            .with_hints(ResolutionHints::ALL.bits())
            .with_family(4)
            .with_local_address("::1")
            .with_local_port(0);
        let first = normalize(options.into()).unwrap();
        let second = normalize(first.to_options().into()).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.port, Port::new(443));
    }

    #[test]
    fn test_try_from() {
        let target = NormalizedTarget::try_from(ConnectArgs::Port(ArgValue::from("22"))).unwrap();
        assert_eq!(target.port, Port::new(22));
    }
}
