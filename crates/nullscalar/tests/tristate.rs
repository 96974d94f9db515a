//! Unset, null and valid states through struct-level serde.

use nullscalar::{NullI16, NullU64, Nullable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
struct Patch {
    #[serde(default, skip_serializing_if = "Nullable::is_null")]
    limit: NullI16,
    #[serde(default)]
    owner: NullU64,
}

#[test]
fn absent_fields_stay_unset() -> anyhow::Result<()> {
    let p: Patch = serde_json::from_str("{}")?;
    assert!(!p.limit.is_set());
    assert!(!p.owner.is_set());
    assert_eq!(p, Patch::default());
    Ok(())
}

#[test]
fn explicit_null_is_set() -> anyhow::Result<()> {
    let p: Patch = serde_json::from_str(r#"{"limit": null, "owner": null}"#)?;
    assert!(p.limit.is_set() && p.limit.is_null());
    assert!(p.owner.is_set() && p.owner.is_null());
    Ok(())
}

#[test]
fn values_and_strings() -> anyhow::Result<()> {
    let p: Patch = serde_json::from_str(r#"{"limit": -5, "owner": "18446744073709551615"}"#)?;
    assert_eq!(p.limit.get(), Some(-5));
    assert_eq!(p.owner.get(), Some(u64::MAX));

    let p: Patch = serde_json::from_str(r#"{"owner": ""}"#)?;
    assert!(p.owner.is_set() && p.owner.is_null());

    let p: Patch = serde_json::from_str(r#"{"owner": 0}"#)?;
    assert!(p.owner.is_set() && p.owner.is_null());
    Ok(())
}

#[test]
fn serialization_omits_null() -> anyhow::Result<()> {
    let p = Patch {
        limit: Nullable::null(),
        owner: Nullable::null(),
    };
    assert_eq!(serde_json::to_string(&p)?, r#"{"owner":null}"#);

    let p = Patch {
        limit: 42.into(),
        owner: (1u64 << 63).into(),
    };
    assert_eq!(
        serde_json::to_string(&p)?,
        r#"{"limit":42,"owner":9223372036854775808}"#
    );
    Ok(())
}

#[test]
fn decode_errors_are_reported_through_serde() {
    let err = serde_json::from_str::<Patch>(r#"{"limit": 40000}"#).unwrap_err();
    assert!(err.to_string().contains("40000 overflows int16"), "{err}");

    let err = serde_json::from_str::<Patch>(r#"{"limit": [1]}"#).unwrap_err();
    assert!(
        err.to_string().contains("cannot decode JSON array into int16"),
        "{err}"
    );

    assert!(serde_json::from_str::<Patch>(r#"{"owner": true}"#).is_err());

    let err = serde_json::from_str::<Patch>(r#"{"owner": 18446744073709551617}"#).unwrap_err();
    assert!(
        err.to_string()
            .contains("18446744073709551617 overflows uint64"),
        "{err}"
    );
}
