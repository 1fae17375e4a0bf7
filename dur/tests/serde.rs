use dur::{SignedDuration, Unit};
use serde::Deserialize;

#[test]
fn test_serialize_as_string() {
    let dur = SignedDuration::from_nanos(90 * Unit::Minute.nanos());
    assert_eq!(serde_json::to_string(&dur).unwrap(), "\"1h 30m\"");
    assert_eq!(serde_json::to_string(&SignedDuration::ZERO).unwrap(), "\"0s\"");
}

#[test]
fn test_deserialize_loose_strings() {
    let dur: SignedDuration = serde_json::from_str("\"2y 3mon 5d\"").unwrap();
    assert_eq!(
        dur.as_nanos(),
        2 * Unit::Year.nanos() + 3 * Unit::Month.nanos() + 5 * Unit::Day.nanos()
    );

    let negative: SignedDuration = serde_json::from_str("\"-1h -30m\"").unwrap();
    assert_eq!(negative.as_nanos(), -90 * Unit::Minute.nanos());
}

#[test]
fn test_deserialize_rejects_bad_input() {
    assert!(serde_json::from_str::<SignedDuration>("\"1h 2h\"").is_err());
    assert!(serde_json::from_str::<SignedDuration>("\"\"").is_err());
    assert!(serde_json::from_str::<SignedDuration>("42").is_err());
}

#[test]
fn test_roundtrip_in_config_struct() {
    #[derive(Deserialize)]
    struct Config {
        poll_interval: SignedDuration,
        retention: SignedDuration,
    }

    let config: Config = serde_json::from_str(
        r#"{"poll_interval": "30s", "retention": "90d"}"#,
    )
    .unwrap();
    assert_eq!(config.poll_interval.as_nanos(), 30 * Unit::Second.nanos());
    assert_eq!(config.retention.as_nanos(), 90 * Unit::Day.nanos());
}
