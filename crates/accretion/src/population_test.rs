//! Tests for the population selector

use crate::error::AccretionError;
use crate::population::Population;

#[test]
fn test_parse_known_populations() {
    assert_eq!("warm".parse::<Population>().unwrap(), Population::Warm);
    assert_eq!("cold".parse::<Population>().unwrap(), Population::Cold);
}

#[test]
fn test_parse_unknown_population_names_the_value() {
    let err = "hot".parse::<Population>().unwrap_err();
    match &err {
        AccretionError::InvalidPopulation { given } => assert_eq!(given, "hot"),
        other => panic!("expected InvalidPopulation, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "population should be \"warm\" or \"cold\" but given \"hot\""
    );
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!("Warm".parse::<Population>().is_err());
    assert!("COLD".parse::<Population>().is_err());
    assert!("".parse::<Population>().is_err());
    assert!(" warm".parse::<Population>().is_err());
}

#[test]
fn test_display_round_trips_through_parse() {
    for pop in Population::ALL {
        assert_eq!(pop.to_string().parse::<Population>().unwrap(), pop);
        assert_eq!(pop.to_string(), pop.name());
    }
}

#[test]
fn test_default_is_warm() {
    assert_eq!(Population::default(), Population::Warm);
}

#[test]
fn test_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Population::Cold).unwrap(), "\"cold\"");
    let pop: Population = serde_json::from_str("\"warm\"").unwrap();
    assert_eq!(pop, Population::Warm);
    assert!(serde_json::from_str::<Population>("\"hot\"").is_err());
}
