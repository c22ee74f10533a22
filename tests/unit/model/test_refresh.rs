use facelog_client::model::refresh::RefreshPolicy;

#[test]
fn test_refresh_policy_default_is_independent() {
    assert_eq!(RefreshPolicy::default(), RefreshPolicy::Independent);
    assert!(!RefreshPolicy::default().is_single_flight());
}

#[test]
fn test_refresh_policy_parsing() {
    assert_eq!(
        "single-flight".parse::<RefreshPolicy>(),
        Ok(RefreshPolicy::SingleFlight)
    );
    assert_eq!(
        "SINGLE_FLIGHT".parse::<RefreshPolicy>(),
        Ok(RefreshPolicy::SingleFlight)
    );
    assert_eq!(
        " independent ".parse::<RefreshPolicy>(),
        Ok(RefreshPolicy::Independent)
    );
    assert!("sometimes".parse::<RefreshPolicy>().is_err());
}

#[test]
fn test_refresh_policy_display_round_trips_through_parse() {
    for policy in [RefreshPolicy::Independent, RefreshPolicy::SingleFlight] {
        assert_eq!(policy.to_string().parse::<RefreshPolicy>(), Ok(policy));
    }
}
