use ecogrid::{
    config::SeedConfig,
    consumer::{AssignOutcome, ConsumeError, Consumer},
    resource::{Resource, ResourceError, ResourceKind},
    session::{Session, SessionError},
};

fn seeded_session() -> Session {
    Session::from_seed(&SeedConfig::default()).expect("stock seed should build")
}

#[test]
fn given_stock_seed_then_all_resources_assigned_to_both_consumers() {
    let session = seeded_session();

    let overview = session.overview();
    assert_eq!(overview.resources.len(), 3);
    assert_eq!(overview.consumers.len(), 2);
    for report in &overview.consumers {
        assert_eq!(report.resources.len(), 3);
        assert_eq!(report.total_consumption_events, 0);
    }

    let water = session.resource("water").expect("water pool exists");
    assert_eq!(water.total_available(), 10_000.0);
}

#[test]
fn given_seeded_session_when_consumed_then_overview_reflects_the_draw() {
    let mut session = seeded_session();

    let receipt = session
        .consume("C-101", "water", 1_500.0)
        .expect("seeded consumption should succeed");
    assert_eq!(receipt.remaining, 8_500.0);

    let overview = session.overview();
    let water = overview
        .resources
        .iter()
        .find(|summary| summary.name == "Water")
        .expect("water summary present");
    assert_eq!(water.total_available, 8_500.0);
    assert_eq!(water.utilisation_pct, 15.0);

    let household = session.usage_report("C-101").expect("consumer exists");
    assert_eq!(household.total_consumption_events, 1);
    assert_eq!(household.consumption_history[0].amount, 1_500.0);
}

#[test]
fn given_unknown_ids_then_session_reports_which_one_is_missing() {
    let mut session = seeded_session();

    let err = session
        .consume("C-999", "water", 10.0)
        .expect_err("unknown consumer must be rejected");
    assert_eq!(err, SessionError::UnknownConsumer("C-999".to_string()));

    let err = session
        .consume("C-101", "oil", 10.0)
        .expect_err("unknown resource must be rejected");
    assert_eq!(err, SessionError::UnknownResource("oil".to_string()));

    let err = session
        .usage_report("C-999")
        .expect_err("unknown consumer must be rejected");
    assert_eq!(err, SessionError::UnknownConsumer("C-999".to_string()));
}

#[test]
fn given_duplicate_ids_then_registration_conflicts() {
    let mut session = seeded_session();

    let err = session
        .register_resource(
            "water",
            Resource::new(
                ResourceKind::Water {
                    source: "Reservoir".to_string(),
                },
                1.0,
            ),
        )
        .expect_err("duplicate resource id must be rejected");
    assert_eq!(err, SessionError::ResourceIdConflict("water".to_string()));

    let err = session
        .register_consumer(Consumer::new("C-101", "Impostor"))
        .expect_err("duplicate consumer id must be rejected");
    assert_eq!(err, SessionError::ConsumerIdConflict("C-101".to_string()));
}

#[test]
fn given_repeat_assignment_through_session_then_outcome_is_already_assigned() {
    let mut session = seeded_session();
    assert_eq!(
        session.assign("C-101", "water").expect("ids exist"),
        AssignOutcome::AlreadyAssigned
    );

    let report = session.usage_report("C-101").expect("consumer exists");
    assert_eq!(report.resources.len(), 3);
}

#[test]
fn given_registered_but_unassigned_pool_then_consume_fails_and_pool_stays_untouched() {
    let mut session = seeded_session();
    session
        .register_resource(
            "groundwater",
            Resource::new(
                ResourceKind::Water {
                    source: "Groundwater".to_string(),
                },
                500.0,
            ),
        )
        .expect("fresh id should register");

    let err = session
        .consume("C-101", "groundwater", 100.0)
        .expect_err("unassigned pool must be rejected");
    assert!(matches!(
        err,
        SessionError::Consume(ConsumeError::NotAssigned { .. })
    ));

    let pool = session.resource("groundwater").expect("pool exists");
    assert_eq!(pool.total_available(), 500.0);
    assert!(pool.usage_log().is_empty());
}

#[test]
fn given_resource_failure_through_session_then_it_passes_through_unaltered() {
    let mut session = seeded_session();

    let err = session
        .consume("C-202", "waste", 9_999.0)
        .expect_err("overdraw must be rejected");
    assert_eq!(
        err,
        SessionError::Consume(ConsumeError::Resource(
            ResourceError::InsufficientQuantity {
                name: "Waste",
                requested: 9_999.0,
                available: 2_000.0,
            }
        ))
    );
}

#[test]
fn given_shared_seeded_pool_then_both_consumers_draw_from_the_same_water() {
    let mut session = seeded_session();

    session
        .consume("C-101", "water", 1_500.0)
        .expect("draw should succeed");
    session
        .consume("C-202", "water", 4_000.0)
        .expect("draw should succeed");

    let water = session.resource("water").expect("water pool exists");
    assert_eq!(water.total_available(), 4_500.0);
    assert_eq!(water.usage_log().len(), 2);

    let overview = session.overview();
    for report in &overview.consumers {
        let water_view = report
            .resources
            .iter()
            .find(|summary| summary.name == "Water")
            .expect("water summary present");
        assert_eq!(water_view.total_available, 4_500.0);
    }
}

#[test]
fn given_overview_when_serialized_then_it_round_trips() {
    let mut session = seeded_session();
    session
        .consume("C-101", "electricity", 800.0)
        .expect("draw should succeed");

    let overview = session.overview();
    let text = serde_json::to_string(&overview).expect("overview should serialize");
    let parsed: ecogrid::session::SessionOverview =
        serde_json::from_str(&text).expect("overview should deserialize");
    assert_eq!(parsed, overview);
}
