use ecogrid::{
    consumer::{AssignOutcome, ConsumeError, Consumer},
    resource::{Resource, ResourceError, ResourceKind, SharedResource},
};

fn shared_water(id: &str, initial: f64) -> SharedResource {
    SharedResource::new(
        id,
        Resource::new(
            ResourceKind::Water {
                source: "River".to_string(),
            },
            initial,
        ),
    )
}

#[test]
fn given_assigned_resource_when_consumed_then_history_records_event() {
    let water = shared_water("water", 10_000.0);
    let mut household = Consumer::new("C-101", "Residential Block A");

    assert_eq!(household.assign_resource(&water), AssignOutcome::Assigned);
    let receipt = household
        .consume(&water, 1_500.0)
        .expect("assigned consumption should succeed");
    assert_eq!(receipt.remaining, 8_500.0);

    let history = household.consumption_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].consumer, "Residential Block A");
    assert_eq!(history[0].resource, "Water");
    assert_eq!(history[0].amount, 1_500.0);
    assert_eq!(history[0].remaining, 8_500.0);
}

#[test]
fn given_duplicate_assignment_then_second_reports_already_assigned_and_list_keeps_one_entry() {
    let water = shared_water("water", 1_000.0);
    let mut household = Consumer::new("C-101", "Residential Block A");

    assert_eq!(household.assign_resource(&water), AssignOutcome::Assigned);
    assert_eq!(
        household.assign_resource(&water),
        AssignOutcome::AlreadyAssigned
    );
    assert_eq!(household.assigned_resources().len(), 1);
}

#[test]
fn given_unassigned_resource_when_consumed_then_not_assigned_and_resource_untouched() {
    let assigned = shared_water("water", 1_000.0);
    let stray = shared_water("groundwater", 500.0);
    let mut household = Consumer::new("C-101", "Residential Block A");
    household.assign_resource(&assigned);

    let err = household
        .consume(&stray, 100.0)
        .expect_err("unassigned resource must be rejected");
    assert_eq!(
        err,
        ConsumeError::NotAssigned {
            resource: "Water".to_string(),
            consumer: "Residential Block A".to_string(),
        }
    );

    assert_eq!(stray.total_available(), 500.0);
    assert!(stray.usage_log().is_empty());
    assert!(household.consumption_history().is_empty());
}

#[test]
fn given_failed_draw_then_no_history_or_log_entry_anywhere() {
    let water = shared_water("water", 500.0);
    let mut household = Consumer::new("C-101", "Residential Block A");
    household.assign_resource(&water);

    let err = household
        .consume(&water, 9_999.0)
        .expect_err("overdraw must be rejected");
    assert_eq!(
        err,
        ConsumeError::Resource(ResourceError::InsufficientQuantity {
            name: "Water",
            requested: 9_999.0,
            available: 500.0,
        })
    );

    let err = household
        .consume(&water, -50.0)
        .expect_err("negative amount must be rejected");
    assert_eq!(
        err,
        ConsumeError::Resource(ResourceError::InvalidAmount { amount: -50.0 })
    );

    assert_eq!(water.total_available(), 500.0);
    assert!(water.usage_log().is_empty());
    assert!(household.consumption_history().is_empty());
}

#[test]
fn given_assignments_then_report_lists_resources_in_assignment_order() {
    let water = shared_water("water", 1_000.0);
    let waste = SharedResource::new(
        "waste",
        Resource::new(
            ResourceKind::Waste {
                waste_category: "Organic".to_string(),
            },
            2_000.0,
        ),
    );
    let electricity = SharedResource::new(
        "electricity",
        Resource::new(
            ResourceKind::Electricity {
                energy_type: "Wind".to_string(),
            },
            5_000.0,
        ),
    );

    let mut factory = Consumer::new("C-202", "Textile Factory B");
    factory.assign_resource(&waste);
    factory.assign_resource(&water);
    factory.assign_resource(&electricity);

    let report = factory.generate_usage_report();
    let names: Vec<&str> = report
        .resources
        .iter()
        .map(|summary| summary.name.as_str())
        .collect();
    assert_eq!(names, ["Waste", "Water", "Electricity"]);
    assert_eq!(report.consumer_id, "C-202");
    assert_eq!(report.total_consumption_events, 0);
}

#[test]
fn given_shared_pool_when_one_consumer_draws_then_the_other_sees_the_reduction() {
    let water = shared_water("water", 10_000.0);
    let mut household = Consumer::with_resources("C-101", "Residential Block A", [water.clone()]);
    let mut factory = Consumer::with_resources("C-202", "Textile Factory B", [water.clone()]);

    household
        .consume(&water, 1_500.0)
        .expect("draw should succeed");
    factory
        .consume(&water, 4_000.0)
        .expect("draw should succeed");

    assert_eq!(water.total_available(), 4_500.0);
    let factory_view = factory.generate_usage_report();
    assert_eq!(factory_view.resources[0].total_available, 4_500.0);
    assert_eq!(factory_view.resources[0].consumed, 5_500.0);

    // Each consumer's own history only holds its own draws.
    assert_eq!(household.consumption_history().len(), 1);
    assert_eq!(factory.consumption_history().len(), 1);
    assert_eq!(water.usage_log().len(), 2);
}

#[test]
fn given_identical_pools_behind_different_handles_then_identity_not_value_decides_assignment() {
    let first = shared_water("water", 1_000.0);
    let second = shared_water("water-backup", 1_000.0);
    let mut household = Consumer::new("C-101", "Residential Block A");

    household.assign_resource(&first);
    assert_eq!(
        household.assign_resource(&second),
        AssignOutcome::Assigned,
        "equal-valued pools are still distinct identities"
    );
    assert!(household.is_assigned(&first.clone()));
    assert_eq!(household.assigned_resources().len(), 2);
}
