use anyhow::Result;

use crate::{
    consumer::{AssignOutcome, ConsumerReport},
    resource::{KindDetail, Resource, ResourceKind, UsageSummary},
    session::Session,
};

/// Fixed console walkthrough over a seeded session: a handful of draws,
/// the three guarded edge cases, then the usage reports. Pure rendering —
/// every decision happens inside the session.
pub fn run(session: &mut Session) -> Result<()> {
    separator("1. Seeded Resources");
    for summary in session.resource_reports() {
        println!(
            "  Created -> {} ({} {} available, renewable: {})",
            summary.name, summary.total_available, summary.unit, summary.renewable
        );
    }

    // The seed already wired every consumer to every pool, so each of
    // these reports the benign already-assigned outcome.
    separator("2. Assignment Idempotency");
    for (consumer_id, resource_id) in [
        ("C-101", "water"),
        ("C-101", "electricity"),
        ("C-101", "waste"),
        ("C-202", "water"),
        ("C-202", "electricity"),
        ("C-202", "waste"),
    ] {
        let outcome = session.assign(consumer_id, resource_id)?;
        println!(
            "  {} -> {}: {}",
            consumer_id,
            resource_id,
            describe_assignment(outcome)
        );
    }

    separator("3. Consuming Resources");
    for (consumer_id, resource_id, amount) in [
        ("C-101", "water", 1_500.0),
        ("C-101", "electricity", 800.0),
        ("C-101", "waste", 300.0),
        ("C-202", "water", 4_000.0),
        ("C-202", "electricity", 2_200.0),
        ("C-202", "waste", 1_000.0),
    ] {
        print_consume(session, consumer_id, resource_id, amount);
    }

    separator("4. Edge Case - Over-consumption Attempt");
    print_consume(session, "C-202", "water", 9_999.0);

    separator("5. Edge Case - Invalid (Negative) Amount");
    print_consume(session, "C-101", "electricity", -50.0);

    separator("6. Edge Case - Unassigned Resource");
    session.register_resource(
        "groundwater",
        Resource::new(
            ResourceKind::Water {
                source: "Groundwater".to_string(),
            },
            500.0,
        ),
    )?;
    print_consume(session, "C-101", "groundwater", 100.0);

    separator("7. Usage Reports");
    for consumer_id in ["C-101", "C-202"] {
        let report = session.usage_report(consumer_id)?;
        println!();
        print_report(&report);
    }

    separator("8. Individual Resource Reports");
    for summary in session.resource_reports() {
        println!(
            "  {:12} | Available: {:>9.2} {:6} | Consumed: {:>8.2} | Utilisation: {}%",
            summary.name, summary.total_available, summary.unit, summary.consumed,
            summary.utilisation_pct
        );
    }

    separator("Demo Complete");
    Ok(())
}

fn print_consume(session: &mut Session, consumer_id: &str, resource_id: &str, amount: f64) {
    match session.consume(consumer_id, resource_id, amount) {
        Ok(receipt) => println!("  {} -> {}", consumer_id, receipt),
        Err(err) => println!("  {} -> rejected: {}", consumer_id, err),
    }
}

fn describe_assignment(outcome: AssignOutcome) -> &'static str {
    match outcome {
        AssignOutcome::Assigned => "assigned",
        AssignOutcome::AlreadyAssigned => "already assigned",
    }
}

fn print_report(report: &ConsumerReport) {
    println!("  Consumer ID  : {}", report.consumer_id);
    println!("  Name         : {}", report.name);
    println!("  Total Events : {}", report.total_consumption_events);
    println!("  --- Resource Breakdown ---");
    for summary in &report.resources {
        print_summary(summary);
    }
}

fn print_summary(summary: &UsageSummary) {
    println!("    * {} ({})", summary.name, summary.unit);
    println!("      Available   : {}", summary.total_available);
    println!("      Consumed    : {}", summary.consumed);
    println!("      Utilisation : {}%", summary.utilisation_pct);
    match &summary.detail {
        KindDetail::Water { source } => println!("      Source      : {}", source),
        KindDetail::Electricity { energy_type } => {
            println!("      Type        : {}", energy_type)
        }
        KindDetail::Waste { waste_category, .. } => {
            println!("      Category    : {}", waste_category)
        }
    }
}

fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    if !title.is_empty() {
        println!("  {}", title);
        println!("{}", "=".repeat(60));
    }
}
