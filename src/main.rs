use anyhow::Result;
use chrono::{Days, Local};
use log::info;
use std::time::Instant;
use vaxtrack::analysis;
use vaxtrack::config::TrackerConfig;
use vaxtrack::models::Gender;
use vaxtrack::store::{MemoryStore, Store};

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TrackerConfig::default();
    let today = Local::now().date_naive();
    let mut store = MemoryStore::new(config.calendar.clone());

    // Example 1: register a small cohort and catch up some of the doses
    info!("Registering sample cohort...");
    let start = Instant::now();

    let newborn = store.register_child(
        "Emma Johnson",
        today,
        Gender::Female,
        "Sarah Johnson",
        "08012345678",
        today,
    )?;
    info!(
        "{} registered at birth, completion {}%",
        newborn.name, newborn.completion_rate
    );

    let infant = store.register_child(
        "Michael Brown",
        today - Days::new(77),
        Gender::Male,
        "David Brown",
        "08098765432",
        today,
    )?;
    store.record_administration(infant.id, "OPV (1st dose)", today - Days::new(32))?;
    store.record_administration(infant.id, "Pentavalent (1st dose)", today - Days::new(32))?;
    store.record_administration(infant.id, "PCV (1st dose)", today - Days::new(32))?;

    let toddler = store.register_child(
        "Chloe Davis",
        today - Days::new(335),
        Gender::Female,
        "Linda Davis",
        "07033445566",
        today,
    )?;
    for dose in [
        "OPV (1st dose)",
        "Pentavalent (1st dose)",
        "PCV (1st dose)",
        "OPV (2nd dose)",
        "Pentavalent (2nd dose)",
        "PCV (2nd dose)",
        "OPV (3rd dose)",
        "Pentavalent (3rd dose)",
        "PCV (3rd dose)",
        "IPV",
    ] {
        store.record_administration(toddler.id, dose, today - Days::new(200))?;
    }

    info!(
        "Registered {} children in {:?}",
        store.children().len(),
        start.elapsed()
    );

    // Example 2: cohort analytics, as a dashboard or report would consume them
    let children: Vec<_> = store.children().iter().map(|c| (**c).clone()).collect();
    let start = Instant::now();

    let summary = analysis::cohort_summary(&children);
    info!(
        "Cohort: {} children, average completion {}%, {} with overdue doses, {} fully immunized",
        summary.total_children,
        summary.average_completion,
        summary.children_with_overdue,
        summary.completed_schedules
    );

    let names: Vec<&str> = config.compliance_vaccines.iter().map(String::as_str).collect();
    for compliance in analysis::vaccine_compliance(&children, &names) {
        info!("coverage {}: {}%", compliance.name, compliance.percent);
    }

    for (vaccine, count) in analysis::overdue_hotspots(&children, config.report_limit) {
        info!("overdue hotspot: {vaccine} ({count} children)");
    }

    for priority in analysis::priority_children(&children, config.report_limit) {
        info!(
            "priority: {} ({} overdue, {}% complete)",
            priority.name, priority.overdue_count, priority.completion_rate
        );
    }

    info!("Analytics computed in {:?}", start.elapsed());

    // Example 3: drain the notifications the session produced
    for notification in store.take_notifications() {
        info!("notification: {}", notification.message);
    }

    Ok(())
}
