#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use vaxtrack::analysis::{
        caregiver_distribution, cohort_summary, overdue_hotspots, priority_children,
        vaccine_compliance,
    };
    use vaxtrack::models::{Child, Gender};
    use vaxtrack::schedule::npi_calendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A fixed four-child cohort, all derived as of 2024-10-01:
    /// - Ada: two weeks old, nothing overdue
    /// - Bola: four months old, caught up on OPV 1 only
    /// - Chioma: ten months old, everything given except the 9-month doses
    /// - Dayo: eleven months old, nothing given since birth
    fn cohort() -> Vec<Child> {
        let reference = date(2024, 10, 1);
        let calendar = npi_calendar();

        let ada = Child::register(1, "Ada Obi", date(2024, 9, 15), Gender::Female, calendar, reference)
            .with_caregiver("Sarah Johnson", "08012345678");

        let mut bola =
            Child::register(2, "Bola Ade", date(2024, 6, 1), Gender::Male, calendar, reference)
                .with_caregiver("Sarah Johnson", "08012345678");
        bola.mark_dose_administered("OPV (1st dose)", date(2024, 7, 20));

        let mut chioma =
            Child::register(3, "Chioma Eze", date(2023, 12, 1), Gender::Female, calendar, reference)
                .with_caregiver("Linda Davis", "07033445566");
        let pending: Vec<String> = chioma
            .doses
            .iter()
            .filter(|d| !d.is_completed() && d.name != "Measles (1st dose)" && d.name != "Yellow Fever")
            .map(|d| d.name.clone())
            .collect();
        for name in pending {
            chioma.mark_dose_administered(&name, date(2024, 8, 15));
        }

        let dayo =
            Child::register(4, "Dayo Ojo", date(2023, 11, 1), Gender::Male, calendar, reference)
                .with_caregiver("Linda Davis", "07033445566");

        vec![ada, bola, chioma, dayo]
    }

    #[test]
    fn test_cohort_summary_empty_is_zero() {
        let summary = cohort_summary(&[]);
        assert_eq!(summary.total_children, 0);
        assert_eq!(summary.average_completion, 0);
        assert_eq!(summary.children_with_overdue, 0);
        assert_eq!(summary.completed_schedules, 0);
    }

    #[test]
    fn test_cohort_summary() {
        let children = cohort();
        let rates: Vec<u8> = children.iter().map(|c| c.completion_rate).collect();
        assert_eq!(rates, vec![14, 21, 86, 14]);

        let summary = cohort_summary(&children);
        assert_eq!(summary.total_children, 4);
        // mean of 14, 21, 86, 14 is 33.75
        assert_eq!(summary.average_completion, 34);
        assert_eq!(summary.children_with_overdue, 3);
        assert_eq!(summary.completed_schedules, 0);
    }

    #[test]
    fn test_vaccine_compliance() {
        let children = cohort();
        let compliance = vaccine_compliance(
            &children,
            &["BCG", "OPV (1st dose)", "Measles (1st dose)", "Rotavirus"],
        );

        assert_eq!(compliance[0].percent, 100); // birth dose, every child has it
        assert_eq!(compliance[1].percent, 50); // Bola and Chioma
        assert_eq!(compliance[2].percent, 0); // nobody has had measles yet
        assert_eq!(compliance[3].percent, 0); // not on the calendar at all
    }

    #[test]
    fn test_overdue_hotspots_orders_and_truncates() {
        let children = cohort();

        let all = overdue_hotspots(&children, 20);
        assert_eq!(all.len(), 12);
        // OPV 1 is only overdue for Dayo and sorts last
        assert_eq!(all[11], ("OPV (1st dose)".to_string(), 1));

        let top = overdue_hotspots(&children, 5);
        assert_eq!(top.len(), 5);
        // Every top entry has two children overdue; ties order by name
        let names: Vec<&str> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "IPV",
                "Measles (1st dose)",
                "OPV (2nd dose)",
                "OPV (3rd dose)",
                "PCV (1st dose)",
            ]
        );
        assert!(top.iter().all(|(_, count)| *count == 2));
    }

    #[test]
    fn test_priority_children_ranked_by_overdue_burden() {
        let children = cohort();

        let priorities = priority_children(&children, 10);
        assert_eq!(priorities.len(), 3);
        assert_eq!(priorities[0].name, "Dayo Ojo");
        assert_eq!(priorities[0].overdue_count, 12);
        assert_eq!(priorities[1].name, "Bola Ade");
        assert_eq!(priorities[1].overdue_count, 9);
        assert_eq!(priorities[2].name, "Chioma Eze");
        assert_eq!(priorities[2].overdue_count, 2);

        // The limit truncates, and children with nothing overdue never appear
        let top = priority_children(&children, 2);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|p| p.name != "Ada Obi"));
    }

    #[test]
    fn test_caregiver_distribution() {
        let children = cohort();

        let distribution = caregiver_distribution(&children, 5);
        assert_eq!(
            distribution,
            vec![
                ("Linda Davis".to_string(), 2),
                ("Sarah Johnson".to_string(), 2),
            ]
        );

        let top = caregiver_distribution(&children, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].0, "Linda Davis");
    }
}
