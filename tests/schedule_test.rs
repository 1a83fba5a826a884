#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use vaxtrack::error::VaxTrackError;
    use vaxtrack::models::{DoseRecord, DoseStatus};
    use vaxtrack::schedule::{
        Calendar, DoseOffset, DoseRule, completion_rate, generate_schedule, npi_calendar,
        recompute_status,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_record_per_rule_in_table_order() {
        let schedule = generate_schedule(date(2024, 2, 15), date(2024, 2, 15));

        assert_eq!(schedule.len(), npi_calendar().len());
        for (record, rule) in schedule.iter().zip(npi_calendar().rules()) {
            assert_eq!(record.name, rule.name);
            assert!(record.is_consistent());
        }
    }

    #[test]
    fn test_birth_doses_completed_on_registration_day() {
        let dob = date(2024, 2, 15);
        let schedule = generate_schedule(dob, dob);

        // BCG and Hepatitis B are at-birth doses
        for record in &schedule[..2] {
            assert_eq!(record.status, DoseStatus::Completed);
            assert_eq!(record.administered_on, Some(dob));
            assert_eq!(record.due_on, dob);
        }

        // The 6-week doses are due, not completed
        let opv1 = &schedule[2];
        assert_eq!(opv1.name, "OPV (1st dose)");
        assert_eq!(opv1.status, DoseStatus::Due);
        assert_eq!(opv1.due_on, date(2024, 3, 28));
        assert_eq!(opv1.administered_on, None);
    }

    #[test]
    fn test_reference_on_due_date_is_due_not_overdue() {
        let dob = date(2024, 1, 1);

        // The 9-month doses fall due exactly on the reference date
        let schedule = generate_schedule(dob, date(2024, 10, 1));
        let measles = schedule.iter().find(|d| d.name == "Measles (1st dose)").unwrap();
        let yellow_fever = schedule.iter().find(|d| d.name == "Yellow Fever").unwrap();
        assert_eq!(measles.due_on, date(2024, 10, 1));
        assert_eq!(measles.status, DoseStatus::Due);
        assert_eq!(yellow_fever.status, DoseStatus::Due);

        // One day later they flip to overdue
        let schedule = generate_schedule(dob, date(2024, 10, 2));
        let measles = schedule.iter().find(|d| d.name == "Measles (1st dose)").unwrap();
        assert_eq!(measles.status, DoseStatus::Overdue);
    }

    #[test]
    fn test_overdue_requires_strictly_later_reference() {
        let dob = date(2024, 1, 1);
        let schedule = generate_schedule(dob, date(2024, 2, 13));

        // 6-week doses fell due 2024-02-12
        let opv1 = schedule.iter().find(|d| d.name == "OPV (1st dose)").unwrap();
        assert_eq!(opv1.due_on, date(2024, 2, 12));
        assert_eq!(opv1.status, DoseStatus::Overdue);

        // 10-week doses are still ahead
        let opv2 = schedule.iter().find(|d| d.name == "OPV (2nd dose)").unwrap();
        assert_eq!(opv2.due_on, date(2024, 3, 11));
        assert_eq!(opv2.status, DoseStatus::Due);
    }

    #[test]
    fn test_future_birth_date_is_all_due() {
        let schedule = generate_schedule(date(2025, 1, 1), date(2024, 6, 1));

        assert_eq!(schedule.len(), npi_calendar().len());
        for record in &schedule {
            assert_eq!(record.status, DoseStatus::Due);
            assert_eq!(record.administered_on, None);
        }
    }

    #[test]
    fn test_month_end_birth_date_rolls_forward() {
        let calendar = Calendar::new(vec![DoseRule::new(
            "Measles (1st dose)",
            DoseOffset::Months(9),
        )])
        .unwrap();

        // February 2025 has 28 days, so the 31st rolls 3 days into March
        let schedule = calendar.generate(date(2024, 5, 31), date(2024, 5, 31));
        assert_eq!(schedule[0].due_on, date(2025, 3, 3));

        // October has 31 days, no rollover
        let schedule = calendar.generate(date(2024, 1, 31), date(2024, 1, 31));
        assert_eq!(schedule[0].due_on, date(2024, 10, 31));
    }

    #[test]
    fn test_completion_rate_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0);
    }

    #[test]
    fn test_completion_rate_rounds_half_away_from_zero() {
        let mut doses: Vec<DoseRecord> = (0..7)
            .map(|i| DoseRecord::due(format!("dose {i}"), date(2024, 6, 1)))
            .collect();
        for dose in doses.iter_mut().take(3) {
            dose.mark_administered(date(2024, 6, 1));
        }

        // 3 of 7 is 42.857...%, rounded up
        assert_eq!(completion_rate(&doses), 43);
    }

    #[test]
    fn test_completion_rate_is_monotonic() {
        let mut doses: Vec<DoseRecord> = (0..7)
            .map(|i| DoseRecord::due(format!("dose {i}"), date(2024, 6, 1)))
            .collect();

        let mut previous = completion_rate(&doses);
        for i in 0..doses.len() {
            doses[i].mark_administered(date(2024, 6, 2));
            let current = completion_rate(&doses);
            assert!(current >= previous);
            previous = current;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_recompute_flips_due_to_overdue() {
        let dob = date(2024, 2, 15);
        let schedule = generate_schedule(dob, dob);

        // Six weeks later plus a few days the first series is overdue
        let refreshed = recompute_status(&schedule, date(2024, 4, 1));
        let opv1 = refreshed.iter().find(|d| d.name == "OPV (1st dose)").unwrap();
        assert_eq!(opv1.status, DoseStatus::Overdue);

        // 10-week doses are still due
        let opv2 = refreshed.iter().find(|d| d.name == "OPV (2nd dose)").unwrap();
        assert_eq!(opv2.due_on, date(2024, 4, 25));
        assert_eq!(opv2.status, DoseStatus::Due);

        // Completed birth doses pass through untouched
        assert_eq!(refreshed[0].status, DoseStatus::Completed);
        assert_eq!(refreshed[0].administered_on, Some(dob));
    }

    #[test]
    fn test_recompute_rederives_in_both_directions() {
        let dob = date(2024, 2, 15);
        let stale = recompute_status(&generate_schedule(dob, dob), date(2024, 4, 1));

        // Rewinding the reference date turns overdue back into due
        let rewound = recompute_status(&stale, date(2024, 3, 1));
        let opv1 = rewound.iter().find(|d| d.name == "OPV (1st dose)").unwrap();
        assert_eq!(opv1.status, DoseStatus::Due);
    }

    #[test]
    fn test_calendar_rejects_out_of_order_rules() {
        let result = Calendar::new(vec![
            DoseRule::new("Measles (1st dose)", DoseOffset::Months(9)),
            DoseRule::new("OPV (1st dose)", DoseOffset::Weeks(6)),
        ]);

        assert!(matches!(result, Err(VaxTrackError::Calendar(_))));
    }

    #[test]
    fn test_empty_calendar_is_legal() {
        let calendar = Calendar::new(Vec::new()).unwrap();
        assert!(calendar.is_empty());

        let schedule = calendar.generate(date(2024, 1, 1), date(2024, 6, 1));
        assert!(schedule.is_empty());
        assert_eq!(completion_rate(&schedule), 0);
    }
}
