#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{Employee, Shift, ShiftAssignment};
    use chrono::NaiveDate;

    pub fn day_shift(id: i64) -> Shift {
        Shift {
            id,
            organization_id: 2,
            organization_name: Some("本社".into()),
            name: "日勤".into(),
            code: "GEN".into(),
            start_time: "09:00:00".into(),
            end_time: "18:00:00".into(),
            grace_minutes: 10,
            half_day_hours: 4.0,
            full_day_hours: 8.0,
            break_minutes: 60,
            week_off_days: vec![0, 6],
            is_night_shift: false,
            is_flexible: false,
            description: None,
            is_active: true,
            assigned_employee_count: 3,
        }
    }

    pub fn employee(id: i64, first: &str, last: Option<&str>) -> Employee {
        Employee {
            id,
            first_name: first.into(),
            last_name: last.map(Into::into),
            employee_code: Some(format!("EMP{:03}", id)),
            email: Some(format!("emp{}@example.com", id)),
            department_name: Some("開発部".into()),
            designation_name: None,
            is_active: true,
        }
    }

    pub fn assignment(id: i64, is_current: bool) -> ShiftAssignment {
        ShiftAssignment {
            id,
            shift_id: 1,
            employee_id: 7,
            employee_name: "Asha Rao".into(),
            employee_code: Some("EMP007".into()),
            effective_from: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            effective_to: if is_current {
                None
            } else {
                NaiveDate::from_ymd_opt(2026, 8, 20)
            },
            is_current,
        }
    }
}
