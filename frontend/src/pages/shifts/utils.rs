use crate::api::{
    ApiError, AssignShiftRequest, Employee, FieldError, Shift, ShiftListOptions, ShiftPayload,
};
use crate::utils::time::{format_date_input, normalize_time_input, parse_date_input, today_local};
use leptos::*;

pub fn weekday_label(idx: u8) -> &'static str {
    match idx {
        0 => "日",
        1 => "月",
        2 => "火",
        3 => "水",
        4 => "木",
        5 => "金",
        6 => "土",
        _ => "-",
    }
}

pub fn week_off_summary(days: &[u8]) -> String {
    if days.is_empty() {
        return "なし".to_string();
    }
    days.iter()
        .map(|day| weekday_label(*day))
        .collect::<Vec<_>>()
        .join("・")
}

/// Signal-backed state for the create/edit form. Inputs stay raw strings
/// until `to_payload` normalizes and validates them all at once.
#[derive(Clone, Copy)]
pub struct ShiftFormState {
    shift_id: Option<i64>,
    organization_id: RwSignal<String>,
    name: RwSignal<String>,
    code: RwSignal<String>,
    start_time: RwSignal<String>,
    end_time: RwSignal<String>,
    grace_minutes: RwSignal<String>,
    half_day_hours: RwSignal<String>,
    full_day_hours: RwSignal<String>,
    break_minutes: RwSignal<String>,
    week_off_days: RwSignal<Vec<u8>>,
    is_night_shift: RwSignal<bool>,
    is_flexible: RwSignal<bool>,
    description: RwSignal<String>,
}

impl ShiftFormState {
    pub fn new(existing: Option<&Shift>) -> Self {
        match existing {
            Some(shift) => Self {
                shift_id: Some(shift.id),
                organization_id: create_rw_signal(shift.organization_id.to_string()),
                name: create_rw_signal(shift.name.clone()),
                code: create_rw_signal(shift.code.clone()),
                start_time: create_rw_signal(shift.start_time.clone()),
                end_time: create_rw_signal(shift.end_time.clone()),
                grace_minutes: create_rw_signal(shift.grace_minutes.to_string()),
                half_day_hours: create_rw_signal(shift.half_day_hours.to_string()),
                full_day_hours: create_rw_signal(shift.full_day_hours.to_string()),
                break_minutes: create_rw_signal(shift.break_minutes.to_string()),
                week_off_days: create_rw_signal(shift.week_off_days.clone()),
                is_night_shift: create_rw_signal(shift.is_night_shift),
                is_flexible: create_rw_signal(shift.is_flexible),
                description: create_rw_signal(shift.description.clone().unwrap_or_default()),
            },
            None => Self {
                shift_id: None,
                organization_id: create_rw_signal(String::new()),
                name: create_rw_signal(String::new()),
                code: create_rw_signal(String::new()),
                start_time: create_rw_signal(String::new()),
                end_time: create_rw_signal(String::new()),
                grace_minutes: create_rw_signal("0".to_string()),
                half_day_hours: create_rw_signal("4".to_string()),
                full_day_hours: create_rw_signal("8".to_string()),
                break_minutes: create_rw_signal("60".to_string()),
                week_off_days: create_rw_signal(Vec::new()),
                is_night_shift: create_rw_signal(false),
                is_flexible: create_rw_signal(false),
                description: create_rw_signal(String::new()),
            },
        }
    }

    pub fn shift_id(&self) -> Option<i64> {
        self.shift_id
    }

    pub fn is_edit(&self) -> bool {
        self.shift_id.is_some()
    }

    pub fn organization_id_signal(&self) -> RwSignal<String> {
        self.organization_id
    }

    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn code_signal(&self) -> RwSignal<String> {
        self.code
    }

    pub fn start_time_signal(&self) -> RwSignal<String> {
        self.start_time
    }

    pub fn end_time_signal(&self) -> RwSignal<String> {
        self.end_time
    }

    pub fn grace_minutes_signal(&self) -> RwSignal<String> {
        self.grace_minutes
    }

    pub fn half_day_hours_signal(&self) -> RwSignal<String> {
        self.half_day_hours
    }

    pub fn full_day_hours_signal(&self) -> RwSignal<String> {
        self.full_day_hours
    }

    pub fn break_minutes_signal(&self) -> RwSignal<String> {
        self.break_minutes
    }

    pub fn week_off_days_signal(&self) -> RwSignal<Vec<u8>> {
        self.week_off_days
    }

    pub fn is_night_shift_signal(&self) -> RwSignal<bool> {
        self.is_night_shift
    }

    pub fn is_flexible_signal(&self) -> RwSignal<bool> {
        self.is_flexible
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    /// Adds the day if absent, removes it if present. The stored set stays
    /// sorted and free of duplicates.
    pub fn toggle_week_off_day(&self, day: u8) {
        if day > 6 {
            return;
        }
        self.week_off_days.update(|days| {
            if let Some(pos) = days.iter().position(|d| *d == day) {
                days.remove(pos);
            } else {
                days.push(day);
                days.sort_unstable();
                days.dedup();
            }
        });
    }

    /// Validates every field and reports all failures together. On success
    /// the payload carries the normalized values: upper-cased code,
    /// "HH:MM:SS" times and a trimmed optional description.
    pub fn to_payload(&self) -> Result<ShiftPayload, ApiError> {
        let mut errors = Vec::new();

        let organization_id = match self.organization_id.get().trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                errors.push(FieldError::new("organization", "組織を選択してください。"));
                0
            }
        };

        let name = self.name.get().trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", "シフト名を入力してください。"));
        }

        let code = self.code.get().trim().to_uppercase();
        if code.is_empty() {
            errors.push(FieldError::new("code", "シフトコードを入力してください。"));
        }

        let start_time = match normalize_time_input(&self.start_time.get()) {
            Some(value) => value,
            None => {
                errors.push(FieldError::new("start_time", "開始時刻を入力してください。"));
                String::new()
            }
        };

        let end_time = match normalize_time_input(&self.end_time.get()) {
            Some(value) => value,
            None => {
                errors.push(FieldError::new("end_time", "終了時刻を入力してください。"));
                String::new()
            }
        };

        let grace_minutes = match self.grace_minutes.get().trim().parse::<i32>() {
            Ok(value) if (0..=60).contains(&value) => value,
            _ => {
                errors.push(FieldError::new(
                    "grace_minutes",
                    "猶予時間は0〜60分で入力してください。",
                ));
                0
            }
        };

        let half_day_hours = match self.half_day_hours.get().trim().parse::<f64>() {
            Ok(value) if value > 0.0 && value <= 12.0 => value,
            _ => {
                errors.push(FieldError::new(
                    "half_day_hours",
                    "半日勤務時間は0より大きく12時間以内で入力してください。",
                ));
                0.0
            }
        };

        let full_day_hours = match self.full_day_hours.get().trim().parse::<f64>() {
            Ok(value) if value > 0.0 && value <= 24.0 => value,
            _ => {
                errors.push(FieldError::new(
                    "full_day_hours",
                    "所定勤務時間は0より大きく24時間以内で入力してください。",
                ));
                0.0
            }
        };

        let break_minutes = match self.break_minutes.get().trim().parse::<i32>() {
            Ok(value) if (0..=240).contains(&value) => value,
            _ => {
                errors.push(FieldError::new(
                    "break_minutes",
                    "休憩時間は0〜240分で入力してください。",
                ));
                0
            }
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let description = {
            let raw = self.description.get();
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(ShiftPayload {
            organization_id,
            name,
            code,
            start_time,
            end_time,
            grace_minutes,
            half_day_hours,
            full_day_hours,
            break_minutes,
            week_off_days: self.week_off_days.get(),
            is_night_shift: self.is_night_shift.get(),
            is_flexible: self.is_flexible.get(),
            description,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftFilterSnapshot {
    pub organization_id: String,
    pub is_active: String,
    pub page: u32,
    pub page_size: u32,
}

impl ShiftFilterSnapshot {
    pub fn to_options(&self) -> ShiftListOptions {
        ShiftListOptions {
            page: self.page.to_string(),
            page_size: self.page_size.to_string(),
            organization_id: self.organization_id.clone(),
            is_active: self.is_active.clone(),
        }
    }
}

/// Server-side filters plus the client-side search box. Changing a server
/// filter snaps back to page 1; the search term is not part of the snapshot
/// so typing never triggers a refetch.
#[derive(Clone, Copy)]
pub struct ShiftFilterState {
    organization: RwSignal<String>,
    is_active: RwSignal<String>,
    page: RwSignal<u32>,
    page_size: u32,
    search: RwSignal<String>,
}

impl ShiftFilterState {
    pub fn new() -> Self {
        Self {
            organization: create_rw_signal("all".to_string()),
            is_active: create_rw_signal("all".to_string()),
            page: create_rw_signal(1),
            page_size: 9,
            search: create_rw_signal(String::new()),
        }
    }

    pub fn organization_signal(&self) -> RwSignal<String> {
        self.organization
    }

    pub fn is_active_signal(&self) -> RwSignal<String> {
        self.is_active
    }

    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn page_signal(&self) -> RwSignal<u32> {
        self.page
    }

    pub fn set_organization(&self, value: String) {
        self.organization.set(value);
        self.page.set(1);
    }

    pub fn set_is_active(&self, value: String) {
        self.is_active.set(value);
        self.page.set(1);
    }

    pub fn set_page(&self, page: u32) {
        self.page.set(page.max(1));
    }

    pub fn snapshot(&self) -> ShiftFilterSnapshot {
        ShiftFilterSnapshot {
            organization_id: self.organization.get(),
            is_active: self.is_active.get(),
            page: self.page.get(),
            page_size: self.page_size,
        }
    }
}

impl Default for ShiftFilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match over name, code and organization name.
/// Applies to the already-fetched page only.
pub fn shift_matches(shift: &Shift, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut haystacks = vec![shift.name.to_lowercase(), shift.code.to_lowercase()];
    if let Some(org) = &shift.organization_name {
        haystacks.push(org.to_lowercase());
    }
    haystacks.iter().any(|value| value.contains(&needle))
}

/// Narrows the assignment picker. An empty term keeps everyone.
pub fn filter_employees(employees: &[Employee], term: &str) -> Vec<Employee> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            [
                Some(&employee.first_name),
                employee.last_name.as_ref(),
                employee.employee_code.as_ref(),
                employee.email.as_ref(),
                employee.department_name.as_ref(),
            ]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// State for the assignment modal. The start date defaults to today.
#[derive(Clone, Copy)]
pub struct AssignmentFormState {
    employee_id: RwSignal<String>,
    effective_from: RwSignal<String>,
    effective_to: RwSignal<String>,
    search: RwSignal<String>,
}

impl AssignmentFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            effective_from: create_rw_signal(format_date_input(today_local())),
            effective_to: create_rw_signal(String::new()),
            search: create_rw_signal(String::new()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn effective_from_signal(&self) -> RwSignal<String> {
        self.effective_from
    }

    pub fn effective_to_signal(&self) -> RwSignal<String> {
        self.effective_to
    }

    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn to_payload(&self, shift_id: i64) -> Result<AssignShiftRequest, ApiError> {
        let mut errors = Vec::new();

        let employee_id = match self.employee_id.get().trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                errors.push(FieldError::new("employee", "従業員を選択してください。"));
                0
            }
        };

        let effective_from = match parse_date_input(&self.effective_from.get()) {
            Some(date) => date,
            None => {
                errors.push(FieldError::new(
                    "effective_from",
                    "適用開始日を入力してください。",
                ));
                today_local()
            }
        };

        let effective_to = {
            let raw = self.effective_to.get();
            if raw.trim().is_empty() {
                None
            } else {
                match parse_date_input(&raw) {
                    Some(date) if date >= effective_from => Some(date),
                    Some(_) => {
                        errors.push(FieldError::new(
                            "effective_to",
                            "適用終了日は開始日以降を指定してください。",
                        ));
                        None
                    }
                    None => {
                        errors.push(FieldError::new(
                            "effective_to",
                            "適用終了日は YYYY-MM-DD 形式で入力してください。",
                        ));
                        None
                    }
                }
            }
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(AssignShiftRequest {
            employee_id,
            shift_id,
            effective_from,
            effective_to,
        })
    }
}

impl Default for AssignmentFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::fixtures;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    fn filled_form() -> ShiftFormState {
        let state = ShiftFormState::new(None);
        state.organization_id_signal().set("2".into());
        state.name_signal().set("日勤".into());
        state.code_signal().set("gen".into());
        state.start_time_signal().set("09:00".into());
        state.end_time_signal().set("18:00".into());
        state.grace_minutes_signal().set("10".into());
        state.half_day_hours_signal().set("4".into());
        state.full_day_hours_signal().set("8".into());
        state.break_minutes_signal().set("60".into());
        state
    }

    fn field_names(error: ApiError) -> Vec<&'static str> {
        match error {
            ApiError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn empty_form_reports_every_failing_field_at_once() {
        with_runtime(|| {
            let state = ShiftFormState::new(None);
            state.grace_minutes_signal().set(String::new());
            state.half_day_hours_signal().set(String::new());
            state.full_day_hours_signal().set(String::new());
            state.break_minutes_signal().set(String::new());
            let fields = field_names(state.to_payload().unwrap_err());
            for expected in [
                "organization",
                "name",
                "code",
                "start_time",
                "end_time",
                "grace_minutes",
                "half_day_hours",
                "full_day_hours",
                "break_minutes",
            ] {
                assert!(fields.contains(&expected), "missing {}", expected);
            }
        });
    }

    #[test]
    fn numeric_bounds_are_enforced() {
        with_runtime(|| {
            let state = filled_form();

            state.grace_minutes_signal().set("61".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["grace_minutes"]
            );
            state.grace_minutes_signal().set("-1".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["grace_minutes"]
            );
            state.grace_minutes_signal().set("0".into());
            assert!(state.to_payload().is_ok());

            state.half_day_hours_signal().set("0".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["half_day_hours"]
            );
            state.half_day_hours_signal().set("12.5".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["half_day_hours"]
            );
            state.half_day_hours_signal().set("12".into());
            assert!(state.to_payload().is_ok());

            state.full_day_hours_signal().set("25".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["full_day_hours"]
            );
            state.full_day_hours_signal().set("24".into());
            assert!(state.to_payload().is_ok());

            state.break_minutes_signal().set("241".into());
            assert_eq!(
                field_names(state.to_payload().unwrap_err()),
                vec!["break_minutes"]
            );
            state.break_minutes_signal().set("240".into());
            assert!(state.to_payload().is_ok());
        });
    }

    #[test]
    fn payload_normalizes_code_times_and_description() {
        with_runtime(|| {
            let state = filled_form();
            state.description_signal().set("   ".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.code, "GEN");
            assert_eq!(payload.start_time, "09:00:00");
            assert_eq!(payload.end_time, "18:00:00");
            assert_eq!(payload.description, None);
            assert_eq!(payload.organization_id, 2);

            // Re-submitting an already-normalized code leaves it unchanged.
            state.code_signal().set(payload.code.clone());
            let again = state.to_payload().unwrap();
            assert_eq!(again.code, "GEN");
        });
    }

    #[test]
    fn week_off_toggle_keeps_days_sorted_and_unique() {
        with_runtime(|| {
            let state = ShiftFormState::new(None);
            state.toggle_week_off_day(5);
            state.toggle_week_off_day(1);
            state.toggle_week_off_day(3);
            assert_eq!(state.week_off_days_signal().get_untracked(), vec![1, 3, 5]);

            state.toggle_week_off_day(3);
            assert_eq!(state.week_off_days_signal().get_untracked(), vec![1, 5]);

            state.toggle_week_off_day(0);
            assert_eq!(state.week_off_days_signal().get_untracked(), vec![0, 1, 5]);

            // Out-of-range days are ignored.
            state.toggle_week_off_day(7);
            assert_eq!(state.week_off_days_signal().get_untracked(), vec![0, 1, 5]);
        });
    }

    #[test]
    fn editing_seeds_state_from_the_existing_shift() {
        with_runtime(|| {
            let shift = fixtures::day_shift(4);
            let state = ShiftFormState::new(Some(&shift));
            assert!(state.is_edit());
            assert_eq!(state.shift_id(), Some(4));
            assert_eq!(state.code_signal().get_untracked(), "GEN");
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.week_off_days, vec![0, 6]);
        });
    }

    #[test]
    fn filter_changes_reset_to_first_page_but_search_does_not() {
        with_runtime(|| {
            let filter = ShiftFilterState::new();
            filter.set_page(3);
            assert_eq!(filter.snapshot().page, 3);

            filter.set_organization("2".into());
            assert_eq!(filter.snapshot().page, 1);

            filter.set_page(2);
            filter.set_is_active("true".into());
            assert_eq!(filter.snapshot().page, 1);

            let before = filter.snapshot();
            filter.search_signal().set("gen".into());
            assert_eq!(filter.snapshot(), before);
        });
    }

    #[test]
    fn snapshot_converts_to_list_options() {
        with_runtime(|| {
            let filter = ShiftFilterState::new();
            filter.set_organization("2".into());
            filter.set_is_active("true".into());
            let options = filter.snapshot().to_options();
            assert_eq!(
                options.to_query(),
                vec![
                    ("page", "1".to_string()),
                    ("pageSize", "9".to_string()),
                    ("organization_id", "2".to_string()),
                    ("is_active", "true".to_string()),
                ]
            );
        });
    }

    #[test]
    fn shift_search_matches_name_code_and_organization() {
        let shift = fixtures::day_shift(1);
        assert!(shift_matches(&shift, ""));
        assert!(shift_matches(&shift, "gen"));
        assert!(shift_matches(&shift, "日勤"));
        assert!(shift_matches(&shift, "本社"));
        assert!(!shift_matches(&shift, "夜勤"));
    }

    #[test]
    fn employee_search_is_case_insensitive_substring() {
        let employees = vec![
            fixtures::employee(7, "Asha", Some("Rao")),
            fixtures::employee(8, "Ken", Some("Sato")),
        ];
        let hits = filter_employees(&employees, "ash");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Asha");

        assert_eq!(filter_employees(&employees, "").len(), 2);
        assert_eq!(filter_employees(&employees, "EMP008").len(), 1);
        assert_eq!(filter_employees(&employees, "開発部").len(), 2);
        assert!(filter_employees(&employees, "nobody").is_empty());
    }

    #[test]
    fn assignment_defaults_start_date_to_today_and_allows_open_end() {
        with_runtime(|| {
            let state = AssignmentFormState::new();
            state.employee_id_signal().set("7".into());
            let payload = state.to_payload(3).unwrap();
            assert_eq!(payload.effective_from, today_local());
            assert_eq!(payload.effective_to, None);
            assert_eq!(payload.shift_id, 3);
        });
    }

    #[test]
    fn assignment_rejects_inverted_date_range() {
        with_runtime(|| {
            let state = AssignmentFormState::new();
            state.employee_id_signal().set("7".into());
            state.effective_from_signal().set("2026-08-23".into());
            state.effective_to_signal().set("2026-08-01".into());
            let fields = field_names(state.to_payload(3).unwrap_err());
            assert_eq!(fields, vec!["effective_to"]);

            state.effective_to_signal().set("2026-08-23".into());
            let payload = state.to_payload(3).unwrap();
            assert_eq!(
                payload.effective_to,
                NaiveDate::from_ymd_opt(2026, 8, 23)
            );
        });
    }

    #[test]
    fn assignment_requires_employee_and_valid_dates() {
        with_runtime(|| {
            let state = AssignmentFormState::new();
            state.effective_from_signal().set("not a date".into());
            let fields = field_names(state.to_payload(3).unwrap_err());
            assert!(fields.contains(&"employee"));
            assert!(fields.contains(&"effective_from"));
        });
    }

    #[test]
    fn week_off_summary_joins_labels() {
        assert_eq!(week_off_summary(&[]), "なし");
        assert_eq!(week_off_summary(&[0, 6]), "日・土");
    }
}
