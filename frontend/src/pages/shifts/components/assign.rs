use crate::api::{ApiError, Employee, Shift};
use crate::components::{InlineErrorMessage, LoadingSpinner};
use crate::pages::shifts::repository::ShiftRepository;
use crate::pages::shifts::utils::{filter_employees, AssignmentFormState};
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";

/// Assigns one employee of the shift's organization to the shift. The
/// picker loads active employees once and narrows client-side.
#[component]
pub fn AssignShiftModal(
    shift: Shift,
    repository: ShiftRepository,
    on_assigned: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = AssignmentFormState::new();
    let saving = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);

    let shift_id = shift.id;
    let organization_id = shift.organization_id;
    let heading = format!("「{}」に従業員を割当", shift.name);

    let repo_employees = repository.clone();
    let employees_resource = create_resource(
        move || organization_id,
        move |organization_id| {
            let repo = repo_employees.clone();
            async move { repo.list_assignable_employees(organization_id).await }
        },
    );

    let filtered = create_memo(move |_| match employees_resource.get() {
        Some(Ok(employees)) => Some(Ok(filter_employees(
            &employees,
            &state.search_signal().get(),
        ))),
        Some(Err(err)) => Some(Err(err)),
        None => None,
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match state.to_payload(shift_id) {
            Ok(payload) => payload,
            Err(validation) => {
                error.set(Some(validation));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let repository = repository.clone();
        spawn_local(async move {
            let result = repository.assign_employee(payload).await;
            saving.set(false);
            match result {
                Ok(_) => on_assigned.call(()),
                Err(err) => error.set(Some(err)),
            }
        });
    };

    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="閉じる"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class="relative z-[61] w-full max-w-lg max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-start justify-between mb-4">
                    <h2 class="text-lg font-semibold text-fg">{heading}</h2>
                    <button
                        type="button"
                        aria-label="閉じる"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>
                <InlineErrorMessage error={error.into()} />
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <input
                            type="search"
                            class=INPUT_CLASS
                            placeholder="氏名・コード・メール・部署で検索"
                            prop:value=move || state.search_signal().get()
                            on:input=move |ev| state.search_signal().set(event_target_value(&ev))
                        />
                    </div>
                    <div class="max-h-64 overflow-y-auto rounded-md border border-border divide-y divide-border">
                        {move || match filtered.get() {
                            None => view! { <LoadingSpinner/> }.into_view(),
                            Some(Err(err)) => view! {
                                <p class="p-3 text-sm text-status-error-text">{err.to_string()}</p>
                            }
                            .into_view(),
                            Some(Ok(employees)) if employees.is_empty() => view! {
                                <p class="p-3 text-sm text-fg-muted">
                                    "該当する従業員がいません。"
                                </p>
                            }
                            .into_view(),
                            Some(Ok(employees)) => employees
                                .into_iter()
                                .map(|employee: Employee| {
                                    let id = employee.id.to_string();
                                    let value = id.clone();
                                    let detail = [
                                        employee.employee_code.clone(),
                                        employee.department_name.clone(),
                                        employee.email.clone(),
                                    ]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" / ");
                                    let radio_value = value.clone();
                                    view! {
                                        <label class="flex items-center gap-3 p-3 cursor-pointer hover:bg-surface-muted">
                                            <input
                                                type="radio"
                                                name="employee"
                                                value=radio_value
                                                prop:checked=move || {
                                                    state.employee_id_signal().get() == id
                                                }
                                                on:change=move |_| {
                                                    state.employee_id_signal().set(value.clone())
                                                }
                                            />
                                            <span class="flex-1">
                                                <span class="block text-sm text-fg">
                                                    {employee.display_name()}
                                                </span>
                                                <span class="block text-xs text-fg-muted">
                                                    {detail}
                                                </span>
                                            </span>
                                        </label>
                                    }
                                })
                                .collect_view(),
                        }}
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1">
                                "適用開始日"
                            </label>
                            <input
                                type="date"
                                class=INPUT_CLASS
                                prop:value=move || state.effective_from_signal().get()
                                on:input=move |ev| {
                                    state.effective_from_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-fg-muted mb-1">
                                "適用終了日(任意)"
                            </label>
                            <input
                                type="date"
                                class=INPUT_CLASS
                                prop:value=move || state.effective_to_signal().get()
                                on:input=move |ev| {
                                    state.effective_to_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                    <div class="flex justify-end gap-2 pt-2 border-t border-border">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_close.call(())
                        >
                            "キャンセル"
                        </button>
                        <button
                            type="submit"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() { "割当中..." } else { "割当" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
