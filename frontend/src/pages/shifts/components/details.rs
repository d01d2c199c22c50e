use crate::api::{ApiError, Shift, ShiftAssignment};
use crate::components::{ConfirmDialog, InlineErrorMessage, LoadingSpinner};
use crate::pages::shifts::repository::ShiftRepository;
use crate::pages::shifts::utils::week_off_summary;
use crate::utils::time::display_time;
use leptos::*;

fn assignment_period(assignment: &ShiftAssignment) -> String {
    match assignment.effective_to {
        Some(to) => format!(
            "{} 〜 {}",
            assignment.effective_from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d")
        ),
        None => format!("{} 〜", assignment.effective_from.format("%Y-%m-%d")),
    }
}

/// Read-only shift facts plus the assignment history. Only rows the
/// backend marks current offer removal; `on_changed` tells the parent a
/// removal happened so the list can refresh its counts.
#[component]
pub fn ShiftDetailsModal(
    shift: Shift,
    repository: ShiftRepository,
    on_changed: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let shift_id = shift.id;
    let reload = create_rw_signal(0u32);
    let error = create_rw_signal(None::<ApiError>);
    let notice = create_rw_signal(None::<String>);
    let pending_removal = create_rw_signal(None::<ShiftAssignment>);

    let repo_assignments = repository.clone();
    let assignments_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_assignments.clone();
            async move { repo.list_shift_assignments(shift_id).await }
        },
    );

    let repo_remove = repository.clone();
    let remove_action = create_action(move |assignment_id: &i64| {
        let repo = repo_remove.clone();
        let assignment_id = *assignment_id;
        async move { repo.remove_assignment(assignment_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = remove_action.value().get() {
            match result {
                Ok(()) => {
                    notice.set(Some("割当を解除しました。".to_string()));
                    error.set(None);
                    on_changed.call(());
                }
                Err(err) => {
                    error.set(Some(err));
                    notice.set(None);
                }
            }
            reload.update(|token| *token += 1);
        }
    });

    let confirm_open = Signal::derive(move || pending_removal.get().is_some());
    let confirm_message = Signal::derive(move || {
        pending_removal
            .get()
            .map(|assignment| {
                format!(
                    "{} さんの割当を解除しますか？",
                    assignment.employee_name
                )
            })
            .unwrap_or_default()
    });
    let on_confirm_removal = Callback::new(move |_| {
        if let Some(assignment) = pending_removal.get_untracked() {
            remove_action.dispatch(assignment.id);
        }
        pending_removal.set(None);
    });
    let on_cancel_removal = Callback::new(move |_| pending_removal.set(None));

    let time_range = format!(
        "{} 〜 {}",
        display_time(&shift.start_time),
        display_time(&shift.end_time)
    );
    let week_off = week_off_summary(&shift.week_off_days);
    let description = shift.description.clone().unwrap_or_default();
    let heading = format!("{} の詳細", shift.name);

    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="閉じる"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class="relative z-[61] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-start justify-between">
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
                <dl class="grid grid-cols-2 gap-x-6 gap-y-2 text-sm">
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"コード"</dt>
                        <dd class="font-mono text-fg">{shift.code.clone()}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"勤務時間"</dt>
                        <dd class="text-fg">{time_range}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"猶予"</dt>
                        <dd class="text-fg">{format!("{}分", shift.grace_minutes)}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"休憩"</dt>
                        <dd class="text-fg">{format!("{}分", shift.break_minutes)}</dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"半日/所定"</dt>
                        <dd class="text-fg">
                            {format!("{}h / {}h", shift.half_day_hours, shift.full_day_hours)}
                        </dd>
                    </div>
                    <div class="flex justify-between">
                        <dt class="text-fg-muted">"週休"</dt>
                        <dd class="text-fg">{week_off}</dd>
                    </div>
                </dl>
                <Show when=move || !description.is_empty()>
                    <p class="text-sm text-fg-muted">{shift.description.clone().unwrap_or_default()}</p>
                </Show>
                <InlineErrorMessage error={error.into()} />
                <Show when=move || notice.get().is_some()>
                    <p class="text-sm text-status-success-text">
                        {move || notice.get().unwrap_or_default()}
                    </p>
                </Show>
                <div>
                    <h3 class="text-sm font-semibold text-fg mb-2">"割当履歴"</h3>
                    {move || match assignments_resource.get() {
                        None => view! { <LoadingSpinner/> }.into_view(),
                        Some(Err(err)) => view! {
                            <p class="text-sm text-status-error-text">{err.to_string()}</p>
                        }
                        .into_view(),
                        Some(Ok(assignments)) if assignments.is_empty() => view! {
                            <p class="text-sm text-fg-muted">"割当はまだありません。"</p>
                        }
                        .into_view(),
                        Some(Ok(assignments)) => view! {
                            <ul class="divide-y divide-border rounded-md border border-border">
                                {assignments
                                    .into_iter()
                                    .map(|assignment| {
                                        let period = assignment_period(&assignment);
                                        let is_current = assignment.is_current;
                                        let code = assignment.employee_code.clone().unwrap_or_default();
                                        let name = assignment.employee_name.clone();
                                        let for_removal = assignment.clone();
                                        view! {
                                            <li class="flex items-center justify-between gap-3 p-3">
                                                <div>
                                                    <p class="text-sm text-fg">
                                                        {name}
                                                        <span class="ml-2 text-xs font-mono text-fg-muted">{code}</span>
                                                    </p>
                                                    <p class="text-xs text-fg-muted">{period}</p>
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    {if is_current {
                                                        view! {
                                                            <span class="inline-flex items-center rounded bg-status-success-bg px-2 py-0.5 text-xs text-status-success-text">
                                                                "適用中"
                                                            </span>
                                                            <button
                                                                type="button"
                                                                class="text-sm px-3 py-1.5 rounded-md text-action-danger-text hover:bg-action-danger-bg-hover"
                                                                on:click=move |_| {
                                                                    pending_removal.set(Some(for_removal.clone()))
                                                                }
                                                            >
                                                                "解除"
                                                            </button>
                                                        }
                                                        .into_view()
                                                    } else {
                                                        view! {
                                                            <span class="inline-flex items-center rounded bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">
                                                                "終了"
                                                            </span>
                                                        }
                                                        .into_view()
                                                    }}
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
            <ConfirmDialog
                is_open=confirm_open
                title="割当の解除"
                message=confirm_message
                on_confirm=on_confirm_removal
                on_cancel=on_cancel_removal
                confirm_label="解除する"
                destructive=true
            />
        </div>
    }
}
