use crate::api::Shift;
use crate::pages::shifts::utils::week_off_summary;
use crate::utils::time::display_time;
use leptos::*;

#[component]
pub fn ShiftCard(
    shift: Shift,
    on_details: Callback<Shift>,
    on_assign: Callback<Shift>,
    on_edit: Callback<Shift>,
    on_delete: Callback<Shift>,
) -> impl IntoView {
    let time_range = format!(
        "{} 〜 {}",
        display_time(&shift.start_time),
        display_time(&shift.end_time)
    );
    let week_off = week_off_summary(&shift.week_off_days);
    let organization = shift.organization_name.clone().unwrap_or_default();
    let assigned = format!("割当人数: {}", shift.assigned_employee_count);
    let is_night_shift = shift.is_night_shift;
    let is_flexible = shift.is_flexible;

    let for_details = shift.clone();
    let for_assign = shift.clone();
    let for_edit = shift.clone();
    let for_delete = shift.clone();

    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-5 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <h3 class="text-base font-semibold text-fg">{shift.name.clone()}</h3>
                    <p class="text-xs text-fg-muted">{organization}</p>
                </div>
                <div class="flex items-center gap-1">
                    <span class="inline-flex items-center rounded bg-surface-muted px-2 py-0.5 text-xs font-mono text-fg">
                        {shift.code.clone()}
                    </span>
                    {if shift.is_active {
                        view! {
                            <span class="inline-flex items-center rounded bg-status-success-bg px-2 py-0.5 text-xs text-status-success-text">
                                "有効"
                            </span>
                        }.into_view()
                    } else {
                        view! {
                            <span class="inline-flex items-center rounded bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">
                                "無効"
                            </span>
                        }.into_view()
                    }}
                </div>
            </div>
            <dl class="text-sm text-fg-muted space-y-1">
                <div class="flex justify-between">
                    <dt>"勤務時間"</dt>
                    <dd class="text-fg">{time_range}</dd>
                </div>
                <div class="flex justify-between">
                    <dt>"週休"</dt>
                    <dd class="text-fg">{week_off}</dd>
                </div>
                <div class="flex justify-between">
                    <dt>{assigned}</dt>
                    <dd class="flex gap-1">
                        <Show when=move || is_night_shift>
                            <span class="inline-flex items-center rounded bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">
                                "夜勤"
                            </span>
                        </Show>
                        <Show when=move || is_flexible>
                            <span class="inline-flex items-center rounded bg-surface-muted px-2 py-0.5 text-xs text-fg-muted">
                                "フレックス"
                            </span>
                        </Show>
                    </dd>
                </div>
            </dl>
            <div class="flex justify-end gap-2 pt-1 border-t border-border">
                <button
                    type="button"
                    class="text-sm px-3 py-1.5 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_details.call(for_details.clone())
                >
                    "詳細"
                </button>
                <button
                    type="button"
                    class="text-sm px-3 py-1.5 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_assign.call(for_assign.clone())
                >
                    "割当"
                </button>
                <button
                    type="button"
                    class="text-sm px-3 py-1.5 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                    on:click=move |_| on_edit.call(for_edit.clone())
                >
                    "編集"
                </button>
                <button
                    type="button"
                    class="text-sm px-3 py-1.5 rounded-md text-action-danger-text hover:bg-action-danger-bg-hover"
                    on:click=move |_| on_delete.call(for_delete.clone())
                >
                    "削除"
                </button>
            </div>
        </div>
    }
}
