use crate::api::{ApiError, Organization, Shift};
use crate::components::InlineErrorMessage;
use crate::pages::shifts::repository::ShiftRepository;
use crate::pages::shifts::utils::{weekday_label, ShiftFormState};
use leptos::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";
const LABEL_CLASS: &str = "block text-sm font-medium text-fg-muted mb-1";

/// Create/edit modal. Validation runs client-side first and a request is
/// only sent once every field passes.
#[component]
pub fn ShiftFormModal(
    shift: Option<Shift>,
    organizations: Resource<u32, Result<Vec<Organization>, ApiError>>,
    repository: ShiftRepository,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let state = ShiftFormState::new(shift.as_ref());
    let saving = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);

    let heading = if state.is_edit() {
        "シフトを編集"
    } else {
        "シフトを追加"
    };
    let submit_label = move || {
        if saving.get() {
            "保存中..."
        } else if state.is_edit() {
            "更新"
        } else {
            "作成"
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let payload = match state.to_payload() {
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
            let result = match state.shift_id() {
                Some(id) => repository.update_shift(id, payload).await,
                None => repository.create_shift(payload).await,
            };
            saving.set(false);
            match result {
                Ok(_) => on_saved.call(()),
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
                class="relative z-[61] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6"
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
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class=LABEL_CLASS>"組織"</label>
                            <select
                                class=INPUT_CLASS
                                prop:value=move || state.organization_id_signal().get()
                                on:change=move |ev| {
                                    state.organization_id_signal().set(event_target_value(&ev))
                                }
                            >
                                <option value="">"選択してください"</option>
                                {move || {
                                    organizations
                                        .get()
                                        .and_then(Result::ok)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|org: Organization| {
                                            view! {
                                                <option value=org.organization_id.to_string()>
                                                    {org.organization_name}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"シフトコード"</label>
                            <input
                                type="text"
                                class=INPUT_CLASS
                                placeholder="GEN"
                                prop:value=move || state.code_signal().get()
                                on:input=move |ev| state.code_signal().set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"シフト名"</label>
                        <input
                            type="text"
                            class=INPUT_CLASS
                            placeholder="日勤"
                            prop:value=move || state.name_signal().get()
                            on:input=move |ev| state.name_signal().set(event_target_value(&ev))
                        />
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label class=LABEL_CLASS>"開始時刻"</label>
                            <input
                                type="time"
                                class=INPUT_CLASS
                                prop:value=move || state.start_time_signal().get()
                                on:input=move |ev| {
                                    state.start_time_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"終了時刻"</label>
                            <input
                                type="time"
                                class=INPUT_CLASS
                                prop:value=move || state.end_time_signal().get()
                                on:input=move |ev| {
                                    state.end_time_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                    <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                        <div>
                            <label class=LABEL_CLASS>"猶予(分)"</label>
                            <input
                                type="number"
                                min="0"
                                max="60"
                                class=INPUT_CLASS
                                prop:value=move || state.grace_minutes_signal().get()
                                on:input=move |ev| {
                                    state.grace_minutes_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"半日(時間)"</label>
                            <input
                                type="number"
                                min="0"
                                max="12"
                                step="0.5"
                                class=INPUT_CLASS
                                prop:value=move || state.half_day_hours_signal().get()
                                on:input=move |ev| {
                                    state.half_day_hours_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"所定(時間)"</label>
                            <input
                                type="number"
                                min="0"
                                max="24"
                                step="0.5"
                                class=INPUT_CLASS
                                prop:value=move || state.full_day_hours_signal().get()
                                on:input=move |ev| {
                                    state.full_day_hours_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS>"休憩(分)"</label>
                            <input
                                type="number"
                                min="0"
                                max="240"
                                class=INPUT_CLASS
                                prop:value=move || state.break_minutes_signal().get()
                                on:input=move |ev| {
                                    state.break_minutes_signal().set(event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"週休日"</label>
                        <div class="flex gap-2">
                            {(0u8..7)
                                .map(|day| {
                                    let selected = create_memo(move |_| {
                                        state.week_off_days_signal().get().contains(&day)
                                    });
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if selected.get() {
                                                    "h-9 w-9 rounded-full text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                                } else {
                                                    "h-9 w-9 rounded-full text-sm bg-surface-muted text-fg-muted hover:text-fg"
                                                }
                                            }
                                            on:click=move |_| state.toggle_week_off_day(day)
                                        >
                                            {weekday_label(day)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex gap-6">
                        <label class="inline-flex items-center gap-2 text-sm text-fg">
                            <input
                                type="checkbox"
                                prop:checked=move || state.is_night_shift_signal().get()
                                on:change=move |ev| {
                                    state.is_night_shift_signal().set(event_target_checked(&ev))
                                }
                            />
                            "夜勤シフト"
                        </label>
                        <label class="inline-flex items-center gap-2 text-sm text-fg">
                            <input
                                type="checkbox"
                                prop:checked=move || state.is_flexible_signal().get()
                                on:change=move |ev| {
                                    state.is_flexible_signal().set(event_target_checked(&ev))
                                }
                            />
                            "フレックス"
                        </label>
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"備考"</label>
                        <textarea
                            class=INPUT_CLASS
                            rows="2"
                            prop:value=move || state.description_signal().get()
                            on:input=move |ev| {
                                state.description_signal().set(event_target_value(&ev))
                            }
                        ></textarea>
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
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
