use super::components::{AssignShiftModal, ShiftCard, ShiftDetailsModal, ShiftFormModal};
use super::utils::shift_matches;
use super::view_model::{use_shifts_view_model, ShiftsViewModel};
use crate::api::{Organization, Pagination, Shift};
use crate::components::{
    ConfirmDialog, EmptyState, InlineErrorMessage, InlineNotice, LoadingSpinner, PageShell,
};
use leptos::*;

const SELECT_CLASS: &str = "rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg";

#[derive(Clone)]
enum FormTarget {
    Create,
    Edit(Shift),
}

#[component]
pub fn ShiftsPage() -> impl IntoView {
    let vm = use_shifts_view_model();

    view! {
        <PageShell>
            <ShiftsPanel vm=vm/>
        </PageShell>
    }
}

#[component]
fn ShiftsPanel(vm: ShiftsViewModel) -> impl IntoView {
    let form_target = create_rw_signal(None::<FormTarget>);
    let details_for = create_rw_signal(None::<Shift>);
    let assign_for = create_rw_signal(None::<Shift>);

    let filter = vm.filter;
    let pending_delete = vm.pending_delete;
    let shifts_resource = vm.shifts_resource;
    let organizations_resource = vm.organizations_resource;
    let notice = vm.notice;
    let error = vm.error;
    let vm_for_confirm = vm.clone();
    let vm_for_cancel = vm.clone();
    let vm_for_refetch = vm.clone();
    let vm_for_saved = vm.clone();
    let vm_for_assigned = vm.clone();
    let vm_for_removed = vm.clone();
    let repository = vm.repository.clone();
    let repo_for_form = repository.clone();
    let repo_for_assign = repository.clone();
    let repo_for_details = repository;

    // Client-side narrowing applies to the fetched page only; the search
    // term never reaches the backend.
    let page_view = create_memo(move |_| {
        shifts_resource.get().map(|result| {
            result.map(|envelope| {
                let term = filter.search_signal().get();
                let shifts: Vec<Shift> = envelope
                    .data
                    .into_iter()
                    .filter(|shift| shift_matches(shift, &term))
                    .collect();
                (shifts, envelope.pagination)
            })
        })
    });

    let delete_confirm_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|shift| {
                format!(
                    "シフト「{}」を削除しますか？割当済みの従業員がいる場合は削除できません。",
                    shift.name
                )
            })
            .unwrap_or_default()
    });
    let on_confirm_delete = Callback::new(move |_| vm_for_confirm.confirm_delete());
    let on_cancel_delete = Callback::new(move |_| vm_for_cancel.cancel_delete());

    let on_saved = Callback::new(move |_| {
        form_target.set(None);
        notice.set(Some("シフトを保存しました。".to_string()));
        error.set(None);
        vm_for_saved.refetch();
    });
    let on_assigned = Callback::new(move |_| {
        assign_for.set(None);
        notice.set(Some("従業員を割り当てました。".to_string()));
        error.set(None);
        vm_for_assigned.refetch();
    });
    // Removal already refreshed the modal's own history; refresh the list
    // so assigned counts catch up.
    let on_assignment_removed = Callback::new(move |_| vm_for_removed.refetch());

    view! {
        <section class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <h2 class="text-xl font-semibold text-fg">"シフト管理"</h2>
                <div class="flex items-center gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| vm_for_refetch.refetch()
                    >
                        "再取得"
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| form_target.set(Some(FormTarget::Create))
                    >
                        "シフトを追加"
                    </button>
                </div>
            </div>

            <div class="flex flex-wrap items-center gap-3">
                <select
                    class=SELECT_CLASS
                    prop:value=move || filter.organization_signal().get()
                    on:change=move |ev| filter.set_organization(event_target_value(&ev))
                >
                    <option value="all">"すべての組織"</option>
                    {move || {
                        organizations_resource
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
                <select
                    class=SELECT_CLASS
                    prop:value=move || filter.is_active_signal().get()
                    on:change=move |ev| filter.set_is_active(event_target_value(&ev))
                >
                    <option value="all">"すべての状態"</option>
                    <option value="true">"有効のみ"</option>
                    <option value="false">"無効のみ"</option>
                </select>
                <input
                    type="search"
                    class="flex-1 min-w-[200px] rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
                    placeholder="表示中のページを検索"
                    prop:value=move || filter.search_signal().get()
                    on:input=move |ev| filter.search_signal().set(event_target_value(&ev))
                />
            </div>

            <InlineNotice notice={notice.into()} />
            <InlineErrorMessage error={error.into()} />

            {move || match page_view.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => {
                    // A failed fetch shows the banner and no stale cards.
                    let fetch_error = Signal::derive(move || Some(err.clone()));
                    view! { <InlineErrorMessage error=fetch_error /> }.into_view()
                }
                Some(Ok((shifts, pagination))) => view! {
                    <ShiftsGrid
                        shifts=shifts
                        pagination=pagination
                        on_details=Callback::new(move |shift| details_for.set(Some(shift)))
                        on_assign=Callback::new(move |shift| assign_for.set(Some(shift)))
                        on_edit=Callback::new(move |shift| {
                            form_target.set(Some(FormTarget::Edit(shift)))
                        })
                        on_delete=Callback::new(move |shift| pending_delete.set(Some(shift)))
                        on_page=Callback::new(move |page| filter.set_page(page))
                    />
                }
                .into_view(),
            }}

            {move || {
                form_target.get().map(|target| {
                    let shift = match target {
                        FormTarget::Create => None,
                        FormTarget::Edit(shift) => Some(shift),
                    };
                    view! {
                        <ShiftFormModal
                            shift=shift
                            organizations=organizations_resource
                            repository=repo_for_form.clone()
                            on_saved=on_saved
                            on_close=Callback::new(move |_| form_target.set(None))
                        />
                    }
                })
            }}

            {move || {
                assign_for.get().map(|shift| {
                    view! {
                        <AssignShiftModal
                            shift=shift
                            repository=repo_for_assign.clone()
                            on_assigned=on_assigned
                            on_close=Callback::new(move |_| assign_for.set(None))
                        />
                    }
                })
            }}

            {move || {
                details_for.get().map(|shift| {
                    view! {
                        <ShiftDetailsModal
                            shift=shift
                            repository=repo_for_details.clone()
                            on_changed=on_assignment_removed
                            on_close=Callback::new(move |_| details_for.set(None))
                        />
                    }
                })
            }}

            <ConfirmDialog
                is_open=delete_confirm_open
                title="シフトの削除"
                message=delete_message
                on_confirm=on_confirm_delete
                on_cancel=on_cancel_delete
                confirm_label="削除する"
                destructive=true
            />
        </section>
    }
}

#[component]
fn ShiftsGrid(
    shifts: Vec<Shift>,
    pagination: Option<Pagination>,
    on_details: Callback<Shift>,
    on_assign: Callback<Shift>,
    on_edit: Callback<Shift>,
    on_delete: Callback<Shift>,
    on_page: Callback<u32>,
) -> impl IntoView {
    if shifts.is_empty() {
        return view! {
            <EmptyState
                title="シフトがありません"
                description="条件に一致するシフトは見つかりませんでした。"
            />
        }
        .into_view();
    }

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {shifts
                    .into_iter()
                    .map(|shift| {
                        view! {
                            <ShiftCard
                                shift=shift
                                on_details=on_details
                                on_assign=on_assign
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect_view()}
            </div>
            {pagination.map(|pagination| {
                let page = pagination.page;
                let total_pages = pagination.total_pages.max(1);
                let prev_disabled = page <= 1;
                let next_disabled = page >= total_pages;
                view! {
                    <div class="flex items-center justify-center gap-4">
                        <button
                            type="button"
                            class="text-sm px-3 py-1.5 rounded-md bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                            disabled=prev_disabled
                            on:click=move |_| on_page.call(page.saturating_sub(1))
                        >
                            "前へ"
                        </button>
                        <span class="text-sm text-fg-muted">
                            {format!("{} / {} ページ", page, total_pages)}
                        </span>
                        <button
                            type="button"
                            class="text-sm px-3 py-1.5 rounded-md bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                            disabled=next_disabled
                            on:click=move |_| on_page.call(page + 1)
                        >
                            "次へ"
                        </button>
                    </div>
                }
            })}
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::fixtures;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_filters_and_actions() {
        let html = render_to_string(|| {
            provide_context(ApiClient::new_with_base_url("http://127.0.0.1:9"));
            view! { <ShiftsPage/> }
        });
        assert!(html.contains("シフト管理"));
        assert!(html.contains("すべての組織"));
        assert!(html.contains("すべての状態"));
        assert!(html.contains("シフトを追加"));
        assert!(html.contains("再取得"));
    }

    #[test]
    fn grid_renders_empty_state_without_shifts() {
        let html = render_to_string(|| {
            view! {
                <ShiftsGrid
                    shifts=Vec::new()
                    pagination=None
                    on_details=Callback::new(|_| {})
                    on_assign=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("シフトがありません"));
    }

    #[test]
    fn grid_renders_cards_and_pagination() {
        let html = render_to_string(|| {
            let pagination = Pagination {
                page: 2,
                page_size: 9,
                total_items: 20,
                total_pages: 3,
            };
            view! {
                <ShiftsGrid
                    shifts=vec![fixtures::day_shift(1), fixtures::day_shift(2)]
                    pagination=Some(pagination)
                    on_details=Callback::new(|_| {})
                    on_assign=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                    on_page=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("2 / 3 ページ"));
        assert!(html.contains("前へ"));
        assert!(html.contains("次へ"));
    }
}
