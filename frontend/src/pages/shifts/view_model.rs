use super::{
    repository::ShiftRepository,
    utils::{ShiftFilterSnapshot, ShiftFilterState},
};
use crate::api::{ApiClient, ApiError, ListEnvelope, Organization, Shift};
use leptos::*;
use std::rc::Rc;

/// Everything the shift page shares across its sections: the list resource
/// keyed on (filter snapshot, reload token), the organization lookup and the
/// delete action with its outcome signals.
#[derive(Clone)]
pub struct ShiftsViewModel {
    pub filter: ShiftFilterState,
    pub reload: RwSignal<u32>,
    pub shifts_resource: Resource<(ShiftFilterSnapshot, u32), Result<ListEnvelope<Shift>, ApiError>>,
    pub organizations_resource: Resource<u32, Result<Vec<Organization>, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    pub pending_delete: RwSignal<Option<Shift>>,
    pub notice: RwSignal<Option<String>>,
    pub error: RwSignal<Option<ApiError>>,
    pub repository: ShiftRepository,
}

impl ShiftsViewModel {
    pub fn refetch(&self) {
        self.reload.update(|token| *token += 1);
    }

    /// Opens the delete confirmation. Nothing is sent yet.
    pub fn request_delete(&self, shift: Shift) {
        self.pending_delete.set(Some(shift));
    }

    /// Closes the confirmation without touching the backend.
    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Dispatches the delete for the shift under confirmation, if any.
    pub fn confirm_delete(&self) {
        if let Some(shift) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(shift.id);
        }
        self.pending_delete.set(None);
    }
}

pub fn use_shifts_view_model() -> ShiftsViewModel {
    // ApiClient is provided at the router root; fall back to a fresh one so
    // the page also works when mounted standalone.
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = ShiftRepository::new_with_client(Rc::new(api));

    let filter = ShiftFilterState::new();
    let reload = create_rw_signal(0u32);

    let filter_for_snapshot = filter;
    let snapshot = Signal::derive(move || filter_for_snapshot.snapshot());

    // A response is applied only when its key still matches the resource's
    // latest key, so a stale page can never overwrite a newer one.
    let repo_list = repo.clone();
    let shifts_resource = create_resource(
        move || (snapshot.get(), reload.get()),
        move |(snapshot, _)| {
            let repo = repo_list.clone();
            async move { repo.list_shifts(snapshot.to_options()).await }
        },
    );

    let repo_orgs = repo.clone();
    let organizations_resource = create_resource(
        || 0u32,
        move |_| {
            let repo = repo_orgs.clone();
            async move {
                repo.list_organizations().await.map(|mut organizations| {
                    organizations.sort_by(|a, b| a.organization_name.cmp(&b.organization_name));
                    organizations
                })
            }
        },
    );

    let repo_delete = repo.clone();
    let delete_action = create_action(move |id: &i64| {
        let repo = repo_delete.clone();
        let id = *id;
        async move { repo.delete_shift(id).await }
    });

    let pending_delete = create_rw_signal(None::<Shift>);
    let notice = create_rw_signal(None::<String>);
    let error = create_rw_signal(None::<ApiError>);

    // A delete refetches whether it succeeded or not; the backend may have
    // partially applied the change.
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    notice.set(Some("シフトを削除しました。".to_string()));
                    error.set(None);
                }
                Err(err) => {
                    error.set(Some(err));
                    notice.set(None);
                }
            }
            reload.update(|token| *token += 1);
        }
    });

    ShiftsViewModel {
        filter,
        reload,
        shifts_resource,
        organizations_resource,
        delete_action,
        pending_delete,
        notice,
        error,
        repository: repo,
    }
}
