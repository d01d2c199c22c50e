use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, AssignShiftRequest, Employee, EmployeeListOptions, ListEnvelope,
    Organization, Shift, ShiftAssignment, ShiftListOptions, ShiftPayload,
};

/// Read/write access used by the shift page. Holds the client behind an Rc
/// so resources and actions can share one instance.
#[derive(Clone)]
pub struct ShiftRepository {
    api: Rc<ApiClient>,
}

impl ShiftRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list_shifts(
        &self,
        options: ShiftListOptions,
    ) -> Result<ListEnvelope<Shift>, ApiError> {
        self.api.list_shifts(&options).await
    }

    pub async fn create_shift(&self, payload: ShiftPayload) -> Result<Shift, ApiError> {
        self.api.create_shift(&payload).await
    }

    pub async fn update_shift(&self, id: i64, payload: ShiftPayload) -> Result<Shift, ApiError> {
        self.api.update_shift(&id.to_string(), &payload).await
    }

    pub async fn delete_shift(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete_shift(&id.to_string()).await
    }

    pub async fn assign_employee(
        &self,
        payload: AssignShiftRequest,
    ) -> Result<ShiftAssignment, ApiError> {
        self.api.assign_employee(&payload).await
    }

    pub async fn list_shift_assignments(
        &self,
        shift_id: i64,
    ) -> Result<Vec<ShiftAssignment>, ApiError> {
        self.api.list_shift_assignments(&shift_id.to_string()).await
    }

    pub async fn remove_assignment(&self, assignment_id: i64) -> Result<(), ApiError> {
        self.api
            .remove_assignment(&assignment_id.to_string())
            .await
    }

    /// Picker data for the assignment modal: active members of the shift's
    /// organization, fetched with a bounded page size.
    pub async fn list_assignable_employees(
        &self,
        organization_id: i64,
    ) -> Result<Vec<Employee>, ApiError> {
        self.api
            .list_employees(&EmployeeListOptions {
                organization_id,
                is_active: true,
                page_size: 200,
            })
            .await
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        self.api.list_organizations().await
    }
}

impl Default for ShiftRepository {
    fn default() -> Self {
        Self::new()
    }
}
