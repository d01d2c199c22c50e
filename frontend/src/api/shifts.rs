use super::{client::ApiClient, types::*};

impl ApiClient {
    pub async fn create_shift(&self, payload: &ShiftPayload) -> Result<Shift, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/shifts", base_url))
                    .json(payload),
            )
            .await?;
        Ok(Self::decode::<ItemEnvelope<Shift>>(response).await?.data)
    }

    pub async fn list_shifts(
        &self,
        options: &ShiftListOptions,
    ) -> Result<ListEnvelope<Shift>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let query = options.to_query();
        let mut request = self.http_client().get(format!("{}/shifts", base_url));
        if !query.is_empty() {
            request = request.query(&query);
        }
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    pub async fn get_shift(&self, id: &str) -> Result<Shift, ApiError> {
        let id = Self::parse_id(id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/shifts/{}", base_url, id)))
            .await?;
        Ok(Self::decode::<ItemEnvelope<Shift>>(response).await?.data)
    }

    pub async fn update_shift(&self, id: &str, payload: &ShiftPayload) -> Result<Shift, ApiError> {
        let id = Self::parse_id(id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/shifts/{}", base_url, id))
                    .json(payload),
            )
            .await?;
        Ok(Self::decode::<ItemEnvelope<Shift>>(response).await?.data)
    }

    pub async fn delete_shift(&self, id: &str) -> Result<(), ApiError> {
        let id = Self::parse_id(id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/shifts/{}", base_url, id)),
            )
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn assign_employee(
        &self,
        payload: &AssignShiftRequest,
    ) -> Result<ShiftAssignment, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/shifts/assign", base_url))
                    .json(payload),
            )
            .await?;
        Ok(Self::decode::<ItemEnvelope<ShiftAssignment>>(response)
            .await?
            .data)
    }

    pub async fn list_shift_assignments(
        &self,
        shift_id: &str,
    ) -> Result<Vec<ShiftAssignment>, ApiError> {
        let shift_id = Self::parse_id(shift_id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/shifts/{}/assignments", base_url, shift_id)),
            )
            .await?;
        Ok(Self::decode::<ListEnvelope<ShiftAssignment>>(response)
            .await?
            .data)
    }

    pub async fn list_employee_assignments(
        &self,
        employee_id: &str,
    ) -> Result<Vec<ShiftAssignment>, ApiError> {
        let employee_id = Self::parse_id(employee_id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/shifts/employee/{}", base_url, employee_id)),
            )
            .await?;
        Ok(Self::decode::<ListEnvelope<ShiftAssignment>>(response)
            .await?
            .data)
    }

    pub async fn remove_assignment(&self, assignment_id: &str) -> Result<(), ApiError> {
        let assignment_id = Self::parse_id(assignment_id)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .delete(format!("{}/shifts/assignments/{}", base_url, assignment_id)),
            )
            .await?;
        Self::expect_ok(response).await
    }
}
