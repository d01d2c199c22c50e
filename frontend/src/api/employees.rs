use super::{client::ApiClient, types::*};

impl ApiClient {
    /// Employee records are owned by the employee-management module; this
    /// module only reads them to populate the assignment picker.
    pub async fn list_employees(
        &self,
        options: &EmployeeListOptions,
    ) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/employees", base_url))
                    .query(&options.to_query()),
            )
            .await?;
        Ok(Self::decode::<ListEnvelope<Employee>>(response)
            .await?
            .data)
    }
}
