use super::{client::ApiClient, types::*};

impl ApiClient {
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/organizations", base_url)),
            )
            .await?;
        Ok(Self::decode::<ListEnvelope<Organization>>(response)
            .await?
            .data)
    }
}
