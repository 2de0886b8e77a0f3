//! Media upload.

use anyhow::Result;
use serde::Deserialize;

use crate::{PortfolioServiceClient, check_status};

#[derive(Debug, Deserialize)]
struct MediaUploadResponse {
    url: String,
}

impl PortfolioServiceClient {
    /// Upload an image or floor plan under a folder tag and get back its
    /// public URL.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_media(
        &self,
        folder: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/media", self.url))
            .bearer_auth(self.bearer()?)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<MediaUploadResponse>().await?.url)
    }
}
