use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::api::context::AppState;

/// Where an accepted upload ended up.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MediaUploadResponse {
    pub url: String,
}

#[derive(Debug, Error)]
pub enum MediaUploadErr {
    #[error("multipart upload must contain a `file` part")]
    MissingFile,

    #[error("invalid multipart payload: {0}")]
    Malformed(String),

    #[error("An unknown error has occurred")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for MediaUploadErr {
    fn into_response(self) -> Response {
        let status_code = match &self {
            MediaUploadErr::MissingFile | MediaUploadErr::Malformed(_) => StatusCode::BAD_REQUEST,
            MediaUploadErr::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error = ?self,
                error_type = "MediaUploadErr",
                "Internal server error"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

/// Upload a property/unit image or floor plan. Multipart with an optional
/// `folder` text part and a required `file` part; answers with the public
/// URL.
#[utoipa::path(
    post,
    path = "/media",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload accepted", body = MediaUploadResponse),
        (status = 400, description = "No file part or malformed payload"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Media"
)]
#[tracing::instrument(skip(context, multipart))]
pub async fn handler(
    State(context): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MediaUploadResponse>, MediaUploadErr> {
    let mut folder = "media".to_string();
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MediaUploadErr::Malformed(e.to_string()))?
    {
        match field.name() {
            Some("folder") => {
                folder = field
                    .text()
                    .await
                    .map_err(|e| MediaUploadErr::Malformed(e.to_string()))?;
            }
            Some("file") => {
                let name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(|ct| ct.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| MediaUploadErr::Malformed(e.to_string()))?;
                file = Some((name, content_type, bytes.to_vec()));
            }
            _ => continue,
        }
    }

    let (name, content_type, bytes) = file.ok_or(MediaUploadErr::MissingFile)?;

    let url = context
        .media
        .upload(&folder, &name, content_type.as_deref(), &bytes)
        .await?;

    tracing::info!(folder = %folder, size = bytes.len(), "uploaded media");
    Ok(Json(MediaUploadResponse { url }))
}
