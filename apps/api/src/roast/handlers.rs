//! Axum route handlers for the roast and improvement API.
//!
//! These are thin adapters: work out the transport shape (multipart upload
//! or JSON body), hand off to the shared pipeline, translate the result.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::UploadedDocument;
use crate::roast::service::{resume_text_from, ResumeSource};
use crate::roast::tone::RoastTone;
use crate::state::AppState;

/// JSON body accepted by both API routes. The improvement route ignores
/// `roast_type`.
#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub roast_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
    pub success: bool,
    pub roast: String,
    pub roast_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveResponse {
    pub success: bool,
    pub suggestions: String,
}

/// What a request resolved to before the pipeline runs.
struct Submission {
    source: ResumeSource,
    roast_type: Option<String>,
}

/// POST /api/roast
pub async fn handle_roast(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<RoastResponse>, AppError> {
    let submission = parse_submission(request).await?;
    let tone = RoastTone::from_param(submission.roast_type.as_deref());

    let text = resume_text_from(&state.config, submission.source).await?;
    let roast = state.roaster.roast(&text, tone).await?;

    Ok(Json(RoastResponse {
        success: true,
        roast,
        roast_type: tone.as_str().to_string(),
    }))
}

/// POST /api/improve
pub async fn handle_improve(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ImproveResponse>, AppError> {
    let submission = parse_submission(request).await?;

    let text = resume_text_from(&state.config, submission.source).await?;
    let suggestions = state.roaster.improve(&text).await?;

    Ok(Json(ImproveResponse {
        success: true,
        suggestions,
    }))
}

/// Dispatches on content type: multipart requests carry a file upload, JSON
/// bodies carry raw resume text. Anything else is a 400.
async fn parse_submission(request: Request) -> Result<Submission, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?;
        let (document, roast_type) = read_upload(multipart).await?;
        return Ok(Submission {
            source: ResumeSource::Document(document),
            roast_type,
        });
    }

    if content_type.starts_with("application/json") {
        let Json(body) = Json::<ResumeTextRequest>::from_request(request, &())
            .await
            .map_err(|e| AppError::Validation(format!("Invalid JSON in request body: {e}")))?;
        return Ok(Submission {
            source: ResumeSource::Text(body.resume_text),
            roast_type: body.roast_type,
        });
    }

    Err(AppError::Validation(
        "Expected a multipart file upload or a JSON body".to_string(),
    ))
}

/// Walks the multipart fields: `resume` is the file, `roast_type` the
/// optional tone selector. Unknown fields are ignored.
pub(crate) async fn read_upload(
    mut multipart: Multipart,
) -> Result<(UploadedDocument, Option<String>), AppError> {
    let mut document: Option<UploadedDocument> = None;
    let mut roast_type: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read file upload: {e}"))
                })?;
                document = Some(UploadedDocument { filename, bytes });
            }
            Some("roast_type") => {
                let value = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read roast_type: {e}"))
                })?;
                if !value.trim().is_empty() {
                    roast_type = Some(value);
                }
            }
            _ => {}
        }
    }

    let document =
        document.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    Ok((document, roast_type))
}
