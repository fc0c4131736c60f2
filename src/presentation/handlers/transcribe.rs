use std::io;

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::{StreamExt, TryStreamExt};
use serde::Serialize;
use tracing::Instrument;

use crate::application::ports::StagingStoreError;
use crate::domain::{
    StoragePath, TranscriptionProvider, TranscriptionRequest, UploadId, parse_punctuate,
};
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";
pub const PROVIDER_FIELD: &str = "provider";
pub const PUNCTUATE_FIELD: &str = "punctuate";

pub const NO_FILE_MESSAGE: &str = "No audio file uploaded.";
pub const INVALID_PROVIDER_MESSAGE: &str = "Invalid transcription provider selected.";
pub const TRANSCRIPTION_FAILED_MESSAGE: &str = "Transcription failed.";
pub const UPLOAD_READ_FAILED_MESSAGE: &str = "Failed to read upload.";

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Default)]
struct TranscribeForm {
    upload: Option<StoragePath>,
    provider: Option<String>,
    punctuate: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum FormError {
    #[error("multipart: {0}")]
    Multipart(#[from] MultipartError),
    #[error("staging: {0}")]
    Staging(#[from] StagingStoreError),
}

/// Runs the request on its own task. A client that disconnects drops this
/// future, but the task still finishes and removes the staged upload.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let task = tokio::spawn(process_upload(state, multipart).in_current_span());

    match task.await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, "Transcription task did not complete");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                TRANSCRIPTION_FAILED_MESSAGE.to_string(),
            )
        }
    }
}

async fn process_upload(state: AppState, multipart: Multipart) -> Response {
    let form = match read_form(&state, multipart).await {
        Ok(form) => form,
        Err(FormError::Multipart(e)) => {
            tracing::warn!(error = %e, "Failed to read multipart upload");
            return error_response(e.status(), UPLOAD_READ_FAILED_MESSAGE.to_string());
        }
        Err(FormError::Staging(e)) => {
            tracing::error!(error = %e, "Failed to stage uploaded audio");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                TRANSCRIPTION_FAILED_MESSAGE.to_string(),
            );
        }
    };

    let Some(upload) = form.upload else {
        tracing::warn!("Transcription request with no audio file");
        return (StatusCode::BAD_REQUEST, NO_FILE_MESSAGE).into_response();
    };

    let provider = match form.provider.as_deref() {
        None => TranscriptionProvider::default(),
        Some(raw) => match raw.parse::<TranscriptionProvider>() {
            Ok(provider) => provider,
            Err(e) => {
                tracing::warn!(provider = %raw, error = %e, "Rejected transcription provider");
                state.transcription_service.discard(&upload).await;
                return error_response(
                    StatusCode::BAD_REQUEST,
                    INVALID_PROVIDER_MESSAGE.to_string(),
                );
            }
        },
    };

    let punctuate = parse_punctuate(form.punctuate.as_deref());
    let request = TranscriptionRequest::new(upload, provider, punctuate);

    match state.transcription_service.handle(request).await {
        Ok(transcript) => (StatusCode::OK, Json(TranscribeResponse { transcript })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, provider = %provider, "Transcription request failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                TRANSCRIPTION_FAILED_MESSAGE.to_string(),
            )
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Reads every form field, staging the first `audio` part that carries a
/// filename. A staged file is discarded again if a later field cannot be read.
async fn read_form(state: &AppState, mut multipart: Multipart) -> Result<TranscribeForm, FormError> {
    let mut form = TranscribeForm::default();

    if let Err(e) = collect_fields(state, &mut multipart, &mut form).await {
        if let Some(upload) = form.upload.take() {
            state.transcription_service.discard(&upload).await;
        }
        return Err(e);
    }

    Ok(form)
}

async fn collect_fields(
    state: &AppState,
    multipart: &mut Multipart,
    form: &mut TranscribeForm,
) -> Result<(), FormError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);

        match name.as_deref() {
            Some(AUDIO_FIELD) if form.upload.is_none() && field.file_name().is_some() => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let path = StoragePath::new(&UploadId::new(), &filename);

                let stream = field.map_err(io::Error::other).boxed();
                let bytes = state.staging_store.store(&path, stream).await?;

                tracing::debug!(filename = %filename, path = %path, bytes, "Audio upload staged");
                form.upload = Some(path);
            }
            Some(PROVIDER_FIELD) => form.provider = Some(field.text().await?),
            Some(PUNCTUATE_FIELD) => form.punctuate = Some(field.text().await?),
            other => tracing::debug!(field = ?other, "Ignoring multipart field"),
        }
    }

    Ok(())
}
