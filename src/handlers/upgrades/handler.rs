//! Host-upgrade handler implementations

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};

use crate::{
    constants::MAX_UPLOAD_SIZE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{UpgradeService, upgrade_service::UpgradeApplication},
    state::AppState,
    utils::upload,
};

use super::response::UpgradeSubmitResponse;

/// Submit a host-upgrade application (multipart: text fields + documents)
pub async fn request_host_upgrade(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UpgradeSubmitResponse>)> {
    let mut application = UpgradeApplication::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "reason" => application.reason = Some(read_text(field).await?),
            "experience" => application.experience = Some(read_text(field).await?),
            "business_name" => application.business_name = Some(read_text(field).await?),
            "business_address" => application.business_address = Some(read_text(field).await?),
            "business_license" => application.business_license = Some(read_text(field).await?),
            "bank_id" => application.bank_id = Some(read_text(field).await?),
            "bank_name" => application.bank_name = Some(read_text(field).await?),
            "cccd_front_image" => {
                application.cccd_front_image = Some(store_file(&state, field).await?);
            }
            "cccd_back_image" => {
                application.cccd_back_image = Some(store_file(&state, field).await?);
            }
            "business_license_image" => {
                application.business_license_image = Some(store_file(&state, field).await?);
            }
            "facility_images" => {
                let stored = store_file(&state, field).await?;
                application.facility_images.push(stored);
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let request = UpgradeService::submit(state.db(), auth_user.id, application).await?;

    Ok((
        StatusCode::CREATED,
        Json(UpgradeSubmitResponse {
            message: "Đã gửi yêu cầu nâng cấp, vui lòng chờ duyệt".to_string(),
            request_id: request.id,
            status: request.status,
        }),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid multipart field: {}", e)))
}

/// Save an uploaded document, returning its stored path
async fn store_file(
    state: &AppState,
    field: axum::extract::multipart::Field<'_>,
) -> AppResult<String> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Invalid file upload: {}", e)))?;

    if data.len() > MAX_UPLOAD_SIZE {
        return Err(AppError::InvalidInput(
            "Tệp tải lên vượt quá kích thước cho phép".to_string(),
        ));
    }

    let path = upload::save_file(&state.config().storage.upload_dir, &file_name, &data).await?;

    Ok(path.to_string_lossy().into_owned())
}
