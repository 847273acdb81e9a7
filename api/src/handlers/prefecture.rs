use actix_web::{web, HttpResponse};
use tracing::debug;

use geo_core::repositories::PrefectureRepository;

use crate::app::AppState;
use crate::dto::{GetPrefectureRequest, GetPrefectureResponse, PrefectureResponse};
use crate::handlers::error::ApiError;
use crate::middleware::TraceId;
use crate::validation::validate_request;

/// Handler for GET /prefectures
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// [
///     { "id": 1, "code": "01", "name": "北海道" },
///     { "id": 13, "code": "13", "name": "東京都" }
/// ]
/// ```
///
/// ## Errors
/// - 500 `E100000` when the data store fails
pub async fn list_prefectures<R>(
    state: web::Data<AppState<R>>,
    trace_id: TraceId,
) -> Result<HttpResponse, ApiError>
where
    R: PrefectureRepository + 'static,
{
    let prefectures = state
        .prefecture_service
        .list_prefectures()
        .await
        .map_err(|e| ApiError::new(e, trace_id.clone(), "failed to list prefectures"))?;

    let response: Vec<PrefectureResponse> =
        prefectures.into_iter().map(PrefectureResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// Handler for GET /prefectures/{code}
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": 13,
///     "code": "13",
///     "name": "東京都",
///     "municipalities": [
///         {
///             "id": 3,
///             "prefecture_code": "13",
///             "organization_code": "131016",
///             "prefecture_name_kanji": "東京都",
///             "municipality_name_kanji": "千代田区",
///             "prefecture_name_kana": "ﾄｳｷｮｳﾄ",
///             "municipality_name_kana": "ﾁﾖﾀﾞｸ",
///             "is_active": true
///         }
///     ]
/// }
/// ```
///
/// ## Errors
/// - 400 `E100001` with `details` when the code is not a two-digit number
/// - 404 `E100002` when no prefecture has the code
/// - 500 `E100000` when the data store fails
pub async fn get_prefecture<R>(
    state: web::Data<AppState<R>>,
    trace_id: TraceId,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    R: PrefectureRepository + 'static,
{
    let request = GetPrefectureRequest::new(path.into_inner());
    validate_request(&request)
        .map_err(|e| ApiError::new(e, trace_id.clone(), "invalid prefecture code"))?;

    let code = request.code.unwrap_or_default();
    debug!(trace_id = %trace_id, code = %code, "Fetching prefecture");

    let prefecture = state
        .prefecture_service
        .get_prefecture_by_code(&code)
        .await
        .map_err(|e| ApiError::new(e, trace_id.clone(), "failed to get prefecture"))?;

    Ok(HttpResponse::Ok().json(GetPrefectureResponse::from(prefecture)))
}
