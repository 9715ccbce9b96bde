//! Ad resource handlers.
//!
//! Every handler works through the request's [`DbSession`] and commits at
//! most once. Writes accept the same payload shape (see
//! [`ad_core::validate_ad`]); patch ignores a body `id`.

use ad_core::{
    validate_ad, validate_ad_fields, Ad, AdFields, AdId, AdPayload, Error, NOT_FOUND_MESSAGE,
};
use ad_store::Session;
use axum::{body::Bytes, extract::Path, Json};
use telemetry::metrics;
use tracing::{debug, info, warn};

use crate::extractors::DbSession;
use crate::response::{ApiError, StatusResponse};

/// POST /ads - Create an ad.
pub async fn create_ad(
    DbSession(handle): DbSession,
    body: Bytes,
) -> Result<Json<AdId>, ApiError> {
    let (id, fields) = parse_payload(&body).map_err(reject)?.into_parts();

    let mut session = handle.lock().await;
    let ad = session
        .add(fields.into_new_ad(id))
        .await
        .map_err(reject)?;
    session.commit().await.map_err(reject)?;

    metrics().ads_created.inc();
    info!(ad_id = ad.id, owner = %ad.owner, "Ad created");

    Ok(Json(ad.id_view()))
}

/// GET /ads/:id - Fetch one ad.
pub async fn get_ad(
    Path(id): Path<i64>,
    DbSession(handle): DbSession,
) -> Result<Json<Ad>, ApiError> {
    let mut session = handle.lock().await;
    let ad = get_ad_by_id(&mut session, id).await.map_err(reject)?;

    Ok(Json(ad))
}

/// DELETE /ads/:id - Delete one ad.
pub async fn delete_ad(
    Path(id): Path<i64>,
    DbSession(handle): DbSession,
) -> Result<Json<StatusResponse>, ApiError> {
    let mut session = handle.lock().await;
    let ad = get_ad_by_id(&mut session, id).await.map_err(reject)?;
    session.delete(ad.id).await.map_err(reject)?;
    session.commit().await.map_err(reject)?;

    metrics().ads_deleted.inc();
    info!(ad_id = ad.id, "Ad deleted");

    Ok(Json(StatusResponse::deleted()))
}

/// PATCH /ads/:id - Replace the title, content and owner of an ad.
///
/// All three fields are required. A body `id` is ignored.
pub async fn patch_ad(
    Path(id): Path<i64>,
    DbSession(handle): DbSession,
    body: Bytes,
) -> Result<Json<Ad>, ApiError> {
    let mut session = handle.lock().await;
    let mut ad = get_ad_by_id(&mut session, id).await.map_err(reject)?;

    let fields = parse_fields(&body).map_err(reject)?;
    ad.apply(fields);

    session.update(&ad).await.map_err(reject)?;
    session.commit().await.map_err(reject)?;

    metrics().ads_updated.inc();
    info!(ad_id = ad.id, "Ad updated");

    Ok(Json(ad))
}

/// GET /ads - List every ad.
pub async fn list_ads(DbSession(handle): DbSession) -> Result<Json<Vec<Ad>>, ApiError> {
    let mut session = handle.lock().await;
    let ads = session.list().await.map_err(reject)?;

    debug!(count = ads.len(), "Listed ads");
    Ok(Json(ads))
}

async fn get_ad_by_id(session: &mut Session, id: i64) -> Result<Ad, Error> {
    session
        .get(id)
        .await?
        .ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))
}

/// Parse a raw body as JSON and run it through the ad schema.
fn parse_payload(body: &[u8]) -> Result<AdPayload, Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    validate_ad(&value)
}

/// Like [`parse_payload`], without the id.
fn parse_fields(body: &[u8]) -> Result<AdFields, Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    validate_ad_fields(&value)
}

/// Count and log a recovered error before it becomes a response.
fn reject(err: Error) -> ApiError {
    match &err {
        Error::Validation(errors) => {
            metrics().validation_failures.inc();
            debug!(field_errors = errors.len(), "Payload failed validation");
        }
        Error::InvalidBody(msg) => debug!(error = %msg, "Malformed request body"),
        Error::NotFound(_) => metrics().not_found.inc(),
        Error::Conflict(_) => {
            metrics().conflicts.inc();
            warn!("Rejected duplicate ad id");
        }
        Error::Database(_) | Error::Internal(_) => {}
    }
    err.into()
}
