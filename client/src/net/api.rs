//! REST services for horses, owners and images.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unreachable` since these
//! calls are only issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide between a toast,
//! a banner, or both. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;
use std::pin::Pin;

use super::error::ApiError;
use super::types::{Horse, HorseFamily, HorseSearch, HorseWrite, Owner, OwnerCreate, Sex};

/// Prefix under which the server forwards REST calls to the backend.
pub const API_PREFIX: &str = "/api";

/// Number of suggestions requested by autocomplete inputs.
pub const SUGGESTION_LIMIT: u32 = 5;

#[cfg(any(test, feature = "hydrate"))]
fn horses_endpoint() -> String {
    format!("{API_PREFIX}/horses")
}

#[cfg(any(test, feature = "hydrate"))]
fn horse_endpoint(id: i64) -> String {
    format!("{API_PREFIX}/horses/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn family_endpoint(id: i64) -> String {
    format!("{API_PREFIX}/horses/{id}/family")
}

#[cfg(any(test, feature = "hydrate"))]
fn owners_endpoint() -> String {
    format!("{API_PREFIX}/owners")
}

#[cfg(any(test, feature = "hydrate"))]
fn owner_endpoint(id: i64) -> String {
    format!("{API_PREFIX}/owners/{id}")
}

/// URL of a stored horse image, for use in `<img src>`.
pub fn image_url(image_id: i64) -> String {
    format!("{API_PREFIX}/images/{image_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn family_query(generations: u32) -> [(&'static str, String); 1] {
    [("gen", generations.to_string())]
}

#[cfg(any(test, feature = "hydrate"))]
fn owner_search_query(name: &str, limit: u32) -> Vec<(&'static str, String)> {
    vec![("name", name.trim().to_owned()), ("limit", limit.to_string())]
}

/// Search used by the mother/father inputs: horses of one sex matching `name`.
pub fn parent_search(name: &str, sex: Sex) -> HorseSearch {
    HorseSearch {
        name: Some(name.to_owned()),
        sex: Some(sex),
        limit: Some(SUGGESTION_LIMIT),
        ..HorseSearch::default()
    }
}

/// Future returned by autocomplete suggestion sources.
pub type Suggestions<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;

/// Owners whose name matches `input`.
pub fn owner_suggestions(input: String) -> Suggestions<Owner> {
    Box::pin(async move { search_owners(&input, SUGGESTION_LIMIT).await })
}

/// Female horses whose name matches `input`.
pub fn mother_suggestions(input: String) -> Suggestions<Horse> {
    Box::pin(async move { search_horses(&parent_search(&input, Sex::Female)).await })
}

/// Male horses whose name matches `input`.
pub fn father_suggestions(input: String) -> Suggestions<Horse> {
    Box::pin(async move { search_horses(&parent_search(&input, Sex::Male)).await })
}

/// Image file picked in the browser, attached to create/update submissions.
#[derive(Clone)]
pub struct ImageUpload {
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
    pub file_name: String,
}

#[cfg(feature = "hydrate")]
impl ImageUpload {
    pub fn new(file: web_sys::File) -> Self {
        let file_name = file.name();
        Self { file, file_name }
    }
}

// =============================================================
// Transport helpers
// =============================================================

#[cfg(feature = "hydrate")]
async fn dispatch(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let method = request.method();
    let url = request.url();
    let resp = request.send().await.map_err(|e| {
        leptos::logging::warn!("{method} {url} failed: {e}");
        ApiError::Unreachable(e.to_string())
    })?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    leptos::logging::warn!("{method} {url} answered {status}");
    Err(ApiError::from_response(status, &text))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn build_err(e: impl std::fmt::Display) -> ApiError {
    ApiError::Request(e.to_string())
}

#[cfg(feature = "hydrate")]
fn multipart_body(horse: &HorseWrite, image: Option<&ImageUpload>) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| build_err(format!("{e:?}")))?;
    for (key, value) in horse.form_fields() {
        form.append_with_str(key, &value).map_err(|e| build_err(format!("{e:?}")))?;
    }
    if let Some(image) = image {
        form.append_with_blob_and_filename("image", &image.file, &image.file_name)
            .map_err(|e| build_err(format!("{e:?}")))?;
    }
    Ok(form)
}

/// Read a successful family body. The backend answers an unknown id with an
/// empty or `null` body rather than a 404.
#[cfg(any(test, feature = "hydrate"))]
fn parse_family(horse_id: i64, body: &str) -> Result<HorseFamily, ApiError> {
    let tree = if body.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Option<HorseFamily>>(body).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    tree.ok_or_else(|| ApiError::not_found(format!("Horse {horse_id} not found.")))
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Unreachable("not available on server".to_owned())
}

// =============================================================
// Horses
// =============================================================

/// `GET /horses` with the given filters.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the backend rejects it.
pub async fn search_horses(search: &HorseSearch) -> Result<Vec<Horse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&horses_endpoint())
            .query(search.query_pairs())
            .build()
            .map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        Err(not_in_browser())
    }
}

/// `GET /horses/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the horse does not exist.
pub async fn get_horse(id: i64) -> Result<Horse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&horse_endpoint(id)).build().map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(not_in_browser())
    }
}

/// Resolve an optional parent reference to the full record.
///
/// # Errors
///
/// Returns an `ApiError` if the referenced horse cannot be fetched.
pub async fn get_parent(id: Option<i64>) -> Result<Option<Horse>, ApiError> {
    match id {
        Some(id) => get_horse(id).await.map(Some),
        None => Ok(None),
    }
}

/// `POST /horses` as multipart form data.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or validation is rejected.
pub async fn create_horse(horse: &HorseWrite, image: Option<ImageUpload>) -> Result<Horse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart_body(horse, image.as_ref())?;
        let request = gloo_net::http::Request::post(&horses_endpoint())
            .body(body)
            .map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (horse, image);
        Err(not_in_browser())
    }
}

/// `PUT /horses/{id}` as multipart form data.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the horse is gone, or
/// validation is rejected.
pub async fn update_horse(id: i64, horse: &HorseWrite, image: Option<ImageUpload>) -> Result<Horse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart_body(horse, image.as_ref())?;
        let request = gloo_net::http::Request::put(&horse_endpoint(id))
            .body(body)
            .map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, horse, image);
        Err(not_in_browser())
    }
}

/// `DELETE /horses/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the horse does not exist.
pub async fn delete_horse(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::delete(&horse_endpoint(id))
            .build()
            .map_err(build_err)?;
        dispatch(request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(not_in_browser())
    }
}

/// `GET /horses/{id}/family?gen={generations}`, pruned to `generations`
/// ancestor levels.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the horse does not exist;
/// an unknown id is reported as not found.
pub async fn get_family(id: i64, generations: u32) -> Result<HorseFamily, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&family_endpoint(id))
            .query(family_query(generations))
            .build()
            .map_err(build_err)?;
        let body = dispatch(request).await?.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_family(id, &body)?.pruned(generations as usize))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, generations);
        Err(not_in_browser())
    }
}

// =============================================================
// Owners
// =============================================================

/// `GET /owners`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn list_owners() -> Result<Vec<Owner>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&owners_endpoint()).build().map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(not_in_browser())
    }
}

/// `GET /owners/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or the owner does not exist.
pub async fn get_owner(id: i64) -> Result<Owner, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&owner_endpoint(id)).build().map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(not_in_browser())
    }
}

/// `GET /owners?name=..&limit=..`.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails.
pub async fn search_owners(name: &str, limit: u32) -> Result<Vec<Owner>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&owners_endpoint())
            .query(owner_search_query(name, limit))
            .build()
            .map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, limit);
        Err(not_in_browser())
    }
}

/// `POST /owners` with a JSON body.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails or validation is rejected.
pub async fn create_owner(owner: &OwnerCreate) -> Result<Owner, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&owners_endpoint())
            .json(owner)
            .map_err(build_err)?;
        decode(dispatch(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = owner;
        Err(not_in_browser())
    }
}
