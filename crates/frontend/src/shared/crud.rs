//! REST calls for any record type
//!
//! Paths come from [`AggregateRoot::api_path`] / [`AggregateRoot::item_path`].

use super::api_utils::with_query;
use super::http::{self, ApiError};
use contracts::domain::common::AggregateRoot;

pub async fn fetch_list<T: AggregateRoot>() -> Result<Vec<T>, ApiError> {
    let rows: Vec<T> = http::get_json(&T::api_path()).await?;
    log::debug!("loaded {} {}", rows.len(), T::collection_name());
    Ok(rows)
}

/// List with server-side filters (e.g. attendance of one day)
pub async fn fetch_list_query<T: AggregateRoot>(
    params: &[(&str, String)],
) -> Result<Vec<T>, ApiError> {
    let path = with_query(&T::api_path(), params);
    let rows: Vec<T> = http::get_json(&path).await?;
    log::debug!("loaded {} {} ({})", rows.len(), T::collection_name(), path);
    Ok(rows)
}

pub async fn fetch_by_id<T: AggregateRoot<Id = i64>>(id: i64) -> Result<T, ApiError> {
    http::get_json(&T::item_path(id)).await
}

/// POST new records, PUT persisted ones
pub async fn save<T: AggregateRoot<Id = i64>>(record: &T) -> Result<T, ApiError> {
    let saved: T = match record.id() {
        Some(id) => http::put_json(&T::item_path(id), record).await?,
        None => http::post_json(&T::api_path(), record).await?,
    };
    log::debug!("saved {} {:?}", T::collection_name(), saved.id());
    Ok(saved)
}

pub async fn delete<T: AggregateRoot<Id = i64>>(id: i64) -> Result<(), ApiError> {
    http::delete(&T::item_path(id)).await
}
