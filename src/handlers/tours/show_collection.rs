use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::binder::{ApiPath, ApiQuery, Delimited};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// A set of shows within a tour, keyed by the ids requested together
#[derive(Debug, Serialize)]
pub struct ShowCollection {
    pub tour_id: Uuid,
    pub show_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ShowCollectionQuery {
    #[serde(default, rename = "showIds")]
    pub show_ids: Delimited<Uuid>,
}

/// GET /api/tours/:tour_id/showcollections/:show_ids
///
/// `show_ids` is a list such as `(id1,id2)`. An empty group `()` is rejected
/// because there is nothing to look up; `(,)` binds as an empty collection.
pub async fn show_collection_get(
    ApiPath((tour_id, show_ids)): ApiPath<(Uuid, Delimited<Uuid>)>,
) -> ApiResult<ShowCollection> {
    show_collection(tour_id, show_ids)
}

/// GET /api/tours/:tour_id/showcollections?showIds=id1,id2
pub async fn show_collection_query(
    ApiPath(tour_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ShowCollectionQuery>,
) -> ApiResult<ShowCollection> {
    show_collection(tour_id, query.show_ids)
}

fn show_collection(tour_id: Uuid, show_ids: Delimited<Uuid>) -> ApiResult<ShowCollection> {
    let show_ids = show_ids
        .into_inner()
        .ok_or_else(|| ApiError::bad_request("showIds must be provided"))?;

    tracing::debug!("Show collection for tour {}: {} show(s)", tour_id, show_ids.len());

    Ok(ApiResponse::success(ShowCollection { tour_id, show_ids }))
}
