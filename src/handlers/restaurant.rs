use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::instrument;

use crate::error::ApiError;
use crate::models::NewRestaurant;
use crate::payloads::*;
use crate::store;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants with their offerings", body = [RestaurantResponse]),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantResponse>>, ApiError> {
    let conn = &mut state.conn()?;

    let restaurants = store::list_restaurants(conn)?;
    let offerings = store::offerings_for_restaurants(conn, &restaurants)?;

    Ok(Json(
        restaurants
            .into_iter()
            .zip(offerings)
            .map(|(restaurant, offerings)| RestaurantResponse::from_entity(restaurant, offerings))
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created successfully", body = RestaurantResponse),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> Result<(StatusCode, Json<RestaurantResponse>), ApiError> {
    let conn = &mut state.conn()?;

    let restaurant = store::create_restaurant(
        conn,
        NewRestaurant {
            name: payload.name,
            address: payload.address,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantResponse::from_entity(restaurant, vec![])),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant details", body = RestaurantResponse),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantResponse>, ApiError> {
    let conn = &mut state.conn()?;

    let restaurant = store::get_restaurant(conn, id)?.ok_or(ApiError::RestaurantNotFound)?;
    let offerings = store::offerings_for_restaurant(conn, &restaurant)?;

    Ok(Json(RestaurantResponse::from_entity(restaurant, offerings)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its offerings deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut state.conn()?;

    if store::delete_restaurant(conn, id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::RestaurantNotFound)
    }
}
