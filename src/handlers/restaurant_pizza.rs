use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde_json::Value;
use tracing::instrument;

use crate::error::ApiError;
use crate::models::NewRestaurantPizza;
use crate::payloads::{
    CreateRestaurantPizzaRequest, RestaurantPizzaResponse, ValidationErrorResponse,
};
use crate::store;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

// The price may arrive as a JSON integer or a digit string.
fn coerce_price(price: &Value) -> Option<i64> {
    match price {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offering created successfully", body = RestaurantPizzaResponse),
        (status = 400, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Restaurant or pizza not found", body = ValidationErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ApiError> {
    let price = payload.price.filter(|v| !v.is_null());
    let (Some(pizza_id), Some(restaurant_id), Some(price)) =
        (payload.pizza_id, payload.restaurant_id, price)
    else {
        return Err(ApiError::Validation(vec![
            "Missing pizza_id, restaurant_id, or price".to_string(),
        ]));
    };

    let price = coerce_price(&price)
        .ok_or_else(|| ApiError::Validation(vec!["Price must be an integer".to_string()]))?;
    if !(1..=30).contains(&price) {
        return Err(ApiError::Validation(vec![
            "Price must be between 1 and 30".to_string(),
        ]));
    }

    let conn = &mut state.conn()?;

    store::get_restaurant(conn, restaurant_id)?.ok_or(ApiError::MissingReference("Restaurant"))?;
    store::get_pizza(conn, pizza_id)?.ok_or(ApiError::MissingReference("Pizza"))?;

    let offering = store::create_restaurant_pizza(
        conn,
        NewRestaurantPizza {
            restaurant_id,
            pizza_id,
            price: price as i32,
        },
    )?;

    Ok((StatusCode::CREATED, Json(offering.into())))
}
