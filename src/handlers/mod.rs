pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-export routers for easier importing
pub use pizza::router as pizza_router;
pub use restaurant::router as restaurant_router;
pub use restaurant_pizza::router as restaurant_pizza_router;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

impl AppState {
    pub fn conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, ApiError> {
        self.pool
            .get()
            .map_err(|e| ApiError::Internal(format!("Connection pool error: {e}")))
    }
}

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
}

/// Landing marker, not an API surface.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::list_restaurants,
        restaurant::create_restaurant,
        restaurant::get_restaurant,
        restaurant::delete_restaurant,
        pizza::list_pizzas,
        restaurant_pizza::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::payloads::CreateRestaurantRequest,
            crate::payloads::RestaurantResponse,
            crate::payloads::PizzaResponse,
            crate::payloads::CreateRestaurantPizzaRequest,
            crate::payloads::RestaurantPizzaResponse,
            crate::payloads::ApiErrorResponse,
            crate::payloads::ValidationErrorResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant management endpoints"),
        (name = "pizzas", description = "Pizza catalogue endpoints"),
        (name = "restaurant_pizzas", description = "Pizza offering endpoints")
    ),
    info(
        title = "Pizzeria API",
        description = "HTTP API for restaurants, pizzas, and their priced offerings",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
