use axum::{extract::State, response::Json, routing::get, Router};
use tracing::instrument;

use crate::error::ApiError;
use crate::payloads::PizzaResponse;
use crate::store;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = [PizzaResponse]),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let conn = &mut state.conn()?;

    let pizzas = store::list_pizzas(conn)?;

    Ok(Json(pizzas.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::handlers::testing::{get_request, response_json, seed_pizza, test_app};

    #[tokio::test]
    async fn test_list_pizzas_empty() {
        let (app, _pool) = test_app();

        let response = app.oneshot(get_request("/pizzas")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_list_pizzas() {
        let (app, pool) = test_app();

        seed_pizza(&pool, "Margherita", "Dough, Tomato Sauce, Cheese");
        seed_pizza(&pool, "Pepperoni", "Dough, Tomato Sauce, Cheese, Pepperoni");

        let response = app.oneshot(get_request("/pizzas")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        let pizzas = body.as_array().unwrap();
        assert_eq!(pizzas.len(), 2);
        assert!(pizzas.iter().any(|p| p["name"] == "Margherita"));
        assert!(pizzas
            .iter()
            .any(|p| p["ingredients"] == "Dough, Tomato Sauce, Cheese, Pepperoni"));
    }
}
