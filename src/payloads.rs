use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Pizza, Restaurant, RestaurantPizza};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantRequest {
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantResponse {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
    /// Offerings of this restaurant (join records, not expanded pizzas)
    pub pizzas: Vec<RestaurantPizzaResponse>,
}

impl RestaurantResponse {
    pub fn from_entity(restaurant: Restaurant, offerings: Vec<RestaurantPizza>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            pizzas: offerings.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaResponse {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Ingredient list as free-form text
    pub ingredients: String,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Pizza being offered
    pub pizza_id: Option<i32>,
    /// Restaurant offering the pizza
    pub restaurant_id: Option<i32>,
    /// Price in whole units; integer or digit string accepted
    #[schema(value_type = Option<Object>)]
    pub price: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaResponse {
    /// Unique identifier for the offering
    pub id: i32,
    /// Restaurant offering the pizza
    pub restaurant_id: i32,
    /// Pizza being offered
    pub pizza_id: i32,
    /// Price in whole units, between 1 and 30
    pub price: i32,
}

impl From<RestaurantPizza> for RestaurantPizzaResponse {
    fn from(offering: RestaurantPizza) -> Self {
        Self {
            id: offering.id,
            restaurant_id: offering.restaurant_id,
            pizza_id: offering.pizza_id,
            price: offering.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Validation error messages
    pub errors: Vec<String>,
}
