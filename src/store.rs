use diesel::{delete, insert_into, prelude::*};

use crate::models::{
    NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::schema;

pub fn create_restaurant(
    conn: &mut SqliteConnection,
    new_restaurant: NewRestaurant,
) -> QueryResult<Restaurant> {
    insert_into(schema::restaurants::table)
        .values(&new_restaurant)
        .returning(Restaurant::as_returning())
        .get_result(conn)
}

pub fn get_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Restaurant>> {
    schema::restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()
}

pub fn list_restaurants(conn: &mut SqliteConnection) -> QueryResult<Vec<Restaurant>> {
    schema::restaurants::table
        .select(Restaurant::as_select())
        .load(conn)
}

/// Deletes a restaurant together with its offerings. Both deletes commit in
/// one transaction. Returns false when no restaurant matched.
pub fn delete_restaurant(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
    use schema::restaurant_pizzas::dsl;

    conn.transaction(|conn| {
        delete(dsl::restaurant_pizzas.filter(dsl::restaurant_id.eq(id))).execute(conn)?;
        let deleted = delete(schema::restaurants::table.find(id)).execute(conn)?;
        Ok(deleted > 0)
    })
}

pub fn offerings_for_restaurant(
    conn: &mut SqliteConnection,
    restaurant: &Restaurant,
) -> QueryResult<Vec<RestaurantPizza>> {
    RestaurantPizza::belonging_to(restaurant)
        .select(RestaurantPizza::as_select())
        .load(conn)
}

pub fn offerings_for_restaurants(
    conn: &mut SqliteConnection,
    restaurants: &[Restaurant],
) -> QueryResult<Vec<Vec<RestaurantPizza>>> {
    Ok(RestaurantPizza::belonging_to(restaurants)
        .select(RestaurantPizza::as_select())
        .load(conn)?
        .grouped_by(restaurants))
}

pub fn create_pizza(conn: &mut SqliteConnection, new_pizza: NewPizza) -> QueryResult<Pizza> {
    insert_into(schema::pizzas::table)
        .values(&new_pizza)
        .returning(Pizza::as_returning())
        .get_result(conn)
}

pub fn get_pizza(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Pizza>> {
    schema::pizzas::table
        .find(id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()
}

pub fn list_pizzas(conn: &mut SqliteConnection) -> QueryResult<Vec<Pizza>> {
    schema::pizzas::table.select(Pizza::as_select()).load(conn)
}

pub fn create_restaurant_pizza(
    conn: &mut SqliteConnection,
    new_offering: NewRestaurantPizza,
) -> QueryResult<RestaurantPizza> {
    insert_into(schema::restaurant_pizzas::table)
        .values(&new_offering)
        .returning(RestaurantPizza::as_returning())
        .get_result(conn)
}
