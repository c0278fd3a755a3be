use crate::utils::database::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, description: {}, quantity: {}",
            self.id, self.name, self.description, self.quantity
        )
    }
}

pub struct CreateIngredientPayload {
    pub name: String,
    pub description: String,
    pub quantity: i64,
}

pub struct UpdateIngredientPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateIngredientPayload,
) -> Result<Ingredient, Error> {
    let id = db.ids.generate().map_err(|err| {
        tracing::error!("Failed to generate ingredient id: {}", err);
        Error::UnexpectedError
    })?;

    let ingredient = Ingredient {
        id: id.clone(),
        name: payload.name,
        description: payload.description,
        quantity: payload.quantity,
    };

    db.ingredients.write().await.insert(id, ingredient.clone());

    Ok(ingredient)
}

pub async fn find_by_id(db: &DatabaseConnection, id: String) -> Option<Ingredient> {
    db.ingredients.read().await.get(&id).cloned()
}

pub async fn update_by_id(
    db: &DatabaseConnection,
    id: String,
    payload: UpdateIngredientPayload,
) -> Option<Ingredient> {
    let mut ingredients = db.ingredients.write().await;
    let ingredient = ingredients.get_mut(&id)?;

    if let Some(name) = payload.name {
        ingredient.name = name;
    }
    if let Some(description) = payload.description {
        ingredient.description = description;
    }
    if let Some(quantity) = payload.quantity {
        ingredient.quantity = quantity;
    }

    Some(ingredient.clone())
}

pub async fn delete_by_id(db: &DatabaseConnection, id: String) -> bool {
    db.ingredients.write().await.remove(&id).is_some()
}
