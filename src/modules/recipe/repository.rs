use crate::utils::database::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, description: {}, steps: [{}]",
            self.id,
            self.name,
            self.description,
            self.steps.join(", ")
        )
    }
}

pub struct CreateRecipePayload {
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
}

pub struct UpdateRecipePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub steps: Option<Vec<String>>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create(
    db: &DatabaseConnection,
    payload: CreateRecipePayload,
) -> Result<Recipe, Error> {
    let id = db.ids.generate().map_err(|err| {
        tracing::error!("Failed to generate recipe id: {}", err);
        Error::UnexpectedError
    })?;

    let recipe = Recipe {
        id: id.clone(),
        name: payload.name,
        description: payload.description,
        steps: payload.steps,
    };

    db.recipes.write().await.insert(id, recipe.clone());

    Ok(recipe)
}

pub async fn find_by_id(db: &DatabaseConnection, id: String) -> Option<Recipe> {
    db.recipes.read().await.get(&id).cloned()
}

pub async fn update_by_id(
    db: &DatabaseConnection,
    id: String,
    payload: UpdateRecipePayload,
) -> Option<Recipe> {
    let mut recipes = db.recipes.write().await;
    let recipe = recipes.get_mut(&id)?;

    if let Some(name) = payload.name {
        recipe.name = name;
    }
    if let Some(description) = payload.description {
        recipe.description = description;
    }
    if let Some(steps) = payload.steps {
        recipe.steps = steps;
    }

    Some(recipe.clone())
}

/// Returns whether a recipe was actually removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: String) -> bool {
    db.recipes.write().await.remove(&id).is_some()
}
