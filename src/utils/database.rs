use crate::modules::{ingredient, recipe};
use std::{collections::HashMap, sync::Mutex};
use tokio::sync::RwLock;
use ulid::Generator;

pub type Collection<T> = RwLock<HashMap<String, T>>;

#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("identifier space exhausted for the current millisecond")]
    Exhausted,
    #[error("identifier generator lock poisoned")]
    Poisoned,
}

/// Monotonic ULID source shared by every collection.
pub struct IdGenerator(Mutex<Generator>);

impl IdGenerator {
    pub fn new() -> Self {
        Self(Mutex::new(Generator::new()))
    }

    pub fn generate(&self) -> Result<String, IdError> {
        self.0
            .lock()
            .map_err(|_| IdError::Poisoned)?
            .generate()
            .map(|id| id.to_string())
            .map_err(|_| IdError::Exhausted)
    }
}

pub struct DatabaseConnection {
    pub ids: IdGenerator,
    pub recipes: Collection<recipe::repository::Recipe>,
    pub ingredients: Collection<ingredient::repository::Ingredient>,
}

impl DatabaseConnection {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
            recipes: RwLock::new(HashMap::new()),
            ingredients: RwLock::new(HashMap::new()),
        }
    }
}
