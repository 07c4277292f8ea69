//! Pantry Commands

use super::{get_json, post_json};
use crate::models::{NewPantry, Pantry};

pub async fn list_pantries() -> Result<Vec<Pantry>, String> {
    get_json("pantries").await
}

pub async fn create_pantry(draft: &NewPantry) -> Result<Pantry, String> {
    post_json("pantries", draft).await
}
