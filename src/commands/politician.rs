use super::get_json;
use crate::models::Politician;

pub async fn list_politicians() -> Result<Vec<Politician>, String> {
    get_json("politicians").await
}
