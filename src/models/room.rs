use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: i64,
    pub capacity: i64,
    pub description: String,
    pub amenities: Json<Vec<String>>,
    pub available: bool,
    pub image: String,
}
