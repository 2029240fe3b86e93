use axum::response::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Charged Up API is running"
    }))
}
