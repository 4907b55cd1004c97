use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed acknowledgment returned for every accepted upload. The body is
/// identical regardless of the uploaded content.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Ack {
    pub status: String,
    pub note: String,
}

impl Ack {
    pub fn skeleton() -> Self {
        Ack {
            status: "ok".to_string(),
            note: "skeleton".to_string(),
        }
    }
}
