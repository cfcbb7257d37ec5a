use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A director record. `Birth` and `Death` are free-form text, as entered by the catalog editors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Director {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub birth: String,
    pub death: String,
}

impl Director {
    pub fn new(
        name: impl Into<String>,
        bio: impl Into<String>,
        birth: impl Into<String>,
        death: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            bio: bio.into(),
            birth: birth.into(),
            death: death.into(),
        }
    }
}
