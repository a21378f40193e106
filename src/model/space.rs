use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SpaceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub capacity: i32,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
pub struct CreateSpaceDto {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(length(max = 255))]
    pub location: Option<String>,
    /// Defaults to `true`
    #[garde(skip)]
    pub is_active: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, Default)]
pub struct UpdateSpaceDto {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(range(min = 1))]
    pub capacity: Option<i32>,
    #[garde(length(max = 255))]
    pub location: Option<String>,
    #[garde(skip)]
    pub is_active: Option<bool>,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct SpaceListQuery {
    /// Only return spaces with this active flag
    pub is_active: Option<bool>,
}
