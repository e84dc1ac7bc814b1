use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub signup_date: String,
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub health_goals: String,
}

/// Query parameters accepted by the filter endpoint.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserQuery {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl UserQuery {
    /// Builds a query from raw key/value pairs. A repeated key keeps its
    /// last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "id" => query.id = Some(value),
                "name" => query.name = Some(value),
                _ => {}
            }
        }
        query
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|v| !v.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|v| !v.is_empty())
    }
}

/// Result of a filter lookup: an exact id hit or a list of name matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserLookup {
    One(User),
    Many(Vec<User>),
}
