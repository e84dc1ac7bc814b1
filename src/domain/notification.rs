use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FALLBACK_MESSAGE: &str = "Stay healthy and take care of yourself!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    DailyReminder,
    PersonalizedInsight,
    EducationalTip,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::DailyReminder,
        Category::PersonalizedInsight,
        Category::EducationalTip,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::DailyReminder => "Daily health reminders",
            Category::PersonalizedInsight => "Personalized health insights",
            Category::EducationalTip => "Educational tips",
        }
    }

    /// Uniform draw over all categories.
    pub fn pick(rng: &mut fastrand::Rng) -> Category {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NotificationPayload {
    pub fn new(user: &User, message: &str) -> Self {
        Self {
            user_id: user.user_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pick_covers_every_category() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut counts: HashMap<Category, usize> = HashMap::new();
        for _ in 0..3000 {
            *counts.entry(Category::pick(&mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 3);
        for category in Category::ALL {
            let count = counts[&category];
            assert!(count > 800 && count < 1200, "{category}: {count}");
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Daily health reminders",
                "Personalized health insights",
                "Educational tips"
            ]
        );
    }

    #[test]
    fn test_payload_serializes_four_fields() {
        let user = User {
            user_id: "123".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            signup_date: "2024-01-01".to_string(),
            age: 30,
            height_cm: 180.0,
            weight_kg: 75.0,
            activity_level: "active".to_string(),
            health_goals: "stay fit".to_string(),
        };

        let payload = serde_json::to_value(NotificationPayload::new(&user, "Stay hydrated!")).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "user_id": "123",
                "name": "John Doe",
                "email": "john@example.com",
                "message": "Stay hydrated!"
            })
        );
    }
}
