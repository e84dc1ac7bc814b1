use crate::domain::notification::{Category, FALLBACK_MESSAGE};
use crate::domain::repository::{PromptMessage, TextGenerator};
use crate::domain::user::User;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const SYSTEM_PROMPT: &str = "You are a friendly health assistant providing daily health tips.";

/// Produces one personalized sentence per user. Always yields text: any
/// failure of the generation service is replaced by [`FALLBACK_MESSAGE`].
#[derive(Clone)]
pub struct MessageGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl MessageGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn build_prompt(category: Category, user: &User) -> Vec<PromptMessage> {
        let content = format!(
            "Here is some information about the user:\n\
             Age: '{}',\n\
             Weight in Kg: '{}',\n\
             Height in Cm: '{}',\n\
             Activity level: '{}',\n\
             Health Goals: '{}'.\n\
             Generate a one-sentence, helpful, and motivating '{}' message for the user.",
            user.age,
            user.weight_kg,
            user.height_cm,
            user.activity_level,
            user.health_goals,
            category.label()
        );
        vec![
            PromptMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            PromptMessage {
                role: "user",
                content,
            },
        ]
    }

    #[instrument(skip(self, category, user), fields(user_id = %user.user_id, category = %category))]
    pub async fn generate(&self, category: Category, user: &User) -> String {
        let prompt = Self::build_prompt(category, user);
        match self.generator.complete(&prompt).await {
            Ok(message) => {
                debug!(message = %message, "Generated health message");
                message
            }
            Err(e) => {
                warn!(error = %e, "Error generating health message, using fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::GenerationError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedGenerator {
        reply: fn() -> Result<String, GenerationError>,
        prompts: Mutex<Vec<Vec<PromptMessage>>>,
    }

    impl ScriptedGenerator {
        fn new(reply: fn() -> Result<String, GenerationError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, messages: &[PromptMessage]) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(messages.to_vec());
            (self.reply)()
        }
    }

    fn user() -> User {
        User {
            user_id: "456".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            signup_date: "2024-02-01".to_string(),
            age: 28,
            height_cm: 170.0,
            weight_kg: 65.5,
            activity_level: "moderate".to_string(),
            health_goals: "lose weight".to_string(),
        }
    }

    #[test]
    fn test_build_prompt_embeds_profile_and_category() {
        let prompt = MessageGenerator::build_prompt(Category::EducationalTip, &user());

        assert_eq!(prompt.len(), 2);
        assert_eq!(prompt[0].role, "system");
        assert_eq!(prompt[0].content, SYSTEM_PROMPT);
        assert_eq!(prompt[1].role, "user");
        let content = &prompt[1].content;
        assert!(content.contains("Age: '28'"));
        assert!(content.contains("Weight in Kg: '65.5'"));
        assert!(content.contains("Height in Cm: '170'"));
        assert!(content.contains("Activity level: 'moderate'"));
        assert!(content.contains("Health Goals: 'lose weight'"));
        assert!(content.contains("motivating 'Educational tips' message"));
    }

    #[tokio::test]
    async fn test_generate_returns_completion() {
        let backend = ScriptedGenerator::new(|| Ok("Take a brisk walk today!".to_string()));
        let generator = MessageGenerator::new(backend.clone());

        let message = generator.generate(Category::DailyReminder, &user()).await;

        assert_eq!(message, "Take a brisk walk today!");
        assert_eq!(backend.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_every_error() {
        let failures: [fn() -> Result<String, GenerationError>; 4] = [
            || Err(GenerationError::Transport("connection refused".to_string())),
            || Err(GenerationError::Status(500)),
            || Err(GenerationError::Malformed("eof".to_string())),
            || Err(GenerationError::EmptyResponse),
        ];

        for reply in failures {
            let generator = MessageGenerator::new(ScriptedGenerator::new(reply));
            let message = generator.generate(Category::PersonalizedInsight, &user()).await;
            assert_eq!(message, "Stay healthy and take care of yourself!");
        }
    }
}
