//! Answer Resolver
//!
//! Turns a question into an answer by trying, first match wins:
//! 1. arithmetic (`<integer> <operator> <integer>`)
//! 2. keyword lookup
//! 3. delegation to the completion service
//!
//! Stateless: one resolver is shared by every request.

use std::sync::Arc;

use super::keywords;
use crate::domain::entities::{Answer, Expression, Question};
use crate::domain::errors::ResolveError;
use crate::domain::value_objects::Tier;
use crate::ports::{CompletionOptions, CompletionProvider};

/// A successfully resolved answer and the tier that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub tier: Tier,
    pub answer: Answer,
}

impl Resolution {
    fn new(tier: Tier, answer: impl Into<Answer>) -> Self {
        Self {
            tier,
            answer: answer.into(),
        }
    }
}

/// Tiered question resolver
pub struct AnswerResolver<P: CompletionProvider + ?Sized> {
    provider: Arc<P>,
    options: CompletionOptions,
}

impl<P: CompletionProvider + ?Sized> AnswerResolver<P> {
    pub fn new(provider: Arc<P>, options: CompletionOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    /// Resolve a question. Never fails: errors become answer text.
    pub async fn resolve(&self, question: impl Into<Question>) -> Answer {
        let question = question.into();

        match self.try_resolve(&question).await {
            Ok(resolution) => {
                tracing::debug!(tier = %resolution.tier, "Question resolved");
                resolution.answer
            }
            Err(e) => {
                tracing::warn!("Question resolution failed: {}", e);
                e.to_answer()
            }
        }
    }

    /// Resolve a question, keeping failures as typed errors
    pub async fn try_resolve(&self, question: &Question) -> Result<Resolution, ResolveError> {
        let normalized = question.normalized();

        if let Some(expression) = Expression::detect(&normalized) {
            let result = expression?.evaluate()?;
            return Ok(Resolution::new(
                Tier::Arithmetic,
                format!("The answer is {}.", result),
            ));
        }

        if let Some(response) = keywords::lookup(&normalized) {
            return Ok(Resolution::new(Tier::Keyword, response));
        }

        tracing::debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            "Delegating question to completion service"
        );

        let completion = self
            .provider
            .complete(question.as_str(), &self.options)
            .await?;

        Ok(Resolution::new(Tier::Completion, completion.text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ARITHMETIC_APOLOGY;
    use crate::ports::{Completion, CompletionError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records prompts and replies with a fixed outcome
    struct FakeProvider {
        outcome: Result<String, CompletionError>,
        prompts: Mutex<Vec<(String, CompletionOptions)>>,
    }

    impl FakeProvider {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(error: CompletionError) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(error),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<(String, CompletionOptions)> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(
            &self,
            prompt: &str,
            options: &CompletionOptions,
        ) -> Result<Completion, CompletionError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), *options));
            self.outcome.clone().map(|text| Completion {
                text,
                model: "fake-model".to_string(),
            })
        }

        fn provider_name(&self) -> &str {
            "fake"
        }

        fn model_id(&self) -> &str {
            "fake-model"
        }
    }

    fn resolver(provider: Arc<FakeProvider>) -> AnswerResolver<FakeProvider> {
        AnswerResolver::new(provider, CompletionOptions::default())
    }

    #[tokio::test]
    async fn test_integer_operators() {
        let resolver = resolver(FakeProvider::replying("unused"));
        let cases = [
            ("3 + 4", "The answer is 7."),
            ("10 - 25", "The answer is -15."),
            ("12 * 12", "The answer is 144."),
            ("0 * 99", "The answer is 0."),
            ("123456789 * 987654321", "The answer is 121932631112635269."),
        ];

        for (question, expected) in cases {
            assert_eq!(resolver.resolve(question).await.as_str(), expected);
        }
    }

    #[tokio::test]
    async fn test_division() {
        let resolver = resolver(FakeProvider::replying("unused"));
        assert_eq!(
            resolver.resolve("6 / 0").await.as_str(),
            "The answer is undefined (division by zero)."
        );
        assert_eq!(resolver.resolve("7 / 2").await.as_str(), "The answer is 3.5.");
        assert_eq!(resolver.resolve("6 / 3").await.as_str(), "The answer is 2.0.");
    }

    #[tokio::test]
    async fn test_irregular_whitespace() {
        let resolver = resolver(FakeProvider::replying("unused"));
        assert_eq!(
            resolver.resolve("  3   +   4 ").await.as_str(),
            "The answer is 7."
        );
    }

    #[tokio::test]
    async fn test_large_integers_are_exact() {
        let provider = FakeProvider::replying("unused");
        let resolver = resolver(provider.clone());

        assert_eq!(
            resolver.resolve(format!("{} + 1", "9".repeat(40))).await.as_str(),
            format!("The answer is 1{}.", "0".repeat(40))
        );
        assert_eq!(
            resolver
                .resolve("99999999999999999999 * 99999999999999999999")
                .await
                .as_str(),
            "The answer is 9999999999999999999800000000000000000001."
        );
        assert_eq!(
            resolver
                .resolve(format!("1 - {}", "1".repeat(45)))
                .await
                .as_str(),
            format!("The answer is -{}0.", "1".repeat(44))
        );

        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_unicode_digits_are_arithmetic() {
        let resolver = resolver(FakeProvider::replying("unused"));
        assert_eq!(resolver.resolve("٣ + ٤").await.as_str(), "The answer is 7.");
    }

    #[tokio::test]
    async fn test_quotient_too_large_apologizes() {
        let provider = FakeProvider::replying("unused");
        let resolver = resolver(provider.clone());

        let huge = format!("1{} / 3", "0".repeat(400));
        assert_eq!(resolver.resolve(huge).await.as_str(), ARITHMETIC_APOLOGY);
        assert!(provider.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_keywords_by_containment() {
        let resolver = resolver(FakeProvider::replying("unused"));
        assert_eq!(
            resolver.resolve("hi there").await.as_str(),
            "Hello! How can I assist you today?"
        );
        assert_eq!(
            resolver.resolve("What is your name?").await.as_str(),
            "I am AI Study Buddy, here to help you with your learning!"
        );
        assert_eq!(
            resolver.resolve("Tell me about PYTHON").await.as_str(),
            "Python is a popular programming language, known for its simplicity and versatility in fields like AI, web development, and data science."
        );
    }

    #[tokio::test]
    async fn test_arithmetic_wins_over_keywords() {
        let resolver = resolver(FakeProvider::replying("unused"));
        let resolution = resolver
            .try_resolve(&Question::new("1 + 1"))
            .await
            .unwrap();
        assert_eq!(resolution.tier, Tier::Arithmetic);
    }

    #[tokio::test]
    async fn test_delegates_original_case_and_trims() {
        let provider = FakeProvider::replying("\n\n  Rust is a systems language.  \n");
        let resolver = resolver(provider.clone());

        let resolution = resolver
            .try_resolve(&Question::new("Tell me about Rust"))
            .await
            .unwrap();

        assert_eq!(resolution.tier, Tier::Completion);
        assert_eq!(resolution.answer.as_str(), "Rust is a systems language.");
        assert_eq!(
            provider.prompts(),
            vec![("Tell me about Rust".to_string(), CompletionOptions::default())]
        );
    }

    #[tokio::test]
    async fn test_service_error_prefix() {
        let resolver = resolver(FakeProvider::failing(CompletionError::MissingApiKey));
        assert_eq!(
            resolver.resolve("tell me about rust").await.as_str(),
            "OpenAI API error: No API key provided"
        );
    }

    #[tokio::test]
    async fn test_connection_error_prefix() {
        let resolver = resolver(FakeProvider::failing(CompletionError::Connection(
            "dns error: failed to lookup address".to_string(),
        )));
        assert_eq!(
            resolver.resolve("tell me about rust").await.as_str(),
            "Connection error: dns error: failed to lookup address"
        );
    }

    #[tokio::test]
    async fn test_works_behind_trait_object() {
        let provider: Arc<dyn CompletionProvider> = FakeProvider::replying("ok");
        let resolver = AnswerResolver::new(provider, CompletionOptions::default());
        assert_eq!(resolver.resolve("tell me about rust").await.as_str(), "ok");
    }
}
