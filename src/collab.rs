//! Collaborator seams
//!
//! The engine never talks to the recognition service or the data store
//! itself. These traits describe what the surrounding application provides.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::models::{FoodEstimate, FoodLogEntry, UserProfile};

/// Collaborator error types
#[derive(Debug, Error)]
pub enum CollabError {
    #[error("Food recognition failed: {0}")]
    Recognition(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("No profile for user {0}")]
    ProfileNotFound(String),
}

/// Result type for collaborator calls
pub type CollabResult<T> = Result<T, CollabError>;

/// Image based food recognition
#[async_trait]
pub trait FoodRecognizer: Send + Sync {
    async fn recognize(&self, image: &[u8], mime_type: &str) -> CollabResult<FoodEstimate>;
}

/// Read access to logged foods and the user profile
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Entries logged in `[from, to)`
    async fn logs_between(
        &self,
        user_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CollabResult<Vec<FoodLogEntry>>;

    async fn profile(&self, user_id: &str) -> CollabResult<Option<UserProfile>>;

    /// Glasses of water logged on a local date
    async fn water_glasses(&self, user_id: &str, date: NaiveDate) -> CollabResult<u32>;
}

/// Recognize a food, substituting a zeroed estimate on failure.
///
/// Partial or invalid numbers never reach the scoring functions.
pub async fn recognize_or_default(
    recognizer: &dyn FoodRecognizer,
    image: &[u8],
    mime_type: &str,
) -> FoodEstimate {
    match recognizer.recognize(image, mime_type).await {
        Ok(mut estimate) => {
            estimate.nutrition = estimate.nutrition.sanitized();
            estimate
        }
        Err(e) => {
            tracing::warn!("Falling back to an empty estimate: {}", e);
            FoodEstimate::unknown()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;

    struct FixedRecognizer(Option<FoodEstimate>);

    #[async_trait]
    impl FoodRecognizer for FixedRecognizer {
        async fn recognize(&self, _image: &[u8], _mime_type: &str) -> CollabResult<FoodEstimate> {
            self.0
                .clone()
                .ok_or_else(|| CollabError::Recognition("timeout".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failure_gives_zeroed_estimate() {
        let estimate = recognize_or_default(&FixedRecognizer(None), b"jpeg", "image/jpeg").await;
        assert_eq!(estimate, FoodEstimate::unknown());
        assert_eq!(estimate.nutrition, Nutrition::zero());
    }

    #[tokio::test]
    async fn test_success_is_sanitized() {
        let raw = FoodEstimate {
            name: "Pad thai".to_string(),
            nutrition: Nutrition {
                calories: 600.0,
                fat: f64::NAN,
                ..Nutrition::zero()
            },
            ..FoodEstimate::default()
        };
        let estimate = recognize_or_default(&FixedRecognizer(Some(raw)), b"jpeg", "image/jpeg").await;
        assert_eq!(estimate.name, "Pad thai");
        assert_eq!(estimate.nutrition.calories, 600.0);
        assert_eq!(estimate.nutrition.fat, 0.0);
    }
}
