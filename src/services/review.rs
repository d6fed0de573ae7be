//! Provider reviews. Stored as submitted; a provider's rating aggregate is
//! curated separately and is not recomputed here.

use serde::Deserialize;

use crate::models::{Review, ReviewRatings};
use crate::state::AppState;
use crate::store::{self, StoreError};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: String,
    pub provider_id: String,
    pub booking_id: String,
    pub ratings: ReviewRatings,
    #[serde(default)]
    pub comment: Option<String>,
}

pub async fn list_reviews(state: &AppState, provider_id: &str) -> Vec<Review> {
    state.latency.standard().await;
    let store = state.store.read().await;
    store.reviews.iter().filter(|r| r.provider_id == provider_id).cloned().collect()
}

fn score_in_range(score: u8) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Store a review.
///
/// # Errors
///
/// Returns `StoreError::Validation` if any sub-rating is outside 1..=5.
pub async fn create_review(state: &AppState, new: NewReview) -> Result<Review, StoreError> {
    let ReviewRatings { cost, speed, punctuality } = new.ratings;
    if ![cost, speed, punctuality].into_iter().all(score_in_range) {
        return Err(StoreError::Validation("review.rating.range"));
    }

    state.latency.standard().await;
    let review = Review {
        id: store::new_id(),
        user_id: new.user_id,
        provider_id: new.provider_id,
        booking_id: new.booking_id,
        ratings: new.ratings,
        comment: new.comment.filter(|c| !c.trim().is_empty()),
        created_at: store::now_rfc3339(),
    };
    state.store.write().await.reviews.push(review.clone());
    tracing::info!(review_id = %review.id, provider_id = %review.provider_id, "review created");
    Ok(review)
}

#[cfg(test)]
#[path = "review_test.rs"]
mod tests;
