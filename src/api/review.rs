//! # Review API Module

use crate::{consts, models, repo, rest::errors::ApiError};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    #[serde(default)]
    pub owner_id: i64,
    #[serde(default)]
    pub veterinarian_id: i64,
    #[serde(default)]
    pub review_text: String,
}

impl SubmitReviewRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.owner_id <= 0 {
            return Err(ApiError::missing_field("owner_id"));
        }
        if self.veterinarian_id <= 0 {
            return Err(ApiError::missing_field("veterinarian_id"));
        }
        if self.review_text.trim().is_empty() {
            return Err(ApiError::missing_field("review_text"));
        }

        Ok(())
    }
}

pub async fn submit_review(
    request: SubmitReviewRequest,
    repo: &repo::ImplAppRepo,
) -> Result<i64, ApiError> {
    request.validate()?;

    if repo
        .get_veterinarian_by_id(request.veterinarian_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Veterinarian"));
    }

    let review = models::review::Review {
        id: 0,
        veterinarian_id: request.veterinarian_id,
        owner_id: request.owner_id,
        review_text: request.review_text.clone(),
        created_at: Utc::now(),
    };
    let activity = models::activity::UserActivity::new(
        request.owner_id,
        models::principal::PrincipalKind::AnimalOwner,
        consts::REVIEW_ACTIVITY,
        format!(
            "Reviewed veterinarian {}: {}",
            request.veterinarian_id, request.review_text
        ),
    );

    Ok(repo.insert_review(&review, &activity).await?)
}

/// Reviews for a veterinarian joined with each author's display name,
/// newest first.
pub async fn list_vet_reviews(
    veterinarian_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::review::ReviewView>, ApiError> {
    Ok(repo.get_vet_reviews(veterinarian_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    fn review_request() -> SubmitReviewRequest {
        SubmitReviewRequest {
            owner_id: 11,
            veterinarian_id: 3,
            review_text: "Great with nervous cats".into(),
        }
    }

    fn test_vet(id: i64) -> models::principal::Veterinarian {
        models::principal::Veterinarian {
            id,
            name: "Dr. V".into(),
            email: "vet@x.com".into(),
            password_hash: "h".into(),
            license_number: "LIC-1".into(),
            national_id: "NID-1".into(),
            clinic: "Happy Paws".into(),
            specialization: "Surgery".into(),
            profile_image: None,
            reset_token: None,
            reset_token_expiry: None,
            created_at: Utc::now(),
        }
    }

    #[ntex::test]
    async fn test_submit_review_success() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_veterinarian_by_id()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(test_vet(3))));
        mock_repo
            .expect_insert_review()
            .withf(|review, activity| {
                review.veterinarian_id == 3
                    && review.owner_id == 11
                    && activity.activity_type == consts::REVIEW_ACTIVITY
            })
            .times(1)
            .returning(|_, _| Ok(8));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = submit_review(review_request(), &mock_repo).await;

        assert!(result.is_ok_and(|review_id| review_id == 8));
    }

    #[ntex::test]
    async fn test_submit_review_unknown_vet_is_not_found() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_veterinarian_by_id()
            .returning(|_| Ok(None));

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = submit_review(review_request(), &mock_repo).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[ntex::test]
    async fn test_submit_review_blank_text_fails_validation() {
        let mock_repo: Box<dyn repo::AppRepo> = Box::new(MockAppRepo::new());

        let request = SubmitReviewRequest {
            review_text: "   ".into(),
            ..review_request()
        };
        let result = submit_review(request, &mock_repo).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[ntex::test]
    async fn test_list_vet_reviews_passes_through() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_vet_reviews()
            .with(eq(3))
            .times(1)
            .returning(|_| {
                Ok(vec![models::review::ReviewView {
                    id: 8,
                    veterinarian_id: 3,
                    owner_id: 11,
                    owner_name: "A".into(),
                    review_text: "Great with nervous cats".into(),
                    created_at: Utc::now(),
                }])
            });

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = list_vet_reviews(3, &mock_repo).await;

        assert!(result.is_ok_and(|reviews| reviews.len() == 1 && reviews[0].owner_name == "A"));
    }
}
