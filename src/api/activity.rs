//! # Activity API Module
//!
//! Read side of the activity log. Writes happen inside the transactions of
//! the operations they describe (registration, animal registration,
//! booking, review).

use crate::{models, repo, rest::errors::ApiError};

pub async fn list_user_activity(
    user_id: i64,
    user_type: models::principal::PrincipalKind,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::activity::UserActivity>, ApiError> {
    Ok(repo.get_user_activity(user_id, user_type).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::MockAppRepo;
    use mockall::predicate::*;

    #[ntex::test]
    async fn test_list_user_activity_scoped_by_kind() {
        let mut mock_repo = MockAppRepo::new();
        mock_repo
            .expect_get_user_activity()
            .with(eq(11), eq(models::principal::PrincipalKind::AnimalOwner))
            .times(1)
            .returning(|user_id, user_type| {
                Ok(vec![models::activity::UserActivity::new(
                    user_id,
                    user_type,
                    "appointment",
                    "Scheduled appointment for animal 42".into(),
                )])
            });

        let mock_repo: Box<dyn repo::AppRepo> = Box::new(mock_repo);
        let result = list_user_activity(
            11,
            models::principal::PrincipalKind::AnimalOwner,
            &mock_repo,
        )
        .await;

        assert!(result.is_ok_and(|entries| {
            entries.len() == 1 && entries[0].activity_type == "appointment"
        }));
    }
}
