use thiserror::Error;

use crate::models::PublicUser;
use crate::services::UserDirectory;

/// Errors that can occur while resolving a match list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("User {0} not found")]
    UserNotFound(u64),
}

/// Computes the visible match list for a user.
///
/// # Pipeline
/// 1. Resolve the requesting user; absence is an error.
/// 2. Short-circuit on an empty interest set - no directory-wide scan.
/// 3. Scan the directory for users sharing any interest.
/// 4. Drop the requester from the result.
/// 5. Strip the password from every returned record.
///
/// No ranking or scoring is applied; results come back in ascending-id
/// order, which is the directory's scan order.
#[derive(Debug, Clone, Default)]
pub struct MatchResolver;

impl MatchResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn find_matches(
        &self,
        directory: &UserDirectory,
        user_id: u64,
    ) -> Result<Vec<PublicUser>, ResolveError> {
        if directory.get_user(user_id).is_none() {
            return Err(ResolveError::UserNotFound(user_id));
        }

        let interests = directory.get_user_interests(user_id);
        if interests.is_empty() {
            return Ok(Vec::new());
        }

        let matches = directory
            .get_users_by_interests(&interests)
            .into_iter()
            .filter(|user| user.id != user_id)
            .map(PublicUser::from)
            .collect();

        Ok(matches)
    }
}
