use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user_profile::{entities::UserProfile, value_objects::UpdateUserProfileInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    fn get(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;

    fn upsert(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

pub trait UserProfileService: Send + Sync {
    /// Stored profile, or an empty one for users who never onboarded.
    fn get_profile(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        user_id: Uuid,
        input: UpdateUserProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
