use crate::error::AppError;
use crate::presentation::user::{ProfileUpdate, UserProfile};
use async_trait::async_trait;

/// Interface for the profile service
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Gets the profile of the authenticated user
    async fn get_profile(&self) -> Result<UserProfile, AppError>;

    /// Updates the editable profile fields
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AppError>;
}
