use crate::error::AppError;
use crate::model::responses::Page;
use crate::presentation::excuse::{Excuse, ExcuseReview, NewExcuse, SubmittedExcuse};
use async_trait::async_trait;

/// Interface for the excuse service
#[async_trait]
pub trait ExcuseService: Send + Sync {
    /// Gets the excuses visible to the current user
    async fn get_excuses(&self) -> Result<Page<Excuse>, AppError>;

    /// Gets a single excuse
    async fn get_excuse(&self, id: i64) -> Result<Excuse, AppError>;

    /// Submits an excuse, optionally with a supporting document
    ///
    /// The API answers with the submitted fields only, not the stored excuse.
    async fn submit_excuse(&self, excuse: &NewExcuse) -> Result<SubmittedExcuse, AppError>;

    /// Approves or rejects an excuse (instructors only)
    ///
    /// Returns the decision as recorded by the API.
    async fn review_excuse(
        &self,
        id: i64,
        review: &ExcuseReview,
    ) -> Result<ExcuseReview, AppError>;
}
