//! Creature use case errors.

use blipkin_domain::{DomainError, OwnerId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while handling a creature request.
#[derive(Debug, thiserror::Error)]
pub enum CreatureError {
    #[error("No creature for owner {0}")]
    NotFound(OwnerId),
    #[error("Owner {0} already has a creature")]
    AlreadyHatched(OwnerId),
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
