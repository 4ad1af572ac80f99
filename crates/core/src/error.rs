#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Entity missing under the caller's scope. A record owned by another
    /// company must produce exactly this error, never a hint that it exists.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Returned for both unknown email and wrong password so the two cases
    /// cannot be told apart by a caller probing for accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No valid admin session accompanies the request.
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    /// The document collaborator failed; the request row is left untouched.
    #[error("Document generation failed: {0}")]
    DocumentGeneration(String),

    /// Deployment fault: the single company record is missing.
    #[error("No company is configured")]
    NoCompanyConfigured,

    #[error("Internal error: {0}")]
    Internal(String),
}
