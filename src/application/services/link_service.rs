//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::store::KeyValueStore;
use crate::error::AppError;
use crate::utils::code_generator::{fallback_code, generate_code};
use crate::utils::sanitize::strip_control_chars;

/// Service for creating and resolving prompt short links.
///
/// Short-link records are permanent and immutable: written once on creation,
/// never updated, never deleted. The record key is the short code itself.
pub struct LinkService {
    store: Arc<dyn KeyValueStore>,
}

impl LinkService {
    /// Creates a new link service backed by the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stores a prompt under a freshly allocated short code.
    ///
    /// Control characters are stripped from the prompt before storage
    /// (silent sanitization). The caller is responsible for presence and
    /// length validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with a generic message if any store
    /// round trip fails; the underlying cause is logged.
    pub async fn create_prompt_link(&self, prompt: &str) -> Result<String, AppError> {
        let sanitized = strip_control_chars(prompt);

        let code = self.allocate_code().await?;

        self.store
            .put(&code, &sanitized, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to store prompt under {}: {}", code, e);
                AppError::internal("Failed to create short URL")
            })?;

        Ok(code)
    }

    /// Looks up the prompt stored under a short code.
    ///
    /// Pure read; unknown codes return `Ok(None)` so the caller can degrade
    /// gracefully instead of surfacing an error.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.store.get(code).await?)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/s/{}", base_url.trim_end_matches('/'), code)
    }

    /// Allocates an unused short code with collision retry.
    ///
    /// Probes the store for each random candidate, up to 10 attempts. On
    /// exhaustion falls back to a time-derived code, which carries no
    /// collision guarantee under concurrent fallback use. The probe-then-write
    /// sequence is a check-then-act race; two concurrent creations can in
    /// principle allocate the same code, which is accepted.
    async fn allocate_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self
                .store
                .get(&code)
                .await
                .map_err(|e| {
                    tracing::error!("Code probe failed: {}", e);
                    AppError::internal("Failed to create short URL")
                })?
                .is_none()
            {
                return Ok(code);
            }
        }

        tracing::warn!(
            "Exhausted {} random code attempts, using timestamp fallback",
            MAX_ATTEMPTS
        );
        Ok(fallback_code())
    }
}
