//! Affiliate configuration editor
//!
//! Holds the draft while the user edits it, prices it live and gates the
//! save through validation. State machine:
//!
//! ```text
//! Editing --begin_submit--> Submitting --complete_submit--> Closed
//!    ^                          |
//!    +-------fail_submit--------+
//! ```
//!
//! A failed save returns to `Editing` with the draft untouched. There is no
//! automatic retry; the user resubmits.

use crate::pricing::{
    PricingLimits, PricingResult, ValidationError, compute_pricing, validate_affiliate,
};
use affiliate_client::{AffiliateApi, ClientError};
use serde::Serialize;
use shared::models::{Affiliate, AffiliateUpdate};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorState {
    /// Form open, live preview active
    Editing,
    /// Save in flight, form disabled
    Submitting,
    /// Saved
    Closed,
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", .0.user_message())]
    Persistence(#[from] ClientError),

    #[error("Cannot {action} while {state:?}")]
    InvalidState {
        state: EditorState,
        action: &'static str,
    },
}

/// Edit session for one affiliate
#[derive(Debug, Clone)]
pub struct ConfigEditor {
    affiliate_id: i64,
    affiliate_code: String,
    draft: AffiliateUpdate,
    limits: PricingLimits,
    state: EditorState,
    last_error: Option<String>,
}

impl ConfigEditor {
    /// Open an editor pre-filled from the stored affiliate
    pub fn open(affiliate: &Affiliate, limits: PricingLimits) -> Self {
        Self {
            affiliate_id: affiliate.id,
            affiliate_code: affiliate.affiliate_code.clone(),
            draft: AffiliateUpdate::from(affiliate),
            limits,
            state: EditorState::Editing,
            last_error: None,
        }
    }

    pub fn affiliate_id(&self) -> i64 {
        self.affiliate_id
    }

    /// Read-only; not part of the saved payload
    pub fn affiliate_code(&self) -> &str {
        &self.affiliate_code
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &AffiliateUpdate {
        &self.draft
    }

    pub fn limits(&self) -> &PricingLimits {
        &self.limits
    }

    /// Message from the last rejected save, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn require(&self, expected: EditorState, action: &'static str) -> Result<(), EditorError> {
        if self.state != expected {
            return Err(EditorError::InvalidState {
                state: self.state,
                action,
            });
        }
        Ok(())
    }

    /// Apply a change to the draft (only while editing)
    pub fn edit(&mut self, change: impl FnOnce(&mut AffiliateUpdate)) -> Result<(), EditorError> {
        self.require(EditorState::Editing, "edit")?;
        change(&mut self.draft);
        Ok(())
    }

    /// Price the draft against the reference price
    pub fn preview(&self) -> PricingResult {
        compute_pricing(&self.draft.config, self.limits.reference_price)
    }

    /// Validate the draft without changing state
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_affiliate(&self.draft, &self.limits)
    }

    /// `Editing -> Submitting` if the draft is valid. Returns the payload to send.
    pub fn begin_submit(&mut self) -> Result<AffiliateUpdate, EditorError> {
        self.require(EditorState::Editing, "submit")?;
        if let Err(err) = self.validate() {
            tracing::debug!(
                affiliate_id = self.affiliate_id,
                field = err.field(),
                "Draft rejected"
            );
            self.last_error = Some(err.to_string());
            return Err(err.into());
        }
        self.last_error = None;
        self.state = EditorState::Submitting;
        Ok(self.draft.clone())
    }

    /// `Submitting -> Editing`, keeping the draft for resubmission
    pub fn fail_submit(&mut self, message: impl Into<String>) -> Result<(), EditorError> {
        self.require(EditorState::Submitting, "fail submit")?;
        let message = message.into();
        tracing::warn!(
            affiliate_id = self.affiliate_id,
            error = %message,
            "Affiliate save failed"
        );
        self.last_error = Some(message);
        self.state = EditorState::Editing;
        Ok(())
    }

    /// `Submitting -> Closed`
    pub fn complete_submit(&mut self) -> Result<(), EditorError> {
        self.require(EditorState::Submitting, "complete submit")?;
        self.state = EditorState::Closed;
        Ok(())
    }

    /// Validate, send once, and move to `Closed` or back to `Editing`
    pub async fn save<A>(&mut self, api: &A) -> Result<Affiliate, EditorError>
    where
        A: AffiliateApi + ?Sized,
    {
        let payload = self.begin_submit()?;
        match api.update_affiliate(self.affiliate_id, &payload).await {
            Ok(saved) => {
                self.complete_submit()?;
                tracing::info!(affiliate_id = self.affiliate_id, "Affiliate configuration saved");
                Ok(saved)
            }
            Err(err) => {
                self.fail_submit(err.user_message())?;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AffiliateConfig;

    fn affiliate() -> Affiliate {
        Affiliate {
            id: 5,
            name: "Jane Trader".to_string(),
            email: "jane@example.com".to_string(),
            affiliate_code: "JANE10".to_string(),
            config: AffiliateConfig::percentage_discount(10.0).with_commission_rate(5.0),
            created_at: 0,
        }
    }

    fn editor() -> ConfigEditor {
        ConfigEditor::open(&affiliate(), PricingLimits::new(2999.99))
    }

    #[test]
    fn test_open_prefills_draft() {
        let e = editor();
        assert_eq!(e.state(), EditorState::Editing);
        assert_eq!(e.affiliate_code(), "JANE10");
        assert_eq!(e.draft().name, "Jane Trader");
        assert!(e.last_error().is_none());
    }

    #[test]
    fn test_preview_follows_edits() {
        let mut e = editor();
        let before = e.preview();

        e.edit(|d| d.config.discount_percentage = Some(20.0)).unwrap();
        let after = e.preview();

        assert!(after.final_price < before.final_price);
        assert!(after.commission_amount < before.commission_amount);
    }

    #[test]
    fn test_invalid_draft_stays_editing() {
        let mut e = editor();
        e.edit(|d| d.config.discount_percentage = Some(51.0)).unwrap();

        let err = e.begin_submit().unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::InvalidDiscountPercentage { .. })
        ));
        assert_eq!(e.state(), EditorState::Editing);
        assert!(e.last_error().unwrap().contains("Discount percentage"));
    }

    #[test]
    fn test_submit_transitions() {
        let mut e = editor();
        let payload = e.begin_submit().unwrap();
        assert_eq!(payload.name, "Jane Trader");
        assert_eq!(e.state(), EditorState::Submitting);

        // Form is disabled while submitting
        assert!(matches!(
            e.edit(|d| d.name.clear()),
            Err(EditorError::InvalidState { state: EditorState::Submitting, .. })
        ));
        assert!(e.begin_submit().is_err());

        e.fail_submit("Service unavailable").unwrap();
        assert_eq!(e.state(), EditorState::Editing);
        assert_eq!(e.last_error(), Some("Service unavailable"));
        assert_eq!(e.draft().name, "Jane Trader");

        e.begin_submit().unwrap();
        e.complete_submit().unwrap();
        assert_eq!(e.state(), EditorState::Closed);
        assert!(e.edit(|d| d.name.clear()).is_err());
    }

    #[test]
    fn test_complete_requires_submitting() {
        let mut e = editor();
        assert!(matches!(
            e.complete_submit(),
            Err(EditorError::InvalidState { state: EditorState::Editing, .. })
        ));
        assert!(e.fail_submit("x").is_err());
    }
}
