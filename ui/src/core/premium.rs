//! Local-only premium interest capture.
//!
//! Shown when the daily allowance is spent. Nothing here talks to the network:
//! the chosen price point and the email land in their own storage slots as a
//! stand-in for a real collection mechanism, and the flow never touches the
//! quota slot.

use super::storage::KeyValueStore;

const PRICE_SLOT: &str = "premium_price_choice";
const EMAIL_SLOT: &str = "premium_interest_email";

/// The fixed set of monthly price points offered in the capture overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOption {
    Tl299,
    Tl399,
    Tl499,
}

impl PriceOption {
    pub const ALL: [PriceOption; 3] = [Self::Tl299, Self::Tl399, Self::Tl499];

    /// The label shown to the user, also the persisted wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tl299 => "299 TL",
            Self::Tl399 => "399 TL",
            Self::Tl499 => "499 TL",
        }
    }
}

/// Sub-state of the capture overlay. `Saved` is terminal for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureStage {
    #[default]
    ChoosingPrice,
    EnteringEmail,
    Saved,
}

/// The capture flow state machine. Selections persist immediately and
/// re-selection overwrites (last write wins); an empty email is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PremiumCapture {
    pub stage: CaptureStage,
    pub choice: Option<PriceOption>,
}

impl PremiumCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn choose(&mut self, option: PriceOption, store: &dyn KeyValueStore) {
        store.set(PRICE_SLOT, option.label());
        self.choice = Some(option);
        if self.stage == CaptureStage::ChoosingPrice {
            self.stage = CaptureStage::EnteringEmail;
        }
    }

    /// Persists a non-empty email and moves to `Saved`. Returns whether the
    /// submission was accepted; whitespace-only input is treated as empty.
    pub fn submit_email(&mut self, email: &str, store: &dyn KeyValueStore) -> bool {
        let email = email.trim();
        if email.is_empty() || self.stage == CaptureStage::Saved {
            return false;
        }
        store.set(EMAIL_SLOT, email);
        self.stage = CaptureStage::Saved;
        true
    }
}
