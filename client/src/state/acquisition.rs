//! Acquisition modal state: selection plus the simulated purchase flow.
//!
//! DESIGN
//! ======
//! The purchase is a three-step simulation with no backend:
//! `Idle -> Scanning -> Complete`. Scanning ends after `SCAN_DURATION` via a
//! timer the component owns. Each open/close bumps `generation`; `confirm`
//! hands out a `ScanTicket` stamped with the current generation, and
//! `finish_scan` ignores tickets from an earlier opening, so a timer that
//! fires after the modal closed cannot touch the new state.

#[cfg(test)]
#[path = "acquisition_test.rs"]
mod acquisition_test;

use std::time::Duration;

use super::catalog::Product;

/// Simulated verification delay between `Scanning` and `Complete`.
pub const SCAN_DURATION: Duration = Duration::from_millis(2500);

/// Step of the simulated purchase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseStep {
    #[default]
    Idle,
    Scanning,
    Complete,
}

impl PurchaseStep {
    /// Call-to-action label for the confirm button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Secure Piece",
            Self::Scanning => "Verifying DNA...",
            Self::Complete => "Ownership Verified",
        }
    }
}

/// Proof that a scan was started during a particular modal opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTicket(u64);

/// Source of cosmetic transaction ids.
pub trait TransactionIdSource {
    fn next_id(&mut self) -> String;
}

/// Draws 32 random bits per id from a v4 UUID.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTransactionIds;

impl TransactionIdSource for RandomTransactionIds {
    #[allow(clippy::cast_possible_truncation)]
    fn next_id(&mut self) -> String {
        format_transaction_id(uuid::Uuid::new_v4().as_u128() as u32)
    }
}

/// Eight uppercase hex digits, zero padded.
#[must_use]
pub fn format_transaction_id(bits: u32) -> String {
    format!("{bits:08X}")
}

/// State for the acquisition modal.
#[derive(Clone, Debug, Default)]
pub struct AcquisitionState {
    selected: Option<&'static Product>,
    step: PurchaseStep,
    transaction_id: Option<String>,
    generation: u64,
}

impl AcquisitionState {
    #[must_use]
    pub fn selected(&self) -> Option<&'static Product> {
        self.selected
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn step(&self) -> PurchaseStep {
        self.step
    }

    #[must_use]
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// Open the modal for `product`, resetting any purchase in progress.
    pub fn open(&mut self, product: &'static Product) {
        self.reset();
        self.selected = Some(product);
    }

    /// Dismiss the modal and reset the purchase.
    pub fn close(&mut self) {
        self.reset();
        self.selected = None;
    }

    /// Start scanning. Only valid from `Idle` with a product selected.
    pub fn confirm(&mut self) -> Option<ScanTicket> {
        if self.selected.is_none() || self.step != PurchaseStep::Idle {
            return None;
        }
        self.step = PurchaseStep::Scanning;
        Some(ScanTicket(self.generation))
    }

    /// Complete the scan started with `ticket`.
    ///
    /// Returns `false` and leaves state alone if the ticket belongs to an
    /// earlier opening or no scan is running.
    pub fn finish_scan(&mut self, ticket: ScanTicket, ids: &mut impl TransactionIdSource) -> bool {
        if ticket.0 != self.generation || self.step != PurchaseStep::Scanning {
            return false;
        }
        self.step = PurchaseStep::Complete;
        self.transaction_id = Some(ids.next_id());
        true
    }

    fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.step = PurchaseStep::Idle;
        self.transaction_id = None;
    }
}
