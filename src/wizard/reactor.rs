//! Reactions to host state changes
//!
//! `react` is a pure function of the memory carried over from the previous
//! pass and a snapshot of host state taken at the start of this pass. It
//! returns the reactions to apply and the memory for the next pass. The new
//! memory always records the snapshot, never values produced by applying the
//! reactions, so edge detection compares start-of-pass values.

use serde::{Deserialize, Serialize};

use crate::models::{CurrentUser, IouDraft, NetworkStatus};
use crate::ports::WizardSource;

/// Host state the reactor watches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSnapshot {
    pub creating_in_flight: bool,
    pub error: bool,
    pub is_offline: bool,
    pub local_currency_code: String,
}

impl ExternalSnapshot {
    pub fn new(draft: &IouDraft, network: NetworkStatus, user: &CurrentUser) -> Self {
        Self {
            creating_in_flight: draft.creating_in_flight,
            error: draft.error,
            is_offline: network.is_offline,
            local_currency_code: user.local_currency_code.clone(),
        }
    }

    pub fn capture<S: WizardSource + ?Sized>(source: &S) -> Self {
        Self::new(&source.iou_draft(), source.network(), &source.current_user())
    }
}

/// Values held over between passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactorMemory {
    mounted: bool,
    previous_in_flight: bool,
    previous_offline: bool,
}

impl ReactorMemory {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn previous_in_flight(&self) -> bool {
        self.previous_in_flight
    }

    pub fn previous_offline(&self) -> bool {
        self.previous_offline
    }
}

/// Something the wizard must do in response to a host change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reaction {
    /// Refetch currency/location defaults
    RefreshDefaults,
    /// Reset the draft's selected currency
    SetSelectedCurrency(String),
    /// Clear the draft comment
    ClearDraftComment,
    /// The submission failed: go back to the amount step
    ReturnToAmountStep,
    /// The submission succeeded: close the modal
    DismissModal,
}

/// Run one reactor pass
pub fn react(memory: ReactorMemory, snapshot: &ExternalSnapshot) -> (ReactorMemory, Vec<Reaction>) {
    let mut reactions = Vec::new();

    if !memory.mounted {
        reactions.push(Reaction::RefreshDefaults);
        reactions.push(Reaction::SetSelectedCurrency(
            snapshot.local_currency_code.clone(),
        ));
        reactions.push(Reaction::ClearDraftComment);
    } else {
        // Falling edge of the in-flight flag.
        if memory.previous_in_flight && !snapshot.creating_in_flight {
            reactions.push(if snapshot.error {
                Reaction::ReturnToAmountStep
            } else {
                Reaction::DismissModal
            });
        }

        if memory.previous_offline && !snapshot.is_offline {
            reactions.push(Reaction::RefreshDefaults);
        }
    }

    let next = ReactorMemory {
        mounted: true,
        previous_in_flight: snapshot.creating_in_flight,
        previous_offline: snapshot.is_offline,
    };

    (next, reactions)
}
