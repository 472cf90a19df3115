//! Data models for iou-wizard
//!
//! Amounts, participants, the report context and the host-owned draft state
//! the wizard reads.

pub mod iou;
pub mod money;
pub mod participant;
pub mod report;

pub use iou::{CurrentUser, IouDraft, IouType, NetworkStatus, PaymentMethod};
pub use money::{currency_symbol, is_valid_amount_draft, Money, MoneyParseError};
pub use participant::{
    participants_for_logins, Icon, Participant, PersonalDetails, PersonalDetailsList,
};
pub use report::{Report, ReportId, RouteParams};
