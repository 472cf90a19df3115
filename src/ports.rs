//! Ports between the wizard and its host
//!
//! The wizard reads host state through [`WizardSource`] and issues commands
//! through [`IouActions`], [`PersonalDetailsActions`] and [`ModalNavigator`].
//! Commands are fire-and-forget: their outcome comes back later as a changed
//! [`IouDraft`] snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{
    CurrentUser, IouDraft, Money, NetworkStatus, Participant, PersonalDetailsList, Report,
    ReportId,
};

/// Request money from a single participant on a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRequest {
    pub report: Report,
    pub amount: Money,
    pub currency: String,
    pub requester_login: String,
    pub recipient: Participant,
    pub comment: String,
}

/// Split an amount between several participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    pub participants: Vec<Participant>,
    pub current_user_login: String,
    pub amount: Money,
    pub comment: String,
    pub currency: String,
    pub locale: String,
}

/// Pay a single recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyPayment {
    pub report: Report,
    pub amount: Money,
    pub currency: String,
    pub comment: String,
    pub payer_login: String,
    pub recipient: Participant,
}

/// Commands against the shared draft and report state
pub trait IouActions {
    fn request_money(&mut self, request: MoneyRequest);

    /// Split on a report the user is already viewing
    fn split_bill(&mut self, split: BillSplit, report_id: ReportId);

    /// Split, create the report, and navigate to it
    fn split_bill_and_open_report(&mut self, split: BillSplit);

    fn send_money_elsewhere(&mut self, payment: MoneyPayment);
    fn send_money_via_paypal(&mut self, payment: MoneyPayment);
    fn send_money_with_wallet(&mut self, payment: MoneyPayment);

    fn set_selected_currency(&mut self, currency_code: &str);
    fn set_draft_comment(&mut self, comment: &str);
}

pub trait PersonalDetailsActions {
    /// Refetch currency and location defaults
    fn refresh_defaults(&mut self);
}

pub trait ModalNavigator {
    fn dismiss_modal(&mut self);
}

/// Message lookup
pub trait Translate {
    fn translate(&self, key: &str) -> String;

    /// Look up `key` and substitute each `{name}` with its value
    fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.translate(key), |message, (name, value)| {
                message.replace(&format!("{{{}}}", name), value)
            })
    }
}

/// Read side of the host store
pub trait WizardSource {
    fn iou_draft(&self) -> IouDraft;
    fn network(&self) -> NetworkStatus;
    fn current_user(&self) -> CurrentUser;
    fn personal_details(&self) -> &PersonalDetailsList;
}

/// Everything a mounted wizard talks to
pub trait WizardHost:
    WizardSource + IouActions + PersonalDetailsActions + ModalNavigator
{
}

impl<T> WizardHost for T where
    T: WizardSource + IouActions + PersonalDetailsActions + ModalNavigator
{
}
