//! Local backend
//!
//! An in-process stand-in for the host store and action module. It owns the
//! draft, network status and personal details the wizard reads, and turns
//! every command into an [`ActionRecord`]. Actions start in flight and stay
//! there until [`LocalBackend::settle`] completes or fails them, which is
//! what the wizard's reactor then observes.

pub mod journal;

pub use journal::{ActionJournal, ActionRecord, ActionStatus};

use uuid::Uuid;

use crate::config::Settings;
use crate::models::{
    CurrentUser, IouDraft, NetworkStatus, Participant, PersonalDetailsList, ReportId,
};
use crate::ports::{
    BillSplit, IouActions, ModalNavigator, MoneyPayment, MoneyRequest, PersonalDetailsActions,
    WizardSource,
};
use crate::wizard::ActionKind;

/// In-memory host for the wizard
#[derive(Debug, Clone)]
pub struct LocalBackend {
    draft: IouDraft,
    network: NetworkStatus,
    user: CurrentUser,
    personal_details: PersonalDetailsList,
    records: Vec<ActionRecord>,
    modal_open: bool,
    defaults_refreshes: usize,
    opened_report: Option<ReportId>,
    fail_next: bool,
}

impl LocalBackend {
    pub fn new(user: CurrentUser, personal_details: PersonalDetailsList) -> Self {
        Self {
            draft: IouDraft::default(),
            network: NetworkStatus::online(),
            user,
            personal_details,
            records: Vec::new(),
            modal_open: true,
            defaults_refreshes: 0,
            opened_report: None,
            fail_next: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.current_user(), settings.personal_details.clone())
    }

    /// Make the next settled action fail
    pub fn fail_next(&mut self, fail: bool) {
        self.fail_next = fail;
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.network.is_offline = offline;
    }

    /// The user typed a comment on the confirmation page
    pub fn edit_comment(&mut self, comment: impl Into<String>) {
        self.draft.comment = comment.into();
    }

    /// The user picked a currency on the amount page
    pub fn pick_currency(&mut self, currency_code: impl Into<String>) {
        self.draft.selected_currency_code = Some(currency_code.into());
    }

    /// Finish the in-flight action, succeeding unless [`fail_next`] was set.
    /// Returns the resulting status, or `None` when nothing was in flight.
    ///
    /// [`fail_next`]: LocalBackend::fail_next
    pub fn settle(&mut self) -> Option<ActionStatus> {
        if !self.draft.creating_in_flight {
            return None;
        }

        let status = if self.fail_next {
            ActionStatus::Failed
        } else {
            ActionStatus::Completed
        };
        self.fail_next = false;
        self.draft.creating_in_flight = false;
        self.draft.error = status == ActionStatus::Failed;

        if let Some(record) = self.records.last_mut() {
            record.status = status;
            tracing::info!(id = %record.short_id(), %status, "action settled");
        }
        Some(status)
    }

    pub fn draft(&self) -> &IouDraft {
        &self.draft
    }

    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    /// Drain recorded actions, e.g. to append them to the journal
    pub fn take_records(&mut self) -> Vec<ActionRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn defaults_refreshes(&self) -> usize {
        self.defaults_refreshes
    }

    /// Report created by the last split-and-open action
    pub fn opened_report(&self) -> Option<ReportId> {
        self.opened_report
    }

    fn begin(&mut self, record: ActionRecord) {
        tracing::info!(
            id = %record.short_id(),
            kind = %record.kind,
            minor = record.amount.minor(),
            currency = %record.currency,
            "action received"
        );
        self.draft.creating_in_flight = true;
        self.draft.error = false;
        self.records.push(record);
    }

    fn payment(&mut self, kind: ActionKind, payment: MoneyPayment) {
        let record = ActionRecord::new(
            kind,
            payment.amount,
            payment.currency,
            payment.payer_login,
            vec![payment.recipient.login],
        )
        .with_comment(payment.comment)
        .with_report(payment.report.report_id);
        self.begin(record);
    }

    fn split(&mut self, kind: ActionKind, split: BillSplit, report_id: ReportId) {
        let participants = split
            .participants
            .iter()
            .map(|p: &Participant| p.login.clone())
            .collect();
        let record = ActionRecord::new(
            kind,
            split.amount,
            split.currency,
            split.current_user_login,
            participants,
        )
        .with_comment(split.comment)
        .with_report(Some(report_id));
        self.begin(record);
    }
}

fn new_report_id() -> ReportId {
    // Positive id that fits comfortably in a JS-safe integer.
    ReportId::new((Uuid::new_v4().as_u128() % 1_000_000_000_000) as u64 + 1)
}

impl WizardSource for LocalBackend {
    fn iou_draft(&self) -> IouDraft {
        self.draft.clone()
    }

    fn network(&self) -> NetworkStatus {
        self.network
    }

    fn current_user(&self) -> CurrentUser {
        self.user.clone()
    }

    fn personal_details(&self) -> &PersonalDetailsList {
        &self.personal_details
    }
}

impl IouActions for LocalBackend {
    fn request_money(&mut self, request: MoneyRequest) {
        let record = ActionRecord::new(
            ActionKind::RequestMoney,
            request.amount,
            request.currency,
            request.requester_login,
            vec![request.recipient.login],
        )
        .with_comment(request.comment)
        .with_report(request.report.report_id);
        self.begin(record);
    }

    fn split_bill(&mut self, split: BillSplit, report_id: ReportId) {
        self.split(ActionKind::SplitBill, split, report_id);
    }

    fn split_bill_and_open_report(&mut self, split: BillSplit) {
        let report_id = new_report_id();
        self.opened_report = Some(report_id);
        self.split(ActionKind::SplitBillAndOpenReport, split, report_id);
    }

    fn send_money_elsewhere(&mut self, payment: MoneyPayment) {
        self.payment(ActionKind::SendMoneyElsewhere, payment);
    }

    fn send_money_via_paypal(&mut self, payment: MoneyPayment) {
        self.payment(ActionKind::SendMoneyViaPaypal, payment);
    }

    fn send_money_with_wallet(&mut self, payment: MoneyPayment) {
        self.payment(ActionKind::SendMoneyWithWallet, payment);
    }

    fn set_selected_currency(&mut self, currency_code: &str) {
        self.draft.selected_currency_code = Some(currency_code.to_string());
    }

    fn set_draft_comment(&mut self, comment: &str) {
        self.draft.comment = comment.to_string();
    }
}

impl PersonalDetailsActions for LocalBackend {
    fn refresh_defaults(&mut self) {
        self.defaults_refreshes += 1;
        tracing::debug!(count = self.defaults_refreshes, "refreshing currency defaults");
    }
}

impl ModalNavigator for LocalBackend {
    fn dismiss_modal(&mut self) {
        self.modal_open = false;
        tracing::debug!("modal dismissed");
    }
}
