//! Submission dispatch
//!
//! Picks exactly one action for a confirmed request and hands it to the
//! [`IouActions`] port. Dispatch never fails: when there is nothing sensible
//! to send the outcome is [`Dispatch::Ignored`] and a warning is logged.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CurrentUser, IouDraft, Money, Participant, PaymentMethod, Report, RouteParams};
use crate::ports::{BillSplit, IouActions, MoneyPayment, MoneyRequest};

/// Which action was dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    RequestMoney,
    SplitBill,
    SplitBillAndOpenReport,
    SendMoneyElsewhere,
    SendMoneyViaPaypal,
    SendMoneyWithWallet,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::RequestMoney => "request_money",
            ActionKind::SplitBill => "split_bill",
            ActionKind::SplitBillAndOpenReport => "split_bill_and_open_report",
            ActionKind::SendMoneyElsewhere => "send_money_elsewhere",
            ActionKind::SendMoneyViaPaypal => "send_money_via_paypal",
            ActionKind::SendMoneyWithWallet => "send_money_with_wallet",
        }
    }

    fn for_payment(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Elsewhere => ActionKind::SendMoneyElsewhere,
            PaymentMethod::PayPalMe => ActionKind::SendMoneyViaPaypal,
            PaymentMethod::Wallet => ActionKind::SendMoneyWithWallet,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why nothing was dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownPaymentMethod(String),
    InvalidAmount(String),
    NoRecipient,
}

/// Outcome of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Sent(ActionKind),
    Ignored(IgnoreReason),
}

impl Dispatch {
    pub fn action(&self) -> Option<ActionKind> {
        match self {
            Dispatch::Sent(kind) => Some(*kind),
            Dispatch::Ignored(_) => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Dispatch::Sent(_))
    }
}

/// Everything a submission reads
#[derive(Debug, Clone, Copy)]
pub struct SubmissionContext<'a> {
    pub amount: &'a str,
    pub draft: &'a IouDraft,
    pub current_user: &'a CurrentUser,
    pub report: &'a Report,
    pub route: &'a RouteParams,
    pub has_multiple_participants: bool,
}

impl SubmissionContext<'_> {
    fn currency(&self) -> String {
        self.draft
            .currency_or(&self.current_user.local_currency_code)
            .to_string()
    }

    fn comment(&self) -> String {
        self.draft.trimmed_comment().to_string()
    }

    fn minor_amount(&self) -> Result<Money, Dispatch> {
        Money::from_draft(self.amount).map_err(|e| {
            tracing::warn!(amount = self.amount, error = %e, "not dispatching: bad amount");
            Dispatch::Ignored(IgnoreReason::InvalidAmount(self.amount.to_string()))
        })
    }
}

/// Pay the sole selected participant over `method`
pub fn send_money<A: IouActions + ?Sized>(
    ctx: &SubmissionContext<'_>,
    participants: &[Participant],
    method: PaymentMethod,
    actions: &mut A,
) -> Dispatch {
    let amount = match ctx.minor_amount() {
        Ok(amount) => amount,
        Err(ignored) => return ignored,
    };
    let Some(recipient) = participants.first() else {
        tracing::warn!(%method, "not sending money: no recipient selected");
        return Dispatch::Ignored(IgnoreReason::NoRecipient);
    };

    let payment = MoneyPayment {
        report: ctx.report.clone(),
        amount,
        currency: ctx.currency(),
        comment: ctx.comment(),
        payer_login: ctx.current_user.login.clone(),
        recipient: recipient.clone(),
    };

    match method {
        PaymentMethod::Elsewhere => actions.send_money_elsewhere(payment),
        PaymentMethod::PayPalMe => actions.send_money_via_paypal(payment),
        PaymentMethod::Wallet => actions.send_money_with_wallet(payment),
    }

    let kind = ActionKind::for_payment(method);
    tracing::info!(action = %kind, minor = amount.minor(), "dispatched");
    Dispatch::Sent(kind)
}

/// Like [`send_money`], for hosts holding the payment type as a string.
/// Unrecognised types dispatch nothing.
pub fn send_money_by_type<A: IouActions + ?Sized>(
    ctx: &SubmissionContext<'_>,
    participants: &[Participant],
    payment_type: &str,
    actions: &mut A,
) -> Dispatch {
    match PaymentMethod::parse(payment_type) {
        Some(method) => send_money(ctx, participants, method, actions),
        None => {
            tracing::warn!(payment_type, "ignoring unrecognised payment method");
            Dispatch::Ignored(IgnoreReason::UnknownPaymentMethod(payment_type.to_string()))
        }
    }
}

/// Request or split with the selected participants.
///
/// Split on the route's report when it names one, otherwise split and open a
/// new report; single-participant mode requests from `selected[0]`.
pub fn create_transaction<A: IouActions + ?Sized>(
    ctx: &SubmissionContext<'_>,
    selected: &[Participant],
    actions: &mut A,
) -> Dispatch {
    let amount = match ctx.minor_amount() {
        Ok(amount) => amount,
        Err(ignored) => return ignored,
    };

    if ctx.has_multiple_participants {
        let split = BillSplit {
            participants: selected.to_vec(),
            current_user_login: ctx.current_user.login.clone(),
            amount,
            comment: ctx.comment(),
            currency: ctx.currency(),
            locale: ctx.current_user.preferred_locale.clone(),
        };

        let kind = match ctx.route.valid_report_id() {
            Some(report_id) => {
                actions.split_bill(split, report_id);
                ActionKind::SplitBill
            }
            None => {
                actions.split_bill_and_open_report(split);
                ActionKind::SplitBillAndOpenReport
            }
        };
        tracing::info!(action = %kind, participants = selected.len(), "dispatched");
        return Dispatch::Sent(kind);
    }

    let Some(recipient) = selected.first() else {
        tracing::warn!("not requesting money: no participant selected");
        return Dispatch::Ignored(IgnoreReason::NoRecipient);
    };

    actions.request_money(MoneyRequest {
        report: ctx.report.clone(),
        amount,
        currency: ctx.currency(),
        requester_login: ctx.current_user.login.clone(),
        recipient: recipient.clone(),
        comment: ctx.comment(),
    });
    let kind = ActionKind::RequestMoney;
    tracing::info!(action = %kind, minor = amount.minor(), "dispatched");
    Dispatch::Sent(kind)
}
