//! The request wizard
//!
//! `RequestWizard` walks the user through amount, participants and
//! confirmation for a request, split or send-money flow. It owns only local
//! draft state (step indices, amount, selected participants). Everything
//! else is read from, or sent to, a [`WizardHost`].
//!
//! Hosts call [`RequestWizard::observe`] after every change to their store
//! (and once per render) so the wizard can react to the in-flight flag,
//! errors and connectivity.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut wizard = RequestWizard::mount(props, &mut backend);
//! wizard.complete_amount_step("12.34");
//! wizard.create_transaction(&wizard.participants().to_vec(), &mut backend);
//! backend.settle();
//! wizard.observe(&mut backend); // dismisses the modal
//! ```

pub mod direction;
pub mod dispatch;
pub mod navigation;
pub mod reactor;
pub mod steps;
pub mod title;

pub use direction::{derive_direction, Direction};
pub use dispatch::{ActionKind, Dispatch, IgnoreReason, SubmissionContext};
pub use navigation::StepCursor;
pub use reactor::{react, ExternalSnapshot, Reaction, ReactorMemory};
pub use steps::{Step, StepSequence};
pub use title::{amount_button_label, step_title, TitleContext};

use crate::models::{
    participants_for_logins, CurrentUser, IouDraft, IouType, Participant, PaymentMethod, Report,
    RouteParams,
};
use crate::ports::{Translate, WizardHost, WizardSource};

/// What the host mounts the wizard with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardProps {
    pub report: Report,
    pub route: RouteParams,
    pub has_multiple_participants: bool,
    pub iou_type: IouType,
}

/// Multi-step money request wizard
#[derive(Debug, Clone)]
pub struct RequestWizard {
    props: WizardProps,
    steps: StepSequence,
    cursor: StepCursor,
    participants: Vec<Participant>,
    amount: String,
    reactor: ReactorMemory,
}

impl RequestWizard {
    /// Mount the wizard: seed participants from the report and run the
    /// first reactor pass.
    pub fn mount<H: WizardHost + ?Sized>(props: WizardProps, host: &mut H) -> Self {
        let participants =
            participants_for_logins(&props.report.participant_logins, host.personal_details());
        let steps = StepSequence::for_participant_count(props.report.participant_count());

        tracing::debug!(
            iou_type = %props.iou_type,
            steps = steps.len(),
            participants = participants.len(),
            "mounting request wizard"
        );

        let mut wizard = Self {
            props,
            steps,
            cursor: StepCursor::new(),
            participants,
            amount: String::new(),
            reactor: ReactorMemory::default(),
        };
        wizard.observe(host);
        wizard
    }

    /// Run a reactor pass against the host's current state and apply the
    /// resulting reactions.
    pub fn observe<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> Vec<Reaction> {
        let snapshot = ExternalSnapshot::capture(&*host);
        let (memory, reactions) = react(self.reactor, &snapshot);
        self.reactor = memory;

        for reaction in &reactions {
            tracing::debug!(?reaction, "applying reaction");
            match reaction {
                Reaction::RefreshDefaults => host.refresh_defaults(),
                Reaction::SetSelectedCurrency(code) => host.set_selected_currency(code),
                Reaction::ClearDraftComment => host.set_draft_comment(""),
                Reaction::ReturnToAmountStep => self.cursor.reset_to_start(),
                Reaction::DismissModal => host.dismiss_modal(),
            }
        }

        reactions
    }

    /// Swap in an updated report. The step sequence is recomputed only when
    /// the participant count changed.
    pub fn update_report(&mut self, report: Report) {
        if self.steps.refresh(report.participant_count()) {
            self.cursor.clamp_to(&self.steps);
            tracing::debug!(steps = self.steps.len(), "step sequence recomputed");
        }
        self.props.report = report;
    }

    pub fn props(&self) -> &WizardProps {
        &self.props
    }

    pub fn steps(&self) -> &StepSequence {
        &self.steps
    }

    pub fn current_step_index(&self) -> usize {
        self.cursor.current()
    }

    pub fn previous_step_index(&self) -> usize {
        self.cursor.previous()
    }

    pub fn current_step(&self) -> Step {
        self.steps
            .get(self.cursor.current())
            .unwrap_or(Step::Amount)
    }

    pub fn direction(&self) -> Direction {
        derive_direction(&self.steps, self.cursor.previous(), self.cursor.current())
    }

    /// The user is on the amount step because they came from Confirm to edit
    pub fn is_editing_from_confirm(&self) -> bool {
        self.cursor.previous() == self.steps.confirm_index()
            && self.cursor.current() != self.steps.confirm_index()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participants shown on the confirmation page: everyone but the current user
    pub fn confirmation_participants(&self, current_user_login: &str) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.login != current_user_login)
            .cloned()
            .collect()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Header title for the current step
    pub fn title(&self, translator: &dyn Translate, currency_code: &str) -> String {
        step_title(
            &TitleContext {
                step: self.current_step(),
                iou_type: self.props.iou_type,
                has_multiple_participants: self.props.has_multiple_participants,
                editing_from_confirm: self.is_editing_from_confirm(),
                amount: &self.amount,
                currency_code,
            },
            translator,
        )
    }

    pub fn amount_button_label(&self, translator: &dyn Translate) -> String {
        amount_button_label(self.is_editing_from_confirm(), translator)
    }

    pub fn navigate_to_step(&mut self, index: usize) -> bool {
        let moved = self.cursor.navigate_to_step(&self.steps, index);
        self.log_move(moved, "step");
        moved
    }

    pub fn navigate_to_previous(&mut self) -> bool {
        let moved = self.cursor.navigate_to_previous(&self.steps);
        self.log_move(moved, "previous");
        moved
    }

    pub fn navigate_to_next(&mut self) -> bool {
        let moved = self.cursor.navigate_to_next(&self.steps);
        self.log_move(moved, "next");
        moved
    }

    /// Jump to the amount step from Confirm to edit it
    pub fn edit_amount(&mut self) -> bool {
        self.navigate_to_step(self.steps.amount_index())
    }

    /// Store the entered amount and move on
    pub fn complete_amount_step(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
        self.navigate_to_next();
    }

    /// Replace the participant list and move on
    pub fn complete_participants_step(&mut self, participants: Vec<Participant>) {
        self.participants = participants;
        self.navigate_to_next();
    }

    /// Header back button: leave the modal from the first step, otherwise
    /// step back. Returns `true` when the modal was dismissed.
    pub fn go_back<H: WizardHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.cursor.current() == 0 {
            host.dismiss_modal();
            return true;
        }
        self.navigate_to_previous();
        false
    }

    pub fn close<H: WizardHost + ?Sized>(&self, host: &mut H) {
        host.dismiss_modal();
    }

    /// Confirm a request or split with `selected`
    pub fn create_transaction<H: WizardHost + ?Sized>(
        &self,
        selected: &[Participant],
        host: &mut H,
    ) -> Dispatch {
        let draft = host.iou_draft();
        let user = host.current_user();
        let ctx = self.submission_context(&draft, &user);
        dispatch::create_transaction(&ctx, selected, host)
    }

    /// Confirm a send-money flow over `method`
    pub fn send_money<H: WizardHost + ?Sized>(&self, method: PaymentMethod, host: &mut H) -> Dispatch {
        let draft = host.iou_draft();
        let user = host.current_user();
        let ctx = self.submission_context(&draft, &user);
        dispatch::send_money(&ctx, &self.participants, method, host)
    }

    /// Confirm a send-money flow with a raw payment type string
    pub fn send_money_by_type<H: WizardHost + ?Sized>(
        &self,
        payment_type: &str,
        host: &mut H,
    ) -> Dispatch {
        let draft = host.iou_draft();
        let user = host.current_user();
        let ctx = self.submission_context(&draft, &user);
        dispatch::send_money_by_type(&ctx, &self.participants, payment_type, host)
    }

    fn submission_context<'a>(
        &'a self,
        draft: &'a IouDraft,
        user: &'a CurrentUser,
    ) -> SubmissionContext<'a> {
        SubmissionContext {
            amount: &self.amount,
            draft,
            current_user: user,
            report: &self.props.report,
            route: &self.props.route,
            has_multiple_participants: self.props.has_multiple_participants,
        }
    }

    fn log_move(&self, moved: bool, kind: &'static str) {
        if moved {
            tracing::debug!(
                kind,
                from = self.cursor.previous(),
                to = self.cursor.current(),
                step = %self.current_step(),
                "navigated"
            );
        }
    }
}

/// Currency the host would submit with right now
pub fn effective_currency<S: WizardSource + ?Sized>(source: &S) -> String {
    let user = source.current_user();
    source
        .iou_draft()
        .currency_or(&user.local_currency_code)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{
        CurrentUser, IouDraft, NetworkStatus, PersonalDetails, PersonalDetailsList, ReportId,
    };
    use crate::ports::{
        BillSplit, IouActions, ModalNavigator, MoneyPayment, MoneyRequest, PersonalDetailsActions,
    };

    /// In-test host: a mutable draft plus a log of every command received
    struct FakeHost {
        draft: IouDraft,
        network: NetworkStatus,
        user: CurrentUser,
        details: PersonalDetailsList,
        calls: Vec<String>,
        dismissed: usize,
        refreshed: usize,
    }

    impl FakeHost {
        fn new() -> Self {
            Self {
                draft: IouDraft {
                    comment: "stale".into(),
                    selected_currency_code: Some("GBP".into()),
                    ..IouDraft::default()
                },
                network: NetworkStatus::online(),
                user: CurrentUser::new("me@example.com").with_currency("USD"),
                details: [
                    PersonalDetails::new("jane@example.com", "Jane Doe"),
                    PersonalDetails::new("me@example.com", "Me"),
                ]
                .into_iter()
                .collect(),
                calls: Vec::new(),
                dismissed: 0,
                refreshed: 0,
            }
        }

        fn actions(&self) -> Vec<&str> {
            self.calls
                .iter()
                .map(String::as_str)
                .filter(|c| !c.starts_with("set_"))
                .collect()
        }
    }

    impl WizardSource for FakeHost {
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
            &self.details
        }
    }

    impl IouActions for FakeHost {
        fn request_money(&mut self, request: MoneyRequest) {
            self.calls
                .push(format!("request_money:{}:{}", request.amount.minor(), request.recipient.login));
            self.draft.creating_in_flight = true;
        }
        fn split_bill(&mut self, split: BillSplit, report_id: ReportId) {
            self.calls.push(format!("split_bill:{}:{}", split.amount.minor(), report_id));
            self.draft.creating_in_flight = true;
        }
        fn split_bill_and_open_report(&mut self, split: BillSplit) {
            self.calls
                .push(format!("split_bill_and_open_report:{}", split.participants.len()));
            self.draft.creating_in_flight = true;
        }
        fn send_money_elsewhere(&mut self, payment: MoneyPayment) {
            self.calls.push(format!("send_money_elsewhere:{}", payment.amount.minor()));
        }
        fn send_money_via_paypal(&mut self, payment: MoneyPayment) {
            self.calls.push(format!("send_money_via_paypal:{}", payment.amount.minor()));
        }
        fn send_money_with_wallet(&mut self, payment: MoneyPayment) {
            self.calls.push(format!("send_money_with_wallet:{}", payment.amount.minor()));
        }
        fn set_selected_currency(&mut self, currency_code: &str) {
            self.calls.push(format!("set_selected_currency:{}", currency_code));
            self.draft.selected_currency_code = Some(currency_code.to_string());
        }
        fn set_draft_comment(&mut self, comment: &str) {
            self.calls.push(format!("set_draft_comment:{}", comment));
            self.draft.comment = comment.to_string();
        }
    }

    impl PersonalDetailsActions for FakeHost {
        fn refresh_defaults(&mut self) {
            self.refreshed += 1;
        }
    }

    impl ModalNavigator for FakeHost {
        fn dismiss_modal(&mut self) {
            self.dismissed += 1;
        }
    }

    fn props(logins: &[&str], iou_type: IouType, multi: bool) -> WizardProps {
        WizardProps {
            report: Report::new(
                Some(ReportId::new(77)),
                logins.iter().map(|l| l.to_string()).collect(),
            ),
            route: RouteParams::default(),
            has_multiple_participants: multi,
            iou_type,
        }
    }

    #[test]
    fn test_mount_seeds_state_and_resets_draft() {
        let mut host = FakeHost::new();
        let wizard = RequestWizard::mount(props(&["jane@example.com"], IouType::Request, false), &mut host);

        assert_eq!(wizard.current_step_index(), 0);
        assert_eq!(wizard.previous_step_index(), 0);
        assert_eq!(wizard.amount(), "");
        assert_eq!(wizard.steps().as_slice(), &[Step::Amount, Step::Confirm]);
        assert_eq!(wizard.participants()[0].text, "Jane Doe");
        assert_eq!(wizard.direction(), Direction::None);

        assert_eq!(host.refreshed, 1);
        assert_eq!(host.draft.selected_currency_code.as_deref(), Some("USD"));
        assert_eq!(host.draft.comment, "");
        assert_eq!(host.dismissed, 0);
    }

    #[test]
    fn test_mount_without_participants_adds_selection_step() {
        let mut host = FakeHost::new();
        let wizard = RequestWizard::mount(props(&[], IouType::Split, true), &mut host);
        assert_eq!(wizard.steps().len(), 3);
        assert!(wizard.participants().is_empty());
    }

    #[test]
    fn test_full_request_flow_dismisses_on_success() {
        let mut host = FakeHost::new();
        let mut wizard =
            RequestWizard::mount(props(&["jane@example.com"], IouType::Request, false), &mut host);

        wizard.complete_amount_step("12.345");
        assert_eq!(wizard.current_step(), Step::Confirm);
        assert_eq!(wizard.direction(), Direction::Backward);

        let selected = wizard.participants().to_vec();
        let outcome = wizard.create_transaction(&selected, &mut host);
        assert_eq!(outcome, Dispatch::Sent(ActionKind::RequestMoney));
        assert_eq!(host.actions(), vec!["request_money:1235:jane@example.com"]);

        // Render while in flight: nothing happens.
        assert!(wizard.observe(&mut host).is_empty());

        host.draft.creating_in_flight = false;
        assert_eq!(wizard.observe(&mut host), vec![Reaction::DismissModal]);
        assert_eq!(host.dismissed, 1);

        // A later render with nothing changed does not dismiss again.
        assert!(wizard.observe(&mut host).is_empty());
        assert_eq!(host.dismissed, 1);
    }

    #[test]
    fn test_failed_request_returns_to_amount_step() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Request, false), &mut host);

        wizard.complete_amount_step("5");
        wizard.complete_participants_step(vec![Participant::from_login("jane@example.com")]);
        assert_eq!(wizard.current_step(), Step::Confirm);

        let selected = wizard.participants().to_vec();
        wizard.create_transaction(&selected, &mut host);
        wizard.observe(&mut host);

        host.draft.creating_in_flight = false;
        host.draft.error = true;
        assert_eq!(wizard.observe(&mut host), vec![Reaction::ReturnToAmountStep]);
        assert_eq!(wizard.current_step(), Step::Amount);
        assert_eq!(host.dismissed, 0);
    }

    #[test]
    fn test_editing_amount_from_confirm_returns_to_confirm() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Request, false), &mut host);
        let catalog = Catalog::default();

        wizard.complete_amount_step("10");
        wizard.complete_participants_step(vec![Participant::from_login("jane@example.com")]);
        assert_eq!(wizard.title(&catalog, "USD"), "Request $10.00");

        assert!(wizard.edit_amount());
        assert_eq!(wizard.direction(), Direction::Forward);
        assert!(wizard.is_editing_from_confirm());
        assert_eq!(wizard.title(&catalog, "USD"), "Amount");
        assert_eq!(wizard.amount_button_label(&catalog), "Save");

        wizard.complete_amount_step("20");
        assert_eq!(wizard.current_step(), Step::Confirm);
        assert_eq!(wizard.direction(), Direction::Backward);
        assert_eq!(wizard.title(&catalog, "USD"), "Request $20.00");
    }

    #[test]
    fn test_navigate_next_jumps_to_confirm_from_any_step_after_confirm() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Split, true), &mut host);

        wizard.navigate_to_step(2);
        wizard.navigate_to_step(1);
        assert_eq!(wizard.previous_step_index(), 2);
        assert!(wizard.navigate_to_next());
        assert_eq!(wizard.current_step_index(), 2);
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&["jane@example.com"], IouType::Request, false), &mut host);

        assert!(!wizard.navigate_to_step(2));
        assert!(!wizard.navigate_to_step(0));
        assert!(!wizard.navigate_to_previous());
        assert_eq!(wizard.current_step_index(), 0);

        wizard.navigate_to_next();
        assert!(!wizard.navigate_to_next());
        assert_eq!(wizard.current_step_index(), 1);
    }

    #[test]
    fn test_go_back_dismisses_only_from_first_step() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Request, false), &mut host);

        wizard.navigate_to_next();
        assert!(!wizard.go_back(&mut host));
        assert_eq!(wizard.current_step_index(), 0);
        assert_eq!(host.dismissed, 0);

        assert!(wizard.go_back(&mut host));
        assert_eq!(host.dismissed, 1);

        wizard.close(&mut host);
        assert_eq!(host.dismissed, 2);
    }

    #[test]
    fn test_split_on_route_report() {
        let mut host = FakeHost::new();
        let mut p = props(&["jane@example.com", "me@example.com"], IouType::Split, true);
        p.route = RouteParams::with_report_id("998877");
        let mut wizard = RequestWizard::mount(p, &mut host);

        wizard.complete_amount_step("30");
        let selected = wizard.participants().to_vec();
        let outcome = wizard.create_transaction(&selected, &mut host);

        assert_eq!(outcome, Dispatch::Sent(ActionKind::SplitBill));
        assert_eq!(host.actions(), vec!["split_bill:3000:998877"]);
    }

    #[test]
    fn test_split_without_route_report_opens_one() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Split, true), &mut host);
        wizard.complete_amount_step("30");
        wizard.complete_participants_step(vec![
            Participant::from_login("a@example.com"),
            Participant::from_login("b@example.com"),
        ]);

        let selected = wizard.participants().to_vec();
        let outcome = wizard.create_transaction(&selected, &mut host);
        assert_eq!(outcome, Dispatch::Sent(ActionKind::SplitBillAndOpenReport));
        assert_eq!(host.actions(), vec!["split_bill_and_open_report:2"]);
    }

    #[test]
    fn test_send_money_rails() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&["jane@example.com"], IouType::Send, false), &mut host);
        wizard.complete_amount_step("12.345");

        assert_eq!(
            wizard.send_money(PaymentMethod::PayPalMe, &mut host),
            Dispatch::Sent(ActionKind::SendMoneyViaPaypal)
        );
        assert!(!wizard.send_money_by_type("Bitcoin", &mut host).is_sent());
        assert_eq!(host.actions(), vec!["send_money_via_paypal:1235"]);
    }

    #[test]
    fn test_confirmation_hides_current_user() {
        let mut host = FakeHost::new();
        let wizard = RequestWizard::mount(
            props(&["me@example.com", "jane@example.com"], IouType::Split, true),
            &mut host,
        );

        assert_eq!(wizard.participants().len(), 2);
        let shown = wizard.confirmation_participants("me@example.com");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].login, "jane@example.com");
    }

    #[test]
    fn test_reconnect_refreshes_defaults() {
        let mut host = FakeHost::new();
        host.network = NetworkStatus::offline();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Request, false), &mut host);
        assert_eq!(host.refreshed, 1);

        wizard.observe(&mut host);
        assert_eq!(host.refreshed, 1);

        host.network = NetworkStatus::online();
        wizard.observe(&mut host);
        assert_eq!(host.refreshed, 2);
    }

    #[test]
    fn test_report_update_recomputes_steps_only_on_count_change() {
        let mut host = FakeHost::new();
        let mut wizard = RequestWizard::mount(props(&[], IouType::Request, false), &mut host);
        wizard.navigate_to_step(2);

        wizard.update_report(Report::new(None, vec![]));
        assert_eq!(wizard.steps().len(), 3);

        wizard.update_report(Report::new(None, vec!["jane@example.com".into()]));
        assert_eq!(wizard.steps().len(), 2);
        assert!(wizard.current_step_index() < wizard.steps().len());
        assert_eq!(wizard.current_step(), Step::Confirm);
    }

    #[test]
    fn test_effective_currency_prefers_draft() {
        let mut host = FakeHost::new();
        assert_eq!(effective_currency(&host), "GBP");
        host.draft.selected_currency_code = None;
        assert_eq!(effective_currency(&host), "USD");
    }
}
