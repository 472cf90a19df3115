//! Application state for the TUI
//!
//! `App` owns the wizard, the local backend standing in for the host store,
//! and the input state of each page.

use crate::backend::{ActionRecord, ActionStatus, LocalBackend};
use crate::config::Settings;
use crate::i18n::Catalog;
use crate::models::{is_valid_amount_draft, IouType, Participant, PaymentMethod, Report, RouteParams};
use crate::ports::{Translate, WizardSource};
use crate::wizard::{effective_currency, Dispatch, RequestWizard, Step, WizardProps};

use super::widgets::TextInput;
use super::TuiArgs;

/// Currencies the amount page cycles through
pub const CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "JPY", "CAD", "INR"];

/// Checklist of people shown on the participants page
#[derive(Debug, Clone, Default)]
pub struct ParticipantPicker {
    pub entries: Vec<Participant>,
    pub checked: Vec<bool>,
    pub cursor: usize,
}

impl ParticipantPicker {
    /// Everyone in the personal details table except the current user
    pub fn new(entries: Vec<Participant>) -> Self {
        let checked = vec![false; entries.len()];
        Self {
            entries,
            checked,
            cursor: 0,
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn toggle(&mut self) {
        if let Some(checked) = self.checked.get_mut(self.cursor) {
            *checked = !*checked;
        }
    }

    pub fn selected(&self) -> Vec<Participant> {
        self.entries
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(p, _)| p.clone())
            .collect()
    }
}

/// Main application state
pub struct App {
    pub wizard: RequestWizard,
    pub backend: LocalBackend,
    pub translator: Catalog,

    pub amount_input: TextInput,
    pub comment_input: TextInput,
    pub picker: ParticipantPicker,

    /// Transient message shown under the page body
    pub status_message: Option<String>,

    pub should_quit: bool,

    /// Outcome of the last dispatch
    pub last_dispatch: Option<Dispatch>,
}

impl App {
    pub fn new(settings: &Settings, args: &TuiArgs) -> crate::error::WizardResult<Self> {
        let iou_type: IouType = args.iou_type.parse()?;
        let mut backend = LocalBackend::from_settings(settings);
        backend.fail_next(args.fail);

        let route = args
            .report_id
            .as_deref()
            .map(RouteParams::with_report_id)
            .unwrap_or_default();
        let props = WizardProps {
            report: Report::new(route.valid_report_id(), args.report_participants.clone()),
            route,
            has_multiple_participants: iou_type == IouType::Split,
            iou_type,
        };
        let wizard = RequestWizard::mount(props, &mut backend);

        let me = backend.current_user().login;
        let entries = backend
            .personal_details()
            .iter()
            .filter(|d| d.login != me)
            .map(Participant::from_details)
            .collect();

        let translator = Catalog::for_locale(&settings.preferred_locale);
        let comment_input = TextInput::new()
            .label(translator.translate("iou.whatsItFor"))
            .focused(true);

        Ok(Self {
            wizard,
            backend,
            translator,
            amount_input: TextInput::new().placeholder("0.00").focused(true),
            comment_input,
            picker: ParticipantPicker::new(entries),
            status_message: None,
            should_quit: false,
            last_dispatch: None,
        })
    }

    pub fn current_step(&self) -> Step {
        self.wizard.current_step()
    }

    pub fn currency(&self) -> String {
        effective_currency(&self.backend)
    }

    pub fn title(&self) -> String {
        self.wizard.title(&self.translator, &self.currency())
    }

    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Let the wizard react to the backend and quit once the modal is gone
    pub fn sync(&mut self) {
        self.wizard.observe(&mut self.backend);
        if !self.backend.is_modal_open() {
            self.should_quit = true;
        }
    }

    /// Periodic tick: the backend answers the in-flight action
    pub fn tick(&mut self) {
        if let Some(status) = self.backend.settle() {
            if status == ActionStatus::Failed {
                self.amount_input = TextInput::new()
                    .placeholder("0.00")
                    .focused(true)
                    .content(self.wizard.amount());
            }
            self.sync();
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.backend.draft().creating_in_flight
    }

    pub fn has_error(&self) -> bool {
        self.backend.draft().error
    }

    pub fn cycle_currency(&mut self) {
        let current = self.currency();
        let next = CURRENCIES
            .iter()
            .position(|c| *c == current)
            .map(|i| CURRENCIES[(i + 1) % CURRENCIES.len()])
            .unwrap_or(CURRENCIES[0]);
        self.backend.pick_currency(next);
    }

    pub fn submit_amount(&mut self) {
        let draft = self.amount_input.value().trim().to_string();
        if !is_valid_amount_draft(&draft) {
            self.status_message = Some(format!("'{}' is not a valid amount", draft));
            return;
        }
        self.status_message = None;
        self.wizard.complete_amount_step(draft);
    }

    pub fn submit_participants(&mut self) {
        let selected = self.picker.selected();
        if selected.is_empty() {
            self.status_message = Some("Pick at least one participant".into());
            return;
        }
        self.status_message = None;
        self.wizard.complete_participants_step(selected);
    }

    pub fn edit_amount(&mut self) {
        if self.wizard.edit_amount() {
            self.amount_input = TextInput::new()
                .placeholder("0.00")
                .focused(true)
                .content(self.wizard.amount());
        }
    }

    pub fn sync_comment(&mut self) {
        let comment = self.comment_input.value().to_string();
        self.backend.edit_comment(comment);
    }

    /// Confirm a request or split with the wizard's participants
    pub fn confirm(&mut self) {
        let selected = self.wizard.participants().to_vec();
        let dispatch = self.wizard.create_transaction(&selected, &mut self.backend);
        self.finish_dispatch(dispatch);
    }

    /// Confirm a send-money flow over `method`
    /// Payment rails offered on the confirmation page, in key order.
    /// PayPal.me is only offered when the recipient has an address.
    pub fn payment_rails(&self) -> Vec<PaymentMethod> {
        let paypal = self
            .wizard
            .participants()
            .first()
            .is_some_and(Participant::has_paypal_me);
        PaymentMethod::ALL
            .into_iter()
            .filter(|method| *method != PaymentMethod::PayPalMe || paypal)
            .collect()
    }

    pub fn pay(&mut self, method: PaymentMethod) {
        let dispatch = self.wizard.send_money(method, &mut self.backend);
        self.finish_dispatch(dispatch);
    }

    fn finish_dispatch(&mut self, dispatch: Dispatch) {
        self.status_message = match &dispatch {
            Dispatch::Sent(kind) => Some(format!("Sending {}...", kind)),
            Dispatch::Ignored(reason) => Some(format!("Nothing sent: {:?}", reason)),
        };
        self.last_dispatch = Some(dispatch);
        self.sync();
    }

    pub fn go_back(&mut self) {
        if self.wizard.go_back(&mut self.backend) {
            self.should_quit = true;
        }
    }

    pub fn close(&mut self) {
        self.wizard.close(&mut self.backend);
        self.should_quit = true;
    }

    /// Actions recorded during the session
    pub fn take_records(&mut self) -> Vec<ActionRecord> {
        self.backend.take_records()
    }
}
