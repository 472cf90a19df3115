//! `iou run`: drive one wizard session from the command line
//!
//! The session mounts the wizard against a [`LocalBackend`], fills in each
//! step from the arguments, dispatches, then settles the action and lets the
//! wizard react to the outcome.

use clap::Args;

use crate::backend::{ActionJournal, ActionRecord, ActionStatus, LocalBackend};
use crate::config::{Settings, WizardPaths};
use crate::error::{WizardError, WizardResult};
use crate::i18n::Catalog;
use crate::models::{
    is_valid_amount_draft, participants_for_logins, IouType, Report, RouteParams,
};
use crate::ports::WizardSource;
use crate::wizard::{effective_currency, Dispatch, RequestWizard, Step, WizardProps};

/// Arguments for a scripted wizard session
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Flow to open: request, send or split
    #[arg(short = 't', long = "type", default_value = "request")]
    pub iou_type: String,

    /// Amount as typed, e.g. "12.34"
    #[arg(short, long)]
    pub amount: String,

    /// Participant picked on the participants step (repeatable)
    #[arg(short, long = "participant")]
    pub participants: Vec<String>,

    /// Participant already on the report; skips the participants step (repeatable)
    #[arg(long = "report-participant")]
    pub report_participants: Vec<String>,

    /// What the money is for
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Currency picked on the amount step
    #[arg(long)]
    pub currency: Option<String>,

    /// Report id from the route
    #[arg(long)]
    pub report_id: Option<String>,

    /// Payment rail for send flows (Elsewhere, PayPal.me, Expensify)
    #[arg(short = 'm', long, default_value = "Elsewhere")]
    pub payment_method: String,

    /// Make the backend fail the dispatched action
    #[arg(long)]
    pub fail: bool,

    /// Start offline and reconnect before the confirmation step
    #[arg(long)]
    pub offline: bool,
}

/// What happened during a session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Titles in the order the steps were shown
    pub titles: Vec<String>,
    pub dispatch: Dispatch,
    pub status: Option<ActionStatus>,
    pub final_step: Step,
    pub modal_open: bool,
    pub records: Vec<ActionRecord>,

    /// Times the currency defaults were refreshed, including the mount
    pub defaults_refreshes: usize,
}

/// Run a session without touching the filesystem
pub fn run_session(settings: &Settings, args: &RunArgs) -> WizardResult<SessionOutcome> {
    let iou_type: IouType = args.iou_type.parse()?;
    if !is_valid_amount_draft(&args.amount) {
        return Err(WizardError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '12.34'",
            args.amount
        )));
    }

    let translator = Catalog::for_locale(&settings.preferred_locale);
    let mut backend = LocalBackend::from_settings(settings);

    let route = args
        .report_id
        .as_deref()
        .map(RouteParams::with_report_id)
        .unwrap_or_default();
    let report = Report::new(route.valid_report_id(), args.report_participants.clone());
    let props = WizardProps {
        report,
        route,
        has_multiple_participants: iou_type == IouType::Split,
        iou_type,
    };

    backend.set_offline(args.offline);
    let mut wizard = RequestWizard::mount(props, &mut backend);
    let mut titles = Vec::new();
    let title = |wizard: &RequestWizard, backend: &LocalBackend| {
        wizard.title(&translator, &effective_currency(backend))
    };

    titles.push(title(&wizard, &backend));
    if let Some(code) = &args.currency {
        backend.pick_currency(code.to_uppercase());
    }
    wizard.complete_amount_step(args.amount.clone());

    if wizard.current_step() == Step::Participants {
        titles.push(title(&wizard, &backend));
        if args.participants.is_empty() {
            return Err(WizardError::Validation(
                "At least one --participant is required when the report has none".into(),
            ));
        }
        let picked = participants_for_logins(&args.participants, backend.personal_details());
        wizard.complete_participants_step(picked);
    } else if !args.participants.is_empty() {
        tracing::warn!("report already has participants; ignoring --participant");
    }

    if args.offline {
        backend.set_offline(false);
        wizard.observe(&mut backend);
    }

    titles.push(title(&wizard, &backend));
    if let Some(comment) = &args.comment {
        backend.edit_comment(comment.clone());
    }

    let dispatch = if iou_type == IouType::Send {
        wizard.send_money_by_type(&args.payment_method, &mut backend)
    } else {
        let selected = wizard.participants().to_vec();
        wizard.create_transaction(&selected, &mut backend)
    };
    wizard.observe(&mut backend);

    backend.fail_next(args.fail);
    let status = backend.settle();
    wizard.observe(&mut backend);

    Ok(SessionOutcome {
        titles,
        dispatch,
        status,
        final_step: wizard.current_step(),
        modal_open: backend.is_modal_open(),
        records: backend.take_records(),
        defaults_refreshes: backend.defaults_refreshes(),
    })
}

/// Handle `iou run`
pub fn handle_run_command(
    paths: &WizardPaths,
    settings: &Settings,
    args: RunArgs,
) -> WizardResult<()> {
    let outcome = run_session(settings, &args)?;

    for (i, title) in outcome.titles.iter().enumerate() {
        println!("[{}/{}] {}", i + 1, outcome.titles.len(), title);
    }
    if args.offline {
        println!(
            "Reconnected. Currency defaults refreshed: {}",
            outcome.defaults_refreshes
        );
    }

    match &outcome.dispatch {
        Dispatch::Sent(kind) => println!("Dispatched: {}", kind),
        Dispatch::Ignored(reason) => println!("Nothing dispatched: {:?}", reason),
    }

    match outcome.status {
        Some(ActionStatus::Failed) => {
            println!("Action failed. Back on step: {}", outcome.final_step);
        }
        Some(status) => println!("Action {}. Modal closed: {}", status, !outcome.modal_open),
        None => {}
    }

    if settings.journal_enabled && !outcome.records.is_empty() {
        let journal = ActionJournal::new(paths.journal_file());
        journal.append_batch(&outcome.records)?;
        for record in &outcome.records {
            println!("Recorded {} ({})", record.short_id(), record.amount);
        }
    }

    Ok(())
}
