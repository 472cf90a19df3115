//! Header title and amount-button label for the active step

use crate::models::{IouType, Money};
use crate::ports::Translate;

use super::steps::Step;

/// Inputs for the header title
#[derive(Debug, Clone, Copy)]
pub struct TitleContext<'a> {
    pub step: Step,
    pub iou_type: IouType,
    pub has_multiple_participants: bool,
    /// The user got to the amount step by editing from Confirm
    pub editing_from_confirm: bool,
    pub amount: &'a str,
    pub currency_code: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Request,
    Split,
    Send,
}

fn flow(iou_type: IouType, has_multiple_participants: bool) -> Flow {
    if iou_type == IouType::Send {
        Flow::Send
    } else if has_multiple_participants || iou_type == IouType::Split {
        Flow::Split
    } else {
        Flow::Request
    }
}

/// Title for the step being shown
pub fn step_title(ctx: &TitleContext<'_>, translator: &dyn Translate) -> String {
    let flow = flow(ctx.iou_type, ctx.has_multiple_participants);

    if ctx.step == Step::Amount {
        if ctx.editing_from_confirm {
            return translator.translate("iou.amount");
        }
        return translator.translate(match flow {
            Flow::Request => "iou.requestMoney",
            Flow::Split => "iou.splitBill",
            Flow::Send => "iou.sendMoney",
        });
    }

    let formatted = Money::from_draft(ctx.amount)
        .unwrap_or_default()
        .format_for_currency(ctx.currency_code);
    let key = match flow {
        Flow::Request => "iou.request",
        Flow::Split => "iou.split",
        Flow::Send => "iou.send",
    };
    translator.translate_with(key, &[("amount", formatted.as_str())])
}

/// Label of the amount step's submit button
pub fn amount_button_label(editing_from_confirm: bool, translator: &dyn Translate) -> String {
    translator.translate(if editing_from_confirm {
        "common.save"
    } else {
        "common.next"
    })
}
