//! The property form view.
//!
//! Inputs on the left, the estimate panel on the right, and the dialog
//! buttons below. The view never owns form data: every edit is written
//! straight into [`AppState::form`] and the panel and buttons are redrawn
//! from it by [`refresh`].

use cursive::Cursive;
use cursive::view::{Nameable, Resizable};
use cursive::views::{Dialog, DummyView, EditView, LinearLayout, SelectView, TextView};
use price_core::{Condition, Field, FormError, PendingEstimate, ValidationError};
use tracing::{error, warn};

use super::result_panel::{ANALYZING_TEXT, format_panel};
use super::status_bar::{build_status_bar, hints};
use crate::scheduler::schedule_completion;
use crate::state::AppState;

// View names for accessing components
const FORM_DIALOG: &str = "property_form";
const RESULT_VIEW: &str = "estimate";
const CONDITION_SELECT: &str = "condition";

const SUBMIT_LABEL: &str = "Predict Price";
const RESET_LABEL: &str = "Reset";

/// Index of the submit button among the dialog buttons; reset follows it.
const SUBMIT_BUTTON: usize = 0;

/// Display the property form as the root layer.
pub fn show_property_form(siv: &mut Cursive) {
    let inputs = build_inputs();

    let panel = TextView::new(format_panel(Default::default(), None))
        .with_name(RESULT_VIEW)
        .min_width(44);

    let body = LinearLayout::horizontal()
        .child(inputs)
        .child(DummyView.fixed_width(2))
        .child(panel);

    let status = build_status_bar(&[hints::TAB, hints::SHIFT_TAB, hints::ENTER, hints::CTRL_Q]);

    let layout = LinearLayout::vertical()
        .child(TextView::new("Property Details"))
        .child(DummyView.fixed_height(1))
        .child(body)
        .child(DummyView.fixed_height(1))
        .child(status);

    let dialog = Dialog::around(layout)
        .title("House Price Predictor")
        .button(SUBMIT_LABEL, on_submit)
        .padding_lrtb(1, 1, 1, 0)
        .with_name(FORM_DIALOG);

    siv.add_layer(dialog);
    refresh(siv);
}

fn build_inputs() -> LinearLayout {
    let mut inputs = LinearLayout::vertical();

    for field in Field::ALL {
        if field == Field::Condition {
            inputs.add_child(field_row(field, condition_select()));
            continue;
        }

        let width = if field == Field::Neighborhood { 24 } else { 10 };
        let input = EditView::new()
            .on_edit(move |s, text, _| on_edit(s, field, text))
            .on_submit(|s, _| on_submit(s))
            .with_name(field.as_str())
            .fixed_width(width);
        let row = field_row(field, input)
            .child(TextView::new(format!(" e.g. {}", field.placeholder())));
        inputs.add_child(row);
    }

    inputs
}

fn condition_select() -> impl cursive::View {
    let mut select = SelectView::<Condition>::new().popup();
    for &condition in Condition::all() {
        select.add_item(condition.label(), condition);
    }

    select
        .selected(Condition::default().index())
        .on_submit(|s, condition: &Condition| on_edit(s, Field::Condition, condition.as_str()))
        .with_name(CONDITION_SELECT)
        .fixed_width(12)
}

/// Create a labeled field row.
fn field_row<V: cursive::View>(
    field: Field,
    input: V,
) -> LinearLayout {
    LinearLayout::horizontal()
        .child(TextView::new(format!("{:18} ", format!("{}:", field.label()))))
        .child(input)
}

fn on_edit(
    siv: &mut Cursive,
    field: Field,
    value: &str,
) {
    let result = siv.with_user_data(|state: &mut AppState| state.form.update_field(field, value));
    match result {
        Some(Ok(())) => {}
        Some(Err(e)) => warn!(%e, field = field.as_str(), "edit rejected"),
        None => error!("application state missing"),
    }
}

/// Handle the submit button: validate, start the delay, redraw.
fn on_submit(siv: &mut Cursive) {
    let started = siv.with_user_data(|state: &mut AppState| {
        state
            .form
            .begin_submit()
            .map(|pending| (pending, state.submit_delay, state.runtime.clone()))
    });

    match started {
        Some(Ok((pending, delay, runtime))) => {
            let sink = siv.cb_sink().clone();
            let _task = schedule_completion(&runtime, delay, pending, move |pending| {
                let delivered = sink.send(Box::new(move |s: &mut Cursive| {
                    on_estimate_ready(s, pending);
                }));
                if delivered.is_err() {
                    warn!("UI closed before the estimate was ready");
                }
            });
        }
        Some(Err(FormError::Invalid(errors))) => show_validation_errors(siv, &errors),
        Some(Err(e)) => warn!(%e, "submit ignored"),
        None => error!("application state missing"),
    }

    refresh(siv);
}

/// Runs on the UI thread once the delay has elapsed.
fn on_estimate_ready(
    siv: &mut Cursive,
    pending: PendingEstimate,
) {
    let result = siv.with_user_data(|state: &mut AppState| state.form.complete_submit(pending));

    if let Some(Err(e)) = result {
        siv.add_layer(
            Dialog::text(format!("Error: {e}"))
                .title("Estimate Error")
                .button("OK", |s| {
                    s.pop_layer();
                }),
        );
    }

    refresh(siv);
}

/// Handle the reset button: clear the form and every input.
fn on_reset(siv: &mut Cursive) {
    match siv.with_user_data(|state: &mut AppState| state.form.reset()) {
        Some(Ok(())) => {}
        Some(Err(e)) => {
            warn!(%e, "reset ignored");
            refresh(siv);
            return;
        }
        None => {
            error!("application state missing");
            return;
        }
    }

    for field in Field::ALL {
        if field == Field::Condition {
            continue;
        }
        siv.call_on_name(field.as_str(), |v: &mut EditView| {
            // Skip the on_edit callback; the form is already cleared.
            let _ = v.set_content("");
        });
    }
    siv.call_on_name(CONDITION_SELECT, |v: &mut SelectView<Condition>| {
        let _ = v.set_selection(Condition::default().index());
    });

    refresh(siv);
}

/// Redraws the estimate panel and the dialog buttons from the form state.
fn refresh(siv: &mut Cursive) {
    let Some((phase, panel, reset_available)) = siv.with_user_data(|state: &mut AppState| {
        (
            state.form.phase(),
            format_panel(state.form.phase(), state.form.prediction()),
            state.form.reset_available(),
        )
    }) else {
        error!("application state missing");
        return;
    };

    siv.call_on_name(RESULT_VIEW, |v: &mut TextView| v.set_content(panel));

    siv.call_on_name(FORM_DIALOG, |dialog: &mut Dialog| {
        let submitting = phase.is_submitting();
        if let Some(submit) = dialog.buttons_mut().nth(SUBMIT_BUTTON) {
            submit.set_label(if submitting { ANALYZING_TEXT } else { SUBMIT_LABEL });
            submit.set_enabled(!submitting);
        }

        let has_reset = dialog.buttons_len() > SUBMIT_BUTTON + 1;
        if reset_available && !has_reset {
            dialog.add_button(RESET_LABEL, on_reset);
        } else if !reset_available && has_reset {
            dialog.remove_button(SUBMIT_BUTTON + 1);
        }
    });
}

/// Lists every failed constraint, the way a browser would flag the inputs.
fn show_validation_errors(
    siv: &mut Cursive,
    errors: &[ValidationError],
) {
    let message = errors
        .iter()
        .map(|e| format!("• {e}"))
        .collect::<Vec<_>>()
        .join("\n");

    siv.add_layer(
        Dialog::text(message)
            .title("Please fix the highlighted fields")
            .button("OK", |s| {
                s.pop_layer();
            }),
    );
}
