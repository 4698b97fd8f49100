//! Text of the estimate panel beside the form.

use price_core::{Phase, Prediction};

pub const READY_TITLE: &str = "Ready to Predict";
pub const ANALYZING_TEXT: &str = "Analyzing...";
pub const DISCLAIMER: &str = "Note: This is a simulated estimate for demonstration purposes. \
Actual property values may vary based on market conditions, location specifics, and other factors.";

/// Renders the panel for the current phase and prediction.
///
/// A previous prediction stays on screen during a resubmit.
pub fn format_panel(
    phase: Phase,
    prediction: Option<&Prediction>,
) -> String {
    match (prediction, phase) {
        (Some(prediction), _) => format_prediction(prediction),
        (None, Phase::Submitting) => {
            format!("{ANALYZING_TEXT}\n\nEstimating the value of your property.")
        }
        (None, _) => format!(
            "{READY_TITLE}\n\nFill out the property details to get your price estimate."
        ),
    }
}

fn format_prediction(prediction: &Prediction) -> String {
    format!(
        "{}\nEstimated Market Value\n\n\
         Property Summary\n\
         {}\n\n\
         {DISCLAIMER}",
        prediction.price, prediction.features,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use price_core::{Condition, EstimatedPrice, PropertyFeatures};
    use rust_decimal_macros::dec;

    use super::*;

    fn prediction() -> Prediction {
        Prediction {
            price: EstimatedPrice(536_500),
            features: PropertyFeatures {
                bedrooms: 3,
                bathrooms: dec!(2),
                square_footage: 2000,
                year_built: 1995,
                lot_size: 8000,
                garage_spaces: 2,
                neighborhood: "Suburbs".to_string(),
                condition: Condition::Good,
            },
        }
    }

    #[test]
    fn editing_without_result_shows_placeholder() {
        let text = format_panel(Phase::Editing, None);

        assert!(text.starts_with(READY_TITLE));
    }

    #[test]
    fn first_submit_shows_analyzing() {
        let text = format_panel(Phase::Submitting, None);

        assert!(text.starts_with(ANALYZING_TEXT));
    }

    #[test]
    fn result_shows_price_summary_and_disclaimer() {
        let text = format_panel(Phase::ShowingResult, Some(&prediction()));

        assert_eq!(text.lines().next(), Some("$536,500"));
        assert!(text.contains("Square Feet:   2,000"));
        assert!(text.ends_with(DISCLAIMER));
    }

    #[test]
    fn resubmit_keeps_previous_result_visible() {
        let text = format_panel(Phase::Submitting, Some(&prediction()));

        assert!(text.starts_with("$536,500"));
    }
}
