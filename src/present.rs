//! Splitting generated text into the shown question and the withheld answer.

/// Literal separator the prompt template asks the model to emit between the
/// question half and the answer half.
pub const ANSWER_SEPARATOR: &str = "---";

/// Shown in the withheld slot when the model ignored the template.
pub const MISSING_ANSWER_PLACEHOLDER: &str = "Check raw output.";

/// Question/answer halves of one generated scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioView {
    pub visible: String,
    pub withheld: String,
}

/// Partition `text` at the first separator occurrence.
///
/// Infallible: without a separator the full text stays visible and the
/// withheld slot gets the placeholder. Malformed model output degrades to
/// raw-text display, never an error.
pub fn split_reveal(text: &str) -> ScenarioView {
    match text.split_once(ANSWER_SEPARATOR) {
        Some((visible, withheld)) => ScenarioView {
            visible: visible.to_string(),
            withheld: withheld.to_string(),
        },
        None => ScenarioView {
            visible: text.to_string(),
            withheld: MISSING_ANSWER_PLACEHOLDER.to_string(),
        },
    }
}
