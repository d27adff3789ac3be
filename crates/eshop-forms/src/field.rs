//! Per-field state.

use serde::Serialize;

/// State of one form field.
///
/// A field starts pristine. It becomes touched the first time it is
/// validated, either on blur or by a whole-form check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub value: String,
    pub error: bool,
    pub error_message: Option<String>,
    pub touched: bool,
}

impl FormField {
    /// The message to show under the field, if it is in error.
    pub fn helper_text(&self) -> Option<&str> {
        if self.error {
            self.error_message.as_deref()
        } else {
            None
        }
    }

    pub(crate) fn record(&mut self, verdict: Result<(), &'static str>) -> bool {
        self.touched = true;
        match verdict {
            Ok(()) => {
                self.error = false;
                self.error_message = None;
                true
            }
            Err(message) => {
                self.error = true;
                self.error_message = Some(message.to_string());
                false
            }
        }
    }
}
