use std::fmt::{Display, Formatter};

/// An error raised by a device hook.
///
/// Carries a descriptive message and whether the failure is fatal for the
/// request (fatal errors are surfaced to the client by the embedding
/// server, non-fatal ones only reach the on_error hooks).
#[derive(Debug)]
pub struct DeviceError {
    pub message: String,
    pub fatal: bool,
}

impl DeviceError {
    pub fn new(message: impl Into<String>, fatal: bool) -> Self {
        Self {
            message: message.into(),
            fatal,
        }
    }
}

impl Display for DeviceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fatal = if self.fatal { "(fatal) " } else { "" };
        write!(f, "{}{}", fatal, self.message)
    }
}
