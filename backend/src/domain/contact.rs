//! Contact form acknowledgement.
//!
//! Messages are acknowledged but not stored.

/// A submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email, unchecked.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Confirmation shown to the sender.
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!("Thank you, {}! Your message has been sent.", self.name.trim())
    }
}
