use super::notice::Notice;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";

/// Raw values read from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted { name: String },
    Incomplete,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    /// Presence check only; the email shape is never inspected.
    pub fn evaluate(&self) -> Outcome {
        let name = trim(&self.name);
        let filled = [name, trim(&self.email), trim(&self.message)]
            .iter()
            .all(|v| !v.is_empty());
        if filled {
            Outcome::Accepted {
                name: name.to_owned(),
            }
        } else {
            Outcome::Incomplete
        }
    }
}

/// Whitespace trim that also drops byte-order marks, matching browser
/// `String.prototype.trim`.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl Outcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Accepted { name } => Notice::success(format!(
                "Thank you, {name}! Your message has been sent successfully. I'll get back to you soon."
            )),
            Self::Incomplete => Notice::error(MISSING_FIELDS_MESSAGE),
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
