//! Form state and validation for login, location and complaint forms.
//!
//! Validation is a synchronous presence check. A failed check leaves every
//! field as it was so the user can correct it.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::{self, MOCK_STAFF_DEPARTMENT, MOCK_STAFF_NAME};
use crate::i18n::{MessageKey, Translator};
use crate::models::{Attachment, Department, Location, Notification, Ticket, TicketStatus, User};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Extensions checked when the client sends no MIME type.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "svg", "heic", "heif", "avif", "tif", "tiff",
    "ico",
];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mov", "webm", "mkv", "avi", "wmv", "flv", "3gp", "mpg", "mpeg", "ogv",
];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
const ACCEPTED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// A form could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields missing: {}", .fields.join(", "))]
    Required {
        fields: Vec<&'static str>,
        title: MessageKey,
        detail: Option<MessageKey>,
    },
    #[error("unsupported attachment type: {name}")]
    UnsupportedAttachment { name: String },
    #[error("unknown {kind} '{id}'")]
    UnknownOption { kind: &'static str, id: String },
    #[error("a state must be selected before a district")]
    StateNotSelected,
}

impl ValidationError {
    /// Destructive banner describing the failure in the user's locale.
    pub fn notification(&self, t: &Translator) -> Notification {
        match self {
            ValidationError::Required { title, detail, .. } => {
                Notification::destructive(t.t(*title), detail.map(|key| t.t(key)))
            }
            ValidationError::UnsupportedAttachment { name } => Notification::destructive(
                t.t(MessageKey::CommonError),
                Some(t.t_with(
                    MessageKey::ComplaintUnsupportedAttachment,
                    &[("name", name.as_str())],
                )),
            ),
            ValidationError::UnknownOption { .. } => {
                Notification::destructive(t.t(MessageKey::CommonError), Some(self.to_string()))
            }
            ValidationError::StateNotSelected => Notification::destructive(
                t.t(MessageKey::CommonFillRequired),
                Some(t.t(MessageKey::LocationSelectState)),
            ),
        }
    }
}

fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Citizen sign-in / sign-up fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitizenLoginForm {
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl CitizenLoginForm {
    /// Email is only required when creating an account.
    pub fn validate(&self, signup: bool) -> Result<User, ValidationError> {
        let mut fields = vec![("mobile", self.mobile.as_str()), ("name", self.name.as_str())];
        if signup {
            fields.push(("email", self.email.as_str()));
        }

        let fields = missing(&fields);
        if !fields.is_empty() {
            return Err(ValidationError::Required {
                fields,
                title: MessageKey::CommonFillRequired,
                detail: None,
            });
        }

        Ok(User::Citizen {
            name: self.name.trim().to_string(),
        })
    }
}

/// Staff sign-in fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffLoginForm {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub password: String,
}

impl StaffLoginForm {
    /// Credentials are not checked; every staff login gets the mock profile.
    pub fn validate(&self) -> Result<User, ValidationError> {
        let fields = missing(&[
            ("employeeId", self.employee_id.as_str()),
            ("password", self.password.as_str()),
        ]);
        if !fields.is_empty() {
            return Err(ValidationError::Required {
                fields,
                title: MessageKey::CommonFillAll,
                detail: None,
            });
        }

        Ok(User::Staff {
            name: MOCK_STAFF_NAME.to_string(),
            department: MOCK_STAFF_DEPARTMENT.to_string(),
        })
    }
}

/// State and district picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelector {
    state_id: Option<String>,
    district_id: Option<String>,
}

impl LocationSelector {
    pub fn state_id(&self) -> Option<&str> {
        self.state_id.as_deref()
    }

    pub fn district_id(&self) -> Option<&str> {
        self.district_id.as_deref()
    }

    /// Choosing a state always clears the district.
    pub fn select_state(&mut self, state_id: &str) -> Result<(), ValidationError> {
        if catalogue::find_state(state_id).is_none() {
            return Err(ValidationError::UnknownOption {
                kind: "state",
                id: state_id.to_string(),
            });
        }
        self.state_id = Some(state_id.to_string());
        self.district_id = None;
        Ok(())
    }

    pub fn select_district(&mut self, district_id: &str) -> Result<(), ValidationError> {
        let state_id = self
            .state_id
            .as_deref()
            .ok_or(ValidationError::StateNotSelected)?;
        if catalogue::find_district(state_id, district_id).is_none() {
            return Err(ValidationError::UnknownOption {
                kind: "district",
                id: district_id.to_string(),
            });
        }
        self.district_id = Some(district_id.to_string());
        Ok(())
    }

    pub fn can_continue(&self) -> bool {
        self.resolve().is_some()
    }

    pub fn submit(&self) -> Result<Location, ValidationError> {
        self.resolve().ok_or_else(|| {
            let mut fields = Vec::new();
            if self.state_id.is_none() {
                fields.push("state");
            }
            fields.push("district");
            ValidationError::Required {
                fields,
                title: MessageKey::CommonFillRequired,
                detail: None,
            }
        })
    }

    fn resolve(&self) -> Option<Location> {
        let state_id = self.state_id.as_deref()?;
        let district_id = self.district_id.as_deref()?;
        let state = catalogue::find_state(state_id)?;
        let district = catalogue::find_district(state_id, district_id)?;
        Some(Location {
            state: state.name.to_string(),
            district: district.name.to_string(),
        })
    }
}

/// Whether the attachment picker would accept this file.
pub fn is_accepted_attachment(name: &str, content_type: Option<&str>) -> bool {
    if let Some(content_type) = content_type {
        let content_type = content_type.trim().to_ascii_lowercase();
        if content_type.starts_with("image/")
            || content_type.starts_with("video/")
            || ACCEPTED_DOCUMENT_TYPES.contains(&content_type.as_str())
        {
            return true;
        }
    }

    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            [IMAGE_EXTENSIONS, VIDEO_EXTENSIONS, DOCUMENT_EXTENSIONS]
                .iter()
                .any(|group| group.contains(&ext.as_str()))
        })
        .unwrap_or(false)
}

/// `{first 3 chars of department id, uppercased}-{last 6 digits of millis}`.
///
/// Two submissions to one department in the same millisecond window collide.
pub fn ticket_id(department_id: &str, epoch_millis: i64) -> String {
    let prefix = department_id
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let millis = epoch_millis.to_string();
    let suffix = &millis[millis.len().saturating_sub(6)..];
    format!("{}-{}", prefix, suffix)
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Fields of the complaint form while it is being filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintDraft {
    title: String,
    description: String,
    location: String,
    attachments: Vec<Attachment>,
}

impl ComplaintDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = truncate_chars(title, TITLE_MAX_CHARS);
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = truncate_chars(description, DESCRIPTION_MAX_CHARS);
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    /// No size limit is enforced.
    pub fn add_attachment(&mut self, attachment: Attachment) -> Result<(), ValidationError> {
        if !is_accepted_attachment(&attachment.name, attachment.content_type.as_deref()) {
            return Err(ValidationError::UnsupportedAttachment {
                name: attachment.name,
            });
        }
        self.attachments.push(attachment);
        Ok(())
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = missing(&[
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
        ]);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Required {
                fields,
                title: MessageKey::CommonFillRequired,
                detail: Some(MessageKey::ComplaintRequiredDetail),
            })
        }
    }

    /// Build the ticket for `department` as of `now`.
    pub fn to_ticket(&self, department: &Department, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id: ticket_id(department.id, now.timestamp_millis()),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            department: department.name.clone(),
            attachments: self.attachments.iter().map(|a| a.name.clone()).collect(),
            status: TicketStatus::Submitted,
            created_at: now.to_rfc3339(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
