//! Per-session portal state: the navigation state machine and its forms.
//!
//! ```text
//! login ──citizen──► location ──► departments ◄──submit/back── complaint
//!   │                                  └──────select──────────────►┘
//!   └──staff──► staff_dashboard
//! ```
//!
//! Events that are not valid for the current step are rejected and leave
//! the state untouched.

mod forms;
mod session;

pub use forms::*;
pub use session::*;

use serde::Serialize;
use thiserror::Error;

use crate::i18n::{LocaleContext, Translator};
use crate::models::{Location, User};

/// Page currently shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Login,
    Location,
    Departments,
    Complaint,
    StaffDashboard,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Login => "login",
            Step::Location => "location",
            Step::Departments => "departments",
            Step::Complaint => "complaint",
            Step::StaffDashboard => "staff_dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("'{event}' is not available on the {} step", .step.as_str())]
    InvalidTransition { step: Step, event: &'static str },
    #[error("a request for this session is already in progress")]
    Busy,
}

/// Everything one browser tab knows about the user's progress.
#[derive(Debug, Clone, Default)]
pub struct Portal {
    step: Step,
    user: Option<User>,
    location: Option<Location>,
    selected_department: Option<String>,
    signup: bool,
    busy: bool,
    locale: LocaleContext,
    location_form: LocationSelector,
    complaint: ComplaintDraft,
}

impl Portal {
    pub fn new(locale: LocaleContext) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Raw department id chosen on the departments step. It may not name a
    /// known department; the complaint view then renders nothing.
    pub fn selected_department(&self) -> Option<&str> {
        self.selected_department.as_deref()
    }

    pub fn is_signup(&self) -> bool {
        self.signup
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    pub fn locale_mut(&mut self) -> &mut LocaleContext {
        &mut self.locale
    }

    pub fn translator(&self) -> Translator {
        self.locale.translator()
    }

    pub fn location_form(&self) -> &LocationSelector {
        &self.location_form
    }

    pub fn complaint(&self) -> &ComplaintDraft {
        &self.complaint
    }

    pub fn ensure_step(&self, expected: Step, event: &'static str) -> Result<(), NavigationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(NavigationError::InvalidTransition {
                step: self.step,
                event,
            })
        }
    }

    /// Flip between citizen sign-in and sign-up.
    pub fn toggle_signup(&mut self) -> Result<bool, NavigationError> {
        self.ensure_step(Step::Login, "toggle_signup")?;
        self.signup = !self.signup;
        Ok(self.signup)
    }

    /// Mark a simulated backend call as in flight.
    pub fn begin_request(&mut self) -> Result<(), NavigationError> {
        if self.busy {
            return Err(NavigationError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    pub fn finish_request(&mut self) {
        self.busy = false;
    }

    pub fn login_succeeded(&mut self, user: User) -> Result<Step, NavigationError> {
        self.ensure_step(Step::Login, "login")?;
        self.step = match &user {
            User::Citizen { .. } => Step::Location,
            User::Staff { .. } => Step::StaffDashboard,
        };
        self.user = Some(user);
        Ok(self.step)
    }

    pub fn location_form_mut(&mut self) -> Result<&mut LocationSelector, NavigationError> {
        self.ensure_step(Step::Location, "edit_location")?;
        Ok(&mut self.location_form)
    }

    pub fn choose_location(&mut self, location: Location) -> Result<Step, NavigationError> {
        self.ensure_step(Step::Location, "choose_location")?;
        self.location = Some(location);
        self.step = Step::Departments;
        Ok(self.step)
    }

    pub fn select_department(&mut self, department_id: &str) -> Result<Step, NavigationError> {
        self.ensure_step(Step::Departments, "select_department")?;
        self.selected_department = Some(department_id.to_string());
        self.step = Step::Complaint;
        Ok(self.step)
    }

    pub fn complaint_mut(&mut self) -> Result<&mut ComplaintDraft, NavigationError> {
        self.ensure_step(Step::Complaint, "edit_complaint")?;
        Ok(&mut self.complaint)
    }

    /// A ticket was issued: clear the form and return to the departments.
    pub fn complaint_submitted(&mut self) -> Result<Step, NavigationError> {
        self.ensure_step(Step::Complaint, "submit_complaint")?;
        self.complaint.clear();
        self.leave_complaint();
        Ok(self.step)
    }

    /// The draft survives going back, as it does in the browser form.
    pub fn back_to_departments(&mut self) -> Result<Step, NavigationError> {
        self.ensure_step(Step::Complaint, "back")?;
        if self.busy {
            return Err(NavigationError::Busy);
        }
        self.leave_complaint();
        Ok(self.step)
    }

    fn leave_complaint(&mut self) {
        self.selected_department = None;
        self.step = Step::Departments;
    }
}
