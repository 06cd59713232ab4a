//! Localized view models for each portal step.
//!
//! A view model carries every string the page shows, already resolved in
//! the session's locale, plus the flags that drive enabled/disabled
//! controls. Presentation (markup, icons, colours) belongs to the client.

use serde::Serialize;

use crate::catalogue;
use crate::i18n::{Locale, MessageKey, Translator};
use crate::models::{
    AssignedComplaint, AssignmentStatus, Department, LocationOption, Priority, StaffStats, User,
};
use crate::portal::{Portal, Step, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

pub fn language_options() -> Vec<LanguageOption> {
    Locale::ALL
        .iter()
        .map(|locale| LanguageOption {
            code: locale.code(),
            name: locale.display_name(),
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSelector {
    pub current: Locale,
    pub options: Vec<LanguageOption>,
}

impl LanguageSelector {
    fn new(current: Locale) -> Self {
        Self {
            current,
            options: language_options(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    pub name: String,
    pub role_label: String,
}

/// Top bar shown on every step except login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub language: LanguageSelector,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserBadge>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub language: LanguageSelector,
    pub portal_title: String,
    pub portal_subtitle: String,
    pub card_title: String,
    pub card_description: String,
    pub signup: bool,
    pub busy: bool,
    pub citizen_tab: String,
    pub staff_tab: String,
    pub staff_tab_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signup_notice: Option<String>,
    pub mobile: Field,
    pub name: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Field>,
    pub citizen_submit: String,
    pub toggle_mode: String,
    pub employee_id: Field,
    pub password: Field,
    pub staff_submit: String,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub title: String,
    pub description: String,
    pub state_label: String,
    pub state_placeholder: String,
    pub states: Vec<LocationOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_state: Option<String>,
    pub district_label: String,
    pub district_placeholder: String,
    pub district_enabled: bool,
    pub districts: Vec<LocationOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_district: Option<String>,
    pub continue_label: String,
    pub can_continue: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCard {
    #[serde(flatten)]
    pub department: Department,
    pub show_stats: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_label: Option<String>,
    pub select_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsView {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_line: Option<String>,
    pub departments: Vec<DepartmentCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRow {
    pub index: usize,
    pub name: String,
    pub size_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentsView {
    pub label: String,
    pub upload_text: String,
    pub supported_files: String,
    pub accept: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attached_heading: Option<String>,
    pub files: Vec<AttachmentRow>,
    pub remove_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    pub back_label: String,
    pub heading: String,
    pub description: String,
    pub department: Department,
    pub title: TextInput,
    pub details: TextInput,
    pub location: TextInput,
    pub attachments: AttachmentsView,
    pub submit_label: String,
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRow {
    #[serde(flatten)]
    pub complaint: AssignedComplaint,
    pub priority_label: String,
    pub status_label: String,
    pub reference_line: String,
    pub location_line: String,
    pub view_label: String,
    pub chat_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub title: String,
    pub welcome: String,
    pub stats: Vec<StatCard>,
    pub list_title: String,
    pub list_description: String,
    pub complaints: Vec<ComplaintRow>,
}

/// Content area of the page for the current step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Login(LoginView),
    Location(LocationView),
    Departments(DepartmentsView),
    Complaint(ComplaintView),
    StaffDashboard(DashboardView),
    /// The complaint step with a department id that does not resolve.
    Empty,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderView>,
    pub content: View,
}

/// Render the page for the portal's current step.
pub fn render(portal: &Portal) -> PageView {
    let t = portal.translator();

    let content = match portal.step() {
        Step::Login => View::Login(login_view(portal, &t)),
        Step::Location => View::Location(location_view(portal, &t)),
        Step::Departments => View::Departments(departments_view(portal, &t)),
        Step::Complaint => match complaint_view(portal, &t) {
            Some(view) => View::Complaint(view),
            None => View::Empty,
        },
        Step::StaffDashboard => View::StaffDashboard(dashboard_view(portal.user(), &t)),
    };

    let header = match portal.step() {
        Step::Login => None,
        _ => Some(header_view(portal, &t)),
    };

    PageView { header, content }
}

fn header_view(portal: &Portal, t: &Translator) -> HeaderView {
    HeaderView {
        title: t.t(MessageKey::HeaderMunicipalPortal),
        subtitle: t.t(MessageKey::HeaderGrievanceSystem),
        language: LanguageSelector::new(t.locale()),
        user: portal.user().map(|user| UserBadge {
            name: user.name().to_string(),
            role_label: t.t_str(&format!("auth.{}", user.role())),
        }),
    }
}

fn field(t: &Translator, label: MessageKey, placeholder: MessageKey) -> Field {
    Field {
        label: t.t(label),
        placeholder: t.t(placeholder),
    }
}

fn login_view(portal: &Portal, t: &Translator) -> LoginView {
    let signup = portal.is_signup();
    let busy = portal.is_busy();

    let pick = |signup_key: MessageKey, signin_key: MessageKey| {
        if signup {
            t.t(signup_key)
        } else {
            t.t(signin_key)
        }
    };

    let citizen_submit = if busy {
        pick(MessageKey::AuthCreatingAccount, MessageKey::AuthSigningIn)
    } else {
        pick(
            MessageKey::AuthCreateCitizenAccount,
            MessageKey::AuthSignInCitizen,
        )
    };
    let staff_submit = if busy {
        t.t(MessageKey::AuthSigningIn)
    } else {
        t.t(MessageKey::AuthSignInStaff)
    };

    LoginView {
        language: LanguageSelector::new(t.locale()),
        portal_title: t.t(MessageKey::HeaderMunicipalPortal),
        portal_subtitle: t.t(MessageKey::HeaderGrievanceSystem),
        card_title: pick(MessageKey::AuthCreateAccount, MessageKey::AuthWelcome),
        card_description: pick(
            MessageKey::AuthSignUpDescription,
            MessageKey::AuthSignInDescription,
        ),
        signup,
        busy,
        citizen_tab: t.t(MessageKey::AuthCitizen),
        staff_tab: t.t(MessageKey::AuthStaff),
        staff_tab_enabled: !signup,
        signup_notice: signup.then(|| t.t(MessageKey::AuthStaffAdminOnly)),
        mobile: field(t, MessageKey::AuthMobile, MessageKey::AuthMobilePlaceholder),
        name: field(t, MessageKey::AuthFullName, MessageKey::AuthFullNamePlaceholder),
        email: signup.then(|| field(t, MessageKey::AuthEmail, MessageKey::AuthEmailPlaceholder)),
        citizen_submit,
        toggle_mode: pick(MessageKey::AuthAlreadyAccount, MessageKey::AuthNewUser),
        employee_id: field(
            t,
            MessageKey::AuthEmployeeId,
            MessageKey::AuthEmployeeIdPlaceholder,
        ),
        password: field(t, MessageKey::AuthPassword, MessageKey::AuthPasswordPlaceholder),
        staff_submit,
        footer: t.t(MessageKey::AuthSecureAccess),
    }
}

fn location_view(portal: &Portal, t: &Translator) -> LocationView {
    let form = portal.location_form();
    let selected_state = form.state_id().map(str::to_string);

    LocationView {
        title: t.t(MessageKey::LocationSelectLocation),
        description: t.t(MessageKey::LocationSelectDescription),
        state_label: t.t(MessageKey::LocationState),
        state_placeholder: t.t(MessageKey::LocationSelectState),
        states: catalogue::state_options(),
        district_label: t.t(MessageKey::LocationDistrict),
        district_placeholder: t.t(MessageKey::LocationSelectDistrict),
        district_enabled: selected_state.is_some(),
        districts: form
            .state_id()
            .map(catalogue::district_options)
            .unwrap_or_default(),
        selected_state,
        selected_district: form.district_id().map(str::to_string),
        continue_label: t.t(MessageKey::LocationContinue),
        can_continue: form.can_continue(),
    }
}

fn departments_view(portal: &Portal, t: &Translator) -> DepartmentsView {
    // Staff never reach this step today, but the cards still honour the role.
    let show_stats = matches!(portal.user(), Some(User::Staff { .. }));

    let departments = catalogue::departments(t)
        .into_iter()
        .map(|department| {
            let pending_label = match (show_stats, department.pending_count) {
                (true, Some(count)) => {
                    Some(format!("{} {}", count, t.t(MessageKey::DepartmentsPending)))
                }
                _ => None,
            };
            DepartmentCard {
                department,
                show_stats,
                pending_label,
                select_label: t.t(MessageKey::DepartmentsSelectDepartment),
            }
        })
        .collect();

    DepartmentsView {
        title: t.t(MessageKey::DepartmentsTitle),
        description: t.t(MessageKey::DepartmentsDescription),
        location_line: portal.location().map(|location| {
            format!(
                "{} {}, {}",
                t.t(MessageKey::CommonLocation),
                location.district,
                location.state
            )
        }),
        departments,
    }
}

fn counter(t: &Translator, value: &str, max: usize) -> String {
    format!(
        "{}/{} {}",
        value.chars().count(),
        max,
        t.t(MessageKey::ComplaintCharacters)
    )
}

fn complaint_view(portal: &Portal, t: &Translator) -> Option<ComplaintView> {
    let department = catalogue::find_department(portal.selected_department()?, t)?;
    let draft = portal.complaint();
    let busy = portal.is_busy();
    let required = t.t(MessageKey::ComplaintRequired);

    let files: Vec<AttachmentRow> = draft
        .attachments()
        .iter()
        .enumerate()
        .map(|(index, attachment)| AttachmentRow {
            index,
            name: attachment.name.clone(),
            size_label: attachment.size_label(),
        })
        .collect();

    Some(ComplaintView {
        back_label: t.t(MessageKey::ComplaintBackToDepartments),
        heading: t.t(MessageKey::ComplaintSubmitComplaint),
        description: t.t_with(
            MessageKey::ComplaintSubmitDescription,
            &[("department", department.name.as_str())],
        ),
        title: TextInput {
            label: format!("{} {}", t.t(MessageKey::ComplaintTitle), required),
            placeholder: t.t(MessageKey::ComplaintTitlePlaceholder),
            value: draft.title().to_string(),
            counter: Some(counter(t, draft.title(), TITLE_MAX_CHARS)),
        },
        details: TextInput {
            label: format!("{} {}", t.t(MessageKey::ComplaintDescription), required),
            placeholder: t.t(MessageKey::ComplaintDescriptionPlaceholder),
            value: draft.description().to_string(),
            counter: Some(counter(t, draft.description(), DESCRIPTION_MAX_CHARS)),
        },
        location: TextInput {
            label: t.t(MessageKey::ComplaintLocation),
            placeholder: t.t(MessageKey::ComplaintLocationPlaceholder),
            value: draft.location().to_string(),
            counter: None,
        },
        attachments: AttachmentsView {
            label: t.t(MessageKey::ComplaintAttachments),
            upload_text: t.t(MessageKey::ComplaintUploadText),
            supported_files: t.t(MessageKey::ComplaintSupportedFiles),
            accept: "image/*,video/*,.pdf,.doc,.docx",
            attached_heading: (!files.is_empty()).then(|| t.t(MessageKey::ComplaintAttachedFiles)),
            files,
            remove_label: t.t(MessageKey::ComplaintRemove),
        },
        submit_label: if busy {
            t.t(MessageKey::ComplaintSubmitting)
        } else {
            t.t(MessageKey::ComplaintSubmit)
        },
        busy,
        department,
    })
}

fn priority_label(t: &Translator, priority: Priority) -> String {
    match priority {
        Priority::High => t.t(MessageKey::StaffHigh),
        Priority::Medium => t.t(MessageKey::StaffMedium),
        Priority::Low => t.t(MessageKey::StaffLow),
    }
}

fn status_label(t: &Translator, status: AssignmentStatus) -> String {
    match status {
        AssignmentStatus::Pending => t.t(MessageKey::StaffPending),
        AssignmentStatus::InProgress => t.t(MessageKey::StaffInProgress),
        AssignmentStatus::Resolved => "resolved".to_string(),
    }
}

fn stat_cards(t: &Translator, stats: StaffStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: t.t(MessageKey::StaffTotalAssigned),
            value: stats.total_assigned,
        },
        StatCard {
            label: t.t(MessageKey::StaffPending),
            value: stats.pending,
        },
        StatCard {
            label: t.t(MessageKey::StaffInProgress),
            value: stats.in_progress,
        },
        StatCard {
            label: t.t(MessageKey::StaffResolvedToday),
            value: stats.resolved_today,
        },
    ]
}

fn dashboard_view(user: Option<&User>, t: &Translator) -> DashboardView {
    let (name, department) = match user {
        Some(User::Staff { name, department }) => (name.as_str(), department.as_str()),
        Some(User::Citizen { name }) => (name.as_str(), ""),
        None => ("", ""),
    };

    let complaints = catalogue::ASSIGNED_COMPLAINTS
        .iter()
        .map(|complaint| ComplaintRow {
            priority_label: priority_label(t, complaint.priority),
            status_label: status_label(t, complaint.status),
            reference_line: format!(
                "{} {} • {} {}",
                t.t(MessageKey::StaffTicketId),
                complaint.id,
                t.t(MessageKey::StaffCitizen),
                complaint.citizen
            ),
            location_line: format!(
                "{} {} • {} {}",
                t.t(MessageKey::StaffLocation),
                complaint.location,
                t.t(MessageKey::StaffAssigned),
                complaint.assigned_at
            ),
            view_label: t.t(MessageKey::StaffView),
            chat_label: t.t(MessageKey::StaffChat),
            complaint: complaint.clone(),
        })
        .collect();

    DashboardView {
        title: t.t(MessageKey::StaffDashboard),
        welcome: t.t_with(
            MessageKey::StaffWelcomeBack,
            &[("name", name), ("department", department)],
        ),
        stats: stat_cards(t, catalogue::staff_stats()),
        list_title: t.t(MessageKey::StaffAssignedComplaints),
        list_description: t.t(MessageKey::StaffManageDescription),
        complaints,
    }
}
