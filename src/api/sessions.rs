//! Portal session endpoints: navigation, forms and locale switching.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{success, success_with, ApiResult};
use crate::catalogue;
use crate::errors::AppError;
use crate::i18n::{Locale, LocaleContext, MessageKey};
use crate::models::{Attachment, Location, Notification, Ticket, User};
use crate::portal::{CitizenLoginForm, Portal, PortalSession, StaffLoginForm, Step};
use crate::views::{self, PageView};
use crate::AppState;

/// Everything a client needs to draw the current page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub started_at: String,
    pub step: Step,
    pub locale: Locale,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_department: Option<String>,
    pub page: PageView,
}

impl SessionSnapshot {
    pub fn of(session: &PortalSession) -> Self {
        let portal = &session.portal;
        Self {
            id: session.id,
            started_at: session.created_at.to_rfc3339(),
            step: portal.step(),
            locale: portal.locale().current(),
            busy: portal.is_busy(),
            user: portal.user().cloned(),
            location: portal.location().cloned(),
            selected_department: portal.selected_department().map(str::to_string),
            page: views::render(portal),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub client_id: Option<String>,
}

/// POST /api/sessions - Start a portal session.
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> ApiResult<SessionSnapshot> {
    let stored = match request.client_id.as_deref() {
        Some(client_id) => state.preferences.load_locale(client_id).await?,
        None => None,
    };

    let portal = Portal::new(LocaleContext::from_stored(stored.as_deref()));
    let session = PortalSession::new(request.client_id, portal);
    let snapshot = SessionSnapshot::of(&session);
    state.sessions.insert(session).await;
    let active_sessions = state.sessions.len().await;

    tracing::info!(
        session_id = %snapshot.id,
        locale = snapshot.locale.code(),
        active_sessions,
        "Portal session started"
    );
    success(snapshot)
}

/// GET /api/sessions/:id - Current state and page of a session.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| Ok(SessionSnapshot::of(session)))
        .await?;
    success(snapshot)
}

/// DELETE /api/sessions/:id - End a session.
pub async fn end_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<()> {
    state.sessions.remove(id).await?;
    tracing::info!(session_id = %id, "Portal session ended");
    success(())
}

#[derive(Debug, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: String,
}

/// PUT /api/sessions/:id/locale - Switch language.
///
/// Unsupported codes are ignored and the previous locale stays active.
pub async fn set_locale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetLocaleRequest>,
) -> ApiResult<SessionSnapshot> {
    let (changed, client_id, snapshot) = state
        .sessions
        .with_session(id, |session| {
            let changed = session.portal.locale_mut().set_code(&request.locale);
            if changed.is_none() {
                tracing::warn!(session_id = %id, requested = %request.locale, "Ignoring unsupported locale");
            }
            Ok((changed, session.client_id.clone(), SessionSnapshot::of(session)))
        })
        .await?;

    if let (Some(locale), Some(client_id)) = (changed, client_id) {
        state.preferences.save_locale(&client_id, locale).await?;
    }

    success(snapshot)
}

/// POST /api/sessions/:id/login/toggle - Switch between sign-in and sign-up.
pub async fn toggle_signup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            session.portal.toggle_signup()?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

/// POST /api/sessions/:id/login/citizen - Citizen sign-in or sign-up.
pub async fn login_citizen(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<CitizenLoginForm>,
) -> ApiResult<SessionSnapshot> {
    let user = state
        .sessions
        .with_session(id, |session| {
            let portal = &mut session.portal;
            portal.ensure_step(Step::Login, "login")?;
            let user = form
                .validate(portal.is_signup())
                .map_err(|e| AppError::validation(&e, &portal.translator()))?;
            portal.begin_request()?;
            Ok(user)
        })
        .await?;

    complete_login(&state, id, user).await
}

/// POST /api/sessions/:id/login/staff - Staff sign-in.
pub async fn login_staff(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<StaffLoginForm>,
) -> ApiResult<SessionSnapshot> {
    let user = state
        .sessions
        .with_session(id, |session| {
            let portal = &mut session.portal;
            portal.ensure_step(Step::Login, "login")?;
            if portal.is_signup() {
                return Err(AppError::InvalidTransition(
                    "Staff accounts cannot sign up".to_string(),
                ));
            }
            let user = form
                .validate()
                .map_err(|e| AppError::validation(&e, &portal.translator()))?;
            portal.begin_request()?;
            Ok(user)
        })
        .await?;

    complete_login(&state, id, user).await
}

/// Finish a sign-in after the simulated latency.
///
/// The delay runs in its own task so the session leaves the busy state even
/// when the client disconnects before the response.
async fn complete_login(state: &AppState, id: Uuid, user: User) -> ApiResult<SessionSnapshot> {
    let state = state.clone();
    let snapshot = tokio::spawn(async move {
        tokio::time::sleep(state.config.login_delay).await;

        state
            .sessions
            .with_session(id, |session| {
                session.portal.finish_request();
                let role = user.role();
                let step = session.portal.login_succeeded(user)?;
                tracing::info!(session_id = %id, role, step = step.as_str(), "Signed in");
                Ok(SessionSnapshot::of(session))
            })
            .await
    })
    .await??;
    success(snapshot)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectStateRequest {
    pub state_id: String,
}

/// PUT /api/sessions/:id/location/state - Pick a state; clears the district.
pub async fn select_state(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectStateRequest>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            let t = session.portal.translator();
            session
                .portal
                .location_form_mut()?
                .select_state(&request.state_id)
                .map_err(|e| AppError::validation(&e, &t))?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDistrictRequest {
    pub district_id: String,
}

/// PUT /api/sessions/:id/location/district - Pick a district of the chosen state.
pub async fn select_district(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectDistrictRequest>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            let t = session.portal.translator();
            session
                .portal
                .location_form_mut()?
                .select_district(&request.district_id)
                .map_err(|e| AppError::validation(&e, &t))?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

/// POST /api/sessions/:id/location/continue - Confirm the location.
pub async fn confirm_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            let portal = &mut session.portal;
            let t = portal.translator();
            let location = portal
                .location_form_mut()?
                .submit()
                .map_err(|e| AppError::validation(&e, &t))?;
            portal.choose_location(location)?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

/// POST /api/sessions/:id/departments/:department_id - Open the complaint form.
pub async fn select_department(
    State(state): State<AppState>,
    Path((id, department_id)): Path<(Uuid, String)>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            session.portal.select_department(&department_id)?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

#[derive(Debug, Deserialize)]
pub struct UpdateComplaintRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// PUT /api/sessions/:id/complaint - Edit complaint fields.
pub async fn update_complaint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateComplaintRequest>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            let draft = session.portal.complaint_mut()?;
            if let Some(title) = &request.title {
                draft.set_title(title);
            }
            if let Some(description) = &request.description {
                draft.set_description(description);
            }
            if let Some(location) = &request.location {
                draft.set_location(location);
            }
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

/// POST /api/sessions/:id/complaint/attachments - Attach file metadata.
pub async fn add_attachment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(attachment): Json<Attachment>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            let t = session.portal.translator();
            session
                .portal
                .complaint_mut()?
                .add_attachment(attachment)
                .map_err(|e| AppError::validation(&e, &t))?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

/// DELETE /api/sessions/:id/complaint/attachments/:index - Drop an attachment.
pub async fn remove_attachment(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            session
                .portal
                .complaint_mut()?
                .remove_attachment(index)
                .ok_or_else(|| AppError::NotFound(format!("Attachment {} not found", index)))?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}

#[derive(Debug, Serialize)]
pub struct Submission {
    pub ticket: Ticket,
    pub session: SessionSnapshot,
}

/// POST /api/sessions/:id/complaint/submit - Issue a ticket.
///
/// Like sign-in, the simulated latency and the ticket issue run in a
/// spawned task, so a dropped request still completes the submission.
pub async fn submit_complaint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Submission> {
    let department_id = state
        .sessions
        .with_session(id, |session| {
            let portal = &mut session.portal;
            let t = portal.translator();
            portal.ensure_step(Step::Complaint, "submit_complaint")?;
            let department_id = portal
                .selected_department()
                .filter(|department_id| catalogue::find_department(department_id, &t).is_some())
                .map(str::to_string)
                .ok_or_else(no_complaint_form)?;
            portal
                .complaint()
                .validate()
                .map_err(|e| AppError::validation(&e, &t))?;
            portal.begin_request()?;
            Ok(department_id)
        })
        .await?;

    let (submission, notification) = tokio::spawn(async move {
        tokio::time::sleep(state.config.submit_delay).await;

        state
            .sessions
            .with_session(id, |session| {
                session.portal.finish_request();
                // The locale may have changed during the delay.
                let t = session.portal.translator();
                let department = catalogue::find_department(&department_id, &t)
                    .ok_or_else(no_complaint_form)?;
                let ticket = session.portal.complaint().to_ticket(&department, Utc::now());
                session.portal.complaint_submitted()?;

                tracing::info!(
                    session_id = %id,
                    ticket_id = %ticket.id,
                    department = department.id,
                    attachments = ticket.attachments.len(),
                    "Complaint submitted"
                );

                let notification = Notification::success(
                    t.t(MessageKey::CommonComplaintSubmitted),
                    Some(t.t_with(MessageKey::CommonTicketId, &[("ticketId", ticket.id.as_str())])),
                );
                let submission = Submission {
                    ticket,
                    session: SessionSnapshot::of(session),
                };
                Ok((submission, notification))
            })
            .await
    })
    .await??;

    success_with(submission, notification)
}

fn no_complaint_form() -> AppError {
    AppError::InvalidTransition("No complaint form is open".to_string())
}

/// POST /api/sessions/:id/complaint/back - Return to the department list.
pub async fn back_to_departments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<SessionSnapshot> {
    let snapshot = state
        .sessions
        .with_session(id, |session| {
            session.portal.back_to_departments()?;
            Ok(SessionSnapshot::of(session))
        })
        .await?;
    success(snapshot)
}
