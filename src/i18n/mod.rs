//! Localization for the portal.
//!
//! Every user-visible string is addressed by a typed [`MessageKey`]. Each
//! locale owns a table from key to format string; lookups fall back to the
//! English table and finally to the dotted key text itself, so a partially
//! translated locale never fails to render.

mod tables;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Bn,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Hi, Locale::Ta, Locale::Te, Locale::Bn];

    /// Locale whose table is canonical and used for fallback.
    pub const DEFAULT: Locale = Locale::En;

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Ta => "ta",
            Locale::Te => "te",
            Locale::Bn => "bn",
        }
    }

    /// Name of the language in its own script, as shown in the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिंदी",
            Locale::Ta => "தமிழ்",
            Locale::Te => "తెలుగు",
            Locale::Bn => "বাংলা",
        }
    }

    /// Parse a locale code. Anything outside the fixed enumeration is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "hi" => Some(Locale::Hi),
            "ta" => Some(Locale::Ta),
            "te" => Some(Locale::Te),
            "bn" => Some(Locale::Bn),
            _ => None,
        }
    }

    fn table(&self) -> &'static [(MessageKey, &'static str)] {
        match self {
            Locale::En => tables::ENGLISH,
            Locale::Hi => tables::HINDI,
            Locale::Ta => tables::TAMIL,
            Locale::Te => tables::TELUGU,
            Locale::Bn => tables::BENGALI,
        }
    }
}

macro_rules! message_keys {
    ($($variant:ident => $key:literal,)*) => {
        /// Canonical set of translatable strings.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $($variant,)*
        }

        impl MessageKey {
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)*];

            /// Dotted key text, e.g. `auth.welcome`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)*
                }
            }

            pub fn parse(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(MessageKey::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

message_keys! {
    // Login & Auth
    AuthWelcome => "auth.welcome",
    AuthCreateAccount => "auth.createAccount",
    AuthSignInDescription => "auth.signInDescription",
    AuthSignUpDescription => "auth.signUpDescription",
    AuthCitizen => "auth.citizen",
    AuthStaff => "auth.staff",
    AuthMobile => "auth.mobile",
    AuthMobilePlaceholder => "auth.mobilePlaceholder",
    AuthFullName => "auth.fullName",
    AuthFullNamePlaceholder => "auth.fullNamePlaceholder",
    AuthEmail => "auth.email",
    AuthEmailPlaceholder => "auth.emailPlaceholder",
    AuthEmployeeId => "auth.employeeId",
    AuthEmployeeIdPlaceholder => "auth.employeeIdPlaceholder",
    AuthPassword => "auth.password",
    AuthPasswordPlaceholder => "auth.passwordPlaceholder",
    AuthSignInCitizen => "auth.signInCitizen",
    AuthSignInStaff => "auth.signInStaff",
    AuthCreateCitizenAccount => "auth.createCitizenAccount",
    AuthSigningIn => "auth.signingIn",
    AuthCreatingAccount => "auth.creatingAccount",
    AuthAlreadyAccount => "auth.alreadyAccount",
    AuthNewUser => "auth.newUser",
    AuthStaffAdminOnly => "auth.staffAdminOnly",
    AuthSecureAccess => "auth.secureAccess",
    // Header
    HeaderMunicipalPortal => "header.municipalPortal",
    HeaderGrievanceSystem => "header.grievanceSystem",
    // Location
    LocationSelectLocation => "location.selectLocation",
    LocationSelectDescription => "location.selectDescription",
    LocationState => "location.state",
    LocationDistrict => "location.district",
    LocationSelectState => "location.selectState",
    LocationSelectDistrict => "location.selectDistrict",
    LocationContinue => "location.continue",
    // Departments
    DepartmentsTitle => "departments.title",
    DepartmentsDescription => "departments.description",
    DepartmentsSelectDepartment => "departments.selectDepartment",
    DepartmentsPending => "departments.pending",
    DepartmentsElectricity => "departments.electricity",
    DepartmentsElectricityDesc => "departments.electricityDesc",
    DepartmentsWaterSupply => "departments.waterSupply",
    DepartmentsWaterSupplyDesc => "departments.waterSupplyDesc",
    DepartmentsRoadsTransport => "departments.roadsTransport",
    DepartmentsRoadsTransportDesc => "departments.roadsTransportDesc",
    DepartmentsHealthSanitation => "departments.healthSanitation",
    DepartmentsHealthSanitationDesc => "departments.healthSanitationDesc",
    DepartmentsSewageDrainage => "departments.sewageDrainage",
    DepartmentsSewageDrainageDesc => "departments.sewageDrainageDesc",
    // Complaint Form
    ComplaintSubmitComplaint => "complaint.submitComplaint",
    ComplaintSubmitDescription => "complaint.submitDescription",
    ComplaintTitle => "complaint.title",
    ComplaintTitlePlaceholder => "complaint.titlePlaceholder",
    ComplaintDescription => "complaint.description",
    ComplaintDescriptionPlaceholder => "complaint.descriptionPlaceholder",
    ComplaintLocation => "complaint.location",
    ComplaintLocationPlaceholder => "complaint.locationPlaceholder",
    ComplaintAttachments => "complaint.attachments",
    ComplaintUploadText => "complaint.uploadText",
    ComplaintSupportedFiles => "complaint.supportedFiles",
    ComplaintAttachedFiles => "complaint.attachedFiles",
    ComplaintRemove => "complaint.remove",
    ComplaintSubmitting => "complaint.submitting",
    ComplaintSubmit => "complaint.submit",
    ComplaintBackToDepartments => "complaint.backToDepartments",
    ComplaintRequired => "complaint.required",
    ComplaintCharacters => "complaint.characters",
    ComplaintRequiredDetail => "complaint.requiredDetail",
    ComplaintUnsupportedAttachment => "complaint.unsupportedAttachment",
    // Staff Dashboard
    StaffDashboard => "staff.dashboard",
    StaffWelcomeBack => "staff.welcomeBack",
    StaffTotalAssigned => "staff.totalAssigned",
    StaffPending => "staff.pending",
    StaffInProgress => "staff.inProgress",
    StaffResolvedToday => "staff.resolvedToday",
    StaffAssignedComplaints => "staff.assignedComplaints",
    StaffManageDescription => "staff.manageDescription",
    StaffTicketId => "staff.ticketId",
    StaffCitizen => "staff.citizen",
    StaffLocation => "staff.location",
    StaffAssigned => "staff.assigned",
    StaffView => "staff.view",
    StaffChat => "staff.chat",
    StaffHigh => "staff.high",
    StaffMedium => "staff.medium",
    StaffLow => "staff.low",
    // Common
    CommonLocation => "common.location",
    CommonFillRequired => "common.fillRequired",
    CommonFillAll => "common.fillAll",
    CommonSuccess => "common.success",
    CommonError => "common.error",
    CommonComplaintSubmitted => "common.complaintSubmitted",
    CommonTicketId => "common.ticketId",
}

impl Serialize for MessageKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

static TABLES: Lazy<HashMap<Locale, HashMap<MessageKey, &'static str>>> = Lazy::new(|| {
    Locale::ALL
        .iter()
        .map(|locale| (*locale, locale.table().iter().copied().collect()))
        .collect()
});

/// Raw table lookup without fallback.
pub fn lookup(locale: Locale, key: MessageKey) -> Option<&'static str> {
    TABLES.get(&locale).and_then(|table| table.get(&key)).copied()
}

/// Replace `{name}` placeholders with their values in one left-to-right pass.
///
/// Substituted values are never rescanned, unknown placeholders are kept
/// verbatim and there is no brace escaping.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| (close, *value))
        });

        match replacement {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Resolves message keys for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: MessageKey) -> String {
        self.resolve(key).to_string()
    }

    pub fn t_with(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        interpolate(self.resolve(key), params)
    }

    /// Resolve a dotted key given as text. Unknown keys come back unchanged.
    pub fn t_str(&self, key: &str) -> String {
        self.t_str_with(key, &[])
    }

    pub fn t_str_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        match MessageKey::parse(key) {
            Some(known) => self.t_with(known, params),
            None => interpolate(key, params),
        }
    }

    fn resolve(&self, key: MessageKey) -> &'static str {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::DEFAULT, key))
            .unwrap_or_else(|| key.as_str())
    }
}

/// Translation coverage of one locale against the canonical key set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub translated: usize,
    pub total: usize,
    pub missing: Vec<MessageKey>,
}

pub fn coverage_report() -> Vec<LocaleCoverage> {
    Locale::ALL
        .iter()
        .map(|locale| {
            let missing: Vec<MessageKey> = MessageKey::ALL
                .iter()
                .copied()
                .filter(|key| lookup(*locale, *key).is_none())
                .collect();
            LocaleCoverage {
                locale: *locale,
                translated: MessageKey::ALL.len() - missing.len(),
                total: MessageKey::ALL.len(),
                missing,
            }
        })
        .collect()
}

/// Emit a warning for every locale that relies on the English fallback.
pub fn log_coverage() {
    for coverage in coverage_report() {
        if coverage.missing.is_empty() {
            continue;
        }
        tracing::warn!(
            locale = coverage.locale.code(),
            translated = coverage.translated,
            total = coverage.total,
            "Locale table incomplete, {} keys fall back to English",
            coverage.missing.len()
        );
    }
}

/// The active locale of one portal session.
///
/// Owned by the session and handed to view builders; there is no global
/// locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    current: Locale,
}

impl LocaleContext {
    pub fn new(locale: Locale) -> Self {
        Self { current: locale }
    }

    /// Build a context from a persisted preference, validating membership.
    pub fn from_stored(stored: Option<&str>) -> Self {
        let locale = match stored {
            Some(code) => Locale::from_code(code).unwrap_or_else(|| {
                tracing::warn!(stored = code, "Ignoring unsupported stored locale");
                Locale::DEFAULT
            }),
            None => Locale::DEFAULT,
        };
        Self::new(locale)
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn set(&mut self, locale: Locale) {
        self.current = locale;
    }

    /// Switch to `code` if it names a supported locale.
    ///
    /// Returns the newly active locale, or `None` when the code was rejected
    /// and the previous locale retained.
    pub fn set_code(&mut self, code: &str) -> Option<Locale> {
        let locale = Locale::from_code(code)?;
        self.set(locale);
        Some(locale)
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.current)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(Locale::DEFAULT)
    }
}
