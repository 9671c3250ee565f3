//! Assessment lifecycle state machine and access policy.
//!
//! An assessment moves strictly forward through four states:
//!
//! `pending_AI_analysis` -> `AI_rated` -> `proctor_requested` -> `proctor_verified`
//!
//! No skips, no backward moves. This module is pure: it decides whether a
//! transition or read is allowed against data the caller has already loaded.
//! The repository layer re-checks the expected prior status in its WHERE
//! clauses, so a decision made here that loses a race surfaces as a conflict
//! there rather than a lost update.

use crate::error::CoreError;
use crate::permissions::{
    PermissionSet, PERM_ASSESSMENT_READ_ALL, PERM_ASSESSMENT_READ_OWN,
    PERM_ASSESSMENT_READ_VERIFIED, PERM_ASSESSMENT_UPDATE_OWN, PERM_ASSESSMENT_VERIFY,
};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Submitted; automated scoring has not run yet.
pub const STATUS_PENDING_AI_ANALYSIS: &str = "pending_AI_analysis";

/// Automated scoring has written its rating and feedback.
pub const STATUS_AI_RATED: &str = "AI_rated";

/// The candidate has asked a human proctor to review the AI result.
pub const STATUS_PROCTOR_REQUESTED: &str = "proctor_requested";

/// A proctor has issued a verdict. Terminal.
pub const STATUS_PROCTOR_VERIFIED: &str = "proctor_verified";

/// All valid status strings, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING_AI_ANALYSIS,
    STATUS_AI_RATED,
    STATUS_PROCTOR_REQUESTED,
    STATUS_PROCTOR_VERIFIED,
];

// ---------------------------------------------------------------------------
// AssessmentStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentStatus {
    PendingAiAnalysis,
    AiRated,
    ProctorRequested,
    ProctorVerified,
}

impl AssessmentStatus {
    /// The state every new assessment starts in.
    pub fn initial() -> Self {
        Self::PendingAiAnalysis
    }

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            STATUS_PENDING_AI_ANALYSIS => Ok(Self::PendingAiAnalysis),
            STATUS_AI_RATED => Ok(Self::AiRated),
            STATUS_PROCTOR_REQUESTED => Ok(Self::ProctorRequested),
            STATUS_PROCTOR_VERIFIED => Ok(Self::ProctorVerified),
            _ => Err(format!(
                "Invalid assessment status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingAiAnalysis => STATUS_PENDING_AI_ANALYSIS,
            Self::AiRated => STATUS_AI_RATED,
            Self::ProctorRequested => STATUS_PROCTOR_REQUESTED,
            Self::ProctorVerified => STATUS_PROCTOR_VERIFIED,
        }
    }

    /// Whether no further transitions can leave this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ProctorVerified)
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// A state-changing step in the assessment lifecycle.
///
/// Submission is not a transition; it creates the record already in
/// [`AssessmentStatus::initial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Scoring engine writes `ai_rating` + `ai_feedback`.
    RecordAiResult,
    /// Candidate asks for human review of the AI result.
    RequestProctor,
    /// Proctor writes the verification verdict.
    Verify,
}

impl Transition {
    /// The only state this transition may be applied from.
    pub fn required_from(&self) -> AssessmentStatus {
        match self {
            Self::RecordAiResult => AssessmentStatus::PendingAiAnalysis,
            Self::RequestProctor => AssessmentStatus::AiRated,
            Self::Verify => AssessmentStatus::ProctorRequested,
        }
    }

    /// The state this transition moves the assessment into.
    pub fn target(&self) -> AssessmentStatus {
        match self {
            Self::RecordAiResult => AssessmentStatus::AiRated,
            Self::RequestProctor => AssessmentStatus::ProctorRequested,
            Self::Verify => AssessmentStatus::ProctorVerified,
        }
    }

    /// Short action phrase for error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RecordAiResult => "record AI analysis results",
            Self::RequestProctor => "request proctor review",
            Self::Verify => "verify the assessment",
        }
    }
}

/// Who is attempting a transition.
#[derive(Debug, Clone)]
pub enum Actor<'a> {
    /// The scoring engine acting on its own schedule.
    System,
    /// An authenticated user with permissions resolved for this request.
    User {
        user_id: DbId,
        permissions: &'a PermissionSet,
    },
}

/// Check that the actor is allowed to attempt `transition` on an assessment
/// owned by `owner_id`.
///
/// Permission and ownership only; the current status is checked separately
/// by [`check_transition`] so an unauthorized caller cannot distinguish
/// state by probing.
pub fn authorize(transition: Transition, actor: &Actor, owner_id: DbId) -> Result<(), CoreError> {
    match (transition, actor) {
        (Transition::RecordAiResult, Actor::System) => Ok(()),
        (Transition::RecordAiResult, Actor::User { .. }) => Err(CoreError::Forbidden(
            "AI analysis results are written only by the scoring engine".to_string(),
        )),

        (Transition::RequestProctor, Actor::System) | (Transition::Verify, Actor::System) => {
            Err(CoreError::Forbidden(format!(
                "Only an authenticated user may {}",
                transition.description()
            )))
        }

        (
            Transition::RequestProctor,
            Actor::User {
                user_id,
                permissions,
            },
        ) => {
            permissions.require(PERM_ASSESSMENT_UPDATE_OWN)?;
            if *user_id != owner_id {
                return Err(CoreError::Forbidden(
                    "Only the assessment owner may request proctor review".to_string(),
                ));
            }
            Ok(())
        }

        (Transition::Verify, Actor::User { permissions, .. }) => {
            permissions.require(PERM_ASSESSMENT_VERIFY)
        }
    }
}

/// Check that `transition` may be applied from `current`, returning the
/// target state.
///
/// Applying a transition from any state other than its `required_from`
/// state is a conflict, never a silent no-op, so callers can distinguish
/// "already advanced" from "not found".
pub fn check_transition(
    current: AssessmentStatus,
    transition: Transition,
) -> Result<AssessmentStatus, CoreError> {
    if current == transition.required_from() {
        Ok(transition.target())
    } else {
        Err(CoreError::Conflict(format!(
            "Cannot {}: status is '{}', expected '{}'",
            transition.description(),
            current.as_str(),
            transition.required_from().as_str()
        )))
    }
}

// ---------------------------------------------------------------------------
// Read policy
// ---------------------------------------------------------------------------

/// Whether `viewer_id` may read a single assessment.
///
/// Allowed when the viewer holds `assessment:read_all`, holds
/// `assessment:read_verified` and the assessment is verified, or owns the
/// record and holds `assessment:read_own`.
pub fn can_view(
    viewer_id: DbId,
    permissions: &PermissionSet,
    owner_id: DbId,
    status: AssessmentStatus,
) -> bool {
    if permissions.contains(PERM_ASSESSMENT_READ_ALL) {
        return true;
    }
    if permissions.contains(PERM_ASSESSMENT_READ_VERIFIED)
        && status == AssessmentStatus::ProctorVerified
    {
        return true;
    }
    viewer_id == owner_id && permissions.contains(PERM_ASSESSMENT_READ_OWN)
}

/// Which slice of the assessment table a list request may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// Every assessment.
    All,
    /// Proctor-verified assessments from any candidate.
    VerifiedOnly,
    /// The caller's own assessments.
    Own,
}

/// Resolve the widest list scope the caller's permissions allow.
pub fn list_scope(permissions: &PermissionSet) -> Result<ListScope, CoreError> {
    if permissions.contains(PERM_ASSESSMENT_READ_ALL) {
        Ok(ListScope::All)
    } else if permissions.contains(PERM_ASSESSMENT_READ_VERIFIED) {
        Ok(ListScope::VerifiedOnly)
    } else if permissions.contains(PERM_ASSESSMENT_READ_OWN) {
        Ok(ListScope::Own)
    } else {
        Err(CoreError::Forbidden(
            "Missing permission to list assessments".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Update policy
// ---------------------------------------------------------------------------

/// Which field groups a generic assessment update request touches.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateTouches {
    /// Owner-editable fields (`video_url`).
    pub own: bool,
    /// `ai_rating` / `ai_feedback`.
    pub ai: bool,
    /// `proctor_rating` / `proctor_comments` / `integrity_status`.
    pub proctor: bool,
    /// Requested target status, if the payload names one.
    pub status: Option<AssessmentStatus>,
}

/// How an allowed generic update must be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePlan {
    /// Write owner-editable fields in place.
    OwnFields,
    /// Route through the [`Transition::Verify`] path atomically.
    Verify,
}

/// Decide how a generic update request may proceed.
///
/// Owners are limited to their own fields; AI analysis fields are never
/// client-writable; status and proctor fields move only through the Verify
/// transition, and only for holders of `assessment:verify`.
pub fn plan_update(
    touches: &UpdateTouches,
    permissions: &PermissionSet,
    is_owner: bool,
) -> Result<UpdatePlan, CoreError> {
    if touches.proctor || touches.status == Some(AssessmentStatus::ProctorVerified) {
        permissions.require(PERM_ASSESSMENT_VERIFY)?;
        if touches.ai {
            return Err(CoreError::Forbidden(
                "AI analysis fields are written only by the scoring engine".to_string(),
            ));
        }
        if touches.own {
            return Err(CoreError::Validation(
                "A verification update cannot also modify owner fields".to_string(),
            ));
        }
        if let Some(status) = touches.status {
            if status != AssessmentStatus::ProctorVerified {
                return Err(CoreError::Validation(format!(
                    "A verification update may only set status '{STATUS_PROCTOR_VERIFIED}', got '{}'",
                    status.as_str()
                )));
            }
        }
        return Ok(UpdatePlan::Verify);
    }

    if touches.status.is_some() {
        return Err(CoreError::Forbidden(
            "Assessment status cannot be set directly".to_string(),
        ));
    }
    if touches.ai {
        return Err(CoreError::Forbidden(
            "AI analysis fields are written only by the scoring engine".to_string(),
        ));
    }

    permissions.require(PERM_ASSESSMENT_UPDATE_OWN)?;
    if !is_owner {
        return Err(CoreError::Forbidden(
            "Only the assessment owner may update it".to_string(),
        ));
    }
    if !touches.own {
        return Err(CoreError::Validation(
            "No updatable fields provided".to_string(),
        ));
    }
    Ok(UpdatePlan::OwnFields)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
