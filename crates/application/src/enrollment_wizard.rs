use std::sync::Arc;

use guardpost_core::{AppError, AppResult};
use guardpost_domain::{CatalogEntryId, NewSoldier, SoldierId};
use tracing::info;

use crate::choice_set::ChoiceSet;
use crate::gateway::RosterGateway;

/// Ordered, non-branching steps of the enrollment wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Names and optional service number.
    PersonalInfo,
    /// Exactly one functionality.
    Functionality,
    /// Zero or more restrictions.
    Restrictions,
    /// Zero or more soldiers this one must not serve with.
    IncompatibleWith,
}

impl WizardStep {
    /// Returns the zero-based step index.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::Functionality => 1,
            Self::Restrictions => 2,
            Self::IncompatibleWith => 3,
        }
    }

    /// Returns the operator-facing step title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Functionality => "Functionality",
            Self::Restrictions => "Restrictions",
            Self::IncompatibleWith => "Incompatible With",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::Functionality),
            Self::Functionality => Some(Self::Restrictions),
            Self::Restrictions => Some(Self::IncompatibleWith),
            Self::IncompatibleWith => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::Functionality => Some(Self::PersonalInfo),
            Self::Restrictions => Some(Self::Functionality),
            Self::IncompatibleWith => Some(Self::Restrictions),
        }
    }
}

/// Accumulated enrollment fields, filled step by step.
#[derive(Debug, Clone)]
pub struct SoldierDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional service number; never validated.
    pub personal_id: String,
    /// Single-select functionality choice.
    pub functionality: ChoiceSet<CatalogEntryId>,
    /// Multi-select restriction choices.
    pub restrictions: ChoiceSet<CatalogEntryId>,
    /// Multi-select incompatibility choices.
    pub incompatible: ChoiceSet<SoldierId>,
}

impl SoldierDraft {
    fn empty() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            personal_id: String::new(),
            functionality: ChoiceSet::single(),
            restrictions: ChoiceSet::multi(),
            incompatible: ChoiceSet::multi(),
        }
    }
}

/// Result of one `Next` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Step validation passed; the wizard moved to this step.
    Advanced(WizardStep),
    /// Step validation failed; the reason is held in `last_error`.
    Rejected,
    /// Terminal step submitted and accepted; the wizard reset to step 0.
    Submitted,
}

/// Linear state machine collecting a new soldier across ordered steps.
///
/// Validation failures are handled entirely inside the wizard and never
/// escalate; a failed terminal submission surfaces the gateway error and
/// preserves the whole draft so the operator can press `Next` again.
pub struct EnrollmentWizard {
    gateway: Arc<dyn RosterGateway>,
    step: WizardStep,
    draft: SoldierDraft,
    last_error: Option<String>,
}

impl EnrollmentWizard {
    /// Creates a fresh wizard at the first step.
    #[must_use]
    pub fn new(gateway: Arc<dyn RosterGateway>) -> Self {
        Self {
            gateway,
            step: WizardStep::PersonalInfo,
            draft: SoldierDraft::empty(),
            last_error: None,
        }
    }

    /// Returns the current step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the accumulated draft.
    #[must_use]
    pub fn draft(&self) -> &SoldierDraft {
        &self.draft
    }

    /// Returns the draft for field entry and selection toggling.
    pub fn draft_mut(&mut self) -> &mut SoldierDraft {
        &mut self.draft
    }

    /// Returns the pending validation message, if the last `Next` was rejected.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Attempts to advance; at the terminal step, assembles and submits the
    /// enrollment request.
    pub async fn next(&mut self) -> AppResult<NextOutcome> {
        self.last_error = None;

        if let Err(AppError::Validation(reason)) = validate_step(self.step, &self.draft) {
            self.last_error = Some(reason);
            return Ok(NextOutcome::Rejected);
        }

        if let Some(step) = self.step.next() {
            self.step = step;
            return Ok(NextOutcome::Advanced(step));
        }

        let soldier = self.assemble()?;
        self.gateway.create_soldier(soldier).await?;
        info!(
            first_name = %self.draft.first_name.trim(),
            last_name = %self.draft.last_name.trim(),
            "soldier enrolled"
        );

        self.step = WizardStep::PersonalInfo;
        self.draft = SoldierDraft::empty();
        Ok(NextOutcome::Submitted)
    }

    /// Steps back one step and clears any pending validation message.
    /// Has no effect at the first step.
    pub fn back(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
            self.last_error = None;
        }
    }

    fn assemble(&self) -> AppResult<NewSoldier> {
        let functionality = self
            .draft
            .functionality
            .selected()
            .first()
            .copied()
            .ok_or_else(|| {
                AppError::Validation("Please choose exactly one functionality.".to_owned())
            })?;
        let personal_id = Some(self.draft.personal_id.clone());
        NewSoldier::new(
            self.draft.first_name.clone(),
            self.draft.last_name.clone(),
            personal_id,
            functionality,
            self.draft.restrictions.selected().to_vec(),
            self.draft.incompatible.selected().to_vec(),
        )
    }
}

/// Pure per-step validation predicate.
fn validate_step(step: WizardStep, draft: &SoldierDraft) -> AppResult<()> {
    match step {
        WizardStep::PersonalInfo => {
            if draft.first_name.trim().is_empty() || draft.last_name.trim().is_empty() {
                return Err(AppError::Validation(
                    "First and last name are required.".to_owned(),
                ));
            }
        }
        WizardStep::Functionality => {
            if draft.functionality.is_empty() {
                return Err(AppError::Validation(
                    "Please choose exactly one functionality.".to_owned(),
                ));
            }
        }
        WizardStep::Restrictions | WizardStep::IncompatibleWith => {}
    }

    Ok(())
}
