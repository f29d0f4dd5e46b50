//! One-time onboarding gate.
//!
//! # Invariants
//! - `Incomplete -> Complete` needs a nickname of at least two characters,
//!   consent, and an explicit start.
//! - There is no transition back to `Incomplete`.
//! - `Complete` is restored on load whenever the stored consent flag is true.

use crate::model::profile::{nickname_is_valid, Session, MIN_NICKNAME_CHARS};
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KeyValueStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingState {
    Incomplete,
    Complete,
}

/// Reason a start attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    NicknameTooShort { chars: usize },
    ConsentRequired,
    AlreadyComplete,
}

impl Display for OnboardingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NicknameTooShort { chars } => write!(
                f,
                "nickname needs at least {MIN_NICKNAME_CHARS} characters, got {chars}"
            ),
            Self::ConsentRequired => write!(f, "consent to the community guidelines is required"),
            Self::AlreadyComplete => write!(f, "onboarding is already complete"),
        }
    }
}

impl Error for OnboardingError {}

pub struct OnboardingController<'s, R: KvRepository> {
    store: &'s KeyValueStore<R>,
    nickname: String,
    consent: bool,
    state: OnboardingState,
}

impl<'s, R: KvRepository> OnboardingController<'s, R> {
    /// Restores drafts and state from the `nickname` and `consent` slots.
    pub fn new(store: &'s KeyValueStore<R>) -> Self {
        let nickname: String = store.load(keys::NICKNAME, String::new());
        let consent: bool = store.load(keys::CONSENT, false);
        let state = if consent {
            OnboardingState::Complete
        } else {
            OnboardingState::Incomplete
        };

        Self {
            store,
            nickname,
            consent,
            state,
        }
    }

    pub fn state(&self) -> OnboardingState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == OnboardingState::Complete
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    /// Whether the start action is enabled.
    pub fn can_start(&self) -> bool {
        self.state == OnboardingState::Incomplete
            && nickname_is_valid(&self.nickname)
            && self.consent
    }

    /// Completes onboarding, persisting the trimmed nickname and consent.
    ///
    /// Nothing is written when the gate is not met.
    pub fn start(&mut self) -> Result<Session, OnboardingError> {
        if self.state == OnboardingState::Complete {
            return Err(OnboardingError::AlreadyComplete);
        }
        if !nickname_is_valid(&self.nickname) {
            return Err(OnboardingError::NicknameTooShort {
                chars: self.nickname.trim().chars().count(),
            });
        }
        if !self.consent {
            return Err(OnboardingError::ConsentRequired);
        }

        self.nickname = self.nickname.trim().to_string();
        self.store.save(keys::NICKNAME, &self.nickname);
        self.store.save(keys::CONSENT, &true);
        self.state = OnboardingState::Complete;
        info!("event=onboarding_complete module=onboarding status=ok");

        Ok(self.session())
    }

    /// Session view of the current state.
    pub fn session(&self) -> Session {
        Session {
            nickname: self.nickname.clone(),
            onboarding_complete: self.is_complete(),
        }
    }
}
