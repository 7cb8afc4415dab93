//! The demo role switcher: which persona is active, who is signed in, and
//! how far the fan got through onboarding.

use serde::Serialize;
use strum::{Display, EnumString};

use crate::{
  Error, Result,
  artist::Artist,
  login::AdminIdentity,
  onboarding::{OnboardingFlow, UserData},
};

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Persona {
  #[default]
  Fan,
  Admin,
  Artist,
}

#[derive(Debug, Clone, Default)]
pub enum OnboardingProgress {
  #[default]
  NotStarted,
  InProgress(OnboardingFlow),
  Completed,
}

/// The top-level view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Screen {
  AdminLogin,
  AdminDashboard,
  ArtistLogin,
  ArtistDashboard,
  Onboarding,
  FanDashboard,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
  persona:    Persona,
  admin:      Option<AdminIdentity>,
  artist:     Option<Artist>,
  onboarding: OnboardingProgress,
}

impl Session {
  pub fn persona(&self) -> Persona { self.persona }

  pub fn admin(&self) -> Option<&AdminIdentity> { self.admin.as_ref() }

  pub fn artist(&self) -> Option<&Artist> { self.artist.as_ref() }

  pub fn onboarding(&self) -> &OnboardingProgress { &self.onboarding }

  /// The running onboarding flow, if the fan is in one.
  pub fn onboarding_flow_mut(&mut self) -> Option<&mut OnboardingFlow> {
    match &mut self.onboarding {
      OnboardingProgress::InProgress(flow) => Some(flow),
      _ => None,
    }
  }

  pub fn has_completed_onboarding(&self) -> bool {
    matches!(self.onboarding, OnboardingProgress::Completed)
  }

  pub fn screen(&self) -> Screen {
    match self.persona {
      Persona::Admin if self.admin.is_some() => Screen::AdminDashboard,
      Persona::Admin => Screen::AdminLogin,
      Persona::Artist if self.artist.is_some() => Screen::ArtistDashboard,
      Persona::Artist => Screen::ArtistLogin,
      Persona::Fan => match self.onboarding {
        OnboardingProgress::InProgress(_) => Screen::Onboarding,
        _ => Screen::FanDashboard,
      },
    }
  }

  // ─── Persona switching ─────────────────────────────────────────────────────

  /// Entering a portal always lands on its login screen.
  pub fn switch_to_admin(&mut self) {
    self.leave_fan();
    self.persona = Persona::Admin;
    self.admin = None;
  }

  pub fn switch_to_artist(&mut self) {
    self.leave_fan();
    self.persona = Persona::Artist;
    self.artist = None;
  }

  /// A flow left behind for a portal restarts from artist discovery with
  /// the demo defaults.
  fn leave_fan(&mut self) {
    if let OnboardingProgress::InProgress(flow) = &mut self.onboarding {
      *flow = OnboardingFlow::default();
    }
  }

  pub fn switch_to_fan(&mut self) {
    self.persona = Persona::Fan;
    self.admin = None;
    self.artist = None;
  }

  // ─── Portal logins ─────────────────────────────────────────────────────────

  pub fn admin_logged_in(&mut self, identity: AdminIdentity) {
    self.admin = Some(identity);
  }

  pub fn admin_logout(&mut self) {
    self.admin = None;
    self.persona = Persona::Fan;
  }

  pub fn artist_logged_in(&mut self, artist: Artist) {
    self.artist = Some(artist);
  }

  pub fn artist_logout(&mut self) {
    self.artist = None;
    self.persona = Persona::Fan;
  }

  // ─── Onboarding ────────────────────────────────────────────────────────────

  /// Start a fresh flow, discarding any flow already running.
  pub fn start_onboarding(&mut self) {
    self.onboarding = OnboardingProgress::InProgress(OnboardingFlow::default());
  }

  /// Continue past the welcome screen: finishes the running flow, marks
  /// onboarding done and returns what the flow collected.
  ///
  /// Only a flow on its success step can be completed; anything else is an
  /// [`Error::InvalidTransition`] and leaves the session untouched.
  pub fn complete_onboarding(&mut self) -> Result<UserData> {
    let flow = match &mut self.onboarding {
      OnboardingProgress::InProgress(flow) => flow,
      OnboardingProgress::NotStarted => {
        return Err(Error::InvalidTransition {
          state:  "not started",
          action: "complete onboarding",
        });
      }
      OnboardingProgress::Completed => {
        return Err(Error::InvalidTransition {
          state:  "completed",
          action: "complete onboarding",
        });
      }
    };

    let mut collected = UserData::default();
    flow.finish(|data| collected = data.clone())?;
    self.onboarding = OnboardingProgress::Completed;
    Ok(collected)
  }

  pub fn reset_demo(&mut self) {
    self.onboarding = OnboardingProgress::NotStarted;
  }
}
