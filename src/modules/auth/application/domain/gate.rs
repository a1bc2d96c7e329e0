//! Login gate for the admin panel.
//!
//! This is a deterrent in front of the draft workspace, not a trust boundary:
//! anyone who can read the deployment's configuration can get past it.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePolicy {
    pub max_attempts: u32,
    pub lockout: Duration,
    pub verify_steps: u32,
    pub verify_duration: Duration,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout: Duration::from_secs(30),
            verify_steps: 4,
            verify_duration: Duration::from_millis(160),
        }
    }
}

impl GatePolicy {
    pub fn step_interval(&self) -> Duration {
        self.verify_duration / self.verify_steps.max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Idle,
    /// Progress in percent.
    Verifying { progress: u8 },
    LockedOut { until: Instant },
}

/// Why an attempt was turned away before the secret was compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    LockedOut { retry_after: Duration },
    VerificationInProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    Retry { remaining: u32 },
    LockedOut { retry_after: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GatePhaseKind {
    Idle,
    Verifying,
    LockedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GateStatus {
    pub phase: GatePhaseKind,
    pub failed_attempts: u32,
    pub remaining_attempts: u32,
    pub lockout_remaining_secs: u64,
    pub verification_progress: u8,
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    policy: GatePolicy,
    phase: GatePhase,
    failed_attempts: u32,
    completed_steps: u32,
}

impl AccessGate {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            phase: GatePhase::Idle,
            failed_attempts: 0,
            completed_steps: 0,
        }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Ends an expired lockout. The counter starts over afterwards.
    pub fn tick(&mut self, now: Instant) {
        if let GatePhase::LockedOut { until } = self.phase {
            if now >= until {
                self.phase = GatePhase::Idle;
                self.failed_attempts = 0;
            }
        }
    }

    pub fn ensure_accepting(&mut self, now: Instant) -> Result<(), GateRejection> {
        self.tick(now);
        match self.phase {
            GatePhase::Idle => Ok(()),
            GatePhase::Verifying { .. } => Err(GateRejection::VerificationInProgress),
            GatePhase::LockedOut { until } => Err(GateRejection::LockedOut {
                retry_after: until.saturating_duration_since(now),
            }),
        }
    }

    pub fn record_failure(&mut self, now: Instant) -> FailureOutcome {
        self.failed_attempts += 1;

        if self.failed_attempts >= self.policy.max_attempts {
            self.phase = GatePhase::LockedOut {
                until: now + self.policy.lockout,
            };
            return FailureOutcome::LockedOut {
                retry_after: self.policy.lockout,
            };
        }

        FailureOutcome::Retry {
            remaining: self.policy.max_attempts - self.failed_attempts,
        }
    }

    pub fn begin_verification(&mut self) {
        self.completed_steps = 0;
        self.phase = GatePhase::Verifying { progress: 0 };
    }

    /// Moves verification one step forward and returns the new progress.
    /// Outside verification this does nothing.
    pub fn advance(&mut self) -> Option<u8> {
        let GatePhase::Verifying { .. } = self.phase else {
            return None;
        };

        let steps = self.policy.verify_steps.max(1);
        self.completed_steps = (self.completed_steps + 1).min(steps);
        let progress = (self.completed_steps * 100 / steps) as u8;
        self.phase = GatePhase::Verifying { progress };
        Some(progress)
    }

    pub fn complete(&mut self) {
        self.failed_attempts = 0;
        self.completed_steps = 0;
        self.phase = GatePhase::Idle;
    }

    /// Leaves verification without granting access. The counter is untouched.
    pub fn abort_verification(&mut self) {
        if let GatePhase::Verifying { .. } = self.phase {
            self.completed_steps = 0;
            self.phase = GatePhase::Idle;
        }
    }

    pub fn status(&mut self, now: Instant) -> GateStatus {
        self.tick(now);

        let (phase, lockout_remaining_secs, verification_progress) = match self.phase {
            GatePhase::Idle => (GatePhaseKind::Idle, 0, 0),
            GatePhase::Verifying { progress } => (GatePhaseKind::Verifying, 0, progress),
            GatePhase::LockedOut { until } => (
                GatePhaseKind::LockedOut,
                ceil_secs(until.saturating_duration_since(now)),
                0,
            ),
        };

        GateStatus {
            phase,
            failed_attempts: self.failed_attempts,
            remaining_attempts: self.policy.max_attempts.saturating_sub(self.failed_attempts),
            lockout_remaining_secs,
            verification_progress,
        }
    }
}

pub fn ceil_secs(duration: Duration) -> u64 {
    let millis = duration.as_millis() as u64;
    millis.div_ceil(1000)
}
