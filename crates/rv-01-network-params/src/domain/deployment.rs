//! # Version-Bits Deployment Windows
//!
//! Each soft fork signalled through block version bits owns a window: the bit
//! it signals on, the median time at which signalling starts, the time after
//! which an unfinished deployment fails, and the lowest height at which it
//! may activate. The voting state machine that consumes these windows lives
//! outside this crate.
//!
//! ## Sentinels
//!
//! Start and timeout carry named sentinels instead of magic integers:
//!
//! | Raw value | Meaning |
//! |-----------|---------|
//! | `-1` start | [`DeploymentStart::AlwaysActive`] |
//! | `-2` start | [`DeploymentStart::NeverActive`] |
//! | `i64::MAX` timeout | [`DeploymentTimeout::NoTimeout`] |

use std::fmt;

use serde::Serialize;

use crate::errors::{ConfigError, Result};

/// Highest usable version bit (bits 29..31 are the version prefix).
pub const MAX_VERSION_BIT: u8 = 28;

// =============================================================================
// START / TIMEOUT
// =============================================================================

/// When signalling for a deployment begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i64")]
pub enum DeploymentStart {
    /// Median-time-past at which signalling starts.
    At(i64),
    /// Rules are enforced from genesis without signalling.
    AlwaysActive,
    /// The deployment can never activate.
    NeverActive,
}

impl DeploymentStart {
    pub const ALWAYS_ACTIVE_RAW: i64 = -1;
    pub const NEVER_ACTIVE_RAW: i64 = -2;

    /// Maps a raw integer onto the sentinel it encodes, if any.
    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            Self::ALWAYS_ACTIVE_RAW => DeploymentStart::AlwaysActive,
            Self::NEVER_ACTIVE_RAW => DeploymentStart::NeverActive,
            t => DeploymentStart::At(t),
        }
    }

    pub const fn raw(&self) -> i64 {
        match self {
            DeploymentStart::At(t) => *t,
            DeploymentStart::AlwaysActive => Self::ALWAYS_ACTIVE_RAW,
            DeploymentStart::NeverActive => Self::NEVER_ACTIVE_RAW,
        }
    }

    /// Parses an integer or one of `ALWAYS_ACTIVE` / `NEVER_ACTIVE`.
    pub fn parse(field: &str) -> Result<Self> {
        match field {
            "ALWAYS_ACTIVE" => Ok(DeploymentStart::AlwaysActive),
            "NEVER_ACTIVE" => Ok(DeploymentStart::NeverActive),
            _ => field
                .parse::<i64>()
                .map(Self::from_raw)
                .map_err(|_| ConfigError::InvalidStartTime(field.to_string())),
        }
    }
}

impl From<DeploymentStart> for i64 {
    fn from(start: DeploymentStart) -> Self {
        start.raw()
    }
}

impl fmt::Display for DeploymentStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentStart::At(t) => write!(f, "{t}"),
            DeploymentStart::AlwaysActive => f.write_str("ALWAYS_ACTIVE"),
            DeploymentStart::NeverActive => f.write_str("NEVER_ACTIVE"),
        }
    }
}

/// When an unfinished deployment is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i64")]
pub enum DeploymentTimeout {
    At(i64),
    NoTimeout,
}

impl DeploymentTimeout {
    pub const NO_TIMEOUT_RAW: i64 = i64::MAX;

    pub const fn from_raw(raw: i64) -> Self {
        match raw {
            Self::NO_TIMEOUT_RAW => DeploymentTimeout::NoTimeout,
            t => DeploymentTimeout::At(t),
        }
    }

    pub const fn raw(&self) -> i64 {
        match self {
            DeploymentTimeout::At(t) => *t,
            DeploymentTimeout::NoTimeout => Self::NO_TIMEOUT_RAW,
        }
    }

    /// Parses an integer or `NO_TIMEOUT`.
    pub fn parse(field: &str) -> Result<Self> {
        match field {
            "NO_TIMEOUT" => Ok(DeploymentTimeout::NoTimeout),
            _ => field
                .parse::<i64>()
                .map(Self::from_raw)
                .map_err(|_| ConfigError::InvalidTimeout(field.to_string())),
        }
    }
}

impl From<DeploymentTimeout> for i64 {
    fn from(timeout: DeploymentTimeout) -> Self {
        timeout.raw()
    }
}

impl fmt::Display for DeploymentTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentTimeout::At(t) => write!(f, "{t}"),
            DeploymentTimeout::NoTimeout => f.write_str("NO_TIMEOUT"),
        }
    }
}

// =============================================================================
// WINDOW
// =============================================================================

/// Signalling window of one version-bits deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentWindow {
    /// Version bit (0..=28).
    pub bit: u8,
    pub start: DeploymentStart,
    pub timeout: DeploymentTimeout,
    /// Lowest height at which a locked-in deployment becomes active.
    pub min_activation_height: i32,
}

impl DeploymentWindow {
    pub const fn new(bit: u8, start: DeploymentStart, timeout: DeploymentTimeout) -> Self {
        Self {
            bit,
            start,
            timeout,
            min_activation_height: 0,
        }
    }

    /// A deployment that is enforced unconditionally.
    pub const fn always_active(bit: u8) -> Self {
        Self::new(bit, DeploymentStart::AlwaysActive, DeploymentTimeout::NoTimeout)
    }

    /// A deployment that can never activate.
    pub const fn never_active(bit: u8) -> Self {
        Self::new(bit, DeploymentStart::NeverActive, DeploymentTimeout::NoTimeout)
    }

    /// Rejects a dated window that closes before it opens.
    pub fn validate(&self, name: &str) -> Result<()> {
        if let (DeploymentStart::At(start), DeploymentTimeout::At(timeout)) =
            (self.start, self.timeout)
        {
            if start > timeout {
                return Err(ConfigError::InvertedWindow {
                    name: name.to_string(),
                    start,
                    timeout,
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// DEPLOYMENT TABLE
// =============================================================================

/// Known version-bits deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentId {
    /// Dummy deployment used to exercise the signalling machinery.
    TestDummy,
    Taproot,
}

impl DeploymentId {
    pub const COUNT: usize = 2;
    pub const ALL: [DeploymentId; Self::COUNT] = [DeploymentId::TestDummy, DeploymentId::Taproot];

    /// Name accepted by `-vbparams`.
    pub fn name(&self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testbit",
            DeploymentId::Taproot => "taproot",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    const fn index(self) -> usize {
        match self {
            DeploymentId::TestDummy => 0,
            DeploymentId::Taproot => 1,
        }
    }
}

/// One window per [`DeploymentId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployments([DeploymentWindow; DeploymentId::COUNT]);

impl Deployments {
    pub const fn new(test_dummy: DeploymentWindow, taproot: DeploymentWindow) -> Self {
        Self([test_dummy, taproot])
    }

    pub fn get(&self, id: DeploymentId) -> &DeploymentWindow {
        &self.0[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: DeploymentId) -> &mut DeploymentWindow {
        &mut self.0[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeploymentId, &DeploymentWindow)> + '_ {
        DeploymentId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(|(id, window)| window.validate(id.name()))
    }
}

impl Serialize for Deployments {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(DeploymentId::COUNT))?;
        for (id, window) in self.iter() {
            map.serialize_entry(id.name(), window)?;
        }
        map.end()
    }
}
