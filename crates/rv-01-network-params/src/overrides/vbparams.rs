//! `-vbparams` and `-segwitheight` parsing.

use std::str::FromStr;

use tracing::info;

use crate::domain::{
    DeploymentId, DeploymentStart, DeploymentTimeout, DeploymentWindow, DISABLED_HEIGHT,
};
use crate::errors::{ConfigError, Result};

/// One parsed `-vbparams=name:start:timeout[:min_activation_height]` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionBitsOverride {
    pub deployment: DeploymentId,
    pub start: DeploymentStart,
    pub timeout: DeploymentTimeout,
    pub min_activation_height: i32,
}

impl VersionBitsOverride {
    /// Replacement window; the signalling bit is kept.
    pub fn apply_to(&self, current: &DeploymentWindow) -> DeploymentWindow {
        DeploymentWindow {
            bit: current.bit,
            start: self.start,
            timeout: self.timeout,
            min_activation_height: self.min_activation_height,
        }
    }
}

impl FromStr for VersionBitsOverride {
    type Err = ConfigError;

    fn from_str(arg: &str) -> Result<Self> {
        let fields: Vec<&str> = arg.split(':').collect();
        if !(3..=4).contains(&fields.len()) {
            return Err(ConfigError::MalformedVersionBits(arg.to_string()));
        }

        let start = DeploymentStart::parse(fields[1])?;
        let timeout = DeploymentTimeout::parse(fields[2])?;
        let min_activation_height = match fields.get(3) {
            Some(field) => field
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidMinActivationHeight(field.to_string()))?,
            None => 0,
        };
        let deployment = DeploymentId::from_name(fields[0])
            .ok_or_else(|| ConfigError::UnknownDeployment(fields[0].to_string()))?;

        let parsed = Self {
            deployment,
            start,
            timeout,
            min_activation_height,
        };
        DeploymentWindow::new(0, start, timeout).validate(deployment.name())?;
        Ok(parsed)
    }
}

/// Maps a `-segwitheight` value onto an activation height.
///
/// `-1` disables segwit, encoded as [`DISABLED_HEIGHT`].
pub fn segwit_activation_height(raw: i64) -> Result<i32> {
    if raw < -1 || raw >= i64::from(DISABLED_HEIGHT) {
        return Err(ConfigError::SegwitHeightOutOfRange(raw));
    }
    if raw == -1 {
        info!("Segwit disabled for testing");
        return Ok(DISABLED_HEIGHT);
    }
    // Range checked above.
    Ok(raw as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_form() {
        let parsed: VersionBitsOverride = "testbit:100:200:0".parse().unwrap();
        assert_eq!(parsed.deployment, DeploymentId::TestDummy);
        assert_eq!(parsed.start, DeploymentStart::At(100));
        assert_eq!(parsed.timeout, DeploymentTimeout::At(200));
        assert_eq!(parsed.min_activation_height, 0);
    }

    #[test]
    fn test_parse_three_fields_defaults_min_height() {
        let parsed: VersionBitsOverride = "taproot:ALWAYS_ACTIVE:NO_TIMEOUT".parse().unwrap();
        assert_eq!(parsed.deployment, DeploymentId::Taproot);
        assert_eq!(parsed.start, DeploymentStart::AlwaysActive);
        assert_eq!(parsed.timeout, DeploymentTimeout::NoTimeout);
        assert_eq!(parsed.min_activation_height, 0);
    }

    #[test]
    fn test_parse_min_activation_height() {
        let parsed: VersionBitsOverride = "testbit:0:NO_TIMEOUT:432".parse().unwrap();
        assert_eq!(parsed.min_activation_height, 432);
        assert!(matches!(
            "testbit:0:1:99999999999".parse::<VersionBitsOverride>(),
            Err(ConfigError::InvalidMinActivationHeight(_))
        ));
    }

    #[test]
    fn test_unknown_deployment() {
        assert_eq!(
            "unknownname:0:0:0".parse::<VersionBitsOverride>(),
            Err(ConfigError::UnknownDeployment("unknownname".into()))
        );
    }

    #[test]
    fn test_wrong_field_count() {
        for arg in ["testbit:100", "testbit", "testbit:1:2:3:4", ""] {
            assert!(matches!(
                arg.parse::<VersionBitsOverride>(),
                Err(ConfigError::MalformedVersionBits(_))
            ));
        }
    }

    #[test]
    fn test_bad_times() {
        assert_eq!(
            "testbit:x:200".parse::<VersionBitsOverride>(),
            Err(ConfigError::InvalidStartTime("x".into()))
        );
        assert_eq!(
            "testbit:100:y".parse::<VersionBitsOverride>(),
            Err(ConfigError::InvalidTimeout("y".into()))
        );
        assert!(matches!(
            "testbit:300:200".parse::<VersionBitsOverride>(),
            Err(ConfigError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn test_apply_keeps_bit() {
        let current = DeploymentWindow::never_active(28);
        let parsed: VersionBitsOverride = "testbit:100:200:5".parse().unwrap();
        let window = parsed.apply_to(&current);
        assert_eq!(window.bit, 28);
        assert_eq!(window.min_activation_height, 5);
    }

    #[test]
    fn test_segwit_height_range() {
        assert_eq!(segwit_activation_height(-1), Ok(i32::MAX));
        assert_eq!(segwit_activation_height(0), Ok(0));
        assert_eq!(segwit_activation_height(i64::from(i32::MAX) - 1), Ok(i32::MAX - 1));
        assert_eq!(
            segwit_activation_height(-2),
            Err(ConfigError::SegwitHeightOutOfRange(-2))
        );
        assert!(segwit_activation_height(i64::from(i32::MAX)).is_err());
    }
}
