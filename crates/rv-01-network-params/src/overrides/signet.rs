//! `-signetchallenge` and `-signetseednode` handling.

use crate::errors::{ConfigError, Result};

/// Decodes the signet challenge, if one was supplied.
pub fn parse_challenge(values: &[String]) -> Result<Option<Vec<u8>>> {
    match values {
        [] => Ok(None),
        [hex_challenge] => {
            let bytes = hex::decode(hex_challenge)
                .map_err(|_| ConfigError::InvalidSignetChallenge(hex_challenge.clone()))?;
            if bytes.is_empty() {
                return Err(ConfigError::InvalidSignetChallenge(hex_challenge.clone()));
            }
            Ok(Some(bytes))
        }
        _ => Err(ConfigError::MultipleSignetChallenges),
    }
}
