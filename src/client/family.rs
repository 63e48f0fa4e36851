//! Endpoint family selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two redundant backend deployments.
///
/// Both families expose the same CRUD surface; the tag matters because a
/// todo id is only meaningful inside the family that assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointFamily {
    Primary,
    Secondary,
}

impl EndpointFamily {
    /// The family tried when this one fails.
    pub fn fallback(self) -> Self {
        match self {
            EndpointFamily::Primary => EndpointFamily::Secondary,
            EndpointFamily::Secondary => EndpointFamily::Primary,
        }
    }
}

impl fmt::Display for EndpointFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointFamily::Primary => write!(f, "primary"),
            EndpointFamily::Secondary => write!(f, "secondary"),
        }
    }
}

impl FromStr for EndpointFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(EndpointFamily::Primary),
            "secondary" => Ok(EndpointFamily::Secondary),
            other => Err(format!(
                "unknown endpoint family '{}' (expected 'primary' or 'secondary')",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_flips() {
        assert_eq!(
            EndpointFamily::Primary.fallback(),
            EndpointFamily::Secondary
        );
        assert_eq!(
            EndpointFamily::Secondary.fallback(),
            EndpointFamily::Primary
        );
        assert_eq!(
            EndpointFamily::Primary.fallback().fallback(),
            EndpointFamily::Primary
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "primary".parse::<EndpointFamily>().unwrap(),
            EndpointFamily::Primary
        );
        assert_eq!(
            " Secondary ".parse::<EndpointFamily>().unwrap(),
            EndpointFamily::Secondary
        );
        assert!("lambda".parse::<EndpointFamily>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let family: EndpointFamily = serde_json::from_str("\"secondary\"").unwrap();
        assert_eq!(family, EndpointFamily::Secondary);
        assert_eq!(
            serde_json::to_string(&EndpointFamily::Primary).unwrap(),
            "\"primary\""
        );
    }
}
