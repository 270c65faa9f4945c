use crate::error::TrackError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Base coordinate system of the track's positions, either 0- or 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseCoord {
    Zero,
    One,
    #[default]
    Unspecified,
}

impl BaseCoord {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseCoord::Zero => "0",
            BaseCoord::One => "1",
            BaseCoord::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for BaseCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseCoord {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "zero" => Ok(BaseCoord::Zero),
            "1" | "one" => Ok(BaseCoord::One),
            "unspecified" => Ok(BaseCoord::Unspecified),
            _ => {
                log::debug!("Rejecting base coordinate convention '{s}'");
                Err(TrackError::UnknownBaseCoord(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(BaseCoord::default(), BaseCoord::Unspecified);
    }

    #[test]
    fn test_parse_own_spellings() {
        for coord in [BaseCoord::Zero, BaseCoord::One, BaseCoord::Unspecified] {
            assert_eq!(coord.as_str().parse::<BaseCoord>(), Ok(coord));
        }
        assert_eq!(" ZERO ".parse::<BaseCoord>(), Ok(BaseCoord::Zero));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "2".parse::<BaseCoord>(),
            Err(TrackError::UnknownBaseCoord("2".to_string()))
        );
    }
}
