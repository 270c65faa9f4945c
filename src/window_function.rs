//! Aggregation strategies for summarizing data values when zoomed out past
//! per-base resolution.

use crate::error::TrackError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFunction {
    Mean,
    Median,
    Min,
    Max,
    Percentile2,
    Percentile10,
    Percentile90,
    Percentile98,
    StdDev,
    Count,
    Density,
    None,
}

impl WindowFunction {
    /// Menu order
    pub const ALL: [WindowFunction; 12] = [
        WindowFunction::Mean,
        WindowFunction::Median,
        WindowFunction::Min,
        WindowFunction::Max,
        WindowFunction::Percentile2,
        WindowFunction::Percentile10,
        WindowFunction::Percentile90,
        WindowFunction::Percentile98,
        WindowFunction::StdDev,
        WindowFunction::Count,
        WindowFunction::Density,
        WindowFunction::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowFunction::Mean => "mean",
            WindowFunction::Median => "median",
            WindowFunction::Min => "min",
            WindowFunction::Max => "max",
            WindowFunction::Percentile2 => "percentile2",
            WindowFunction::Percentile10 => "percentile10",
            WindowFunction::Percentile90 => "percentile90",
            WindowFunction::Percentile98 => "percentile98",
            WindowFunction::StdDev => "stddev",
            WindowFunction::Count => "count",
            WindowFunction::Density => "density",
            WindowFunction::None => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WindowFunction::Mean => "Mean",
            WindowFunction::Median => "Median",
            WindowFunction::Min => "Minimum",
            WindowFunction::Max => "Maximum",
            WindowFunction::Percentile2 => "2nd Percentile",
            WindowFunction::Percentile10 => "10th Percentile",
            WindowFunction::Percentile90 => "90th Percentile",
            WindowFunction::Percentile98 => "98th Percentile",
            WindowFunction::StdDev => "Standard Deviation",
            WindowFunction::Count => "Count",
            WindowFunction::Density => "Density",
            WindowFunction::None => "None",
        }
    }
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WindowFunction {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|wf| wf.as_str() == name) {
            Some(wf) => Ok(*wf),
            None => {
                log::debug!("Rejecting windowing function '{s}'");
                Err(TrackError::UnknownWindowFunction(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for wf in WindowFunction::ALL {
            assert_eq!(wf.as_str().parse::<WindowFunction>(), Ok(wf));
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(
            "StdDev".parse::<WindowFunction>(),
            Ok(WindowFunction::StdDev)
        );
        assert_eq!(
            "PERCENTILE90".parse::<WindowFunction>(),
            Ok(WindowFunction::Percentile90)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "average".parse::<WindowFunction>(),
            Err(TrackError::UnknownWindowFunction("average".to_string()))
        );
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(WindowFunction::Percentile10.to_string(), "10th Percentile");
    }
}
