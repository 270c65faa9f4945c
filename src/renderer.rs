use crate::error::TrackError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Which renderer variant a track should be drawn with. Resolving a kind to
/// a renderer instance is up to the rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    BarChart,
    Points,
    Line,
    Heatmap,
    Scatterplot,
    Feature,
}

impl RendererKind {
    pub const ALL: [RendererKind; 6] = [
        RendererKind::BarChart,
        RendererKind::Points,
        RendererKind::Line,
        RendererKind::Heatmap,
        RendererKind::Scatterplot,
        RendererKind::Feature,
    ];

    /// `graphType` spelling as used on track lines
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::BarChart => "bar",
            RendererKind::Points => "points",
            RendererKind::Line => "line",
            RendererKind::Heatmap => "heatmap",
            RendererKind::Scatterplot => "scatter",
            RendererKind::Feature => "feature",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererKind {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match Self::ALL.iter().find(|kind| kind.as_str() == name) {
            Some(kind) => Ok(*kind),
            None => {
                log::debug!("Rejecting renderer '{s}'");
                Err(TrackError::UnknownRenderer(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_types() {
        for kind in RendererKind::ALL {
            assert_eq!(kind.as_str().parse::<RendererKind>(), Ok(kind));
        }
        assert_eq!("Bar".parse::<RendererKind>(), Ok(RendererKind::BarChart));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "wiggle".parse::<RendererKind>(),
            Err(TrackError::UnknownRenderer("wiggle".to_string()))
        );
    }
}
