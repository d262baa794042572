// Copyright 2025 the Raster Figure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for figures: classification tag and pixel scan policy.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseFigureKindError;

/// How a figure is driven. Carried as data only; intersection ignores it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FigureKind {
    /// Does not move.
    #[default]
    Fixed,
    /// Moved by the user.
    UserMoved,
    /// Moved by the program.
    ComputerMoved,
    /// A target to reach.
    Target,
}

impl FigureKind {
    /// The short tag used in figure descriptions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::UserMoved => "user",
            Self::ComputerMoved => "computer",
            Self::Target => "target",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FigureKind {
    type Err = ParseFigureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "user" => Ok(Self::UserMoved),
            "computer" => Ok(Self::ComputerMoved),
            "target" => Ok(Self::Target),
            _ => Err(ParseFigureKindError),
        }
    }
}

/// Which of a figure's points the pixel phase of
/// [`Figure::intersects_with`](crate::Figure::intersects_with) tests.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PixelScan {
    /// Walk from the minimum position and stop before the maximum one, so the point at the
    /// maximum position is never tested. A figure with a single point never intersects.
    ///
    /// This is the behavior of [`Figure::intersects`](crate::Figure::intersects).
    #[default]
    ExcludeMaximum,
    /// Test every point, the maximum included.
    Inclusive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in [
            FigureKind::Fixed,
            FigureKind::UserMoved,
            FigureKind::ComputerMoved,
            FigureKind::Target,
        ] {
            assert_eq!(kind.as_str().parse::<FigureKind>(), Ok(kind));
        }
        assert_eq!("moving".parse::<FigureKind>(), Err(ParseFigureKindError));
    }
}
