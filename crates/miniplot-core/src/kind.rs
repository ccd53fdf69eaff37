// File: crates/miniplot-core/src/kind.rs
// Summary: The closed set of chart kinds and their boundary names.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Histogram,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Histogram,
        ChartKind::Area,
    ];

    /// Capitalized name used in caller-facing status text ("Bar").
    pub const fn display_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
            ChartKind::Histogram => "Histogram",
            ChartKind::Area => "Area",
        }
    }

    /// Lowercase name used in file names and log fields ("bar").
    pub const fn slug(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::Area => "area",
        }
    }

    /// Name of the scalar SQL function the host registers for this kind.
    pub const fn sql_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart",
            ChartKind::Line => "line_chart",
            ChartKind::Scatter => "scatter_chart",
            ChartKind::Histogram => "histogram_chart",
            ChartKind::Area => "area_chart",
        }
    }

    /// Accepts either the slug or the SQL function name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| name.eq_ignore_ascii_case(k.slug()) || name.eq_ignore_ascii_case(k.sql_name()))
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Small bitset of chart kinds; used for backend capability checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct KindSet(u8);

impl KindSet {
    pub const fn empty() -> Self { Self(0) }

    pub const fn all() -> Self {
        Self(0b1_1111)
    }

    pub const fn with(self, kind: ChartKind) -> Self { Self(self.0 | kind.bit()) }

    pub const fn without(self, kind: ChartKind) -> Self { Self(self.0 & !kind.bit()) }

    pub const fn contains(&self, kind: ChartKind) -> bool { self.0 & kind.bit() != 0 }

    pub fn is_empty(&self) -> bool { self.0 == 0 }
}

impl FromIterator<ChartKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = ChartKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), KindSet::with)
    }
}
