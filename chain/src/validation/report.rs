//! Failure dimensions and the independent-flags report.
//!
//! The set of dimensions is closed: adding one means adding an enum variant,
//! a flag bit, and an entry in [`FailureDimension::ALL`].

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One independently tracked category of chain-integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FailureDimension {
    /// Block 0 does not point at the null digest.
    CorruptedGenesis,
    /// Some block's previous digest differs from its predecessor's digest.
    CorruptedLink,
}

impl FailureDimension {
    /// Every dimension, in reporting order.
    pub const ALL: [FailureDimension; 2] = [
        FailureDimension::CorruptedGenesis,
        FailureDimension::CorruptedLink,
    ];

    /// Number of dimensions.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable name, as used in reports and serde output.
    pub fn name(self) -> &'static str {
        match self {
            FailureDimension::CorruptedGenesis => "CorruptedGenesis",
            FailureDimension::CorruptedLink => "CorruptedLink",
        }
    }

    fn flag(self) -> FailureFlags {
        match self {
            FailureDimension::CorruptedGenesis => FailureFlags::CORRUPTED_GENESIS,
            FailureDimension::CorruptedLink => FailureFlags::CORRUPTED_LINK,
        }
    }
}

impl fmt::Display for FailureDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    struct FailureFlags: u8 {
        const CORRUPTED_GENESIS = 1 << 0;
        const CORRUPTED_LINK = 1 << 1;
    }
}

/// Result of a validation pass: one boolean per [`FailureDimension`].
///
/// Flags are independent. An empty report means every check passed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FailureReport {
    flags: FailureFlags,
}

impl FailureReport {
    /// A report with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise `dimension`. Raising an already raised flag is a no-op.
    pub fn set(&mut self, dimension: FailureDimension) {
        self.flags.insert(dimension.flag());
    }

    /// Builder-style [`FailureReport::set`].
    pub fn with(mut self, dimension: FailureDimension) -> Self {
        self.set(dimension);
        self
    }

    /// Whether `dimension` is raised.
    pub fn contains(&self, dimension: FailureDimension) -> bool {
        self.flags.contains(dimension.flag())
    }

    /// Whether no dimension is raised.
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }

    /// Number of raised dimensions.
    pub fn len(&self) -> usize {
        self.flags.bits().count_ones() as usize
    }

    /// Same as [`FailureReport::is_clean`].
    pub fn is_empty(&self) -> bool {
        self.is_clean()
    }

    /// Raised dimensions in [`FailureDimension::ALL`] order.
    pub fn dimensions(&self) -> impl Iterator<Item = FailureDimension> + '_ {
        FailureDimension::ALL
            .into_iter()
            .filter(move |d| self.contains(*d))
    }

    /// Raw bit pattern, bit `n` for the `n`th entry of [`FailureDimension::ALL`].
    pub fn bits(&self) -> u8 {
        self.flags.bits()
    }
}

impl FromIterator<FailureDimension> for FailureReport {
    fn from_iter<I: IntoIterator<Item = FailureDimension>>(iter: I) -> Self {
        let mut report = FailureReport::new();
        for d in iter {
            report.set(d);
        }
        report
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, d) in self.dimensions().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(d.name())?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FailureReport{}", self)
    }
}

impl Serialize for FailureReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.dimensions())
    }
}

impl<'de> Deserialize<'de> for FailureReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dims = Vec::<FailureDimension>::deserialize(deserializer)?;
        Ok(dims.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_is_clean() {
        let report = FailureReport::new();
        assert!(report.is_clean());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "{}");
    }

    #[test]
    fn flags_are_independent() {
        let mut report = FailureReport::new();
        report.set(FailureDimension::CorruptedLink);
        assert!(report.contains(FailureDimension::CorruptedLink));
        assert!(!report.contains(FailureDimension::CorruptedGenesis));

        report.set(FailureDimension::CorruptedLink);
        assert_eq!(report.len(), 1);

        report.set(FailureDimension::CorruptedGenesis);
        assert_eq!(report.len(), 2);
        assert_eq!(report.to_string(), "{CorruptedGenesis, CorruptedLink}");
    }

    #[test]
    fn bit_positions_follow_all_order() {
        for (i, d) in FailureDimension::ALL.into_iter().enumerate() {
            assert_eq!(FailureReport::new().with(d).bits(), 1 << i);
        }
        assert_eq!(FailureDimension::COUNT, 2);
    }

    #[test]
    fn collects_from_dimensions() {
        let report: FailureReport = [FailureDimension::CorruptedGenesis].into_iter().collect();
        assert_eq!(
            report.dimensions().collect::<Vec<_>>(),
            vec![FailureDimension::CorruptedGenesis]
        );
    }

    #[test]
    fn serde_uses_dimension_names() {
        let report = FailureReport::new()
            .with(FailureDimension::CorruptedLink)
            .with(FailureDimension::CorruptedGenesis);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"["CorruptedGenesis","CorruptedLink"]"#);
        let back: FailureReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
