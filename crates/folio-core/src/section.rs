//! Sections and the active-section rule

use std::fmt;

/// Stable identifier of a content section (its element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse an in-page href such as `#projects`.
    ///
    /// Returns `None` for a bare `#` or a non-fragment href.
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `#id` form written to the URL.
    pub fn fragment(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A section measured against the current scroll root.
///
/// Offsets go stale on reflow; measure again rather than keeping these.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub offset: f64,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, offset: f64) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }
}

/// Index of the last section that starts at or before `position`.
///
/// Falls back to 0 when the position is above every section (e.g. a hero
/// area). Sections sharing an offset resolve to the later one.
pub fn active_index(position: f64, sections: &[Section]) -> usize {
    sections
        .iter()
        .enumerate()
        .fold(0, |current, (i, section)| {
            if position >= section.offset {
                i
            } else {
                current
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sections(offsets: &[f64]) -> Vec<Section> {
        offsets
            .iter()
            .enumerate()
            .map(|(i, off)| Section::new(format!("s{}", i).as_str(), *off))
            .collect()
    }

    #[test]
    fn test_from_href() {
        assert_eq!(SectionId::from_href("#about"), Some(SectionId::new("about")));
        assert_eq!(SectionId::from_href("#"), None);
        assert_eq!(SectionId::from_href("https://example.com/#x"), None);
        assert_eq!(SectionId::new("about").fragment(), "#about");
    }

    #[test]
    fn test_active_index_three_sections() {
        let s = sections(&[0.0, 800.0, 1600.0]);
        assert_eq!(active_index(900.0, &s), 1);
        assert_eq!(active_index(50.0, &s), 0);
        assert_eq!(active_index(800.0, &s), 1);
        assert_eq!(active_index(5000.0, &s), 2);
    }

    #[test]
    fn test_above_first_section_defaults_to_zero() {
        let s = sections(&[300.0, 900.0]);
        assert_eq!(active_index(120.0, &s), 0);
    }

    #[test]
    fn test_empty_sections() {
        assert_eq!(active_index(400.0, &[]), 0);
    }

    #[test]
    fn test_duplicate_offsets_later_section_wins() {
        let s = sections(&[0.0, 500.0, 500.0, 1200.0]);
        assert_eq!(active_index(600.0, &s), 2);
    }

    proptest! {
        #[test]
        fn active_index_is_valid(
            mut offsets in prop::collection::vec(0.0f64..10_000.0, 1..12),
            pos in -500.0f64..12_000.0,
        ) {
            offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let s = sections(&offsets);
            prop_assert!(active_index(pos, &s) < s.len());
        }

        #[test]
        fn active_index_is_monotonic(
            mut offsets in prop::collection::vec(0.0f64..10_000.0, 1..12),
            a in -500.0f64..12_000.0,
            b in -500.0f64..12_000.0,
        ) {
            offsets.sort_by(|x, y| x.partial_cmp(y).unwrap());
            let s = sections(&offsets);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(active_index(lo, &s) <= active_index(hi, &s));
        }
    }
}
