//! Benefit Tags
//!
//! Short display-only tag strings attached to each product ("Low Sodium",
//! "No MSG", ...). Unlike a tag algebra these keep their authored order, so
//! the list de-duplicates on insert but never sorts.

use smallvec::SmallVec;

/// An ordered, de-duplicated list of benefit tags backed by `SmallVec<[String; 5]>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenefitList {
    benefits: SmallVec<[String; 5]>,
}

impl BenefitList {
    /// Create a benefit list, dropping duplicates while keeping first-seen order.
    #[must_use]
    pub fn new(benefits: SmallVec<[String; 5]>) -> Self {
        let mut list = Self::empty();

        for benefit in benefits {
            list.push(&benefit);
        }

        list
    }

    /// Create an empty benefit list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            benefits: SmallVec::with_capacity(0),
        }
    }

    /// Create a benefit list from string slices.
    pub fn from_strs(benefits: &[&str]) -> Self {
        let mut list = Self::empty();

        for benefit in benefits {
            list.push(benefit);
        }

        list
    }

    /// Append a benefit unless it is already present.
    pub fn push(&mut self, benefit: &str) {
        if !self.contains(benefit) {
            self.benefits.push(benefit.to_string());
        }
    }

    /// Whether the list contains the given benefit.
    #[must_use]
    pub fn contains(&self, benefit: &str) -> bool {
        self.benefits.iter().any(|b| b == benefit)
    }

    /// Iterate over the benefits in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.benefits.iter().map(String::as_str)
    }

    /// Number of benefits in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.benefits.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.benefits.is_empty()
    }
}
