//! Cumulative permission inheritance
//!
//! Ranks are folded in ascending level order. The running set starts empty and is
//! never reset: each rank adds its grants, removes its negations, and the result
//! becomes that rank's effective set as well as the input for the next rank up.
//! A low-level negation therefore hides a permission from every higher rank until
//! one of them grants it again.

use std::collections::HashSet;

/// Grants and negations declared on one rank
#[derive(Debug, Clone, Copy)]
pub struct PermissionLayer<'a> {
    pub granted: &'a [String],
    pub negated: &'a [String],
}

impl<'a> PermissionLayer<'a> {
    pub fn new(granted: &'a [String], negated: &'a [String]) -> Self {
        Self { granted, negated }
    }

    /// Apply this layer on top of the inherited set
    pub fn apply(&self, inherited: &HashSet<String>) -> HashSet<String> {
        let mut effective = inherited.clone();
        effective.extend(self.granted.iter().cloned());
        for negated in self.negated {
            effective.remove(negated);
        }
        effective
    }
}

/// Effective permission sets for layers given lowest level first.
///
/// The output has one entry per input layer, in the same order.
pub fn cumulative_permissions<'a, I>(layers: I) -> Vec<HashSet<String>>
where
    I: IntoIterator<Item = PermissionLayer<'a>>,
{
    layers
        .into_iter()
        .scan(HashSet::new(), |inherited, layer| {
            *inherited = layer.apply(inherited);
            Some(inherited.clone())
        })
        .collect()
}
