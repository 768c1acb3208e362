use std::collections::BTreeSet;

use crate::error::Result;

use super::Segment;

/// An ordered collection of segments.
///
/// Duplicates are allowed. Filtering never edits a network in place: every
/// operation returns a new one, and removal is keyed by segment index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    segments: Vec<Segment>,
}

impl Network {
    /// Creates a network from its segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Creates an empty network.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a network from one `(x, y)` list per segment.
    ///
    /// # Errors
    ///
    /// Returns an error if any list does not form a valid [`Segment`].
    pub fn from_coords(lines: &[&[(f64, f64)]]) -> Result<Self> {
        lines
            .iter()
            .map(|coords| Segment::from_coords(coords))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the network has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Sum of all segment lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(Segment::length).sum()
    }

    /// Returns a new network without the segments whose index is in `removed`.
    ///
    /// Order of the remaining segments is preserved. Indices past the end are
    /// ignored.
    #[must_use]
    pub fn retain_except(&self, removed: &BTreeSet<usize>) -> Self {
        self.segments
            .iter()
            .enumerate()
            .filter(|(i, _)| !removed.contains(i))
            .map(|(_, s)| s.clone())
            .collect()
    }
}

impl FromIterator<Segment> for Network {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Network {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for Network {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn three_lines() -> Network {
        Network::from_coords(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(1.0, 0.0), (3.0, 0.0)],
            &[(3.0, 0.0), (6.0, 0.0)],
        ])
        .unwrap()
    }

    #[test]
    fn retain_except_keeps_order() {
        let net = three_lines();
        let kept = net.retain_except(&BTreeSet::from([1]));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.segments()[0], net.segments()[0]);
        assert_eq!(kept.segments()[1], net.segments()[2]);
        // Source is untouched.
        assert_eq!(net.len(), 3);
    }

    #[test]
    fn retain_except_ignores_out_of_range() {
        let net = three_lines();
        assert_eq!(net.retain_except(&BTreeSet::from([7])), net);
    }

    #[test]
    fn total_length() {
        assert_relative_eq!(three_lines().total_length(), 6.0);
        assert_relative_eq!(Network::empty().total_length(), 0.0);
    }

    #[test]
    fn from_coords_propagates_errors() {
        assert!(Network::from_coords(&[&[(0.0, 0.0), (1.0, 0.0)], &[(2.0, 2.0)]]).is_err());
    }
}
