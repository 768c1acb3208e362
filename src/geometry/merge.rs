use std::collections::{HashMap, HashSet};

use crate::math::{Point2, PointKey};

use super::Segment;

/// Merges segments into maximal chains.
///
/// Exact duplicates (in either direction) are dropped first, keeping the
/// earliest occurrence. Chains are then grown from each unused segment, in
/// input order, through every node where exactly two segment ends meet. A
/// chain keeps the direction of the segment it was grown from; joined
/// segments are reversed as needed. A run of degree-2 nodes that closes on
/// itself becomes a ring.
#[must_use]
pub fn merge_lines(segments: &[Segment]) -> Vec<Segment> {
    let unique = dedup(segments);
    if unique.is_empty() {
        return Vec::new();
    }

    // Node → indices of segments ending there. A ring lists itself twice.
    let mut incident: HashMap<PointKey, Vec<usize>> = HashMap::new();
    for (i, seg) in unique.iter().enumerate() {
        let (s, e) = seg.endpoint_keys();
        incident.entry(s).or_default().push(i);
        incident.entry(e).or_default().push(i);
    }

    let mut used = vec![false; unique.len()];
    let mut chains = Vec::new();

    for seed in 0..unique.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;

        // Grow forward from the seed's end.
        let mut forward: Vec<Point2> = unique[seed].points().to_vec();
        let mut tail = PointKey::new(unique[seed].end());
        while let Some(next) = next_unused(&incident, tail, &used) {
            used[next] = true;
            let oriented = oriented_from(unique[next], tail);
            forward.extend_from_slice(&oriented[1..]);
            tail = PointKey::new(&oriented[oriented.len() - 1]);
        }

        // Grow backward from the seed's start; points collected outward.
        let mut backward: Vec<Point2> = Vec::new();
        let mut head = PointKey::new(unique[seed].start());
        while let Some(next) = next_unused(&incident, head, &used) {
            used[next] = true;
            let oriented = oriented_from(unique[next], head);
            backward.extend_from_slice(&oriented[1..]);
            head = PointKey::new(&oriented[oriented.len() - 1]);
        }

        if backward.is_empty() {
            chains.push(Segment::from_valid_points(forward));
        } else {
            backward.reverse();
            backward.extend(forward);
            chains.push(Segment::from_valid_points(backward));
        }
    }

    chains
}

/// Keeps the first occurrence of every vertex sequence, direction ignored.
fn dedup(segments: &[Segment]) -> Vec<&Segment> {
    let mut seen: HashSet<Vec<PointKey>> = HashSet::with_capacity(segments.len());
    segments
        .iter()
        .filter(|seg| seen.insert(canonical_key(seg)))
        .collect()
}

fn canonical_key(seg: &Segment) -> Vec<PointKey> {
    let forward: Vec<PointKey> = seg.points().iter().map(PointKey::new).collect();
    let backward: Vec<PointKey> = forward.iter().rev().copied().collect();
    forward.min(backward)
}

/// Returns the single unused segment continuing through `node`, if `node`
/// joins exactly two segment ends.
fn next_unused(
    incident: &HashMap<PointKey, Vec<usize>>,
    node: PointKey,
    used: &[bool],
) -> Option<usize> {
    match incident.get(&node) {
        Some(ends) if ends.len() == 2 => ends.iter().copied().find(|&i| !used[i]),
        _ => None,
    }
}

/// Returns the vertices of `seg` ordered so that they start at `node`.
fn oriented_from(seg: &Segment, node: PointKey) -> Vec<Point2> {
    let mut points = seg.points().to_vec();
    if PointKey::new(seg.start()) != node {
        points.reverse();
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn seg(coords: &[(f64, f64)]) -> Segment {
        Segment::from_coords(coords).unwrap()
    }

    fn coords(s: &Segment) -> Vec<(f64, f64)> {
        s.points().iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn empty_input() {
        assert!(merge_lines(&[]).is_empty());
    }

    #[test]
    fn joins_two_at_corner() {
        let merged = merge_lines(&[
            seg(&[(0.0, 0.0), (0.0, 100.0)]),
            seg(&[(0.0, 100.0), (100.0, 100.0)]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(
            coords(&merged[0]),
            vec![(0.0, 0.0), (0.0, 100.0), (100.0, 100.0)]
        );
    }

    #[test]
    fn reverses_opposed_neighbours() {
        // Middle piece points the wrong way; the seed direction wins.
        let merged = merge_lines(&[
            seg(&[(0.0, 0.0), (1.0, 0.0)]),
            seg(&[(2.0, 0.0), (1.0, 0.0)]),
            seg(&[(2.0, 0.0), (3.0, 0.0)]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(
            coords(&merged[0]),
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]
        );
    }

    #[test]
    fn grows_backward_from_seed() {
        let merged = merge_lines(&[
            seg(&[(1.0, 0.0), (2.0, 0.0)]),
            seg(&[(0.0, 0.0), (1.0, 0.0)]),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(coords(&merged[0]), vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    }

    #[test]
    fn stops_at_junction() {
        let merged = merge_lines(&[
            seg(&[(0.0, 0.0), (0.0, 100.0)]),
            seg(&[(0.0, 100.0), (100.0, 100.0)]),
            seg(&[(0.0, 100.0), (0.0, 150.0)]),
        ]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn closed_cycle_becomes_ring() {
        let merged = merge_lines(&[
            seg(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            seg(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]),
        ]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_ring());
        assert_relative_eq!(merged[0].length(), 40.0);
    }

    #[test]
    fn duplicates_are_dropped() {
        let a = seg(&[(0.0, 0.0), (5.0, 5.0)]);
        let merged = merge_lines(&[a.clone(), a.reversed(), a.clone()]);
        assert_eq!(merged, vec![a]);
    }

    #[test]
    fn existing_ring_passes_through() {
        let ring = seg(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]);
        let merged = merge_lines(std::slice::from_ref(&ring));
        assert_eq!(merged, vec![ring]);
    }

    #[test]
    fn merge_is_stable_on_its_output() {
        let input = [
            seg(&[(0.0, 0.0), (0.0, 100.0)]),
            seg(&[(0.0, 100.0), (100.0, 100.0)]),
            seg(&[(100.0, 100.0), (100.0, 200.0)]),
            seg(&[(100.0, 100.0), (200.0, 100.0)]),
        ];
        let once = merge_lines(&input);
        let twice = merge_lines(&once);
        assert_eq!(once, twice);
    }
}
