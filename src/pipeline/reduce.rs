//! Best-plane reducer.

use crate::models::ScoredPlane;

/// Keep the highest-support candidate of `scored`.
///
/// Starts from the sentinel [`ScoredPlane::default`] and replaces it only on
/// strictly greater support, so among equal candidates the first to arrive
/// wins. If no candidate has positive support the sentinel is returned.
pub fn best_plane<I>(scored: I) -> ScoredPlane
where
    I: IntoIterator<Item = ScoredPlane>,
{
    let mut best = ScoredPlane::default();
    for candidate in scored {
        if candidate.support > best.support {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Plane;

    fn scored(tag: f64, support: usize) -> ScoredPlane {
        ScoredPlane::new(Plane::new(0.0, 0.0, 1.0, tag), support)
    }

    #[test]
    fn keeps_maximum_support() {
        let best = best_plane(vec![scored(1.0, 3), scored(2.0, 9), scored(3.0, 4)]);
        assert_eq!(best, scored(2.0, 9));
    }

    #[test]
    fn first_arrival_wins_ties() {
        let best = best_plane(vec![scored(1.0, 5), scored(2.0, 5), scored(3.0, 2)]);
        assert_eq!(best.plane.d, 1.0);
    }

    #[test]
    fn empty_or_unsupported_input_returns_sentinel() {
        assert_eq!(best_plane(Vec::new()), ScoredPlane::default());
        assert_eq!(best_plane(vec![scored(1.0, 0)]), ScoredPlane::default());
    }

    #[test]
    fn reads_from_a_channel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        tx.send(scored(1.0, 1)).unwrap();
        tx.send(scored(2.0, 7)).unwrap();
        drop(tx);
        assert_eq!(best_plane(rx).support, 7);
    }
}
