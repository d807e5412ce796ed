use crate::systems::body::{Body, ContactOutcome};

/// Per-frame collision counters, always recorded.
///
/// Counters are `u64`: the pair count alone passes `u32::MAX` near 92,700 bodies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Unordered pairs examined (n * (n - 1) / 2)
    pub pairs_tested: u64,
    /// Pairs that overlapped and were handed to `resolve_collision`
    pub contacts: u64,
    /// Contacts that received an impulse
    pub resolved: u64,
    /// Contacts already moving apart
    pub separating: u64,
    /// Contacts skipped because the centers coincide
    pub coincident: u64,
}

/// Collision phase: test every unordered pair once and resolve overlaps.
///
/// Only velocities change here. The inner loop starts at `i + 1`, so a pair
/// `(i, j)` is seen exactly once per call and never as `(j, i)`.
pub(super) fn resolve_collisions(bodies: &mut [Body], dt: f32) -> StepSummary {
    let n = bodies.len();
    let mut summary = StepSummary {
        pairs_tested: pair_count(n),
        ..StepSummary::default()
    };

    for i in 0..n {
        // head[i] is body i, tail holds every j > i
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];

        for b in tail.iter_mut() {
            if !a.detect_collision(b) {
                continue;
            }

            summary.contacts += 1;
            match a.resolve_collision(b, dt) {
                ContactOutcome::Resolved => summary.resolved += 1,
                ContactOutcome::Separating => summary.separating += 1,
                ContactOutcome::Coincident => summary.coincident += 1,
            }
        }
    }

    summary
}

/// Unordered pairs among `n` bodies
fn pair_count(n: usize) -> u64 {
    let n = n as u64;
    n * n.saturating_sub(1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_count_fits_past_u32() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(10), 45);
        // 92,683 bodies is the first count whose pairs overflow u32
        assert!(pair_count(92_682) <= u32::MAX as u64);
        assert!(pair_count(92_683) > u32::MAX as u64);
        assert_eq!(pair_count(100_000), 4_999_950_000);
    }

    #[test]
    fn summary_reports_pairs_without_contacts() {
        let mut bodies: Vec<Body> = (0..5)
            .map(|i| Body::new(0.1 + 0.2 * i as f32, 0.5, 0.0, 0.0, 0.01))
            .collect();
        let summary = resolve_collisions(&mut bodies, 0.1);
        assert_eq!(summary.pairs_tested, 10);
        assert_eq!(summary.contacts, 0);
    }
}
