use super::Probe;

/// Removes every probe that intersects at least one other probe.
///
/// All-or-nothing: both members of an intersecting pair are dropped, so no
/// tie-break is needed. Touching endpoints count as intersecting. Survivors
/// keep their input order.
///
/// Runs a pairwise check over all probes, with a bounding-box pre-test inside
/// [`Segment::intersects`](crate::geometry::Segment::intersects).
#[must_use]
pub fn remove_conflicts(probes: &[Probe]) -> Vec<Probe> {
    let n = probes.len();
    let mut conflicted = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if probes[i].segment.intersects(&probes[j].segment) {
                conflicted[i] = true;
                conflicted[j] = true;
            }
        }
    }

    let survivors: Vec<Probe> = probes
        .iter()
        .zip(&conflicted)
        .filter(|&(_, c)| !*c)
        .map(|(p, _)| *p)
        .collect();

    tracing::debug!(
        candidates = n,
        conflicting = n - survivors.len(),
        "removed intersecting probes"
    );
    survivors
}
