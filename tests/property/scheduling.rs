//! Debouncer behavior under arbitrary input timing.

use proptest::prelude::*;
use sitesearch::Debouncer;

proptest! {
    #[test]
    fn prop_only_last_of_burst_fires(
        delay in 1u64..500,
        gaps in prop::collection::vec(0u64..100, 1..20),
    ) {
        // every gap is shorter than the delay, so nothing is due until the burst ends
        prop_assume!(gaps.iter().all(|g| *g < delay));

        let mut debouncer = Debouncer::new(delay);
        let mut now = 0;
        let mut fired = Vec::new();
        for (i, gap) in gaps.iter().enumerate() {
            now += gap;
            fired.extend(debouncer.poll(now));
            debouncer.schedule(now, i);
        }
        fired.extend(debouncer.poll(now + delay));
        fired.extend(debouncer.poll(now + delay * 10));

        prop_assert_eq!(fired, vec![gaps.len() - 1]);
    }

    #[test]
    fn prop_superseded_ids_never_fire(delay in 0u64..500, later in 1u64..1000) {
        let mut debouncer = Debouncer::new(delay);
        let old = debouncer.schedule(0, "old");
        let new = debouncer.schedule(later, "new");
        prop_assert_eq!(debouncer.fire(old, later + delay), None);
        prop_assert_eq!(debouncer.fire(new, later + delay), Some("new"));
    }
}
