//! Unit tests for ck-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CounterId, CustomerId};

    #[test]
    fn counter_index_roundtrip() {
        assert_eq!(CounterId(1).index(), 0);
        assert_eq!(CounterId(4).index(), 3);
        assert_eq!(CounterId::from_index(3), CounterId(4));
    }

    #[test]
    fn express_lane_is_counter_one() {
        assert_eq!(CounterId::EXPRESS, CounterId(1));
        assert!(CounterId(1).is_express());
        assert!(!CounterId(2).is_express());
    }

    #[test]
    fn ordering() {
        assert!(CustomerId(1) < CustomerId(2));
        assert!(CounterId(3) > CounterId(2));
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(7).to_string(), "Customer 7");
        assert_eq!(CounterId(2).to_string(), "Counter 2");
    }
}

#[cfg(test)]
mod customer {
    use std::collections::HashSet;
    use std::thread;

    use crate::{Customer, CustomerClass, CustomerId, IdAllocator, SimSeconds};

    #[test]
    fn processing_time_is_two_seconds_per_item() {
        let c = Customer::new(CustomerId(1), CustomerClass::Regular, SimSeconds(5), 3);
        assert_eq!(c.processing_time(), SimSeconds(6));
        assert_eq!(c.items(), 3);
        assert_eq!(c.arrival_time(), SimSeconds(5));
        assert_eq!(c.id(), CustomerId(1));
        assert_eq!(c.class(), CustomerClass::Regular);
    }

    #[test]
    fn class_display_matches_event_wording() {
        assert_eq!(CustomerClass::Regular.to_string(), "Regular");
        assert_eq!(CustomerClass::Express.to_string(), "Express");
        assert!(CustomerClass::Express.is_express());
        assert!(!CustomerClass::Regular.is_express());
    }

    #[test]
    fn allocator_starts_at_one_and_increments() {
        let ids = IdAllocator::new();
        assert_eq!(ids.next(), CustomerId(1));
        assert_eq!(ids.next(), CustomerId(2));
        assert_eq!(ids.next(), CustomerId(3));
    }

    #[test]
    fn separate_allocators_do_not_share_id_space() {
        let a = IdAllocator::new();
        let b = IdAllocator::new();
        a.next();
        a.next();
        assert_eq!(b.next(), CustomerId(1));
    }

    #[test]
    fn concurrent_allocation_yields_unique_ids() {
        const PER_THREAD: usize = 500;

        let ids = IdAllocator::new();
        let mut all: Vec<CustomerId> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..PER_THREAD).map(|_| ids.next()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(unique.len(), 4 * PER_THREAD, "duplicate ids allocated");

        all.sort();
        assert_eq!(all.first(), Some(&CustomerId(1)));
        assert_eq!(all.last(), Some(&CustomerId(4 * PER_THREAD as u32)));
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{Pacing, SimSeconds};

    #[test]
    fn arithmetic() {
        assert_eq!(SimSeconds(2) + SimSeconds(3), SimSeconds(5));
        assert_eq!(SimSeconds(2) * 4, SimSeconds(8));

        let mut total = SimSeconds::ZERO;
        total += SimSeconds(6);
        assert_eq!(total.as_secs(), 6);
    }

    #[test]
    fn wall_mapping_per_pacing() {
        let d = SimSeconds(3);
        assert_eq!(Pacing::RealTime.wall(d), Duration::from_secs(3));
        assert_eq!(
            Pacing::Scaled { millis_per_sim_sec: 10 }.wall(d),
            Duration::from_millis(30)
        );
        assert_eq!(Pacing::Instant.wall(d), Duration::ZERO);
    }

    #[test]
    fn poll_interval_never_zero() {
        assert_eq!(Pacing::RealTime.poll_interval(), Duration::from_millis(100));
        assert_eq!(
            Pacing::Scaled { millis_per_sim_sec: 10 }.poll_interval(),
            Duration::from_millis(1)
        );
        assert!(!Pacing::Instant.poll_interval().is_zero());
        assert!(!Pacing::Scaled { millis_per_sim_sec: 1 }.poll_interval().is_zero());
    }

    #[test]
    fn instant_pause_returns_immediately() {
        let t0 = std::time::Instant::now();
        Pacing::Instant.pause(SimSeconds(1_000_000));
        assert!(t0.elapsed() < Duration::from_millis(50));
    }
}
