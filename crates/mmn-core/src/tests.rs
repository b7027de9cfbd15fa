//! Unit tests for mmn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, ServerId};

    #[test]
    fn index_roundtrip() {
        let id = ServerId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ServerId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn customer_ids_follow_arrival_order() {
        let first = CustomerId(0);
        let second = first.next();
        assert_eq!(second, CustomerId(1));
        assert!(first < second);
    }

    #[test]
    fn display() {
        assert_eq!(CustomerId(7).to_string(), "CustomerId(7)");
        assert_eq!(ServerId(2).to_string(), "ServerId(2)");
    }
}

#[cfg(test)]
mod time {
    use crate::{MmnError, QueueConfig, SimClock, Tick};

    fn config() -> QueueConfig {
        QueueConfig {
            arrival_probability: 0.9,
            mean_service_time:   0.5,
            server_count:        1,
            max_ticks:           5,
            seed:                42,
        }
    }

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn tick_offset_saturates() {
        assert_eq!(Tick(u64::MAX - 1).offset(10), Tick(u64::MAX));
    }

    #[test]
    fn clock_stops_at_end_tick() {
        let mut clock = SimClock::new(2);
        assert!(!clock.is_finished());
        clock.advance();
        clock.advance();
        assert!(clock.is_finished());
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2), "advance past end is a no-op");
        assert_eq!(clock.elapsed(), 2);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn zero_tick_clock_starts_finished() {
        assert!(SimClock::new(0).is_finished());
    }

    #[test]
    fn valid_config_passes() {
        config().validate().unwrap();
        assert_eq!(config().end_tick(), Tick(5));
        assert_eq!(config().make_clock(), SimClock::new(5));
    }

    #[test]
    fn zero_arrival_probability_is_valid() {
        let cfg = QueueConfig { arrival_probability: 0.0, ..config() };
        cfg.validate().unwrap();
    }

    #[test]
    fn arrival_probability_out_of_range_rejected() {
        for p in [-0.1, 1.5, f64::NAN] {
            let cfg = QueueConfig { arrival_probability: p, ..config() };
            match cfg.validate() {
                Err(MmnError::InvalidParameter { name, .. }) => assert_eq!(name, "arrival_probability"),
                other => panic!("expected arrival_probability rejection for {p}, got {other:?}"),
            }
        }
    }

    #[test]
    fn non_positive_mean_service_time_rejected() {
        for mean in [0.0, -1.0, f64::INFINITY] {
            let cfg = QueueConfig { mean_service_time: mean, ..config() };
            let err = cfg.validate().unwrap_err();
            assert!(err.to_string().contains("mean_service_time"), "got {err}");
        }
    }

    #[test]
    fn zero_servers_rejected() {
        let cfg = QueueConfig { server_count: 0, ..config() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn offered_load() {
        let cfg = QueueConfig {
            arrival_probability: 1.0,
            mean_service_time:   0.67,
            server_count:        3,
            ..config()
        };
        assert!((cfg.offered_load() - 0.67 / 3.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use crate::{ServiceTimeDist, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_differ_by_offset() {
        let mut root1 = SimRng::new(1);
        let mut root2 = SimRng::new(1);
        let a: u64 = root1.child(0).random();
        let b: u64 = root2.child(1).random();
        assert_ne!(a, b, "children with different offsets should diverge");
    }

    #[test]
    fn bernoulli_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(!rng.bernoulli(0.0));
            assert!(rng.bernoulli(1.0));
        }
    }

    #[test]
    fn service_dist_rejects_bad_mean() {
        assert!(ServiceTimeDist::new(0.0).is_err());
        assert!(ServiceTimeDist::new(-2.0).is_err());
        assert!(ServiceTimeDist::new(f64::NAN).is_err());
    }

    #[test]
    fn tiny_mean_rounds_to_zero_ticks() {
        let dist = ServiceTimeDist::new(1e-9).unwrap();
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            assert_eq!(dist.sample_ticks(&mut rng), 0);
        }
    }

    #[test]
    fn sample_mean_close_to_configured_mean() {
        let dist = ServiceTimeDist::new(4.0).unwrap();
        let mut rng = SimRng::new(99);
        let n = 50_000;
        let total: f64 = (0..n).map(|_| dist.sample(&mut rng)).sum();
        let mean = total / n as f64;
        assert!((mean - 4.0).abs() < 0.15, "sample mean {mean}");
    }
}
