use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn configs() -> Vec<SpringConfig> {
    vec![
        SpringConfig::default(),
        SpringConfig::new(200.0, 100.0, 1.0).unwrap(),
        SpringConfig::new(12.0, 200.0, 0.5).unwrap(),
        SpringConfig::new(8.0, 300.0, 0.5).unwrap(),
        SpringConfig::new(20.0, 100.0, 1.0).unwrap(),
    ]
}

#[test]
fn not_started_is_zero() {
    for cfg in configs() {
        for f in [-1000.0, -1.0, -0.001, 0.0] {
            assert_eq!(spring(f, fps30(), &cfg), 0.0);
        }
        assert_eq!(spring(f64::NAN, fps30(), &cfg), 0.0);
    }
}

#[test]
fn continuous_in_elapsed_frames() {
    let eps = 1e-6;
    for cfg in configs() {
        let mut t = -2.0;
        while t < 60.0 {
            let a = spring(t, fps30(), &cfg);
            let b = spring(t + eps, fps30(), &cfg);
            assert!((a - b).abs() < 1e-3, "jump at {t} for {cfg:?}: {a} vs {b}");
            t += 0.25;
        }
    }
}

#[test]
fn converges_and_stays_settled() {
    for cfg in configs() {
        for f in [600.0, 900.0, 1800.0, 10_000.0] {
            let v = spring(f, fps30(), &cfg);
            assert!((v - 1.0).abs() < 1e-4, "{cfg:?} at {f}: {v}");
        }
    }
}

#[test]
fn heavy_damping_settles_within_a_second() {
    let cfg = SpringConfig::new(200.0, 100.0, 1.0).unwrap();
    assert!(cfg.damping_ratio() > 1.0);
    let v = spring(30.0, fps30(), &cfg);
    assert!(v > 0.999 && v <= 1.0, "{v}");
}

#[test]
fn underdamped_overshoots_unless_clamped() {
    let cfg = SpringConfig::default();
    assert!(cfg.damping_ratio() < 1.0);
    let peak = (0..60)
        .map(|f| spring(f64::from(f), fps30(), &cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "{peak}");

    let clamped = cfg.with_overshoot_clamping(true);
    for f in 0..120 {
        assert!(spring(f64::from(f), fps30(), &clamped) <= 1.0);
    }
}

#[test]
fn undamped_spring_is_finite_and_bounded() {
    let cfg = SpringConfig::new(0.0, 100.0, 1.0).unwrap();
    for f in 0..2000 {
        let v = spring(f64::from(f), fps30(), &cfg);
        assert!(v.is_finite());
        assert!((-1e-9..=2.0 + 1e-9).contains(&v), "{v}");
    }
}

#[test]
fn degenerate_configs_are_rejected() {
    assert!(SpringConfig::new(10.0, 0.0, 1.0).is_err());
    assert!(SpringConfig::new(10.0, 100.0, 0.0).is_err());
    assert!(SpringConfig::new(10.0, -5.0, 1.0).is_err());
    assert!(SpringConfig::new(-1.0, 100.0, 1.0).is_err());
    assert!(SpringConfig::new(f64::NAN, 100.0, 1.0).is_err());
    assert!(SpringConfig::new(10.0, f64::INFINITY, 1.0).is_err());
    let err = SpringConfig::new(10.0, 100.0, 0.0).unwrap_err();
    assert!(err.to_string().contains("mass"));
}

#[test]
fn measure_spring_reports_settle_frame() {
    let cfg = SpringConfig::default();
    let settled = measure_spring(fps30(), &cfg, 0.005).unwrap();
    assert!(settled > 0);
    for f in settled..settled + 60 {
        let v = spring(f as f64, fps30(), &cfg);
        assert!((v - 1.0).abs() < 0.005, "frame {f}: {v}");
    }

    let undamped = SpringConfig::new(0.0, 100.0, 1.0).unwrap();
    assert!(measure_spring(fps30(), &undamped, 0.005).is_err());
    assert!(measure_spring(fps30(), &cfg, 0.0).is_err());
}

#[test]
fn spring_builder_maps_delays_and_ranges() {
    let cfg = SpringConfig::new(200.0, 100.0, 1.0).unwrap();
    let s = Spring::new(cfg).from_to(700.0, 80.0).delay(10.0);
    assert_eq!(s.sample(0.0, fps30()), 700.0);
    assert_eq!(s.sample(10.0, fps30()), 700.0);
    assert!(s.sample(20.0, fps30()) < 700.0);
    assert!((s.sample(200.0, fps30()) - 80.0).abs() < 0.01);
}

#[test]
fn stretched_spring_settles_at_requested_length() {
    let cfg = SpringConfig::default();
    let s = Spring::new(cfg).stretch_to(fps30(), 90.0).unwrap();
    let v = s.sample(90.0, fps30());
    assert!((v - 1.0).abs() < 0.01, "{v}");
    assert!(Spring::new(cfg).stretch_to(fps30(), 0.0).is_err());
}
