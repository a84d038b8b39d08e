use double_pendulum::{Arm, DoublePendulum, PendulumConfig};

#[test]
fn pendulum_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let config = PendulumConfig::new().with_masses(1.0, 3.0).with_lengths(0.8, 1.2);
        let mut pendulum = DoublePendulum::<f64>::with_config(2.7, -1.9, &config).unwrap();
        for _ in 0..5000 {
            pendulum.step(0.0025);
        }
        (pendulum.angular_state(), pendulum.position(Arm::Second))
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].0, r.0);
        assert_eq!(results[0].1, r.1);
    }
}

#[test]
fn independent_instances_do_not_interact() {
    let mut alone = DoublePendulum::<f64>::new(1.0, 2.0).unwrap();
    let mut a = alone.clone();
    let mut b = DoublePendulum::<f64>::new(-2.0, 0.3).unwrap();
    for _ in 0..1000 {
        alone.step(0.0025);
        a.step(0.0025);
        b.step(0.001);
    }
    assert_eq!(alone, a);
}

#[test]
fn f32_deterministic() {
    let mut first = None;
    for _ in 0..5 {
        let mut pendulum = DoublePendulum::<f32>::new(1.0, -0.5).unwrap();
        for _ in 0..2000 {
            pendulum.step(0.0025);
        }
        let tip = pendulum.position(Arm::Second);
        if let Some((x, y)) = first {
            assert_eq!(tip.x, x);
            assert_eq!(tip.y, y);
        } else {
            first = Some((tip.x, tip.y));
        }
    }
}
