use proptest::prelude::*;
use std::f64::consts::PI;

use tabula::agent::{Agent, QLearning, Sarsa};
use tabula::discretize::digitize;
use tabula::dynamics::{CartpoleDynamics, PendulumDynamics};
use tabula::table::QTable;

// Strategy for a well-formed bucket specification: lower < upper, bins >= 3.
fn bounds_strategy() -> impl Strategy<Value = (f64, f64, usize)> {
    (
        -1000.0f64..1000.0,
        1e-6f64..2000.0,
        3usize..=64,
    )
        .prop_map(|(lower, span, bins)| (lower, lower + span, bins))
}

proptest! {
    #[test]
    fn digitize_stays_in_range(
        (lower, upper, bins) in bounds_strategy(),
        value in -1e6f64..1e6,
    ) {
        let idx = digitize(lower, upper, bins, value);
        prop_assert!(idx < bins);
    }

    #[test]
    fn digitize_is_monotonic(
        (lower, upper, bins) in bounds_strategy(),
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(digitize(lower, upper, bins, lo) <= digitize(lower, upper, bins, hi));
    }

    #[test]
    fn digitize_lower_bound_hits_first_interior_bin(
        (lower, upper, bins) in bounds_strategy(),
    ) {
        prop_assert_eq!(digitize(lower, upper, bins, lower), 1);
    }

    #[test]
    fn cartpole_step_normalizes_angle(
        x in -5.0f64..5.0,
        theta in -20.0f64..20.0,
        xdot in -5.0f64..5.0,
        thetadot in -20.0f64..20.0,
        u in -10.0f64..10.0,
    ) {
        let dynamics = CartpoleDynamics {
            gravity: 9.8,
            cart_mass: 1.0,
            pole_mass: 0.1,
            pole_length: 0.5,
        };
        let next = dynamics.step(&[x, theta, xdot, thetadot], u, 0.02);
        prop_assert!(-PI < next[1] && next[1] <= PI);
    }

    #[test]
    fn pendulum_step_normalizes_angle(
        theta in -20.0f64..20.0,
        thetadot in -20.0f64..20.0,
        u in -10.0f64..10.0,
    ) {
        let dynamics = PendulumDynamics {
            gravity: 9.8,
            length: 1.0,
            mass: 1.0,
        };
        let next = dynamics.step(&[theta, thetadot], u, 0.02);
        prop_assert!(-PI < next[0] && next[0] <= PI);
    }

    #[test]
    fn fixed_agents_never_touch_the_table(
        s1 in 0usize..8,
        a1 in 0usize..3,
        r in -100.0f64..100.0,
        s2 in 0usize..8,
        a2 in 0usize..3,
        seed in any::<u64>(),
    ) {
        let mut q_agent = QLearning::seeded(0.7, 0.99, 0.5, seed);
        let mut sarsa_agent = Sarsa::seeded(0.7, 0.99, 0.5, seed);
        q_agent.fix();
        sarsa_agent.fix();

        let mut table = QTable::new(1.25, 8, 3);
        q_agent.learn(&mut table, s1, a1, r, s2, a2);
        sarsa_agent.learn(&mut table, s1, a1, r, s2, a2);

        for s in 0..8 {
            for a in 0..3 {
                prop_assert_eq!(table.get(s, a), 1.25);
            }
        }
    }
}
