//! Property-based tests for the landing page particle field.
//!
//! Whatever the seed, viewport and number of ticks, every particle stays
//! inside the viewport and keeps its size, speed, heading and opacity.

use darkmin::services::particle_field::ParticleField;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn particles_stay_inside_viewport(
        seed in any::<u64>(),
        count in 0usize..80,
        width in 1.0f64..1600.0,
        height in 1.0f64..1200.0,
        ticks in 0usize..2000,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(count, width, height, &mut rng);
        let before = field.particles().to_vec();

        for _ in 0..ticks {
            field.tick();
        }

        prop_assert_eq!(field.len(), count);
        for (p, original) in field.particles().iter().zip(&before) {
            prop_assert!(p.x >= 0.0 && p.x <= width, "x={} width={}", p.x, width);
            prop_assert!(p.y >= 0.0 && p.y <= height, "y={} height={}", p.y, height);
            prop_assert_eq!(p.size, original.size);
            prop_assert_eq!(p.speed, original.speed);
            prop_assert_eq!(p.direction, original.direction);
            prop_assert_eq!(p.alpha, original.alpha);
        }
    }

    #[test]
    fn initial_attributes_within_ranges(seed in any::<u64>(), count in 1usize..100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(count, 800.0, 600.0, &mut rng);
        for p in field.particles() {
            prop_assert!((2.0..=8.0).contains(&p.size));
            prop_assert!((0.5..=2.0).contains(&p.speed));
            prop_assert!((0.0..std::f64::consts::TAU).contains(&p.direction));
            prop_assert!((50..=150).contains(&p.alpha));
        }
    }

    #[test]
    fn frame_mirrors_particles(seed in any::<u64>(), count in 0usize..50) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(count, 800.0, 600.0, &mut rng);
        let frame = field.next_frame();
        prop_assert_eq!(frame.sprites.len(), count);
        for (sprite, p) in frame.sprites.iter().zip(field.particles()) {
            prop_assert_eq!(sprite, &p.sprite());
        }
    }
}
