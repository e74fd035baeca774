// Host-side tests for particle field generation.
// The web crate is wasm-only, so these exercise drift-core directly.

use drift_core::{FieldError, ParticleField, FIELD_EXTENT, PARTICLE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::generate(PARTICLE_COUNT, FIELD_EXTENT, &mut rng).unwrap()
}

#[test]
fn coordinate_count_is_three_per_point() {
    let field = default_field(1);
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert_eq!(field.positions().len(), 3 * PARTICLE_COUNT);
    assert_eq!(field.points().count(), PARTICLE_COUNT);
    assert_eq!(field.as_bytes().len(), 3 * PARTICLE_COUNT * 4);
}

#[test]
fn every_coordinate_lies_inside_the_cube() {
    for seed in [1, 2, 3, 42] {
        let field = default_field(seed);
        let half = field.half_extent();
        assert_eq!(half, 160.0);
        for &c in field.positions() {
            assert!(
                (-half..=half).contains(&c),
                "coordinate {c} outside [-{half}, {half}] (seed {seed})"
            );
        }
    }
}

#[test]
fn samples_cover_the_cube_roughly_uniformly() {
    let field = default_field(7);
    let half = field.half_extent();
    // Each of the 5400 components should land on either side of zero about half the time.
    let positive = field.positions().iter().filter(|&&c| c > 0.0).count();
    let total = field.positions().len();
    let share = positive as f32 / total as f32;
    assert!((0.45..0.55).contains(&share), "positive share {share}");
    // and reach near the walls
    let max = field.positions().iter().cloned().fold(f32::MIN, f32::max);
    let min = field.positions().iter().cloned().fold(f32::MAX, f32::min);
    assert!(max > half * 0.95);
    assert!(min < -half * 0.95);
}

#[test]
fn same_seed_gives_same_field() {
    let a = default_field(99);
    let b = default_field(99);
    assert_eq!(a.positions(), b.positions());
    let c = default_field(100);
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn points_iterator_matches_flat_layout() {
    let field = default_field(5);
    let flat = field.positions();
    for (i, p) in field.points().enumerate().take(10) {
        assert_eq!(p.x, flat[i * 3]);
        assert_eq!(p.y, flat[i * 3 + 1]);
        assert_eq!(p.z, flat[i * 3 + 2]);
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        ParticleField::generate(0, FIELD_EXTENT, &mut rng).unwrap_err(),
        FieldError::Empty
    );
    assert_eq!(
        ParticleField::generate(10, -1.0, &mut rng).unwrap_err(),
        FieldError::InvalidExtent(-1.0)
    );
    assert!(matches!(
        ParticleField::generate(10, f32::NAN, &mut rng),
        Err(FieldError::InvalidExtent(_))
    ));
    assert!(ParticleField::generate(10, f32::INFINITY, &mut rng).is_err());
}
