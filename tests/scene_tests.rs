use drape::{
    build_cloth, build_rope, ClothConfig, ConstraintKind, RopeConfig, SimConfig, SimError,
    Simulation, Vec2,
};

fn sim() -> Simulation<f32> {
    Simulation::new(SimConfig::new()).unwrap()
}

#[test]
fn four_by_two_grid_layout() {
    let mut sim = sim();
    let cloth = build_cloth(&mut sim, &ClothConfig::new(4, 2, 10.0)).unwrap();

    assert_eq!(sim.point_count(), 8);
    // 3 horizontal constraints per row over 2 rows, plus 4 vertical.
    assert_eq!(sim.constraint_count(), 10);

    // Positions are centered about the origin.
    assert_eq!(sim.point(cloth.point_at(0, 0)).curr, Vec2::new(-15.0, -5.0));
    assert_eq!(sim.point(cloth.point_at(3, 0)).curr, Vec2::new(15.0, -5.0));
    assert_eq!(sim.point(cloth.point_at(0, 1)).curr, Vec2::new(-15.0, 5.0));
    assert_eq!(sim.point(cloth.point_at(3, 1)).curr, Vec2::new(15.0, 5.0));

    // Top row pins: the corners plus every 4th column; here that is 0 and 3.
    for col in 0..4 {
        let pinned = sim.point(cloth.point_at(col, 0)).pinned;
        assert_eq!(pinned, col == 0 || col == 3, "col {}", col);
    }
    // Bottom row is fully free.
    for col in 0..4 {
        assert!(!sim.point(cloth.point_at(col, 1)).pinned);
    }
}

#[test]
fn anchor_stride_pins_intermediate_columns() {
    let mut sim = sim();
    let cloth = build_cloth(&mut sim, &ClothConfig::new(9, 2, 1.0)).unwrap();

    let pinned: Vec<usize> = (0..9)
        .filter(|&col| sim.point(cloth.point_at(col, 0)).pinned)
        .collect();
    assert_eq!(pinned, [0, 4, 8]);
}

#[test]
fn grid_identity_is_row_major() {
    use drape::store::SlotKey;
    let mut sim = sim();
    let cloth = build_cloth(&mut sim, &ClothConfig::new(4, 3, 1.0)).unwrap();

    // Fresh simulation, so slot index equals insertion order: row * cols + col.
    assert_eq!(cloth.point_at(2, 1).index(), 1 * 4 + 2);
    assert_eq!(cloth.point_at(0, 2).index(), 2 * 4);
}

#[test]
fn every_edge_stays_inside_the_grid() {
    let mut sim = sim();
    build_cloth(&mut sim, &ClothConfig::new(5, 4, 2.0)).unwrap();

    // All edges connect points exactly one spacing apart: no wrap-around
    // constraint between the last column and the next row.
    for (a, b) in sim.edges() {
        assert!((a.distance(b) - 2.0).abs() < 1e-6);
    }
}

#[test]
fn undersized_grid_is_rejected() {
    let mut sim = sim();
    let err = build_cloth(&mut sim, &ClothConfig::new(1, 5, 1.0));
    assert!(matches!(err, Err(SimError::InvalidGridDimensions)));
    assert_eq!(sim.point_count(), 0);
}

#[test]
fn cloth_that_exceeds_the_point_pool_fails() {
    let config = SimConfig::new().with_point_capacity(6);
    let mut sim = Simulation::new(config).unwrap();

    let err = build_cloth(&mut sim, &ClothConfig::new(4, 2, 1.0));
    assert!(matches!(err, Err(SimError::PoolFull { capacity: 6 })));
}

#[test]
fn rope_builder_counts_and_rest_lengths() {
    let mut sim = sim();
    let rope = build_rope(
        &mut sim,
        &RopeConfig::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 10),
    )
    .unwrap();

    assert_eq!(rope.len(), 11);
    assert_eq!(sim.constraint_count(), 10);
    assert!(sim.point(rope.points()[0]).pinned);
    assert!(!sim.point(rope.points()[10]).pinned);

    for (_, c) in sim.constraints() {
        assert!((c.rest_length - 1.0).abs() < 1e-6);
        assert_eq!(c.kind, ConstraintKind::Rope);
    }
}

#[test]
fn zero_segment_rope_is_rejected() {
    let mut sim = sim();
    let err = build_rope(
        &mut sim,
        &RopeConfig::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 0),
    );
    assert!(matches!(err, Err(SimError::InsufficientSegments)));
}
