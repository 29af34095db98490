use drape::{
    build_cloth, ClothConfig, NoOpStepObserver, SimConfig, Simulation, SteerInput, StepObserver,
    Vec2,
};

#[derive(Default)]
struct CountingObserver {
    integrations: usize,
    relaxation_passes: usize,
    steps: usize,
    last_pass: Option<usize>,
}

impl StepObserver for CountingObserver {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }
    fn on_relaxation_pass(&mut self, pass: usize) {
        self.relaxation_passes += 1;
        self.last_pass = Some(pass);
    }
    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn step_runs_configured_iteration_budget() {
    let config = SimConfig::new().with_sub_steps(3).with_relaxation_passes(5);
    let mut sim = Simulation::new(config).unwrap();
    build_cloth(&mut sim, &ClothConfig::new(4, 4, 1.0)).unwrap();

    let mut observer = CountingObserver::default();
    sim.step(SteerInput::NONE, &mut observer);

    assert_eq!(observer.integrations, 3);
    assert_eq!(observer.relaxation_passes, 3 * 5);
    assert_eq!(observer.steps, 1);
    assert_eq!(observer.last_pass, Some(4));
}

#[test]
fn cloth_sags_under_gravity_while_anchors_hold() {
    let mut sim = Simulation::new(SimConfig::new()).unwrap();
    let cloth = build_cloth(&mut sim, &ClothConfig::new(8, 6, 10.0)).unwrap();

    let anchor = cloth.point_at(0, 0);
    let anchor_pos = sim.point(anchor).curr;
    let free = cloth.point_at(3, 5);
    let free_start_y = sim.point(free).curr.y;

    for _ in 0..60 {
        sim.step(SteerInput::NONE, &mut NoOpStepObserver);
    }

    assert_eq!(sim.point(anchor).curr, anchor_pos);
    assert!(
        sim.point(free).curr.y > free_start_y,
        "free cloth point should sag below its start under y-down gravity"
    );
}

#[test]
fn simulation_stays_finite_over_many_steps() {
    let mut sim: Simulation<f32> = Simulation::new(SimConfig::new()).unwrap();
    build_cloth(&mut sim, &ClothConfig::new(12, 8, 10.0)).unwrap();

    let input = SteerInput { right: true, ..SteerInput::NONE };
    for _ in 0..600 {
        sim.step(input, &mut NoOpStepObserver);
    }

    for (_, point) in sim.points() {
        assert!(point.curr.x.is_finite() && point.curr.y.is_finite());
    }
}

#[test]
fn edges_expose_one_segment_per_constraint() {
    let mut sim = Simulation::new(SimConfig::new()).unwrap();
    build_cloth(&mut sim, &ClothConfig::new(4, 2, 10.0)).unwrap();

    assert_eq!(sim.edges().count(), sim.constraint_count());
}

#[test]
fn independent_simulations_do_not_interact() {
    let mut first = Simulation::new(SimConfig::new()).unwrap();
    let mut second = Simulation::new(SimConfig::new()).unwrap();
    let cloth_a = build_cloth(&mut first, &ClothConfig::new(4, 3, 10.0)).unwrap();
    let cloth_b = build_cloth(&mut second, &ClothConfig::new(4, 3, 10.0)).unwrap();

    for _ in 0..30 {
        first.step(SteerInput::NONE, &mut NoOpStepObserver);
    }

    // Only the stepped simulation moved.
    let moved = first.point(cloth_a.point_at(2, 2)).curr;
    let still = second.point(cloth_b.point_at(2, 2)).curr;
    assert_ne!(moved, still);
    assert_eq!(still, Vec2::new(5.0, 10.0));
}
