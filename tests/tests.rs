use std::path::PathBuf;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use ljmd::errors::MdError;
use ljmd::generator::ClusterGenerator;
use ljmd::math::{min_pair_distance, Vector3D};
use ljmd::particles::{Ensemble, Particle, PositionUpdate};
use ljmd::potentials::kind::PairStyle;
use ljmd::potentials::lennard_jones::{LennardJones, LennardJonesManager, LennardJonesPairManager};
use ljmd::potentials::potential::{PairPotential, PotentialManager};
use ljmd::readers::xyz_reader::XyzReader;
use ljmd::simulation_context::{simulate, SimulationArguments};
use ljmd::system::System;
use ljmd::writers::positions::PositionWriter;

/// epsilon = 100, sigma = 1.7
pub fn reference_potential() -> LennardJones {
    LennardJones::new(100.0, 1.7).unwrap()
}

/// Two unit-mass particles with the given positions and velocities
pub fn pair(x0: Vector3D, x1: Vector3D, v0: Vector3D, v1: Vector3D) -> Ensemble {
    let mut ensemble = Ensemble::from_positions(vec![x0, x1]);
    ensemble.set_velocities(vec![v0, v1]).unwrap();
    ensemble
}

/// Random well-separated cluster of unit-mass particles
pub fn cluster(n: usize, seed: u64) -> Ensemble {
    let generator = ClusterGenerator {
        n_particles: n,
        seed,
        ..ClusterGenerator::default()
    };
    let (positions, velocities) = generator.generate().unwrap();
    let mut ensemble = Ensemble::from_positions(positions);
    ensemble.set_velocities(velocities).unwrap();
    ensemble
}

pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ljmd-{}-{}", std::process::id(), name))
}

fn total_energy(mgr: &dyn PotentialManager, ensemble: &Ensemble) -> f64 {
    ensemble.kinetic_energy() + mgr.potential_energy(ensemble)
}

// ==================================================================================
// Potential tests
// ==================================================================================

#[test]
fn potential_rejects_non_positive_parameters() {
    assert!(matches!(
        LennardJones::new(0.0, 1.7),
        Err(MdError::NonPositiveParameter { name: "epsilon", .. })
    ));
    assert!(matches!(
        LennardJones::new(100.0, -1.0),
        Err(MdError::NonPositiveParameter { name: "sigma", .. })
    ));
    assert!(LennardJones::new(100.0, f64::NAN).is_err());
}

#[test]
fn pair_force_vanishes_at_equilibrium_distance() {
    let lj = reference_potential();
    let rij = Vector3D::new(lj.equilibrium_distance(), 0.0, 0.0);

    assert_abs_diff_eq!(lj.pair_force(&rij).norm(), 0.0, epsilon = 1e-9);
    // closer repels, further attracts
    assert!(lj.pair_force(&(rij * 0.95))[0] > 0.0);
    assert!(lj.pair_force(&(rij * 1.05))[0] < 0.0);
}

#[test]
fn pair_force_is_minus_energy_gradient() {
    let lj = reference_potential();
    let rij = Vector3D::new(1.8, 0.3, -0.2);
    let force = lj.pair_force(&rij);
    let h = 1e-6;

    for k in 0..3 {
        let mut plus = rij;
        let mut minus = rij;
        plus[k] += h;
        minus[k] -= h;
        let numerical = -(lj.pair_energy(&plus) - lj.pair_energy(&minus)) / (2.0 * h);
        assert_relative_eq!(force[k], numerical, epsilon = 1e-6, max_relative = 1e-6);
    }
}

// ==================================================================================
// Force evaluator tests
// ==================================================================================

#[test]
fn pair_forces_are_equal_and_opposite_at_every_evaluation() {
    let mut ensemble = pair(
        Vector3D::new(0.1, 0.2, -0.3),
        Vector3D::new(1.9, 0.7, 0.4),
        Vector3D::new(0.3, 0.0, -0.1),
        Vector3D::new(-0.2, 0.1, 0.0),
    );
    let mgr = LennardJonesManager::new(reference_potential());

    mgr.compute_forces(&mut ensemble);
    for _ in 0..200 {
        let particles = &ensemble.particles;
        assert_eq!(particles[0].force, -particles[1].force);
        assert_eq!(particles[0].acceleration, -particles[1].acceleration);

        mgr.verlet_step(&mut ensemble, 0.01, PositionUpdate::Reference);
    }
}

#[test]
fn lone_particle_feels_no_force_and_stays_put() {
    let start = Vector3D::new(1.5, -2.0, 0.25);
    let mut args = SimulationArguments::new(
        Ensemble::from_positions(vec![start]),
        reference_potential(),
        500,
        0.01,
    );

    simulate(&mut args).unwrap();

    let particle = &args.ensemble.particles[0];
    assert_eq!(particle.position, start);
    assert_eq!(particle.velocity, Vector3D::zeros());
    assert_eq!(particle.force, Vector3D::zeros());
    assert_eq!(particle.acceleration, Vector3D::zeros());
    assert_eq!(particle.prev_acceleration, Vector3D::zeros());
}

#[test]
fn empty_ensemble_runs() {
    let mut args = SimulationArguments::new(Ensemble::default(), reference_potential(), 10, 0.01);
    simulate(&mut args).unwrap();
    assert!(args.ensemble.is_empty());
}

#[test]
fn force_evaluation_is_idempotent() {
    let mut ensemble = cluster(8, 11);
    let mgr = LennardJonesManager::new(reference_potential());

    mgr.compute_forces(&mut ensemble);
    let first = ensemble.clone();
    mgr.compute_forces(&mut ensemble);

    for (before, after) in first.iter().zip(ensemble.iter()) {
        assert_eq!(before.force, after.force);
        assert_eq!(before.acceleration, after.acceleration);
        assert_eq!(after.prev_force, before.force);
        assert_eq!(after.prev_acceleration, before.acceleration);
        assert_eq!(before.position, after.position);
        assert_eq!(before.velocity, after.velocity);
    }
}

#[test]
fn accelerations_follow_forces_and_mass() {
    let mut ensemble = cluster(5, 4);
    ensemble.set_mass(2.5).unwrap();
    let mgr = LennardJonesManager::new(reference_potential());

    mgr.compute_forces(&mut ensemble);
    mgr.verlet_step(&mut ensemble, 0.01, PositionUpdate::Reference);

    for particle in ensemble.iter() {
        assert_eq!(particle.mass(), 2.5);
        assert_eq!(particle.acceleration, particle.force / 2.5);
        assert_eq!(particle.prev_acceleration, particle.prev_force / 2.5);
    }
}

#[test]
fn non_positive_mass_is_rejected() {
    assert!(matches!(
        Particle::new(Vector3D::zeros(), Vector3D::zeros(), 0.0),
        Err(MdError::NonPositiveMass { .. })
    ));
    let mut ensemble = cluster(3, 1);
    assert!(ensemble.set_mass(-1.0).is_err());
}

#[test]
fn pairwise_evaluator_matches_ordered_pairs() {
    let mut ordered = cluster(12, 3);
    let mut pairwise = ordered.clone();
    let potential = reference_potential();

    LennardJonesManager::new(potential).compute_forces(&mut ordered);
    LennardJonesPairManager::new(potential).compute_forces(&mut pairwise);

    for (a, b) in ordered.iter().zip(pairwise.iter()) {
        assert_relative_eq!(a.force, b.force, epsilon = 1e-10, max_relative = 1e-10);
        assert_relative_eq!(a.acceleration, b.acceleration, epsilon = 1e-10, max_relative = 1e-10);
    }
}

#[test]
fn pairwise_style_tracks_ordered_run() {
    let ensemble = cluster(12, 3);
    let mut ordered = SimulationArguments::new(ensemble.clone(), reference_potential(), 20, 0.01);
    let mut pairwise = SimulationArguments::new(ensemble, reference_potential(), 20, 0.01);
    pairwise.pair_style = PairStyle::Pairwise;

    simulate(&mut ordered).unwrap();
    simulate(&mut pairwise).unwrap();

    for (a, b) in ordered.ensemble.iter().zip(pairwise.ensemble.iter()) {
        assert_relative_eq!(a.position, b.position, epsilon = 1e-9);
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn position_update_uses_unhalved_acceleration_term() {
    let dt = 0.01;
    let mut ensemble = pair(
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(1.8, 0.4, 0.0),
        Vector3D::new(0.5, -0.2, 0.1),
        Vector3D::new(0.0, 0.3, -0.4),
    );
    let mgr = LennardJonesManager::new(reference_potential());
    mgr.compute_forces(&mut ensemble);
    let before = ensemble.clone();

    mgr.verlet_step(&mut ensemble, dt, PositionUpdate::Reference);

    for (old, new) in before.iter().zip(ensemble.iter()) {
        let expected = old.position + old.velocity * dt + old.acceleration * (dt * dt);
        assert_relative_eq!(new.position, expected, epsilon = 1e-14);

        // the pre-step acceleration is demoted, and the velocity uses the average
        assert_eq!(new.prev_acceleration, old.acceleration);
        let expected_v = old.velocity + (old.acceleration + new.acceleration) * (dt / 2.0);
        assert_relative_eq!(new.velocity, expected_v, epsilon = 1e-14);
    }
}

#[test]
fn textbook_position_update_halves_acceleration_term() {
    let dt = 0.01;
    let mut ensemble = pair(
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(2.0, 0.0, 0.0),
        Vector3D::new(0.1, 0.0, 0.0),
        Vector3D::zeros(),
    );
    let mgr = LennardJonesManager::new(reference_potential());
    mgr.compute_forces(&mut ensemble);
    let before = ensemble.clone();

    mgr.verlet_step(&mut ensemble, dt, PositionUpdate::Textbook);

    for (old, new) in before.iter().zip(ensemble.iter()) {
        let expected = old.position + old.velocity * dt + old.acceleration * (0.5 * dt * dt);
        assert_relative_eq!(new.position, expected, epsilon = 1e-14);
    }
}

#[test]
fn symmetric_pair_keeps_center_of_mass_at_origin() {
    let x = Vector3D::new(1.0, 0.3, -0.2);
    let v = Vector3D::new(0.2, -0.1, 0.05);
    let mut args = SimulationArguments::new(pair(x, -x, v, -v), reference_potential(), 1000, 0.01);

    simulate(&mut args).unwrap();

    assert_abs_diff_eq!(args.ensemble.center_of_mass().norm(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(args.ensemble.total_momentum().norm(), 0.0, epsilon = 1e-12);
}

#[test]
fn identical_runs_are_bit_identical() {
    let ensemble = cluster(10, 7);
    let mut first = SimulationArguments::new(ensemble.clone(), reference_potential(), 300, 0.01);
    let mut second = SimulationArguments::new(ensemble, reference_potential(), 300, 0.01);

    simulate(&mut first).unwrap();
    simulate(&mut second).unwrap();

    assert_eq!(first.ensemble, second.ensemble);
}

#[test]
fn textbook_scheme_conserves_energy() {
    let start = pair(
        Vector3D::new(-1.0, 0.0, 0.0),
        Vector3D::new(1.0, 0.0, 0.0),
        Vector3D::zeros(),
        Vector3D::zeros(),
    );
    let mgr = LennardJonesManager::new(reference_potential());
    let e0 = total_energy(&mgr, &start);

    let drift = |scheme: PositionUpdate| {
        let mut args = SimulationArguments::new(start.clone(), reference_potential(), 1000, 0.001);
        args.position_update = scheme;
        simulate(&mut args).unwrap();
        ((total_energy(&mgr, &args.ensemble) - e0) / e0).abs()
    };

    let textbook = drift(PositionUpdate::Textbook);
    let reference = drift(PositionUpdate::Reference);

    assert!(textbook < 1e-4, "Energy drift too large: {}", textbook);
    // the unhalved term is first order only
    assert!(reference > 10.0 * textbook, "reference {} vs textbook {}", reference, textbook);
}

// ==================================================================================
// Driver tests
// ==================================================================================

#[test]
fn two_particles_one_step_matches_closed_form() {
    let (epsilon, sigma, dt) = (100.0_f64, 1.7_f64, 0.01_f64);
    let start = pair(
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(2.0, 0.0, 0.0),
        Vector3D::zeros(),
        Vector3D::zeros(),
    );

    // r = 2.0 lies beyond sigma * 2^(1/6) ~ 1.908, so the pair attracts
    let r: f64 = 2.0;
    let c = epsilon / 2.0 * (12.0 * sigma.powi(12) / r.powi(14) - 6.0 * sigma.powi(6) / r.powi(8));
    let f0 = c * (0.0 - 2.0);
    assert!(f0 > 0.0);

    let mut warm = start.clone();
    LennardJonesManager::new(reference_potential()).compute_forces(&mut warm);
    assert_relative_eq!(warm.particles[0].force[0], f0, epsilon = 1e-9);
    assert_relative_eq!(warm.particles[0].force[0], 13.899900202898364, epsilon = 1e-9);

    let mut args = SimulationArguments::new(start, LennardJones::new(epsilon, sigma).unwrap(), 1, dt);
    simulate(&mut args).unwrap();

    let p = &args.ensemble.particles;
    // x = x0 + v dt + a dt^2 with v = 0 and unit mass
    assert_abs_diff_eq!(p[0].position[0], f0 * dt * dt, epsilon = 1e-9);
    assert_abs_diff_eq!(p[1].position[0], 2.0 - f0 * dt * dt, epsilon = 1e-9);
    assert_abs_diff_eq!(p[0].position[1], 0.0);
    assert_abs_diff_eq!(p[0].velocity[0], 0.13787338674232222, epsilon = 1e-9);
    assert_eq!(p[0].velocity, -p[1].velocity);
}

#[test]
fn non_positive_timestep_aborts_before_any_work() {
    for timestep in [0.0, -0.01, f64::NAN] {
        let ensemble = cluster(4, 2);
        let mut args = SimulationArguments::new(ensemble.clone(), reference_potential(), 10, timestep);

        let err = simulate(&mut args).unwrap_err();

        assert!(matches!(err, MdError::NonPositiveTimestep { .. }));
        assert_eq!(args.ensemble, ensemble);
    }
}

#[test]
fn zero_steps_only_evaluates_forces() {
    let ensemble = cluster(4, 9);
    let mut args = SimulationArguments::new(ensemble.clone(), reference_potential(), 0, 0.01);

    simulate(&mut args).unwrap();

    assert_eq!(args.ensemble.positions(), ensemble.positions());
    assert!(args.ensemble.iter().any(|p| p.force != Vector3D::zeros()));
}

#[test]
fn coincident_particles_poison_the_run_silently() {
    let x = Vector3D::new(0.5, 0.5, 0.5);
    let mut args = SimulationArguments::new(
        pair(x, x, Vector3D::zeros(), Vector3D::zeros()),
        reference_potential(),
        5,
        0.01,
    );

    simulate(&mut args).unwrap();

    assert_eq!(args.ensemble.first_non_finite(), Some(0));
}

#[test]
fn finite_guard_reports_first_bad_particle() {
    let x = Vector3D::new(0.5, 0.5, 0.5);
    let mut args = SimulationArguments::new(
        pair(x, x, Vector3D::zeros(), Vector3D::zeros()),
        reference_potential(),
        5,
        0.01,
    );
    args.check_finite = true;

    let err = simulate(&mut args).unwrap_err();

    assert!(matches!(err, MdError::NonFiniteState { id: 0, step: 1 }));
}

#[test]
fn velocity_count_must_match_positions() {
    let mut ensemble = Ensemble::from_positions(vec![Vector3D::zeros(), Vector3D::new(2.0, 0.0, 0.0)]);
    let err = ensemble.set_velocities(vec![Vector3D::zeros()]).unwrap_err();

    assert!(matches!(err, MdError::VelocityCountMismatch { expected: 2, found: 1 }));
}

// ==================================================================================
// I/O and system tests
// ==================================================================================

#[test]
fn final_positions_use_shortest_representation() {
    let path = temp_path("format.txt");
    let ensemble = Ensemble::from_positions(vec![
        Vector3D::new(0.5, -1.0, 2.25),
        Vector3D::new(0.1, 1e-7, -3.0),
    ]);

    PositionWriter::new(path.to_string_lossy())
        .unwrap()
        .write_positions(&ensemble)
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "0.5 -1 2.25\n0.1 0.0000001 -3\n");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn system_runs_script_end_to_end() {
    let positions = temp_path("system-positions.txt");
    let velocities = temp_path("system-velocities.txt");
    let output = temp_path("system-final.txt");
    let script = temp_path("system-input.md");

    let start = cluster(6, 5);
    let velocity_list: Vec<Vector3D> = start.iter().map(|p| p.velocity).collect();
    PositionWriter::new(positions.to_string_lossy())
        .unwrap()
        .write_positions(&start)
        .unwrap();
    PositionWriter::new(velocities.to_string_lossy())
        .unwrap()
        .write_vectors(&velocity_list)
        .unwrap();
    std::fs::write(
        &script,
        format!(
            "read_positions {}\nread_velocities {}\npair_coeff 100 1.7\ntimestep 0.01\nrun 50\nwrite_positions {}\n",
            positions.display(),
            velocities.display(),
            output.display()
        ),
    )
    .unwrap();

    let mut system = System::new(Some(script.to_string_lossy().into_owned()));
    system.read().unwrap().contextualize().unwrap().run().unwrap().write().unwrap();
    assert_eq!(system.settings().steps, 50);
    assert_eq!(system.arguments().unwrap().ensemble.len(), 6);

    let mut direct = SimulationArguments::new(start, reference_potential(), 50, 0.01);
    simulate(&mut direct).unwrap();

    let written = XyzReader::new(output.to_string_lossy()).read().unwrap();
    assert_eq!(written, direct.ensemble.positions());

    for path in [positions, velocities, output, script] {
        std::fs::remove_file(path).unwrap();
    }
}

#[test]
fn system_without_positions_is_a_configuration_error() {
    let script = temp_path("no-positions.md");
    std::fs::write(&script, "timestep 0.01\nrun 10\n").unwrap();

    let mut system = System::new(Some(script.to_string_lossy().into_owned()));
    let err = system.read().unwrap().contextualize().err().unwrap();

    assert!(matches!(err, MdError::NoPositionsDefined));
    std::fs::remove_file(script).unwrap();
}

// ==================================================================================
// Generator tests
// ==================================================================================

#[test]
fn generated_cluster_respects_minimum_separation() {
    let generator = ClusterGenerator::default();
    let (positions, velocities) = generator.generate().unwrap();

    assert_eq!(positions.len(), 12);
    assert_eq!(velocities.len(), 12);
    assert!(min_pair_distance(&positions).unwrap() > generator.min_separation);
    assert!(positions.iter().flat_map(|p| p.iter()).all(|c| c.abs() <= 4.0));
    assert!(velocities.iter().flat_map(|v| v.iter()).all(|c| c.abs() <= 1.0));
}

#[test]
fn generator_is_reproducible_per_seed() {
    let generator = ClusterGenerator {
        seed: 42,
        ..ClusterGenerator::default()
    };
    assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
}

#[test]
fn generator_gives_up_on_impossible_packing() {
    let generator = ClusterGenerator {
        n_particles: 50,
        half_width: 1.0,
        min_separation: 5.0,
        max_attempts: 10,
        ..ClusterGenerator::default()
    };
    assert!(matches!(generator.generate(), Err(MdError::GenerationFailed { attempts: 10 })));
}

#[test]
fn generator_rejects_extents_it_cannot_sample() {
    for half_width in [1e308, f64::INFINITY, f64::NAN, -1.0] {
        let generator = ClusterGenerator {
            half_width,
            ..ClusterGenerator::default()
        };
        assert!(matches!(
            generator.generate(),
            Err(MdError::NonPositiveParameter { name: "half_width", .. })
        ));
    }
    for max_speed in [f64::INFINITY, 1e308, -0.5] {
        let generator = ClusterGenerator {
            max_speed,
            ..ClusterGenerator::default()
        };
        assert!(matches!(
            generator.generate(),
            Err(MdError::NonPositiveParameter { name: "max_speed", .. })
        ));
    }
}

#[test]
fn generator_with_zero_speed_starts_at_rest() {
    let generator = ClusterGenerator {
        max_speed: 0.0,
        ..ClusterGenerator::default()
    };
    let (_, velocities) = generator.generate().unwrap();
    assert!(velocities.iter().all(|v| *v == Vector3D::zeros()));
}
