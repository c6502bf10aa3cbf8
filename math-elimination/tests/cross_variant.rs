//! Integration tests comparing the seven direct solvers
//!
//! Every method must agree on well-conditioned systems, and the plain and
//! pivoted variants must diverge exactly where row exchanges are required.

use approx::assert_relative_eq;
use math_audio_elimination::{
    AugmentedSystem, EliminationConfig, Method, PivotStrategy, SolverError, cramer_solve,
    determinant, determinant_with, lu_decompose, lu_factorize, solve, solve_all,
};
use ndarray::{Array1, Array2, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

/// Random strictly diagonally dominant system of size `n`
fn random_dominant_system(rng: &mut StdRng, n: usize) -> AugmentedSystem<f64> {
    let mut a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0_f64..1.0));
    for i in 0..n {
        let off_diagonal: f64 = a.row(i).iter().map(|v| v.abs()).sum();
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        a[[i, i]] = sign * (off_diagonal + 1.0);
    }
    let b = Array1::from_shape_fn(n, |_| rng.random_range(-10.0_f64..10.0));
    AugmentedSystem::from_parts(&a, &b).expect("valid system")
}

fn elimination_methods() -> impl Iterator<Item = Method> {
    Method::ALL.into_iter().filter(|m| *m != Method::Cramer)
}

#[test]
fn test_concrete_scenario_every_method() {
    let system = AugmentedSystem::new(array![[2.0_f64, 1.0, 5.0], [1.0, 3.0, 10.0]]).unwrap();

    for method in Method::ALL {
        let x = solve(&system, method).unwrap_or_else(|e| panic!("{method} failed: {e}"));
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_zero_row_singularity() {
    let system = AugmentedSystem::new(array![[1.0_f64, 1.0, 2.0], [0.0, 0.0, 0.0]]).unwrap();

    for method in elimination_methods() {
        let err = solve(&system, method).unwrap_err();
        assert!(
            matches!(err, SolverError::SingularMatrix { .. }),
            "{method} returned {err:?}"
        );
    }
    assert_eq!(
        solve(&system, Method::Cramer),
        Err(SolverError::NoUniqueSolution)
    );
}

#[test]
fn test_pivoting_necessity() {
    let system = AugmentedSystem::new(array![[0.0_f64, 2.0, 4.0], [1.0, 1.0, 3.0]]).unwrap();

    for method in elimination_methods() {
        let outcome = solve(&system, method);
        if method.pivoting() == PivotStrategy::None {
            assert_eq!(
                outcome,
                Err(SolverError::SingularMatrix { step: 0 }),
                "{method} should need a row exchange"
            );
        } else {
            let x = outcome.unwrap_or_else(|e| panic!("{method} failed: {e}"));
            assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
            assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        }
    }

    // The determinant reducer never exchanges rows, so det(A) reduces to zero
    assert_eq!(determinant(&system.coefficients().to_owned()), Ok(0.0));
    assert_eq!(
        solve(&system, Method::Cramer),
        Err(SolverError::NoUniqueSolution)
    );
    let x = cramer_solve(&system, &EliminationConfig::partial()).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
}

#[test]
fn test_random_systems_agree() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for n in 1..=8 {
        for _ in 0..5 {
            let system = random_dominant_system(&mut rng, n);

            let outcomes = solve_all(&system);
            let reference = outcomes[0].1.clone().expect("Gauss should succeed");

            for (method, outcome) in outcomes {
                let x = outcome.unwrap_or_else(|e| panic!("{method} failed on n={n}: {e}"));

                let residual = system.relative_residual(&x).unwrap();
                if method == Method::Cramer {
                    // det(A_j) is reduced without row exchanges
                    assert!(residual < 1e-6, "{method} residual {residual:e} on n={n}");
                    continue;
                }
                assert!(
                    residual < TOLERANCE,
                    "{method} residual {residual:e} on n={n}"
                );

                for i in 0..n {
                    assert_relative_eq!(
                        x[i],
                        reference[i],
                        epsilon = TOLERANCE,
                        max_relative = TOLERANCE
                    );
                }
            }
        }
    }
}

#[test]
fn test_lu_factorization_identity_on_random_matrices() {
    let mut rng = StdRng::seed_from_u64(7);

    for n in 1..=6 {
        let a = Array2::from_shape_fn((n, n), |_| rng.random_range(-5.0_f64..5.0));
        let lu = lu_factorize(&a, &EliminationConfig::partial()).expect("LU should succeed");

        let pa = lu.permutation.to_matrix::<f64>().dot(&a);
        let reconstructed = lu.reconstruct();
        for (lhs, rhs) in pa.iter().zip(reconstructed.iter()) {
            assert_relative_eq!(*lhs, *rhs, epsilon = 1e-10);
        }

        for i in 0..n {
            assert_eq!(lu.l[[i, i]], 1.0);
            for j in (i + 1)..n {
                assert_eq!(lu.l[[i, j]], 0.0, "L must be lower triangular");
            }
            for j in 0..i {
                assert_eq!(lu.u[[i, j]], 0.0, "U must be upper triangular");
            }
            // Partial pivoting bounds every multiplier by one
            for j in 0..i {
                assert!(lu.l[[i, j]].abs() <= 1.0);
            }
        }

        let pivoted = determinant_with(&a, PivotStrategy::Partial, 0.0).unwrap();
        assert_relative_eq!(lu.determinant(), pivoted, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn test_lu_decompose_exposes_factors() {
    let system = AugmentedSystem::new(array![
        [1.0_f64, 2.0, 3.0, 14.0],
        [2.0, 5.0, 2.0, 18.0],
        [6.0, -3.0, 1.0, 3.0]
    ])
    .unwrap();

    let solution = lu_decompose(&system, &EliminationConfig::partial()).unwrap();
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(solution.x[2], 3.0, epsilon = 1e-12);

    // Largest first-column entry moves to the top
    assert_eq!(solution.factors.permutation.indices()[0], 2);

    let det = determinant(&system.coefficients().to_owned()).unwrap();
    assert_relative_eq!(solution.factors.determinant(), det, epsilon = 1e-10);
}

#[test]
fn test_scaled_identity_determinant() {
    let a = Array2::<f64>::eye(3) * 2.0;
    assert_relative_eq!(determinant(&a).unwrap(), 8.0, epsilon = 1e-12);
}

#[test]
fn test_solvers_leave_input_untouched() {
    let system = AugmentedSystem::new(array![
        [0.0_f64, 2.0, 1.0, 5.0],
        [1.0, 1.0, 0.0, 3.0],
        [3.0, 0.0, 1.0, 4.0]
    ])
    .unwrap();
    let before = system.clone();

    for method in Method::ALL {
        let _ = solve(&system, method);
        assert_eq!(system, before, "{method} mutated its input");
    }
}

#[test]
fn test_single_precision() {
    let system = AugmentedSystem::new(array![[4.0_f32, -2.0, 2.0], [1.0, 1.0, 3.0]]).unwrap();

    for method in Method::ALL {
        let x = solve(&system, method).unwrap_or_else(|e| panic!("{method} failed: {e}"));
        assert_relative_eq!(x[0], 4.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(x[1], 5.0 / 3.0, epsilon = 1e-5);
    }
}
