use radius_graph::{radius, BatchBoundaries, Execution, PointSet, QueryParameters, RadiusGraph};
use rand::Rng;

const X: [f64; 6] = [
    0.0, 0.0, // 0
    1.0, 0.0, // 1
    5.0, 5.0, // 2
];

fn norm(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(p, q)| (p - q) * (p - q)).sum::<f64>().sqrt()
}

fn random_cloud(count: usize, dim: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..count * dim).map(|_| rng.gen_range(-5.0..5.0)).collect()
}

#[test]
fn test_single_query_scenario() {
    let x = PointSet::new(&X, 2).unwrap();
    let y = PointSet::new(&[0.0, 0.0], 2).unwrap();

    let edges = radius(&x, &y, None, &QueryParameters::new(1.5, 10, false)).unwrap();

    assert_eq!(edges.sources(), &[0, 1]);
    assert_eq!(edges.queries(), &[0, 0]);
}

#[test]
fn test_self_comparison_excludes_only_self() {
    let x = PointSet::new(&X, 2).unwrap();

    let edges = radius(&x, &x, None, &QueryParameters::new(0.1, 10, true)).unwrap();
    assert!(edges.is_empty(), "Expected no edges, got {:?}", edges);

    // Without exclusion every point is its own neighbor.
    let edges = radius(&x, &x, None, &QueryParameters::new(0.1, 10, false)).unwrap();
    assert_eq!(edges.pairs().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2)]);
}

#[test]
fn test_zero_cap_is_empty() {
    let data = random_cloud(50, 3);
    let x = PointSet::new(&data, 3).unwrap();

    let edges = radius(&x, &x, None, &QueryParameters::new(100.0, 0, false)).unwrap();
    assert!(edges.is_empty());
}

#[test]
fn test_empty_point_sets() {
    let empty: [f64; 0] = [];
    let x = PointSet::new(&X, 2).unwrap();
    let none = PointSet::new(&empty, 2).unwrap();

    assert!(radius(&x, &none, None, &QueryParameters::default()).unwrap().is_empty());
    assert!(radius(&none, &x, None, &QueryParameters::default()).unwrap().is_empty());
}

#[test]
fn test_negative_radius_matches_nothing() {
    let x = PointSet::new(&X, 2).unwrap();
    let edges = radius(&x, &x, None, &QueryParameters::new(-1.0, 10, false)).unwrap();
    assert!(edges.is_empty());
}

#[test]
fn test_nan_coordinates_are_rejected() {
    let y = [f64::NAN, 0.0, 0.0, 0.0];
    let x = PointSet::new(&X, 2).unwrap();
    let y = PointSet::new(&y, 2).unwrap();

    let edges = radius(&x, &y, None, &QueryParameters::new(1e9, 10, false)).unwrap();
    assert!(edges.queries().iter().all(|&q| q == 1), "NaN query produced edges: {:?}", edges);
    assert_eq!(edges.len(), 3);
}

#[test]
fn test_huge_coordinates_respect_radius() {
    let x = [3e20f32, 5e19];
    let x = PointSet::new(&x, 1).unwrap();
    let y = PointSet::new(&[0.0f32], 1).unwrap();

    let edges = radius(&x, &y, None, &QueryParameters::new(1e20, 10, false)).unwrap();
    assert_eq!(edges.pairs().collect::<Vec<_>>(), vec![(1, 0)]);
}

#[test]
fn test_random_properties() {
    let dim = 3;
    let n = 200;
    let m = 120;
    let x_data = random_cloud(n, dim);
    let y_data = random_cloud(m, dim);
    let x = PointSet::new(&x_data, dim).unwrap();
    let y = PointSet::new(&y_data, dim).unwrap();

    for &(r, cap) in &[(1.5f64, 15usize), (3.0, 4), (0.5, 32)] {
        let params = QueryParameters::new(r, cap, false);
        let edges = radius(&x, &y, None, &params).unwrap();

        let mut per_query = vec![Vec::new(); m];
        for (ci, qi) in edges.pairs() {
            let d = norm(y.point(qi), x.point(ci));
            assert!(d <= r, "Edge ({}, {}) at distance {} exceeds radius {}", ci, qi, d, r);
            per_query[qi].push(ci);
        }

        for (qi, accepted) in per_query.iter().enumerate() {
            assert!(accepted.len() <= cap, "Query {} has {} neighbors, cap is {}", qi, accepted.len(), cap);
            assert!(accepted.windows(2).all(|w| w[0] < w[1]), "Query {} neighbors out of order: {:?}", qi, accepted);

            // Every in-radius candidate is taken unless the cap was hit before it.
            let last = accepted.last().copied();
            for ci in 0..n {
                let inside = norm(y.point(qi), x.point(ci)) <= r;
                if inside && accepted.len() < cap {
                    assert!(accepted.contains(&ci), "Query {} missed neighbor {}", qi, ci);
                }
                if inside && last.map_or(true, |l| ci < l) {
                    assert!(accepted.contains(&ci), "Query {} skipped neighbor {} before the cap", qi, ci);
                }
            }
        }

        let queries = edges.queries();
        assert!(queries.windows(2).all(|w| w[0] <= w[1]), "Edges not grouped by ascending query");
    }
}

#[test]
fn test_self_exclusion_random() {
    let data = random_cloud(150, 2);
    let x = PointSet::new(&data, 2).unwrap();

    let params = QueryParameters::new(1.0, 20, true);
    let edges = radius(&x, &x, None, &params).unwrap();
    assert!(edges.pairs().all(|(ci, qi)| ci != qi));

    let with_self = radius(&x, &x, None, &params.with_ignore_same_index(false)).unwrap();
    assert!(with_self.len() >= edges.len());
}

#[test]
fn test_determinism_across_runs_and_modes() {
    let data = random_cloud(400, 4);
    let x = PointSet::new(&data, 4).unwrap();
    let ptr = [0, 100, 100, 250, 400];
    let batch = Some(BatchBoundaries::new(&ptr, &ptr));
    let params = QueryParameters::new(2.0, 7, true);

    let parallel = RadiusGraph::euclidean(params).build(&x, &x, batch).unwrap();
    let again = RadiusGraph::euclidean(params).build(&x, &x, batch).unwrap();
    let sequential = RadiusGraph::euclidean(params)
        .with_execution(Execution::Sequential)
        .build(&x, &x, batch)
        .unwrap();

    assert_eq!(parallel, again);
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.to_index_matrix(), sequential.to_index_matrix());
}

#[test]
fn test_index_matrix_layout() {
    let x = PointSet::new(&X, 2).unwrap();
    let edges = radius(&x, &x, None, &QueryParameters::new(1.0, 10, false)).unwrap();

    // (0,0) (1,0) (0,1) (1,1) (2,2)
    assert_eq!(edges.to_index_matrix(), vec![0, 1, 0, 1, 2, 0, 0, 1, 1, 2]);
}
