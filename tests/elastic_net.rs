#![cfg(feature = "cpu")]

use elasticnet_rs::{
    CpuBackend, Dataset, ElasticNet, ElasticNetError, ElasticNetParams, HistoryMode,
    InMemoryDataset, Tensor1D, Tensor2D,
};
use std::error::Error;

type TestResult = Result<(), Box<dyn Error>>;

fn line() -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
    (
        Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 4, 1),
        Tensor1D::new(vec![2.0, 4.0, 6.0, 8.0]),
    )
}

/// Six samples, two features; y = 2·x0 + 1, x1 is noise.
fn two_features() -> (Tensor2D<CpuBackend>, Tensor1D<CpuBackend>) {
    let rows = vec![
        vec![1.0, 0.5],
        vec![2.0, -0.3],
        vec![3.0, 0.2],
        vec![4.0, -0.4],
        vec![5.0, 0.1],
        vec![6.0, 0.3],
    ];
    let y = rows.iter().map(|r| 2.0 * r[0] + 1.0).collect();
    (Tensor2D::from_rows(&rows).unwrap(), Tensor1D::new(y))
}

fn net(alpha: f64, rho: f64, epochs: usize) -> ElasticNet<CpuBackend> {
    ElasticNet::builder()
        .learning_rate(0.01)
        .epochs(epochs)
        .alpha(alpha)
        .rho(rho)
        .build()
        .unwrap()
}

#[test]
fn scenario_single_feature_line() -> TestResult {
    let (x, y) = line();
    let fitted = net(0.0, 0.5, 1000).fit(&x, &y)?;

    assert!((fitted.weights()[0] - 2.0).abs() < 0.1);
    assert!(fitted.bias().abs() < 0.2);

    let pred = fitted.predict(&Tensor2D::new(vec![5.0], 1, 1))?.to_vec();
    assert!((pred[0] - 10.0).abs() < 0.5);
    assert!((pred[0] - 9.9045).abs() < 1e-3);
    assert!((fitted.cost() - 0.001556).abs() < 1e-5);
    Ok(())
}

#[test]
fn weight_vector_has_one_entry_per_feature() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.1, 0.5, 10).fit(&x, &y)?;
    assert_eq!(fitted.weights().len(), 2);
    assert_eq!(fitted.n_features(), 2);
    for it in fitted.history().iterates() {
        assert_eq!(it.weights.len(), 2);
    }
    Ok(())
}

#[test]
fn cost_is_non_increasing_without_penalty() -> TestResult {
    let (x, y) = line();
    let fitted = net(0.0, 0.5, 1000).fit(&x, &y)?;
    let costs = fitted.history().costs();
    assert_eq!(costs.len(), 1000);
    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0], "cost rose from {} to {}", pair[0], pair[1]);
    }
    Ok(())
}

#[test]
fn zero_alpha_approaches_least_squares() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.0, 0.5, 2000).fit(&x, &y)?;
    let w = fitted.weights();
    assert!((w[0] - 2.0).abs() < 0.01);
    assert!(w[1].abs() < 0.05);
    assert!((fitted.bias() - 1.0).abs() < 0.05);
    Ok(())
}

#[test]
fn pure_l1_zeroes_weights_exactly() -> TestResult {
    let (x, y) = two_features();

    let fitted = net(0.5, 1.0, 2000).fit(&x, &y)?;
    assert_eq!(fitted.weights(), &[0.0, 0.0]);
    // Only the bias is left to fit: it tends to mean(y) = 8.
    assert!((fitted.bias() - 8.0).abs() < 1e-3);

    let fitted = net(0.02, 1.0, 2000).fit(&x, &y)?;
    assert!(fitted.weights()[0] != 0.0);
    assert_eq!(fitted.weights()[1], 0.0);
    Ok(())
}

#[test]
fn mixed_penalty_zeroes_the_noise_feature() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.1, 0.5, 2000).fit(&x, &y)?;
    assert!((fitted.weights()[0] - 0.3022).abs() < 1e-3);
    assert_eq!(fitted.weights()[1], 0.0);
    Ok(())
}

#[test]
fn pure_l2_shrinks_without_sparsifying() -> TestResult {
    let (x, y) = two_features();
    let ols = net(0.0, 0.0, 2000).fit(&x, &y)?;
    let ridge = net(0.5, 0.0, 2000).fit(&x, &y)?;

    for &w in ridge.weights() {
        assert!(w != 0.0);
    }
    assert!(ridge.weights()[0].abs() < ols.weights()[0].abs());
    assert!((ridge.weights()[0] - 1.7128).abs() < 1e-3);
    assert!((ridge.weights()[1] + 0.01487).abs() < 1e-4);

    let weaker = net(0.2, 0.0, 2000).fit(&x, &y)?;
    assert!(weaker.weights()[0] > ridge.weights()[0]);
    Ok(())
}

#[test]
fn without_optimization_the_last_iterate_is_active() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.1, 0.5, 2000).fit(&x, &y)?;
    let last = fitted.history().last().ok_or("empty history")?;

    assert!(!fitted.is_optimized());
    assert_eq!(fitted.epoch(), 2000);
    assert_eq!(fitted.selected(), last);
    Ok(())
}

#[test]
fn optimization_selects_the_minimum_cost_iterate() -> TestResult {
    let (x, y) = two_features();
    let params = ElasticNetParams {
        learning_rate: 0.01,
        epochs: 2000,
        alpha: 0.1,
        rho: 0.5,
        optimization: true,
        ..Default::default()
    };
    let fitted = ElasticNet::<CpuBackend>::new(params)?.fit(&x, &y)?;

    let min_cost = fitted
        .history()
        .costs()
        .into_iter()
        .fold(f64::INFINITY, f64::min);
    assert_eq!(fitted.cost(), min_cost);
    assert_eq!(fitted.epoch(), 61);
    assert!((fitted.cost() - 0.9358).abs() < 1e-3);
    assert!(fitted.cost() < fitted.history().last().ok_or("empty history")?.cost);
    Ok(())
}

#[test]
fn optimization_picks_an_early_epoch_on_the_line() -> TestResult {
    let (x, y) = line();
    let fitted = ElasticNet::<CpuBackend>::builder()
        .alpha(0.1)
        .optimization(true)
        .build()?
        .fit(&x, &y)?;
    assert_eq!(fitted.epoch(), 62);
    assert!(fitted.epoch() < 1000);
    Ok(())
}

#[test]
fn divergent_run_keeps_the_first_iterate() -> TestResult {
    let (x, y) = line();
    let fitted = ElasticNet::<CpuBackend>::builder()
        .learning_rate(0.3)
        .epochs(20)
        .alpha(0.0)
        .optimization(true)
        .build()?
        .fit(&x, &y)?;

    assert_eq!(fitted.epoch(), 1);
    assert_eq!(fitted.cost(), 15.0);
    let last = fitted.history().last().ok_or("empty history")?;
    assert!(last.cost > 1e3);
    Ok(())
}

#[test]
fn predict_reproduces_linear_combination() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.05, 0.3, 300).fit(&x, &y)?;

    let preds = fitted.predict(&x)?.to_vec();
    let w = fitted.weights();
    let flat = x.ravel().to_vec();
    for (i, p) in preds.iter().enumerate() {
        let expected = flat[2 * i] * w[0] + flat[2 * i + 1] * w[1] + fitted.bias();
        assert!((p - expected).abs() < 1e-12);
    }

    let one = fitted.predict_one(&Tensor1D::new(vec![flat[0], flat[1]]))?;
    assert!((one - preds[0]).abs() < 1e-12);
    Ok(())
}

#[test]
fn predict_rejects_feature_count_mismatch() -> TestResult {
    let (x, y) = two_features();
    let fitted = net(0.0, 0.5, 5).fit(&x, &y)?;
    let res = fitted.predict(&Tensor2D::new(vec![1.0, 2.0, 3.0], 1, 3));
    assert!(matches!(res, Err(ElasticNetError::ShapeMismatch { .. })));
    Ok(())
}

#[test]
fn fit_dataset_matches_fit_on_tensors() -> TestResult {
    let ds = InMemoryDataset::new(
        vec![vec![1i32], vec![2], vec![3], vec![4]],
        vec![2, 4, 6, 8],
    )?;
    assert_eq!(ds.len(), 4);

    let (x, y) = line();
    let model = net(0.1, 0.5, 200);
    let a = model.fit_dataset(&ds)?;
    let b = model.fit(&x, &y)?;
    assert_eq!(a.weights(), b.weights());
    assert_eq!(a.bias(), b.bias());
    Ok(())
}

#[test]
fn best_only_history_selects_like_full() -> TestResult {
    let (x, y) = two_features();
    let build = |mode| {
        ElasticNet::<CpuBackend>::builder()
            .alpha(0.1)
            .epochs(2000)
            .optimization(true)
            .history(mode)
            .build()
    };
    let full = build(HistoryMode::Full)?.fit(&x, &y)?;
    let bounded = build(HistoryMode::BestOnly)?.fit(&x, &y)?;

    assert_eq!(full.history().len(), 2000);
    assert_eq!(bounded.history().len(), 1);
    assert_eq!(bounded.selected(), full.selected());
    assert_eq!(bounded.history().last(), full.history().last());
    Ok(())
}

#[test]
fn invalid_hyperparameters_are_rejected() {
    for (lr, epochs, alpha, rho) in [
        (0.0, 10, 0.1, 0.5),
        (0.01, 0, 0.1, 0.5),
        (0.01, 10, -0.1, 0.5),
        (0.01, 10, 0.1, 1.5),
        (0.01, 10, 0.1, -0.5),
    ] {
        let res = ElasticNet::<CpuBackend>::builder()
            .learning_rate(lr)
            .epochs(epochs)
            .alpha(alpha)
            .rho(rho)
            .build();
        assert!(matches!(
            res,
            Err(ElasticNetError::InvalidHyperparameter { .. })
        ));
    }
}
