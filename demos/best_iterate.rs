//! Compares the final iterate with the lowest-cost one on a run whose cost
//! oscillates, then saves the selected model.
use elasticnet_rs::{CpuBackend, ElasticNet, FittedElasticNet, HistoryMode, Tensor1D, Tensor2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 4, 1);
    let y = Tensor1D::<CpuBackend>::new(vec![2.0, 4.0, 6.0, 8.0]);

    let builder = ElasticNet::<CpuBackend>::builder()
        .learning_rate(0.01)
        .epochs(1000)
        .alpha(0.1)
        .rho(0.5);

    let last = builder.clone().build()?.fit(&x, &y)?;
    let best = builder
        .optimization(true)
        .history(HistoryMode::BestOnly)
        .build()?
        .fit(&x, &y)?;

    for (label, fitted) in [("final", &last), ("best", &best)] {
        println!(
            "{label:<5}: epoch {:>4}, cost {:.6}, w = {:?}, b = {:.4}",
            fitted.epoch(),
            fitted.cost(),
            fitted.weights(),
            fitted.bias()
        );
    }

    let path = std::env::temp_dir().join("elasticnet_best.bin");
    best.save_to_file(&path)?;
    let reloaded = FittedElasticNet::<CpuBackend>::load_from_file(&path)?;
    println!(
        "reloaded model predicts {:.4} for x = 5",
        reloaded.predict_one(&Tensor1D::new(vec![5.0]))?
    );

    Ok(())
}
