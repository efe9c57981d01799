//! Fits the same data under several penalty mixes and prints the weights.
//!
//! Run with `RUST_LOG=info cargo run --example train_elasticnet` to see training logs.
use elasticnet_rs::{CpuBackend, ElasticNet, InMemoryDataset, Tensor2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // y = 2 * x0 + 1; x1 carries no signal
    let x = vec![
        vec![1.0, 0.5],
        vec![2.0, -0.3],
        vec![3.0, 0.2],
        vec![4.0, -0.4],
        vec![5.0, 0.1],
        vec![6.0, 0.3],
    ];
    let y = x.iter().map(|r| 2.0 * r[0] + 1.0).collect();
    let dataset = InMemoryDataset::new(x, y)?;

    for (alpha, rho) in [(0.0, 0.5), (0.2, 0.0), (0.02, 1.0), (0.1, 0.5)] {
        let fitted = ElasticNet::<CpuBackend>::builder()
            .learning_rate(0.01)
            .epochs(2000)
            .alpha(alpha)
            .rho(rho)
            .build()?
            .fit_dataset(&dataset)?;

        println!(
            "alpha = {alpha:<4} rho = {rho:<3} -> weights = {:?}, bias = {:.4}, cost = {:.6}",
            fitted.weights(),
            fitted.bias(),
            fitted.cost()
        );
    }

    let fitted = ElasticNet::<CpuBackend>::builder()
        .alpha(0.0)
        .epochs(2000)
        .build()?
        .fit_dataset(&dataset)?;
    let new_x = Tensor2D::<CpuBackend>::from_rows(&[vec![7.0, 0.0], vec![8.0, 0.0]])?;
    println!("predictions for x0 = 7, 8: {:?}", fitted.predict(&new_x)?.to_vec());

    Ok(())
}
