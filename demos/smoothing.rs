//! Exponential smoothing lab.
//!
//! Run with: RUST_LOG=debug cargo run --example smoothing

use tracing_subscriber::EnvFilter;
use tslab::smoothing::{
    exponential_smoothing, exponential_smoothing_sse, find_best_alpha_in, one_step_predictions,
    AlphaGrid,
};
use tslab::utils::{mae, rmse};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Exponential Smoothing Lab ===\n");

    let values: Vec<f64> = (0..40)
        .map(|i| 20.0 + 3.0 * (i as f64 * 0.4).sin() + 0.1 * i as f64)
        .collect();
    let l0 = values[0];

    for alpha in [0.1, 0.5, 0.9] {
        println!(
            "alpha = {alpha:.1}: final level {:.4}, SSE {:.4}",
            exponential_smoothing(&values, alpha, l0),
            exponential_smoothing_sse(&values, alpha, l0)
        );
    }

    let fit = find_best_alpha_in(&values, l0, &AlphaGrid::default());
    println!("\nBest alpha on the 0.00..0.99 grid: {:.2}", fit.alpha);
    println!("SSE at best alpha: {:.4}", fit.sse);

    let preds = one_step_predictions(&values, fit.alpha, l0);
    println!("One-step RMSE: {:.4}", rmse(&values[1..], &preds));
    println!("One-step MAE: {:.4}", mae(&values[1..], &preds));
    println!(
        "Next-period forecast: {:.4}",
        exponential_smoothing(&values, fit.alpha, l0)
    );
}
