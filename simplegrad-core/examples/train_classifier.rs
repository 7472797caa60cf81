//! # Training an MLP on a synthetic two-class problem
//!
//! 1. Generates a dataset with `simplegrad_data::make_classification`.
//! 2. Builds `Mlp(10, [16, 1])` from a seeded RNG.
//! 3. Per batch: `zero_grad`, one `backward` per example on the scaled
//!    squared error, then `step(lr)`. Transient nodes are released after
//!    every batch so the graph holds only the parameters between batches.
//! 4. Reports the average loss per epoch and the final accuracy.
//!
//! ## Execution
//! `RUST_LOG=info cargo run --example train_classifier [epochs]`

use rand::rngs::StdRng;
use rand::SeedableRng;
use simplegrad_core::{Graph, Mlp, Module};
use simplegrad_data::{
    make_classification, ClassificationConfig, DataLoader, Dataset, RandomSampler,
};
use std::error::Error;

#[derive(Debug, Clone, Copy)]
struct TrainConfig {
    lr: f64,
    batch_size: usize,
    epochs: usize,
    seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            lr: 0.01,
            batch_size: 16,
            epochs: 10,
            seed: 42,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = TrainConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        config.epochs = arg.parse()?;
    }
    log::info!("Training with {:?}", config);

    let dataset = make_classification(&ClassificationConfig {
        seed: config.seed,
        ..ClassificationConfig::default()
    })?;
    let mut loader = DataLoader::new(
        &dataset,
        config.batch_size,
        RandomSampler::seeded(config.seed),
        false,
    )?;

    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mlp = Mlp::with_rng(&graph, 10, &[16, 1], &mut rng)?;
    log::info!("{}", mlp);
    let parameters_only = graph.checkpoint();

    for epoch in 0..config.epochs {
        let mut epoch_loss = 0.0;
        for batch in loader.epoch() {
            let batch = batch?;
            let scale = 1.0 / batch.len() as f64;
            mlp.zero_grad();
            for sample in &batch {
                let y_hat = mlp.forward_raw(&sample.features)?[0];
                let loss = (y_hat - sample.label).pow(2.0) * scale;
                epoch_loss += loss.data();
                loss.backward();
            }
            mlp.step(config.lr);
            graph.release(parameters_only);
        }
        log::info!(
            "Epoch {}, Average Loss: {:.3}",
            epoch + 1,
            epoch_loss / loader.num_batches() as f64
        );
    }

    let mut correct = 0usize;
    for i in 0..dataset.len() {
        let sample = dataset.get(i)?;
        let y_hat = mlp.forward_raw(&sample.features)?[0].data();
        let predicted = if y_hat >= 0.5 { 1.0 } else { 0.0 };
        if predicted == sample.label {
            correct += 1;
        }
        graph.release(parameters_only);
    }
    log::info!(
        "Accuracy: {}/{} ({:.1}%)",
        correct,
        dataset.len(),
        100.0 * correct as f64 / dataset.len() as f64
    );
    Ok(())
}
