use anyhow::{Context, Result};

use nplite::utils::{linspace, rand_choice, randn};
use nplite::{NpConfig, Stack};

fn main() -> Result<()> {
    env_logger::init();

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => NpConfig::from_json_file(&path)?,
        None => NpConfig::default(),
    };
    let mut rng = config.random.rng();

    // Four noisy traces sampled on a coarse grid
    let x = linspace(0.0, 1.0, 5);
    let rows = (0..4)
        .map(|i| -> Result<_> {
            let noise = randn(&mut rng, x.len())?.mul_scalar(0.1);
            Ok(x.mul_scalar(i as f64 + 1.0).add(&noise)?)
        })
        .collect::<Result<Vec<_>>>()?;
    let traces = Stack::new(rows).context("Failed to assemble traces")?;

    println!("Traces shape: {:?}", traces.shape());
    println!("{}", traces.render(&config.print));

    // Resample every trace onto a finer grid
    let fine_x = linspace(0.0, 1.0, 9);
    let fine = traces.linear_interpolate(&x, &fine_x)?;
    println!("Resampled shape: {:?}", fine.shape());

    println!("Row means: {}", fine.mean().render(&config.print));
    println!("Row std: {}", fine.std_dev().render(&config.print));
    println!("Pooled std: {:.6}", fine.scalar_std_dev());

    let pick = rand_choice(&mut rng, fine.nrows())?;
    println!("Randomly picked trace {}: {}", pick, fine.rows()[pick]);

    Ok(())
}
