//! Builds `x + 2` over `{x: 5, y: 10}` and prints the result.
//!
//! Run with `cargo run --features demo --bin arbor-demo`; set
//! `RUST_LOG=arbor=trace` to see each evaluated node.

use arbor::{Context, EvalConfig, Evaluator, Expr};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::from_iter([("x", 5), ("y", 10)]);
    let expr = Expr::add(Expr::variable("x"), Expr::constant(2));

    let evaluator = Evaluator::new(EvalConfig::new().with_trace(true));
    let value = evaluator.evaluate(&expr, &ctx)?;
    println!("{}", value);

    Ok(())
}
