/// digit-scope GUI
///
/// Paint a digit on the grid on the left; every poll interval the model is
/// run on a background thread and its layer activations are drawn on the
/// right.
///
/// Run with:
///   cargo run --bin digit-scope-gui --release -- --model trained_models/mnist.json
///
/// File > New clears the grid.

mod app;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use digit_scope::{AppConfig, Network, NetworkSpec};

use app::ScopeApp;

#[derive(Parser, Debug)]
#[command(name = "digit-scope-gui", version, about)]
pub struct Args {
    /// Model JSON; a randomly initialized MNIST-shaped network when omitted.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Session config JSON (grid size, poll interval, brush strength).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load_json(path)?,
        None => AppConfig::default(),
    };

    let network = match &args.model {
        Some(path) => Network::load_json(path)?,
        None => {
            info!("no model given; using a randomly initialized network");
            Network::from_spec(&NetworkSpec::mnist_default())
        }
    };
    // The model decides the input size when it declares one.
    if let Some(side) = network.metadata.as_ref().and_then(|m| m.square_image_side()) {
        config.grid_size = side;
    }
    info!(model = %network.name, grid = config.grid_size, "starting session");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 860.0])
            .with_title("digit-scope"),
        ..Default::default()
    };
    let model = Arc::new(network);
    eframe::run_native(
        "digit-scope",
        options,
        Box::new(move |_cc| Ok(Box::new(ScopeApp::new(model, config)))),
    )?;
    Ok(())
}
