//! digit-scope: headless rendering of layer-activation diagrams.
//!
//! Run with:
//!   cargo run --bin digit-scope -- render --input digit.png --out diagram.png
//!   cargo run --bin digit-scope -- init-model --out trained_models/random.json
//!
//! Set `RUST_LOG=debug` for layout details.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use digit_scope::util::image::image_bytes_to_grayscale_input;
use digit_scope::{ActivationDiagram, DrawingGrid, Network, NetworkSpec};

#[derive(Parser, Debug)]
#[command(name = "digit-scope", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a model on one input and write its activation diagram as PNG.
    Render {
        /// Model JSON; a randomly initialized MNIST-shaped network when omitted.
        #[arg(long)]
        model: Option<PathBuf>,

        /// Digit image; a blank grid when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Treat the input as dark ink on a light background.
        #[arg(long, default_value_t = false)]
        invert: bool,

        /// Where to write the diagram.
        #[arg(long, default_value = "diagram.png")]
        out: PathBuf,
    },

    /// Write a randomly initialized MNIST-shaped network as JSON.
    InitModel {
        #[arg(long)]
        out: PathBuf,
    },
}

fn load_model(path: Option<&Path>) -> Result<Network, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Network::load_json(path)?),
        None => {
            info!("no model given; using a randomly initialized network");
            Ok(Network::from_spec(&NetworkSpec::mnist_default()))
        }
    }
}

fn input_side(network: &Network) -> usize {
    network.metadata.as_ref().and_then(|m| m.square_image_side()).unwrap_or(28)
}

fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Render { model, input, invert, out } => {
            let network = load_model(model.as_deref())?;
            let side = input_side(&network);
            let input = match input {
                Some(path) => {
                    let bytes = std::fs::read(&path)?;
                    image_bytes_to_grayscale_input(&bytes, side as u32, invert)?
                }
                None => DrawingGrid::new(side, 0.0, 0.0).to_input(),
            };

            let diagram = ActivationDiagram::trace(&network, &input)?;
            let png = diagram.draw()?.into_inner();
            std::fs::write(&out, png)?;
            info!(
                out = %out.display(),
                widths = ?diagram.widths(),
                predicted = ?diagram.predicted_class(),
                "diagram written"
            );
        }
        Command::InitModel { out } => {
            let network = Network::from_spec(&NetworkSpec::mnist_default());
            network.save_json(&out)?;
            info!(out = %out.display(), "model written");
        }
    }
    Ok(())
}
