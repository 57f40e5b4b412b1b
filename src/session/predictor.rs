use std::sync::{mpsc, Arc};
use std::thread;

use tracing::{info, info_span, warn};

use crate::diagram::{ActivationDiagram, DiagramError};
use crate::math::matrix::Matrix;
use crate::network::model::Model;
use crate::session::grid::DrawingGrid;

/// A finished render of the activation diagram.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub png: Vec<u8>,
    pub predicted_class: Option<usize>,
    /// Counts launches; lets the UI tell a new result from one it has shown.
    pub generation: u64,
}

/// Lifecycle of the background prediction.
#[derive(Debug, Clone)]
pub enum PredictionState {
    /// Nothing has been launched yet.
    Idle,
    /// A worker thread is rendering.
    Running,
    /// The most recent worker finished.
    Ready(Prediction),
    /// The most recent worker failed.
    Failed(String),
}

/// What a poll tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Launched,
    Busy,
    Unchanged,
}

type JobResult = Result<Prediction, DiagramError>;

/// Runs at most one diagram render at a time off the UI thread.
///
/// Input changes made while a render is in flight are not queued; the next
/// tick after it finishes sees them.
pub struct Predictor<M> {
    model: Arc<M>,
    state: PredictionState,
    slot: Option<mpsc::Receiver<JobResult>>,
    last_input: Vec<f64>,
    generation: u64,
}

impl<M> Predictor<M>
where
    M: Model + Send + Sync + 'static,
{
    /// `blank` is the grid's starting content; nothing is launched until
    /// the grid differs from it.
    pub fn new(model: Arc<M>, blank: &DrawingGrid) -> Predictor<M> {
        Predictor {
            model,
            state: PredictionState::Idle,
            slot: None,
            last_input: blank.cells().to_vec(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, PredictionState::Running)
    }

    /// Picks up a finished result, if any. Returns true when the state changed.
    pub fn collect(&mut self) -> bool {
        let Some(rx) = &self.slot else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(mpsc::TryRecvError::Empty) => return false,
            Err(mpsc::TryRecvError::Disconnected) => {
                Err("prediction worker exited without a result".to_string())
            }
        };
        self.slot = None;
        self.state = match outcome {
            Ok(prediction) => {
                info!(
                    generation = prediction.generation,
                    predicted = ?prediction.predicted_class,
                    "prediction ready"
                );
                PredictionState::Ready(prediction)
            }
            Err(reason) => {
                warn!(%reason, "prediction failed");
                PredictionState::Failed(reason)
            }
        };
        true
    }

    /// One poll: launch a render unless one is running or the grid has not
    /// changed since the last launch.
    ///
    /// A finished render is never picked up here; it stays `Busy` until
    /// [Predictor::collect] has handed the result over.
    pub fn tick(&mut self, grid: &DrawingGrid) -> Tick {
        if self.is_running() {
            return Tick::Busy;
        }
        if grid.cells() == self.last_input.as_slice() {
            return Tick::Unchanged;
        }

        self.last_input = grid.cells().to_vec();
        self.generation += 1;
        self.launch(grid.to_input(), self.generation);
        Tick::Launched
    }

    fn launch(&mut self, input: Matrix, generation: u64) {
        let (tx, rx) = mpsc::sync_channel(1);
        let model = Arc::clone(&self.model);

        thread::spawn(move || {
            let _span = info_span!("prediction", generation).entered();
            let result = render(&*model, &input, generation);
            // Receiver gone means the session was dropped; nothing to report.
            let _ = tx.send(result);
        });

        self.slot = Some(rx);
        self.state = PredictionState::Running;
    }
}

fn render<M: Model>(model: &M, input: &Matrix, generation: u64) -> JobResult {
    let diagram = ActivationDiagram::trace(model, input)?;
    let png = diagram.draw()?.into_inner();
    Ok(Prediction { png, predicted_class: diagram.predicted_class(), generation })
}
