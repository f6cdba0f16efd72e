use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use twirl_config::{Config, ConfigError, Options};

use crate::registry::{Registry, Spinners};
use crate::render;
use crate::sink::{NullSink, RenderSink, TerminalSink};
use crate::spinner::{Spinner, SpinnerState};
use crate::ticker::{TickFlow, Ticker};

#[cfg(test)]
#[path = "./set.tests.rs"]
mod set_tests;

/// Possible errors from building or completing a spinner set.
#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    /// Configuration options failed validation.
    #[error("invalid configuration options")]
    Config(#[from] ConfigError),

    /// The set was created without any spinners.
    #[error("at least one spinner is required")]
    NoSpinners,

    /// Two spinners were registered under the same name.
    #[error("duplicate spinner name '{0}'")]
    DuplicateSpinner(String),

    /// The addressed spinner does not exist.
    #[error("unknown spinner name '{0}'")]
    UnknownSpinner(String),

    /// Completion accepts terminal states only.
    #[error("completion requires a terminal state")]
    InvalidState,
}

/// Set of named spinners rendered together as one terminal block.\
/// Animation runs on a background task owned by this struct, so completions
/// can be reported from any thread that holds the set.
pub struct SpinnerSet {
    runtime: Handle,
    config: Arc<Config>,
    registry: Arc<Mutex<Registry>>,
    sink: Arc<Mutex<Box<dyn RenderSink + Send>>>,
    ticker: Ticker,
}

impl SpinnerSet {
    /// Creates new [`SpinnerSet`] that draws on `stderr`.\
    /// **Note** that drawing is suppressed when the `debug` option is set.
    pub fn new(runtime: Handle, spinners: Spinners, options: Options) -> Result<Self, SpinError> {
        let sink: Box<dyn RenderSink + Send> = if options.debug.unwrap_or_default() {
            Box::new(NullSink)
        } else {
            Box::new(TerminalSink::stderr())
        };

        Self::with_sink(runtime, spinners, options, sink)
    }

    /// Creates new [`SpinnerSet`] that draws on the provided sink.
    pub fn with_sink(
        runtime: Handle,
        spinners: Spinners,
        options: Options,
        sink: Box<dyn RenderSink + Send>,
    ) -> Result<Self, SpinError> {
        let config = Config::with_options(options)?;
        let registry = Registry::new(spinners)?;

        Ok(Self {
            runtime,
            config: Arc::new(config),
            registry: Arc::new(Mutex::new(registry)),
            sink: Arc::new(Mutex::new(sink)),
            ticker: Ticker::default(),
        })
    }

    /// Starts the animation task.\
    /// **Note** that it stops the old task if it is running.
    pub fn start(&mut self) {
        let _config = Arc::clone(&self.config);
        let _registry = Arc::clone(&self.registry);
        let _sink = Arc::clone(&self.sink);

        self.ticker
            .start(&self.runtime, self.config.period(), move || tick(&_config, &_registry, &_sink));
    }

    /// Stops the animation task and waits until it is finished.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Marks the named spinner as successfully completed.
    pub fn success(&mut self, name: &str) -> Result<(), SpinError> {
        self.complete(name, SpinnerState::Success)
    }

    /// Marks the named spinner as failed.
    pub fn error(&mut self, name: &str) -> Result<(), SpinError> {
        self.complete(name, SpinnerState::Error)
    }

    /// Returns `true` if every spinner in the set reached a terminal state.
    pub fn all_completed(&self) -> bool {
        self.registry.lock().expect("spinners registry mutex poisoned").all_completed()
    }

    /// Returns the current state of the named spinner.
    pub fn state(&self, name: &str) -> Option<SpinnerState> {
        self.registry
            .lock()
            .expect("spinners registry mutex poisoned")
            .get(name)
            .map(Spinner::state)
    }

    /// Returns `true` if the animation task is still alive.
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Moves the named spinner to the given terminal state, pausing and resuming
    /// the animation around the change so the new glyph shows up on the very next frame.
    pub fn complete(&mut self, name: &str, state: SpinnerState) -> Result<(), SpinError> {
        let was_running = self.is_running();
        self.ticker.stop();

        let result = self.registry.lock().expect("spinners registry mutex poisoned").complete(name, state);
        if was_running || result.is_ok() {
            self.start();
        }

        result
    }
}

fn tick(config: &Config, registry: &Mutex<Registry>, sink: &Mutex<Box<dyn RenderSink + Send>>) -> TickFlow {
    let mut registry = registry.lock().expect("spinners registry mutex poisoned");
    registry.advance_frame(config.frames.len());
    let block = render::render_block(&mut registry, config);
    let all_completed = registry.all_completed();
    drop(registry);

    let mut sink = sink.lock().expect("render sink mutex poisoned");
    let mut result = sink.replace(&block);
    if result.is_ok() && all_completed {
        result = if config.clear_on_complete { sink.clear() } else { sink.finish() };
    }

    match result {
        Ok(()) if all_completed => TickFlow::Stop,
        Ok(()) => TickFlow::Continue,
        Err(error) => {
            tracing::error!("Cannot redraw spinners: {}", error);
            TickFlow::Stop
        },
    }
}
