pub use self::registry::{Registry, Spinners};
pub use self::set::{SpinError, SpinnerSet};
pub use self::sink::{CaptureSink, NullSink, RenderSink, TerminalSink};
pub use self::spinner::{Spinner, SpinnerState};
pub use self::ticker::{TickFlow, Ticker};

mod registry;
mod render;
mod set;
mod sink;
mod spinner;
mod ticker;
