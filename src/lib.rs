#![forbid(unsafe_code)]

pub mod driver;
pub mod ease;
pub mod error;
pub mod model;
pub mod scroll;
pub mod viewport;

pub use driver::{drive_fixed, drive_fixed_with, drive_realtime};
pub use ease::Ease;
pub use error::{GlideError, GlideResult};
pub use model::{ParsedRequest, Scene, ScrollRequest, parse_ease, parse_request};
pub use scroll::{ScrollToElementOpts, ScrollToTopOpts, Scroller, Target};
pub use viewport::{NodeId, SimViewport, Viewport};
