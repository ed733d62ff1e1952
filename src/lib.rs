//! Re-pads an icon: trims transparent margins, scales the content to a fixed
//! share of a square canvas and centers it there.

pub mod adjuster;
pub mod bbox;
pub mod config;
pub mod error;
pub mod icon_io;
pub mod pad;

pub use adjuster::adjust;
pub use bbox::BoundingBox;
pub use config::{PadConfig, ResizeMode};
pub use error::{PadError, Result};
pub use pad::{pad_image, PadOutcome};
