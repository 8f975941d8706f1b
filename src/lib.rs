mod carveops;
mod error;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use carveops::convergence::ConvergenceTracker;
pub use carveops::editor::{insert_horizontal_seam, insert_vertical_seam, remove_seam};
pub use carveops::energy::{gradient_energy, masked_energy, EnergyMap, MASKED_ENERGY};
pub use carveops::object_removal::{
    FrameLog, FrameRecorder, NullRecorder, ObjectRemover, Segmenter, DEFAULT_MAX_SHRINK_FRACTION,
    DEFAULT_STALL_THRESHOLD,
};
pub use carveops::resize::SeamCarveResize;
pub use carveops::seam::{find_horizontal_seam, find_vertical_seam, Seam, SeamDirection};
pub use error::{EnergyError, ObjectRemovalError, ResizeError};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
