use image::{Luma, Rgb};

use crate::carveops::convergence::ConvergenceTracker;
use crate::carveops::editor::{insert_vertical_seam, remove_seam};
use crate::carveops::energy::{gradient_energy, masked_energy};
use crate::carveops::seam::find_vertical_seam;
use crate::error::ObjectRemovalError;
use crate::utils::{count_nonzero_mask, validate_matching_dimensions, validate_non_empty_image};
use crate::Image;

/// Default cap on the shrink phase, as a fraction of the original width.
///
/// Assumes no more than a quarter of the width needs to be cut through the
/// object.
pub const DEFAULT_MAX_SHRINK_FRACTION: f32 = 0.25;

/// Default number of flat iterations before the shrink loop gives up.
pub const DEFAULT_STALL_THRESHOLD: u32 = 10;

/// Per-iteration sink for intermediate images.
///
/// Invoked once per shrink iteration (with the shrunk image) and once per
/// restore iteration (with the growing output image). A pure observer: it
/// must never affect the algorithm's outcome.
pub trait FrameRecorder {
    fn record_frame(&mut self, image: &Image<Rgb<u8>>);
}

/// The disabled recorder; does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl FrameRecorder for NullRecorder {
    fn record_frame(&mut self, _image: &Image<Rgb<u8>>) {}
}

/// Recorder that keeps every frame in memory, for diagnostics and tests.
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: Vec<Image<Rgb<u8>>>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Image<Rgb<u8>>] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameRecorder for FrameLog {
    fn record_frame(&mut self, image: &Image<Rgb<u8>>) {
        self.frames.push(image.clone());
    }
}

/// Opaque segmentation capability: image in, same-dimension binary mask
/// out.
///
/// The model producing the mask (and its decode/resize plumbing) lives
/// outside this crate; any nonzero mask sample marks a pixel of the object
/// to remove.
pub trait Segmenter {
    fn segment(
        &self,
        image: &Image<Rgb<u8>>,
    ) -> Result<Image<Luma<u8>>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Mask-guided object removal with preserved image dimensions.
///
/// Runs two phases. SHRINKING removes the masked-energy minimum seam until
/// the mask stops shrinking or the configured width budget is spent.
/// RESTORING then removes one further (unmasked) seam per missing column
/// while re-inserting each just-removed seam into a separate output
/// buffer, growing it back to the original width with the object excised.
#[derive(Debug, Clone)]
pub struct ObjectRemover {
    max_shrink_fraction: f32,
    stall_threshold: u32,
}

impl Default for ObjectRemover {
    fn default() -> Self {
        Self {
            max_shrink_fraction: DEFAULT_MAX_SHRINK_FRACTION,
            stall_threshold: DEFAULT_STALL_THRESHOLD,
        }
    }
}

impl ObjectRemover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shrink budget as a fraction of the original width.
    pub fn with_max_shrink_fraction(mut self, fraction: f32) -> Self {
        self.max_shrink_fraction = fraction;
        self
    }

    /// Sets how many flat mask counts the shrink loop tolerates.
    pub fn with_stall_threshold(mut self, threshold: u32) -> Self {
        self.stall_threshold = threshold;
        self
    }

    /// Removes the masked object from the image.
    ///
    /// The output always has the input's exact dimensions. An all-zero
    /// mask is a no-op returning the original image. A mask that stops
    /// shrinking terminates the loop early and yields a best-effort
    /// result; that is not an error.
    ///
    /// # Errors
    ///
    /// * `ObjectRemovalError::DegenerateInput` - Zero-width or zero-height input
    /// * `ObjectRemovalError::DimensionMismatch` - Mask shape differs from the image
    /// * `ObjectRemovalError::InvalidShrinkBound` - The configured fraction
    ///   admits more removals than the restore phase could recover from
    pub fn remove_object(
        &self,
        image: Image<Rgb<u8>>,
        mask: Image<Luma<u8>>,
    ) -> Result<Image<Rgb<u8>>, ObjectRemovalError> {
        self.remove_object_recorded(image, mask, &mut NullRecorder)
    }

    /// Runs segmentation, then removal, on the same image.
    pub fn remove_segmented_object<S: Segmenter>(
        &self,
        image: Image<Rgb<u8>>,
        segmenter: &S,
    ) -> Result<Image<Rgb<u8>>, ObjectRemovalError> {
        let mask = segmenter
            .segment(&image)
            .map_err(ObjectRemovalError::Segmentation)?;
        self.remove_object(image, mask)
    }

    /// [`remove_object`](Self::remove_object) with a frame sink observing
    /// every iteration.
    pub fn remove_object_recorded(
        &self,
        image: Image<Rgb<u8>>,
        mask: Image<Luma<u8>>,
        recorder: &mut dyn FrameRecorder,
    ) -> Result<Image<Rgb<u8>>, ObjectRemovalError> {
        let (width, height) = image.dimensions();
        let (mask_width, mask_height) = mask.dimensions();
        validate_non_empty_image(width, height, "remove_object")
            .map_err(|_| ObjectRemovalError::DegenerateInput { width, height })?;
        validate_matching_dimensions(width, height, mask_width, mask_height, "remove_object")
            .map_err(|_| ObjectRemovalError::DimensionMismatch {
                expected: (width, height),
                actual: (mask_width, mask_height),
            })?;
        if count_nonzero_mask(&mask) == 0 {
            return Ok(image);
        }

        let original_width = width;
        let max_iterations =
            ((original_width as f32 * self.max_shrink_fraction) as u32).min(original_width);
        // The restore phase removes one further seam per re-inserted seam,
        // so the width must survive twice the shrink depth.
        if max_iterations > 0 && original_width <= 2 * max_iterations {
            return Err(ObjectRemovalError::InvalidShrinkBound {
                width: original_width,
                max_iterations,
            });
        }

        let mut image = image;
        let mut mask = mask;
        let mut tracker = ConvergenceTracker::new(self.stall_threshold);
        let mut energy = masked_energy(&image, &mask)?;

        for _ in 0..max_iterations {
            if !tracker.observe(count_nonzero_mask(&mask)) {
                break;
            }
            let seam = find_vertical_seam(&energy);
            image = remove_seam(&image, &seam);
            mask = remove_seam(&mask, &seam);
            energy = masked_energy(&image, &mask)?;
            recorder.record_frame(&image);
        }

        let mut out = image.clone();
        let deficit = original_width - image.width();
        for i in 0..deficit {
            // The first pass reuses the masked energy left over from the
            // shrink phase; after that the mask's job is done.
            let seam = find_vertical_seam(&energy);
            image = remove_seam(&image, &seam);
            mask = remove_seam(&mask, &seam);
            out = insert_vertical_seam(&out, &seam, i);
            energy = gradient_energy(&image);
            recorder.record_frame(&out);
        }

        debug_assert_eq!(out.dimensions(), (original_width, height));
        debug_assert_eq!(image.dimensions(), mask.dimensions());
        Ok(out)
    }
}
