use image::{imageops, Luma, Rgb};
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use imageproc::map::map_colors2;
#[cfg(not(feature = "rayon"))]
use itertools::izip;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::EnergyError;
use crate::utils::validate_matching_dimensions;
use crate::Image;

/// Per-pixel energy values for one image, same dimensions as that image.
///
/// Energy is not incrementally maintained: recompute it after every
/// mutation of the image or mask it was derived from.
pub type EnergyMap = Image<Luma<f32>>;

/// Energy assigned to pixels marked "object" by the mask.
///
/// A near-zero value here is what biases the seam search into the masked
/// region: a path through the object is the cheapest path available.
pub const MASKED_ENERGY: f32 = 0.0;

/// Computes the gradient-magnitude energy of every pixel.
///
/// The image is converted to grayscale, convolved with the horizontal and
/// vertical Sobel kernels, and the absolute responses are combined with
/// equal 0.5/0.5 weights. Border pixels use clamped (replicated) neighbor
/// lookups; this is the single border policy used by every energy consumer
/// in this crate.
///
/// # Panics
///
/// Panics if the image has a zero dimension.
pub fn gradient_energy(image: &Image<Rgb<u8>>) -> EnergyMap {
    let (width, height) = image.dimensions();
    assert!(
        width > 0 && height > 0,
        "gradient_energy requires a non-empty image"
    );

    let gray = imageops::grayscale(image);
    let gx = horizontal_sobel(&gray);
    let gy = vertical_sobel(&gray);

    let mut energy = EnergyMap::new(width, height);
    combine_gradients(&mut energy, gx.as_raw(), gy.as_raw());
    energy
}

/// Computes gradient energy, then forces every masked pixel to
/// [`MASKED_ENERGY`].
///
/// Any nonzero mask sample counts as "object". The returned field is what
/// makes seam removal route through the object instead of around it.
///
/// # Errors
///
/// * `EnergyError::DimensionMismatch` - When image and mask dimensions differ
///
/// # Panics
///
/// Panics if the image has a zero dimension.
pub fn masked_energy(
    image: &Image<Rgb<u8>>,
    mask: &Image<Luma<u8>>,
) -> Result<EnergyMap, EnergyError> {
    let (width, height) = image.dimensions();
    let (mask_width, mask_height) = mask.dimensions();
    validate_matching_dimensions(width, height, mask_width, mask_height, "masked_energy").map_err(
        |_| EnergyError::DimensionMismatch {
            expected: (width, height),
            actual: (mask_width, mask_height),
        },
    )?;

    let energy = gradient_energy(image);
    Ok(map_colors2(&energy, mask, |Luma([e]), Luma([m])| {
        if m != 0 {
            Luma([MASKED_ENERGY])
        } else {
            Luma([e])
        }
    }))
}

// No cross-pixel dependency, so the combine pass may run per-sample in
// parallel without changing the output.
fn combine_gradients(energy: &mut EnergyMap, gx: &[i16], gy: &[i16]) {
    let samples: &mut [f32] = energy;

    #[cfg(feature = "rayon")]
    samples
        .par_iter_mut()
        .zip(gx.par_iter().zip(gy.par_iter()))
        .for_each(|(e, (&dx, &dy))| *e = weighted_magnitude(dx, dy));

    #[cfg(not(feature = "rayon"))]
    izip!(samples.iter_mut(), gx, gy).for_each(|(e, &dx, &dy)| *e = weighted_magnitude(dx, dy));
}

#[inline]
fn weighted_magnitude(dx: i16, dy: i16) -> f32 {
    0.5 * (dx as f32).abs() + 0.5 * (dy as f32).abs()
}
