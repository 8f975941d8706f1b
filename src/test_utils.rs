//! Test utilities for carveops
//!
//! Deterministic image, mask, and energy constructors shared by the unit
//! tests. Only compiled when running tests.

use std::ops::Range;

use image::{Luma, Rgb};
use itertools::iproduct;

use crate::carveops::energy::EnergyMap;
use crate::Image;

/// Creates an image where every pixel has the same color.
pub fn create_uniform_image(width: u32, height: u32, color: Rgb<u8>) -> Image<Rgb<u8>> {
    Image::from_pixel(width, height, color)
}

/// Creates a row-uniform image with a single vertical step edge: columns
/// left of `width / 2` hold `dark`, the rest hold `bright`.
pub fn create_step_image(width: u32, height: u32, dark: u8, bright: u8) -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let v = if x < width / 2 { dark } else { bright };
        image.put_pixel(x, y, Rgb([v, v, v]));
    });
    image
}

/// Creates an image with smooth ramps in all channels, so every interior
/// pixel has non-zero gradient energy.
pub fn create_gradient_image(width: u32, height: u32) -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let r = ((x * 255) / width) as u8;
        let g = ((y * 255) / height) as u8;
        let b = ((x + y) * 255 / (width + height)) as u8;
        image.put_pixel(x, y, Rgb([r, g, b]));
    });
    image
}

/// Creates a binary mask marking the rectangle `columns` x `rows` as
/// object (255) and everything else as background (0).
pub fn create_block_mask(
    width: u32,
    height: u32,
    columns: Range<u32>,
    rows: Range<u32>,
) -> Image<Luma<u8>> {
    let mut mask: Image<Luma<u8>> = Image::new(width, height);
    iproduct!(rows, columns).for_each(|(y, x)| {
        mask.put_pixel(x, y, Luma([255]));
    });
    mask
}

/// Builds an energy map from row-major samples.
///
/// # Panics
///
/// Panics if `samples` does not hold exactly `width * height` values.
pub fn create_energy_map(width: u32, height: u32, samples: &[f32]) -> EnergyMap {
    assert_eq!(samples.len(), (width * height) as usize);
    EnergyMap::from_raw(width, height, samples.to_vec()).unwrap()
}
