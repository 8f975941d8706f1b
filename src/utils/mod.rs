//! Internal utility functions for carveops.
//!
//! This module contains common validation and mask helpers used across the
//! carving operations.

use image::Luma;

use crate::Image;

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise an error
pub fn validate_non_empty_image(width: u32, height: u32, context: &str) -> Result<(), String> {
    if width == 0 || height == 0 {
        Err(format!("{}: Image dimensions must be non-zero", context))
    } else {
        Ok(())
    }
}

/// Validates that two images have matching dimensions.
///
/// # Arguments
///
/// * `width1` - The width of the first image
/// * `height1` - The height of the first image
/// * `width2` - The width of the second image
/// * `height2` - The height of the second image
/// * `context` - A description of the context for error messages
///
/// # Returns
///
/// `Ok(())` if the dimensions match, otherwise an error
pub fn validate_matching_dimensions(
    width1: u32,
    height1: u32,
    width2: u32,
    height2: u32,
    context: &str,
) -> Result<(), String> {
    if width1 != width2 || height1 != height2 {
        Err(format!(
            "{}: Image dimensions must match. Got {}x{} and {}x{}",
            context, width1, height1, width2, height2
        ))
    } else {
        Ok(())
    }
}

/// Counts the mask samples marked as "object".
///
/// Any nonzero sample counts, matching the thresholding-free way the
/// segmentation output is consumed.
pub fn count_nonzero_mask(mask: &Image<Luma<u8>>) -> u64 {
    mask.as_raw().iter().filter(|&&sample| sample != 0).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_image() {
        assert!(validate_non_empty_image(1, 1, "test").is_ok());
        assert!(validate_non_empty_image(0, 5, "test").is_err());
        assert!(validate_non_empty_image(5, 0, "test").is_err());
    }

    #[test]
    fn test_validate_matching_dimensions() {
        assert!(validate_matching_dimensions(4, 3, 4, 3, "test").is_ok());
        assert!(validate_matching_dimensions(4, 3, 3, 4, "test").is_err());
    }

    #[test]
    fn test_count_nonzero_mask() {
        let mut mask: Image<Luma<u8>> = Image::new(3, 2);
        assert_eq!(count_nonzero_mask(&mask), 0);
        mask.put_pixel(0, 0, Luma([255]));
        mask.put_pixel(2, 1, Luma([1]));
        assert_eq!(count_nonzero_mask(&mask), 2);
    }
}
