use image::Rgb;

use crate::carveops::editor::remove_seam;
use crate::carveops::energy::gradient_energy;
use crate::carveops::seam::{find_horizontal_seam, find_vertical_seam};
use crate::error::ResizeError;
use crate::utils::validate_non_empty_image;
use crate::Image;

/// Content-aware shrink to an explicit target size.
pub trait SeamCarveResize {
    /// Carves seams out of the image until it is exactly
    /// `target_width x target_height`.
    ///
    /// While both axes still need reduction, the best vertical and best
    /// horizontal seam are computed from the same energy field and the
    /// cheaper one is removed (ties prefer vertical). Energy is recomputed
    /// from scratch every iteration; a removal reshapes every subsequent
    /// row and column, so the field is not reusable.
    ///
    /// This consumes the original image.
    ///
    /// # Errors
    ///
    /// * `ResizeError::InvalidDimensions` - A target dimension exceeds its
    ///   source dimension (carving only shrinks)
    /// * `ResizeError::DegenerateInput` - Source or target has a zero
    ///   dimension
    fn seam_carve_resize(
        self,
        target_width: u32,
        target_height: u32,
    ) -> Result<Image<Rgb<u8>>, ResizeError>;
}

impl SeamCarveResize for Image<Rgb<u8>> {
    fn seam_carve_resize(
        self,
        target_width: u32,
        target_height: u32,
    ) -> Result<Image<Rgb<u8>>, ResizeError> {
        let (width, height) = self.dimensions();
        validate_non_empty_image(width, height, "seam_carve_resize")
            .map_err(|_| ResizeError::DegenerateInput { width, height })?;
        validate_non_empty_image(target_width, target_height, "seam_carve_resize").map_err(
            |_| ResizeError::DegenerateInput {
                width: target_width,
                height: target_height,
            },
        )?;
        if target_width > width || target_height > height {
            return Err(ResizeError::InvalidDimensions {
                target: (target_width, target_height),
                source_dims: (width, height),
            });
        }

        let mut current = self;
        while current.width() > target_width || current.height() > target_height {
            let energy = gradient_energy(&current);
            let needs_width = current.width() > target_width;
            let needs_height = current.height() > target_height;

            let seam = if needs_width && needs_height {
                let vertical = find_vertical_seam(&energy);
                let horizontal = find_horizontal_seam(&energy);
                if horizontal.energy() < vertical.energy() {
                    horizontal
                } else {
                    vertical
                }
            } else if needs_width {
                find_vertical_seam(&energy)
            } else {
                find_horizontal_seam(&energy)
            };

            current = remove_seam(&current, &seam);
        }
        Ok(current)
    }
}
