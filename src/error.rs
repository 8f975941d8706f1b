use thiserror::Error;

/// Error type for energy field computation
///
/// Energy computation itself is a total function over non-empty images;
/// the only failure mode is handing `masked_energy` a mask whose shape
/// does not match the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyError {
    /// Image and mask dimensions do not match
    #[error("Image and mask dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Image dimensions (width, height)
        expected: (u32, u32),
        /// Mask dimensions (width, height)
        actual: (u32, u32),
    },
}

/// Error type for mask-guided object removal
#[derive(Debug, Error)]
pub enum ObjectRemovalError {
    /// Image or mask has a zero dimension
    ///
    /// Nothing partial is attempted: a zero-width or zero-height buffer
    /// cannot carry a seam.
    #[error("Degenerate input: image dimensions {width}x{height} must be non-zero")]
    DegenerateInput { width: u32, height: u32 },

    /// Image and mask dimensions do not match
    #[error("Image and mask dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The configured shrink bound admits more seam removals than the
    /// restore phase could re-insert
    ///
    /// The restore phase removes one further seam per re-inserted seam, so
    /// the image must be wide enough to survive twice the shrink depth.
    #[error(
        "Shrink bound of {max_iterations} iterations is irrecoverable for width {width}; \
         lower the maximum shrink fraction"
    )]
    InvalidShrinkBound { width: u32, max_iterations: u32 },

    /// The external segmentation step failed
    #[error("Segmentation failed")]
    Segmentation(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Energy computation rejected the image/mask pair
    #[error(transparent)]
    Energy(#[from] EnergyError),
}

/// Error type for seam-carving resize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// A target dimension exceeds the corresponding source dimension
    ///
    /// Seam carving only shrinks; growing back to an original size is the
    /// object-removal orchestrator's job, not the resizer's.
    #[error("Resize target {target:?} exceeds source dimensions {source_dims:?}")]
    InvalidDimensions {
        /// Requested dimensions (width, height)
        target: (u32, u32),
        /// Source dimensions (width, height)
        source_dims: (u32, u32),
    },

    /// Source image or target size has a zero dimension
    #[error("Degenerate input: dimensions {width}x{height} must be non-zero")]
    DegenerateInput { width: u32, height: u32 },
}
