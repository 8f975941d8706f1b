use image::{Pixel, Primitive};
use imageproc::definitions::Clamp;

use crate::carveops::seam::{Seam, SeamDirection};
use crate::Image;

/// Removes a seam from the image, shrinking it by one along the seam's
/// axis.
///
/// Every pixel past the seam coordinate shifts one position toward it, for
/// all channels. Works on any pixel type, so the same call keeps an
/// accompanying mask buffer positionally synchronized with its image:
/// remove the identical seam from both.
///
/// # Panics
///
/// Panics if the seam length does not match the image's seam-axis extent,
/// if a seam coordinate is out of range, or if removal would leave a zero
/// dimension.
pub fn remove_seam<P: Pixel>(image: &Image<P>, seam: &Seam) -> Image<P> {
    let (width, height) = image.dimensions();
    match seam.direction() {
        SeamDirection::Vertical => {
            assert_eq!(seam.len(), height as usize, "seam length must equal height");
            assert!(width >= 2, "cannot remove a vertical seam from width {width}");

            let mut out = Image::new(width - 1, height);
            for y in 0..height {
                let seam_x = seam.path()[y as usize];
                assert!(seam_x < width, "seam coordinate {seam_x} out of range");
                for x in 0..width - 1 {
                    let src_x = if x < seam_x { x } else { x + 1 };
                    out.put_pixel(x, y, *image.get_pixel(src_x, y));
                }
            }
            out
        }
        SeamDirection::Horizontal => {
            assert_eq!(seam.len(), width as usize, "seam length must equal width");
            assert!(height >= 2, "cannot remove a horizontal seam from height {height}");

            let mut out = Image::new(width, height - 1);
            for x in 0..width {
                let seam_y = seam.path()[x as usize];
                assert!(seam_y < height, "seam coordinate {seam_y} out of range");
                for y in 0..height - 1 {
                    let src_y = if y < seam_y { y } else { y + 1 };
                    out.put_pixel(x, y, *image.get_pixel(x, src_y));
                }
            }
            out
        }
    }
}

/// Re-inserts a vertical seam, growing the image by one column.
///
/// `offset` is added to every seam coordinate before it is applied: a seam
/// recorded during iteration *k* of a shrink phase replays against a buffer
/// that has already grown by the *k* previously re-inserted seams, so the
/// caller passes the number of insertions performed so far.
///
/// Rows whose offset coordinate lands on column 0 or on the last column of
/// the pre-extension buffer are skipped: their content is copied unchanged
/// and the trailing column duplicates the row's last pixel. Everywhere
/// else the vacated position is filled with the per-channel average of its
/// new left/right neighbors; insertion is lossy by design.
///
/// # Panics
///
/// Panics if the seam is not vertical, its length does not match the
/// image height, or the image has zero width.
pub fn insert_vertical_seam<P, S>(image: &Image<P>, seam: &Seam, offset: u32) -> Image<P>
where
    P: Pixel<Subpixel = S>,
    S: Primitive + Into<f32> + Clamp<f32>,
{
    assert_eq!(
        seam.direction(),
        SeamDirection::Vertical,
        "insert_vertical_seam requires a vertical seam"
    );
    let (width, height) = image.dimensions();
    assert!(width >= 1, "cannot insert a vertical seam into width {width}");
    assert_eq!(seam.len(), height as usize, "seam length must equal height");

    let mut out = Image::new(width + 1, height);
    for y in 0..height {
        let seam_x = seam.path()[y as usize] + offset;
        if seam_x == 0 || seam_x >= width - 1 {
            for x in 0..width {
                out.put_pixel(x, y, *image.get_pixel(x, y));
            }
            out.put_pixel(width, y, *image.get_pixel(width - 1, y));
            continue;
        }

        for x in 0..seam_x {
            out.put_pixel(x, y, *image.get_pixel(x, y));
        }
        for x in seam_x..width {
            out.put_pixel(x + 1, y, *image.get_pixel(x, y));
        }
        let filled = average_pixel(image.get_pixel(seam_x - 1, y), image.get_pixel(seam_x, y));
        out.put_pixel(seam_x, y, filled);
    }
    out
}

/// Re-inserts a horizontal seam, growing the image by one row.
///
/// The transpose of [`insert_vertical_seam`], with the same offset and
/// skip-at-edge rules.
///
/// # Panics
///
/// Panics if the seam is not horizontal, its length does not match the
/// image width, or the image has zero height.
pub fn insert_horizontal_seam<P, S>(image: &Image<P>, seam: &Seam, offset: u32) -> Image<P>
where
    P: Pixel<Subpixel = S>,
    S: Primitive + Into<f32> + Clamp<f32>,
{
    assert_eq!(
        seam.direction(),
        SeamDirection::Horizontal,
        "insert_horizontal_seam requires a horizontal seam"
    );
    let (width, height) = image.dimensions();
    assert!(height >= 1, "cannot insert a horizontal seam into height {height}");
    assert_eq!(seam.len(), width as usize, "seam length must equal width");

    let mut out = Image::new(width, height + 1);
    for x in 0..width {
        let seam_y = seam.path()[x as usize] + offset;
        if seam_y == 0 || seam_y >= height - 1 {
            for y in 0..height {
                out.put_pixel(x, y, *image.get_pixel(x, y));
            }
            out.put_pixel(x, height, *image.get_pixel(x, height - 1));
            continue;
        }

        for y in 0..seam_y {
            out.put_pixel(x, y, *image.get_pixel(x, y));
        }
        for y in seam_y..height {
            out.put_pixel(x, y + 1, *image.get_pixel(x, y));
        }
        let filled = average_pixel(image.get_pixel(x, seam_y - 1), image.get_pixel(x, seam_y));
        out.put_pixel(x, seam_y, filled);
    }
    out
}

#[inline]
fn average_pixel<P, S>(left: &P, right: &P) -> P
where
    P: Pixel<Subpixel = S>,
    S: Primitive + Into<f32> + Clamp<f32>,
{
    left.map2(right, |a, b| S::clamp((a.into() + b.into()) / 2.0))
}
