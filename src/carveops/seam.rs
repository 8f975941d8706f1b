use crate::carveops::energy::EnergyMap;

/// Axis a seam runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamDirection {
    /// One coordinate (a column) per row, top to bottom.
    Vertical,
    /// One coordinate (a row) per column, left to right.
    Horizontal,
}

/// A connected minimum-energy path across one axis of an image.
///
/// Holds exactly one coordinate per row (vertical) or per column
/// (horizontal); adjacent coordinates differ by at most 1. Produced by
/// [`find_vertical_seam`]/[`find_horizontal_seam`] and consumed by the seam
/// editor; the recorded energy is the sum of the energy samples along the
/// path.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    direction: SeamDirection,
    energy: f32,
    path: Vec<u32>,
}

impl Seam {
    pub(crate) fn new(direction: SeamDirection, energy: f32, path: Vec<u32>) -> Self {
        Self {
            direction,
            energy,
            path,
        }
    }

    pub fn direction(&self) -> SeamDirection {
        self.direction
    }

    /// Total energy along the seam path.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// The cross-axis coordinate for each row (vertical) or column
    /// (horizontal), in top-to-bottom / left-to-right order.
    pub fn path(&self) -> &[u32] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Finds the vertical seam with minimum cumulative energy.
///
/// Cumulative cost is built top-down: `cost[0][c] = energy[0][c]`, and each
/// later cell adds the cheapest of its up-to-three upper neighbors.
/// Tie-breaks are deterministic so results are reproducible: straight
/// beats left beats right, and the final scan keeps the smallest column.
///
/// # Panics
///
/// Panics if the energy map has a zero dimension.
pub fn find_vertical_seam(energy: &EnergyMap) -> Seam {
    find_seam(energy, SeamDirection::Vertical)
}

/// Finds the horizontal seam with minimum cumulative energy.
///
/// The transpose of [`find_vertical_seam`], with the same tie-break rules.
///
/// # Panics
///
/// Panics if the energy map has a zero dimension.
pub fn find_horizontal_seam(energy: &EnergyMap) -> Seam {
    find_seam(energy, SeamDirection::Horizontal)
}

// One DP core for both axes: "major" walks along the seam, "minor" across
// it. Row-to-row dependencies keep this sequential.
fn find_seam(energy: &EnergyMap, direction: SeamDirection) -> Seam {
    let (width, height) = energy.dimensions();
    assert!(
        width > 0 && height > 0,
        "seam search requires a non-empty energy map"
    );

    let samples = energy.as_raw();
    let stride = width as usize;
    let (major_len, minor_len) = match direction {
        SeamDirection::Vertical => (height as usize, width as usize),
        SeamDirection::Horizontal => (width as usize, height as usize),
    };
    let at = |major: usize, minor: usize| match direction {
        SeamDirection::Vertical => samples[major * stride + minor],
        SeamDirection::Horizontal => samples[minor * stride + major],
    };

    let mut cost = vec![0.0f32; major_len * minor_len];
    let mut parent = vec![0u32; major_len * minor_len];

    for minor in 0..minor_len {
        cost[minor] = at(0, minor);
    }

    for major in 1..major_len {
        let row = major * minor_len;
        let prev_row = row - minor_len;
        for minor in 0..minor_len {
            // Candidates in tie-break order: straight, left, right.
            let mut best_minor = minor;
            let mut best = cost[prev_row + minor];
            if minor > 0 && cost[prev_row + minor - 1] < best {
                best = cost[prev_row + minor - 1];
                best_minor = minor - 1;
            }
            if minor + 1 < minor_len && cost[prev_row + minor + 1] < best {
                best = cost[prev_row + minor + 1];
                best_minor = minor + 1;
            }
            cost[row + minor] = at(major, minor) + best;
            parent[row + minor] = best_minor as u32;
        }
    }

    // Smallest index wins ties, hence the strict comparison.
    let last_row = (major_len - 1) * minor_len;
    let mut end_minor = 0;
    let mut total = cost[last_row];
    for minor in 1..minor_len {
        if cost[last_row + minor] < total {
            total = cost[last_row + minor];
            end_minor = minor;
        }
    }

    let mut path = vec![0u32; major_len];
    let mut minor = end_minor;
    for major in (0..major_len).rev() {
        path[major] = minor as u32;
        if major > 0 {
            minor = parent[major * minor_len + minor] as usize;
        }
    }

    Seam::new(direction, total, path)
}
