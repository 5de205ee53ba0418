use crate::error::MorphError;

/// Identifiers for the built-in structuring element catalog.
///
/// The catalog is a closed set; extending it means adding a variant and its
/// mask pattern here, the engines are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelId {
    /// Full 3x3 square, all nine cells active.
    Square3,
    /// 3x3 plus-shaped cross: center row and center column.
    Cross3,
    /// 3x3 X: the four corners and the center.
    X3,
    /// 1x3 horizontal line embedded in a 3x3 grid, only the middle row active.
    HLine3,
    /// 5x5 diamond: cells within Manhattan distance 2 of the center.
    Diamond5,
}

impl KernelId {
    /// Resolve a numeric identifier into a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::UnsupportedKernelId`] for identifiers outside
    /// `1..=5`.
    pub fn from_id(id: u8) -> Result<Self, MorphError> {
        match id {
            1 => Ok(Self::Square3),
            2 => Ok(Self::Cross3),
            3 => Ok(Self::X3),
            4 => Ok(Self::HLine3),
            5 => Ok(Self::Diamond5),
            _ => Err(MorphError::UnsupportedKernelId(id)),
        }
    }

    /// The numeric identifier of this catalog entry.
    pub fn id(&self) -> u8 {
        match self {
            Self::Square3 => 1,
            Self::Cross3 => 2,
            Self::X3 => 3,
            Self::HLine3 => 4,
            Self::Diamond5 => 5,
        }
    }

    /// Display name of this catalog entry.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Square3 => "square3x3",
            Self::Cross3 => "cross3x3",
            Self::X3 => "x3x3",
            Self::HLine3 => "hline1x3",
            Self::Diamond5 => "diamond5x5",
        }
    }

    /// Build the structuring element mask for this catalog entry.
    pub fn build(&self) -> StructuringElement {
        match self {
            Self::Square3 => square3(),
            Self::Cross3 => cross3(),
            Self::X3 => x3(),
            Self::HLine3 => hline3(),
            Self::Diamond5 => diamond5(),
        }
    }
}

/// A binary structuring element.
///
/// The mask is stored as a flat row-major boolean grid where `true` marks an
/// active neighbor offset relative to the center cell. Dimensions are always
/// odd so a unique center exists; the element is immutable once built and is
/// shared read-only across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    data: Vec<bool>,
    width: usize,
    height: usize,
}

impl StructuringElement {
    /// Create a structuring element from a flat row-major boolean mask.
    ///
    /// # Errors
    ///
    /// Fails if the mask is empty, its length does not match the dimensions,
    /// either dimension is even, or no cell is active.
    pub fn from_mask(data: Vec<bool>, width: usize, height: usize) -> Result<Self, MorphError> {
        if width == 0 || height == 0 {
            return Err(MorphError::EmptyKernel);
        }

        if data.len() != width * height {
            return Err(MorphError::InvalidKernelLength(data.len(), width * height));
        }

        if width % 2 == 0 || height % 2 == 0 {
            return Err(MorphError::EvenKernelDimensions(height, width));
        }

        if data.iter().all(|&active| !active) {
            return Err(MorphError::InactiveKernel);
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// The width of the mask.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the mask.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The mask as a flat row-major slice.
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// The symmetric neighborhood half-extents `(rows, cols)` of the mask.
    pub fn radius(&self) -> (usize, usize) {
        (self.height / 2, self.width / 2)
    }

    /// Whether the mask cell at `(row, col)` is active.
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.data[row * self.width + col]
    }
}

fn square3() -> StructuringElement {
    StructuringElement {
        data: vec![true; 9],
        width: 3,
        height: 3,
    }
}

fn cross3() -> StructuringElement {
    let mut data = vec![false; 9];
    for i in 0..3 {
        data[1 * 3 + i] = true;
        data[i * 3 + 1] = true;
    }
    StructuringElement {
        data,
        width: 3,
        height: 3,
    }
}

fn x3() -> StructuringElement {
    let mut data = vec![false; 9];
    for &idx in &[0, 2, 4, 6, 8] {
        data[idx] = true;
    }
    StructuringElement {
        data,
        width: 3,
        height: 3,
    }
}

fn hline3() -> StructuringElement {
    let mut data = vec![false; 9];
    for i in 0..3 {
        data[1 * 3 + i] = true;
    }
    StructuringElement {
        data,
        width: 3,
        height: 3,
    }
}

fn diamond5() -> StructuringElement {
    let mut data = vec![false; 25];
    let c = 2i32;
    for i in 0..5i32 {
        for j in 0..5i32 {
            data[(i * 5 + j) as usize] = (i - c).abs() + (j - c).abs() <= 2;
        }
    }
    StructuringElement {
        data,
        width: 5,
        height: 5,
    }
}
