//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (corresponds to source outputs)
    pub width: u16,
    /// Height in pixels (corresponds to gate outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_SOURCE_OUTPUTS (132)
    /// - height == 0 or height > MAX_GATE_OUTPUTS (162)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_SOURCE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Color channel order of the panel's color filter
///
/// Some panel variants wire the subpixels in BGR order; the controller
/// compensates via the RGB bit of the Memory Access Control register.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorOrder {
    /// Subpixels in RGB order
    #[default]
    Rgb,
    /// Subpixels in BGR order
    Bgr,
}

impl ColorOrder {
    /// The Memory Access Control byte for this channel order
    ///
    /// Row/column exchange bits are fixed (MY | MX); only the RGB bit
    /// (0x08) varies per variant.
    pub fn madctl(self) -> u8 {
        match self {
            Self::Rgb => 0xC0,
            Self::Bgr => 0xC8,
        }
    }
}

/// Panel variant (tab color)
///
/// Hardware revisions of ST7735 panels place the active area at different
/// offsets within the controller's 132x162 frame memory. The variant
/// selects the column/row calibration offsets added to every addressing
/// window; a wrong variant shifts the visible image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Variant {
    /// Red tab: active area at the frame memory origin
    #[default]
    RedTab,
    /// Green tab: active area offset by 2 columns and 1 row
    GreenTab,
}

impl Variant {
    /// The (column, row) calibration offsets for this variant
    pub fn offsets(self) -> (u16, u16) {
        match self {
            Self::RedTab => (0, 0),
            Self::GreenTab => (2, 1),
        }
    }
}

/// Display configuration
///
/// Holds the panel geometry and per-variant calibration constants, fixed
/// at driver construction. Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Panel dimensions
    pub dimensions: Dimensions,
    /// Column calibration offset added to every window X coordinate
    pub col_offset: u16,
    /// Row calibration offset added to every window Y coordinate
    pub row_offset: u16,
    /// Color channel order of the panel
    pub color_order: ColorOrder,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7735::{Builder, ColorOrder, Dimensions, Variant};
///
/// let dims = match Dimensions::new(128, 160) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .variant(Variant::RedTab)
///     .color_order(ColorOrder::Rgb)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Panel dimensions (required)
    dimensions: Option<Dimensions>,
    /// Panel variant selecting default calibration offsets
    variant: Variant,
    /// Explicit offset override, if any
    offsets: Option<(u16, u16)>,
    /// Color channel order
    color_order: ColorOrder,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            variant: Variant::RedTab,
            offsets: None,
            color_order: ColorOrder::Rgb,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the panel variant
    ///
    /// Chooses the calibration offsets unless overridden with
    /// [`offsets`](Self::offsets).
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Override the (column, row) calibration offsets
    ///
    /// For panels whose offsets do not match either tab variant.
    pub fn offsets(mut self, col_offset: u16, row_offset: u16) -> Self {
        self.offsets = Some((col_offset, row_offset));
        self
    }

    /// Set the color channel order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not
    /// set, or `BuilderError::OffsetsOutOfRange` if the offset active area
    /// does not fit within the controller's frame memory.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let (col_offset, row_offset) = self.offsets.unwrap_or_else(|| self.variant.offsets());
        if col_offset + dimensions.width > MAX_SOURCE_OUTPUTS
            || row_offset + dimensions.height > MAX_GATE_OUTPUTS
        {
            return Err(BuilderError::OffsetsOutOfRange {
                col_offset,
                row_offset,
            });
        }
        Ok(Config {
            dimensions,
            col_offset,
            row_offset,
            color_order: self.color_order,
        })
    }
}
