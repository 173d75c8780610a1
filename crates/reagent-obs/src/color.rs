//! Colour policies mapping a cell's `(a, b)` pair to an RGB triple.

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// `(0, 0, 0)`.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    /// `(255, 255, 255)`.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    /// `(255, 0, 255)`, the default marker for non-finite cells.
    pub const MAGENTA: Rgb8 = Rgb8::new(255, 0, 255);

    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Converts one cell's concentrations into a colour.
///
/// Implementations must be total: every `(a, b)`, including NaN and
/// infinities, maps to some colour.
pub trait ColorPolicy: Send + Sync {
    /// Colour of a cell with concentrations `a` and `b`.
    fn color(&self, a: f64, b: f64) -> Rgb8;
}

impl<F> ColorPolicy for F
where
    F: Fn(f64, f64) -> Rgb8 + Send + Sync,
{
    fn color(&self, a: f64, b: f64) -> Rgb8 {
        self(a, b)
    }
}

/// Quantise a concentration to a channel byte: `floor(x * 255)` clamped to
/// `[0, 255]`. NaN maps to 0.
pub fn quantize(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Source of a single colour channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Concentration of A.
    A,
    /// Concentration of B.
    B,
    /// Always 0.
    Zero,
    /// Always 255.
    Full,
}

impl Channel {
    fn sample(self, a: f64, b: f64) -> u8 {
        match self {
            Channel::A => quantize(a),
            Channel::B => quantize(b),
            Channel::Zero => 0,
            Channel::Full => 255,
        }
    }
}

/// Per-channel assignment of concentrations to colours.
///
/// Cells where `a` or `b` is not finite render as `non_finite`.
///
/// # Examples
///
/// ```
/// use reagent_obs::{ChannelMap, ColorPolicy, Rgb8};
///
/// assert_eq!(ChannelMap::RED_BLUE.color(1.0, 0.5), Rgb8::new(255, 0, 127));
/// assert_eq!(ChannelMap::RED_CYAN.color(1.0, 0.5), Rgb8::new(255, 127, 127));
/// assert_eq!(ChannelMap::RED_BLUE.color(f64::NAN, 0.0), Rgb8::MAGENTA);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelMap {
    /// Red source.
    pub red: Channel,
    /// Green source.
    pub green: Channel,
    /// Blue source.
    pub blue: Channel,
    /// Colour for cells with a non-finite concentration.
    pub non_finite: Rgb8,
}

impl ChannelMap {
    /// `R = A, G = 0, B = B`.
    pub const RED_BLUE: ChannelMap = ChannelMap {
        red: Channel::A,
        green: Channel::Zero,
        blue: Channel::B,
        non_finite: Rgb8::MAGENTA,
    };

    /// `R = A, G = B, B = B`.
    pub const RED_CYAN: ChannelMap = ChannelMap {
        red: Channel::A,
        green: Channel::B,
        blue: Channel::B,
        non_finite: Rgb8::MAGENTA,
    };

    /// Same channels, different marker for non-finite cells.
    pub fn with_non_finite(mut self, color: Rgb8) -> Self {
        self.non_finite = color;
        self
    }
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self::RED_BLUE
    }
}

impl ColorPolicy for ChannelMap {
    fn color(&self, a: f64, b: f64) -> Rgb8 {
        if !a.is_finite() || !b.is_finite() {
            return self.non_finite;
        }
        Rgb8::new(
            self.red.sample(a, b),
            self.green.sample(a, b),
            self.blue.sample(a, b),
        )
    }
}

/// Two-colour map: `above` where `a > b`, `below` elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Threshold {
    /// Colour where A dominates.
    pub above: Rgb8,
    /// Colour where B dominates or ties.
    pub below: Rgb8,
    /// Colour for cells with a non-finite concentration.
    pub non_finite: Rgb8,
}

impl Default for Threshold {
    /// Black where A dominates, white elsewhere.
    fn default() -> Self {
        Self {
            above: Rgb8::BLACK,
            below: Rgb8::WHITE,
            non_finite: Rgb8::MAGENTA,
        }
    }
}

impl ColorPolicy for Threshold {
    fn color(&self, a: f64, b: f64) -> Rgb8 {
        if !a.is_finite() || !b.is_finite() {
            self.non_finite
        } else if a > b {
            self.above
        } else {
            self.below
        }
    }
}
