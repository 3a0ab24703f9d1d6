use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
    str::FromStr,
};

use ordered_float::OrderedFloat;

/// `0` as a complex number.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// The imaginary unit `i`.
pub const I: Complex = Complex::new(0.0, 1.0);

/// An immutable complex number with real and imaginary parts.
///
/// Every operation returns a new value. Nothing guards against `NaN` or
/// infinities: dividing by zero yields IEEE-754 results instead of an error.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

/// Error returned when a complex literal cannot be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComplexError {
    /// The segment of the literal that failed to parse as a number.
    pub segment: String,
    /// The full literal text.
    pub literal: String,
}

impl Display for ParseComplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "invalid number '{}' in complex literal '{}'",
               self.segment, self.literal)
    }
}

impl std::error::Error for ParseComplexError {}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imaginary == 0.0 {
            write!(f, "{}", self.real)
        } else if self.real == 0.0 {
            write!(f, "{}i", self.imaginary)
        } else if self.imaginary < 0.0 {
            write!(f, "{}{}i", self.real, self.imaginary)
        } else {
            write!(f, "{}+{}i", self.real, self.imaginary)
        }
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Complex {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// let c = Complex::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Reads a complex literal such as `3+2i`, `-1`, `4i`, `i` or `-i`.
    ///
    /// Surrounding whitespace and embedded spaces are ignored. Text without an
    /// `i` is a plain real number. Otherwise the last `+` or `-` before the
    /// first `i` (and after the first character) splits the real part from
    /// the imaginary coefficient; a bare sign or an empty coefficient means
    /// `1` with that sign. Anything after the first `i` is ignored.
    ///
    /// # Errors
    /// Returns [`ParseComplexError`] when the real part or the coefficient is
    /// not a valid number.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    ///
    /// assert_eq!(Complex::parse("3+2i").unwrap(), Complex::new(3.0, 2.0));
    /// assert_eq!(Complex::parse(" 1 - i ").unwrap(), Complex::new(1.0, -1.0));
    /// assert_eq!(Complex::parse("-4.5").unwrap(), Complex::new(-4.5, 0.0));
    /// assert!(Complex::parse("1+2+3i").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseComplexError> {
        let text: String = input.trim().chars().filter(|&c| c != ' ').collect();

        match text.as_str() {
            "i" | "+i" => return Ok(I),
            "-i" => return Ok(Self::new(0.0, -1.0)),
            _ => {},
        }

        let number = |segment: &str| {
            segment.parse::<f64>()
                   .map_err(|_| ParseComplexError { segment: segment.to_string(),
                                                    literal: text.clone(), })
        };
        let coefficient = |segment: &str| match segment {
            "" | "+" => Ok(1.0),
            "-" => Ok(-1.0),
            other => number(other),
        };

        let Some(i_pos) = text.find('i') else {
            return Ok(Self::new(number(&text)?, 0.0));
        };

        let head = &text[..i_pos];
        match head.rfind(['+', '-']).filter(|&pos| pos > 0) {
            None => Ok(Self::new(0.0, coefficient(head)?)),
            Some(split) => Ok(Self::new(number(&head[..split])?, coefficient(&head[split..])?)),
        }
    }

    /// Multiplies both components by a real factor.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::new(1.0, -2.0).scale(3.0), Complex::new(3.0, -6.0));
    /// ```
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { real:      self.real * factor,
               imaginary: self.imaginary * factor, }
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// let c = Complex::new(1.0, 5.0);
    /// assert_eq!(c.conj(), Complex::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the magnitude of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    /// Raises the number to a real power through its polar form.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::new(2.0, 0.0).powf(3.0), Complex::new(8.0, 0.0));
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        let r = self.abs().powf(exp);
        let theta = self.arg() * exp;

        Self { real:      r * theta.cos(),
               imaginary: r * theta.sin(), }
    }

    /// Returns `e` raised to this number.
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// let ln = Complex::new(-1.0, 0.0).ln();
    /// assert_eq!(ln.real, 0.0);
    /// assert!((ln.imaginary - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Returns the sine of the number.
    #[must_use]
    pub fn sin(self) -> Self {
        Self { real:      self.real.sin() * self.imaginary.cosh(),
               imaginary: self.real.cos() * self.imaginary.sinh(), }
    }

    /// Returns the cosine of the number.
    #[must_use]
    pub fn cos(self) -> Self {
        Self { real:      self.real.cos() * self.imaginary.cosh(),
               imaginary: -self.real.sin() * self.imaginary.sinh(), }
    }

    /// Returns the tangent of the number, computed as `sin / cos`.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Square root of a real number.
    ///
    /// Negative input gives a purely imaginary result. Callers must check
    /// that the radicand is real before calling this.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::value::complex::Complex;
    /// assert_eq!(Complex::sqrt_real(9.0), Complex::new(3.0, 0.0));
    /// assert_eq!(Complex::sqrt_real(-4.0), Complex::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn sqrt_real(x: f64) -> Self {
        if x < 0.0 {
            Self::new(0.0, (-x).sqrt())
        } else {
            Self::new(x.sqrt(), 0.0)
        }
    }

    /// Returns `true` when the imaginary part is exactly zero.
    #[must_use]
    pub fn is_real(self) -> bool {
        self.imaginary == 0.0
    }
}

impl ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl ops::Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real * rhs.real - self.imaginary * rhs.imaginary,
               imaginary: self.real * rhs.imaginary + self.imaginary * rhs.real, }
    }
}

impl ops::Div for Complex {
    type Output = Self;

    /// Multiplies by the conjugate of `rhs` and divides by its squared
    /// magnitude. A zero divisor yields `NaN` components.
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real * rhs.real + rhs.imaginary * rhs.imaginary;
        Self { real:      (self.real * rhs.real + self.imaginary * rhs.imaginary) / denom,
               imaginary: (self.imaginary * rhs.real - self.real * rhs.imaginary) / denom, }
    }
}

impl From<f64> for Complex {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self { real, imaginary }
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
