use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Complex},
};

/// A built-in single-argument function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tan`
    Tan,
    /// Principal natural logarithm, `log`.
    Log,
    /// `exp`
    Exp,
    /// Magnitude, `abs`. The result is real.
    Abs,
    /// Real-only square root, `sqrt`.
    Sqrt,
}

/// Names of every built-in function, in lowercase.
pub const BUILTIN_FUNCTIONS: &[&str] = &["sin", "cos", "tan", "log", "exp", "abs", "sqrt"];

impl Function {
    /// Resolves a function name, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::evaluator::function::Function;
    ///
    /// assert_eq!(Function::from_name("SiN"), Some(Function::Sin));
    /// assert_eq!(Function::from_name("sinh"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name.to_ascii_lowercase().as_str() {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "log" => Self::Log,
            "exp" => Self::Exp,
            "abs" => Self::Abs,
            "sqrt" => Self::Sqrt,
            _ => return None,
        };
        Some(function)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
        }
    }

    /// Applies the function to an argument.
    ///
    /// # Errors
    /// `Sqrt` fails with `NonRealRadicand` when the argument has a non-zero
    /// imaginary part.
    ///
    /// # Example
    /// ```
    /// use complexpr::interpreter::{evaluator::function::Function, value::Complex};
    ///
    /// let r = Function::Abs.apply(Complex::new(3.0, 4.0)).unwrap();
    /// assert_eq!(r, Complex::new(5.0, 0.0));
    ///
    /// assert!(Function::Sqrt.apply(Complex::new(1.0, 1.0)).is_err());
    /// ```
    pub fn apply(self, argument: Complex) -> EvalResult<Complex> {
        let value = match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tan => argument.tan(),
            Self::Log => argument.ln(),
            Self::Exp => argument.exp(),
            Self::Abs => Complex::from(argument.abs()),
            Self::Sqrt => real_sqrt(argument)?,
        };
        Ok(value)
    }
}

/// Square root restricted to real radicands, shared by `sqrt` and `√`.
pub fn real_sqrt(radicand: Complex) -> EvalResult<Complex> {
    if !radicand.is_real() {
        return Err(RuntimeError::NonRealRadicand { radicand });
    }
    Ok(Complex::sqrt_real(radicand.real))
}
