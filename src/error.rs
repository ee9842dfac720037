//! The single error raised by colorway.

/// A color code that is not exactly six hexadecimal digits.
///
/// A leading `#` is accepted and ignored, everything else (wrong length,
/// characters outside `0-9a-fA-F`, empty input) yields this error. It is the
/// only failure in the crate: once a color code has been validated, all
/// conversions and derived colors are infallible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidColorFormat {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidColorFormat {
    /// Create a new error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl std::fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Not a valid hexadecimal color code: '{}'", self.input)
    }
}

impl std::error::Error for InvalidColorFormat {}
