//! Vehicle identification number value object.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Number of characters in a valid VIN.
pub const VIN_LENGTH: usize = 17;

/// Validation errors returned by [`Vin::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VinValidationError {
    Empty,
    InvalidFormat,
    ForbiddenCharacters,
}

impl fmt::Display for VinValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "VIN cannot be empty"),
            Self::InvalidFormat => write!(
                f,
                "VIN must be {VIN_LENGTH} characters long and contain only letters and numbers",
            ),
            Self::ForbiddenCharacters => write!(f, "VIN cannot contain I, O, or Q characters"),
        }
    }
}

impl std::error::Error for VinValidationError {}

static VIN_FORMAT_RE: OnceLock<Regex> = OnceLock::new();

fn vin_format_regex() -> &'static Regex {
    VIN_FORMAT_RE.get_or_init(|| {
        Regex::new("^[A-Z0-9]{17}$")
            .unwrap_or_else(|error| panic!("VIN regex failed to compile: {error}"))
    })
}

/// Normalized 17-character VIN.
///
/// ## Invariants
/// - Values built through [`Vin::new`] are exactly 17 uppercase ASCII
///   letters or digits and never contain `I`, `O` or `Q`.
/// - [`Vin::from_trusted`] skips those checks and must only see values a
///   store already validated on write.
///
/// # Examples
/// ```
/// use trailers::domain::trailer::Vin;
///
/// let vin = Vin::new(" 1hgcm82633a123456 ").expect("valid VIN");
/// assert_eq!(vin.as_str(), "1HGCM82633A123456");
/// assert_eq!(vin.formatted(), "1HG CM82 633A 1234 56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Vin {
    /// Validate and normalize user-supplied input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, VinValidationError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(VinValidationError::Empty);
        }

        let normalized = Self::normalize(raw);
        if !vin_format_regex().is_match(&normalized) {
            return Err(VinValidationError::InvalidFormat);
        }
        if normalized.contains(['I', 'O', 'Q']) {
            return Err(VinValidationError::ForbiddenCharacters);
        }
        Ok(Self(normalized))
    }

    /// Rebuild a VIN loaded from storage without validation.
    pub fn from_trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Trim and uppercase `raw` the same way [`Vin::new`] does.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Borrow the normalized value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Group the characters 3-4-4-4-2 for display.
    ///
    /// Values that are not exactly 17 bytes long are returned unchanged.
    pub fn formatted(&self) -> String {
        let value = self.as_str();
        if value.len() != VIN_LENGTH || !value.is_ascii() {
            return value.to_owned();
        }
        format!(
            "{} {} {} {} {}",
            &value[..3],
            &value[3..7],
            &value[7..11],
            &value[11..15],
            &value[15..],
        )
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Vin> for String {
    fn from(value: Vin) -> Self {
        value.0
    }
}
