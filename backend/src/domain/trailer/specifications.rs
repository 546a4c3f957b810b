//! Physical dimensions and load capacity of a trailer.

use std::fmt;

/// Default length in feet.
pub const DEFAULT_LENGTH_FT: f64 = 53.0;
/// Default width in inches.
pub const DEFAULT_WIDTH_IN: f64 = 102.0;
/// Default height in inches.
pub const DEFAULT_HEIGHT_IN: f64 = 162.0;
/// Default capacity in pounds.
pub const DEFAULT_CAPACITY_LBS: u32 = 45_000;
/// Default number of axles.
pub const DEFAULT_AXLE_COUNT: u8 = 2;

/// Identifies which specification field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecificationField {
    Length,
    Width,
    Height,
    Capacity,
    AxleCount,
}

impl SpecificationField {
    /// Largest accepted value for the field.
    pub const fn max(self) -> u32 {
        match self {
            Self::Length => 100,
            Self::Width => 200,
            Self::Height => 300,
            Self::Capacity => 200_000,
            Self::AxleCount => 10,
        }
    }

    /// Lower bound reported in range errors.
    ///
    /// Exclusive for the fractional measures, inclusive for counts.
    pub const fn min(self) -> u32 {
        match self {
            Self::Length | Self::Width | Self::Height => 0,
            Self::Capacity | Self::AxleCount => 1,
        }
    }

    /// Whether [`Self::min`] itself is rejected.
    pub const fn min_is_exclusive(self) -> bool {
        matches!(self, Self::Length | Self::Width | Self::Height)
    }

    /// camelCase name used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Width => "width",
            Self::Height => "height",
            Self::Capacity => "capacity",
            Self::AxleCount => "axleCount",
        }
    }

    fn check_measure(self, value: Option<f64>) -> Result<Option<f64>, SpecificationError> {
        match value {
            Some(raw) if !(raw > f64::from(self.min()) && raw <= f64::from(self.max())) => {
                Err(self.out_of_range())
            }
            other => Ok(other),
        }
    }

    fn check_count(self, value: Option<i64>) -> Result<Option<u32>, SpecificationError> {
        value
            .map(|raw| {
                u32::try_from(raw)
                    .ok()
                    .filter(|count| (self.min()..=self.max()).contains(count))
                    .ok_or_else(|| self.out_of_range())
            })
            .transpose()
    }

    fn out_of_range(self) -> SpecificationError {
        SpecificationError::OutOfRange {
            field: self,
            min: self.min(),
            max: self.max(),
        }
    }
}

impl fmt::Display for SpecificationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned by [`Specifications::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// `min` follows [`SpecificationField::min_is_exclusive`]; `max` is
    /// inclusive.
    OutOfRange {
        field: SpecificationField,
        min: u32,
        max: u32,
    },
}

impl SpecificationError {
    /// Field that failed validation.
    pub fn field(&self) -> SpecificationField {
        match self {
            Self::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for SpecificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, min, max } => {
                let max = group_thousands(u64::from(*max));
                let (subject, unit) = match field {
                    SpecificationField::Length => ("Trailer length must be", "feet"),
                    SpecificationField::Width => ("Trailer width must be", "inches"),
                    SpecificationField::Height => ("Trailer height must be", "inches"),
                    SpecificationField::Capacity => ("Trailer capacity must be", "pounds"),
                    SpecificationField::AxleCount => ("Trailer must have", "axles"),
                };
                if field.min_is_exclusive() {
                    write!(f, "{subject} greater than {min} and at most {max} {unit}")
                } else {
                    write!(f, "{subject} between {min} and {max} {unit}")
                }
            }
        }
    }
}

impl std::error::Error for SpecificationError {}

/// Unvalidated specification values as submitted by a client or read from
/// storage.
///
/// Counts are wide signed integers so out-of-range submissions reach
/// validation instead of failing deserialisation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpecificationsInput {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub capacity: Option<i64>,
    pub axle_count: Option<i64>,
}

/// Trailer dimensions and capacity.
///
/// ## Invariants
/// - Values built by [`Specifications::new`] satisfy length in (0, 100] ft,
///   width in (0, 200] in, height in (0, 300] in, capacity in (0, 200000] lbs
///   and axle count in [1, 10].
/// - Values built by [`Specifications::with_defaults`] are always complete.
///
/// # Examples
/// ```
/// use trailers::domain::trailer::Specifications;
///
/// let specs = Specifications::with_defaults(None, None, None, None, None);
/// assert!(specs.is_complete());
/// assert_eq!(specs.length_capacity_display(), "53 ft / 45,000 lbs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specifications {
    length: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    capacity: Option<u32>,
    axle_count: Option<u8>,
}

impl Specifications {
    /// Validate each present field, checking length, width, height, capacity
    /// and axle count in that order. The first violation is returned.
    pub fn new(input: SpecificationsInput) -> Result<Self, SpecificationError> {
        let length = SpecificationField::Length.check_measure(input.length)?;
        let width = SpecificationField::Width.check_measure(input.width)?;
        let height = SpecificationField::Height.check_measure(input.height)?;
        let capacity = SpecificationField::Capacity.check_count(input.capacity)?;
        let axle_count = SpecificationField::AxleCount
            .check_count(input.axle_count)?
            .map(|count| u8::try_from(count).map_err(|_| SpecificationField::AxleCount.out_of_range()))
            .transpose()?;

        Ok(Self {
            length,
            width,
            height,
            capacity,
            axle_count,
        })
    }

    /// Fill absent fields with the standard defaults. Present values are
    /// taken as given and never checked against the bounds.
    pub fn with_defaults(
        length: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
        capacity: Option<u32>,
        axle_count: Option<u8>,
    ) -> Self {
        Self {
            length: Some(length.unwrap_or(DEFAULT_LENGTH_FT)),
            width: Some(width.unwrap_or(DEFAULT_WIDTH_IN)),
            height: Some(height.unwrap_or(DEFAULT_HEIGHT_IN)),
            capacity: Some(capacity.unwrap_or(DEFAULT_CAPACITY_LBS)),
            axle_count: Some(axle_count.unwrap_or(DEFAULT_AXLE_COUNT)),
        }
    }

    pub fn length(&self) -> Option<f64> {
        self.length
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    pub fn axle_count(&self) -> Option<u8> {
        self.axle_count
    }

    /// True when every field is present.
    pub fn is_complete(&self) -> bool {
        self.length.is_some()
            && self.width.is_some()
            && self.height.is_some()
            && self.capacity.is_some()
            && self.axle_count.is_some()
    }

    /// Length and capacity as `"53 ft / 45,000 lbs"`, with `N/A` for a
    /// missing part.
    pub fn length_capacity_display(&self) -> String {
        let length = self
            .length
            .map_or_else(|| "N/A".to_owned(), |length| format!("{length} ft"));
        let capacity = self.capacity.map_or_else(
            || "N/A".to_owned(),
            |capacity| format!("{} lbs", group_thousands(u64::from(capacity))),
        );
        format!("{length} / {capacity}")
    }

    /// Present dimensions joined as `53' L x 102" W x 162" H`, or `N/A`.
    pub fn dimensions_display(&self) -> String {
        let parts: Vec<String> = [
            self.length.map(|length| format!("{length}' L")),
            self.width.map(|width| format!("{width}\" W")),
            self.height.map(|height| format!("{height}\" H")),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "N/A".to_owned()
        } else {
            parts.join(" x ")
        }
    }
}

impl From<Specifications> for SpecificationsInput {
    fn from(value: Specifications) -> Self {
        Self {
            length: value.length,
            width: value.width,
            height: value.height,
            capacity: value.capacity.map(i64::from),
            axle_count: value.axle_count.map(i64::from),
        }
    }
}

/// Render `value` with comma thousands separators.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(45_000, "45,000")]
    #[case(1_234_567, "1,234,567")]
    fn groups_thousands(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(value), expected);
    }

    #[rstest]
    fn axle_count_above_u8_range_is_out_of_range() {
        let err = Specifications::new(SpecificationsInput {
            axle_count: Some(300),
            ..SpecificationsInput::default()
        })
        .expect_err("axle count rejected");
        assert_eq!(err.field(), SpecificationField::AxleCount);
    }

    #[rstest]
    fn nan_measure_is_rejected() {
        let err = Specifications::new(SpecificationsInput {
            height: Some(f64::NAN),
            ..SpecificationsInput::default()
        })
        .expect_err("NaN rejected");
        assert_eq!(err.field(), SpecificationField::Height);
    }
}
