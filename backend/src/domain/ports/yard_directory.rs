//! Port for resolving yard identifiers to display names.

/// Name reported when a yard identifier is not recognised.
pub const UNKNOWN_YARD: &str = "Unknown Yard";

/// Resolves an assigned yard id into the location shown to users.
pub trait YardDirectory: Send + Sync {
    /// Display name for `yard_id`; never fails.
    fn resolve_name(&self, yard_id: &str) -> String;
}

/// Directory that knows no yards.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownYardDirectory;

impl YardDirectory for UnknownYardDirectory {
    fn resolve_name(&self, _yard_id: &str) -> String {
        UNKNOWN_YARD.to_owned()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn unknown_directory_resolves_everything_to_placeholder() {
        assert_eq!(UnknownYardDirectory.resolve_name("loc1"), "Unknown Yard");
        assert_eq!(UnknownYardDirectory.resolve_name(""), "Unknown Yard");
    }
}
