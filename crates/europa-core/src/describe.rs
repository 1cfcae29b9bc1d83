//! Display capability shared by everything the player can look at.

/// Something with a name and a description.
pub trait Describe {
    /// Display name.
    fn name(&self) -> &str;

    /// Descriptive text.
    fn description(&self) -> &str;
}
