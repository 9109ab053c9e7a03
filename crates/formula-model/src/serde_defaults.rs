/// Serde helper for `#[serde(default = "crate::serde_defaults::default_true")]`.
///
/// Use the fully-qualified path in serde attributes instead of importing this symbol.
pub(crate) const fn default_true() -> bool {
    true
}
