/// Stable machine-readable code for an error variant.
///
/// Codes are SCREAMING_SNAKE strings and never change once published,
/// so outer surfaces can branch on them without matching display text.
pub trait ShelfErrorCode {
    fn error_code(&self) -> &'static str;
}
