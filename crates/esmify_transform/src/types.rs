#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformResult {
    pub files_transformed: usize,
    pub files_copied: usize,
    pub directories_created: usize,
    /// Specifiers whose text changed
    pub specifiers_rewritten: usize,
}
