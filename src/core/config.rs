//! Emission configuration.

/// Complexity below which a function definition becomes a static inline candidate.
pub const DEFAULT_INLINE_THRESHOLD: u32 = 12;

/// Knobs shared by the translation and emission phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitConfig {
    /// Functions with a complexity strictly below this value are inlined.
    pub inline_threshold: u32,
}

impl EmitConfig {
    /// Configuration with a custom inline threshold.
    pub fn with_inline_threshold(inline_threshold: u32) -> Self {
        Self { inline_threshold }
    }
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            inline_threshold: DEFAULT_INLINE_THRESHOLD,
        }
    }
}
