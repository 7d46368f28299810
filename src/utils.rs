// SPDX-License-Identifier: MIT
// Input normalisation: the fixed trimming policy and an opt-in preprocessor.

/// What happens to surrounding whitespace before two inputs are compared.
///
/// Leading and trailing whitespace is significant unless a caller asks for
/// [`Normalization::Trim`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// Compare inputs exactly as given.
    #[default]
    Verbatim,
    /// Strip leading and trailing Unicode whitespace from both inputs.
    Trim,
}

impl Normalization {
    #[inline]
    pub fn apply<'a>(&self, s: &'a str) -> &'a str {
        match self {
            Normalization::Verbatim => s,
            Normalization::Trim => s.trim(),
        }
    }
}

/// Preprocesses a string by converting to lowercase and replacing
/// non-alphanumeric characters with spaces (then stripping leading/trailing).
/// Never applied implicitly; callers pass its output to the distance functions.
pub fn default_process(s: &str) -> String {
    let result: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase();

    result.trim().to_string()
}
