//! Numbered placeholder rendering with a pre-joined cache.
//!
//! Every dialect keeps one string holding `P1,P2,...,P841` (where `P` is the
//! placeholder prefix). A contiguous range of placeholders is then a substring
//! of that string, located by arithmetic on the digit width of each index, so
//! rendering `$3,$4,$5` for a statement costs no formatting at all.
//!
//! Ranges that reach the end of the cache fall back to [`generate_params`].

use std::borrow::Cow;

/// Highest placeholder index held in the cache.
///
/// With a one-character prefix the cached string is exactly 4096 bytes.
pub const MAX_PARAM_COUNT: usize = 841;

/// Render `count` comma-joined placeholders starting at `start`, without
/// touching any cache.
///
/// ```ignore
/// assert_eq!(generate_params("$", 3, 2), "$3,$4");
/// ```
pub fn generate_params(placeholder: &str, start: usize, count: usize) -> String {
    let mut out = String::with_capacity(count * (placeholder.len() + 4));
    for index in start..start + count {
        if index > start {
            out.push(',');
        }
        out.push_str(placeholder);
        out.push_str(&index.to_string());
    }
    out
}

/// Pre-rendered placeholders `1..=MAX_PARAM_COUNT` for a single prefix.
#[derive(Clone)]
pub struct ParamCache {
    placeholder: String,
    cache: String,
}

impl ParamCache {
    /// Build the cache for `placeholder`.
    ///
    /// The prefix must not contain digits or commas; [`crate::Dialect::new`]
    /// enforces that before it gets here.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let cache = generate_params(&placeholder, 1, MAX_PARAM_COUNT);
        Self { placeholder, cache }
    }

    /// The placeholder prefix (e.g. `$`).
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Render placeholders `start..start + count`, comma-joined.
    ///
    /// Ranges that end strictly below [`MAX_PARAM_COUNT`] are borrowed from
    /// the cache; everything else (including a zero `start`) is generated.
    pub fn params(&self, start: usize, count: usize) -> Cow<'_, str> {
        if count == 0 {
            return Cow::Borrowed("");
        }

        let end = start + count;
        if start == 0 || end >= MAX_PARAM_COUNT {
            return Cow::Owned(generate_params(&self.placeholder, start, count));
        }

        let from = self.offset_of(start);
        // Drop the trailing comma that precedes placeholder `end`.
        let to = self.offset_of(end) - 1;
        Cow::Borrowed(&self.cache[from..to])
    }

    /// Byte offset of placeholder `n` (1-based) inside the cache.
    ///
    /// Each slot is `prefix + digits + ','`, so the offset is the sum of the
    /// slot widths of every digit band before `n`'s band, plus the slots of
    /// `n`'s band that precede it.
    fn offset_of(&self, n: usize) -> usize {
        let prefix = self.placeholder.len();
        let mut offset = 0;
        let mut band_start = 1;
        let mut digits = 1;

        loop {
            let band_end = band_start * 10;
            let slot = prefix + digits + 1;
            if n < band_end {
                return offset + (n - band_start) * slot;
            }
            offset += (band_end - band_start) * slot;
            band_start = band_end;
            digits += 1;
        }
    }
}

impl std::fmt::Debug for ParamCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamCache")
            .field("placeholder", &self.placeholder)
            .field("cached", &MAX_PARAM_COUNT)
            .finish()
    }
}
