//! Indentation configuration and block re-indentation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (Python, Rust).
    pub const PYTHON: Self = Self::Spaces(4);

    /// Derive the indent style from a package-level flag: 4-space units
    /// when `use_spaces`, tabs otherwise.
    pub fn from_style(use_spaces: bool) -> Self {
        if use_spaces { Self::PYTHON } else { Self::Tab }
    }

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(*width as usize),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PYTHON
    }
}

/// Re-indent a multi-line block by `levels` nesting levels.
///
/// Every non-empty line gains `unit` repeated `levels` times; blank lines
/// pass through untouched, so no trailing whitespace is ever injected.
/// Shifting by zero levels returns the input unchanged, and shifts
/// compose: `shift(shift(t, a, u), b, u) == shift(t, a + b, u)`.
///
/// # Example
///
/// ```
/// use husk_codegen::shift;
///
/// let body = "first\n\nsecond\n";
/// assert_eq!(shift(body, 1, "    "), "    first\n\n    second\n");
/// ```
pub fn shift(text: &str, levels: usize, unit: &str) -> String {
    if levels == 0 || unit.is_empty() {
        return text.to_string();
    }
    let prefix = unit.repeat(levels);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shift a body one level under its header, terminating it with a newline
/// first so the final line break always survives the splice.
pub fn shift_body(body: &str, indent: Indent) -> String {
    let mut text = body.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    shift(&text, 1, &indent.unit())
}
