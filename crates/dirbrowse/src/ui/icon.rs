use std::fmt;

/// A collection of icons used throughout the terminal UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Icon {
    /// A cross mark symbol (✗).
    Cross,
    /// A folder glyph.
    Directory,
    /// A document glyph.
    File,
    /// The cursor row marker (›).
    Pointer,
    /// A warning symbol (!).
    Warn,
}

impl Icon {
    /// Returns the icon tagging a directory or file row.
    pub fn for_entry(is_dir: bool) -> Self {
        if is_dir { Icon::Directory } else { Icon::File }
    }

    /// Returns the string representation of the icon.
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Cross => "✗",
            Icon::Directory => "▸",
            Icon::File => "·",
            Icon::Pointer => "›",
            Icon::Warn => "!",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
