//! Glyph sets for text rendering.

/// One glyph per cell kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub open: char,
    pub blocked: char,
    pub path: char,
    pub start: char,
    pub end: char,
}

impl Glyphs {
    /// Box and gender symbols, as in the classic console demo.
    pub const UNICODE: Glyphs = Glyphs {
        open: '□',
        blocked: '■',
        path: '^',
        start: '♂',
        end: '♀',
    };

    /// Pure ASCII.  Same alphabet as the `GridMap` text parser, plus `*` for
    /// path cells.
    pub const ASCII: Glyphs = Glyphs {
        open: '.',
        blocked: '#',
        path: '*',
        start: 'S',
        end: 'E',
    };

    /// Multi-line key explaining each glyph.
    pub fn legend(&self) -> String {
        format!(
            " {} : open\n {} : blocked\n {} : start\n {} : end\n {} : path\n",
            self.open, self.blocked, self.start, self.end, self.path
        )
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs::UNICODE
    }
}
