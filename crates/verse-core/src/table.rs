//! Box-drawn table layout.
//!
//! ```text
//! ┌───────────┬────────────────────────────┐
//! │ John 3:16 │ For God so loved the world │
//! ├───────────┼────────────────────────────┤
//! │ John 3:17 │ For God sent not his Son   │
//! │           │ into the world             │
//! └───────────┴────────────────────────────┘
//! ```
//!
//! Glyphs come from a [`TableStyle`] fixed at construction time; a table
//! never consults shared state.

use std::fmt;

use crate::wrap::display_width;

/// Horizontal alignment of a column's cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Split padding, extra column on the right.
    Center,
}

/// The glyph set a table is drawn with.
///
/// Field names follow compass points: `nw` is the top-left corner, `n` the
/// top edge, `mt`/`mb`/`ml`/`mr` the junctions on the top, bottom, left and
/// right edges, and `mm` the inner crossing. `b` fills cell padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Top-left corner.
    pub nw: char,
    /// Top edge.
    pub n: char,
    /// Top-right corner.
    pub ne: char,
    /// Right edge.
    pub e: char,
    /// Bottom-right corner.
    pub se: char,
    /// Bottom edge.
    pub s: char,
    /// Bottom-left corner.
    pub sw: char,
    /// Left edge.
    pub w: char,
    /// Cell padding fill.
    pub b: char,
    /// Column junction on the top edge.
    pub mt: char,
    /// Row junction on the left edge.
    pub ml: char,
    /// Row junction on the right edge.
    pub mr: char,
    /// Column junction on the bottom edge.
    pub mb: char,
    /// Inner crossing.
    pub mm: char,
    /// Inner horizontal rule between rows.
    pub h: char,
    /// Inner vertical rule between columns.
    pub v: char,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            nw: '┌',
            n: '─',
            ne: '┐',
            e: '│',
            se: '┘',
            s: '─',
            sw: '└',
            w: '│',
            b: ' ',
            mt: '┬',
            ml: '├',
            mr: '┤',
            mb: '┴',
            mm: '┼',
            h: '─',
            v: '│',
        }
    }
}

impl TableStyle {
    /// Start from the default light box-drawing set.
    pub fn builder() -> TableStyleBuilder {
        TableStyleBuilder {
            style: Self::default(),
        }
    }

    /// Plain ASCII glyphs for terminals without box-drawing support.
    pub fn ascii() -> Self {
        Self::builder()
            .corners('+', '+', '+', '+')
            .edges('-', '|', '-', '|')
            .junctions('+', '+', '+', '+', '+')
            .inner_rules('-', '|')
            .build()
    }
}

/// Builder for [`TableStyle`].
#[derive(Debug, Clone)]
#[must_use]
pub struct TableStyleBuilder {
    style: TableStyle,
}

impl TableStyleBuilder {
    /// Corners in clockwise order from the top-left.
    pub const fn corners(mut self, nw: char, ne: char, se: char, sw: char) -> Self {
        self.style.nw = nw;
        self.style.ne = ne;
        self.style.se = se;
        self.style.sw = sw;
        self
    }

    /// Outer edges in clockwise order from the top.
    pub const fn edges(mut self, n: char, e: char, s: char, w: char) -> Self {
        self.style.n = n;
        self.style.e = e;
        self.style.s = s;
        self.style.w = w;
        self
    }

    /// Junction glyphs: top, right, bottom, left, then the inner crossing.
    pub const fn junctions(mut self, mt: char, mr: char, mb: char, ml: char, mm: char) -> Self {
        self.style.mt = mt;
        self.style.mr = mr;
        self.style.mb = mb;
        self.style.ml = ml;
        self.style.mm = mm;
        self
    }

    /// Rules between rows (`h`) and between columns (`v`).
    pub const fn inner_rules(mut self, h: char, v: char) -> Self {
        self.style.h = h;
        self.style.v = v;
        self
    }

    /// Fill used for cell padding.
    pub const fn blank(mut self, b: char) -> Self {
        self.style.b = b;
        self
    }

    /// Finish the style.
    pub fn build(self) -> TableStyle {
        self.style
    }
}

/// A table of multi-line cells.
#[derive(Debug, Clone)]
pub struct Table<'s> {
    style: &'s TableStyle,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<Vec<String>>>,
}

impl<'s> Table<'s> {
    /// Create an empty table with every column left-aligned.
    pub const fn new(style: &'s TableStyle) -> Self {
        Self {
            style,
            alignments: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create a table with per-column alignments. Columns beyond the list
    /// are left-aligned.
    pub const fn with_columns(style: &'s TableStyle, alignments: Vec<Alignment>) -> Self {
        Self {
            style,
            alignments,
            rows: Vec::new(),
        }
    }

    /// Append a row; each cell is a list of display lines.
    pub fn add_row(&mut self, cells: Vec<Vec<String>>) {
        self.rows.push(cells);
    }

    /// Whether no row has been added.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Render the table. An empty table renders to an empty string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        if self.rows.is_empty() || widths.is_empty() {
            return String::new();
        }

        let style = self.style;
        let mut out = String::new();
        Self::push_rule(&mut out, &widths, style.nw, style.n, style.mt, style.ne);

        for (row_idx, row) in self.rows.iter().enumerate() {
            if row_idx > 0 {
                Self::push_rule(&mut out, &widths, style.ml, style.h, style.mm, style.mr);
            }
            let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for line_idx in 0..height {
                out.push(style.w);
                for (col, width) in widths.iter().enumerate() {
                    if col > 0 {
                        out.push(style.v);
                    }
                    let content = row
                        .get(col)
                        .and_then(|cell| cell.get(line_idx))
                        .map_or("", String::as_str);
                    out.push(style.b);
                    self.push_aligned(&mut out, content, *width, self.alignment(col));
                    out.push(style.b);
                }
                out.push(style.e);
                out.push('\n');
            }
        }

        Self::push_rule(&mut out, &widths, style.sw, style.s, style.mb, style.se);
        out.truncate(out.trim_end_matches('\n').len());
        out
    }

    fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .flat_map(|cell| cell.iter())
                    .map(|line| display_width(line))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn push_rule(out: &mut String, widths: &[usize], left: char, fill: char, mid: char, right: char) {
        out.push(left);
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                out.push(mid);
            }
            out.extend(std::iter::repeat_n(fill, width + 2));
        }
        out.push(right);
        out.push('\n');
    }

    fn push_aligned(&self, out: &mut String, content: &str, width: usize, alignment: Alignment) {
        let gap = width.saturating_sub(display_width(content));
        let (before, after) = match alignment {
            Alignment::Left => (0, gap),
            Alignment::Right => (gap, 0),
            Alignment::Center => (gap / 2, gap - gap / 2),
        };
        out.extend(std::iter::repeat_n(self.style.b, before));
        out.push_str(content);
        out.extend(std::iter::repeat_n(self.style.b, after));
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
