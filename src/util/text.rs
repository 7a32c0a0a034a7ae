use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended when text is cut off.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when text is cut off.
///
/// Width-aware: CJK characters and emoji count as two columns. For widths of
/// three columns or less there is no room for "char + ellipsis", so as many
/// characters as fit are returned without the ellipsis. Returns
/// `Cow::Borrowed` when no truncation is needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if UnicodeWidthStr::width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    if max_width <= ELLIPSIS_WIDTH {
        let mut width = 0;
        let mut end = 0;
        for (idx, c) in s.char_indices() {
            let cw = UnicodeWidthChar::width(c).unwrap_or(0);
            if width + cw > max_width {
                break;
            }
            width += cw;
            end = idx + c.len_utf8();
        }
        return Cow::Owned(s[..end].to_string());
    }

    let target = max_width - ELLIPSIS_WIDTH;
    let mut width = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw > target {
            break;
        }
        width += cw;
        end = idx + c.len_utf8();
    }

    let mut out = s[..end].to_string();
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Sanitize a catalog text field for single-line terminal display.
///
/// Newlines and tabs become spaces; other control characters are removed.
/// The result is trimmed.
pub fn sanitize_field(s: &str) -> String {
    let replaced: String = s
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    replaced.trim().to_string()
}
