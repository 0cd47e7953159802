// ANSI/VT100 control sequences shared across the UI.

/// ESC as a byte, for scanning rendered strings.
pub const ESC_BYTE: u8 = 0x1B;

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!("\x1B[", $first, "\x1B[", $second)
    };
}

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");
/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
/// Move the cursor up one line.
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_DIM: &str = crate::csi!("2m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");

/// Grid cell styles, one per slot status.
pub const CELL_BOOKED: &str = crate::csi2!("38;5;15m", "48;5;88m");
pub const CELL_SELECTED: &str = crate::csi2!("38;5;15m", "48;5;25m");
pub const CELL_PREVIEW: &str = crate::csi2!("38;5;16m", "48;5;114m");
pub const CELL_CONFLICT: &str = crate::csi2!("38;5;16m", "48;5;217m");

/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
