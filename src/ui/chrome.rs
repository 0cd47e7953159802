use crate::ui::ansi::{
    CLEAR_LINE_REST, CLEAR_SCREEN, CURSOR_HOME, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE,
    STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers: banner, clearing, prompts.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed banner lines with the business name as the title.
    pub fn banner_lines(&self, business: &str) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}{business}{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let width = BANNER_INNER_WIDTH.max(self.util.visible_width(&title) + 4);
        let subtitle = format!("{STYLE_ITALIC}Book a time slot{STYLE_RESET}");
        vec![
            format!("╭{}╮", "─".repeat(width)),
            format!("│{}│", self.center_in_box(&title, width)),
            format!("│{}│", self.center_in_box(&subtitle, width)),
            format!("╰{}╯", "─".repeat(width)),
        ]
    }

    /// Banner centered in the terminal.
    pub fn print_banner(&self, business: &str) {
        let lines = self.banner_lines(business);
        let width = lines.first().map_or(0, |l| self.util.visible_width(l));
        let pad = " ".repeat(self.util.center_pad(width));
        for line in lines {
            println!("{pad}{line}");
        }
    }

    pub fn clear_screen(&self) {
        print!("{CLEAR_SCREEN}{CURSOR_HOME}");
        let _ = io::stdout().flush();
    }

    /// Styled prompt bar; the cursor is left right after `prompt`.
    pub fn print_prompt(&self, prompt: &str) {
        println!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn end_prompt(&self) {
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
