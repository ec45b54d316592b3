//! Rendering primitives for CLI output.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::theme::{styled, styles, Badge};

/// Render a badge with optional message.
///
/// Symbols are only used in pretty mode; plain output keeps `[WARN]` etc.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = if ctx.mode.is_pretty() {
        kind.display(ctx.unicode)
    } else {
        kind.text()
    };
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a simple table without borders.
///
/// Pretty mode: aligned columns with a dim header
/// Plain mode: space-separated values (no header)
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        let header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| {
                let mut cell = Cell::new(c.header);
                if ctx.color {
                    cell = cell.add_attribute(Attribute::Dim);
                }
                cell
            })
            .collect();
        table.set_header(header_cells);

        for i in 0..columns.len() {
            if let Some(column) = table.column_mut(i) {
                column.set_padding((0, 2));
            }
        }

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout with proper mode handling.
///
/// In JSON mode, this does nothing (JSON output should be handled separately).
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_kv_plain_snake_cases_key() {
        assert_eq!(kv(&plain_ctx(), "Entry Number", "003"), "entry_number=003");
    }

    #[test]
    fn test_kv_pretty() {
        assert_eq!(kv(&pretty_ctx(), "Total", "4"), "Total: 4");
    }

    #[test]
    fn test_badge_plain() {
        assert_eq!(
            badge(&plain_ctx(), Badge::Warn, "summary not updated"),
            "[WARN] summary not updated"
        );
    }

    #[test]
    fn test_error_message_plain() {
        let msg = error_message(&plain_ctx(), "boom", Some("try again"));
        assert_eq!(msg, "error=boom\nhint=try again");
    }

    #[test]
    fn test_error_message_pretty() {
        let msg = error_message(&pretty_ctx(), "boom", None);
        assert_eq!(msg, "[\u{2717}] boom");
    }

    #[test]
    fn test_simple_table_plain() {
        let columns = [Column::new("A"), Column::new("B")];
        let rows = vec![
            vec!["1".to_string(), "x".to_string()],
            vec!["2".to_string(), "y".to_string()],
        ];
        assert_eq!(simple_table(&plain_ctx(), &columns, &rows), "1 x\n2 y");
    }

    #[test]
    fn test_simple_table_pretty_has_header() {
        let columns = [Column::new("Label"), Column::new("Count")];
        let rows = vec![vec!["Total Entries".to_string(), "3".to_string()]];
        let out = simple_table(&pretty_ctx(), &columns, &rows);
        assert!(out.contains("Label"));
        assert!(out.contains("Total Entries"));
    }
}
