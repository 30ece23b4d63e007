// vaultmask/src/ui/redaction_summary.rs
//! Per-category summary tables for `redact` and `scan`.

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use vaultmask_core::RedactionSummaryItem;

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Builds the table. Only categories, counts and nonces appear; never originals.
pub fn build_summary_table(summary: &[RedactionSummaryItem], show_nonces: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Category"), Cell::new("Occurrences")];
    if show_nonces {
        header.push(Cell::new("Replaced with"));
    }
    table.set_header(header);

    for item in summary {
        let mut row = vec![
            Cell::new(item.category.as_str()),
            Cell::new(item.occurrences).set_alignment(CellAlignment::Right),
        ];
        if show_nonces {
            let mut nonces: Vec<&str> = Vec::new();
            for nonce in &item.nonces {
                if !nonces.contains(&nonce.as_str()) {
                    nonces.push(nonce);
                }
            }
            row.push(Cell::new(nonces.join(", ")));
        }
        table.add_row(row);
    }
    table
}

pub fn print_summary<W: Write>(
    summary: &[RedactionSummaryItem],
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
    show_nonces: bool,
) -> io::Result<()> {
    let title = "Redaction Summary";
    if supports_color {
        writeln!(writer, "\n{}", title.color(color_for(theme, ThemeEntry::Header)))?;
    } else {
        writeln!(writer, "\n{}", title)?;
    }

    if summary.is_empty() {
        return writeln!(writer, "No vault values found.");
    }

    writeln!(writer, "{}", build_summary_table(summary, show_nonces))?;
    let total: usize = summary.iter().map(|s| s.occurrences).sum();
    let footer = format!("{} occurrence(s) in {} categor{}.", total, summary.len(), if summary.len() == 1 { "y" } else { "ies" });
    if supports_color {
        writeln!(writer, "{}", footer.color(color_for(theme, ThemeEntry::SummaryOccurrences)))
    } else {
        writeln!(writer, "{}", footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use vaultmask_core::PiiCategory;

    fn item(category: PiiCategory, occurrences: usize, nonces: &[&str]) -> RedactionSummaryItem {
        RedactionSummaryItem {
            category,
            occurrences,
            original_texts: vec!["Ada Lovelace".to_string(); occurrences],
            nonces: nonces.iter().map(|s| s.to_string()).collect(),
            sample_hashes: Vec::new(),
        }
    }

    #[test]
    fn table_lists_categories_without_originals() {
        let summary = vec![item(PiiCategory::Name, 2, &["Avery Abernathy", "Avery Abernathy"])];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, &ThemeStyle::default_theme_map(), false, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("name"));
        assert!(text.contains("Avery Abernathy"));
        assert!(!text.contains("Ada Lovelace"));
        assert!(text.contains("2 occurrence(s) in 1 category."));
    }

    #[test]
    fn empty_summary_says_so() {
        let mut out = Vec::new();
        print_summary(&[], &mut out, &ThemeStyle::default_theme_map(), false, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No vault values found."));
    }
}
