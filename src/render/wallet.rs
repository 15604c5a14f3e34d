use crate::models::{LedgerEntry, Scalar};

/// Currency marker for every displayed amount.
pub const CURRENCY_PREFIX: &str = "₹";

/// Shown in place of the ledger rows when there are no entries yet.
pub const EMPTY_LEDGER_ROW: &str =
    r#"<tr><td colspan="5" class="text-center text-muted small">No ledger entries yet.</td></tr>"#;

/// Format an amount for display, e.g. `₹ 1520.00`. The server already
/// formats the digits; only the prefix is added here.
pub fn format_amount(amount: &Scalar) -> String {
    format!("{} {}", CURRENCY_PREFIX, amount)
}

/// Build the ledger table body, one row per entry in snapshot order. Credit
/// and debit cells stay blank when the entry has none; the running balance
/// always renders, defaulting to a literal zero.
pub fn ledger_rows(entries: &[LedgerEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        let credit = entry
            .credit
            .as_ref()
            .map(format_amount)
            .unwrap_or_default();
        let debit = entry
            .debit
            .as_ref()
            .map(format_amount)
            .unwrap_or_default();
        let balance_after = entry
            .balance_after
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_else(|| "0".to_string());

        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", entry.date));
        html.push_str(&format!("<td>{}</td>", entry.description));
        html.push_str(&format!(r#"<td class="text-end">{}</td>"#, credit));
        html.push_str(&format!(r#"<td class="text-end">{}</td>"#, debit));
        html.push_str(&format!(
            r#"<td class="text-end">{} {}</td>"#,
            CURRENCY_PREFIX, balance_after
        ));
        html.push_str("</tr>");
    }
    html
}
