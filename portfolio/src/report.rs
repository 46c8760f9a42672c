//! Text renderings of a valuation: the terminal table and the saved text file.

use crate::valuation::Valuation;

const COLUMN: usize = 10;

/// Aligned table shown in the terminal after entry finishes.
pub fn render_summary(valuation: &Valuation) -> String {
    let mut out = String::new();
    out.push_str("--- Portfolio Summary ---\n");
    push_row(&mut out, ["Stock", "Qty", "Price", "Value"].map(String::from));
    for item in &valuation.items {
        push_row(
            &mut out,
            [
                item.symbol.clone(),
                item.quantity.to_string(),
                format!("${}", item.unit_price),
                format!("${}", item.value),
            ],
        );
    }
    out.push_str(&format!("\nTotal Investment Value = ${}", valuation.total));
    out
}

/// Contents of `portfolio_summary_<timestamp>.txt`.
pub fn render_text(valuation: &Valuation) -> String {
    let mut out = String::from("--- Portfolio Summary ---\n");
    for item in &valuation.items {
        out.push_str(&format!(
            "{}: {} shares @ ${} = ${}\n",
            item.symbol, item.quantity, item.unit_price, item.value
        ));
    }
    out.push_str(&format!("\nTotal Investment Value = ${}\n", valuation.total));
    out
}

fn push_row(out: &mut String, cells: [String; 4]) {
    let mut line = String::new();
    for cell in cells {
        line.push_str(&format!("{cell:<width$}", width = COLUMN));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
