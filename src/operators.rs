//! Fixed ranking of fuel retail operators by reputation.

use serde::Serialize;

use crate::dom::escape_text;
use crate::render;

/// One ranked operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub rank: u8,
    pub name: &'static str,
    pub reputation: &'static str,
}

/// Operators in rank order.
pub const OPERATORS: &[Operator] = &[
    Operator { rank: 1, name: "OKKO", reputation: "Excellent" },
    Operator { rank: 2, name: "WOG", reputation: "Excellent" },
    Operator { rank: 3, name: "Shell", reputation: "Very Good" },
    Operator { rank: 4, name: "Ukrnafta", reputation: "Good" },
    Operator { rank: 5, name: "SOCAR", reputation: "Very Good" },
    Operator { rank: 6, name: "Glusco", reputation: "Average" },
    Operator { rank: 7, name: "KLO", reputation: "Good" },
    Operator { rank: 8, name: "ANP", reputation: "Average" },
    Operator { rank: 9, name: "Motto", reputation: "Average" },
    Operator { rank: 10, name: "BRSM-Nafta", reputation: "Below Average" },
];

/// Render the ranking as a styled HTML table.
#[must_use]
pub fn operators_table() -> String {
    let mut html = render::table_stylesheet();
    html.push_str(
        "\n<table><thead><tr><th>\u{2116}</th><th>Operator Name</th><th>Reputation</th></tr></thead><tbody>",
    );
    for op in OPERATORS {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            op.rank,
            escape_text(op.name),
            escape_text(op.reputation)
        ));
    }
    html.push_str("</tbody></table>");
    html
}
