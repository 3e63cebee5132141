//! # Quote Message Formatter
//!
//! Plain-text renderings of a computed quote.
//!
//! - [`format_quote_message`]: the condensed customer message sent over
//!   messaging apps and email
//! - [`format_trader_breakdown`]: every line with quantities, for the trader
//!
//! ## Customer Message Layout
//! ```text
//! TILING QUOTE — 19/10/2026
//! ────────────────────────────
//! Customer: Jane Smith          (omitted when blank)
//! Address: 1 High Street        (omitted when blank)
//!
//! Floor area: 12.00 m²          (omitted when zero)
//! Wall area: 8.40 m²            (omitted when zero)
//!
//! Labour: £540.00
//! Materials: £172.20            (materials + margin)
//! VAT (20%): £142.44            (only when VAT is on)
//! ────────────────────────────
//! TOTAL: £854.64
//!
//! This quote is valid for 30 days.
//! ```
//!
//! The date is an input, not read from the clock, so formatting stays pure.

use chrono::NaiveDate;
use std::fmt::Write;

use crate::quote::QuoteResult;
use crate::types::CustomerInfo;

const RULE_WIDTH: usize = 28;
const RULE_CHAR: char = '─';
const VALIDITY_NOTICE: &str = "This quote is valid for 30 days.";

fn rule() -> String {
    std::iter::repeat(RULE_CHAR).take(RULE_WIDTH).collect()
}

/// Renders the customer-facing quote message.
///
/// Labour is the full labour figure (base tiling plus installation); the
/// margin is folded into the materials line so the three figures add up to
/// the total. Earlier versions of the message listed base tiling labour
/// only, leaving installation extras out of every line; this one does not.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use tilequote_core::message::format_quote_message;
/// use tilequote_core::quote::compute_quote;
/// use tilequote_core::types::{CustomerInfo, GroutSpec, RateSheet, RoomSpec};
///
/// let mut room = RoomSpec::new("Kitchen");
/// room.add_floor_area(4.0, 3.0);
/// let result = compute_quote(&[room], &RateSheet::default(), &GroutSpec::default());
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let text = format_quote_message(&result, &CustomerInfo::default(), date);
/// assert!(text.starts_with("TILING QUOTE — 19/10/2026\n"));
/// assert!(text.contains("Floor area: 12.00 m²"));
/// assert!(!text.contains("Customer:"));
/// ```
pub fn format_quote_message(
    result: &QuoteResult,
    customer: &CustomerInfo,
    date: NaiveDate,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("TILING QUOTE — {}", date.format("%d/%m/%Y")));
    lines.push(rule());
    if let Some(name) = customer.name() {
        lines.push(format!("Customer: {name}"));
    }
    if let Some(address) = customer.address() {
        lines.push(format!("Address: {address}"));
    }
    lines.push(String::new());

    if result.floor_area > 0.0 {
        lines.push(format!("Floor area: {:.2} m²", result.floor_area));
    }
    if result.wall_area > 0.0 {
        lines.push(format!("Wall area: {:.2} m²", result.wall_area));
    }
    lines.push(String::new());

    lines.push(format!("Labour: {}", result.total_labour_cost));
    lines.push(format!("Materials: {}", result.materials_with_margin()));
    if let Some(vat) = result.totals.vat {
        lines.push(format!("VAT ({vat}): {}", result.totals.vat_amount));
    }
    lines.push(rule());
    lines.push(format!("TOTAL: {}", result.grand_total()));
    lines.push(String::new());
    lines.push(VALIDITY_NOTICE.to_string());

    lines.join("\n")
}

/// Appends the trader's name as a sign-off. Blank names leave the message as is.
pub fn sign_off(message: &str, trader_name: Option<&str>) -> String {
    match trader_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("{message}\n\n{name}"),
        None => message.to_string(),
    }
}

/// Renders every area, material, labour line and total, for the trader.
pub fn format_trader_breakdown(result: &QuoteResult) -> String {
    // Writing into a String cannot fail.
    let mut out = String::new();

    let _ = writeln!(out, "ROOMS");
    for room in &result.rooms {
        let _ = writeln!(
            out,
            "  {:<20} floor {:>7.2} m²  wall {:>7.2} m²  grout {:.3} kg/m²",
            room.name, room.floor_area, room.wall_area, room.grout_kg_per_m2
        );
        if room.clips_need_manual_quantity {
            let _ = writeln!(
                out,
                "  {:<20} clips: pick a tile of 300×300 or larger, or enter a quantity",
                ""
            );
        } else if room.clips_per_m2 > 0.0 {
            let _ = writeln!(out, "  {:<20} clips {:.1}/m²", "", room.clips_per_m2);
        }
        if let Some(watts) = room.ufh_total_watts {
            let _ = writeln!(out, "  {:<20} UFH {:.0} W", "", watts);
        }
    }
    let _ = writeln!(
        out,
        "  {:<20} floor {:>7.2} m²  wall {:>7.2} m²",
        "Total", result.floor_area, result.wall_area
    );

    let _ = writeln!(out, "\nMATERIALS");
    for line in &result.materials {
        let amount = match (line.packs, line.item.pack_unit()) {
            (Some(packs), Some(unit)) => format!(
                "{packs} {unit} ({:.2} {})",
                line.quantity,
                line.item.measure_unit()
            ),
            _ => format!("{:.2} {}", line.quantity, line.item.measure_unit()),
        };
        let _ = writeln!(
            out,
            "  {:<24} {:<28} {:>10}",
            line.item.label(),
            amount,
            line.cost.to_string()
        );
    }
    let _ = writeln!(
        out,
        "  {:<53} {:>10}",
        "Materials total",
        result.materials_total.to_string()
    );

    let _ = writeln!(out, "\nLABOUR");
    let _ = writeln!(
        out,
        "  {:<53} {:>10}",
        "Tiling",
        result.labour_cost.to_string()
    );
    for line in &result.install_labour {
        let _ = writeln!(
            out,
            "  {:<53} {:>10}",
            line.item.label(),
            line.cost.to_string()
        );
    }
    let _ = writeln!(
        out,
        "  {:<53} {:>10}",
        "Labour total",
        result.total_labour_cost.to_string()
    );

    let totals = &result.totals;
    let _ = writeln!(out, "\nTOTALS");
    let _ = writeln!(out, "  {:<53} {:>10}", "Subtotal", totals.sub_total.to_string());
    let _ = writeln!(
        out,
        "  {:<53} {:>10}",
        format!("Margin ({})", totals.margin),
        totals.margin_amount.to_string()
    );
    let _ = writeln!(
        out,
        "  {:<53} {:>10}",
        "Total with margin",
        totals.total_with_margin.to_string()
    );
    if let Some(vat) = totals.vat {
        let _ = writeln!(
            out,
            "  {:<53} {:>10}",
            format!("VAT ({vat})"),
            totals.vat_amount.to_string()
        );
    }
    let _ = write!(
        out,
        "  {:<53} {:>10}",
        "GRAND TOTAL",
        totals.grand_total.to_string()
    );

    out
}
