//! Text formatting for readouts.
//!
//! Undefined quantities (PF and phi at the origin) print as "—".

use pq_core::metrics::UNDEFINED_TEXT;
use pq_core::{OperatingPoint, PowerFactor, Readout};

/// One row of the numerics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutRow {
    pub quantity: &'static str,
    pub value: String,
}

fn row(quantity: &'static str, value: String) -> ReadoutRow {
    ReadoutRow { quantity, value }
}

fn phi_text(readout: &Readout) -> String {
    match readout.phi_deg {
        Some(phi) => format!("{phi:+.1}"),
        None => UNDEFINED_TEXT.to_string(),
    }
}

fn pf_text(readout: &Readout) -> String {
    match readout.power_factor {
        PowerFactor::Undefined => UNDEFINED_TEXT.to_string(),
        PowerFactor::Value(pf) => format!("{pf:.3} {}", readout.flow),
    }
}

/// Numerics table: P, Q, S, PF, phi, stator current.
pub fn readout_rows(point: OperatingPoint, readout: &Readout) -> Vec<ReadoutRow> {
    vec![
        row("P (MW)", format!("{:.2}", point.p_mw)),
        row("Q (MVAr)", format!("{:.2}", point.q_mvar)),
        row("S (MVA)", format!("{:.2}", readout.s_mva)),
        row("PF", pf_text(readout)),
        row("ϕ (deg)", phi_text(readout)),
        row("I_stator (pu)", format!("{:.3}", readout.stator_current_pu)),
    ]
}

/// Hover text for the operating point marker.
pub fn tooltip_lines(point: OperatingPoint, readout: &Readout) -> Vec<String> {
    let phi = match readout.phi_deg {
        Some(phi) => format!("{phi:+.1}°"),
        None => UNDEFINED_TEXT.to_string(),
    };
    vec![
        format!("P = {:.2} MW", point.p_mw),
        format!("Q = {:.2} MVAr", point.q_mvar),
        format!("S = {:.2} MVA", readout.s_mva),
        format!("PF = {}", pf_text(readout)),
        format!("ϕ = {phi}"),
    ]
}

/// Render rows as a two-column, right-aligned table.
pub fn render_table(rows: &[ReadoutRow]) -> String {
    let q_width = rows
        .iter()
        .map(|r| r.quantity.chars().count())
        .max()
        .unwrap_or(0)
        .max("Quantity".len());
    let v_width = rows
        .iter()
        .map(|r| r.value.chars().count())
        .max()
        .unwrap_or(0)
        .max("Value".len());

    let mut out = String::new();
    out.push_str(&format!("{:<q_width$}  {:>v_width$}\n", "Quantity", "Value"));
    out.push_str(&format!("{}  {}\n", "-".repeat(q_width), "-".repeat(v_width)));
    for r in rows {
        // pad by chars, not bytes: the phi label is multi-byte
        let q_pad = q_width - r.quantity.chars().count();
        let v_pad = v_width - r.value.chars().count();
        out.push_str(&format!(
            "{}{}  {}{}\n",
            r.quantity,
            " ".repeat(q_pad),
            " ".repeat(v_pad),
            r.value
        ));
    }
    out
}
