//! Plain-text rendering of store results.

use rigbench_core::partition::{Candidate, Partition};
use rigbench_core::query::Condition;
use rigbench_core::{
    AttributeComparison, BuildPrice, Component, ComponentKind, Quality, Recognition,
    RetailerLink, Value, Verdict,
};
use std::fmt::Write;

/// Minor currency units as dollars
pub fn money(amount: u64) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}

/// Signed price change
pub fn delta(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "+" };
    format!("{}{}", sign, money(amount.unsigned_abs()))
}

fn quality_mark(quality: Quality) -> &'static str {
    match quality {
        Quality::Better => "better",
        Quality::Worse => "worse",
        Quality::Neutral => "",
    }
}

/// Parse `field=value` into an equality condition. Numbers and booleans
/// are typed; everything else is text.
pub fn parse_condition(text: &str) -> Result<Condition, String> {
    let (field, raw) = text
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got {:?}", text))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in {:?}", text));
    }
    let raw = raw.trim();
    let value = if let Ok(int) = raw.parse::<i64>() {
        Value::Int(int)
    } else if let Ok(float) = raw.parse::<f64>() {
        Value::Float(float)
    } else if let Ok(flag) = raw.parse::<bool>() {
        Value::Bool(flag)
    } else {
        Value::Text(raw.to_string())
    };
    Ok(Condition::eq(field, value))
}

pub fn component_line(component: &Component) -> String {
    format!(
        "[{}] {:<40} {:>10}",
        component.id.raw(),
        component.display_name(),
        money(component.price)
    )
}

pub fn components(kind: ComponentKind, components: &[Component]) -> String {
    let mut out = format!("{} ({})\n", kind.label(), components.len());
    for component in components {
        let _ = writeln!(out, "  {}", component_line(component));
    }
    out
}

pub fn build_price(price: &BuildPrice) -> String {
    let mut out = String::new();
    for (kind, subtotal) in &price.by_kind {
        let _ = writeln!(out, "  {:<14} {:>10}", kind.label(), money(*subtotal));
    }
    let _ = writeln!(out, "  {:<14} {:>10}", "Total", money(price.total));
    out
}

fn candidates(out: &mut String, title: &str, entries: &[Candidate], show_delta: bool) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} ({})", title, entries.len());
    for entry in entries {
        if show_delta {
            let _ = writeln!(
                out,
                "  {} {:>11}",
                component_line(&entry.component),
                delta(entry.price_delta)
            );
        } else {
            let _ = writeln!(out, "  {}", component_line(&entry.component));
        }
        for finding in &entry.evaluation.findings {
            if finding.verdict != Verdict::Compatible {
                let _ = writeln!(out, "      {}: {}", finding.verdict, finding.reason);
            }
        }
    }
}

pub fn partition(partition: &Partition) -> String {
    let mut out = String::new();
    candidates(&mut out, "Selected", &partition.selected, false);
    candidates(&mut out, "Compatible", &partition.compatible, true);
    candidates(&mut out, "Incompatible", &partition.incompatible, true);
    candidates(&mut out, "Unknown", &partition.unknown, true);
    if out.is_empty() {
        out.push_str("No components\n");
    }
    out
}

pub fn comparison(rows: &[AttributeComparison]) -> String {
    if rows.is_empty() {
        return "Components are of different kinds\n".to_string();
    }
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "  {:<16} {:>14} {:>14}  {}",
            row.label,
            row.candidate.to_string(),
            row.reference.to_string(),
            quality_mark(row.quality)
        );
    }
    out
}

pub fn recognition(recognition: &Recognition) -> String {
    match recognition {
        Recognition::Recognized { id, name } => format!("{} ({})\n", name, id),
        Recognition::Unrecognized { label } => format!("unrecognized: {}\n", label),
    }
}

pub fn link(link: &RetailerLink) -> String {
    let mut out = format!("[{}] {} {}\n", link.id.raw(), link.retailer, link.url);
    for point in link.history.entries() {
        let _ = writeln!(out, "  {} {:>10}", point.date, money(point.price));
    }
    if let Some(lowest) = link.history.lowest() {
        let _ = writeln!(out, "  lowest {} on {}", money(lowest.price), lowest.date);
    }
    out
}
