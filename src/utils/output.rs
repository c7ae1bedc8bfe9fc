//! Output rendering for beacon findings.
//!
//! One field projection (`header_fields` / `row_fields`) feeds all three
//! output modes, so the column order cannot drift between the table,
//! delimited, and JSON encodings. Every mode writes to a caller-supplied
//! stream and reports write failures to the caller.

use std::io::Write;

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

use crate::beacons::results::BeaconResult;

pub fn format_float(value: f64) -> String {
    format!("{:.4}", value)
}

pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Column labels in canonical order. The two network name columns sit
/// directly before the IP columns when requested.
pub fn header_fields(show_net_names: bool) -> Vec<&'static str> {
    let mut fields = vec!["Score"];
    if show_net_names {
        fields.extend(["Source Network", "Destination Network"]);
    }
    fields.extend([
        "Source IP",
        "Destination IP",
        "Connections",
        "Avg. Bytes",
        "Interval Range",
        "Size Range",
        "Top Interval",
        "Top Size",
        "Top Interval Count",
        "Top Size Count",
        "Interval Skew",
        "Size Skew",
        "Interval Dispersion",
        "Size Dispersion",
    ]);
    fields
}

/// Stringified cell values for one finding, in the same order as
/// `header_fields` with the same flag.
pub fn row_fields(d: &BeaconResult, show_net_names: bool) -> Vec<String> {
    let mut fields = vec![format_float(d.score)];
    if show_net_names {
        fields.push(d.src_network_name.clone());
        fields.push(d.dst_network_name.clone());
    }
    fields.extend([
        d.src_ip.clone(),
        d.dst_ip.clone(),
        format_int(d.connections),
        format_float(d.avg_bytes),
        format_int(d.timing_stats.range),
        format_int(d.size_stats.range),
        format_int(d.timing_stats.mode),
        format_int(d.size_stats.mode),
        format_int(d.timing_stats.mode_count),
        format_int(d.size_stats.mode_count),
        format_float(d.timing_stats.skew),
        format_float(d.size_stats.skew),
        format_int(d.timing_stats.dispersion),
        format_int(d.size_stats.dispersion),
    ]);
    fields
}

/// Print findings as a bordered, column-aligned table. An empty input
/// prints the header row only.
pub fn render_table(
    out: &mut impl Write,
    data: &[BeaconResult],
    show_net_names: bool,
) -> std::io::Result<()> {
    let mut table = Table::new();
    table.set_titles(Row::new(
        header_fields(show_net_names)
            .iter()
            .map(|field| Cell::new(field).style_spec("bFg"))
            .collect(),
    ));

    for d in data {
        table.add_row(Row::new(
            row_fields(d, show_net_names)
                .iter()
                .map(|value| Cell::new(value))
                .collect(),
        ));
    }

    table.print(out)?;
    Ok(())
}

// A field holding the active delimiter, a quote, or a newline is wrapped in
// double quotes with inner quotes doubled. Plain fields (scores, counts,
// IPs) stay verbatim, so normal lines split cleanly on the delimiter.
fn escape_field(field: &str, delim: &str) -> String {
    if field.contains(delim) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Print one header line and one line per finding, fields joined by the
/// given delimiter. An empty input prints the header line only.
pub fn render_delimited(
    out: &mut impl Write,
    data: &[BeaconResult],
    delim: &str,
    show_net_names: bool,
) -> std::io::Result<()> {
    writeln!(out, "{}", header_fields(show_net_names).join(delim))?;

    for d in data {
        let row = row_fields(d, show_net_names)
            .iter()
            .map(|field| escape_field(field, delim))
            .collect::<Vec<String>>();
        writeln!(out, "{}", row.join(delim))?;
    }

    Ok(())
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataRow {
    score: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    source_network_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    destination_network_name: String,
    #[serde(rename = "sourceIP")]
    source_ip: String,
    #[serde(rename = "destinationIP")]
    destination_ip: String,
    connections: i64,
    avg_bytes: f64,
    interval_range: i64,
    size_range: i64,
    top_interval: i64,
    top_size: i64,
    top_interval_count: i64,
    top_size_count: i64,
    interval_skew: f64,
    size_skew: f64,
    interval_dispersion: i64,
    size_dispersion: i64,
}

impl DataRow {
    fn from_result(d: &BeaconResult, show_net_names: bool) -> DataRow {
        let (source_network_name, destination_network_name) = if show_net_names {
            (d.src_network_name.clone(), d.dst_network_name.clone())
        } else {
            (String::new(), String::new())
        };

        DataRow {
            score: d.score,
            source_network_name,
            destination_network_name,
            source_ip: d.src_ip.clone(),
            destination_ip: d.dst_ip.clone(),
            connections: d.connections,
            avg_bytes: d.avg_bytes,
            interval_range: d.timing_stats.range,
            size_range: d.size_stats.range,
            top_interval: d.timing_stats.mode,
            top_size: d.size_stats.mode,
            top_interval_count: d.timing_stats.mode_count,
            top_size_count: d.size_stats.mode_count,
            interval_skew: d.timing_stats.skew,
            size_skew: d.size_stats.skew,
            interval_dispersion: d.timing_stats.dispersion,
            size_dispersion: d.size_stats.dispersion,
        }
    }
}

/// Print findings as a single JSON array, one object per finding. Empty
/// network name fields are omitted from the objects; an empty input prints
/// `[]`.
pub fn render_json(
    out: &mut impl Write,
    data: &[BeaconResult],
    show_net_names: bool,
) -> std::io::Result<()> {
    // One element per input finding
    let mut rows = Vec::with_capacity(data.len());
    for d in data {
        rows.push(DataRow::from_result(d, show_net_names));
    }

    serde_json::to_writer(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}
