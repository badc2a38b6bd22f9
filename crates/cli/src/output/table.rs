//! Table formatting for list results.

use kupo_rs_api::{Match, Metadatum, Point};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "ADA")]
    ada: String,
    #[tabled(rename = "Assets")]
    assets: usize,
    #[tabled(rename = "Created")]
    created_at: u64,
    #[tabled(rename = "Spent")]
    spent_at: String,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Slot")]
    slot_no: u64,
    #[tabled(rename = "Header Hash")]
    header_hash: String,
}

#[derive(Tabled)]
struct MetadatumRow {
    #[tabled(rename = "Hash")]
    hash: String,
    #[tabled(rename = "Labels")]
    labels: String,
    #[tabled(rename = "Size (bytes)")]
    size: usize,
}

fn truncate_middle(s: &str, keep: usize) -> String {
    if s.is_ascii() && s.len() > keep * 2 + 3 {
        format!("{}...{}", &s[..keep], &s[s.len() - keep..])
    } else {
        s.to_string()
    }
}

fn format_ada(lovelace: u64) -> String {
    format!("{}.{:06}", lovelace / 1_000_000, lovelace % 1_000_000)
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

pub fn format_matches_table(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches found.".to_string();
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow {
            output: format!(
                "{}@{}",
                m.output_index,
                truncate_middle(&m.transaction_id, 6)
            ),
            address: truncate_middle(&m.address, 12),
            ada: format_ada(m.value.coins),
            assets: m.value.assets.len(),
            created_at: m.created_at.slot_no,
            spent_at: m
                .spent_at
                .as_ref()
                .map(|p| p.slot_no.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    render(rows)
}

pub fn format_checkpoints_table(points: &[Point]) -> String {
    if points.is_empty() {
        return "No checkpoints found.".to_string();
    }

    let rows: Vec<PointRow> = points
        .iter()
        .map(|p| PointRow {
            slot_no: p.slot_no,
            header_hash: p.header_hash.clone(),
        })
        .collect();

    render(rows)
}

pub fn format_metadata_table(metadata: &[Metadatum]) -> String {
    if metadata.is_empty() {
        return "No metadata found.".to_string();
    }

    let rows: Vec<MetadatumRow> = metadata
        .iter()
        .map(|m| {
            let labels = m
                .schema
                .as_object()
                .map(|labels| labels.keys().cloned().collect::<Vec<_>>().join(", "))
                .filter(|labels| !labels.is_empty())
                .unwrap_or_else(|| "-".to_string());

            MetadatumRow {
                hash: truncate_middle(&m.hash, 8),
                labels,
                size: m.raw.len() / 2,
            }
        })
        .collect();

    render(rows)
}

pub fn format_patterns_list(patterns: &[String]) -> String {
    if patterns.is_empty() {
        return "No patterns configured.".to_string();
    }

    patterns.join("\n")
}
