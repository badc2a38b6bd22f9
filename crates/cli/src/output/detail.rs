//! Detailed output formatting for single lookups.

use colored::Colorize;
use kupo_rs_api::Script;

fn header(output: &mut String, title: &str) {
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));
}

pub fn format_datum_detail(datum_hash: &str, datum: &str) -> String {
    let mut output = String::new();

    header(&mut output, "Datum");
    output.push_str(&format!("  Hash:  {}\n", datum_hash));
    output.push_str(&format!("  Size:  {} bytes\n\n", datum.len() / 2));

    output.push_str(&format!("{}\n", "CBOR".cyan().bold()));
    output.push_str(&format!("  {}\n", datum));

    output
}

pub fn format_script_detail(script: &Script, script_hash: &str) -> String {
    let mut output = String::new();

    header(&mut output, "Script");
    output.push_str(&format!("  Hash:      {}\n", script_hash));
    output.push_str(&format!("  Language:  {}\n", script.language));
    output.push_str(&format!("  Size:      {} bytes\n\n", script.script.len() / 2));

    output.push_str(&format!("{}\n", "CBOR".cyan().bold()));
    output.push_str(&format!("  {}\n", script.script));

    output
}
