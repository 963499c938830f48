//! Basic dashboard generation example.
//!
//! Run with: `cargo run --example basic_dashboard`

use dashboard_leptos::{render_dashboard, types::KpiRecord};

fn main() {
    // Raw numeric values, exactly as a server would render them;
    // currency formatting happens client-side on mount.
    let kpis = vec![
        KpiRecord {
            label: "Revenue".into(),
            value: "10000".into(),
            variation: "+5%".into(),
        },
        KpiRecord {
            label: "Expenses".into(),
            value: "8000".into(),
            variation: "-2%".into(),
        },
        KpiRecord {
            label: "Net Cash Flow".into(),
            value: "2000".into(),
            variation: String::new(),
        },
    ];

    // Render to HTML
    let html = render_dashboard(&kpis);

    // Write to file
    let output_path = "basic_dashboard.html";
    std::fs::write(output_path, &html).expect("Failed to write dashboard");

    println!("Dashboard written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
