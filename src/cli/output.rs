//! Output formatting for CLI commands.
//!
//! Advice is printed as either pretty JSON or human-readable text.

use krishi_sahayak::advisor::Advice;

/// Print an advice response.
pub fn print_advice(advice: &Advice, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(advice).unwrap());
    } else {
        println!("{}", advice.text);

        if let Some(chart) = &advice.chart {
            println!("\n{} ({})", chart.title, chart.unit);
            for point in &chart.data {
                println!("  {}  {}", point.label, point.value);
            }
        }

        if let Some(sources) = &advice.sources {
            println!();
            for source in sources {
                println!("source: {} ({})", source.title, source.uri);
            }
        }
    }
}
