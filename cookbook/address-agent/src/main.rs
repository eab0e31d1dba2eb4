//! Minimal host that registers the address toolkit and invokes it.
//!
//! Reads one JSON arguments object from stdin; with empty stdin it runs a
//! handful of sample addresses instead.
//!
//! ```sh
//! echo '{"city": "Paris", "zip_code": "75001"}' | cargo run -p address-agent
//! ```

use address_toolkit::{
    address_toolkit, init_tracing, AppConfig, FormatAddressTool, Result, ToolRegistry,
};
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_tracing(&config.logging)?;

    let registry = address_toolkit();
    println!("{}", serde_json::to_string_pretty(&registry.describe())?);

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    let calls: Vec<Value> = if raw.trim().is_empty() {
        tracing::info!("no arguments on stdin, running samples");
        samples()
    } else {
        vec![serde_json::from_str(&raw)?]
    };

    for args in calls {
        invoke(&registry, args).await?;
    }
    Ok(())
}

async fn invoke(registry: &ToolRegistry, args: Value) -> Result<()> {
    println!("\n>>> {args}");
    let result = registry.call(FormatAddressTool::NAME, args).await?;
    match result.as_str() {
        Some(label) => println!("{label}"),
        None => println!("{result}"),
    }
    Ok(())
}

fn samples() -> Vec<Value> {
    vec![
        json!({
            "street": "123 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "62704",
            "country": "USA"
        }),
        json!({"street": "", "city": "", "state": "", "zip_code": "", "country": ""}),
        json!({"street": "10 Downing St", "country": "UK"}),
        json!({"city": "Paris", "zip_code": "75001"}),
    ]
}
