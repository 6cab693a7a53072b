use anyhow::{anyhow, Result};
use dex_views_rs::{
    all_views, cache, my_open_orders, order_book, price_chart, trade_history, TokenDescriptor,
    TokenSelection,
};

fn print_usage(bin: &str) {
    eprintln!("Usage:");
    eprintln!("  {} --snapshot <file.json> <token0> <token1> [options]", bin);
    eprintln!();
    eprintln!("  --snapshot <file>  JSON file with allOrders / filledOrders / cancelledOrders");
    eprintln!("  --view <name>      my-open-orders | trade-history | order-book | price-chart | all");
    eprintln!("                     (default: all)");
    eprintln!("  --account <addr>   caller address (required for my-open-orders)");
    eprintln!("  --out <file>       write the view JSON to a file instead of stdout");
    eprintln!();
    eprintln!("  token0 is the base token, token1 the quote token.");
    eprintln!("  Example:");
    eprintln!(
        "    {} --snapshot exchange.json 0x398e..a816 0x7099..79c8 --view order-book",
        bin
    );
}

fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw_args: Vec<String> = std::env::args().collect();
    let bin = raw_args[0].clone();

    let mut snapshot_path: Option<String> = None;
    let mut view_name = "all".to_string();
    let mut account: Option<String> = None;
    let mut out: Option<String> = None;
    let mut tokens: Vec<String> = Vec::new();

    let mut i = 1;
    while i < raw_args.len() {
        match raw_args[i].as_str() {
            "--snapshot" => {
                i += 1;
                snapshot_path = Some(flag_value(&raw_args, i, "--snapshot")?);
            }
            "--view" => {
                i += 1;
                view_name = flag_value(&raw_args, i, "--view")?;
            }
            "--account" => {
                i += 1;
                account = Some(flag_value(&raw_args, i, "--account")?);
            }
            "--out" => {
                i += 1;
                out = Some(flag_value(&raw_args, i, "--out")?);
            }
            arg if arg.starts_with("--") => {
                eprintln!("Unknown flag: {}", arg);
                print_usage(&bin);
                std::process::exit(1);
            }
            _ => tokens.push(raw_args[i].clone()),
        }
        i += 1;
    }

    let snapshot_path = match snapshot_path {
        Some(path) => path,
        None => {
            print_usage(&bin);
            std::process::exit(1);
        }
    };

    if tokens.len() != 2 {
        eprintln!("Expected exactly two token addresses, got {}", tokens.len());
        print_usage(&bin);
        std::process::exit(1);
    }

    let snapshot = cache::load_snapshot(&snapshot_path)?;
    eprintln!(
        "Loaded {} orders ({} filled, {} cancelled) from {}",
        snapshot.all_orders.len(),
        snapshot.filled_orders.len(),
        snapshot.cancelled_orders.len(),
        snapshot_path
    );

    let selection = TokenSelection::select(
        TokenDescriptor::new(&tokens[0]),
        TokenDescriptor::new(&tokens[1]),
    );
    if let Some(pair) = selection.pair() {
        eprintln!("Active pair: {}", pair.label());
    }

    let view_json: serde_json::Value = match view_name.as_str() {
        "my-open-orders" => {
            let account = account
                .as_deref()
                .ok_or_else(|| anyhow!("--account is required for my-open-orders"))?;
            serde_json::to_value(my_open_orders(&snapshot, &selection, account))?
        }
        "trade-history" => serde_json::to_value(trade_history(&snapshot, &selection))?,
        "order-book" => serde_json::to_value(order_book(&snapshot, &selection))?,
        "price-chart" => serde_json::to_value(price_chart(&snapshot, &selection))?,
        "all" => serde_json::to_value(all_views(&snapshot, &selection, account.as_deref()))?,
        other => {
            eprintln!("Unknown view: '{}'", other);
            print_usage(&bin);
            std::process::exit(1);
        }
    };

    match out {
        Some(path) => {
            cache::save_view(&view_json, &path)?;
            eprintln!("Wrote {} view to {}", view_name, path);
        }
        None => println!("{}", serde_json::to_string_pretty(&view_json)?),
    }

    Ok(())
}
