// ShopImpact - CLI demo
// Interactive session: log purchases, watch the dashboard update, export CSV

use anyhow::Result;
use std::io::{self, BufRead, Write};

use shopimpact::{export_csv, ImpactOutcome, SessionContext};

fn main() -> Result<()> {
    println!("🌿 ShopImpact v{}", shopimpact::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Log a purchase as:  product; brand; price");
    println!("Commands:           :reset  :export <file>  :quit");
    println!();

    let mut session = SessionContext::with_defaults();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            if !handle_command(command, &mut session)? {
                break;
            }
            continue;
        }

        handle_purchase(line, &mut session);
    }

    println!("\n✅ Session closed");
    Ok(())
}

/// Returns false when the session should end
fn handle_command(command: &str, session: &mut SessionContext) -> Result<bool> {
    let mut parts = command.splitn(2, ' ');
    match (parts.next().unwrap_or(""), parts.next()) {
        ("quit", _) | ("q", _) => return Ok(false),

        ("reset", _) => {
            session.reset();
            println!("🔄 All data cleared");
        }

        ("export", Some(path)) => {
            let path = path.trim();
            export_csv(session.history(), path)?;
            println!("📄 Exported {} purchases to {}", session.history().len(), path);
        }
        ("export", None) => println!("Usage: :export <file>"),

        (other, _) => println!("Unknown command: :{}", other),
    }
    Ok(true)
}

fn handle_purchase(line: &str, session: &mut SessionContext) {
    let mut parts = line.splitn(3, ';');
    let product = parts.next().unwrap_or("");
    let brand = parts.next().map(str::trim);
    let price: f64 = match parts.next().map(str::trim) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("❌ Could not parse price: {}", raw);
                return;
            }
        },
        None => {
            println!("❌ Expected: product; brand; price");
            return;
        }
    };

    match session.submit(product, brand, price) {
        Ok(record) => {
            let symbol = match record.outcome {
                ImpactOutcome::Low => "🍃",
                ImpactOutcome::High => "👣",
            };
            println!("{} {} — {:.2} kg CO₂e", symbol, record.product, record.co2_kg);
        }
        Err(reason) => {
            println!("❌ Rejected: {}", reason);
            return;
        }
    }

    if let Some(advice) = session.advice_for_last() {
        println!("   {}", advice);
    }
    if let Some(alternatives) = session.suggestions_for_last() {
        println!("   💡 Better alternatives next time: {}", alternatives.join(", "));
    }

    print_dashboard(session);
}

fn print_dashboard(session: &SessionContext) {
    let agg = session.aggregates();
    println!("   ── Dashboard ──");
    println!(
        "   Total spent: ${:.2} | Est. CO₂: {:.2} kg | Purchases: {}",
        agg.total_price, agg.total_co2, agg.count
    );

    if let Some(tier) = session.tier() {
        println!("   Status: {} {}", tier.icon(), tier.label());
    }

    if !session.badges().is_empty() {
        let badges: Vec<String> = session
            .badges()
            .iter()
            .map(|b| format!("{} {}", b.icon(), b.label()))
            .collect();
        println!("   Badges: {}", badges.join(" | "));
    }
}
