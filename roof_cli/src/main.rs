//! # SmartRoof CLI Application
//!
//! Terminal front end for the roofing estimation engine.
//!
//! ## Usage
//!
//! - `roof_cli` - interactive roof estimate (local engine)
//! - `roof_cli quote` - detailed quote with slope/complexity/labor split
//! - `roof_cli chat` - support chat session (type "bye" to leave)
//!
//! Set `SMARTROOF_SERVER` to a base URL (e.g. `http://localhost:5000`) to
//! run estimates and chat against a remote calculation server instead of
//! the local engine.

mod remote;

use std::io::{self, BufRead, Write};

use roof_core::calculations::estimate::{calculate, EstimateInput};
use roof_core::calculations::quote::{quote, QuoteInput};
use roof_core::chat::{ChatBot, ChatSession};
use roof_core::materials::catalog::{ProductCatalog, DEFAULT_RECOMMENDATION_LIMIT};

use remote::{CalculateRequest, RemoteCalculator};

const SERVER_ENV_VAR: &str = "SMARTROOF_SERVER";

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("SmartRoof CLI - Roofing Material Estimator");
    println!("==========================================");
    println!();

    match std::env::args().nth(1).as_deref() {
        Some("chat") => run_chat(),
        Some("quote") => run_quote(),
        _ => run_estimate(),
    }
}

fn run_estimate() {
    let metric = prompt_str("Dimension units (ft/m) [ft]: ", "ft").eq_ignore_ascii_case("m");
    let unit_label = if metric { "m" } else { "ft" };
    let length = prompt_f64(&format!("Enter roof length ({}) [10.0]: ", unit_label), 10.0);
    let width = prompt_f64(&format!("Enter roof width ({}) [20.0]: ", unit_label), 20.0);
    let roof_type = prompt_str("Enter roof type (flat/gable/hip/mansard/gambrel) [gable]: ", "gable");
    let material_type = prompt_str("Enter material (Metal Sheets/Shingles/Tiles/Membrane/Polycarbonate) [Metal Sheets]: ", "Metal Sheets");
    let price_per_unit = prompt_f64("Enter price per unit [25.0]: ", 25.0);

    let input = if metric {
        EstimateInput::from_metric(
            "CLI estimate",
            length,
            width,
            roof_type,
            material_type,
            price_per_unit,
        )
    } else {
        EstimateInput {
            label: "CLI estimate".to_string(),
            length_ft: length,
            width_ft: width,
            roof_type,
            material_type,
            price_per_unit,
        }
    };

    if let Ok(server) = std::env::var(SERVER_ENV_VAR) {
        run_remote_estimate(
            &server,
            input.length_ft,
            input.width_ft,
            &input.roof_type,
            &input.material_type,
        );
        return;
    }

    match calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  ROOF ESTIMATE");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Footprint: {:.1} x {:.1} ft", input.length_ft, input.width_ft);
            println!("  Roof type: {}", input.roof_type);
            println!("  Material:  {}", input.material_type);
            println!();
            println!("Material Takeoff:");
            println!("  Base area:     {:.1} sq ft", result.area_sqft);
            println!("  Adjusted area: {:.1} sq ft", result.adjusted_area_sqft);
            println!("  With waste:    {:.1} sq ft", result.final_area_sqft);
            println!("  Units needed:  {} ({:.0} sq ft each)",
                result.units_needed, result.coverage_per_unit_sqft);
            println!();
            println!("Cost:");
            println!("  Subtotal: ${:.2}", result.cost.subtotal);
            println!("  Tax:      ${:.2}", result.cost.tax);
            println!("  Total:    ${:.2}", result.cost.total);
            println!();
            println!("═══════════════════════════════════════");

            let catalog = ProductCatalog::with_sample_products();
            let picks = catalog.recommend_for(&input.material_type, DEFAULT_RECOMMENDATION_LIMIT);
            if !picks.is_empty() {
                println!();
                println!("Recommended products:");
                for product in picks {
                    println!("  #{} {} - ${:.2}", product.id, product.name, product.price);
                }
            }

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn run_remote_estimate(
    server: &str,
    length_ft: f64,
    width_ft: f64,
    roof_type: &str,
    material_type: &str,
) {
    println!();
    println!("Using remote calculator at {}", server);

    let remote = match RemoteCalculator::new(server) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let request = CalculateRequest {
        length: length_ft,
        width: width_ft,
        roof_type: roof_type.to_string(),
        material_type: material_type.to_string(),
    };

    match remote.calculate(&request) {
        Ok(response) => {
            let calc = &response.calculation;
            println!();
            println!("Material Takeoff:");
            println!("  Base area:     {:.1} sq ft", calc.area);
            println!("  Adjusted area: {:.1} sq ft", calc.adjusted_area);
            println!("  With waste:    {:.1} sq ft", calc.final_area);
            println!("  Units needed:  {} ({:.0} sq ft each)",
                calc.units_needed, calc.coverage_per_unit);

            if !response.recommended_products.is_empty() {
                println!();
                println!("Recommended products:");
                for product in &response.recommended_products {
                    println!("  #{} {} - ${:.2}", product.id, product.name, product.price);
                }
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn run_quote() {
    let length_ft = prompt_f64("Enter roof length (ft) [40.0]: ", 40.0);
    let width_ft = prompt_f64("Enter roof width (ft) [30.0]: ", 30.0);
    let material_type = prompt_str("Enter material (metal_sheets/shingles/tiles) [shingles]: ", "shingles");
    let slope_pitch = prompt_f64("Enter slope pitch (rise per 12) [6.0]: ", 6.0);
    let complexity = prompt_str("Enter job complexity (simple/moderate/complex) [moderate]: ", "moderate");
    let location = prompt_str("Enter job location []: ", "");

    let input = QuoteInput {
        label: "CLI quote".to_string(),
        length_ft,
        width_ft,
        material_type,
        slope_pitch,
        complexity,
        location,
    };

    match quote(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  DETAILED QUOTE");
            println!("═══════════════════════════════════════");
            println!();
            println!("Takeoff:");
            println!("  Roof area: {:.1} sq ft", result.area_sqft);
            println!("  Units:     {} {}", result.takeoff.units, result.takeoff.unit_name);
            println!();
            println!("Costs:");
            println!("  Materials: ${:.2}", result.costs.material_cost);
            println!("  Labor:     ${:.2}", result.costs.labor_cost);
            println!("  Total:     ${:.2} (${:.2}/sq ft)",
                result.costs.total_cost, result.costs.cost_per_sqft);
            println!();
            println!("Confidence: {:.0}%", result.confidence * 100.0);
            for note in &result.recommendations {
                println!("  - {}", note);
            }
            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn run_chat() {
    println!("Support chat. Type \"bye\" to leave.");
    println!();

    let server = std::env::var(SERVER_ENV_VAR).ok();
    let remote = match server.as_deref().map(RemoteCalculator::new) {
        Some(Ok(r)) => Some(r),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            return;
        }
        None => None,
    };

    let bot = ChatBot::new();
    let mut session = ChatSession::new();
    let stdin = io::stdin();

    loop {
        print!("you> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("bye") {
            break;
        }

        match &remote {
            Some(remote) => match remote.chat(message) {
                Ok(reply) => {
                    // Keep local session stats even when the reply is remote.
                    let _ = bot.reply(&mut session, message);
                    println!("bot> {}", reply);
                }
                Err(e) => eprintln!("Error: {}", e),
            },
            None => {
                let reply = bot.reply(&mut session, message);
                println!("bot> {}", reply);
            }
        }
        println!();
    }

    println!();
    println!("Session summary:");
    println!("  Messages: {}", session.user_messages());
    if session.topics().is_empty() {
        println!("  Topics:   (none detected)");
    } else {
        let topics: Vec<String> = session
            .topics()
            .iter()
            .map(|t| format!("{:?}", t).to_lowercase())
            .collect();
        println!("  Topics:   {}", topics.join(", "));
    }
}
