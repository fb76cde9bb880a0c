mod args;
mod progress;

use crate::args::{Args, CheckArgs, Commands};
use crate::progress::LookupProgress;

use aviso::api::{MessageCategory, Verification, VerificationClient, VerificationRequest};
use aviso::tariff_code::TariffCode;
use clap::Parser;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    category: MessageCategory,
    #[serde(flatten)]
    verification: &'a Verification,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Args { endpoint, command } = Args::parse();
    let client = VerificationClient::new(endpoint.config())?;

    match &command {
        Commands::Check(args) => {
            if let Some(code) = unshaped_code(&args.code) {
                eprintln!("[WARNING] {code} no tiene la forma ####.##.##, se consulta tal cual");
            }

            let verification = check(&client, args);
            if args.json {
                let report = Report {
                    category: verification.outcome.category(),
                    verification: &verification,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                render(&verification);
            }
        }
        Commands::Health => {
            let health = client.health()?;
            println!("status: {}", health.status);
            for origin in &health.origins {
                println!("allowed origin: {origin}");
            }
        }
    }
    Ok(())
}

/// The normalized code when it will not be sent in `####.##.##` form.
fn unshaped_code(raw: &str) -> Option<TariffCode> {
    if raw.trim().is_empty() {
        return None;
    }
    let code = TariffCode::normalize(raw);
    (!code.is_dotted()).then_some(code)
}

fn check(client: &VerificationClient, args: &CheckArgs) -> Verification {
    let mut request = VerificationRequest::new(args.industry.clone(), args.code.clone());
    if let Some(origin) = args.origin {
        request = request.with_origin(origin);
    }

    let progress = if args.json {
        LookupProgress::hidden()
    } else {
        LookupProgress::new("Consultando…")
    };
    let verification = client.check(request);
    progress.finish_and_clear();

    verification
}

fn render(verification: &Verification) {
    let outcome = verification.outcome;
    println!("{}", outcome.headline());
    println!("{}", outcome.note());

    let Some(record) = verification.record.as_ref().filter(|r| !r.is_empty()) else {
        return;
    };
    if let Some(description) = &record.descripcion {
        println!("\n{description}");
    }
    if let Some(message) = &record.mensaje {
        println!("({message})");
    }
}
