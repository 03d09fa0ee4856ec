//! Tapvote CLI
//!
//! Usage:
//!   tapvote                          # Interactive kiosk mode
//!   tapvote --serve                  # HTTP API server
//!   tapvote --summary                # One-shot aggregate view
//!   tapvote --export                 # One-shot report file
//!   tapvote --json                   # JSON output in interactive mode

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

use tapvote::core::{
    matrix_table, recent_list, run_server, session_report, GateConfig, Kiosk,
};
use tapvote::core::store::FileStorage;
use tapvote::types::{AgeBracket, Category, ViewState};
use tapvote::{EXPORT_FILENAME, RECENT_VOTES_SHOWN, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "tapvote",
    version = VERSION,
    about = "Tapvote - single-tap satisfaction kiosk core",
    long_about = "Tapvote collects single-tap satisfaction votes tagged with an age\n\
                  bracket, persists them locally, and reconstructs the aggregate\n\
                  category × age matrix behind a disguised triple-tap gesture.\n\n\
                  Interactive commands:\n  \
                  age <bracket>    Select the age bracket (-15, 15-19, 20-24, 25-39, 40-59, 60+)\n  \
                  vote <category>  Cast a vote (excellent/bien/moyen/insuffisant or a rating 1-5)\n  \
                  tap <x> <y>      Pointer event (three fast taps in the top-right corner...)\n  \
                  summary          Session tally\n  \
                  export           Write the session report file\n  \
                  reset            Reset the session tally\n  \
                  back             Return to the vote view\n  \
                  quit             Exit"
)]
struct Args {
    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// One-shot: print the aggregate matrix from the persisted store
    #[arg(long)]
    summary: bool,

    /// One-shot: write the report for the persisted totals and exit
    #[arg(long)]
    export: bool,

    /// Directory for persisted feedback (default: ./data)
    #[arg(long, default_value = "./data")]
    data_dir: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if args.serve {
        run_serve(&args).await;
    } else if args.summary {
        run_summary(&args);
    } else if args.export {
        run_export(&args);
    } else {
        run_interactive(&args);
    }
}

/// Run the HTTP API server
async fn run_serve(args: &Args) {
    if let Err(e) = run_server(&args.addr, args.data_dir.clone()).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// One-shot aggregate view from the persisted store
fn run_summary(args: &Args) {
    let kiosk = open_kiosk(args);

    if args.json {
        let payload = serde_json::json!({
            "matrix": kiosk.matrix(),
            "totals": kiosk.totals(),
            "records": kiosk.record_count(),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
        return;
    }

    print_admin_view(&kiosk);
}

/// One-shot report file over the persisted totals
fn run_export(args: &Args) {
    let kiosk = open_kiosk(args);
    let report = session_report(&kiosk.totals());

    match std::fs::write(EXPORT_FILENAME, &report) {
        Ok(()) => println!("Report written to {}", EXPORT_FILENAME),
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Interactive kiosk mode
fn run_interactive(args: &Args) {
    let mut kiosk = open_kiosk(args);
    let mut age: Option<AgeBracket> = None;

    print_header();
    println!("Select a bracket with 'age <bracket>', then vote. 'help' lists commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&kiosk, age);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Votes this session: {}", kiosk.session().total());
            break;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default().to_lowercase();

        match command.as_str() {
            "age" => match parts.next().map(str::parse::<AgeBracket>) {
                Some(Ok(bracket)) => {
                    age = Some(bracket);
                    println!("Tranche d'âge: {}", bracket);
                }
                _ => println!("{}", "Usage: age <-15|15-19|20-24|25-39|40-59|60+>".red()),
            },
            "vote" => handle_vote(&mut kiosk, age, parts.next(), args.json),
            "tap" => handle_tap(&mut kiosk, parts.next(), parts.next(), args.json),
            "summary" => {
                let session = kiosk.session();
                println!("{}", session_report(&session));
            }
            "export" => {
                let report = session_report(&kiosk.session());
                match std::fs::write(EXPORT_FILENAME, &report) {
                    Ok(()) => println!("Report written to {}", EXPORT_FILENAME),
                    Err(e) => println!("{}", format!("Export failed: {}", e).red()),
                }
            }
            "reset" => {
                kiosk.reset_session();
                println!("Session tally reset (persisted history untouched).");
            }
            "back" => {
                kiosk.back_to_vote();
                println!("Retour au vote.");
            }
            "help" => print_help(),
            other => println!("{}", format!("Unknown command: {}", other).red()),
        }
    }
}

/// Cast one vote from the command line
fn handle_vote(
    kiosk: &mut Kiosk<FileStorage>,
    age: Option<AgeBracket>,
    token: Option<&str>,
    json: bool,
) {
    let Some(age) = age else {
        println!("{}", "Choisis une tranche d'âge avant de voter.".red());
        return;
    };

    let Some(token) = token else {
        println!("{}", "Usage: vote <excellent|bien|moyen|insuffisant|1-5>".red());
        return;
    };

    // Accept a category token or a raw rating
    let outcome = if let Ok(category) = token.parse::<Category>() {
        kiosk.submit_vote(category, age)
    } else if let Ok(rating) = token.parse::<i64>() {
        kiosk.submit_rating(rating, age)
    } else {
        println!("{}", "Usage: vote <excellent|bien|moyen|insuffisant|1-5>".red());
        return;
    };

    if json {
        println!("{}", serde_json::to_string(&outcome).unwrap_or_default());
        return;
    }

    let category = outcome.category;
    println!(
        "{}{} {}{}",
        category.color_code(),
        category.emoji(),
        outcome.to_parseable_string(),
        Category::color_reset()
    );
    println!("{}", "Merci de votre réponse".green());
    if !outcome.persisted {
        println!("{}", "  ⚠ Vote counted for this session only (storage failed)".yellow());
    }
}

/// Feed one pointer event to the gate
fn handle_tap(
    kiosk: &mut Kiosk<FileStorage>,
    x: Option<&str>,
    y: Option<&str>,
    json: bool,
) {
    let coords = x
        .and_then(|x| x.parse::<f64>().ok())
        .zip(y.and_then(|y| y.parse::<f64>().ok()));
    let Some((x, y)) = coords else {
        println!("{}", "Usage: tap <x> <y>".red());
        return;
    };

    let now_ms = chrono::Utc::now().timestamp_millis() as u64;
    let output = kiosk.on_tap(x, y, now_ms);

    if json {
        println!("{}", serde_json::to_string(&output).unwrap_or_default());
    } else {
        println!("{}", output.to_terminal_string());
    }

    if output.unlocked {
        println!();
        print_admin_view(kiosk);
    }
}

/// Print the operator view: matrix, totals, recent votes
fn print_admin_view(kiosk: &Kiosk<FileStorage>) {
    println!("{}", "Répartition par tranche d'âge".bold());
    if kiosk.record_count() == 0 {
        println!("Aucune donnée enregistrée.");
    } else {
        println!("{}", matrix_table(&kiosk.matrix()));
    }

    println!("{}", "Derniers votes".bold());
    println!("{}", recent_list(kiosk.recent(RECENT_VOTES_SHOWN)));
    println!();
    println!("{}", session_report(&kiosk.session()));
}

fn open_kiosk(args: &Args) -> Kiosk<FileStorage> {
    Kiosk::new(FileStorage::new(&args.data_dir), GateConfig::default())
}

/// Print header
fn print_header() {
    println!("========================================");
    println!("  Tapvote v{} - Kiosk Mode", VERSION);
    println!("========================================");
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  age <bracket>    Select the age bracket (-15, 15-19, 20-24, 25-39, 40-59, 60+)");
    println!("  vote <category>  Cast a vote (excellent/bien/moyen/insuffisant or a rating 1-5)");
    println!("  tap <x> <y>      Pointer event");
    println!("  summary          Session tally");
    println!("  export           Write {}", EXPORT_FILENAME);
    println!("  reset            Reset the session tally");
    println!("  back             Return to the vote view");
    println!("  quit             Exit");
}

/// Format the interactive prompt
fn format_prompt(kiosk: &Kiosk<FileStorage>, age: Option<AgeBracket>) -> String {
    let age_label = age.map(|a| a.label()).unwrap_or("?");
    match kiosk.view() {
        ViewState::Vote => format!("[vote | age={}] > ", age_label),
        ViewState::Admin => format!("[{} | age={}] > ", "admin".green(), age_label),
    }
}
