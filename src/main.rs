use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use betcheck::error::CheckError;
use betcheck::form::CheckForm;
use betcheck::render::{self, Style};
use betcheck::router::{Resolved, Router};
use betcheck::{config, run};

/// betcheck — check a lottery bet code against a drawn result, pair by pair.
/// Both codes are read as two-digit groups; a result pair lights up when
/// the bet contains the same pair anywhere.
#[derive(Parser)]
#[command(
    name = "betcheck",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BETCHECK_BUILD_COMMIT"), ")"),
    about
)]
struct Cli {
    /// Drawn result code: five or more two-digit groups (e.g. 010203040506).
    result: Option<String>,

    /// Bet code to check, no longer than the result.
    bet: Option<String>,

    /// Machine-readable JSON output (one-shot mode).
    #[arg(long)]
    json: bool,

    /// Resolve a routed page instead of running a check (e.g. "/history").
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Authentication flag supplied by the hosting environment.
    /// Routed pages other than "/" require it.
    #[arg(long)]
    auth: bool,

    /// TOML route table. Without it, only the root check page exists.
    #[arg(long, value_name = "FILE")]
    routes: Option<PathBuf>,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "betcheck", &mut io::stdout());
        return;
    }

    // When piped (not a TTY), markers instead of escape codes — scripts
    // grep the output
    let is_tty = io::stdout().is_terminal();
    let style = if is_tty { Style::Ansi } else { Style::Plain };

    // Route mode: resolve a page through the table
    if let Some(path) = cli.route.as_deref() {
        if let Err(e) = resolve_route(cli.routes.as_deref(), path, cli.auth, style) {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
        return;
    }

    match (cli.result, cli.bet) {
        // One-shot check
        (Some(result), Some(bet)) => {
            if cli.json {
                let state = betcheck::check(&result, &bet);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&state)
                        .expect("FormState is always serializable")
                );
            } else {
                println!("{}", run(&result, &bet, style));
            }
        }
        (Some(_), None) => {
            eprintln!("usage: betcheck <result> <bet> [--json]");
            process::exit(3);
        }
        // No operands: interactive form
        (None, _) => interactive(style),
    }
}

/// Build the router from the table (file-loaded or default) and render
/// whatever the path resolves to.
fn resolve_route(
    routes_file: Option<&Path>,
    path: &str,
    auth: bool,
    style: Style,
) -> Result<(), CheckError> {
    let routes = match routes_file {
        Some(file) => config::load_routes(file)?,
        None => config::default_routes(),
    };
    match Router::new(routes).resolve(path, auth) {
        Resolved::Screen(screen) => {
            println!("{}", screen.render(style));
            Ok(())
        }
        Resolved::Denied { path } => Err(CheckError::AccessDenied { path }),
        Resolved::NotFound => Err(CheckError::RouteNotFound {
            path: path.to_string(),
        }),
    }
}

/// Line-driven form session. Every field update re-renders through a
/// subscribed listener, the same on-change path the library exposes;
/// a blank line re-validates without changing values (blur).
fn interactive(style: Style) {
    let mut form = CheckForm::new();
    form.subscribe(move |state| {
        println!("{}", render::report(state, style));
    });

    println!(
        "betcheck: \"result <code>\" / \"bet <code>\" set a field, \
         a blank line re-validates, \"quit\" exits"
    );
    println!("{}", render::report(form.state(), style));

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or unreadable stdin
            Ok(_) => {}
        }
        let input = line.trim();
        if input == "quit" {
            break;
        }
        if input.is_empty() {
            form.blur();
            continue;
        }
        match input.split_once(char::is_whitespace) {
            Some(("result", v)) => form.set_result(v.trim()),
            Some(("bet", v)) => form.set_bet(v.trim()),
            // Bare field name clears the field
            None if input == "result" => form.set_result(""),
            None if input == "bet" => form.set_bet(""),
            _ => eprintln!("unrecognized input: use \"result <code>\" or \"bet <code>\""),
        }
    }
}
