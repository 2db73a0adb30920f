use std::io::{self, BufRead, Write};

use chess_sandbox::{BoardSnapshot, ClickOutcome, GameSession};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Click squares on a terminal board. Enter a square as `e2` or `6 4`
/// (row, column), `reset` to start over, `quit` to leave.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Draw pieces as letters instead of unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Print the snapshot as JSON after every click
    #[arg(long)]
    json: bool,
}

fn render(snapshot: &BoardSnapshot, ascii: bool) -> String {
    let mut out = String::new();
    for (row, views) in snapshot.squares.chunks(8).enumerate() {
        out.push_str(&format!("{} ", 8 - row));
        for view in views {
            let ch = match view.piece {
                Some(p) if ascii => p.code(),
                Some(p) => p.glyph(),
                None if view.light => '.',
                None => ' ',
            };
            if view.selected {
                out.push_str(&format!("[{ch}]"));
            } else {
                out.push_str(&format!(" {ch} "));
            }
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

/// Turn one input line into (row, col). Range is not checked here.
fn parse_square(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [row, col] => Some((row.parse().ok()?, col.parse().ok()?)),
        [name] => {
            let bytes = name.as_bytes();
            if bytes.len() != 2 {
                return None;
            }
            let col = (bytes[0].to_ascii_lowercase() as usize).checked_sub(b'a' as usize)?;
            let rank = (bytes[1] as usize).checked_sub(b'1' as usize)?;
            Some((7usize.checked_sub(rank)?, col))
        }
        _ => None,
    }
}

fn describe(outcome: ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "nothing there".to_string(),
        ClickOutcome::Selected(s) => format!("picked up {s}"),
        ClickOutcome::Deselected(s) => format!("put back {s}"),
        ClickOutcome::Moved(m) => match m.captured {
            Some(victim) => format!("{} {}x{} ({} taken)", m.piece.code(), m.from, m.to, victim.code()),
            None => format!("{} {}-{}", m.piece.code(), m.from, m.to),
        },
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = GameSession::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render(&session.snapshot(), args.ascii));
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => session.reset(),
            _ => {
                let Some((row, col)) = parse_square(input) else {
                    println!("can't read '{input}'");
                    continue;
                };
                match session.on_square_clicked(row, col) {
                    Ok(outcome) => println!("{}", describe(outcome)),
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                }
            }
        }

        let snapshot = session.snapshot();
        if args.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
        print!("{}", render(&snapshot, args.ascii));
        stdout.flush()?;
    }
    Ok(())
}
