// Line protocol for hosts that drive the translator as a child process.
//
//   TRANSLATE <text>      -> RESULT <translation>
//   ADD <english> <hindi> -> OK <message> | ERR <message>
//   SAVE                  -> OK <message> | ERR <message>
//   INFO                  -> INFO <json>
//   EXIT
use anyhow::Result;
use hindi_translator::{Translator, TranslatorConfig};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let config = TranslatorConfig::from_args(std::env::args().skip(1))?;
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("--- Translator pipe starting ---");
    let translator = Translator::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        tracing::debug!("<- {:?}", input);
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (input.as_str(), ""),
        };

        let reply = match command {
            "TRANSLATE" => format!("RESULT {}", translator.translate(rest)),
            "ADD" => handle_add(&translator, rest),
            "SAVE" => match translator.save_dictionary() {
                Ok(report) => format!("OK {}", report),
                Err(e) => format!("ERR Error saving dictionary: {}", e),
            },
            "INFO" => format!("INFO {}", info_json(&translator)),
            "EXIT" => break,
            _ => format!("ERR unknown command {:?}", command),
        };
        tracing::debug!("-> {:?}", reply);
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }

    tracing::info!("Translator pipe shutting down.");
    Ok(())
}

fn handle_add(translator: &Translator, args: &str) -> String {
    let Some((english, hindi)) = args.trim().split_once(char::is_whitespace) else {
        return "ERR Please provide both English and Hindi words.".to_string();
    };
    let hindi = hindi.trim();
    if hindi.is_empty() {
        return "ERR Please provide both English and Hindi words.".to_string();
    }
    translator.add_word(english, hindi);
    format!(
        "OK Added '{}': '{}'. New dictionary size: {} words.",
        english.to_lowercase(),
        hindi,
        translator.dictionary_size()
    )
}

fn info_json(translator: &Translator) -> String {
    serde_json::json!({
        "base_size": translator.base_size(),
        "size": translator.dictionary_size(),
        "status": translator.status_message(),
        "resources_ready": translator.resources_ready(),
        "warnings": translator.provision_report().warnings,
    })
    .to_string()
}
