use anyhow::Result;
use crossterm::style::Stylize;
use hindi_translator::error::LexiconError;
use hindi_translator::{SaveReport, Translator, TranslatorConfig};
use std::io::{stdin, stdout, Write};
use std::path::Path;

const HELP: &str = "\
Type an English sentence and press [Enter] to translate it.
  :add <english> <hindi...>  add a word for this session
  :save [file]               write the dictionary file (or a copy to <file>)
  :explain <sentence>        show how each word was resolved
  :reload                    merge the dictionary file again
  :info                      dictionary and resource status
  :help                      this text
  :quit                      exit (unsaved words are lost)";

fn main() -> Result<()> {
    let config = TranslatorConfig::from_args(std::env::args().skip(1))?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let translator = Translator::from_config(&config);

    println!("{}", "English to Hindi Translator".bold());
    println!("---------------------------------------------------------------");
    print_info(&translator);
    println!("Note: this is a basic word-by-word translator. It may not handle complex sentences or idioms well.");
    println!("Type ':help' for commands.\n");

    loop {
        print!("> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            ":quit" | ":exit" => break,
            ":help" => println!("{}", HELP),
            ":info" => print_info(&translator),
            ":add" => add_word(&translator, rest),
            ":save" => match save(&translator, rest) {
                Ok(report) => println!("{}", report.to_string().green()),
                Err(e) => println!("{}", format!("Error saving dictionary: {}", e).red()),
            },
            ":reload" => {
                let status = translator.reload_overrides();
                if status.is_failure() {
                    println!("{}", status.to_string().red());
                } else {
                    println!("{}", status);
                }
            }
            ":explain" => explain(&translator, rest),
            s if s.starts_with(':') => {
                println!("Invalid command. Type :help to see the valid commands");
            }
            _ => println!("{}", translator.translate(line).cyan()),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn add_word(translator: &Translator, args: &str) {
    let (english, hindi) = match args.split_once(char::is_whitespace) {
        Some((english, hindi)) => (english.trim(), hindi.trim()),
        None => (args, ""),
    };
    if english.is_empty() || hindi.is_empty() {
        println!("{}", "Please provide both English and Hindi words.".red());
        return;
    }

    translator.add_word(english, hindi);
    println!(
        "{}",
        format!("Added '{}': '{}' to the current session's dictionary.", english.to_lowercase(), hindi).green()
    );
    println!("New dictionary size: {} words.", translator.dictionary_size());
    println!(
        "{}",
        "This change is for the current session only. Use :save to make it persistent.".yellow()
    );
}

fn save(translator: &Translator, path: &str) -> Result<SaveReport, LexiconError> {
    if path.is_empty() {
        translator.save_dictionary()
    } else {
        translator.save_dictionary_to(Path::new(path))
    }
}

fn explain(translator: &Translator, sentence: &str) {
    let translation = translator.explain(sentence);
    for token in &translation.tokens {
        println!("  {:<20} -> {:<20} {:?}", token.source, token.output, token.resolution);
    }
    println!("{}", translation.text.cyan());
}

fn print_info(translator: &Translator) {
    println!(
        "{} Current dictionary size: {} words.",
        translator.status_message(),
        translator.dictionary_size()
    );
    if translator.resources_ready() {
        println!("{}", "Linguistic resources: ready".green());
    } else {
        println!("{}", "Linguistic resources: setup issue".red());
        for warning in &translator.provision_report().warnings {
            println!("  {}", warning.as_str().yellow());
        }
    }
}
