mod args;

use bases::{AlphabetRegistry, EncodeSettings};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use args::Cli;

const PREVIEW_LEN: usize = 20;
const CONTEXT_LEN: usize = 60;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load alphabets configuration with user overrides
    let config = AlphabetRegistry::load_with_overrides()?;

    if cli.list {
        print_alphabets(&config);
        return Ok(());
    }

    let scheme = config
        .get_alphabet(&cli.encoding)?
        .scheme()
        .map_err(|e| format!("error: invalid alphabet '{}': {}", cli.encoding, e))?;

    let input = read_input(cli.file.as_deref())?;

    if cli.decode {
        let text = String::from_utf8(input)
            .map_err(|_| "error: input must be valid UTF-8 for decoding")?;
        let text = text.trim();
        let decoded = scheme.decode(text).map_err(|e| match e.character() {
            Some((_, position)) => format!("{}\n\n{}", e, error_context(text, position)),
            None => e.to_string(),
        })?;
        io::stdout().write_all(&decoded)?;
    } else {
        let settings = EncodeSettings {
            pad: !cli.no_pad,
            lowercase: cli.lower,
        };
        println!("{}", scheme.encode(&input, settings));
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>, String> {
    match file {
        Some(path) => fs::read(path)
            .map_err(|e| format!("error: cannot read {}: {}", path.display(), e)),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| format!("error: cannot read stdin: {}", e))?;
            Ok(buffer)
        }
    }
}

/// The input around `position` with a caret under that character.
fn error_context(input: &str, position: usize) -> String {
    let start = position.saturating_sub(CONTEXT_LEN / 2);
    let window: String = input.chars().skip(start).take(CONTEXT_LEN).collect();
    format!("  {}\n  {}^", window, " ".repeat(position - start))
}

fn print_alphabets(config: &AlphabetRegistry) {
    println!("Available alphabets:\n");
    for name in config.names() {
        let Ok(alphabet) = config.get_alphabet(name) else {
            continue;
        };
        let chars = alphabet.effective_chars();
        let count = chars.chars().count();
        let preview: String = chars.chars().take(PREVIEW_LEN).collect();
        let suffix = if count > PREVIEW_LEN { "..." } else { "" };
        println!(
            "  {:<15} base-{:<3} {:<10}  {}{}",
            name,
            count,
            alphabet.codec.name(),
            preview,
            suffix
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context_points_at_character() {
        assert_eq!(error_context("MZXW6YT!", 7), "  MZXW6YT!\n         ^");
    }

    #[test]
    fn test_error_context_windows_long_input() {
        let input = format!("{}!{}", "A".repeat(100), "B".repeat(100));
        let context = error_context(&input, 100);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines[0].chars().count(), 2 + CONTEXT_LEN);
        assert_eq!(lines[0].chars().nth(2 + CONTEXT_LEN / 2), Some('!'));
        assert_eq!(lines[1].len(), 2 + CONTEXT_LEN / 2 + 1);
        assert!(lines[1].ends_with('^'));
    }
}
