//! Command-line interface definition using clap.

use clap::Parser;

use crate::platform::Platform;

/// Normalize chat exports from WhatsApp, Instagram, Telegram and Discord
/// into a canonical JSON message sequence.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatnorm")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatnorm whatsapp_chat.txt
    chatnorm chat.txt --platform whatsapp
    chatnorm messages.json -p ig --pretty -o normalized.json
    cat export.txt | chatnorm -
    chatnorm export.txt --summary")]
pub struct Args {
    /// Path to the export file, or `-` to read from stdin
    pub input: String,

    /// Source platform (skips auto-detection)
    #[arg(short, long, value_enum)]
    pub platform: Option<Platform>,

    /// Path to the output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print title and counts instead of the normalized messages
    #[arg(long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["chatnorm", "chat.txt"]);
        assert_eq!(args.input, "chat.txt");
        assert!(args.platform.is_none());
        assert!(!args.pretty);
    }

    #[test]
    fn test_args_parse_platform_alias() {
        let args = Args::parse_from(["chatnorm", "chat.txt", "-p", "wa"]);
        assert_eq!(args.platform, Some(Platform::WhatsApp));
    }

    #[test]
    fn test_args_parse_full() {
        let args = Args::parse_from([
            "chatnorm",
            "-",
            "--platform",
            "telegram",
            "--output",
            "out.json",
            "--pretty",
        ]);
        assert_eq!(args.input, "-");
        assert_eq!(args.platform, Some(Platform::Telegram));
        assert_eq!(args.output.as_deref(), Some("out.json"));
        assert!(args.pretty);
    }
}
