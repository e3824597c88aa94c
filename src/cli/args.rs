use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bases")]
#[command(version)]
#[command(about = "Encode and decode binary data as Base2, Base8, Base32, Base64 or BaseX text", long_about = None)]
pub struct Cli {
    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Alphabet to use for encoding/decoding
    #[arg(short, long, value_name = "NAME", default_value = "base32")]
    pub encoding: String,

    /// Decode instead of encode
    #[arg(short, long)]
    pub decode: bool,

    /// Omit trailing `=` padding
    #[arg(long)]
    pub no_pad: bool,

    /// Write Base32 letters in lowercase
    #[arg(long)]
    pub lower: bool,

    /// List available alphabets
    #[arg(short, long)]
    pub list: bool,
}
