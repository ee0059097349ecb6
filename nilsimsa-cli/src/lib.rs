//! Shared plumbing of the command-line tools.
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use nilsimsa::{Digest, Nilsimsa};
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber writing to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Computes the digest of everything readable from `rdr`.
pub fn digest_reader<R>(mut rdr: R) -> io::Result<Digest>
where
    R: Read,
{
    let mut hasher = Nilsimsa::new();
    io::copy(&mut rdr, &mut hasher)?;
    Ok(hasher.digest())
}

/// Splits the input into raw lines without any text decoding.
/// Line terminators (`\n` or `\r\n`) are stripped.
pub fn read_lines<R>(rdr: R) -> io::Result<Vec<Vec<u8>>>
where
    R: Read,
{
    BufReader::new(rdr)
        .split(b'\n')
        .map(|line| {
            line.map(|mut line| {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                line
            })
        })
        .collect()
}

/// Resolves a command-line operand into a digest.
///
/// With `hex`, the operand must be a hex digest. Otherwise an existing file is digested,
/// even if its name also parses as hex, and anything else is tried as a hex digest
/// before being opened as a path.
pub fn resolve_operand(operand: &str, hex: bool) -> Result<Digest, Box<dyn Error>> {
    resolve_operand_in(Path::new(""), operand, hex)
}

// Relative paths are resolved against `base`.
fn resolve_operand_in(base: &Path, operand: &str, hex: bool) -> Result<Digest, Box<dyn Error>> {
    if hex {
        return Ok(operand.parse()?);
    }
    let path = base.join(operand);
    if !path.exists() {
        if let Ok(digest) = operand.parse() {
            return Ok(digest);
        }
    }
    Ok(digest_reader(File::open(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    const SHORT_MESSAGE_HEX: &str =
        "0BC08E2AC24644D48C08B4D12A9004781C054653D05A539A446A24F9A00027B1";
    const C_HEX: &str = "73302df80673894c115249b1f880abb1ec2b09f1c9726e642b690291e636fe6f";

    #[test]
    fn test_digest_reader() {
        let digest = digest_reader(&b"A short test message"[..]).unwrap();
        assert_eq!(digest.to_hex(), SHORT_MESSAGE_HEX);
    }

    #[test]
    fn test_read_lines() {
        let lines = read_lines(&b"abc\r\n\nd\xffe\nlast"[..]).unwrap();
        assert_eq!(
            lines,
            vec![b"abc".to_vec(), vec![], b"d\xffe".to_vec(), b"last".to_vec()]
        );
    }

    #[test]
    fn test_read_lines_trailing_newline() {
        let lines = read_lines(&b"abc\n"[..]).unwrap();
        assert_eq!(lines, vec![b"abc".to_vec()]);
    }

    #[test]
    fn test_resolve_hex_operand() {
        let digest = resolve_operand(C_HEX, false).unwrap();
        assert_eq!(digest, C_HEX.parse::<Digest>().unwrap());
        assert_eq!(resolve_operand(C_HEX, true).unwrap(), digest);
    }

    #[test]
    fn test_resolve_file_operand() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("message.txt");
        fs::write(&path, "A short test message").unwrap();
        let operand = path.to_str().unwrap();
        assert_eq!(resolve_operand(operand, false).unwrap().to_hex(), SHORT_MESSAGE_HEX);
        // Forced hex never falls back to reading a file.
        assert!(resolve_operand(operand, true).is_err());
    }

    #[test]
    fn test_resolve_existing_file_wins_over_hex_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(C_HEX), "A short test message").unwrap();
        let digest = resolve_operand_in(dir.path(), C_HEX, false).unwrap();
        assert_eq!(digest.to_hex(), SHORT_MESSAGE_HEX);
        assert_eq!(
            resolve_operand_in(dir.path(), C_HEX, true).unwrap(),
            C_HEX.parse::<Digest>().unwrap()
        );
    }

    #[test]
    fn test_resolve_missing_operand() {
        let dir = tempdir().unwrap();
        assert!(resolve_operand_in(dir.path(), "missing.txt", false).is_err());
        assert!(resolve_operand_in(dir.path(), &C_HEX[..63], false).is_err());
        assert_eq!(
            resolve_operand_in(dir.path(), C_HEX, false).unwrap(),
            C_HEX.parse::<Digest>().unwrap()
        );
    }
}
