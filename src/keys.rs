use std::path::{Path, PathBuf};

use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::error::Error;

/// Standard Solana CLI keypair location under the home directory.
pub fn default_keypair_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".config")
        .join("solana")
        .join("id.json")
}

/// Reads the user keypair from `path`. There is no fallback generation:
/// a missing or malformed file is fatal.
pub fn load_keypair(path: &Path) -> Result<Keypair, Error> {
    read_keypair_file(path).map_err(|err| Error::Keypair {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keypair_file_is_fatal() {
        let err = load_keypair(Path::new("/nonexistent/id.json")).unwrap_err();
        assert!(matches!(err, Error::Keypair { .. }));
    }

    #[test]
    fn default_path_points_into_the_solana_config_dir() {
        let path = default_keypair_path();
        assert!(path.ends_with(".config/solana/id.json"));
    }
}
