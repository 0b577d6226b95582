//! Input validation.
//!
//! Sanity checks on user input before any network activity: the access-key
//! file must exist and be non-empty, and the target address must parse as an
//! IPv4 or IPv6 literal. No DNS resolution is attempted and CIDR ranges are
//! rejected.

use std::net::IpAddr;
use std::path::Path;

use crate::config::Config;
use crate::error_handling::LookupError;

/// Validates the key file and target address from the configuration.
///
/// In debug mode the key-file path and the candidate address are echoed to
/// stdout before validation. The key file's contents are never echoed.
///
/// # Errors
///
/// - [`LookupError::KeyFileUnreadable`] if the key file cannot be stat'ed
/// - [`LookupError::EmptyKeyFile`] if the key file has size zero
/// - [`LookupError::InvalidAddress`] if the address is not an IP literal
pub fn check_inputs(config: &Config) -> Result<IpAddr, LookupError> {
    if config.debug {
        println!(
            "Path to file containing ipstack key used: {}",
            config.key_file.display()
        );
    }

    check_key_file(&config.key_file)?;

    if config.debug {
        println!("IP address '{}' input", config.address);
    }

    parse_address(&config.address)
}

/// Checks that the key file exists and is non-empty.
fn check_key_file(path: &Path) -> Result<(), LookupError> {
    let metadata = std::fs::metadata(path).map_err(|source| LookupError::KeyFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() == 0 {
        return Err(LookupError::EmptyKeyFile(path.to_path_buf()));
    }

    Ok(())
}

/// Parses the candidate address as an IPv4 or IPv6 literal.
fn parse_address(address: &str) -> Result<IpAddr, LookupError> {
    address
        .parse::<IpAddr>()
        .map_err(|_| LookupError::InvalidAddress(address.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_with(key_file: &Path, address: &str) -> Config {
        Config {
            address: address.to_string(),
            key_file: key_file.to_path_buf(),
            ..Default::default()
        }
    }

    fn valid_key_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp key file");
        write!(file, "any_old_value_here").expect("Failed to write key");
        file.flush().expect("Failed to flush key file");
        file
    }

    #[test]
    fn test_check_inputs_accepts_ipv4_and_ipv6() {
        let key = valid_key_file();

        let ip = check_inputs(&config_with(key.path(), "8.8.8.8")).expect("IPv4 should validate");
        assert_eq!(ip, "8.8.8.8".parse::<IpAddr>().unwrap());

        let ip = check_inputs(&config_with(key.path(), "2001:4860:4860::8888"))
            .expect("IPv6 should validate");
        assert!(ip.is_ipv6());
    }

    #[test]
    fn test_check_inputs_rejects_non_ip_strings() {
        let key = valid_key_file();

        for bad in ["GiBBERISH", "8.8.8.", "8", "8.8.8.8/24", "example.com", ""] {
            let err = check_inputs(&config_with(key.path(), bad))
                .expect_err("non-IP input should be rejected");
            assert_eq!(err.kind(), ErrorKind::Validation, "input: {bad:?}");
            assert!(err.to_string().contains("is not a valid IP address"));
        }
    }

    #[test]
    fn test_check_inputs_rejects_empty_key_file() {
        let empty = NamedTempFile::new().expect("Failed to create temp key file");

        let err = check_inputs(&config_with(empty.path(), "8.8.8.8"))
            .expect_err("empty key file should be rejected");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("size zero"));
    }

    #[test]
    fn test_check_inputs_rejects_missing_key_file() {
        let err = check_inputs(&config_with(Path::new("./no/such/.key"), "8.8.8.8"))
            .expect_err("missing key file should be rejected");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_key_file_fails_even_with_invalid_address() {
        // Key file check runs first, mirroring the pipeline order.
        let empty = NamedTempFile::new().expect("Failed to create temp key file");

        let err = check_inputs(&config_with(empty.path(), "not-an-ip"))
            .expect_err("empty key file should be rejected");
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
