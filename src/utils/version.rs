/// Crate version, matching Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Banner line written when a reporter is created
pub fn version_string(product: &str) -> String {
    format!("{} {}", product, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert_eq!(
            version_string("Lumi TeamCity"),
            format!("Lumi TeamCity {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
