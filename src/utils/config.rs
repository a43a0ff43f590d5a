/// Default product name shown in the banner
pub const DEFAULT_PRODUCT_NAME: &str = "Lumi TeamCity";

/// Default scheme prepended to every location hint
pub const DEFAULT_LOCATION_SCHEME: &str = "lumi_qn://";

/// Reporter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Product name written in the banner
    pub product_name: String,

    /// Scheme prepended to suite paths and test ids in location hints
    pub location_scheme: String,

    /// Force colored console output on or off (terminal detection when unset)
    pub colors: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
            location_scheme: DEFAULT_LOCATION_SCHEME.to_string(),
            colors: None,
        }
    }
}

impl Config {
    pub fn with_location_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.location_scheme = scheme.into();
        self
    }

    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }
}
