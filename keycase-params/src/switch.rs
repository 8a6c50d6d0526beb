//! Switch and stabilizer cutout configuration.

/// Cutout dimensions for the configured switch family.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchConfig {
    pub switch_type: String,
    pub stabilizer_type: String,
    /// Cutout width in millimetres, kerf applied.
    pub cutout_width: f64,
    /// Cutout height in millimetres, kerf applied.
    pub cutout_height: f64,
}

impl SwitchConfig {
    /// Build the cutout for a switch type. Unknown types use the MX cutout.
    pub fn new(switch_type: &str, stabilizer_type: &str, kerf: f64) -> Self {
        let (width, height) = match switch_type {
            "alps" => (15.5, 12.8),
            "choc" | "kailh_choc" => (13.8, 13.8),
            _ => (14.0, 14.0),
        };
        Self {
            switch_type: switch_type.to_string(),
            stabilizer_type: stabilizer_type.to_string(),
            cutout_width: width - kerf * 2.0,
            cutout_height: height - kerf * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mx_cutout() {
        let config = SwitchConfig::new("mx_openable", "cherry", 0.0);
        assert_eq!(config.cutout_width, 14.0);
        assert_eq!(config.cutout_height, 14.0);
    }

    #[test]
    fn test_kerf_shrinks_cutout() {
        let config = SwitchConfig::new("alps", "cherry", 0.25);
        assert_eq!(config.cutout_width, 15.0);
        assert_eq!(config.cutout_height, 12.3);
    }
}
