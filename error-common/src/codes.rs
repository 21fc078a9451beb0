// Standardized error codes returned in API error bodies and CLI output

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
    pub const OUT_OF_RANGE: &str = "VALIDATION_1004";
    pub const UNKNOWN_CATALOG_VALUE: &str = "VALIDATION_1005";
}

pub mod configuration {
    pub const SOURCE_UNREADABLE: &str = "CONFIG_2001";
    pub const INVALID_PRICING: &str = "CONFIG_2002";
}

pub mod system {
    pub const SERVER_FAILURE: &str = "SYSTEM_5001";
    pub const NETWORK_FAILURE: &str = "SYSTEM_5002";
    pub const INTERNAL: &str = "SYSTEM_5003";
}
