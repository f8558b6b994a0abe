// Route path constants - single source of truth for all API paths

pub const HEALTHCHECK: &str = "/healthcheck";
pub const SAVE_STRING: &str = "/save-string";
pub const HAS_STRING: &str = "/has-string/{key}";
