mod long_url;

pub use long_url::validate_url;
