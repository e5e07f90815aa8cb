mod use_latest_fetch;

pub use use_latest_fetch::use_latest_fetch;
