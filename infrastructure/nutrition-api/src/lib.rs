pub mod client;
pub mod scan_lookup;
