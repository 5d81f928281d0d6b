//! License domain - decoding stored license blobs and building the listing

mod decoder;
mod listing;

pub use decoder::{License, EXPIRATION_DATE_FORMAT};
pub use listing::{build_license_entries, server_id, LicenseEntry, ALL_SERVERS_VALUE};
