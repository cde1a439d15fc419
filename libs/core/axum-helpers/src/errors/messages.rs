//! User-facing error messages. The product locale is Indonesian.

pub const NOT_FOUND_RESOURCE: &str = "Data tidak ditemukan";
pub const ROUTE_NOT_FOUND: &str = "Endpoint tidak ditemukan";
pub const INTERNAL_ERROR: &str = "Terjadi kesalahan pada server";
pub const VALIDATION_FAILED: &str = "Data yang dikirim tidak valid";
pub const INVALID_UUID: &str = "Format ID tidak valid";
pub const INVALID_JSON: &str = "Body JSON tidak valid";
