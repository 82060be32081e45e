//! ID prefix constants.
//!
//! Every row gets a text primary key of the form `<prefix>-<8 hex chars>`,
//! generated store-side (see `CrewDb::generate_id`).

pub const PREFIX_PROFILE: &str = "prf";
pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_MEMBERSHIP: &str = "mbr";

/// All prefixes, for exhaustive format tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_PROFILE, PREFIX_PROJECT, PREFIX_MEMBERSHIP];
