pub mod destination;
pub mod formatter;

pub use destination::Destination;
pub use formatter::format_candidates;
