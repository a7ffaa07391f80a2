mod guard;

pub use guard::{MetadataGuard, MetadataViolation};
