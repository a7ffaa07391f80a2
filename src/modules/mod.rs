pub mod health;
pub mod metadata;
pub mod pricing;
pub mod taxes;
