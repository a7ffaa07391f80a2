mod tax;

pub use tax::TaxLabels;
