pub mod classification;

pub use classification::{Classification, ClassificationPolicy, ClassificationService};
