pub mod fixer;

pub use fixer::RateClient;
