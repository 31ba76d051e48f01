pub mod driver;
pub mod errors;
pub mod heap;
pub mod options;
pub mod sort;
