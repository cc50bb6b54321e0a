pub mod batch;
pub mod review;
