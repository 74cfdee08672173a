pub mod games;
pub mod prelude;
