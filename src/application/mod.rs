pub mod aggregate;
pub mod examples;
pub mod normalize;
pub mod translate;
