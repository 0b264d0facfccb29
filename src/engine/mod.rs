// Engine modules: assets, input

pub mod assets;
pub mod input;
