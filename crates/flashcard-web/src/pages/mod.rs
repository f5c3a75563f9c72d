mod generator;

pub use generator::GeneratorPage;
