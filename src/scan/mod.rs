//! Stages that read the repository: extraction, activity, structure and
//! code sampling. Only [`structure`] is free of I/O.

pub mod activity;
pub mod extractor;
pub mod sampler;
pub mod structure;

pub use activity::RepoActivityProbe;
pub use extractor::RepoExtractor;
pub use sampler::CodeSampler;
pub use structure::analyze_structure;
