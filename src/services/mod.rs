pub mod fact_source;
pub mod scheduler;
pub mod translation;
pub mod typewriter;
