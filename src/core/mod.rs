pub mod batch;
pub mod correlator;
pub mod grammar;
pub mod lexicalizer;
pub mod morph;
pub mod pipeline;
pub mod planner;
pub mod realizer;
