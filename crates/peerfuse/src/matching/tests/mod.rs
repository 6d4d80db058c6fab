mod common;

mod finder;
mod scoring;
mod simulation;
