#[path = "../fixtures/mod.rs"]
mod fixtures;

mod communes;
