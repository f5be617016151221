pub(crate) mod ast;
pub mod codegen;
pub mod config;
pub(crate) mod converter;
pub mod dependency_resolver;
pub mod document;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub mod schema;
pub mod schema_merger;
pub mod summary;
pub(crate) mod type_mapper;

#[cfg(test)]
mod tests;
