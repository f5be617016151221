mod dependency_resolver;
mod document;
mod summary;
pub(crate) mod support;
mod type_mapper;
