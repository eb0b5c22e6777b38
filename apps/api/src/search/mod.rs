// Candidate Search Wrapper: filter vocabulary, Sales Navigator client,
// response types, typeahead debounce, and HTTP handlers.

pub mod client;
pub mod debounce;
pub mod filters;
pub mod handlers;
pub mod models;
