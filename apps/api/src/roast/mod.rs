// Roast generation: tone selection, prompt construction, the completion-call
// service, and the HTTP handlers that adapt transports onto the pipeline.

pub mod handlers;
pub mod prompts;
pub mod service;
pub mod tone;
