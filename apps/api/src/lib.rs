//! Resume Roaster API: upload a resume, get roasted (or actually helped).
//!
//! One shared pipeline (validate, extract, sanitize, build prompt, complete)
//! sits behind every route. The HTML page, the JSON/multipart API and the
//! health endpoint are thin adapters over it; nothing reimplements any stage
//! of the pipeline.

pub mod config;
pub mod errors;
pub mod extract;
pub mod llm_client;
pub mod roast;
pub mod routes;
pub mod sanitize;
pub mod state;

pub use config::Config;
pub use errors::AppError;
pub use state::AppState;
