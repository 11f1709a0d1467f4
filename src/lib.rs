//! # Tally
//!
//! A distributed word-count pipeline in three independently triggered
//! stages: split, map, and reduce. Stages share nothing in process; every
//! hand-off goes through keyed, immutable artifacts in an object store, so
//! mapper invocations for different chunks can run concurrently on different
//! machines and any stage can be re-triggered safely after a failure.
//!
//! ## Modules
//!
//! - `tokenizer` - Word normalization and lazy token iteration
//! - `pipeline` - Stage algorithms and store-mediated stage entry points
//! - `storage` - Object-store abstraction with memory, file, and S3 backends
//! - `server` - HTTP trigger surface for the stages
//! - `error` - Pipeline error taxonomy
pub mod error;
pub mod pipeline;
pub mod server;
pub mod storage;
pub mod tokenizer;
