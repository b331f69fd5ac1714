//! Adapters implementing application ports

mod inference_adapter;
mod speech_adapter;

pub use inference_adapter::InferenceCompletionAdapter;
pub use speech_adapter::{SynthesisAdapter, TranscriptionAdapter};
