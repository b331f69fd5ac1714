//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod completion_port;
mod synthesis_port;
mod transcription_port;

#[cfg(test)]
pub use completion_port::MockCompletionPort;
pub use completion_port::CompletionPort;
#[cfg(test)]
pub use synthesis_port::MockSynthesisPort;
pub use synthesis_port::{AudioByteStream, SynthesisPort, SynthesizedSpeech};
#[cfg(test)]
pub use transcription_port::MockTranscriptionPort;
pub use transcription_port::TranscriptionPort;
