//! Voice reply service - one conversational turn, end to end
//!
//! This service orchestrates the complete flow:
//! 1. Resolve the input to a transcript (typed text or transcribed audio)
//! 2. Generate a reply from the conversation so far
//! 3. Request speech for the reply
//! 4. Hand back the audio stream together with both texts

use std::{fmt, sync::Arc};

use domain::{CallerContext, ConversationTurn, UserInput};
use tracing::{error, info, instrument, warn};

use super::{
    reply_generator::ReplyGenerator,
    stage_timer::{Stage, StageTimer},
    system_prompt::SystemPrompt,
    transcript_resolver::TranscriptResolver,
};
use crate::{
    error::ApplicationError,
    ports::{CompletionPort, SynthesisPort, SynthesizedSpeech, TranscriptionPort},
};

/// Everything needed to answer one turn
#[derive(Debug, Clone)]
pub struct VoiceReplyRequest {
    /// The caller's new turn
    pub input: UserInput,
    /// Prior turns, in the order the caller sent them
    pub history: Vec<ConversationTurn>,
    /// Location and timezone hints for the system prompt
    pub caller: CallerContext,
    /// Tag used on latency log lines
    pub correlation_id: String,
}

/// A successful turn
#[derive(Debug)]
pub struct VoiceReply {
    /// Text of the user's turn as sent to the model
    pub transcript: String,
    /// The assistant's reply text
    pub reply: String,
    /// Spoken reply; the streaming stage ends when this body is finished or dropped
    pub audio: SynthesizedSpeech,
}

/// Orchestrates transcription, completion and synthesis for one request
pub struct VoiceReplyService {
    resolver: TranscriptResolver,
    generator: ReplyGenerator,
    synthesis: Arc<dyn SynthesisPort>,
}

impl fmt::Debug for VoiceReplyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceReplyService")
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}

impl VoiceReplyService {
    /// Create a new voice reply service
    pub fn new(
        transcription: Arc<dyn TranscriptionPort>,
        completion: Arc<dyn CompletionPort>,
        synthesis: Arc<dyn SynthesisPort>,
        prompt: SystemPrompt,
    ) -> Self {
        Self {
            resolver: TranscriptResolver::new(transcription),
            generator: ReplyGenerator::new(completion, prompt),
            synthesis,
        }
    }

    /// Answer one turn
    ///
    /// Steps run strictly in order and any failure ends the request before
    /// audio is produced.
    #[instrument(skip_all, fields(
        correlation_id = %request.correlation_id,
        input = request.input.kind(),
        history = request.history.len()
    ))]
    pub async fn reply(&self, request: VoiceReplyRequest) -> Result<VoiceReply, ApplicationError> {
        let VoiceReplyRequest {
            input,
            history,
            caller,
            correlation_id,
        } = request;

        let timer = StageTimer::start(Stage::Transcription, &correlation_id);
        let transcript = self.resolver.resolve(input).await;
        timer.finish();

        let Some(transcript) = transcript else {
            warn!("No usable transcript");
            return Err(ApplicationError::InvalidAudio);
        };

        let timer = StageTimer::start(Stage::Completion, &correlation_id);
        let reply = self.generator.generate(&transcript, &history, &caller).await;
        timer.finish();

        let reply = reply.inspect_err(|e| error!(error = %e, "Reply generation failed"))?;

        let timer = StageTimer::start(Stage::Synthesis, &correlation_id);
        let speech = self.synthesis.synthesize(reply.clone()).await;
        timer.finish();

        let speech = speech.inspect_err(|e| error!(error = %e, "Voice synthesis failed"))?;

        info!(
            transcript_len = transcript.len(),
            reply_len = reply.len(),
            "Streaming voice reply"
        );

        let body = StageTimer::start(Stage::Streaming, &correlation_id)
            .finish_when_dropped(speech.body);

        Ok(VoiceReply {
            transcript,
            reply,
            audio: SynthesizedSpeech::new(speech.content_type, Box::pin(body)),
        })
    }
}
