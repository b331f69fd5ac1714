//! Speech adapters against mocked provider APIs

use ai_speech::{SynthesisConfig, TranscriptionConfig};
use application::error::ApplicationError;
use application::ports::{SynthesisPort, TranscriptionPort};
use bytes::Bytes;
use domain::AudioClip;
use futures::TryStreamExt;
use infrastructure::{SynthesisAdapter, TranscriptionAdapter};
use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn clip() -> AudioClip {
    AudioClip::new(vec![0x1A, 0x45, 0xDF, 0xA3], "input.webm", "audio/webm")
}

#[tokio::test]
async fn transcription_returns_raw_provider_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"text": " hi "})),
        )
        .mount(&server)
        .await;

    let adapter = TranscriptionAdapter::new(TranscriptionConfig {
        base_url: server.uri(),
        api_key: Some(SecretString::from("gsk")),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(adapter.transcribe(clip()).await.unwrap(), " hi ");
}

#[tokio::test]
async fn transcription_failure_is_transcription_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/audio/transcriptions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let adapter = TranscriptionAdapter::new(TranscriptionConfig {
        base_url: server.uri(),
        api_key: Some(SecretString::from("gsk")),
        ..Default::default()
    })
    .unwrap();

    assert!(matches!(
        adapter.transcribe(clip()).await.unwrap_err(),
        ApplicationError::Transcription(_)
    ));
}

#[tokio::test]
async fn synthesis_streams_provider_bytes() {
    let server = MockServer::start().await;
    let pcm: Vec<u8> = (0u8..64).collect();
    Mock::given(method("POST"))
        .and(path("/tts/bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pcm.clone()))
        .mount(&server)
        .await;

    let adapter = SynthesisAdapter::new(SynthesisConfig {
        base_url: server.uri(),
        api_key: Some(SecretString::from("sk")),
        ..Default::default()
    })
    .unwrap();

    let speech = adapter.synthesize("Hello".to_string()).await.unwrap();
    assert_eq!(speech.content_type, "application/octet-stream");

    let chunks: Vec<Bytes> = speech.body.try_collect().await.unwrap();
    assert_eq!(chunks.concat(), pcm);
}

#[tokio::test]
async fn synthesis_non_success_is_synthesis_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tts/bytes"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let adapter = SynthesisAdapter::new(SynthesisConfig {
        base_url: server.uri(),
        api_key: Some(SecretString::from("sk")),
        ..Default::default()
    })
    .unwrap();

    assert!(matches!(
        adapter.synthesize("Hello".to_string()).await.unwrap_err(),
        ApplicationError::Synthesis(_)
    ));
}

#[test]
fn missing_key_is_configuration_error() {
    assert!(matches!(
        SynthesisAdapter::new(SynthesisConfig::default()).unwrap_err(),
        ApplicationError::Configuration(_)
    ));
    assert!(matches!(
        TranscriptionAdapter::new(TranscriptionConfig::default()).unwrap_err(),
        ApplicationError::Configuration(_)
    ));
}
