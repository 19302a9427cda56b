// Wire-format tests for the text-to-speech client against a mock server

use mockito::Matcher;
use serde_json::json;

use newsdash_backend::tts::{
    AudioStore, CloudTtsClient, ServiceAccountKey, SpeechSynthesizer, TtsAuth, Voice, VoiceRequest,
};

const TEST_PRIVATE_KEY: &str = include_str!("fixtures/test_service_account_key.pem");

fn client(server: &mockito::ServerGuard, auth: TtsAuth, dir: &std::path::Path) -> CloudTtsClient {
    CloudTtsClient::new(server.url(), "ko-KR".to_string(), auth, AudioStore::new(dir))
}

fn service_account(server: &mockito::ServerGuard) -> TtsAuth {
    TtsAuth::ServiceAccount(ServiceAccountKey {
        client_email: "tts@newsdash-test.iam.gserviceaccount.com".to_string(),
        private_key: TEST_PRIVATE_KEY.to_string(),
        token_uri: format!("{}/token", server.url()),
    })
}

#[tokio::test]
async fn test_json_audio_content_is_decoded_and_saved() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/text:synthesize")
        .match_query(Matcher::UrlEncoded("key".into(), "tts-key".into()))
        .match_body(Matcher::Json(json!({
            "input": {"text": "오늘의 뉴스"},
            "voice": {"languageCode": "ko-KR", "name": "ko-KR-Wavenet-B"},
            "audioConfig": {"audioEncoding": "MP3", "speakingRate": 0.75}
        })))
        .with_status(200)
        .with_header("content-type", "application/json; charset=UTF-8")
        // base64 of "ID3audio"
        .with_body(r#"{"audioContent":"SUQzYXVkaW8="}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, TtsAuth::ApiKey("tts-key".into()), dir.path());
    let artifact = tts
        .synthesize(&VoiceRequest::new("오늘의 뉴스", Voice::WavenetB, Some(0.75)))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(artifact.mime_type, "audio/mpeg");
    assert!(artifact.file_path.starts_with(dir.path()));
    assert_eq!(std::fs::read(&artifact.file_path).unwrap(), b"ID3audio");
}

#[tokio::test]
async fn test_raw_audio_body_is_saved_as_is() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/text:synthesize")
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body(b"\xff\xfb\x90raw".to_vec())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, TtsAuth::Anonymous, dir.path());
    let artifact = tts
        .synthesize(&VoiceRequest::new("요약", Voice::default(), None))
        .await
        .unwrap();
    assert_eq!(std::fs::read(&artifact.file_path).unwrap(), b"\xff\xfb\x90raw");
}

#[tokio::test]
async fn test_two_requests_never_share_a_file() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/text:synthesize")
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body("mp3")
        .expect(2)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, TtsAuth::Anonymous, dir.path());
    let request = VoiceRequest::new("요약", Voice::default(), None);
    let first = tts.synthesize(&request).await.unwrap();
    let second = tts.synthesize(&request).await.unwrap();
    assert_ne!(first.file_path, second.file_path);
}

#[tokio::test]
async fn test_upstream_failure_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/text:synthesize")
        .with_status(403)
        .with_body(r#"{"error":{"code":403,"message":"The caller does not have permission"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, TtsAuth::Anonymous, dir.path());
    let err = tts
        .synthesize(&VoiceRequest::new("요약", Voice::default(), None))
        .await
        .unwrap_err();

    assert!(format!("{:#}", err).contains("403"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_blank_text_is_rejected_before_any_request() {
    let server = mockito::Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, TtsAuth::Anonymous, dir.path());
    assert!(tts
        .synthesize(&VoiceRequest::new("   ", Voice::default(), None))
        .await
        .is_err());
}

#[tokio::test]
async fn test_service_account_exchanges_jwt_for_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let token = server
        .mock("POST", "/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "grant_type".into(),
                "urn:ietf:params:oauth:grant-type:jwt-bearer".into(),
            ),
            // header.claims.signature
            Matcher::Regex(r"assertion=[\w-]+\.[\w-]+\.[\w-]+".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"ya29.test-token","token_type":"Bearer","expires_in":3599}"#)
        .create_async()
        .await;
    let synth = server
        .mock("POST", "/text:synthesize")
        .match_header("authorization", "Bearer ya29.test-token")
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_body("mp3")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, service_account(&server), dir.path());
    let artifact = tts
        .synthesize(&VoiceRequest::new("요약", Voice::default(), None))
        .await
        .unwrap();

    token.assert_async().await;
    synth.assert_async().await;
    assert_eq!(std::fs::read(&artifact.file_path).unwrap(), b"mp3");
}

#[tokio::test]
async fn test_token_endpoint_failure_skips_synthesis() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant","error_description":"Invalid JWT Signature."}"#)
        .create_async()
        .await;
    let synth = server
        .mock("POST", "/text:synthesize")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let tts = client(&server, service_account(&server), dir.path());
    let err = tts
        .synthesize(&VoiceRequest::new("요약", Voice::default(), None))
        .await
        .unwrap_err();

    synth.assert_async().await;
    let message = format!("{:#}", err);
    assert!(message.contains("400"), "{}", message);
    assert!(message.contains("invalid_grant"), "{}", message);
}

#[tokio::test]
async fn test_network_failure_does_not_leak_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let tts = CloudTtsClient::new(
        "http://127.0.0.1:1".to_string(),
        "ko-KR".to_string(),
        TtsAuth::ApiKey("TTS-SECRET-KEY".into()),
        AudioStore::new(dir.path()),
    );
    let err = tts
        .synthesize(&VoiceRequest::new("요약", Voice::default(), None))
        .await
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("speech request failed"), "{}", message);
    assert!(!message.contains("TTS-SECRET-KEY"), "{}", message);
}
