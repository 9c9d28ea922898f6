//! End-to-end pipeline tests using wiremock
//!
//! Rekognition, Polly and the translate endpoint all run on one mock server.
//! The real adapters are wired into `ImageNarrationService` the same way the
//! server binary does it.

use std::sync::Arc;

use ai_speech::SpeechConfig;
use ai_vision::VisionConfig;
use application::{ApplicationError, ImageNarrationService};
use domain::{UploadedImage, VoiceId};
use infrastructure::{
    AwsConfig, SpeechAdapter, TranslationAdapter, VisionAdapter, load_sdk_config,
};
use integration_translate::TranslateConfig;
use secrecy::SecretString;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AMZ_JSON: &str = "application/x-amz-json-1.1";

async fn create_test_service(mock_server: &MockServer) -> ImageNarrationService {
    let aws = AwsConfig {
        access_key_id: Some(SecretString::from("AKIDTEST".to_string())),
        secret_access_key: Some(SecretString::from("secret".to_string())),
        region: "us-east-1".to_string(),
        endpoint_url: Some(mock_server.uri()),
    };

    #[allow(clippy::expect_used)]
    let sdk = load_sdk_config(&aws).await.expect("Failed to load SDK config");

    #[allow(clippy::expect_used)]
    let vision = VisionAdapter::rekognition(&sdk, VisionConfig::default())
        .expect("Failed to create vision adapter");

    #[allow(clippy::expect_used)]
    let translation = TranslationAdapter::google(TranslateConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("Failed to create translation adapter");

    let speech = SpeechAdapter::polly(&sdk, SpeechConfig::default());

    ImageNarrationService::new(Arc::new(vision), Arc::new(translation), Arc::new(speech))
}

fn sample_image() -> UploadedImage {
    #[allow(clippy::expect_used)]
    UploadedImage::new(
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
        Some("image/jpeg".to_string()),
    )
    .expect("valid image")
}

fn amz_json(status: u16, body: &serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("content-type", AMZ_JSON)
        .set_body_string(body.to_string())
}

async fn mount_labels(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(header("x-amz-target", "RekognitionService.DetectLabels"))
        .respond_with(amz_json(
            200,
            &serde_json::json!({
                "Labels": [
                    { "Name": "Person", "Confidence": 99.5 },
                    { "Name": "Face", "Confidence": 97.0 },
                    { "Name": "Human", "Confidence": 98.0 },
                    { "Name": "Smile", "Confidence": 90.0 }
                ]
            }),
        ))
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn mount_face(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(header("x-amz-target", "RekognitionService.DetectFaces"))
        .respond_with(amz_json(
            200,
            &serde_json::json!({
                "FaceDetails": [{
                    "AgeRange": { "Low": 25, "High": 35 },
                    "Gender": { "Value": "Male", "Confidence": 99.0 },
                    "Emotions": [
                        { "Type": "CALM", "Confidence": 4.0 },
                        { "Type": "HAPPY", "Confidence": 95.0 }
                    ]
                }]
            }),
        ))
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn mount_translation(mock_server: &MockServer, translated: &str) {
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [[translated, "source", null, null, 10]],
            null,
            "en"
        ])))
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn mount_speech(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(b"ID3".to_vec()),
        )
        .expect(1)
        .mount(mock_server)
        .await;
}

async fn speech_request_body(mock_server: &MockServer) -> serde_json::Value {
    let requests = mock_server.received_requests().await.unwrap();
    let speech = requests
        .iter()
        .find(|r| r.url.path() == "/v1/speech")
        .unwrap();
    serde_json::from_slice(&speech.body).unwrap()
}

#[tokio::test]
async fn test_full_pipeline_with_face() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server).await;
    mount_face(&mock_server).await;
    mount_translation(&mock_server, "Um homem feliz. A cena contém Pessoa, Humano, Rosto.").await;
    mount_speech(&mock_server).await;

    let service = create_test_service(&mock_server).await;
    let result = service.narrate(&sample_image(), None).await.unwrap();

    assert_eq!(
        result.english_description,
        "The image shows a man around 25 to 35 years old looking happy. \
         The scene contains Person, Human, Face."
    );
    assert_eq!(
        result.description,
        "Um homem feliz. A cena contém Pessoa, Humano, Rosto."
    );
    assert_eq!(result.audio.to_data_uri(), "data:audio/mpeg;base64,SUQz");

    let body = speech_request_body(&mock_server).await;
    assert_eq!(body["Text"], "Um homem feliz. A cena contém Pessoa, Humano, Rosto.");
    assert_eq!(body["VoiceId"], "Camila");
    assert_eq!(body["LanguageCode"], "pt-BR");
}

#[tokio::test]
async fn test_face_failure_is_not_fatal() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server).await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", "RekognitionService.DetectFaces"))
        .respond_with(amz_json(
            400,
            &serde_json::json!({
                "__type": "InvalidParameterException",
                "Message": "Request has invalid parameters"
            }),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_translation(&mock_server, "A cena contém Pessoa, Humano, Rosto.").await;
    mount_speech(&mock_server).await;

    let service = create_test_service(&mock_server).await;
    let result = service.narrate(&sample_image(), None).await.unwrap();

    assert_eq!(
        result.english_description,
        "The scene contains Person, Human, Face."
    );
}

#[tokio::test]
async fn test_translation_failure_speaks_english() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server).await;
    mount_face(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_speech(&mock_server).await;

    let service = create_test_service(&mock_server).await;
    let voice = VoiceId::new("Ricardo").unwrap();
    let result = service.narrate(&sample_image(), Some(voice)).await.unwrap();

    assert_eq!(result.description, result.english_description);

    let body = speech_request_body(&mock_server).await;
    assert_eq!(body["Text"], result.english_description.as_str());
    assert_eq!(body["VoiceId"], "Ricardo");
}

#[tokio::test]
async fn test_label_failure_stops_pipeline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", "RekognitionService.DetectLabels"))
        .respond_with(amz_json(
            400,
            &serde_json::json!({
                "__type": "InvalidImageFormatException",
                "Message": "Request has invalid image format"
            }),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = create_test_service(&mock_server).await;
    let err = service.narrate(&sample_image(), None).await.unwrap_err();

    assert!(matches!(err, ApplicationError::ExternalService(_)));
    assert_eq!(err.to_string(), "Request has invalid image format");
}

#[tokio::test]
async fn test_speech_failure_surfaces_service_message() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server).await;
    mount_face(&mock_server).await;
    mount_translation(&mock_server, "Olá").await;

    Mock::given(method("POST"))
        .and(path("/v1/speech"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("x-amzn-ErrorType", "ValidationException")
                .set_body_json(serde_json::json!({
                    "message": "Value 'Nobody' at 'voiceId' failed to satisfy constraint"
                })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_test_service(&mock_server).await;
    let voice = VoiceId::new("Nobody").unwrap();
    let err = service
        .narrate(&sample_image(), Some(voice))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Value 'Nobody' at 'voiceId' failed to satisfy constraint"
    );
}

#[tokio::test]
async fn test_translation_without_text_speaks_english() {
    let mock_server = MockServer::start().await;
    mount_labels(&mock_server).await;
    mount_face(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            [[null, "The scene contains Person, Human, Face."]],
            null,
            "en"
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_speech(&mock_server).await;

    let service = create_test_service(&mock_server).await;
    let result = service.narrate(&sample_image(), None).await.unwrap();

    assert_eq!(result.description, result.english_description);

    let body = speech_request_body(&mock_server).await;
    assert_eq!(body["Text"], result.english_description.as_str());
}
