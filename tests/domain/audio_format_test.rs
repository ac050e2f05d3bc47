use std::path::PathBuf;

use audiograb::domain::{AudioContainer, DEFAULT_MIME_TYPE, ResolvedArtifact, classify_extension};

#[test]
fn given_known_extensions_when_classifying_then_returns_table_mime_types() {
    assert_eq!(classify_extension("m4a"), "audio/mp4");
    assert_eq!(classify_extension("mp4"), "audio/mp4");
    assert_eq!(classify_extension("webm"), "audio/webm");
    assert_eq!(classify_extension("opus"), "audio/ogg");
    assert_eq!(classify_extension("ogg"), "audio/ogg");
    assert_eq!(classify_extension("mp3"), "audio/mpeg");
}

#[test]
fn given_dotted_uppercase_extension_when_classifying_then_normalizes() {
    assert_eq!(classify_extension(".WEBM"), "audio/webm");
    assert_eq!(classify_extension(".M4a"), "audio/mp4");
}

#[test]
fn given_unknown_extension_when_classifying_then_falls_back_to_mpeg() {
    assert_eq!(classify_extension("flac"), DEFAULT_MIME_TYPE);
    assert_eq!(classify_extension(""), "audio/mpeg");
}

#[test]
fn given_container_name_when_converting_then_parses() {
    let container = AudioContainer::try_from("mp3".to_string()).unwrap();
    assert_eq!(container, AudioContainer::Mp3);
    assert_eq!(container.to_string(), "mp3");
}

#[test]
fn given_unsupported_container_name_when_converting_then_errors() {
    let result = AudioContainer::try_from("wav".to_string());
    assert!(result.is_err());
}

#[test]
fn given_uppercase_path_when_building_artifact_then_extension_is_lowercased() {
    let artifact = ResolvedArtifact::from_path(PathBuf::from("/tmp/stream_abc.WEBM"));
    assert_eq!(artifact.extension, "webm");
    assert_eq!(artifact.mime_type, "audio/webm");
}

#[test]
fn given_path_without_extension_when_building_artifact_then_defaults_to_mpeg() {
    let artifact = ResolvedArtifact::from_path(PathBuf::from("/tmp/stream_abc"));
    assert_eq!(artifact.extension, "");
    assert_eq!(artifact.mime_type, "audio/mpeg");
}

#[test]
fn given_containers_when_mapping_to_extractor_codec_then_uses_engine_names() {
    assert_eq!(AudioContainer::Mp3.extract_audio_codec(), Some("mp3"));
    assert_eq!(AudioContainer::Ogg.extract_audio_codec(), Some("vorbis"));
    assert_eq!(AudioContainer::Webm.extract_audio_codec(), None);
    assert_eq!(AudioContainer::Mp4.extract_audio_codec(), None);
}
