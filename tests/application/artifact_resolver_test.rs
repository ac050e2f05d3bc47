use std::path::PathBuf;

use tempfile::TempDir;

use audiograb::application::services::{ProbePlan, resolve_artifact};
use audiograb::domain::{AudioContainer, OutputTemplate};

fn template_in(dir: &TempDir, name: &str) -> OutputTemplate {
    OutputTemplate::new(dir.path().join(name))
}

fn touch(path: PathBuf) -> PathBuf {
    std::fs::write(&path, b"audio").unwrap();
    path
}

#[test]
fn given_stream_plan_when_listing_candidates_then_m4a_comes_first() {
    assert_eq!(
        ProbePlan::stream().candidates(),
        vec![
            AudioContainer::M4a,
            AudioContainer::Webm,
            AudioContainer::Opus,
            AudioContainer::Ogg,
            AudioContainer::Mp4,
        ]
    );
}

#[test]
fn given_download_plan_when_listing_candidates_then_canonical_comes_first() {
    let candidates = ProbePlan::download(AudioContainer::Mp3).candidates();
    assert_eq!(candidates[0], AudioContainer::Mp3);
    assert_eq!(candidates.len(), 5);
}

#[test]
fn given_canonical_also_in_fallbacks_when_listing_then_not_duplicated() {
    let candidates = ProbePlan::download(AudioContainer::M4a).candidates();
    assert_eq!(
        candidates,
        vec![
            AudioContainer::M4a,
            AudioContainer::Webm,
            AudioContainer::Opus,
            AudioContainer::Ogg,
        ]
    );
}

#[test]
fn given_webm_and_opus_present_when_resolving_stream_then_picks_webm() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "stream_abc");
    touch(template.with_extension("opus"));
    touch(template.with_extension("webm"));

    let artifact = resolve_artifact(&template, None, &ProbePlan::stream()).unwrap();

    assert_eq!(artifact.path, template.with_extension("webm"));
    assert_eq!(artifact.mime_type, "audio/webm");
}

#[test]
fn given_mp3_and_m4a_present_when_resolving_download_then_picks_mp3() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "download_abc");
    touch(template.with_extension("m4a"));
    touch(template.with_extension("mp3"));

    let artifact =
        resolve_artifact(&template, None, &ProbePlan::download(AudioContainer::Mp3)).unwrap();

    assert_eq!(artifact.extension, "mp3");
}

#[test]
fn given_reported_name_with_stale_extension_when_resolving_then_probes_its_stem() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "download_abc");
    touch(template.with_extension("mp3"));
    let reported = template.with_extension("webm");

    let artifact = resolve_artifact(
        &template,
        Some(&reported),
        &ProbePlan::download(AudioContainer::Mp3),
    )
    .unwrap();

    assert_eq!(artifact.path, template.with_extension("mp3"));
}

#[test]
fn given_reported_file_with_unlisted_extension_when_resolving_then_uses_it() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "stream_abc");
    let reported = touch(template.with_extension("flac"));

    let artifact = resolve_artifact(&template, Some(&reported), &ProbePlan::stream()).unwrap();

    assert_eq!(artifact.path, reported);
    assert_eq!(artifact.mime_type, "audio/mpeg");
}

#[test]
fn given_reported_path_outside_scratch_when_resolving_then_ignores_it() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let template = template_in(&dir, "stream_abc");
    let foreign = touch(elsewhere.path().join("secret.webm"));

    let result = resolve_artifact(&template, Some(&foreign), &ProbePlan::stream());

    assert!(result.is_err());
}

#[test]
fn given_no_matching_file_when_resolving_then_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "stream_abc");
    touch(dir.path().join("stream_other.webm"));

    let result = resolve_artifact(&template, None, &ProbePlan::stream());

    assert!(result.is_err());
}

#[test]
fn given_same_directory_state_when_resolving_twice_then_results_match() {
    let dir = TempDir::new().unwrap();
    let template = template_in(&dir, "stream_abc");
    touch(template.with_extension("ogg"));
    touch(template.with_extension("mp4"));

    let first = resolve_artifact(&template, None, &ProbePlan::stream()).unwrap();
    let second = resolve_artifact(&template, None, &ProbePlan::stream()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.extension, "ogg");
}
