//! End-to-end write tests: header negotiation and body bytes together.

mod common;

use std::sync::{Arc, Mutex};

use futures_util::stream;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};

use form_codec::observability::logging::FormSummary;
use form_codec::{
    BufferedOutput, ComplianceMode, ElementType, FormData, FormWriter, Hints, MediaType,
    WriteError,
};

use common::{sample_form, FailingOutput, SAMPLE_BODY_LATIN1, SAMPLE_BODY_UTF8};

fn hints_for(strict: Option<bool>) -> Hints {
    match strict {
        Some(flag) => Hints::new().with(Hints::STRICT_CHARSET_COMPLIANCE, flag),
        None => Hints::new(),
    }
}

async fn run_write(
    writer: &FormWriter,
    requested: Option<&str>,
    hints: &Hints,
) -> BufferedOutput {
    let media_type = requested.map(|s| s.parse::<MediaType>().unwrap());
    let mut output = BufferedOutput::new();
    writer
        .write(
            stream::iter([sample_form()]),
            media_type.as_ref(),
            &mut output,
            hints,
        )
        .await
        .unwrap();
    output
}

#[tokio::test]
async fn test_write_matrix() {
    const FORM: &str = "application/x-www-form-urlencoded";
    const FORM_UTF8: &str = "application/x-www-form-urlencoded;charset=UTF-8";
    const FORM_LATIN1: &str = "application/x-www-form-urlencoded;charset=ISO-8859-1";
    const FORM_CUSTOM: &str =
        "application/x-www-form-urlencoded;charset=UTF-8;custom-param=true";

    // (default charset, requested media type, strict hint,
    //  expected content-type, expected body)
    let cases: &[(Option<&str>, Option<&str>, Option<bool>, &str, &str)] = &[
        (None, None, None, FORM_UTF8, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), None, None, FORM_UTF8, SAMPLE_BODY_UTF8),
        (None, None, Some(true), FORM, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), None, Some(true), FORM, SAMPLE_BODY_UTF8),
        (None, None, Some(false), FORM_UTF8, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), None, Some(false), FORM_UTF8, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), Some(FORM), None, FORM_UTF8, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), Some(FORM), Some(true), FORM, SAMPLE_BODY_UTF8),
        (Some("UTF-8"), Some(FORM), Some(false), FORM_UTF8, SAMPLE_BODY_UTF8),
        // An absent media type resolves to the built-in UTF-8 default even
        // when the configured default differs
        (Some("ISO-8859-1"), None, None, FORM_UTF8, SAMPLE_BODY_UTF8),
        (Some("ISO-8859-1"), None, Some(true), FORM, SAMPLE_BODY_UTF8),
        (Some("ISO-8859-1"), None, Some(false), FORM_UTF8, SAMPLE_BODY_UTF8),
        // A bare requested type picks up the configured default
        (Some("ISO-8859-1"), Some(FORM), None, FORM_LATIN1, SAMPLE_BODY_LATIN1),
        (Some("ISO-8859-1"), Some(FORM), Some(true), FORM_LATIN1, SAMPLE_BODY_LATIN1),
        (Some("ISO-8859-1"), Some(FORM), Some(false), FORM_LATIN1, SAMPLE_BODY_LATIN1),
        // Extra parameters survive; strict mode strips only the charset
        (None, Some(FORM_CUSTOM), None, FORM_CUSTOM, SAMPLE_BODY_UTF8),
        (
            None,
            Some(FORM_CUSTOM),
            Some(true),
            "application/x-www-form-urlencoded;custom-param=true",
            SAMPLE_BODY_UTF8,
        ),
        (None, Some(FORM_CUSTOM), Some(false), FORM_CUSTOM, SAMPLE_BODY_UTF8),
    ];

    for &(default_charset, requested, strict, expected_type, expected_body) in cases {
        let mut writer = FormWriter::new();
        if let Some(label) = default_charset {
            writer.set_default_charset_label(label).unwrap();
        }

        let output = run_write(&writer, requested, &hints_for(strict)).await;

        let case = format!(
            "default={default_charset:?} requested={requested:?} strict={strict:?}"
        );
        assert_eq!(
            output.headers().get(CONTENT_TYPE).unwrap(),
            expected_type,
            "content-type for {case}"
        );
        assert_eq!(
            output.body().unwrap().as_ref(),
            expected_body.as_bytes(),
            "body for {case}"
        );
        assert_eq!(
            output.headers().get(CONTENT_LENGTH).unwrap(),
            &expected_body.len().to_string(),
            "content-length for {case}"
        );
    }
}

#[tokio::test]
async fn test_write_default_end_to_end() {
    let output = run_write(&FormWriter::new(), None, &Hints::new()).await;

    assert_eq!(
        output.headers().get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded;charset=UTF-8"
    );
    assert_eq!(output.body().unwrap().as_ref(), SAMPLE_BODY_UTF8.as_bytes());
    assert_eq!(
        output.headers().get(CONTENT_LENGTH).unwrap(),
        &SAMPLE_BODY_UTF8.len().to_string()
    );
}

#[tokio::test]
async fn test_empty_stream_is_an_error() {
    let writer = FormWriter::new();
    let mut output = BufferedOutput::new();
    let result = writer
        .write(stream::iter(Vec::<FormData>::new()), None, &mut output, &Hints::new())
        .await;
    assert!(matches!(result, Err(WriteError::MissingPayload)));
    assert!(output.body().is_none());
}

#[tokio::test]
async fn test_multi_value_stream_is_an_error() {
    let writer = FormWriter::new();
    let mut output = BufferedOutput::new();
    let result = writer
        .write(
            stream::iter([sample_form(), sample_form()]),
            None,
            &mut output,
            &Hints::new(),
        )
        .await;
    assert!(matches!(result, Err(WriteError::MultiplePayloads)));
    assert!(output.body().is_none());
}

#[test]
fn test_empty_form_writes_empty_body() {
    let writer = FormWriter::new();
    let mut output = BufferedOutput::new();
    writer
        .write_form(&FormData::new(), None, &mut output, &Hints::new())
        .unwrap();

    assert_eq!(output.body().unwrap().len(), 0);
    assert_eq!(output.headers().get(CONTENT_LENGTH).unwrap(), "0");
    assert!(output.headers().get(CONTENT_TYPE).is_some());
}

#[test]
fn test_output_failure_propagates() {
    let writer = FormWriter::new();
    let mut output = FailingOutput::new();
    let result = writer.write_form(&sample_form(), None, &mut output, &Hints::new());
    assert!(matches!(result, Err(WriteError::Output(_))));
}

#[test]
fn test_unknown_charset_parameter_falls_back_for_body() {
    let writer = FormWriter::new();
    let requested: MediaType = "application/x-www-form-urlencoded;charset=klingon"
        .parse()
        .unwrap();
    let mut output = BufferedOutput::new();
    writer
        .write_form(&sample_form(), Some(&requested), &mut output, &Hints::new())
        .unwrap();

    // Header keeps the caller's media type, body encodes with the default
    assert_eq!(
        output.headers().get(CONTENT_TYPE).unwrap(),
        "application/x-www-form-urlencoded;charset=klingon"
    );
    assert_eq!(output.body().unwrap().as_ref(), SAMPLE_BODY_UTF8.as_bytes());
}

#[test]
fn test_panicking_hook_does_not_fail_write() {
    let mut writer = FormWriter::new();
    writer.set_log_hook(Arc::new(|_summary: &FormSummary| panic!("diagnostics exploded")));

    let mut output = BufferedOutput::new();
    writer
        .write_form(&sample_form(), None, &mut output, &Hints::new())
        .unwrap();
    assert_eq!(output.body().unwrap().as_ref(), SAMPLE_BODY_UTF8.as_bytes());
}

#[test]
fn test_hook_sees_masked_summary_by_default() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let mut writer = FormWriter::new();
    writer.set_log_hook(Arc::new(move |summary: &FormSummary| {
        sink.lock().unwrap().push(summary.to_string());
    }));
    writer
        .write_form(&sample_form(), None, &mut BufferedOutput::new(), &Hints::new())
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("name 1"));
    assert!(seen[0].contains("content masked"));
    assert!(!seen[0].contains("value 1"));
}

#[test]
fn test_hook_sees_values_when_details_enabled() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();

    let mut writer = FormWriter::new();
    writer.set_log_form_details(true);
    writer.set_log_hook(Arc::new(move |summary: &FormSummary| {
        sink.lock().unwrap().push(summary.to_string());
    }));
    writer
        .write_form(&sample_form(), None, &mut BufferedOutput::new(), &Hints::new())
        .unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen[0].contains("value 2+1"));
}

#[test]
fn test_writable_media_types() {
    let writer = FormWriter::new();
    let types = writer.writable_media_types();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].to_string(), "application/x-www-form-urlencoded");
}

#[test]
fn test_can_write_rejects_multipart_regardless_of_value_type() {
    let writer = FormWriter::new();
    let multipart: MediaType = "multipart/form-data".parse().unwrap();
    assert!(!writer.can_write(&ElementType::string_multi_map(), Some(&multipart)));
    assert!(!writer.can_write(&ElementType::untyped_multi_map(), Some(&multipart)));
}

#[test]
fn test_compliance_mode_default_is_lenient() {
    assert_eq!(ComplianceMode::default(), ComplianceMode::Lenient);
}
