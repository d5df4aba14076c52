use super::*;
use crate::foundation::error::KronkelError;
use crate::render::sink::InMemorySink;

struct FailingSource;

impl InputSource for FailingSource {
    fn read_request(&mut self) -> KronkelResult<GenerateRequest> {
        Err(KronkelError::config("no input"))
    }
}

fn request(text: &str, width: u32) -> GenerateRequest {
    GenerateRequest {
        raw_text: text.to_string(),
        params: GenerateParams {
            desired_width: width,
            ..GenerateParams::default()
        },
        palette: Palette::default(),
    }
}

#[test]
fn run_delivers_figure_to_sink() {
    let mut sink = InMemorySink::new();
    let k = run(request("Ab,", 3), &mut sink).unwrap();
    assert_eq!(sink.figures().len(), 1);
    assert_eq!(sink.figures()[0], k);
    assert_eq!(k.normalized_text(), "ab,");
}

#[test]
fn invalid_request_never_reaches_sink() {
    let mut sink = InMemorySink::new();
    let err = run(request("abc", 0), &mut sink).unwrap_err();
    assert!(matches!(err, KronkelError::InvalidConfiguration(_)));
    assert!(sink.figures().is_empty());
}

#[test]
fn source_errors_propagate() {
    let mut sink = InMemorySink::new();
    let err = run(FailingSource, &mut sink).unwrap_err();
    assert!(err.to_string().contains("no input"));
    assert!(sink.figures().is_empty());
}

#[test]
fn boxed_sinks_are_sinks() {
    let mut sink: Box<dyn OutputSink> = Box::new(InMemorySink::new());
    run(request("", 1), &mut sink).unwrap();
}
