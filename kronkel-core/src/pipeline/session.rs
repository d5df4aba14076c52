use crate::{
    config::params::GenerateParams,
    foundation::core::Palette,
    foundation::error::KronkelResult,
    pipeline::generate::{Kronkel, generate},
};

/// Everything one generation run needs.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerateRequest {
    /// Text as typed; normalized by the pipeline.
    pub raw_text: String,
    /// Grid and stroke parameters.
    pub params: GenerateParams,
    /// Colors for the renderer.
    pub palette: Palette,
}

/// Supplies the input of a generation run (a form, a settings file, CLI flags).
pub trait InputSource {
    /// Produce the next request.
    fn read_request(&mut self) -> KronkelResult<GenerateRequest>;
}

/// Receives finished figures and renders or stores them.
pub trait OutputSink {
    /// Consume one figure.
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()>;
}

impl InputSource for GenerateRequest {
    fn read_request(&mut self) -> KronkelResult<GenerateRequest> {
        Ok(self.clone())
    }
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn read_request(&mut self) -> KronkelResult<GenerateRequest> {
        (**self).read_request()
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()> {
        (**self).consume(kronkel)
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn consume(&mut self, kronkel: &Kronkel) -> KronkelResult<()> {
        (**self).consume(kronkel)
    }
}

/// Read one request from `source`, generate the figure and hand it to `sink`.
///
/// Nothing reaches the sink when the request is invalid.
pub fn run(mut source: impl InputSource, mut sink: impl OutputSink) -> KronkelResult<Kronkel> {
    let req = source.read_request()?;
    let kronkel = generate(&req.raw_text, &req.params, req.palette)?;
    sink.consume(&kronkel)?;
    Ok(kronkel)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/session.rs"]
mod tests;
