//! Named processing components applied to annotated documents in order

use std::collections::HashMap;
use std::fmt;

use rayon::prelude::*;

use crate::data::annotated::AnnotatedDocument;
use crate::engine::constants::HYPONYM_DETECTOR_COMPONENT;
use crate::error::{HearstError, Result};
use crate::hearst::HyponymDetector;

/// A processing step that annotates a document in place
pub trait PipelineComponent: Send + Sync {
    fn process(&self, doc: &mut AnnotatedDocument);
}

impl PipelineComponent for HyponymDetector {
    fn process(&self, doc: &mut AnnotatedDocument) {
        HyponymDetector::process(self, doc)
    }
}

/// Builds a component from its JSON config map
pub type ComponentFactory = fn(serde_json::Value) -> Result<Box<dyn PipelineComponent>>;

fn hyponym_detector_factory(config: serde_json::Value) -> Result<Box<dyn PipelineComponent>> {
    Ok(Box::new(HyponymDetector::from_json_config(config)?))
}

pub struct Pipeline {
    factories: HashMap<String, ComponentFactory>,
    pipes: Vec<(String, Box<dyn PipelineComponent>)>,
}

impl Pipeline {
    /// Empty pipeline with the built-in factories registered
    pub fn new() -> Self {
        let mut factories: HashMap<String, ComponentFactory> = HashMap::new();
        factories.insert(HYPONYM_DETECTOR_COMPONENT.to_string(), hyponym_detector_factory);
        Self { factories, pipes: Vec::new() }
    }

    pub fn register_factory(&mut self, name: impl Into<String>, factory: ComponentFactory) -> Result<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(HearstError::DuplicateComponent(name));
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Build the component registered under `name` and append it
    pub fn add_pipe(&mut self, name: &str, config: serde_json::Value) -> Result<()> {
        if self.has_pipe(name) {
            return Err(HearstError::DuplicateComponent(name.to_string()));
        }
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| HearstError::UnknownComponent(name.to_string()))?;
        let component = factory(config)?;
        log::debug!("Added pipe '{}'", name);
        self.pipes.push((name.to_string(), component));
        Ok(())
    }

    /// Append an already built component under `name`
    pub fn add_component(&mut self, name: impl Into<String>, component: Box<dyn PipelineComponent>) -> Result<()> {
        let name = name.into();
        if self.has_pipe(&name) {
            return Err(HearstError::DuplicateComponent(name));
        }
        self.pipes.push((name, component));
        Ok(())
    }

    pub fn remove_pipe(&mut self, name: &str) -> Result<Box<dyn PipelineComponent>> {
        let idx = self
            .pipes
            .iter()
            .position(|(pipe, _)| pipe == name)
            .ok_or_else(|| HearstError::UnknownComponent(name.to_string()))?;
        Ok(self.pipes.remove(idx).1)
    }

    pub fn pipe_names(&self) -> Vec<&str> {
        self.pipes.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn has_pipe(&self, name: &str) -> bool {
        self.pipes.iter().any(|(pipe, _)| pipe == name)
    }

    /// Run every component over `doc`, in insertion order
    pub fn run(&self, doc: &mut AnnotatedDocument) {
        for (name, component) in &self.pipes {
            log::trace!("Running pipe '{}' on '{}'", name, doc.id());
            component.process(doc);
        }
    }

    /// Run over a batch; documents are processed in parallel
    pub fn run_batch(&self, docs: &mut [AnnotatedDocument]) {
        docs.par_iter_mut().for_each(|doc| self.run(doc));
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("pipes", &self.pipe_names())
            .finish()
    }
}
