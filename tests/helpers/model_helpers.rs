//! Helpers for building module contents against in-memory collaborators.

use std::sync::Arc;

use parking_lot::Mutex;
use svmodule::model::{
    AttributeHandle, AttributeRegistry, ContentConfig, ContentContext, ModelEvent, ModuleContent,
    ModuleNames, SyntaxValidator,
};

/// A context plus direct access to its registry and namespace
pub struct Harness {
    pub registry: Arc<AttributeRegistry>,
    pub names: Arc<ModuleNames>,
    pub context: ContentContext,
}

pub fn harness() -> Harness {
    harness_with(ContentConfig::default().with_precheck_timeout(None))
}

pub fn harness_with(config: ContentConfig) -> Harness {
    let registry = Arc::new(AttributeRegistry::new());
    let names = Arc::new(ModuleNames::new());
    let context = ContentContext::new()
        .with_config(config)
        .with_binder(registry.clone())
        .with_namespace(names.clone());
    Harness {
        registry,
        names,
        context,
    }
}

impl Harness {
    pub fn with_validator(mut self, validator: Arc<dyn SyntaxValidator>) -> Self {
        self.context = self.context.with_validator(validator);
        self
    }

    pub fn parse(&self, name: &str, text: &str) -> ModuleContent {
        ModuleContent::parse(name, text, self.context.clone())
    }

    pub fn create(&self, name: &str) -> ModuleContent {
        ModuleContent::create(name, self.context.clone())
    }
}

/// Record every event `content` publishes from now on
pub fn record_events(content: &mut ModuleContent) -> Arc<Mutex<Vec<ModelEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    content.subscribe(move |event, _| sink.lock().push(event.clone()));
    events
}

pub fn handle(content: &ModuleContent, parameter: &str) -> AttributeHandle {
    content
        .handle_of(parameter)
        .unwrap_or_else(|| panic!("no parameter '{}' in {:?}", parameter, content))
}

/// `(name, default)` pairs in order
pub fn parameter_values(content: &ModuleContent) -> Vec<(String, i64)> {
    content
        .parameters()
        .map(|p| (p.name().to_string(), p.default_value()))
        .collect()
}
