//! The editable module content
//!
//! A [`ModuleContent`] owns the source text of one module and the interface
//! last parsed from it. Edits go through [`ModuleContent::set_content`] and
//! [`ModuleContent::rename`]; both re-parse and, on success, reconcile the
//! parameter list so unchanged parameters keep their attribute handles.
//!
//! `is_valid()` means the stored ports, parameters and name were derived
//! from exactly the stored text. After a failed edit the text is the new
//! (bad) text while the descriptors stay those of the last good parse.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::attributes::{AttributeBinder, AttributeHandle, AttributeRegistry};
use super::config::ContentConfig;
use super::error::ContentError;
use super::events::{EventBus, EventEmitter, ListenerId, ModelEvent};
use super::namespace::{ModuleNames, ModuleNamespace};
use super::precheck::{AcceptAll, SyntaxValidator, run_precheck};
use super::reconcile::reconcile;
use super::rename::rename_module_text;
use super::template::render_template;
use crate::base::{IdentError, Name, validate_identifier};
use crate::descriptor::{Direction, ModuleInterface, ParameterDescriptor, PortDescriptor};
use crate::parser::parse_module;

/// Symbol style used when the module is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Appearance {
    Classic,
    #[default]
    Evolution,
    Fpga,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Evolution => "evolution",
            Self::Fpga => "fpga",
        }
    }
}

/// The collaborators a module content talks to
#[derive(Clone)]
pub struct ContentContext {
    pub config: ContentConfig,
    pub validator: Arc<dyn SyntaxValidator>,
    pub namespace: Arc<dyn ModuleNamespace>,
    pub binder: Arc<dyn AttributeBinder>,
}

impl Default for ContentContext {
    fn default() -> Self {
        Self {
            config: ContentConfig::default(),
            validator: Arc::new(AcceptAll),
            namespace: Arc::new(ModuleNames::new()),
            binder: Arc::new(AttributeRegistry::new()),
        }
    }
}

impl ContentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ContentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_validator(mut self, validator: Arc<dyn SyntaxValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_namespace(mut self, namespace: Arc<dyn ModuleNamespace>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_binder(mut self, binder: Arc<dyn AttributeBinder>) -> Self {
        self.binder = binder;
        self
    }
}

impl fmt::Debug for ContentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub struct ModuleContent {
    text: String,
    name: Name,
    ports: Vec<PortDescriptor>,
    parameters: Vec<(ParameterDescriptor, AttributeHandle)>,
    valid: bool,
    last_error: Option<ContentError>,
    appearance: Appearance,
    events: EventEmitter<ModelEvent, ModuleContent>,
    context: ContentContext,
}

impl ModuleContent {
    fn empty(name: &str, context: ContentContext) -> Self {
        Self {
            text: String::new(),
            name: Name::new(name),
            ports: Vec::new(),
            parameters: Vec::new(),
            valid: false,
            last_error: None,
            appearance: Appearance::default(),
            events: EventEmitter::new(),
            context,
        }
    }

    /// New module `name` from the configured template.
    ///
    /// Always returns a content; check `is_valid()` and `last_error()`.
    pub fn create(name: &str, context: ContentContext) -> Self {
        let text = render_template(
            context.config.template.as_deref(),
            name,
            context.config.keyword_case(),
        );
        Self::parse(name, &text, context)
    }

    /// Module `name` from existing text.
    ///
    /// Always returns a content; check `is_valid()` and `last_error()`.
    pub fn parse(name: &str, text: &str, context: ContentContext) -> Self {
        let mut content = Self::empty(name, context);
        if let Err(err) = content.set_content(text) {
            warn!(module = name, "new module content is invalid: {}", err);
        }
        content
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Store `text` without parsing it.
    ///
    /// Returns true if the content is valid and `text` is identical to the
    /// stored text, in which case nothing changes. Otherwise stores `text`,
    /// marks the content invalid and returns false.
    pub fn set_content_no_validation(&mut self, text: &str) -> bool {
        if self.valid && self.text == text {
            return true;
        }
        self.text = text.to_owned();
        self.valid = false;
        false
    }

    /// Replace the text and re-derive the interface.
    ///
    /// Unchanged valid text returns immediately without notifying. Every
    /// other call notifies [`ModelEvent::ContentSet`] exactly once, whether
    /// or not it succeeds, preceded by [`ModelEvent::NameChanged`] when a
    /// successful parse yields a different module name.
    pub fn set_content(&mut self, text: &str) -> Result<(), ContentError> {
        if self.set_content_no_validation(text) {
            debug!(module = %self.name, "content unchanged");
            return Ok(());
        }

        let result = self.revalidate();
        if let Err(err) = &result {
            warn!(module = %self.name, title = err.title(), "content rejected: {}", err);
        }
        self.last_error = result.as_ref().err().cloned();
        self.publish(&ModelEvent::ContentSet);
        result
    }

    fn revalidate(&mut self) -> Result<(), ContentError> {
        run_precheck(
            &self.context.validator,
            &self.text,
            self.context.config.precheck_timeout,
        )?;

        let interface =
            parse_module(&self.text).map_err(|err| ContentError::parse(err, &self.text))?;

        // Keeping the current name must not collide with ourselves
        let check_duplicate = interface.name != self.name;
        self.check_name(&interface.name, check_duplicate)?;
        for parameter in &interface.parameters {
            validate_identifier(parameter.name(), self.context.config.keyword_case())?;
        }

        self.valid = true;
        self.apply(interface);
        Ok(())
    }

    fn check_name(&self, name: &str, check_duplicate: bool) -> Result<(), IdentError> {
        validate_identifier(name, self.context.config.keyword_case())?;
        if check_duplicate && self.context.namespace.contains_module_named(name) {
            return Err(IdentError::Duplicate {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn apply(&mut self, interface: ModuleInterface) {
        let ModuleInterface {
            name,
            ports,
            parameters,
            ..
        } = interface;

        let binder = Arc::clone(&self.context.binder);
        let reconciled = reconcile(
            std::mem::take(&mut self.parameters),
            parameters,
            ParameterDescriptor::same_identity,
            |p| binder.bind(p),
            |handle, p| binder.refresh(*handle, p),
            |handle| binder.release(handle),
        );
        debug!(
            module = %name,
            ports = ports.len(),
            kept = reconciled.kept,
            bound = reconciled.bound,
            released = reconciled.released,
            "content set"
        );

        let old = std::mem::replace(&mut self.name, name);
        self.ports = ports;
        self.parameters = reconciled.entries;
        if old != self.name {
            let new = self.name.clone();
            self.publish(&ModelEvent::NameChanged { old, new });
        }
    }

    /// Rename the module by rewriting its header and end label.
    ///
    /// An invalid or taken name is rejected without touching the content.
    pub fn rename(&mut self, new_name: &str) -> Result<(), ContentError> {
        if new_name == self.name {
            return Ok(());
        }
        if let Err(err) = self.check_name(new_name, true) {
            warn!(module = %self.name, "rename rejected: {}", err);
            return Err(err.into());
        }
        let text = rename_module_text(&self.text, &self.name, new_name);
        self.set_content(&text)
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance == appearance {
            return;
        }
        let old = std::mem::replace(&mut self.appearance, appearance);
        self.publish(&ModelEvent::AppearanceChanged {
            old,
            new: appearance,
        });
    }

    /// Tell listeners the owning design is about to be written out
    pub fn about_to_save(&mut self) {
        self.publish(&ModelEvent::AboutToSave);
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ModelEvent, &ModuleContent) + Send + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.text
    }

    pub fn ports(&self) -> &[PortDescriptor] {
        &self.ports
    }

    pub fn inputs(&self) -> impl Iterator<Item = &PortDescriptor> {
        self.ports_with(Direction::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &PortDescriptor> {
        self.ports_with(Direction::Output)
    }

    pub fn inouts(&self) -> impl Iterator<Item = &PortDescriptor> {
        self.ports_with(Direction::Inout)
    }

    fn ports_with(&self, direction: Direction) -> impl Iterator<Item = &PortDescriptor> {
        self.ports.iter().filter(move |p| p.direction() == direction)
    }

    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &ParameterDescriptor> {
        self.parameters.iter().map(|(p, _)| p)
    }

    /// Parameters with the attribute handle each is bound to
    pub fn parameter_handles(
        &self,
    ) -> impl ExactSizeIterator<Item = (&ParameterDescriptor, AttributeHandle)> {
        self.parameters.iter().map(|(p, h)| (p, *h))
    }

    pub fn handle_of(&self, parameter: &str) -> Option<AttributeHandle> {
        self.parameters
            .iter()
            .find(|(p, _)| p.name() == parameter)
            .map(|(_, h)| *h)
    }

    /// Failure of the last `set_content`, cleared by the next success
    pub fn last_error(&self) -> Option<&ContentError> {
        self.last_error.as_ref()
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn config(&self) -> &ContentConfig {
        &self.context.config
    }

    /// Compare against `text`, treating every line ending as one space
    pub fn matches_text(&self, text: &str) -> bool {
        normalize_line_endings(&self.text) == normalize_line_endings(text)
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

impl EventBus<ModelEvent> for ModuleContent {
    fn publish(&mut self, event: &ModelEvent) {
        let emitter = std::mem::take(&mut self.events);
        self.events = emitter.emit(event.clone(), self);
    }
}

impl Drop for ModuleContent {
    fn drop(&mut self) {
        for (_, handle) in self.parameters.drain(..) {
            self.context.binder.release(handle);
        }
    }
}

impl fmt::Debug for ModuleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleContent")
            .field("name", &self.name)
            .field("valid", &self.valid)
            .field("ports", &self.ports)
            .field("parameters", &self.parameters)
            .field("appearance", &self.appearance)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_create_from_template() {
        let content = ModuleContent::create("counter", ContentContext::new());
        assert!(content.is_valid());
        assert_eq!(content.name(), "counter");
        assert!(content.ports().is_empty());
        assert_eq!(content.parameters().len(), 0);
        assert!(content.last_error().is_none());
    }

    #[test]
    fn test_fast_path_does_not_notify() {
        let mut content = ModuleContent::parse("M", "module M(); endmodule", ContentContext::new());
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        content.subscribe(move |event, _| {
            if *event == ModelEvent::ContentSet {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert!(content.set_content("module M(); endmodule").is_ok());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(content.set_content("module M(input a); endmodule").is_ok());
        assert!(content.set_content("module M(input a);").is_err());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_listener_sees_updated_state() {
        let mut content = ModuleContent::parse("M", "module M(); endmodule", ContentContext::new());
        let seen = Arc::new(parking_lot::Mutex::new(None));
        let sink = Arc::clone(&seen);
        content.subscribe(move |_, content| {
            *sink.lock() = Some((content.is_valid(), content.ports().len()));
        });

        content.set_content("module M(input a, b); endmodule").unwrap();
        assert_eq!(*seen.lock(), Some((true, 2)));
    }

    #[test]
    fn test_appearance_event_only_on_change() {
        let mut content = ModuleContent::create("M", ContentContext::new());
        let events = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        content.subscribe(move |event, _| sink.lock().push(event.clone()));

        content.set_appearance(Appearance::Evolution);
        content.set_appearance(Appearance::Fpga);
        assert_eq!(
            *events.lock(),
            vec![ModelEvent::AppearanceChanged {
                old: Appearance::Evolution,
                new: Appearance::Fpga
            }]
        );
    }

    #[test]
    fn test_matches_text_ignores_line_endings() {
        let content =
            ModuleContent::parse("M", "module M();\r\nendmodule", ContentContext::new());
        assert!(content.matches_text("module M();\nendmodule"));
        assert!(content.matches_text("module M();\rendmodule"));
        assert!(!content.matches_text("module M(); endmodule "));
    }

    #[test]
    fn test_drop_releases_attributes() {
        let registry = Arc::new(AttributeRegistry::new());
        let context = ContentContext::new().with_binder(registry.clone());
        let content =
            ModuleContent::parse("M", "module M #(parameter W = 1) (); endmodule", context);
        assert_eq!(registry.len(), 1);
        drop(content);
        assert!(registry.is_empty());
    }
}
