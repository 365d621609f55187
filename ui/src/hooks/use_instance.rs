use api::instance::Instance;
use dioxus::prelude::*;

/// The messaging instance the current page belongs to.
///
/// Provided by the instance layout once the instance has been fetched.
#[derive(Clone, Copy)]
pub struct InstanceContext {
    instance: Signal<Option<Instance>>,
}

impl InstanceContext {
    pub fn new(instance: Signal<Option<Instance>>) -> Self {
        Self { instance }
    }

    /// Returns a copy of the current instance, if any.
    pub fn get(&self) -> Option<Instance> {
        self.instance.read().clone()
    }

    /// Subscribes to changes. Call `.read()` on this inside a component.
    pub fn signal(&self) -> Signal<Option<Instance>> {
        self.instance
    }
}

pub fn use_instance() -> InstanceContext {
    use_context::<InstanceContext>()
}
