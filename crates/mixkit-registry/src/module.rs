use mixkit_types::{CallError, Value};

use crate::config::NamespaceConfig;
use crate::descriptor::ModuleDescriptor;
use crate::modules::{EnvironmentModule, MergeModule, TypesModule};
use crate::namespace::Namespace;

// ---------------------------------------------------------------------------
// Module trait
// ---------------------------------------------------------------------------

/// A unit of capabilities contributed to a namespace.
///
/// A module describes what it adds; the namespace decides when. The
/// descriptor may depend on the namespace it is installed into (for example
/// on its environment).
pub trait Module {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// The methods and utilities this module registers.
    fn descriptor(&self, namespace: &Namespace) -> ModuleDescriptor;
}

// ---------------------------------------------------------------------------
// NamespaceBuilder
// ---------------------------------------------------------------------------

enum Step {
    Install(Box<dyn Module>),
    Define(ModuleDescriptor),
}

/// Assembles a [`Namespace`] from modules and single registrations.
///
/// Steps are applied in the order they were added, so a later step
/// overrides any name an earlier one registered in the same slot.
pub struct NamespaceBuilder {
    config: NamespaceConfig,
    steps: Vec<Step>,
}

impl NamespaceBuilder {
    /// A builder with no steps.
    pub fn new(config: NamespaceConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }

    /// A builder preloaded with the standard modules:
    /// Types -> Merge -> Environment
    ///
    /// Nothing is preloaded when `config.standard_modules` is false.
    pub fn standard(config: NamespaceConfig) -> Self {
        let install = config.standard_modules;
        let builder = Self::new(config);
        if !install {
            return builder;
        }
        builder
            .module(TypesModule)
            .module(MergeModule)
            .module(EnvironmentModule)
    }

    /// Append a module.
    pub fn module<M: Module + 'static>(mut self, module: M) -> Self {
        self.steps.push(Step::Install(Box::new(module)));
        self
    }

    /// Append a descriptor.
    pub fn define(mut self, descriptor: ModuleDescriptor) -> Self {
        self.steps.push(Step::Define(descriptor));
        self
    }

    /// Append a single method registration.
    pub fn method<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Namespace, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.define(ModuleDescriptor::new().method(name, func))
    }

    /// Append a single utility registration.
    pub fn util<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        self.define(ModuleDescriptor::new().util(name, func))
    }

    /// Number of pending steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Apply every step to a fresh namespace.
    pub fn build(self) -> Namespace {
        let mut namespace = Namespace::new(&self.config);
        for step in self.steps {
            match step {
                Step::Install(module) => namespace.install(module.as_ref()),
                Step::Define(descriptor) => namespace.define(descriptor),
            };
        }
        tracing::debug!(
            namespace = namespace.name(),
            methods = namespace.method_names().len(),
            utils = namespace.util_names().len(),
            "namespace built"
        );
        namespace
    }
}
