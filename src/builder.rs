use crate::{Injector, Module, ProviderRegistry, Provider};
use tracing::debug;

/// A builder for an [`Injector`].
#[derive(Default)]
pub struct InjectorBuilder {
    registry: ProviderRegistry,
}

impl InjectorBuilder {
    /// Assigns the provider for a service type. Multiple providers can be
    /// registered for a service.
    pub fn provide<P: Provider>(&mut self, provider: P) {
        self.add_provider(Box::new(provider));
    }

    /// Adds a provider to the injector.
    pub fn add_provider(&mut self, provider: Box<dyn Provider>) {
        self.registry.add_provider(None, provider);
    }

    /// Adds all the providers registered in a module. This may cause multiple
    /// providers to be registered for the same service. Each private module
    /// inside of the module gets its own scope.
    pub fn add_module(&mut self, module: Module) {
        self.registry.add_module(&[], module);
    }

    /// Builds the injector.
    #[must_use]
    pub fn build(self) -> Injector {
        debug!(
            bindings = self.registry.binding_count(),
            scopes = self.registry.scope_count(),
            "building injector"
        );
        Injector::new(self.registry)
    }
}
