use crate::{
    DynSvc, InjectError, InjectResult, Injector, Module, PrivateModule,
    Provider, RequestInfo, ServiceInfo,
};
use std::{
    collections::HashMap,
    fmt::{Debug, Formatter},
};
use tracing::{trace, warn};

/// Identifies one installed [`PrivateModule`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct ScopeId(usize);

/// A service type qualified by the scope it is bound in. `None` is the root
/// scope of the injector.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct BindingKey {
    scope: Option<ScopeId>,
    service_info: ServiceInfo,
}

/// Stores every provider registered with an injector, keyed by the scope it
/// was registered in.
#[derive(Default)]
pub(crate) struct ProviderRegistry {
    bindings: HashMap<BindingKey, Vec<Box<dyn Provider>>>,
    scope_count: usize,
}

impl ProviderRegistry {
    pub fn add_provider(
        &mut self,
        scope: Option<ScopeId>,
        provider: Box<dyn Provider>,
    ) {
        let service_info = provider.result();
        trace!(service = service_info.name(), ?scope, "registering provider");
        self.bindings
            .entry(BindingKey {
                scope,
                service_info,
            })
            .or_default()
            .push(provider);
    }

    /// Registers a module's providers in the innermost of `scopes`, and its
    /// private modules in new scopes nested inside of it.
    pub fn add_module(&mut self, scopes: &[ScopeId], module: Module) {
        let scope = scopes.last().copied();
        for provider in module.providers {
            self.add_provider(scope, provider);
        }

        for private_module in module.private_modules {
            self.add_private_module(scopes, private_module);
        }
    }

    fn add_private_module(
        &mut self,
        scopes: &[ScopeId],
        private_module: PrivateModule,
    ) {
        let scope = ScopeId(self.scope_count);
        self.scope_count += 1;

        let mut inner_scopes = scopes.to_vec();
        inner_scopes.push(scope);
        self.add_module(&inner_scopes, private_module.module);

        for service_info in private_module.exposed {
            let bound = self.bindings.contains_key(&BindingKey {
                scope: Some(scope),
                service_info,
            });
            if !bound {
                warn!(
                    service = service_info.name(),
                    "private module exposes a service it does not provide"
                );
            }

            self.add_provider(
                scopes.last().copied(),
                Box::new(ExposedProvider {
                    service_info,
                    scopes: inner_scopes.clone(),
                }),
            );
        }
    }

    /// Finds the provider for a service, searching from the innermost scope
    /// outward. Returns how many of `scopes` are visible where the provider
    /// was found along with the provider itself.
    pub fn find(
        &self,
        scopes: &[ScopeId],
        service_info: ServiceInfo,
    ) -> InjectResult<(usize, &dyn Provider)> {
        for depth in (0..=scopes.len()).rev() {
            let key = BindingKey {
                scope: scopes[..depth].last().copied(),
                service_info,
            };

            match self.bindings.get(&key).map(Vec::as_slice) {
                None | Some([]) => continue,
                Some([provider]) => return Ok((depth, &**provider)),
                Some(_) => {
                    return Err(InjectError::MultipleProviders { service_info })
                }
            }
        }

        Err(InjectError::MissingProvider { service_info })
    }

    /// Finds the provider for a service bound in exactly the innermost of
    /// `scopes`, without looking at any enclosing scope.
    pub fn find_local(
        &self,
        scopes: &[ScopeId],
        service_info: ServiceInfo,
    ) -> InjectResult<&dyn Provider> {
        let key = BindingKey {
            scope: scopes.last().copied(),
            service_info,
        };

        match self.bindings.get(&key).map(Vec::as_slice) {
            None | Some([]) => {
                Err(InjectError::MissingProvider { service_info })
            }
            Some([provider]) => Ok(&**provider),
            Some(_) => Err(InjectError::MultipleProviders { service_info }),
        }
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    pub fn scope_count(&self) -> usize {
        self.scope_count
    }
}

impl Debug for ProviderRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.bindings.iter().map(|(key, providers)| {
                (
                    (key.scope, key.service_info.name()),
                    format!("<{} providers>", providers.len()),
                )
            }))
            .finish()
    }
}

/// Makes a service bound inside of a private module visible to the module
/// enclosing it. The service is still resolved inside the private scope.
struct ExposedProvider {
    service_info: ServiceInfo,
    scopes: Vec<ScopeId>,
}

impl Provider for ExposedProvider {
    fn result(&self) -> ServiceInfo {
        self.service_info
    }

    fn provide(
        &self,
        injector: &Injector,
        request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        injector
            .with_scopes(self.scopes.clone())
            .invoke_local_provider(self.service_info, request_info)
    }
}
