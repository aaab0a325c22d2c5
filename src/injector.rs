use crate::{
    DynSvc, InjectError, InjectResult, InjectorBuilder, ProviderRegistry,
    Request, RequestInfo, ScopeId, ServiceInfo, Svc,
};
use std::fmt::{Debug, Formatter};
use tracing::{debug, trace};

/// A runtime dependency injection container. This holds all the bindings
/// between service types and their providers.
///
/// # Injecting the injector
///
/// Cloning the injector does not clone the providers inside of it. Instead,
/// both injectors will use the same providers, meaning that an injector can be
/// passed to a service as a dependency. The injector can be requested as
/// itself without using a service pointer. It does not need to be registered
/// as a dependency in the builder beforehand. An injector requested this way
/// is scoped to the module the requesting service was registered in.
///
/// Note that requesting the injector inside of your services is generally bad
/// practice, and is known as the service locator antipattern. This is mostly
/// useful for service factories where you can create instances of your
/// services on demand.
///
/// ```
/// use generic_injector::{
///     constant, InjectResult, Injector, IntoSingleton, IntoTransient, Svc,
/// };
/// use std::sync::Mutex;
///
/// struct FloatFactory(Injector);
///
/// impl FloatFactory {
///     pub fn get(&self) -> InjectResult<f32> {
///         let int: Svc<i32> = self.0.get()?;
///         Ok(*int as f32)
///     }
/// }
///
/// fn count(counter: Svc<Mutex<i32>>) -> i32 {
///     let mut counter = counter.lock().unwrap();
///     *counter += 1;
///     *counter
/// }
///
/// let mut builder = Injector::builder();
/// builder.provide(constant(Mutex::new(0i32)));
/// builder.provide(count.transient());
/// builder.provide(FloatFactory.singleton());
///
/// let injector = builder.build();
/// let float_factory: Svc<FloatFactory> = injector.get().unwrap();
/// let value1 = float_factory.get().unwrap();
/// let value2 = float_factory.get().unwrap();
///
/// assert_eq!(1.0, value1);
/// assert_eq!(2.0, value2);
/// ```
#[derive(Clone)]
pub struct Injector {
    registry: Svc<ProviderRegistry>,
    scopes: Vec<ScopeId>,
}

impl Injector {
    /// Creates a builder for this injector. This is the preferred way of
    /// creating an injector.
    #[must_use]
    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::default()
    }

    pub(crate) fn new(registry: ProviderRegistry) -> Self {
        Injector {
            registry: Svc::new(registry),
            scopes: Vec::new(),
        }
    }

    /// Performs a request for a service. See the
    /// [documentation for `Request`](Request) for what can be requested.
    ///
    /// ```
    /// use generic_injector::{Injector, IntoSingleton, Svc};
    ///
    /// #[derive(Default)]
    /// struct Bar;
    ///
    /// let mut builder = Injector::builder();
    /// builder.provide(Bar::default.singleton());
    ///
    /// let injector = builder.build();
    /// let _bar: Svc<Bar> = injector.get().unwrap();
    /// ```
    ///
    /// If multiple providers for a service exist, then a request for a single
    /// service pointer to that service will fail:
    ///
    /// ```
    /// use generic_injector::{InjectError, Injector, IntoSingleton, Svc};
    ///
    /// let mut builder = Injector::builder();
    /// builder.provide((|| 1i32).singleton());
    /// builder.provide((|| 2i32).singleton());
    ///
    /// let injector = builder.build();
    /// assert!(matches!(
    ///     injector.get::<Svc<i32>>(),
    ///     Err(InjectError::MultipleProviders { .. })
    /// ));
    /// ```
    pub fn get<R: Request>(&self) -> InjectResult<R> {
        self.get_with(&RequestInfo::new())
    }

    /// Performs a request for a service as part of an existing request.
    pub fn get_with<R: Request>(
        &self,
        request_info: &RequestInfo,
    ) -> InjectResult<R> {
        R::request(self, request_info)
    }

    /// Resolves a type-erased service, checking the current request for
    /// cycles first.
    pub(crate) fn provide_dyn(
        &self,
        service_info: ServiceInfo,
        request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        if request_info.service_path().contains(&service_info) {
            let mut cycle = request_info.service_path().to_vec();
            cycle.push(service_info);
            debug!(service = service_info.name(), "cycle detected");
            return Err(InjectError::CycleDetected {
                service_info,
                cycle,
            });
        }

        trace!(
            service = service_info.name(),
            depth = request_info.service_path().len(),
            "resolving service"
        );
        let request_info = request_info.with_request(service_info);
        self.invoke_provider(service_info, &request_info)
    }

    /// Invokes the provider for a service visible from this injector's scope.
    /// The provider sees only the scopes visible where it was registered.
    pub(crate) fn invoke_provider(
        &self,
        service_info: ServiceInfo,
        request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        let (depth, provider) = self.registry.find(&self.scopes, service_info)?;
        if depth == self.scopes.len() {
            provider.provide(self, request_info)
        } else {
            let injector = self.with_scopes(self.scopes[..depth].to_vec());
            provider.provide(&injector, request_info)
        }
    }

    /// Invokes the provider for a service bound directly in this injector's
    /// innermost scope.
    pub(crate) fn invoke_local_provider(
        &self,
        service_info: ServiceInfo,
        request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        let provider = self.registry.find_local(&self.scopes, service_info)?;
        provider.provide(self, request_info)
    }

    pub(crate) fn with_scopes(&self, scopes: Vec<ScopeId>) -> Self {
        Injector {
            registry: self.registry.clone(),
            scopes,
        }
    }
}

impl Debug for Injector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("registry", &self.registry)
            .field("scopes", &self.scopes)
            .finish()
    }
}
