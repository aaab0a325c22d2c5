use crate::{
    generic::adapters::{InstanceAdapter, TypeAdapter},
    GenericProvider, Interface, Module, PrivateModule, ServiceFactory,
    ServiceInfo, SingletonProvider, Svc,
};
use std::{any::type_name, marker::PhantomData};
use tracing::debug;

/// Binds a service to a generic provider. Created by
/// [`generic::bind`](crate::generic::bind).
///
/// Both ways of finishing the binding return a [`Module`] to add to an
/// [`InjectorBuilder`](crate::InjectorBuilder) or install into another
/// module. The service is created each time it is requested.
pub struct GenericProviderBuilder<I>
where
    I: ?Sized,
{
    service_info: ServiceInfo,
    marker: PhantomData<fn() -> Svc<I>>,
}

impl<I> GenericProviderBuilder<I>
where
    I: ?Sized + Interface,
{
    pub(crate) fn new() -> Self {
        GenericProviderBuilder {
            service_info: ServiceInfo::of::<I>(),
            marker: PhantomData,
        }
    }

    /// Binds the service to an instance of a generic provider. Each request
    /// for the service calls the provider again.
    ///
    /// ```
    /// use generic_injector::{
    ///     generic, DynSvc, InjectResult, Injector, ServiceInfo, Svc,
    /// };
    ///
    /// struct Port(u16);
    ///
    /// let provider = generic::provider_fn(|_: ServiceInfo| -> InjectResult<DynSvc> {
    ///     Ok(Svc::new(Port(8080)))
    /// });
    ///
    /// let mut builder = Injector::builder();
    /// builder.add_module(generic::bind::<Port>().to_provider(provider));
    ///
    /// let injector = builder.build();
    /// let port: Svc<Port> = injector.get().unwrap();
    /// assert_eq!(8080, port.0);
    /// ```
    #[must_use]
    pub fn to_provider<P: GenericProvider>(self, provider: P) -> Module {
        debug!(
            service = self.service_info.name(),
            provider = type_name::<P>(),
            "binding service to a generic provider instance"
        );

        let mut module = Module::default();
        module.provide(InstanceAdapter::<I, P>::new(provider));
        module
    }

    /// Binds the service to a generic provider type. The injector creates a
    /// single instance of the provider type with `factory`, injecting its
    /// dependencies, and reuses that instance for every request for the
    /// service.
    ///
    /// The provider type is bound in a private module, so it can't be
    /// requested by any other service.
    ///
    /// ```
    /// use generic_injector::{
    ///     constant, generic, DynSvc, GenericProvider, InjectResult, Injector,
    ///     ServiceInfo, Svc,
    /// };
    ///
    /// struct Prefix(&'static str);
    /// struct Name(String);
    ///
    /// struct NameProvider(Svc<Prefix>);
    ///
    /// impl GenericProvider for NameProvider {
    ///     fn get(&self, service_info: ServiceInfo) -> InjectResult<DynSvc> {
    ///         Ok(Svc::new(Name(format!("{}{}", (self.0).0, service_info.name()))))
    ///     }
    /// }
    ///
    /// let mut builder = Injector::builder();
    /// builder.provide(constant(Prefix("my_")));
    /// builder.add_module(generic::bind::<Name>().to_provider_type(NameProvider));
    ///
    /// let injector = builder.build();
    /// let name: Svc<Name> = injector.get().unwrap();
    /// assert!(name.0.starts_with("my_"));
    /// assert!(injector.get::<Svc<NameProvider>>().is_err());
    /// ```
    #[must_use]
    pub fn to_provider_type<D, F>(self, factory: F) -> Module
    where
        D: 'static,
        F: ServiceFactory<D>,
        F::Result: GenericProvider,
    {
        debug!(
            service = self.service_info.name(),
            provider = type_name::<F::Result>(),
            "binding service to a generic provider type"
        );

        let mut private_module = PrivateModule::default();
        private_module.provide(SingletonProvider::<D, F::Result, F>::new(factory));
        private_module.provide(TypeAdapter::<I, F::Result>::new());
        private_module.expose::<I>();
        Module::from(private_module)
    }
}
