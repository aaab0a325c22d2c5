use crate::{DynSvc, InjectResult, Interface, Service, ServiceInfo, Svc};

/// A provider capable of producing an instance of any requested service.
/// The requested service is identified at runtime by its [`ServiceInfo`].
///
/// The returned service pointer must hold a type that the requested service
/// can be resolved from: the type itself for sized services, or one of the
/// implementations listed in [`interface!`](crate::interface) for trait
/// interfaces. Any other type makes the request fail with
/// [`InjectError::InvalidProvider`](crate::InjectError::InvalidProvider).
///
/// Errors returned from [`GenericProvider::get`] are returned to the caller
/// of the injector unchanged.
pub trait GenericProvider: Service {
    /// Produces an instance of the service described by `service_info`.
    fn get(&self, service_info: ServiceInfo) -> InjectResult<DynSvc>;

    /// Produces an instance of the service `I`, checking its type.
    ///
    /// ```
    /// use generic_injector::{
    ///     generic, DynSvc, GenericProvider, InjectResult, ServiceInfo, Svc,
    /// };
    ///
    /// let provider = generic::provider_fn(|_: ServiceInfo| -> InjectResult<DynSvc> {
    ///     Ok(Svc::new(String::from("hello")))
    /// });
    ///
    /// let greeting: Svc<String> = provider.get_as().unwrap();
    /// assert_eq!("hello", greeting.as_str());
    /// assert!(provider.get_as::<u32>().is_err());
    /// ```
    fn get_as<I: ?Sized + Interface>(&self) -> InjectResult<Svc<I>>
    where
        Self: Sized,
    {
        I::downcast(self.get(ServiceInfo::of::<I>())?)
    }
}

impl<P: ?Sized + GenericProvider> GenericProvider for Svc<P> {
    fn get(&self, service_info: ServiceInfo) -> InjectResult<DynSvc> {
        (**self).get(service_info)
    }
}

/// A generic provider backed by a function. See [`provider_fn`].
pub struct FnProvider<F> {
    func: F,
}

impl<F> GenericProvider for FnProvider<F>
where
    F: Service + Fn(ServiceInfo) -> InjectResult<DynSvc>,
{
    fn get(&self, service_info: ServiceInfo) -> InjectResult<DynSvc> {
        (self.func)(service_info)
    }
}

/// Creates a generic provider from a function.
pub fn provider_fn<F>(func: F) -> FnProvider<F>
where
    F: Service + Fn(ServiceInfo) -> InjectResult<DynSvc>,
{
    FnProvider { func }
}
