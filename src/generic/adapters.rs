use crate::{
    DynSvc, GenericProvider, InjectError, InjectResult, Injector, Interface,
    Provider, RequestInfo, ServiceInfo, Svc,
};
use std::marker::PhantomData;

/// Provides `I` by forwarding every request to a generic provider instance.
pub(crate) struct InstanceAdapter<I, P>
where
    I: ?Sized,
{
    provider: P,
    marker: PhantomData<fn() -> Svc<I>>,
}

impl<I, P> InstanceAdapter<I, P>
where
    I: ?Sized + Interface,
    P: GenericProvider,
{
    pub fn new(provider: P) -> Self {
        InstanceAdapter {
            provider,
            marker: PhantomData,
        }
    }
}

impl<I, P> Provider for InstanceAdapter<I, P>
where
    I: ?Sized + Interface,
    P: GenericProvider,
{
    fn result(&self) -> ServiceInfo {
        ServiceInfo::of::<I>()
    }

    fn provide(
        &self,
        _injector: &Injector,
        _request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        self.provider.get(ServiceInfo::of::<I>())
    }
}

/// Provides `I` by forwarding every request to the instance of the generic
/// provider type `P` held by the injector.
pub(crate) struct TypeAdapter<I, P>
where
    I: ?Sized,
{
    marker: PhantomData<fn(Svc<P>) -> Svc<I>>,
}

impl<I, P> TypeAdapter<I, P>
where
    I: ?Sized + Interface,
    P: GenericProvider,
{
    pub fn new() -> Self {
        TypeAdapter {
            marker: PhantomData,
        }
    }
}

impl<I, P> Provider for TypeAdapter<I, P>
where
    I: ?Sized + Interface,
    P: GenericProvider,
{
    fn result(&self) -> ServiceInfo {
        ServiceInfo::of::<I>()
    }

    fn provide(
        &self,
        injector: &Injector,
        request_info: &RequestInfo,
    ) -> InjectResult<DynSvc> {
        let provider: Svc<P> = match injector.get_with(request_info) {
            Ok(provider) => provider,
            Err(InjectError::MissingProvider { service_info }) => {
                return Err(InjectError::MissingDependency {
                    service_info: ServiceInfo::of::<I>(),
                    dependency_info: service_info,
                })
            }
            Err(error) => return Err(error),
        };

        provider.get(ServiceInfo::of::<I>())
    }
}
