use crate::{InjectError, InjectResult, Injector, Interface, ServiceInfo, Svc};

/// A request to an injector. Every argument of a
/// [`ServiceFactory`](crate::ServiceFactory) is a request.
///
/// There are several types of requests that can be made by default:
///
/// - [`Svc<T>`]: Requests a service pointer to the given interface and
///   creates an instance of the service if needed. If there is not exactly
///   one provider for that interface, then returns an error instead.
/// - `Option<Svc<T>>`: Like [`Svc<T>`], but returns `Ok(None)` if no provider
///   is registered for the interface.
/// - [`Injector`]: Requests a clone of the injector, scoped to the module the
///   requesting service was registered in.
/// - [`RequestInfo`]: Requests information about the current request.
pub trait Request: Sized {
    /// Performs the request to the injector.
    fn request(injector: &Injector, info: &RequestInfo) -> InjectResult<Self>;
}

/// Requests the injector used to resolve services.
impl Request for Injector {
    #[inline]
    fn request(injector: &Injector, _info: &RequestInfo) -> InjectResult<Self> {
        Ok(injector.clone())
    }
}

/// Requests the information about the current request.
impl Request for RequestInfo {
    #[inline]
    fn request(_injector: &Injector, info: &RequestInfo) -> InjectResult<Self> {
        Ok(info.clone())
    }
}

/// Requests a service pointer to a service. This request fails if there is not
/// exactly one provider of the given service type.
impl<I: ?Sized + Interface> Request for Svc<I> {
    fn request(injector: &Injector, info: &RequestInfo) -> InjectResult<Self> {
        let service = injector.provide_dyn(ServiceInfo::of::<I>(), info)?;
        I::downcast(service)
    }
}

/// Tries to request a service pointer for a service or interface. If no
/// provider has been registered for it, then returns `None`. This fails if
/// there are multiple providers of the given interface.
impl<I: ?Sized + Interface> Request for Option<Svc<I>> {
    fn request(injector: &Injector, info: &RequestInfo) -> InjectResult<Self> {
        match injector.get_with(info) {
            Ok(response) => Ok(Some(response)),
            Err(InjectError::MissingProvider { service_info })
                if service_info == ServiceInfo::of::<I>() =>
            {
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

/// Information about an active request.
#[derive(Clone, Debug, Default)]
pub struct RequestInfo {
    service_path: Vec<ServiceInfo>,
}

impl RequestInfo {
    /// Creates a new, empty instance of [`RequestInfo`].
    #[must_use]
    pub fn new() -> Self {
        RequestInfo::default()
    }

    /// Creates a new child instance of [`RequestInfo`] with the given service
    /// appended to the end of the request path.
    #[must_use]
    pub fn with_request(&self, service: ServiceInfo) -> Self {
        let mut child = self.clone();
        child.service_path.push(service);
        child
    }

    /// Gets the current request path. This can be used to configure a service
    /// based on what it's being injected into.
    ///
    /// ## Example
    ///
    /// ```
    /// use generic_injector::{
    ///     Injector, IntoTransient, RequestInfo, ServiceInfo, Svc,
    /// };
    ///
    /// struct Foo(pub Svc<Baz>);
    /// struct Baz(pub bool);
    ///
    /// impl Baz {
    ///     pub fn new(request_info: RequestInfo) -> Self {
    ///         let injected_into_foo = request_info
    ///             .service_path()
    ///             .first()
    ///             .map_or(false, |root| root == &ServiceInfo::of::<Foo>());
    ///         Baz(injected_into_foo)
    ///     }
    /// }
    ///
    /// let mut builder = Injector::builder();
    /// builder.provide(Foo.transient());
    /// builder.provide(Baz::new.transient());
    ///
    /// let injector = builder.build();
    /// let foo: Svc<Foo> = injector.get().unwrap();
    /// let baz: Svc<Baz> = injector.get().unwrap();
    /// assert!(foo.0 .0);
    /// assert!(!baz.0);
    /// ```
    #[must_use]
    pub fn service_path(&self) -> &[ServiceInfo] {
        &self.service_path
    }
}
