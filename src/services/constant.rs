use crate::{InjectResult, Injector, RequestInfo, Service, Svc, TypedProvider};

/// A provider which returns a constant, predetermined value. Note that this is
/// technically a singleton service in that it does not recreate the value each
/// time it is requested.
pub struct ConstantProvider<R>
where
    R: Service,
{
    result: Svc<R>,
}

impl<R> ConstantProvider<R>
where
    R: Service,
{
    /// Creates a new [`ConstantProvider`] using a predetermined value.
    #[must_use]
    pub fn new(value: R) -> Self {
        ConstantProvider {
            result: Svc::new(value),
        }
    }
}

impl<R> TypedProvider for ConstantProvider<R>
where
    R: Service,
{
    type Result = R;

    fn provide_typed(
        &self,
        _injector: &Injector,
        _request_info: &RequestInfo,
    ) -> InjectResult<Svc<Self::Result>> {
        Ok(self.result.clone())
    }
}

impl<R: Service> From<R> for ConstantProvider<R> {
    fn from(value: R) -> Self {
        constant(value)
    }
}

/// Create a service from a constant value. While the service itself will never
/// be exposed through a mutable reference, if it supports interior mutability,
/// its fields still can be mutated. Since the provider created with this
/// function doesn't recreate the value each time it's requested, state can be
/// stored in this manner.
///
/// # Example
///
/// ```
/// use generic_injector::{constant, Injector, Svc};
///
/// let mut builder = Injector::builder();
/// builder.provide(constant(8i32));
///
/// let injector = builder.build();
/// let value: Svc<i32> = injector.get().unwrap();
///
/// assert_eq!(8, *value);
/// ```
pub fn constant<R: Service>(value: R) -> ConstantProvider<R> {
    ConstantProvider::new(value)
}
