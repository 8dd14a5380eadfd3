use std::future::Future;

use studio_models::contact::ContactInquiry;
use thiserror::Error;

/// Hands a validated inquiry over to whoever answers it.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactTransport: Send + Sync + 'static {
    fn deliver(
        &self,
        inquiry: ContactInquiry,
    ) -> impl Future<Output = Result<(), ContactDeliverError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactDeliverError {
    #[error("The inquiry was rejected.")]
    Rejected,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactTransport {
    pub fn with_deliver(mut self, inquiry: ContactInquiry, result: bool) -> Self {
        self.expect_deliver()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(move |_| {
                Box::pin(std::future::ready(if result {
                    Ok(())
                } else {
                    Err(ContactDeliverError::Rejected)
                }))
            });
        self
    }
}
